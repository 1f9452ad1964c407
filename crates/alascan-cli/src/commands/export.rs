use super::{open_output, output_name};
use crate::cli::ExportArgs;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use alascan::engine::error::EngineError;
use alascan::engine::progress::ProgressReporter;
use alascan::workflows;
use std::io::Write;
use tracing::info;

pub fn run(args: ExportArgs) -> Result<()> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    // The destination is only opened once every listed file has been read.
    let mut table: Vec<u8> = Vec::new();
    let rows = workflows::export::run(&args.list, &mut table, &reporter)?;

    let output = args.output.as_deref();
    let write_err = |e| EngineError::io(output_name(output), e);
    let mut writer = open_output(output)?;
    writer.write_all(&table).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    info!("Exported {} residue row(s) to {}.", rows, output_name(output));
    Ok(())
}
