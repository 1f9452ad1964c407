use super::{open_output, output_name};
use crate::cli::SummarizeArgs;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use alascan::engine::error::EngineError;
use alascan::engine::progress::ProgressReporter;
use alascan::workflows;
use std::io::Write;
use tracing::info;

pub fn run(args: SummarizeArgs) -> Result<()> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Averaging result files listed in {:?}", &args.list);
    let summary = workflows::summarize::run(&args.list, &reporter)?;

    let output = args.output.as_deref();
    let write_err = |e| EngineError::io(output_name(output), e);
    let mut writer = open_output(output)?;
    summary.table().write_to(&mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    info!(
        "Averaged {} model(s) over {} residue(s); table written to {}.",
        summary.scan.model_count(),
        summary.scan.residues.len(),
        output_name(output)
    );
    Ok(())
}
