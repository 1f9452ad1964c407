use crate::cli::DivideArgs;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use alascan::engine::progress::{Progress, ProgressReporter};
use alascan::workflows;
use tracing::info;

pub fn run(args: DivideArgs) -> Result<()> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    reporter.report(Progress::PassStart {
        name: "Dividing PDB files",
        total_files: args.pdbs.len() as u64,
    });
    let mut written = 0;
    for pdb in &args.pdbs {
        info!("Dividing {:?} by model and chain.", pdb);
        let files = workflows::divide::run(pdb, &ProgressReporter::new())?;
        written += files.len();
        for file in &files {
            reporter.report(Progress::Message(format!("wrote {}", file.display())));
        }
        reporter.report(Progress::FileDone { path: pdb.clone() });
    }
    reporter.report(Progress::PassFinish {
        processed: args.pdbs.len(),
    });

    println!(
        "✓ {} PDB file(s) divided into {} file(s).",
        args.pdbs.len(),
        written
    );
    Ok(())
}
