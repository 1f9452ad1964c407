use crate::core::io::export::{ExportError, ExportWriter, RunId, read_rows};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Flattens every result file listed in `list_path` into one table on `output`.
///
/// Returns the number of residue rows written.
#[instrument(skip_all, name = "export_workflow", fields(list = %list_path.display()))]
pub fn run<W: Write>(
    list_path: &Path,
    output: W,
    reporter: &ProgressReporter,
) -> Result<usize, EngineError> {
    let paths = super::read_result_list(list_path)?;
    export_files(&paths, output, reporter)
}

pub fn export_files<W: Write>(
    paths: &[PathBuf],
    output: W,
    reporter: &ProgressReporter,
) -> Result<usize, EngineError> {
    reporter.report(Progress::PassStart {
        name: "Exporting results",
        total_files: paths.len() as u64,
    });

    let mut writer = ExportWriter::new(output).map_err(EngineError::ExportOutput)?;
    let mut total = 0;
    for path in paths {
        let with_path = |source| export_error(path, source);
        let run = RunId::from_path(path).map_err(with_path)?;
        let file = File::open(path).map_err(|e| EngineError::io(path, e))?;
        let rows = read_rows(&run, &mut BufReader::new(file)).map_err(with_path)?;
        writer.write_rows(&rows).map_err(EngineError::ExportOutput)?;
        total += rows.len();
        reporter.report(Progress::FileDone { path: path.clone() });
    }
    writer.finish().map_err(EngineError::ExportOutput)?;

    reporter.report(Progress::PassFinish {
        processed: paths.len(),
    });
    info!(files = paths.len(), rows = total, "Export table written.");
    Ok(total)
}

fn export_error(path: &Path, source: ExportError) -> EngineError {
    match source {
        ExportError::Io(e) => EngineError::io(path, e),
        source => EngineError::Export {
            path: path.to_path_buf(),
            source,
        },
    }
}
