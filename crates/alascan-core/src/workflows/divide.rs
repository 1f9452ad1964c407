use crate::core::io::pdb::{ChainBlock, PdbError, PdbModels};
use crate::core::io::traits::ScanFile;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Splits `pdb_path` into one file per model and chain, written beside it.
///
/// Returns the written paths in model, then chain order.
#[instrument(skip_all, name = "divide_workflow", fields(pdb = %pdb_path.display()))]
pub fn run(pdb_path: &Path, reporter: &ProgressReporter) -> Result<Vec<PathBuf>, EngineError> {
    let structure = PdbModels::read_from_path(pdb_path).map_err(|source| match source {
        PdbError::Io(e) => EngineError::io(pdb_path, e),
        source => EngineError::Pdb {
            path: pdb_path.to_path_buf(),
            source,
        },
    })?;

    if structure.models.is_empty() {
        warn!("No ATOM records found; nothing to write.");
    }

    let multi_model = structure.is_multi_model();
    let mut written = Vec::new();
    for (index, model) in structure.models.iter().enumerate() {
        let model_number = multi_model.then_some(index + 1);
        for block in model {
            let out_path = chain_file_path(pdb_path, model_number, block.chain);
            write_block(&out_path, block)?;
            reporter.report(Progress::FileDone {
                path: out_path.clone(),
            });
            written.push(out_path);
        }
    }

    info!(models = structure.models.len(), files = written.len(), "PDB file divided.");
    Ok(written)
}

/// `<path without extension>[_M<NN>]_Ch<chain>.pdb`
pub fn chain_file_path(pdb_path: &Path, model_number: Option<usize>, chain: char) -> PathBuf {
    let mut name = pdb_path.with_extension("").into_os_string();
    if let Some(number) = model_number {
        name.push(format!("_M{:02}", number));
    }
    name.push(format!("_Ch{}.pdb", chain));
    PathBuf::from(name)
}

fn write_block(path: &Path, block: &ChainBlock) -> Result<(), EngineError> {
    let file = File::create(path).map_err(|e| EngineError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    block
        .write_to(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| EngineError::io(path, e))
}
