use crate::core::io::chimera::script_path;
use crate::core::io::summary::{SummaryError, SummaryFile};
use crate::engine::colour::build_script;
use crate::engine::config::ColourConfig;
use crate::engine::error::EngineError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Writes the ddG/SD colouring script for `pdb_path` into `output_dir`.
///
/// Returns the path of the written script.
#[instrument(skip_all, name = "colour_workflow", fields(pdb = %pdb_path.display(), stats = %stats_path.display()))]
pub fn run(
    pdb_path: &Path,
    stats_path: &Path,
    config: &ColourConfig,
    output_dir: &Path,
) -> Result<PathBuf, EngineError> {
    let summary = read_summary(stats_path, config)?;
    info!(residues = summary.entries.len(), "Loaded summary table.");

    let pdb_name = pdb_path.display().to_string();
    let script = build_script(
        &summary.entries,
        &pdb_name,
        &stats_path.display().to_string(),
        config,
    );

    let out_path = script_path(output_dir, &pdb_name);
    let file = File::create(&out_path).map_err(|e| EngineError::io(&out_path, e))?;
    let mut writer = BufWriter::new(file);
    script
        .write_to(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| EngineError::io(&out_path, e))?;

    info!(
        script = %out_path.display(),
        positive = script.positive.len(),
        negative = script.negative.len(),
        "Colouring script written."
    );
    Ok(out_path)
}

fn read_summary(stats_path: &Path, config: &ColourConfig) -> Result<SummaryFile, EngineError> {
    let file = File::open(stats_path).map_err(|e| EngineError::io(stats_path, e))?;
    SummaryFile::parse(&mut BufReader::new(file), config.chain_check).map_err(|source| match source {
        SummaryError::Io(e) => EngineError::io(stats_path, e),
        source => EngineError::Summary {
            path: stats_path.to_path_buf(),
            source,
        },
    })
}
