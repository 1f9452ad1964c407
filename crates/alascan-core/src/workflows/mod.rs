//! # Workflows Module
//!
//! End-to-end procedures built on top of [`crate::core`] and [`crate::engine`].
//! Each workflow owns its file access and turns every failure into an
//! [`EngineError`](crate::engine::error::EngineError) carrying the offending path.
//!
//! - [`summarize`] averages per-model result files and computes the ddG SD.
//! - [`colour`] writes a Chimera script that paints residues by ddG and SD.
//! - [`divide`] splits a PDB file into one file per model and chain.
//! - [`export`] flattens result files into one tab-separated table.

pub mod colour;
pub mod divide;
pub mod export;
pub mod summarize;

use crate::core::io::list::ResultList;
use crate::core::io::traits::ScanFile;
use crate::engine::error::EngineError;
use std::path::{Path, PathBuf};

/// Reads the result-file paths listed in `list_path`.
pub fn read_result_list(list_path: &Path) -> Result<Vec<PathBuf>, EngineError> {
    ResultList::read_from_path(list_path)
        .map(|list| list.paths)
        .map_err(|e| EngineError::io(list_path, e))
}
