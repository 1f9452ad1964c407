use super::aggregate::AlignmentError;
use crate::core::io::bals::BalsError;
use crate::core::io::export::ExportError;
use crate::core::io::pdb::PdbError;
use crate::core::io::summary::SummaryError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid result file '{path}': {source}")]
    ResultFile {
        path: PathBuf,
        #[source]
        source: BalsError,
    },

    #[error("Invalid summary table '{path}': {source}")]
    Summary {
        path: PathBuf,
        #[source]
        source: SummaryError,
    },

    #[error("Invalid PDB file '{path}': {source}")]
    Pdb {
        path: PathBuf,
        #[source]
        source: PdbError,
    },

    #[error("Cannot export '{path}': {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: ExportError,
    },

    #[error("Cannot write the export table: {0}")]
    ExportOutput(#[source] ExportError),

    #[error("Residues of '{path}' do not line up with the first model: {source}")]
    Alignment {
        path: PathBuf,
        #[source]
        source: AlignmentError,
    },

    #[error("None of the {0} listed result files could be used")]
    NoUsableResults(usize),
}

impl EngineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EngineError::Io {
            path: path.into(),
            source,
        }
    }
}
