use alascan::engine::config::ConfigError;
use alascan::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

pub const EXIT_ARGUMENT: i32 = 1;
pub const EXIT_IO: i32 = 2;
pub const EXIT_PARSE: i32 = 3;
pub const EXIT_ALIGNMENT: i32 = 4;
pub const EXIT_NO_RESULTS: i32 = 5;
pub const EXIT_CONFIG: i32 = 6;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine(e) => match e {
                EngineError::Io { .. } | EngineError::ExportOutput(_) => EXIT_IO,
                EngineError::ResultFile { .. }
                | EngineError::Summary { .. }
                | EngineError::Pdb { .. }
                | EngineError::Export { .. } => EXIT_PARSE,
                EngineError::Alignment { .. } => EXIT_ALIGNMENT,
                EngineError::NoUsableResults(_) => EXIT_NO_RESULTS,
            },
            CliError::Config(_) | CliError::FileParsing { .. } => EXIT_CONFIG,
            CliError::Io(_) => EXIT_IO,
            CliError::Other(_) => EXIT_ARGUMENT,
        }
    }
}
