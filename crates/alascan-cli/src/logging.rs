use crate::cli::Cli;
use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{Layer, Registry, filter::LevelFilter, fmt, prelude::*};

/// Where and how much the CLI logs, taken from the global flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogSettings {
    pub verbosity: u8,
    pub quiet: bool,
    pub log_file: Option<PathBuf>,
}

impl From<&Cli> for LogSettings {
    fn from(cli: &Cli) -> Self {
        Self {
            verbosity: cli.verbose,
            quiet: cli.quiet,
            log_file: cli.log_file.clone(),
        }
    }
}

impl LogSettings {
    /// WARN by default so skipped result files are always reported; each `-v`
    /// raises the level by one step and `-q` silences the console.
    pub fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::OFF;
        }
        match self.verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Plain-text layer for `--log-file`: no colours, with targets and thread ids
/// so workflow spans can be told apart.
fn file_layer<S>(file: File) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
}

pub fn setup_logging(settings: &LogSettings) -> Result<()> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let level = settings.level();
    let file = settings
        .log_file
        .as_ref()
        .map(|path| File::create(path).map_err(CliError::Io))
        .transpose()?
        .map(|file| file_layer::<Registry>(file).with_filter(level));

    tracing_subscriber::registry()
        .with(file)
        .with(console.with_filter(level))
        .init();

    Ok(())
}
