use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "alascan",
    author,
    version,
    about = "Alascan CLI - Post-processing of computational alanine-scanning results: model averaging, ddG standard deviation and structure colouring scripts.",
    help_template = HELP_TEMPLATE,
    disable_help_flag = true,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub help: HelpFlag,
}

/// `-h`, `-H` and `--help` all print the help text.
#[derive(Args, Debug, Clone, Copy)]
pub struct HelpFlag {
    /// Print help
    #[arg(short = 'h', short_alias = 'H', long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Average the per-model result files of a scan and add the ddG standard deviation.
    #[command(disable_help_flag = true)]
    Summarize(SummarizeArgs),
    /// Write a Chimera script colouring residues by averaged ddG and by SD.
    #[command(disable_help_flag = true, visible_alias = "color")]
    Colour(ColourArgs),
    /// Split PDB files into one file per model and chain.
    #[command(disable_help_flag = true)]
    Divide(DivideArgs),
    /// Flatten result files into one tab-separated table.
    #[command(disable_help_flag = true)]
    Export(ExportArgs),
}

/// Arguments for the `summarize` subcommand.
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// File listing one per-model result file path per line.
    #[arg(value_name = "LIST")]
    pub list: PathBuf,

    /// Write the averaged table here instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub help: HelpFlag,
}

/// Arguments for the `colour` subcommand.
#[derive(Args, Debug)]
pub struct ColourArgs {
    /// Structure the script opens and colours.
    #[arg(short, long, required = true, value_name = "PDB")]
    pub pdb: PathBuf,

    /// Averaged ddG/SD table produced by `summarize`.
    #[arg(short = 'r', long = "results", required = true, value_name = "STATS")]
    pub stats: PathBuf,

    /// Colouring options in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the ddG magnitude below which a residue is left uncoloured.
    #[arg(long, value_name = "FLOAT")]
    pub zero_threshold: Option<f64>,

    /// Directory the script is written to.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Only accept uppercase letters as chain identifiers.
    #[arg(long)]
    pub strict_chain: bool,

    #[command(flatten)]
    pub help: HelpFlag,
}

/// Arguments for the `divide` subcommand.
#[derive(Args, Debug)]
pub struct DivideArgs {
    /// PDB files to split.
    #[arg(value_name = "PDB", required = true, num_args = 1..)]
    pub pdbs: Vec<PathBuf>,

    #[command(flatten)]
    pub help: HelpFlag,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// File listing one result file path per line.
    #[arg(value_name = "LIST")]
    pub list: PathBuf,

    /// Write the table here instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub help: HelpFlag,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn summarize_takes_list_and_optional_output() {
        let cli = Cli::try_parse_from(["alascan", "-v", "summarize", "runs.txt", "-o", "avg.txt"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Summarize(args) => {
                assert_eq!(args.list, PathBuf::from("runs.txt"));
                assert_eq!(args.output, Some(PathBuf::from("avg.txt")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn colour_requires_pdb_and_results() {
        let err = Cli::try_parse_from(["alascan", "colour", "-p", "x.pdb"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from([
            "alascan", "color", "-p", "x.pdb", "-r", "x.sum", "--zero-threshold", "0.01", "--strict-chain",
        ])
        .unwrap();
        match cli.command {
            Commands::Colour(args) => {
                assert_eq!(args.pdb, PathBuf::from("x.pdb"));
                assert_eq!(args.stats, PathBuf::from("x.sum"));
                assert_eq!(args.zero_threshold, Some(0.01));
                assert_eq!(args.output_dir, PathBuf::from("."));
                assert!(args.strict_chain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn every_help_spelling_displays_help() {
        for flag in ["-h", "-H", "--help"] {
            let err = Cli::try_parse_from(["alascan", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp, "top-level {flag}");
            let err = Cli::try_parse_from(["alascan", "summarize", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp, "summarize {flag}");
        }
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["alascan", "colour", "-p", "a", "-r", "b", "-x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn divide_needs_at_least_one_file() {
        let err = Cli::try_parse_from(["alascan", "divide"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
