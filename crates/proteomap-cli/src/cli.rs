use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Proteomap Developers",
    version,
    about = "Proteomap - Amino-acid composition and physicochemical profiling of proteome datasets.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Categorize proteins, profile their composition and write tables and figures.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Path to the proteome JSON export (a top-level `results` array).
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Directory that receives the CSV tables and SVG figures.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Lower bound on the proteome-wide frequency used when computing enrichment.
    #[arg(long, value_name = "FLOAT")]
    pub enrichment_floor: Option<f64>,

    /// Write the tables only, skipping every figure.
    #[arg(long)]
    pub no_figures: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S analysis.enrichment-floor=1e-4
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_arguments_are_parsed() {
        let cli = Cli::try_parse_from([
            "proteomap",
            "-vv",
            "analyze",
            "-i",
            "sars.json",
            "-o",
            "out",
            "--enrichment-floor",
            "1e-4",
            "--no-figures",
            "-S",
            "output.render-figures=true",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Analyze(args) = cli.command;
        assert_eq!(args.input, Some(PathBuf::from("sars.json")));
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert_eq!(args.enrichment_floor, Some(1e-4));
        assert!(args.no_figures);
        assert_eq!(args.set_values, vec!["output.render-figures=true"]);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["proteomap", "-q", "-v", "analyze"]);
        assert!(result.is_err());
    }
}
