use clap::{Args, Parser, Subcommand};
use resnear::engine::config::CandidateStrategy;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan",
    version,
    about = "resnear CLI - Find the residues that interact with a target residue type in molecular structures.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to search structures in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find residues within a cutoff distance of every occurrence of a target residue type.
    Find(FindArgs),
    /// Summarize the residue groups of a structure.
    Inspect(InspectArgs),
}

/// Arguments for the `find` subcommand.
#[derive(Args, Debug)]
pub struct FindArgs {
    /// One or more structure files (decoded JSON arrays) to search.
    #[arg(short, long = "input", required = true, num_args = 1.., value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// Path for the CSV output. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Residue type to search around (e.g., 'HEM'), overriding the config file.
    #[arg(short, long = "group", value_name = "NAME")]
    pub group_name: Option<String>,

    /// Cutoff distance in Angstroms, overriding the config file.
    #[arg(short = 'd', long = "cutoff", value_name = "FLOAT")]
    pub cutoff_distance: Option<f64>,

    /// Candidate pruning strategy: 'linear-scan' or 'kd-tree'.
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<CandidateStrategy>,

    /// Skip structures that fail validation instead of aborting.
    #[arg(long)]
    pub keep_going: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S cutoff-distance=4.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Structure file (decoded JSON arrays) to summarize.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}
