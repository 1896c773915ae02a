use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wobble::core::tables::registry::STANDARD_TABLE_ID;
use wobble::engine::config::TiePolicy;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "wobble - find the degenerate codon that encodes a set of amino acids with the fewest off-target amino acids.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel search.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the codon choice with the smallest set of off-target amino acids.
    OffTargets(OffTargetsArgs),
    /// Merge codons into one degenerate codon and list every amino acid it encodes.
    Expand(ExpandArgs),
    /// List the supported NCBI genetic-code tables.
    Tables,
}

/// Arguments for the `off-targets` subcommand.
#[derive(Args, Debug)]
pub struct OffTargetsArgs {
    /// Target amino acids as one-letter symbols, e.g. `KT` or `K T` (`*` for stop).
    #[arg(required = true, value_name = "AAS", num_args = 1..)]
    pub amino_acids: Vec<String>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// NCBI genetic-code table identifier, overriding the config file.
    #[arg(short, long, value_name = "ID")]
    pub table: Option<u8>,

    /// Which minimal combinations to report: `first` or `all`.
    #[arg(long, value_name = "POLICY")]
    pub ties: Option<TiePolicy>,

    /// Override `search.parallel` from the config file.
    #[command(flatten)]
    pub execution: Execution,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S search.ties=all
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Mutually exclusive flags selecting sequential or parallel evaluation.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct Execution {
    /// Evaluate combinations on the thread pool.
    #[arg(long)]
    pub parallel: bool,
    /// Evaluate combinations on the calling thread only.
    #[arg(long)]
    pub sequential: bool,
}

impl Execution {
    pub fn requested(&self) -> Option<bool> {
        match (self.parallel, self.sequential) {
            (true, false) => Some(true),
            (false, true) => Some(false),
            _ => None,
        }
    }
}

/// Arguments for the `expand` subcommand.
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Codons to merge, e.g. `CCG AAG`.
    #[arg(required = true, value_name = "CODONS", num_args = 1..)]
    pub codons: Vec<String>,

    /// NCBI genetic-code table identifier.
    #[arg(short, long, value_name = "ID", default_value_t = STANDARD_TABLE_ID)]
    pub table: u8,
}
