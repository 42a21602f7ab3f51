//! Command line argument parsing for the Cadenza CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Cadenza - a phonetic rhyming dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "cadenza")]
#[command(about = "A phonetic rhyming dictionary for the command line")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CadenzaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Dictionary file in CMU format (defaults to the bundled excerpt)
    #[arg(short = 'd', long = "dict", value_name = "DICT_FILE", env = "CADENZA_DICT")]
    pub dict_file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CadenzaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the pronunciations of a word
    Pronounce(WordArgs),

    /// Count the syllables of a word
    Syllables(WordArgs),

    /// List dictionary words that rhyme with a word
    Rhyme(ScanArgs),

    /// List dictionary words that alliterate with a word
    Alliteration(ScanArgs),

    /// Check whether two words rhyme
    Check(CheckArgs),

    /// Find all rhyming pairs among a list of words
    Pairs(PairsArgs),
}

/// Arguments for single-word queries
#[derive(Parser, Debug, Clone)]
pub struct WordArgs {
    /// The word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for full-dictionary scans
#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    /// The word to match against
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of matches to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for pairwise rhyme checks
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// First word
    #[arg(value_name = "WORD1")]
    pub word1: String,

    /// Second word
    #[arg(value_name = "WORD2")]
    pub word2: String,

    /// Widen the matched region by this many tokens (sloppy rhyme)
    #[arg(long, default_value = "0")]
    pub fuzz: usize,

    /// Compare last phonetic groups instead of full rhyming regions
    #[arg(long)]
    pub last_group: bool,
}

/// Arguments for batch rhyme finding
#[derive(Parser, Debug, Clone)]
pub struct PairsArgs {
    /// Words to pair up
    #[arg(value_name = "WORD", required = true, num_args = 2..)]
    pub words: Vec<String>,
}
