//! Command line argument parsing for the Fumble CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::checkpoint::resume::DEFAULT_EXPERIMENT;
use crate::checkpoint::scan::{DEFAULT_ROOT, ModelType};

/// Fumble - typo augmentation and corpus helpers for NLP experiments
#[derive(Parser, Debug, Clone)]
#[command(name = "fumble")]
#[command(about = "Keyboard-typo augmentation, corpus statistics, and checkpoint helpers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FumbleArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FumbleArgs {
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

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Inject keyboard typos into sentences or JSONL records
    Augment(AugmentArgs),

    /// Report raw and tokenized statistics for parallel NL/SQL files
    Stats(StatsArgs),

    /// List training checkpoints
    Checkpoints(CheckpointsArgs),

    /// Show how to resume training from a checkpoint
    Resume(ResumeArgs),
}

/// Arguments for typo augmentation
#[derive(Parser, Debug, Clone)]
pub struct AugmentArgs {
    /// Input file (plain text or JSONL)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Input format
    #[arg(long, default_value = "text")]
    pub input_format: InputFormat,

    /// JSON config file with typo settings
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Record field holding the sentence (JSONL input)
    #[arg(long)]
    pub field: Option<String>,

    /// Chance that a word is a mutation candidate
    #[arg(long, env = "FUMBLE_WORD_PROBABILITY")]
    pub word_probability: Option<f64>,

    /// Chance that an eligible character in a candidate word is replaced
    #[arg(long, env = "FUMBLE_CHAR_PROBABILITY")]
    pub char_probability: Option<f64>,

    /// Seed for the random generator
    #[arg(short, long, env = "FUMBLE_SEED")]
    pub seed: Option<u64>,

    /// Lower-case text before injecting typos
    #[arg(long)]
    pub lowercase: bool,
}

/// Input formats for augmentation
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// One sentence per line
    Text,
    /// One JSON object per line
    Jsonl,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Directory holding <split>.nl and <split>.sql
    #[arg(short, long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Splits to report (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "train,dev")]
    pub splits: Vec<String>,

    /// HuggingFace tokenizer.json for tokenized statistics (byte-level otherwise)
    #[arg(short, long, value_name = "TOKENIZER_FILE")]
    pub tokenizer: Option<PathBuf>,
}

/// Arguments for listing checkpoints
#[derive(Parser, Debug, Clone)]
pub struct CheckpointsArgs {
    /// Checkpoint root directory
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,
}

/// Arguments for resuming training
#[derive(Parser, Debug, Clone)]
pub struct ResumeArgs {
    /// Name of the experiment to resume
    #[arg(short, long, default_value = DEFAULT_EXPERIMENT)]
    pub experiment_name: String,

    /// Model type (ft for finetune, scr for scratch)
    #[arg(short, long, default_value = "ft")]
    pub model_type: ModelType,

    /// Checkpoint root directory
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// List available checkpoints instead
    #[arg(short, long)]
    pub list_checkpoints: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
