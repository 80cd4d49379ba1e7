//! Output formatting for CLI commands.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::augment::config::AugmentConfig;
use crate::augment::typo::PerturbStats;
use crate::checkpoint::resume::ResumePlan;
use crate::checkpoint::scan::CheckpointListing;
use crate::cli::args::{FumbleArgs, OutputFormat};
use crate::corpus::stats::CorpusReport;
use crate::error::Result;

/// Result structure for augmentation runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct AugmentSummary {
    pub input: String,
    pub output: Option<String>,
    pub records: usize,
    pub seed: u64,
    pub word_probability: f64,
    pub char_probability: f64,
    pub words_seen: usize,
    pub words_selected: usize,
    pub words_changed: usize,
    pub chars_substituted: usize,
    pub duration_ms: u64,
}

impl AugmentSummary {
    /// Summarise a finished run from its settings and typo counters.
    pub fn new(
        input: &Path,
        output: Option<&Path>,
        records: usize,
        config: &AugmentConfig,
        stats: &PerturbStats,
        elapsed: Duration,
    ) -> Self {
        AugmentSummary {
            input: input.display().to_string(),
            output: output.map(|p| p.display().to_string()),
            records,
            seed: config.seed,
            word_probability: config.typo.word_probability,
            char_probability: config.typo.char_probability,
            words_seen: stats.words_seen,
            words_selected: stats.words_selected,
            words_changed: stats.words_changed,
            chars_substituted: stats.chars_substituted,
            duration_ms: elapsed.as_millis() as u64,
        }
    }
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn print_human(&self, args: &FumbleArgs);
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &FumbleArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 && !message.is_empty() {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &FumbleArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanOutput for AugmentSummary {
    fn print_human(&self, _args: &FumbleArgs) {
        println!("Augmentation Summary:");
        println!("═════════════════════");
        println!("Input: {}", self.input);
        if let Some(output) = &self.output {
            println!("Output: {output}");
        }
        println!("Records: {}", self.records);
        println!(
            "Probabilities: word={} char={} (seed {})",
            self.word_probability, self.char_probability, self.seed
        );
        println!(
            "Words: {} seen, {} selected, {} changed",
            self.words_seen, self.words_selected, self.words_changed
        );
        println!("Characters substituted: {}", self.chars_substituted);
        println!("Time: {}ms", self.duration_ms);
    }
}

fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

fn split_title(split: &str) -> String {
    let mut chars = split.chars();
    match chars.next() {
        Some(first) => format!("{}{} Set:", first.to_uppercase(), chars.as_str()),
        None => "Set:".to_string(),
    }
}

impl HumanOutput for CorpusReport {
    fn print_human(&self, _args: &FumbleArgs) {
        banner("TABLE 1: Statistics Before Preprocessing");
        for split in &self.splits {
            let raw = &split.raw;
            println!();
            println!("{}", split_title(&split.split));
            println!("  Number of examples: {}", raw.num_examples);
            println!("  Mean sentence length: {:.2} words", raw.mean_nl_length);
            println!("  Mean SQL query length: {:.2} words", raw.mean_sql_length);
            println!("  Vocabulary size (NL): {}", raw.nl_vocab_size);
            println!("  Vocabulary size (SQL): {}", raw.sql_vocab_size);
        }

        println!();
        banner("TABLE 2: Statistics After Preprocessing");
        println!("Encoder: {}", self.encoder);
        for split in &self.splits {
            let tok = &split.tokenized;
            println!();
            println!("{}", split_title(&split.split));
            println!("  Mean sentence length: {:.2} tokens", tok.mean_nl_length);
            println!("  Mean SQL query length: {:.2} tokens", tok.mean_sql_length);
            println!("  Vocabulary size (NL): {}", tok.nl_vocab_size);
            println!("  Vocabulary size (SQL): {}", tok.sql_vocab_size);
        }

        for split in &self.missing {
            println!();
            println!("Skipped {split}: data files not found in {}", self.data_dir);
        }
        println!();
        println!("{}", "=".repeat(60));
    }
}

impl HumanOutput for CheckpointListing {
    fn print_human(&self, _args: &FumbleArgs) {
        if !self.root_exists {
            println!("No checkpoint directory found at {}", self.root);
            return;
        }

        println!("Available checkpoints:");
        for group in self.groups.iter().filter(|g| g.exists) {
            println!();
            println!("{} experiments:", group.model_type.as_str().to_uppercase());
            for exp in &group.experiments {
                println!("  - {} ({})", exp.name, exp.markers().join(", "));
            }
        }
    }
}

impl HumanOutput for ResumePlan {
    fn print_human(&self, _args: &FumbleArgs) {
        match self {
            ResumePlan::NotFound { path } => {
                println!("Checkpoint not found: {path}");
                println!("Use --list-checkpoints to see available checkpoints");
            }
            ResumePlan::MissingState { path } => {
                println!("No training state found in {path}");
                println!("Cannot resume training without training_state.pt");
            }
            ResumePlan::Ready {
                command,
                auto_resume_command,
                ..
            } => {
                println!("Command to resume training:");
                println!("{command}");
                println!();
                println!("Or use auto-resume:");
                println!("{auto_resume_command}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_title() {
        assert_eq!(split_title("train"), "Train Set:");
        assert_eq!(split_title("dev"), "Dev Set:");
        assert_eq!(split_title(""), "Set:");
    }

    #[test]
    fn test_summary_takes_counters_and_settings() {
        let stats = PerturbStats {
            words_seen: 10,
            words_selected: 2,
            words_changed: 1,
            chars_substituted: 1,
        };
        let summary = AugmentSummary::new(
            Path::new("in.txt"),
            None,
            2,
            &AugmentConfig::default(),
            &stats,
            Duration::from_millis(7),
        );

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["words_seen"], 10);
        assert_eq!(value["words_changed"], 1);
        assert_eq!(value["word_probability"], 0.15);
        assert_eq!(value["seed"], 0);
        assert_eq!(value["duration_ms"], 7);
        assert_eq!(value["output"], serde_json::Value::Null);
    }
}
