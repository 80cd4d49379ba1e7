//! Command implementations for the Fumble CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::typo::TypoFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::augment::config::AugmentConfig;
use crate::augment::jsonl::{read_records, read_text_lines, write_records, write_text};
use crate::augment::record::{AnalyzerTransform, Record, RecordTransform};
use crate::checkpoint::resume::plan_resume;
use crate::checkpoint::scan::list_checkpoints;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::encoder::{ByteEncoder, TokenEncoder};
use crate::corpus::stats::corpus_report;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: FumbleArgs) -> Result<()> {
    match &args.command {
        Command::Augment(augment_args) => augment(augment_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
        Command::Checkpoints(checkpoint_args) => list_checkpoint_dirs(&checkpoint_args.root, &args),
        Command::Resume(resume_args) => resume(resume_args, &args),
    }
}

/// Merge config file, environment, and flags; flags win.
pub fn resolve_augment_config(args: &AugmentArgs) -> Result<AugmentConfig> {
    let mut config = match &args.config {
        Some(path) => AugmentConfig::from_file(path)?,
        None => AugmentConfig::default(),
    };

    if let Some(p) = args.word_probability {
        config.typo.word_probability = p;
    }
    if let Some(p) = args.char_probability {
        config.typo.char_probability = p;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(field) = &args.field {
        config.field = field.clone();
    }
    config.lowercase |= args.lowercase;

    config.typo.validate()?;
    Ok(config)
}

/// Inject typos into every record of the input.
fn augment(args: &AugmentArgs, cli_args: &FumbleArgs) -> Result<()> {
    let config = resolve_augment_config(args)?;
    log::info!(
        "augmenting {} (word={}, char={}, seed={})",
        args.input.display(),
        config.typo.word_probability,
        config.typo.char_probability,
        config.seed
    );

    let start_time = Instant::now();
    let records = match args.input_format {
        InputFormat::Text => read_text_lines(&args.input)?,
        InputFormat::Jsonl => read_records(&args.input)?,
    };

    let typo = Arc::new(TypoFilter::seeded(config.typo, config.seed));
    let mut analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
    if config.lowercase {
        analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
    }
    let analyzer = analyzer.add_filter(Arc::clone(&typo) as Arc<dyn Filter>);
    let mut transform = AnalyzerTransform::for_field(Arc::new(analyzer), config.field.clone());

    let augmented = records
        .into_iter()
        .map(|record| transform.apply(record))
        .collect::<Result<Vec<Record>>>()?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            write_augmented(BufWriter::new(file), &augmented, args.input_format, &config.field)?;
        }
        None => write_augmented(io::stdout().lock(), &augmented, args.input_format, &config.field)?,
    }

    let summary = AugmentSummary::new(
        &args.input,
        args.output.as_deref(),
        augmented.len(),
        &config,
        &typo.stats(),
        start_time.elapsed(),
    );

    if args.output.is_some() {
        output_result("Augmentation complete", &summary, cli_args)?;
    } else {
        // stdout carries the data; keep the summary out of it
        log::info!(
            "{} records, {} of {} words changed",
            summary.records,
            summary.words_changed,
            summary.words_seen
        );
    }

    Ok(())
}

fn write_augmented<W: Write>(
    writer: W,
    records: &[Record],
    format: InputFormat,
    field: &str,
) -> Result<()> {
    match format {
        InputFormat::Text => write_text(writer, records, field),
        InputFormat::Jsonl => write_records(writer, records),
    }
}

fn load_encoder(path: Option<&Path>) -> Result<Box<dyn TokenEncoder>> {
    match path {
        None => Ok(Box::new(ByteEncoder::new())),
        #[cfg(feature = "hf-tokenizers")]
        Some(path) => Ok(Box::new(crate::corpus::encoder::HfTokenEncoder::from_file(path)?)),
        #[cfg(not(feature = "hf-tokenizers"))]
        Some(path) => Err(crate::error::FumbleError::tokenizer(format!(
            "cannot load {}: built without the hf-tokenizers feature",
            path.display()
        ))),
    }
}

/// Report corpus statistics.
fn show_stats(args: &StatsArgs, cli_args: &FumbleArgs) -> Result<()> {
    let encoder = load_encoder(args.tokenizer.as_deref())?;
    log::debug!("using encoder {}", encoder.name());

    let report = corpus_report(&args.data_dir, &args.splits, encoder.as_ref())?;
    if report.splits.is_empty() {
        log::warn!("no split could be loaded from {}", args.data_dir.display());
    }

    output_result("Corpus statistics", &report, cli_args)
}

/// List checkpoints under a root directory.
fn list_checkpoint_dirs(root: &Path, cli_args: &FumbleArgs) -> Result<()> {
    let listing = list_checkpoints(root)?;
    output_result("Checkpoint listing", &listing, cli_args)
}

/// Plan resuming an experiment.
fn resume(args: &ResumeArgs, cli_args: &FumbleArgs) -> Result<()> {
    if args.list_checkpoints {
        return list_checkpoint_dirs(&args.root, cli_args);
    }

    let plan = plan_resume(&args.root, args.model_type, &args.experiment_name);
    if !plan.is_ready() {
        log::warn!("experiment {} cannot be resumed", args.experiment_name);
    }
    output_result("Resume plan", &plan, cli_args)
}
