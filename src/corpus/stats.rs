//! Raw and tokenized corpus statistics.
//!
//! Raw statistics count whitespace-delimited words; tokenized statistics
//! count the ids a [`TokenEncoder`] produces. Both report per-side mean
//! length and vocabulary size (distinct words or distinct ids).

use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::whitespace::{WhitespaceTokenizer, split_words};
use crate::corpus::encoder::TokenEncoder;
use crate::corpus::loader::{ParallelCorpus, load_parallel};
use crate::error::Result;

/// Statistics before preprocessing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawStats {
    pub num_examples: usize,
    pub mean_nl_length: f64,
    pub mean_sql_length: f64,
    pub nl_vocab_size: usize,
    pub sql_vocab_size: usize,
}

/// Statistics after encoding with a tokenizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenizedStats {
    pub mean_nl_length: f64,
    pub mean_sql_length: f64,
    pub nl_vocab_size: usize,
    pub sql_vocab_size: usize,
}

/// Arithmetic mean; zero for an empty slice.
fn mean(lengths: &[usize]) -> f64 {
    if lengths.is_empty() {
        0.0
    } else {
        lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
    }
}

fn vocab_size<T, I>(units: I) -> usize
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    units.into_iter().collect::<HashSet<T>>().len()
}

fn word_side(lines: &[String]) -> (f64, usize) {
    let lengths: Vec<usize> = lines.iter().map(|l| WhitespaceTokenizer::count(l)).collect();
    let vocab = vocab_size(lines.iter().flat_map(|l| split_words(l)));
    (mean(&lengths), vocab)
}

fn token_side(lines: &[String], encoder: &dyn TokenEncoder) -> Result<(f64, usize)> {
    let encoded = lines
        .iter()
        .map(|l| encoder.encode(l))
        .collect::<Result<Vec<_>>>()?;
    let lengths: Vec<usize> = encoded.iter().map(Vec::len).collect();
    let vocab = vocab_size(encoded.iter().flatten().copied());
    Ok((mean(&lengths), vocab))
}

/// Compute word-level statistics.
pub fn compute_raw_stats(corpus: &ParallelCorpus) -> RawStats {
    let (mean_nl_length, nl_vocab_size) = word_side(&corpus.nl);
    let (mean_sql_length, sql_vocab_size) = word_side(&corpus.sql);

    RawStats {
        num_examples: corpus.nl.len(),
        mean_nl_length,
        mean_sql_length,
        nl_vocab_size,
        sql_vocab_size,
    }
}

/// Compute token-level statistics with `encoder`.
pub fn compute_tokenized_stats(
    corpus: &ParallelCorpus,
    encoder: &dyn TokenEncoder,
) -> Result<TokenizedStats> {
    let (mean_nl_length, nl_vocab_size) = token_side(&corpus.nl, encoder)?;
    let (mean_sql_length, sql_vocab_size) = token_side(&corpus.sql, encoder)?;

    Ok(TokenizedStats {
        mean_nl_length,
        mean_sql_length,
        nl_vocab_size,
        sql_vocab_size,
    })
}

/// Statistics for one data split.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitReport {
    pub split: String,
    pub raw: RawStats,
    pub tokenized: TokenizedStats,
}

/// Statistics for every split that could be loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    pub data_dir: String,
    pub encoder: String,
    pub splits: Vec<SplitReport>,
    /// Splits skipped because a file was absent.
    pub missing: Vec<String>,
}

fn split_paths(data_dir: &Path, split: &str) -> (PathBuf, PathBuf) {
    (
        data_dir.join(format!("{split}.nl")),
        data_dir.join(format!("{split}.sql")),
    )
}

/// Build statistics for `<data_dir>/<split>.nl` and `<data_dir>/<split>.sql`.
///
/// A split with a missing file is recorded in `missing` and skipped.
pub fn corpus_report<P: AsRef<Path>>(
    data_dir: P,
    splits: &[String],
    encoder: &dyn TokenEncoder,
) -> Result<CorpusReport> {
    let data_dir = data_dir.as_ref();
    let mut report = CorpusReport {
        data_dir: data_dir.display().to_string(),
        encoder: encoder.name().to_string(),
        splits: Vec::with_capacity(splits.len()),
        missing: Vec::new(),
    };

    for split in splits {
        let (nl_path, sql_path) = split_paths(data_dir, split);
        if let Some(absent) = [&nl_path, &sql_path].into_iter().find(|p| !p.exists()) {
            log::warn!("skipping split {split}: {} not found", absent.display());
            report.missing.push(split.clone());
            continue;
        }

        let corpus = load_parallel(&nl_path, &sql_path)?;
        let raw = compute_raw_stats(&corpus);
        let tokenized = compute_tokenized_stats(&corpus, encoder)?;
        log::info!("{split}: {} examples", raw.num_examples);

        report.splits.push(SplitReport {
            split: split.clone(),
            raw,
            tokenized,
        });
    }

    Ok(report)
}
