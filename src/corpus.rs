//! Corpus statistics for parallel natural-language / SQL datasets.
//!
//! Each split is a pair of line-aligned files, `<split>.nl` and
//! `<split>.sql`. [`stats::corpus_report`] computes word-level statistics
//! before preprocessing and token-level statistics after encoding.

pub mod encoder;
pub mod loader;
pub mod stats;
