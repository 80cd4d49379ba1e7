//! Text analysis: tokenization and token filtering.
//!
//! A [`analyzer::PipelineAnalyzer`] runs a [`tokenizer::Tokenizer`] and then a
//! chain of [`token_filter::Filter`]s over the resulting token stream.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
