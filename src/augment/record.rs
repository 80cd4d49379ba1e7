//! Record-level transforms.
//!
//! Datasets are mapped record by record. A record is a JSON object whose
//! text field (normally `"text"`) holds the sentence; a transform replaces
//! that field and hands the same record back with every other field intact.
//!
//! [`LowercaseTransform`] and [`TypoTransform`] are the library entry points
//! for mapping a dataset in code: each owns its state directly, so no
//! tokenizer, filter or lock sits between the caller and the [`Perturber`].
//! The `fumble augment` command goes through [`AnalyzerTransform`] instead,
//! which runs a shared analysis pipeline. For the same seed both routes
//! produce the same text.
//!
//! # Examples
//!
//! ```
//! use fumble::augment::config::TypoConfig;
//! use fumble::augment::record::{LowercaseTransform, RecordTransform, TypoTransform, text_record};
//! use fumble::augment::typo::Perturber;
//!
//! let mut lower = LowercaseTransform::new();
//! let mut typo = TypoTransform::new(Perturber::seeded(TypoConfig::new(0.0, 1.0).unwrap(), 0));
//!
//! let record = typo.apply(lower.apply(text_record("Great  Movie")).unwrap()).unwrap();
//! assert_eq!(record["text"], "great movie");
//! assert_eq!(typo.stats().words_seen, 2);
//! ```

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::join_tokens;
use crate::augment::draw::Draw;
use crate::augment::typo::{PerturbStats, Perturber};
use crate::error::{FumbleError, Result};

/// Name of the field transforms read and write by default.
pub const TEXT_FIELD: &str = "text";

/// A dataset record.
pub type Record = Map<String, Value>;

/// Build a record holding only a text field.
pub fn text_record<S: Into<String>>(text: S) -> Record {
    let mut record = Record::new();
    record.insert(TEXT_FIELD.to_string(), Value::String(text.into()));
    record
}

/// Read the string value of `field`.
pub fn text_of<'a>(record: &'a Record, field: &str) -> Result<&'a str> {
    match record.get(field) {
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(FumbleError::field(format!(
            "field \"{field}\" is not a string: {other}"
        ))),
        None => Err(FumbleError::field(format!("record has no \"{field}\" field"))),
    }
}

/// Trait for functions applied to each record of a dataset.
pub trait RecordTransform {
    /// Transform one record, returning it with the text field replaced.
    fn apply(&mut self, record: Record) -> Result<Record>;

    /// Get the name of this transform (for logging).
    fn name(&self) -> &'static str;
}

fn replace_text<F>(mut record: Record, field: &str, f: F) -> Result<Record>
where
    F: FnOnce(&str) -> Result<String>,
{
    let replaced = f(text_of(&record, field)?)?;
    record.insert(field.to_string(), Value::String(replaced));
    Ok(record)
}

/// Lower-cases the text field.
#[derive(Clone, Debug)]
pub struct LowercaseTransform {
    field: String,
}

impl Default for LowercaseTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl LowercaseTransform {
    pub fn new() -> Self {
        Self::for_field(TEXT_FIELD)
    }

    pub fn for_field<S: Into<String>>(field: S) -> Self {
        LowercaseTransform {
            field: field.into(),
        }
    }
}

impl RecordTransform for LowercaseTransform {
    fn apply(&mut self, record: Record) -> Result<Record> {
        replace_text(record, &self.field, |text| Ok(text.to_lowercase()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// Injects keyboard typos into the text field.
#[derive(Clone, Debug)]
pub struct TypoTransform<D> {
    perturber: Perturber<D>,
    field: String,
}

impl<D: Draw> TypoTransform<D> {
    pub fn new(perturber: Perturber<D>) -> Self {
        Self::for_field(perturber, TEXT_FIELD)
    }

    pub fn for_field<S: Into<String>>(perturber: Perturber<D>, field: S) -> Self {
        TypoTransform {
            perturber,
            field: field.into(),
        }
    }

    pub fn stats(&self) -> &PerturbStats {
        self.perturber.stats()
    }
}

impl<D: Draw> RecordTransform for TypoTransform<D> {
    fn apply(&mut self, record: Record) -> Result<Record> {
        let perturber = &mut self.perturber;
        replace_text(record, &self.field, |text| Ok(perturber.perturb(text)))
    }

    fn name(&self) -> &'static str {
        "typo"
    }
}

/// Runs an analyzer over the text field and rejoins the tokens with single
/// spaces.
#[derive(Clone)]
pub struct AnalyzerTransform {
    analyzer: Arc<dyn Analyzer>,
    field: String,
}

impl AnalyzerTransform {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self::for_field(analyzer, TEXT_FIELD)
    }

    pub fn for_field<S: Into<String>>(analyzer: Arc<dyn Analyzer>, field: S) -> Self {
        AnalyzerTransform {
            analyzer,
            field: field.into(),
        }
    }
}

impl std::fmt::Debug for AnalyzerTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerTransform")
            .field("analyzer", &self.analyzer.name())
            .field("field", &self.field)
            .finish()
    }
}

impl RecordTransform for AnalyzerTransform {
    fn apply(&mut self, record: Record) -> Result<Record> {
        let analyzer = &self.analyzer;
        replace_text(record, &self.field, |text| {
            Ok(join_tokens(analyzer.analyze(text)?))
        })
    }

    fn name(&self) -> &'static str {
        "analyzer"
    }
}
