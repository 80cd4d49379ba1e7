//! Analyzer implementations that combine tokenizers and filters.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use fumble::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use fumble::analysis::token_filter::lowercase::LowercaseFilter;
//! use fumble::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()));
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello  WORLD").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].text, "world");
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}

/// A configurable analyzer that combines a tokenizer with a chain of filters.
///
/// Filters run in the order they were added.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.name = format!("{}+{}", self.name, filter.name());
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::join_tokens;
    use crate::analysis::token_filter::lowercase::LowercaseFilter;
    use crate::analysis::token_filter::typo::TypoFilter;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
    use crate::augment::config::TypoConfig;
    use crate::augment::draw::ScriptedDraw;

    #[test]
    fn test_pipeline_order() {
        // Lowercase runs first, so the substituted 'W' comes out lower-case.
        let draw = ScriptedDraw::new([0.0, 0.9, 0.0, 0.9, 0.9, 0.9, 0.9], [0]);
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(TypoFilter::new(TypoConfig::default(), draw)));

        let out = join_tokens(analyzer.analyze("HELLO   World").unwrap());
        assert_eq!(out, "hwllo world");
        assert_eq!(analyzer.name(), "pipeline_whitespace+lowercase+typo");
    }

    #[test]
    fn test_custom_name() {
        let analyzer =
            PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new())).with_name("plain");
        assert_eq!(analyzer.name(), "plain");
        assert_eq!(analyzer.filters().len(), 0);
        assert_eq!(analyzer.tokenizer().name(), "whitespace");
    }
}
