//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline: a
//! tokenizer produces a [`TokenStream`], filters rewrite it, and callers
//! collect or rejoin the result.
//!
//! # Examples
//!
//! ```
//! use fumble::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// Offsets are byte offsets into the text the tokenizer saw. Filters that
/// rewrite `text` keep the offsets of the original span.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the token text, keeping position and offsets.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A stream of tokens, as produced by tokenizers and consumed by filters.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// Rejoin a token stream with single spaces.
///
/// This is the inverse of whitespace tokenization up to spacing: runs of
/// whitespace, tabs, and leading or trailing blanks all collapse.
pub fn join_tokens(tokens: TokenStream) -> String {
    tokens.map(|t| t.text).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_text_keeps_offsets() {
        let token = Token::with_offsets("Hello", 0, 0, 5).with_text("hello");
        assert_eq!(token.text, "hello");
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 5);
    }

    #[test]
    fn test_join_tokens() {
        let tokens = vec![Token::new("a", 0), Token::new("b", 1), Token::new("c", 2)];
        assert_eq!(join_tokens(Box::new(tokens.into_iter())), "a b c");
        assert_eq!(join_tokens(Box::new(std::iter::empty())), "");
    }
}
