//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Whether `c` separates words.
///
/// Unicode white space plus the ASCII information separators
/// U+001C..=U+001F, which dataset text treats as breaks too.
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split `text` into words, skipping empty pieces between separators.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_separator).filter(|word| !word.is_empty())
}

/// A tokenizer that splits text on [`is_word_separator`].
///
/// Runs of separators produce no empty tokens, so the token count is the
/// same as [`split_words`] gives.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Count whitespace-delimited words without building tokens.
    pub fn count(text: &str) -> usize {
        split_words(text).count()
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (offset, ch) in text.char_indices() {
            match (is_word_separator(ch), start) {
                (true, Some(s)) => {
                    tokens.push(Token::with_offsets(&text[s..offset], tokens.len(), s, offset));
                    start = None;
                }
                (false, None) => start = Some(offset),
                _ => {}
            }
        }
        if let Some(s) = start {
            tokens.push(Token::with_offsets(&text[s..], tokens.len(), s, text.len()));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_offsets_with_repeated_words() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize(" to be or not to be ").unwrap().collect();

        assert_eq!(tokens.len(), 6);
        assert_eq!((tokens[4].start_offset, tokens[4].end_offset), (14, 16));
        assert_eq!((tokens[5].start_offset, tokens[5].end_offset), (17, 19));
    }

    #[test]
    fn test_non_ascii_whitespace() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("café\u{3000}naïve").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "café");
        assert_eq!(tokens[1].text, "naïve");
    }

    #[test]
    fn test_information_separators_split_words() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("a\u{1f}b\u{1c}c").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!((tokens[1].text.as_str(), tokens[1].start_offset), ("b", 2));
        assert_eq!(split_words("a\u{1f}b").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(WhitespaceTokenizer::count("\u{1d}x\u{1e}"), 1);
        assert!(!is_word_separator('\u{1b}'));
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize(" \t\n").unwrap().count(), 0);
        assert_eq!(WhitespaceTokenizer::count("  a b  "), 2);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
