//! Token-id encoders for tokenized corpus statistics.
//!
//! Subword tokenizers are external collaborators; the statistics code only
//! sees them through [`TokenEncoder`].

use crate::error::Result;

/// Encodes text into token ids, without special tokens.
pub trait TokenEncoder: Send + Sync {
    fn encode(&self, text: &str) -> Result<Vec<u32>>;

    /// Get the name of this encoder (for reports).
    fn name(&self) -> &str;
}

/// Byte-level encoder: each UTF-8 byte is one token id.
#[derive(Clone, Debug, Default)]
pub struct ByteEncoder;

impl ByteEncoder {
    pub fn new() -> Self {
        ByteEncoder
    }
}

impl TokenEncoder for ByteEncoder {
    fn encode(&self, text: &str) -> Result<Vec<u32>> {
        Ok(text.bytes().map(u32::from).collect())
    }

    fn name(&self) -> &str {
        "bytes"
    }
}

#[cfg(feature = "hf-tokenizers")]
pub use self::hf::HfTokenEncoder;

#[cfg(feature = "hf-tokenizers")]
mod hf {
    use std::path::Path;

    use tokenizers::Tokenizer;

    use super::TokenEncoder;
    use crate::error::{FumbleError, Result};

    /// Encoder backed by a HuggingFace `tokenizer.json`.
    pub struct HfTokenEncoder {
        tokenizer: Tokenizer,
        name: String,
    }

    impl HfTokenEncoder {
        /// Load a tokenizer from a `tokenizer.json` file.
        pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
            let path = path.as_ref();
            let tokenizer = Tokenizer::from_file(path).map_err(|e| {
                FumbleError::tokenizer(format!("loading {}: {e}", path.display()))
            })?;
            Ok(HfTokenEncoder {
                tokenizer,
                name: path.display().to_string(),
            })
        }
    }

    impl TokenEncoder for HfTokenEncoder {
        fn encode(&self, text: &str) -> Result<Vec<u32>> {
            let encoding = self
                .tokenizer
                .encode(text, false)
                .map_err(|e| FumbleError::tokenizer(e.to_string()))?;
            Ok(encoding.get_ids().to_vec())
        }

        fn name(&self) -> &str {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_encoder() {
        let encoder = ByteEncoder::new();
        assert_eq!(encoder.encode("ab").unwrap(), vec![97, 98]);
        assert_eq!(encoder.encode("é").unwrap().len(), 2);
        assert!(encoder.encode("").unwrap().is_empty());
        assert_eq!(encoder.name(), "bytes");
    }
}
