//! Error types for the Fumble library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`FumbleError`] enum. The perturbation core itself is total and never
//! produces an error; errors come from configuration, record shape, and I/O.
//!
//! # Examples
//!
//! ```
//! use fumble::error::{FumbleError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FumbleError::invalid_config("word_probability must be in [0, 1]"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Fumble operations.
#[derive(Error, Debug)]
pub enum FumbleError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record field errors (missing or mistyped field)
    #[error("Field error: {0}")]
    Field(String),

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Errors raised by an external tokenizer
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FumbleError.
pub type Result<T> = std::result::Result<T, FumbleError>;

impl FumbleError {
    /// Create a new field error.
    pub fn field<S: Into<String>>(msg: S) -> Self {
        FumbleError::Field(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        FumbleError::InvalidConfig(msg.into())
    }

    /// Create a new tokenizer error.
    pub fn tokenizer<S: Into<String>>(msg: S) -> Self {
        FumbleError::Tokenizer(msg.into())
    }
}
