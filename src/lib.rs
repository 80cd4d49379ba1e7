//! # Fumble
//!
//! Keyboard-typo text augmentation plus small corpus and checkpoint helpers
//! for NLP experiments.
//!
//! ## Features
//!
//! - Seedable, injectable randomness for reproducible augmentation
//! - QWERTY-neighbour typo injection with case preservation
//! - Token-stream analysis pipeline (tokenizer + filters)
//! - JSONL and plain-text record transforms
//! - Raw and tokenized statistics for parallel NL/SQL corpora
//! - Checkpoint listing and resume planning

pub mod analysis;
pub mod augment;
pub mod checkpoint;
pub mod cli;
pub mod corpus;
pub mod error;

pub mod prelude {
    pub use crate::augment::config::TypoConfig;
    pub use crate::augment::draw::{Draw, RngDraw, ScriptedDraw};
    pub use crate::augment::typo::{Perturber, perturb_sentence};
    pub use crate::error::{FumbleError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
