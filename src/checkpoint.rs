//! Discovery of training checkpoints for resuming model training.
//!
//! Only the directory layout is inspected; checkpoint contents are never
//! read.

pub mod resume;
pub mod scan;
