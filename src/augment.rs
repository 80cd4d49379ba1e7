//! Typo-based text augmentation.
//!
//! The building blocks are a fixed QWERTY adjacency table
//! ([`keyboard`]), an injectable random source ([`draw`]), and the
//! perturbation itself ([`typo`]). [`record`] and [`jsonl`] apply it to
//! datasets of JSON records.
//!
//! # Examples
//!
//! ```
//! use fumble::augment::config::TypoConfig;
//! use fumble::augment::draw::ScriptedDraw;
//! use fumble::augment::typo::perturb_sentence;
//!
//! // first word selected, its 'e' replaced by neighbour 0 ('w'), second word skipped
//! let mut draw = ScriptedDraw::new([0.0, 0.9, 0.0, 0.9, 0.9, 0.9, 0.9], [0]);
//! let out = perturb_sentence("hello world", &TypoConfig::default(), &mut draw);
//! assert_eq!(out, "hwllo world");
//! ```

pub mod config;
pub mod draw;
pub mod jsonl;
pub mod keyboard;
pub mod record;
pub mod typo;
