//! Keyboard-typo perturbation.
//!
//! Each whitespace-delimited word is independently selected with
//! `word_probability`. Inside a selected word, every character that has
//! QWERTY neighbours is independently replaced with probability
//! `char_probability` by a uniformly chosen neighbour, keeping its case.
//! Words are rejoined with single spaces.
//!
//! # Examples
//!
//! ```
//! use fumble::augment::config::TypoConfig;
//! use fumble::augment::typo::Perturber;
//!
//! let mut perturber = Perturber::seeded(TypoConfig::default(), 0);
//! let out = perturber.perturb("The quick brown fox jumps over the lazy dog");
//! assert_eq!(out.split_whitespace().count(), 9);
//! ```

use serde::Serialize;

use crate::analysis::tokenizer::whitespace::split_words;
use crate::augment::config::TypoConfig;
use crate::augment::draw::{Draw, RngDraw};
use crate::augment::keyboard::KeyboardLayout;

/// Counters accumulated across perturbation calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PerturbStats {
    pub words_seen: usize,
    pub words_selected: usize,
    /// Selected words in which at least one character was replaced.
    pub words_changed: usize,
    pub chars_substituted: usize,
}

impl PerturbStats {
    /// Add another set of counters into this one.
    pub fn merge(&mut self, other: &PerturbStats) {
        self.words_seen += other.words_seen;
        self.words_selected += other.words_selected;
        self.words_changed += other.words_changed;
        self.chars_substituted += other.chars_substituted;
    }
}

/// Perturb a single word.
///
/// Consumes one unit draw for the selection decision and, if selected, one
/// unit draw per eligible character plus one index draw per substitution.
pub fn perturb_word<D: Draw + ?Sized>(
    word: &str,
    config: &TypoConfig,
    draw: &mut D,
    stats: &mut PerturbStats,
) -> String {
    stats.words_seen += 1;
    if draw.unit() >= config.word_probability {
        return word.to_string();
    }
    stats.words_selected += 1;

    let mut substituted = 0;
    let out: String = word
        .chars()
        .map(|ch| {
            let Some(neighbors) = KeyboardLayout::neighbors(ch) else {
                return ch;
            };
            if draw.unit() >= config.char_probability {
                return ch;
            }
            substituted += 1;
            KeyboardLayout::substitute(ch, neighbors[draw.index(neighbors.len())])
        })
        .collect();

    if substituted > 0 {
        stats.words_changed += 1;
        stats.chars_substituted += substituted;
    }
    out
}

/// Perturb a sentence, rejoining its words with single spaces.
///
/// Empty or all-whitespace input yields an empty string.
pub fn perturb_sentence<D: Draw + ?Sized>(text: &str, config: &TypoConfig, draw: &mut D) -> String {
    let mut stats = PerturbStats::default();
    perturb_sentence_with_stats(text, config, draw, &mut stats)
}

fn perturb_sentence_with_stats<D: Draw + ?Sized>(
    text: &str,
    config: &TypoConfig,
    draw: &mut D,
    stats: &mut PerturbStats,
) -> String {
    split_words(text)
        .map(|word| perturb_word(word, config, draw, stats))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A typo injector that owns its random source.
///
/// Successive calls consume one generator stream; the source is never
/// re-seeded between calls.
#[derive(Clone, Debug)]
pub struct Perturber<D> {
    config: TypoConfig,
    draw: D,
    stats: PerturbStats,
}

impl Perturber<RngDraw<rand::rngs::StdRng>> {
    /// A perturber over a `StdRng` seeded once from `seed`.
    pub fn seeded(config: TypoConfig, seed: u64) -> Self {
        Perturber::new(config, RngDraw::seeded(seed))
    }
}

impl<D: Draw> Perturber<D> {
    pub fn new(config: TypoConfig, draw: D) -> Self {
        Perturber {
            config,
            draw,
            stats: PerturbStats::default(),
        }
    }

    pub fn config(&self) -> &TypoConfig {
        &self.config
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> &PerturbStats {
        &self.stats
    }

    /// Perturb a sentence.
    pub fn perturb(&mut self, text: &str) -> String {
        perturb_sentence_with_stats(text, &self.config, &mut self.draw, &mut self.stats)
    }

    /// Perturb a single word.
    pub fn perturb_word(&mut self, word: &str) -> String {
        perturb_word(word, &self.config, &mut self.draw, &mut self.stats)
    }

    pub fn into_draw(self) -> D {
        self.draw
    }
}
