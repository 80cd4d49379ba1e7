//! Keyboard-typo filter.
//!
//! Applies the per-word typo transform to each token. The filter owns one
//! random source behind a lock, so a single generator stream is shared by
//! every caller, including callers on different threads.
//!
//! # Examples
//!
//! ```
//! use fumble::analysis::token::Token;
//! use fumble::analysis::token_filter::Filter;
//! use fumble::analysis::token_filter::typo::TypoFilter;
//! use fumble::augment::config::TypoConfig;
//!
//! let filter = TypoFilter::seeded(TypoConfig::new(0.0, 1.0).unwrap(), 0);
//! let tokens = vec![Token::new("unchanged", 0)];
//! let out: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//! assert_eq!(out[0].text, "unchanged");
//! ```

use parking_lot::Mutex;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::augment::config::TypoConfig;
use crate::augment::draw::{Draw, RngDraw};
use crate::augment::typo::{PerturbStats, perturb_word};
use crate::error::Result;

struct TypoState {
    draw: Box<dyn Draw + Send>,
    stats: PerturbStats,
}

/// A filter that injects keyboard-neighbour typos into tokens.
pub struct TypoFilter {
    config: TypoConfig,
    state: Mutex<TypoState>,
}

impl std::fmt::Debug for TypoFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypoFilter")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}

impl TypoFilter {
    /// Create a filter drawing from `draw`.
    pub fn new<D: Draw + Send + 'static>(config: TypoConfig, draw: D) -> Self {
        TypoFilter {
            config,
            state: Mutex::new(TypoState {
                draw: Box::new(draw),
                stats: PerturbStats::default(),
            }),
        }
    }

    /// Create a filter over a `StdRng` seeded once from `seed`.
    pub fn seeded(config: TypoConfig, seed: u64) -> Self {
        Self::new(config, RngDraw::seeded(seed))
    }

    pub fn config(&self) -> &TypoConfig {
        &self.config
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> PerturbStats {
        self.state.lock().stats
    }
}

impl Filter for TypoFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        // Hold the lock for the whole stream so one sentence's draws stay contiguous.
        let mut guard = self.state.lock();
        let TypoState { draw, stats } = &mut *guard;

        let filtered_tokens = tokens
            .map(|token| {
                let perturbed = perturb_word(&token.text, &self.config, draw, stats);
                token.with_text(perturbed)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "typo"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::analysis::token::Token;
    use crate::augment::draw::ScriptedDraw;

    fn stream(words: &[&str]) -> TokenStream {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::with_offsets(*w, i, i * 10, i * 10 + w.len()))
            .collect();
        Box::new(tokens.into_iter())
    }

    #[test]
    fn test_typo_filter_scripted() {
        let draw = ScriptedDraw::new([0.0, 0.9, 0.0, 0.9, 0.9, 0.9, 0.9], [0]);
        let filter = TypoFilter::new(TypoConfig::default(), draw);

        let out: Vec<Token> = filter.filter(stream(&["hello", "world"])).unwrap().collect();
        assert_eq!(out[0].text, "hwllo");
        assert_eq!(out[1].text, "world");
        assert_eq!((out[0].start_offset, out[0].end_offset), (0, 5));
        assert_eq!(out[1].position, 1);

        let stats = filter.stats();
        assert_eq!(stats.words_seen, 2);
        assert_eq!(stats.words_changed, 1);
    }

    #[test]
    fn test_typo_filter_matches_perturber_stream() {
        let config = TypoConfig::new(1.0, 0.5).unwrap();
        let filter = TypoFilter::seeded(config, 11);
        let mut perturber = crate::augment::typo::Perturber::seeded(config, 11);

        for sentence in [["keyboard", "typos"], ["second", "call"]] {
            let via_filter: Vec<String> = filter
                .filter(stream(&sentence))
                .unwrap()
                .map(|t| t.text)
                .collect();
            assert_eq!(via_filter.join(" "), perturber.perturb(&sentence.join(" ")));
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let filter = Arc::new(TypoFilter::seeded(TypoConfig::new(1.0, 1.0).unwrap(), 5));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let filter = Arc::clone(&filter);
                thread::spawn(move || {
                    for _ in 0..25 {
                        let out: Vec<Token> = filter.filter(stream(&["abc", "xyz"])).unwrap().collect();
                        assert_eq!(out.len(), 2);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stats = filter.stats();
        assert_eq!(stats.words_seen, 200);
        assert_eq!(stats.words_selected, 200);
        assert_eq!(stats.chars_substituted, 600);
    }
}
