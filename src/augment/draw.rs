//! Random sources for the perturbation transform.
//!
//! The transform never touches a global generator. Callers hand it a
//! [`Draw`], which is either a real `rand` generator wrapped in [`RngDraw`]
//! or a [`ScriptedDraw`] that replays fixed values.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of the two kinds of random decisions the transform makes.
pub trait Draw {
    /// A uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// A uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<D: Draw + ?Sized> Draw for &mut D {
    fn unit(&mut self) -> f64 {
        (**self).unit()
    }

    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}

impl<D: Draw + ?Sized> Draw for Box<D> {
    fn unit(&mut self) -> f64 {
        (**self).unit()
    }

    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}

/// Adapts any `rand` generator to [`Draw`].
#[derive(Clone, Debug)]
pub struct RngDraw<R> {
    rng: R,
}

impl<R: Rng> RngDraw<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        RngDraw { rng }
    }

    /// Unwrap the generator, keeping its stream position.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngDraw<StdRng> {
    /// A reproducible generator seeded once from `seed`.
    pub fn seeded(seed: u64) -> Self {
        RngDraw::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Draw for RngDraw<R> {
    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays pre-recorded draws.
///
/// Unit and index draws come from separate queues. Once a queue runs dry,
/// `unit` yields the largest value below one (so only a probability of 1
/// still passes) and `index` yields 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDraw {
    units: VecDeque<f64>,
    indices: VecDeque<usize>,
}

/// Largest `f64` strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

impl ScriptedDraw {
    /// Create a scripted source from unit and index sequences.
    pub fn new<U, I>(units: U, indices: I) -> Self
    where
        U: IntoIterator<Item = f64>,
        I: IntoIterator<Item = usize>,
    {
        ScriptedDraw {
            units: units.into_iter().collect(),
            indices: indices.into_iter().collect(),
        }
    }

    /// Create a scripted source that only replays unit draws.
    pub fn units<U: IntoIterator<Item = f64>>(units: U) -> Self {
        ScriptedDraw {
            units: units.into_iter().collect(),
            indices: VecDeque::new(),
        }
    }

    /// Number of unit draws not yet consumed.
    pub fn remaining_units(&self) -> usize {
        self.units.len()
    }

    /// Number of index draws not yet consumed.
    pub fn remaining_indices(&self) -> usize {
        self.indices.len()
    }
}

impl Draw for ScriptedDraw {
    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(BELOW_ONE)
    }

    fn index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % len
    }
}
