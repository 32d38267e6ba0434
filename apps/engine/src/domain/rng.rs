//! Injected randomness for dice rolls and AI decisions.
//!
//! Nothing in the engine constructs its own random source: every roll and
//! every policy coin flip goes through a [`DiceRng`] handed in by the caller.
//! [`SeededRng`] makes a whole match replayable from a `u64`; [`EntropyRng`]
//! is for live play.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::dice::{Face, MAX_FACE, MIN_FACE};

/// Uniform random source consumed by the engine.
pub trait DiceRng {
    /// Uniform integer in `[min, max_exclusive)`.
    ///
    /// Returns `min` when the range is empty.
    fn next_int(&mut self, min: u32, max_exclusive: u32) -> u32;

    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// One fair die.
    fn roll_die(&mut self) -> Face {
        self.next_int(MIN_FACE as u32, MAX_FACE as u32 + 1) as Face
    }
}

impl<R: DiceRng + ?Sized> DiceRng for &mut R {
    fn next_int(&mut self, min: u32, max_exclusive: u32) -> u32 {
        (**self).next_int(min, max_exclusive)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<R: DiceRng + ?Sized> DiceRng for Box<R> {
    fn next_int(&mut self, min: u32, max_exclusive: u32) -> u32 {
        (**self).next_int(min, max_exclusive)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Deterministic source: same seed, same sequence, on every platform.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DiceRng for SeededRng {
    fn next_int(&mut self, min: u32, max_exclusive: u32) -> u32 {
        if max_exclusive <= min {
            debug_assert!(false, "empty range {min}..{max_exclusive}");
            return min;
        }
        self.inner.random_range(min..max_exclusive)
    }

    fn next_unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

/// OS-seeded source for production play.
#[derive(Debug)]
pub struct EntropyRng {
    inner: StdRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceRng for EntropyRng {
    fn next_int(&mut self, min: u32, max_exclusive: u32) -> u32 {
        if max_exclusive <= min {
            debug_assert!(false, "empty range {min}..{max_exclusive}");
            return min;
        }
        self.inner.random_range(min..max_exclusive)
    }

    fn next_unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

/// Build a boxed source: seeded when a seed is given, OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> Box<dyn DiceRng + Send> {
    match seed {
        Some(s) => Box::new(SeededRng::new(s)),
        None => Box::new(EntropyRng::new()),
    }
}

/// Scripted source for tests: replays fixed integers and unit floats.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct ScriptedRng {
    pub ints: std::collections::VecDeque<u32>,
    pub units: std::collections::VecDeque<f64>,
}

#[cfg(test)]
impl ScriptedRng {
    pub fn new(ints: &[u32], units: &[f64]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            units: units.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl DiceRng for ScriptedRng {
    fn next_int(&mut self, min: u32, max_exclusive: u32) -> u32 {
        let v = self.ints.pop_front().expect("scripted ints exhausted");
        assert!(
            (min..max_exclusive).contains(&v),
            "scripted int {v} outside {min}..{max_exclusive}"
        );
        v
    }

    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().expect("scripted units exhausted")
    }
}
