//! Dice sources: deterministic RNG and scripted rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Context streams**: Independent sequences for the opening coin flip
//!   and for dice, so changing one never shifts the other
//! - **Injectable**: The sequencer only sees [`DiceSource`], so tests can
//!   hand it a [`ScriptedDice`] instead
//!
//! ```
//! use rust_backgammon::core::{DiceSource, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.throw_dice();
//! assert!((1..=6).contains(&roll.first));
//! assert!((1..=6).contains(&roll.second));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

use super::color::Color;
use super::dice::DiceRoll;

/// Produces a pair of independent die faces in 1..=6.
pub trait DiceSource {
    fn throw_dice(&mut self) -> DiceRoll;
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Roll one die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Fair coin flip between the two colors.
    pub fn flip_color(&mut self) -> Color {
        if self.inner.gen_bool(0.5) {
            Color::White
        } else {
            Color::Black
        }
    }
}

impl DiceSource for GameRng {
    fn throw_dice(&mut self) -> DiceRoll {
        let first = self.roll_die();
        let second = self.roll_die();
        DiceRoll::new(first, second)
    }
}

/// Replays a fixed list of rolls, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: Vec<DiceRoll>,
    next: usize,
}

impl ScriptedDice {
    /// Panics if `rolls` is empty.
    #[must_use]
    pub fn new(rolls: impl IntoIterator<Item = DiceRoll>) -> Self {
        let rolls: Vec<_> = rolls.into_iter().collect();
        assert!(!rolls.is_empty(), "Scripted dice need at least one roll");
        Self { rolls, next: 0 }
    }
}

impl DiceSource for ScriptedDice {
    fn throw_dice(&mut self) -> DiceRoll {
        let roll = self.rolls[self.next];
        self.next = (self.next + 1) % self.rolls.len();
        roll
    }
}
