//! Dice bookkeeping: the roll, the remaining usable values and the
//! undo-dice cache.
//!
//! ## Dice State
//!
//! A small multiset of pip values still to be played this turn. A roll of
//! two distinct faces yields those two values; doubles expand to four.
//! Values are stored as positive magnitudes: the direction of travel comes
//! from the active [`Color`](super::Color), never from the sign of a die.
//!
//! ## Undo-Dice Cache
//!
//! A bounded stack of consumed values, capacity 4 (the most dice a turn
//! can hold). Pushing onto a full cache resets it to empty first.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{EngineError, Result};

/// Maximum dice instances in play during one turn.
pub const MAX_DICE: usize = 4;

/// Two raw die faces as thrown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub first: u8,
    pub second: u8,
}

impl DiceRoll {
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Both faces equal.
    #[must_use]
    pub const fn is_double(&self) -> bool {
        self.first == self.second
    }

    /// Faces as an array.
    #[must_use]
    pub const fn faces(&self) -> [u8; 2] {
        [self.first, self.second]
    }
}

impl From<[u8; 2]> for DiceRoll {
    fn from(faces: [u8; 2]) -> Self {
        Self::new(faces[0], faces[1])
    }
}

/// Remaining usable pip values for the current turn.
///
/// An empty state means no more moves are possible this turn.
///
/// ```
/// use rust_backgammon::core::{DiceRoll, DiceState};
///
/// let dice = DiceState::from_roll(DiceRoll::new(6, 6)).unwrap();
/// assert_eq!(dice.as_slice(), &[6, 6, 6, 6]);
/// assert_eq!(dice.distinct().as_slice(), &[6]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceState {
    values: SmallVec<[u8; MAX_DICE]>,
}

impl DiceState {
    /// No dice left.
    #[must_use]
    pub fn exhausted() -> Self {
        Self::default()
    }

    /// Expand a roll: doubles become four instances.
    pub fn from_roll(roll: DiceRoll) -> Result<Self> {
        for value in roll.faces() {
            if value == 0 {
                return Err(EngineError::InvalidDie { value });
            }
        }

        let values = if roll.is_double() {
            SmallVec::from_elem(roll.first, MAX_DICE)
        } else {
            SmallVec::from_slice(&roll.faces())
        };
        Ok(Self { values })
    }

    /// Remaining values in order.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Distinct values in first-seen order. Each is tried once per
    /// generation pass.
    #[must_use]
    pub fn distinct(&self) -> SmallVec<[u8; MAX_DICE]> {
        let mut out: SmallVec<[u8; MAX_DICE]> = SmallVec::new();
        for &value in &self.values {
            if !out.contains(&value) {
                out.push(value);
            }
        }
        out
    }

    /// Whether a die showing `pips` is still available.
    #[must_use]
    pub fn contains(&self, pips: u8) -> bool {
        self.values.contains(&pips)
    }

    /// Remove one instance matching `pips`. Returns false if none is left.
    pub fn consume(&mut self, pips: u8) -> bool {
        match self.values.iter().position(|&v| v == pips) {
            Some(pos) => {
                self.values.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Append a value (used when recovering a die for undo).
    ///
    /// Refused once [`MAX_DICE`] values are held, which also bounds the
    /// resolver's search depth.
    pub fn push(&mut self, value: u8) -> Result<()> {
        if value == 0 {
            return Err(EngineError::InvalidDie { value });
        }
        if self.values.len() >= MAX_DICE {
            return Err(EngineError::TooManyDice { max: MAX_DICE });
        }
        self.values.push(value);
        Ok(())
    }
}

/// Bounded stack of consumed pip values, for restoring dice on undo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UndoDiceCache {
    values: [u8; MAX_DICE],
    len: u8,
}

impl UndoDiceCache {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [0; MAX_DICE],
            len: 0,
        }
    }

    /// Push a consumed value. A full cache is reset before the push.
    pub fn push(&mut self, value: u8) {
        if self.len as usize == MAX_DICE {
            self.clear();
        }
        self.values[self.len as usize] = value;
        self.len += 1;
    }

    /// Pop the most recently consumed value.
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.values[self.len as usize])
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len as usize]
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}
