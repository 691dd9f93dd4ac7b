//! Slot identification and contents.
//!
//! ## Index Layout
//!
//! The board has 28 slots with fixed meaning:
//! - `0`: white's bar
//! - `1..=24`: playable points
//! - `25`: black's bar
//! - `26`: white's bear-off tray
//! - `27`: black's bear-off tray
//!
//! ```
//! use rust_backgammon::core::SlotId;
//!
//! assert!(SlotId::new(7).is_point());
//! assert!(SlotId::WHITE_BAR.is_fixed());
//! assert!(SlotId::try_from_index(28).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::{EngineError, Result};

/// Number of slots on the board.
pub const SLOT_COUNT: usize = 28;

/// Checkers per color.
pub const CHECKERS_PER_COLOR: u8 = 15;

/// Index of one of the 28 board slots.
///
/// Deserialization goes through [`SlotId::try_from_index`], so an index
/// outside the board is rejected at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SlotId(u8);

impl SlotId {
    pub const WHITE_BAR: SlotId = SlotId(0);
    pub const BLACK_BAR: SlotId = SlotId(25);
    pub const WHITE_BEAR_OFF: SlotId = SlotId(26);
    pub const BLACK_BEAR_OFF: SlotId = SlotId(27);

    /// Create a slot ID from a known-valid index.
    ///
    /// Panics on indices outside the board; use [`SlotId::try_from_index`]
    /// for caller-supplied values.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < SLOT_COUNT, "slot index out of range");
        Self(index)
    }

    /// Validate a caller-supplied index.
    pub fn try_from_index(index: usize) -> Result<Self> {
        if index < SLOT_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(EngineError::InvalidSlot { slot: index })
        }
    }

    /// Convert a signed target computed from direction arithmetic.
    ///
    /// Returns `None` unless the target is a playable point (1..=24).
    #[must_use]
    pub fn point_from_target(target: i32) -> Option<Self> {
        if (1..=24).contains(&target) {
            Some(Self(target as u8))
        } else {
            None
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Playable point 1..=24.
    #[must_use]
    pub const fn is_point(self) -> bool {
        self.0 >= 1 && self.0 <= 24
    }

    /// Bar or bear-off tray. These keep their color at zero count.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        !self.is_point()
    }

    /// Owner identity of a fixed slot, `None` for playable points.
    #[must_use]
    pub const fn fixed_owner(self) -> Option<Color> {
        match self.0 {
            0 | 26 => Some(Color::White),
            25 | 27 => Some(Color::Black),
            _ => None,
        }
    }

    /// Iterate over all 28 slots in index order.
    pub fn all() -> impl Iterator<Item = SlotId> {
        (0..SLOT_COUNT as u8).map(SlotId)
    }
}

impl TryFrom<u8> for SlotId {
    type Error = EngineError;

    fn try_from(index: u8) -> Result<Self> {
        Self::try_from_index(usize::from(index))
    }
}

impl From<SlotId> for u8 {
    fn from(slot: SlotId) -> u8 {
        slot.0
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            SlotId::WHITE_BAR => write!(f, "white bar"),
            SlotId::BLACK_BAR => write!(f, "black bar"),
            SlotId::WHITE_BEAR_OFF => write!(f, "white tray"),
            SlotId::BLACK_BEAR_OFF => write!(f, "black tray"),
            SlotId(point) => write!(f, "point {}", point),
        }
    }
}

/// Contents of a single slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Color of the checkers here. `None` only on empty playable points.
    pub owner: Option<Color>,
    /// Number of checkers.
    pub count: u8,
}

impl Slot {
    /// Slot holding `count` checkers of `color`.
    #[must_use]
    pub const fn occupied(color: Color, count: u8) -> Self {
        Self {
            owner: Some(color),
            count,
        }
    }

    /// Empty contested point.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            owner: None,
            count: 0,
        }
    }

    /// Whether `color` has at least one checker here.
    #[must_use]
    pub fn holds(&self, color: Color) -> bool {
        self.owner == Some(color) && self.count > 0
    }

    /// Whether a checker of `color` may land here without hitting.
    #[must_use]
    pub fn is_open_for(&self, color: Color) -> bool {
        self.owner.is_none() || self.owner == Some(color)
    }

    /// A lone opposing checker that `color` can hit.
    #[must_use]
    pub fn is_blot_of(&self, color: Color) -> bool {
        self.owner == Some(color) && self.count == 1
    }
}
