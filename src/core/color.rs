//! Checker colors and per-color data storage.
//!
//! ## Color
//!
//! The two sides of the board. Each color owns a direction of travel,
//! a bar slot and a bear-off tray, so index arithmetic never has to
//! negate dice by hand.
//!
//! ## ColorMap
//!
//! Fixed-size per-color storage indexed by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::slot::SlotId;

/// One side of the board.
///
/// White moves from low slot indices to high ones, black from high to low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, white first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Signed step applied to a slot index per pip moved.
    #[must_use]
    pub const fn direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Slot index reached by moving `pips` forward from `from`.
    ///
    /// May fall outside the board; callers compare it against
    /// [`Color::bear_off_boundary`] and the playable range.
    #[must_use]
    pub const fn advance(self, from: SlotId, pips: u8) -> i32 {
        from.index() as i32 + self.direction() * pips as i32
    }

    /// Bar slot holding this color's captured checkers.
    #[must_use]
    pub const fn bar(self) -> SlotId {
        match self {
            Color::White => SlotId::WHITE_BAR,
            Color::Black => SlotId::BLACK_BAR,
        }
    }

    /// Tray collecting this color's borne-off checkers.
    #[must_use]
    pub const fn tray(self) -> SlotId {
        match self {
            Color::White => SlotId::WHITE_BEAR_OFF,
            Color::Black => SlotId::BLACK_BEAR_OFF,
        }
    }

    /// Index a checker must reach (or pass) to leave the board.
    ///
    /// White bears off past slot 24 (boundary 25), black past slot 1
    /// (boundary 0). These coincide with the opponent's bar index.
    #[must_use]
    pub const fn bear_off_boundary(self) -> i32 {
        match self {
            Color::White => SlotId::BLACK_BAR.index() as i32,
            Color::Black => SlotId::WHITE_BAR.index() as i32,
        }
    }

    /// Whether a target index computed by [`Color::advance`] reaches the tray.
    #[must_use]
    pub const fn reaches_tray(self, target: i32) -> bool {
        match self {
            Color::White => target >= self.bear_off_boundary(),
            Color::Black => target <= self.bear_off_boundary(),
        }
    }

    /// Pips still needed to carry a checker on `slot` off the board.
    ///
    /// The color's own bar counts as 25 away.
    #[must_use]
    pub const fn distance_to_tray(self, slot: SlotId) -> u32 {
        (self.bear_off_boundary() - slot.index() as i32).unsigned_abs()
    }

    /// Slots that must be empty of this color before bearing off.
    ///
    /// White: bar through point 18. Black: bar (25) down through point 7.
    /// The ranges are kept apart because the layout is not symmetric in
    /// index arithmetic.
    #[must_use]
    pub fn outside_home(self) -> std::ops::RangeInclusive<usize> {
        match self {
            Color::White => 0..=18,
            Color::Black => 7..=25,
        }
    }

    /// The six home points of this color.
    #[must_use]
    pub fn home_points(self) -> std::ops::RangeInclusive<usize> {
        match self {
            Color::White => 19..=24,
            Color::Black => 1..=6,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_backgammon::core::{Color, ColorMap};
///
/// let mut borne_off: ColorMap<u8> = ColorMap::with_value(0);
/// borne_off[Color::Black] += 1;
/// assert_eq!(borne_off[Color::White], 0);
/// assert_eq!(borne_off[Color::Black], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::White), factory(Color::Black)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (Color, &T) pairs, white first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    const fn slot(color: Color) -> usize {
        match color {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[Self::slot(color)]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[Self::slot(color)]
    }
}
