//! Single-checker moves.
//!
//! A move is an immutable value: its kind, the slot it leaves, the slot it
//! lands on and the die face it consumes. Bear-off moves additionally
//! record the true distance travelled, which can be smaller than the die
//! face when a checker close to the edge is borne off with a larger die.
//!
//! Undo moves are derived from an applied move with [`Move::undo`] and
//! reverse it structurally; they consume no die.

use serde::{Deserialize, Serialize};

use super::slot::SlotId;

/// What a move does to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Land on an empty point or one already owned.
    Normal,
    /// Hit a lone opposing checker, sending it to its bar.
    Capture,
    /// Carry a checker off the board into the tray.
    BearOff,
    /// Reverse of an earlier move in this turn.
    ///
    /// `capture` is set when the reversed move was a hit, so the hit
    /// checker is returned from the bar to its point.
    Undo { capture: bool },
}

/// One checker transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    kind: MoveKind,
    from: SlotId,
    to: SlotId,
    pips: u8,
    distance: u8,
}

impl Move {
    /// Move to an empty or friendly point.
    #[must_use]
    pub const fn normal(from: SlotId, to: SlotId, pips: u8) -> Self {
        Self {
            kind: MoveKind::Normal,
            from,
            to,
            pips,
            distance: pips,
        }
    }

    /// Move that hits a blot on `to`.
    #[must_use]
    pub const fn capture(from: SlotId, to: SlotId, pips: u8) -> Self {
        Self {
            kind: MoveKind::Capture,
            from,
            to,
            pips,
            distance: pips,
        }
    }

    /// Bear a checker off into `tray`, consuming a die of `pips` to
    /// travel `distance` (never more than `pips`).
    #[must_use]
    pub const fn bear_off(from: SlotId, tray: SlotId, pips: u8, distance: u8) -> Self {
        Self {
            kind: MoveKind::BearOff,
            from,
            to: tray,
            pips,
            distance,
        }
    }

    /// Build the move that reverses this one.
    ///
    /// The undo keeps `from` and `to` of the original so the board can
    /// return the checker to `from`. Returns `None` for an undo move.
    #[must_use]
    pub const fn undo(&self) -> Option<Self> {
        let capture = match self.kind {
            MoveKind::Normal | MoveKind::BearOff => false,
            MoveKind::Capture => true,
            MoveKind::Undo { .. } => return None,
        };
        Some(Self {
            kind: MoveKind::Undo { capture },
            from: self.from,
            to: self.to,
            pips: self.pips,
            distance: self.distance,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Slot the checker leaves.
    #[must_use]
    pub const fn from(&self) -> SlotId {
        self.from
    }

    /// Slot the checker lands on (the tray for bear-offs).
    #[must_use]
    pub const fn to(&self) -> SlotId {
        self.to
    }

    /// Die face consumed by this move.
    #[must_use]
    pub const fn pips(&self) -> u8 {
        self.pips
    }

    /// Pips actually travelled.
    #[must_use]
    pub const fn distance(&self) -> u8 {
        self.distance
    }

    #[must_use]
    pub const fn is_undo(&self) -> bool {
        matches!(self.kind, MoveKind::Undo { .. })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            MoveKind::Normal => write!(f, "{} -> {} ({})", self.from, self.to, self.pips),
            MoveKind::Capture => write!(f, "{} -> {}* ({})", self.from, self.to, self.pips),
            MoveKind::BearOff => write!(
                f,
                "{} -> off ({}, travels {})",
                self.from, self.pips, self.distance
            ),
            MoveKind::Undo { .. } => write!(f, "undo {} -> {}", self.from, self.to),
        }
    }
}
