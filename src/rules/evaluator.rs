//! Pip counts and win detection.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Color, SlotId, CHECKERS_PER_COLOR};

/// Outcome of a game so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    WhiteWon,
    BlackWon,
}

impl GameStatus {
    /// Winning color, if the game is over.
    #[must_use]
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::WhiteWon => Some(Color::White),
            GameStatus::BlackWon => Some(Color::Black),
        }
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Pips `color` still needs to bear off every checker.
///
/// A checker on the bar is 25 away. With nothing borne off this equals
/// `375 - Σ(index × count)` for white and `Σ(index × count)` for black,
/// both 167 at the start.
#[must_use]
pub fn pip_count(board: &Board, color: Color) -> u32 {
    SlotId::all()
        .filter(|&slot| slot.is_point() || slot == color.bar())
        .map(|slot| {
            let contents = board.at(slot);
            if contents.holds(color) {
                u32::from(contents.count) * color.distance_to_tray(slot)
            } else {
                0
            }
        })
        .sum()
}

/// `WhiteWon` / `BlackWon` once a tray holds all 15 checkers.
#[must_use]
pub fn check_win(board: &Board) -> GameStatus {
    if board.at(SlotId::WHITE_BEAR_OFF).count == CHECKERS_PER_COLOR {
        GameStatus::WhiteWon
    } else if board.at(SlotId::BLACK_BEAR_OFF).count == CHECKERS_PER_COLOR {
        GameStatus::BlackWon
    } else {
        GameStatus::InProgress
    }
}
