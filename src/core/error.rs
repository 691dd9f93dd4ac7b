//! Engine errors.
//!
//! Every fallible operation validates before it mutates, so an `Err`
//! always leaves the board exactly as it was.

use thiserror::Error;

use super::moves::Move;

/// Errors reported by the rules engine and the turn sequencer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("slot index {slot} is outside the board (0..28)")]
    InvalidSlot { slot: usize },

    #[error("move index {index} out of range for {len} valid moves")]
    MoveIndexOutOfRange { index: usize, len: usize },

    #[error("invalid die value {value}")]
    InvalidDie { value: u8 },

    #[error("at most {max} dice can be in play")]
    TooManyDice { max: usize },

    #[error("no die showing {pips} is left to play")]
    DieNotAvailable { pips: u8 },

    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: &'static str },

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("dice have not been rolled this turn")]
    NotRolled,

    #[error("turn still has moves to play")]
    TurnInProgress,

    #[error("game is already over")]
    GameOver,
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
