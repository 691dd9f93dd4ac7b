//! # rust-backgammon
//!
//! A backgammon rules engine: board state, legal move generation with
//! forced-move resolution, dice bookkeeping with per-turn undo, and win
//! detection.
//!
//! ## Design Principles
//!
//! 1. **One Board, Two Directions**: White moves toward slot 25, black
//!    toward slot 0. Direction lives on [`Color`], dice stay positive.
//!
//! 2. **Validate Then Mutate**: Every fallible operation checks first, so
//!    an `Err` never leaves a half-applied move behind.
//!
//! 3. **Deterministic**: Dice come from a seeded ChaCha RNG or a scripted
//!    source. The same seed replays the same game.
//!
//! ## Architecture
//!
//! - **Generator**: single-checker candidates under the basic rules
//!   (bar first, blocked points, bear-off only when all home).
//!
//! - **Resolver**: exhaustive search over owned board copies keeping only
//!   the candidates that start a maximal sequence of dice.
//!
//! - **Sequencer**: [`Game`] drives roll, move, undo and turn handover.
//!
//! ## Modules
//!
//! - `core`: Colors, slots, dice, moves, the board, RNG, configuration
//! - `rules`: Move generation, forced-move resolution, pip counts, wins
//! - `game`: Turn sequencing over a board
//!
//! ## Example
//!
//! ```
//! use rust_backgammon::{DiceRoll, GameBuilder, ScriptedDice, StartingPlayer, TurnOutcome};
//!
//! let mut game = GameBuilder::new()
//!     .starting_player(StartingPlayer::White)
//!     .build_with_dice(ScriptedDice::new([DiceRoll::new(6, 5)]));
//!
//! assert_eq!(game.start_turn().unwrap(), TurnOutcome::MustMove);
//! while !game.valid_moves().is_empty() {
//!     game.play(0).unwrap();
//! }
//! game.end_turn().unwrap();
//! assert_eq!(game.pip_counts()[rust_backgammon::Color::White], 167 - 11);
//! ```

pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Color, ColorMap,
    DiceRoll, DiceSource, GameRng, ScriptedDice,
    EngineError, Result,
    GameConfig, RulesConfig, StartingPlayer,
    Move, MoveKind,
    Slot, SlotId,
};

pub use crate::game::{Game, GameBuilder, TurnOutcome};

pub use crate::rules::{check_win, pip_count, GameStatus};
