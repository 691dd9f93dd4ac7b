//! Core engine types: colors, slots, dice, moves, the board, RNG,
//! configuration and errors.

pub mod board;
pub mod color;
pub mod config;
pub mod dice;
pub mod error;
pub mod moves;
pub mod rng;
pub mod slot;

pub use board::Board;
pub use color::{Color, ColorMap};
pub use config::{GameConfig, RulesConfig, StartingPlayer};
pub use dice::{DiceRoll, DiceState, UndoDiceCache, MAX_DICE};
pub use error::{EngineError, Result};
pub use moves::{Move, MoveKind};
pub use rng::{DiceSource, GameRng, ScriptedDice};
pub use slot::{Slot, SlotId, CHECKERS_PER_COLOR, SLOT_COUNT};
