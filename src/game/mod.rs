//! Turn sequencing for a full game.
//!
//! A [`Game`] drives one board through its turns:
//! - roll (from a seeded RNG or a scripted source)
//! - play moves from the filtered list, with per-turn undo
//! - hand over to the opponent once no moves remain
//! - stop when a tray holds all 15 checkers

mod sequencer;

pub use sequencer::{Game, GameBuilder, TurnOutcome};
