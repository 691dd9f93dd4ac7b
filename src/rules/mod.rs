//! Backgammon rules over [`Board`](crate::core::Board).
//!
//! - `generator`: candidate single-checker moves under the basic rules
//! - `resolver`: forced-move filter (use as many dice as possible)
//! - `evaluator`: pip counts and win detection
//!
//! The board calls into these modules; they never mutate the live board,
//! only private copies.

pub mod evaluator;
pub mod generator;
pub mod resolver;

pub use evaluator::{check_win, pip_count, GameStatus};
pub use generator::candidate_moves;
pub use resolver::{best_continuation, sequence_total};
