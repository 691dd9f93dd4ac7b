//! Forced-move resolution.
//!
//! Backgammon requires a player to use as many dice as legally possible,
//! and the larger die when only one of two can be played. The resolver
//! enforces both with a bounded exhaustive search:
//!
//! 1. For each candidate, copy the board and play the candidate on it.
//! 2. Regenerate candidates on the copy and recurse, keeping the best
//!    total of pips consumed along any continuation.
//! 3. At the top level keep only candidates whose total equals the best.
//!
//! Totals count the die faces consumed. Every die adds its face value, so
//! a longer sequence always scores higher, and between two single-die
//! plays the larger die wins. Depth is bounded by the dice in play (at
//! most four), and every branch owns its board copy.

use tracing::{debug, instrument};

use super::generator::candidate_moves;
use crate::core::{Board, EngineError, Move, Result};

/// Keep the candidates that begin a maximal-pip continuation.
///
/// `candidates` must come from [`candidate_moves`] for `board`.
#[instrument(level = "debug", skip_all, fields(active = %board.active(), dice = ?board.dices()))]
#[must_use]
pub(crate) fn refine(board: &Board, candidates: Vec<Move>) -> Vec<Move> {
    if candidates.is_empty() {
        return candidates;
    }

    let totals: Vec<u32> = candidates
        .iter()
        .map(|mv| total_after(board, mv))
        .collect();
    let best = totals.iter().copied().max().unwrap_or(0);

    let kept: Vec<Move> = candidates
        .into_iter()
        .zip(totals)
        .filter(|&(_, total)| total == best)
        .map(|(mv, _)| mv)
        .collect();

    debug!(best, kept = kept.len(), "forced-move filter applied");
    kept
}

/// Pips consumed by playing `mv` and then continuing optimally.
///
/// `mv` is checked against `board` first; undo moves consume no die and
/// are rejected.
pub fn sequence_total(board: &Board, mv: &Move) -> Result<u32> {
    if mv.is_undo() {
        return Err(EngineError::IllegalMove {
            mv: *mv,
            reason: "undo moves do not start a sequence",
        });
    }
    board.validate(mv)?;
    Ok(total_after(board, mv))
}

/// Most pips the active color can still consume from this position.
#[must_use]
pub fn best_continuation(board: &Board) -> u32 {
    candidate_moves(board)
        .iter()
        .map(|mv| total_after(board, mv))
        .max()
        .unwrap_or(0)
}

fn total_after(board: &Board, mv: &Move) -> u32 {
    let mut next = board.branch();
    next.apply_validated(mv);
    u32::from(mv.pips()) + best_continuation(&next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, MoveKind, SlotId};

    fn board_with(active: Color, roll: [u8; 2], layout: &[(usize, Color, u8)]) -> Board {
        let mut board = Board::empty();
        for &(slot, color, count) in layout {
            board.place(slot, color, count).unwrap();
        }
        board.set_active(active);
        board.set_dices(roll).unwrap();
        board
    }

    fn resolve(board: &Board) -> Vec<Move> {
        refine(board, candidate_moves(board))
    }

    #[test]
    fn test_opening_roll_keeps_everything() {
        let mut board = Board::new_standard_game();
        board.set_dices([3, 1]).unwrap();

        let candidates = candidate_moves(&board);
        let refined = refine(&board, candidates.clone());

        // Every opening move can be followed by the other die.
        assert_eq!(refined, candidates);
    }

    #[test]
    fn test_empty_candidates() {
        let board = Board::new_standard_game();
        assert!(refine(&board, Vec::new()).is_empty());
        assert_eq!(best_continuation(&board), 0);
    }

    #[test]
    fn test_larger_die_when_only_one_playable() {
        // Either die can move the checker on 1, but 8 is blocked so the
        // other die never follows.
        let board = board_with(
            Color::White,
            [5, 2],
            &[(1, Color::White, 1), (8, Color::Black, 2)],
        );

        let moves = resolve(&board);
        assert_eq!(moves, vec![Move::normal(SlotId::new(1), SlotId::new(6), 5)]);
    }

    #[test]
    fn test_move_that_strands_second_die_is_filtered() {
        // 12 -> 18 leaves the 1 with nowhere to go (2 and 19 blocked);
        // 1 -> 7 keeps 7 -> 8 open.
        let board = board_with(
            Color::White,
            [6, 1],
            &[
                (1, Color::White, 1),
                (12, Color::White, 1),
                (2, Color::Black, 2),
                (13, Color::Black, 2),
                (19, Color::Black, 2),
            ],
        );

        let candidates = candidate_moves(&board);
        assert!(candidates.contains(&Move::normal(SlotId::new(12), SlotId::new(18), 6)));

        let moves = refine(&board, candidates);
        assert_eq!(moves, vec![Move::normal(SlotId::new(1), SlotId::new(7), 6)]);
    }

    #[test]
    fn test_only_playable_die_survives() {
        // The 6 is blocked from 1 and the 3 cannot be followed by it.
        let board = board_with(
            Color::White,
            [6, 3],
            &[
                (1, Color::White, 1),
                (7, Color::Black, 2),
                (10, Color::Black, 2),
            ],
        );

        let moves = resolve(&board);
        assert_eq!(moves, vec![Move::normal(SlotId::new(1), SlotId::new(4), 3)]);
    }

    #[test]
    fn test_doubles_prefer_longest_sequence() {
        // The checker on 1 stops at 4 (7 is blocked); the one on 2 can
        // take every remaining step.
        let board = board_with(
            Color::White,
            [3, 3],
            &[
                (1, Color::White, 1),
                (2, Color::White, 1),
                (7, Color::Black, 2),
            ],
        );

        let moves = resolve(&board);

        assert!(moves.contains(&Move::normal(SlotId::new(1), SlotId::new(4), 3)));
        assert!(moves.contains(&Move::normal(SlotId::new(2), SlotId::new(5), 3)));
        for mv in &moves {
            assert_eq!(sequence_total(&board, mv).unwrap(), 12);
        }
    }

    #[test]
    fn test_black_totals_are_magnitudes() {
        let mut board = Board::new_standard_game();
        board.set_players(false);
        board.set_dices([6, 4]).unwrap();

        let moves = resolve(&board);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(sequence_total(&board, mv).unwrap(), 10);
        }
    }

    #[test]
    fn test_bear_off_counts_die_face() {
        let board = board_with(
            Color::White,
            [6, 1],
            &[(24, Color::White, 1), (23, Color::White, 1)],
        );

        let moves = resolve(&board);

        assert!(moves.contains(&Move::bear_off(SlotId::new(24), SlotId::WHITE_BEAR_OFF, 6, 1)));
        assert!(moves.iter().all(|m| sequence_total(&board, m) == Ok(7)));
        assert!(moves.iter().any(|m| m.kind() == MoveKind::Normal));
    }

    #[test]
    fn test_sequence_total_rejects_unplayable_move() {
        let mut board = Board::new_standard_game();
        board.set_dices([4, 2]).unwrap();
        let before = board.clone();

        let from_empty = Move::normal(SlotId::new(3), SlotId::new(7), 4);
        assert!(matches!(
            sequence_total(&board, &from_empty),
            Err(EngineError::IllegalMove { .. })
        ));

        let wrong_die = Move::normal(SlotId::new(1), SlotId::new(6), 5);
        assert_eq!(
            sequence_total(&board, &wrong_die),
            Err(EngineError::DieNotAvailable { pips: 5 })
        );

        let played = Move::normal(SlotId::new(1), SlotId::new(5), 4);
        assert!(sequence_total(&board, &played.undo().unwrap()).is_err());
        assert_eq!(sequence_total(&board, &played), Ok(6));
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let mut board = Board::new_standard_game();
        board.set_dices([6, 6]).unwrap();
        let before = board.clone();

        let _ = resolve(&board);

        assert_eq!(board, before);
    }
}
