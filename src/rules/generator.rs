//! Candidate move generation.
//!
//! Produces every single-checker move allowed by the basic movement rules
//! for the active color and the remaining dice, before the forced-move
//! filter runs. Scan order is ascending slot index, then dice order, so
//! the output is deterministic.

use smallvec::SmallVec;

use crate::core::{Board, Color, Move, SlotId};

/// Basic-rule moves for the active color.
///
/// - With checkers on the bar only bar entries are produced.
/// - Bear-offs appear once every checker is home and the die reaches
///   the tray; the move records the exact gap as its distance.
/// - A destination with two or more opposing checkers is blocked.
#[must_use]
pub fn candidate_moves(board: &Board) -> Vec<Move> {
    let dice = board.dice_state().distinct();
    if dice.is_empty() {
        return Vec::new();
    }

    let active = board.active();
    let origins: SmallVec<[SlotId; 16]> = if board.has_on_bar(active) {
        SmallVec::from_elem(active.bar(), 1)
    } else {
        (1..=24u8)
            .map(SlotId::new)
            .filter(|&slot| board.at(slot).holds(active))
            .collect()
    };
    let all_home = board.all_home(active);

    let mut moves = Vec::new();
    for &from in &origins {
        for &pips in &dice {
            let target = active.advance(from, pips);

            if all_home && active.reaches_tray(target) && may_bear_off(board, active, from, pips) {
                let distance = active.distance_to_tray(from) as u8;
                moves.push(Move::bear_off(from, active.tray(), pips, distance));
            }

            if let Some(to) = SlotId::point_from_target(target) {
                let dest = board.at(to);
                if dest.is_open_for(active) {
                    moves.push(Move::normal(from, to, pips));
                } else if dest.is_blot_of(active.opponent()) {
                    moves.push(Move::capture(from, to, pips));
                }
            }
        }
    }
    moves
}

/// Oversized dice may bear off from anywhere unless the strict rule is on,
/// in which case no checker may sit farther from the tray.
pub(crate) fn may_bear_off(board: &Board, active: Color, from: SlotId, pips: u8) -> bool {
    let gap = active.distance_to_tray(from);
    if u32::from(pips) == gap || !board.rules().strict_bear_off {
        return true;
    }
    !active
        .home_points()
        .map(|i| SlotId::new(i as u8))
        .any(|slot| board.at(slot).holds(active) && active.distance_to_tray(slot) > gap)
}
