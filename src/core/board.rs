//! Board state and the move mutator.
//!
//! ## Layout
//!
//! 28 slots (see [`SlotId`]) plus the active color, the remaining dice,
//! the undo-dice cache and the current list of valid moves.
//!
//! ## Invariants
//!
//! - An empty playable point has no owner. Bars and trays keep their
//!   color at zero count.
//! - Moves only relocate checkers, so from the standard start each color
//!   always has 15 checkers across all slots.
//! - [`Board::apply`] validates before mutating: an `Err` leaves the board
//!   untouched.
//!
//! ## Example
//!
//! ```
//! use rust_backgammon::core::{Board, Color, DiceRoll};
//!
//! let mut board = Board::new_standard_game();
//! board.set_players(true);
//! board.set_dices(DiceRoll::new(3, 1)).unwrap();
//! board.search_for_valid_moves();
//!
//! let first = board.move_by_index(0).unwrap();
//! assert_eq!(board.dices().len(), 1);
//! assert_eq!(board.checker_total(Color::White), 15);
//! # let _ = first;
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::color::Color;
use super::config::RulesConfig;
use super::dice::{DiceRoll, DiceState, UndoDiceCache};
use super::error::{EngineError, Result};
use super::moves::{Move, MoveKind};
use super::slot::{Slot, SlotId, SLOT_COUNT};
use crate::rules::{evaluator, generator, resolver, GameStatus};

/// The complete rules-engine state for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: [Slot; SLOT_COUNT],
    active: Color,
    dice: DiceState,
    undo_dice: UndoDiceCache,
    valid_moves: Vec<Move>,
    rules: RulesConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_standard_game()
    }
}

impl Board {
    /// Standard opening position, white to move, no dice.
    ///
    /// White: 2 on 1, 5 on 12, 3 on 17, 5 on 19.
    /// Black: 5 on 6, 3 on 8, 5 on 13, 2 on 24.
    #[must_use]
    pub fn new_standard_game() -> Self {
        let mut board = Self::empty();
        for (point, color, count) in [
            (1, Color::White, 2),
            (6, Color::Black, 5),
            (8, Color::Black, 3),
            (12, Color::White, 5),
            (13, Color::Black, 5),
            (17, Color::White, 3),
            (19, Color::White, 5),
            (24, Color::Black, 2),
        ] {
            board.slots[point] = Slot::occupied(color, count);
        }
        board
    }

    /// Board with no checkers anywhere. Bars and trays keep their colors.
    ///
    /// Used with [`Board::place`] to set up arbitrary positions.
    #[must_use]
    pub fn empty() -> Self {
        let mut slots = [Slot::empty(); SLOT_COUNT];
        for slot in SlotId::all() {
            slots[slot.index()].owner = slot.fixed_owner();
        }
        Self {
            slots,
            active: Color::White,
            dice: DiceState::exhausted(),
            undo_dice: UndoDiceCache::new(),
            valid_moves: Vec::new(),
            rules: RulesConfig::default(),
        }
    }

    /// Use the given rule variants for move generation.
    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Put `count` checkers of `color` on a slot, replacing its contents.
    ///
    /// Setup helper; it does not preserve the 15-checker total.
    pub fn place(&mut self, slot: usize, color: Color, count: u8) -> Result<()> {
        let id = SlotId::try_from_index(slot)?;
        if let Some(owner) = id.fixed_owner() {
            if owner != color {
                return Err(EngineError::InvalidSlot { slot });
            }
        }
        self.slots[slot] = if count == 0 && id.is_point() {
            Slot::empty()
        } else {
            Slot::occupied(color, count)
        };
        self.valid_moves.clear();
        Ok(())
    }

    /// Copy for speculative play: same position and dice, no move list.
    #[must_use]
    pub(crate) fn branch(&self) -> Self {
        Self {
            slots: self.slots,
            active: self.active,
            dice: self.dice.clone(),
            undo_dice: self.undo_dice,
            valid_moves: Vec::new(),
            rules: self.rules,
        }
    }

    // === Turn Setup ===

    /// Install a roll. Doubles expand to four usable dice.
    pub fn set_dices(&mut self, roll: impl Into<DiceRoll>) -> Result<()> {
        let roll = roll.into();
        self.dice = DiceState::from_roll(roll)?;
        self.valid_moves.clear();
        debug!(?roll, active = %self.active, "dice set");
        Ok(())
    }

    /// Append one die value to the remaining dice.
    pub fn add_dice(&mut self, value: u8) -> Result<()> {
        self.dice.push(value)
    }

    /// Drop any remaining dice.
    pub fn clear_dices(&mut self) {
        self.dice = DiceState::exhausted();
        self.valid_moves.clear();
    }

    /// Set the active player: `true` for white, `false` for black.
    ///
    /// Idempotent; direction comes from the color, not from the dice.
    pub fn set_players(&mut self, is_white: bool) {
        self.set_active(if is_white { Color::White } else { Color::Black });
    }

    /// Set the active color.
    pub fn set_active(&mut self, color: Color) {
        if self.active != color {
            self.valid_moves.clear();
        }
        self.active = color;
    }

    /// Forget consumed dice (turn handover).
    pub fn clear_undo_cache(&mut self) {
        self.undo_dice.clear();
    }

    // === Move Search ===

    /// Recompute the valid moves for the active color and remaining dice.
    ///
    /// Candidates from the generator are filtered so that only moves
    /// starting a maximal-dice-usage sequence survive.
    pub fn search_for_valid_moves(&mut self) -> &[Move] {
        let candidates = generator::candidate_moves(self);
        self.valid_moves = resolver::refine(self, candidates);
        &self.valid_moves
    }

    /// Moves found by the last [`Board::search_for_valid_moves`].
    #[must_use]
    pub fn valid_moves(&self) -> &[Move] {
        &self.valid_moves
    }

    #[must_use]
    pub fn has_valid_moves_left(&self) -> bool {
        !self.valid_moves.is_empty()
    }

    // === Mutation ===

    /// Apply entry `index` of the current valid-move list.
    pub fn move_by_index(&mut self, index: usize) -> Result<Move> {
        let mv = *self
            .valid_moves
            .get(index)
            .ok_or(EngineError::MoveIndexOutOfRange {
                index,
                len: self.valid_moves.len(),
            })?;
        self.apply(&mv)?;
        Ok(mv)
    }

    /// Apply a move for the active color.
    ///
    /// Normal, capture and bear-off moves consume the matching die and
    /// push it onto the undo cache. Undo moves touch no dice; follow them
    /// with [`Board::recover_dice_for_undo`].
    pub fn apply(&mut self, mv: &Move) -> Result<()> {
        self.validate(mv)?;
        self.apply_validated(mv);
        self.valid_moves.clear();
        debug!(%mv, active = %self.active, dice = ?self.dice.as_slice(), "move applied");
        Ok(())
    }

    /// Mutate without checks. Only for moves that passed `validate` or
    /// came from the generator for this exact board.
    pub(crate) fn apply_validated(&mut self, mv: &Move) {
        let active = self.active;
        let (from, to) = (mv.from().index(), mv.to().index());

        match mv.kind() {
            MoveKind::Normal => {
                self.take_checker(from);
                self.slots[to].count += 1;
                self.slots[to].owner = Some(active);
            }
            MoveKind::Capture => {
                self.take_checker(from);
                self.slots[to].owner = Some(active);
                self.slots[active.opponent().bar().index()].count += 1;
            }
            MoveKind::BearOff => {
                self.take_checker(from);
                self.slots[active.tray().index()].count += 1;
            }
            MoveKind::Undo { capture } => {
                self.slots[from].count += 1;
                self.slots[from].owner = Some(active);
                self.take_checker(to);
                if capture {
                    let opponent = active.opponent();
                    self.slots[opponent.bar().index()].count -= 1;
                    self.slots[to] = Slot::occupied(opponent, 1);
                }
                trace!(%mv, "move reverted");
                return;
            }
        }

        self.dice.consume(mv.pips());
        self.undo_dice.push(mv.pips());
    }

    fn take_checker(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        slot.count -= 1;
        if slot.count == 0 && SlotId::new(index as u8).is_point() {
            slot.owner = None;
        }
    }

    /// Check `mv` against the current position without mutating.
    pub(crate) fn validate(&self, mv: &Move) -> Result<()> {
        let active = self.active;
        let illegal = |reason| EngineError::IllegalMove { mv: *mv, reason };
        let from = self.slots[mv.from().index()];
        let to = self.slots[mv.to().index()];

        if let MoveKind::Undo { capture } = mv.kind() {
            if !(mv.from().is_point() || mv.from() == active.bar()) {
                return Err(illegal("undo must return to a point or the bar"));
            }
            let lands_on_tray = mv.to() == active.tray();
            if !(mv.to().is_point() || (lands_on_tray && !capture)) {
                return Err(illegal("undo must take back from a point or the own tray"));
            }
            if lands_on_tray && !mv.from().is_point() {
                return Err(illegal("a bear-off can only return to a point"));
            }
            if !from.is_open_for(active) {
                return Err(illegal("origin is held by the opponent"));
            }
            if !to.holds(active) {
                return Err(illegal("no checker to take back"));
            }
            if capture {
                if to.count != 1 {
                    return Err(illegal("hit point must hold only the hitting checker"));
                }
                if self.slots[active.opponent().bar().index()].count == 0 {
                    return Err(illegal("no hit checker on the opponent's bar"));
                }
            }
            return Ok(());
        }

        let origin_ok = match mv.kind() {
            MoveKind::BearOff => mv.from().is_point(),
            _ => mv.from().is_point() || mv.from() == active.bar(),
        };
        if !origin_ok {
            return Err(illegal("origin must be a point or the own bar"));
        }
        if !from.holds(active) {
            return Err(illegal("no checker of the active color on origin"));
        }
        if !self.dice.contains(mv.pips()) {
            return Err(EngineError::DieNotAvailable { pips: mv.pips() });
        }
        if self.has_on_bar(active) && mv.from() != active.bar() {
            return Err(illegal("checkers on the bar must enter first"));
        }

        let target = active.advance(mv.from(), mv.pips());
        match mv.kind() {
            MoveKind::Normal | MoveKind::Capture => {
                if SlotId::point_from_target(target) != Some(mv.to()) {
                    return Err(illegal("destination does not match the die"));
                }
                let ok = match mv.kind() {
                    MoveKind::Normal => to.is_open_for(active),
                    _ => to.is_blot_of(active.opponent()),
                };
                if !ok {
                    return Err(illegal("destination is blocked"));
                }
            }
            MoveKind::BearOff => {
                if mv.to() != active.tray() || !active.reaches_tray(target) {
                    return Err(illegal("die does not reach the tray"));
                }
                if !self.all_home(active) {
                    return Err(illegal("checkers outside the home board"));
                }
                if u32::from(mv.distance()) != active.distance_to_tray(mv.from()) {
                    return Err(illegal("bear-off distance does not match origin"));
                }
                if !generator::may_bear_off(self, active, mv.from(), mv.pips()) {
                    return Err(illegal("a checker farther from the tray must move first"));
                }
            }
            MoveKind::Undo { .. } => {}
        }
        Ok(())
    }

    // === Undo ===

    /// Pop the last consumed die and append it to the remaining dice.
    ///
    /// Returns the recovered value. With an empty cache nothing changes.
    pub fn recover_dice_for_undo(&mut self) -> Result<u8> {
        let value = self.undo_dice.pop().ok_or(EngineError::NothingToUndo)?;
        if let Err(err) = self.dice.push(value) {
            self.undo_dice.push(value);
            return Err(err);
        }
        self.valid_moves.clear();
        debug!(value, dice = ?self.dice.as_slice(), "die recovered");
        Ok(value)
    }

    // === Queries ===

    /// Contents of a slot.
    pub fn slot(&self, index: usize) -> Result<Slot> {
        let id = SlotId::try_from_index(index)?;
        Ok(self.slots[id.index()])
    }

    pub(crate) fn at(&self, slot: SlotId) -> Slot {
        self.slots[slot.index()]
    }

    /// Checker counts for all 28 slots.
    #[must_use]
    pub fn amount_array(&self) -> [u8; SLOT_COUNT] {
        self.slots.map(|s| s.count)
    }

    /// Owners for all 28 slots.
    #[must_use]
    pub fn color_array(&self) -> [Option<Color>; SLOT_COUNT] {
        self.slots.map(|s| s.owner)
    }

    /// Remaining dice.
    #[must_use]
    pub fn dices(&self) -> &[u8] {
        self.dice.as_slice()
    }

    pub(crate) fn dice_state(&self) -> &DiceState {
        &self.dice
    }

    #[must_use]
    pub fn is_dices_left(&self) -> bool {
        !self.dice.is_empty()
    }

    /// Dice consumed this turn, oldest first.
    #[must_use]
    pub fn cached_dices(&self) -> &[u8] {
        self.undo_dice.as_slice()
    }

    #[must_use]
    pub fn active(&self) -> Color {
        self.active
    }

    #[must_use]
    pub fn opponent(&self) -> Color {
        self.active.opponent()
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Whether `color` has checkers waiting on its bar.
    #[must_use]
    pub fn has_on_bar(&self, color: Color) -> bool {
        self.slots[color.bar().index()].count > 0
    }

    /// Whether every checker of `color` still on the board is in its home.
    #[must_use]
    pub fn all_home(&self, color: Color) -> bool {
        color
            .outside_home()
            .all(|i| !self.slots[i].holds(color))
    }

    /// Checkers of `color` over all slots, bar and tray included.
    #[must_use]
    pub fn checker_total(&self, color: Color) -> u32 {
        let on_points: u32 = self
            .slots
            .iter()
            .enumerate()
            .filter(|(i, s)| s.owner == Some(color) && SlotId::new(*i as u8).is_point())
            .map(|(_, s)| u32::from(s.count))
            .sum();
        on_points
            + u32::from(self.slots[color.bar().index()].count)
            + u32::from(self.slots[color.tray().index()].count)
    }

    /// Pips white still needs to bear everything off.
    #[must_use]
    pub fn count_white(&self) -> u32 {
        evaluator::pip_count(self, Color::White)
    }

    /// Pips black still needs to bear everything off.
    #[must_use]
    pub fn count_black(&self) -> u32 {
        evaluator::pip_count(self, Color::Black)
    }

    #[must_use]
    pub fn check_win(&self) -> GameStatus {
        evaluator::check_win(self)
    }
}
