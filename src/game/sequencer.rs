//! Turn sequencing over a [`Board`].

use tracing::{debug, info};

use crate::core::{
    Board, Color, ColorMap, DiceRoll, DiceSource, EngineError, GameConfig, GameRng, Move, Result,
    RulesConfig, StartingPlayer,
};
use crate::rules::GameStatus;

/// What the caller should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Pick one of [`Game::valid_moves`].
    MustMove,
    /// No moves remain; undo or call [`Game::end_turn`].
    TurnComplete,
    /// The roll allowed no move at all; the turn already passed.
    NoMoves,
    /// A tray filled up.
    GameOver(GameStatus),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    AwaitingRoll,
    Moving,
    Finished(GameStatus),
}

/// Builder for creating a [`Game`].
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    position: Option<Board>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn starting_player(mut self, starting_player: StartingPlayer) -> Self {
        self.config.starting_player = starting_player;
        self
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.config.rules = rules;
        self
    }

    /// Start from this position instead of the standard opening.
    ///
    /// Its dice, undo cache and active color are replaced.
    pub fn position(mut self, board: Board) -> Self {
        self.position = Some(board);
        self
    }

    /// Build a game whose dice come from the seeded RNG.
    pub fn build(self) -> Game<GameRng> {
        let dice = GameRng::new(self.config.seed).for_context("dice");
        self.build_with_dice(dice)
    }

    /// Build a game with an injected dice source.
    pub fn build_with_dice<D: DiceSource>(self, dice: D) -> Game<D> {
        let first = self.config.starting_player.fixed().unwrap_or_else(|| {
            GameRng::new(self.config.seed)
                .for_context("opening")
                .flip_color()
        });

        let mut board = self
            .position
            .unwrap_or_else(Board::new_standard_game)
            .with_rules(self.config.rules);
        board.clear_dices();
        board.clear_undo_cache();
        board.set_active(first);
        info!(seed = self.config.seed, %first, "new game");

        Game {
            board,
            dice,
            history: Vec::new(),
            last_roll: None,
            turn_number: 1,
            phase: Phase::AwaitingRoll,
        }
    }
}

/// One game of backgammon: board, dice source and the moves of the
/// current turn (for undo).
#[derive(Clone, Debug)]
pub struct Game<D = GameRng> {
    board: Board,
    dice: D,
    history: Vec<Move>,
    last_roll: Option<DiceRoll>,
    turn_number: u32,
    phase: Phase,
}

impl<D: DiceSource> Game<D> {
    /// Throw the dice for the active color and search its moves.
    ///
    /// If the roll allows nothing, the turn is handed over immediately and
    /// `NoMoves` is returned.
    pub fn start_turn(&mut self) -> Result<TurnOutcome> {
        match self.phase {
            Phase::Finished(_) => return Err(EngineError::GameOver),
            Phase::Moving => return Err(EngineError::TurnInProgress),
            Phase::AwaitingRoll => {}
        }

        let roll = self.dice.throw_dice();
        self.board.set_dices(roll)?;
        self.last_roll = Some(roll);
        self.phase = Phase::Moving;
        self.board.search_for_valid_moves();

        debug!(
            turn = self.turn_number,
            active = %self.board.active(),
            ?roll,
            moves = self.board.valid_moves().len(),
            "turn started"
        );

        if self.board.has_valid_moves_left() {
            Ok(TurnOutcome::MustMove)
        } else {
            self.pass_turn();
            Ok(TurnOutcome::NoMoves)
        }
    }

    /// Play entry `index` of [`Game::valid_moves`].
    pub fn play(&mut self, index: usize) -> Result<TurnOutcome> {
        self.ensure_moving()?;
        let mv = self.board.move_by_index(index)?;
        Ok(self.after_move(mv))
    }

    /// Play a move, which must be one of [`Game::valid_moves`].
    pub fn play_move(&mut self, mv: &Move) -> Result<TurnOutcome> {
        self.ensure_moving()?;
        let index = self
            .board
            .valid_moves()
            .iter()
            .position(|m| m == mv)
            .ok_or(EngineError::IllegalMove {
                mv: *mv,
                reason: "not among the valid moves",
            })?;
        self.play(index)
    }

    /// Take back the last move of this turn and return its die.
    pub fn undo(&mut self) -> Result<TurnOutcome> {
        self.ensure_moving()?;
        let last = *self.history.last().ok_or(EngineError::NothingToUndo)?;
        if self.board.cached_dices().is_empty() {
            return Err(EngineError::NothingToUndo);
        }
        let undo = last.undo().ok_or(EngineError::NothingToUndo)?;

        self.board.apply(&undo)?;
        self.board.recover_dice_for_undo()?;
        self.history.pop();
        self.board.search_for_valid_moves();
        debug!(%last, "move undone");

        Ok(if self.board.has_valid_moves_left() {
            TurnOutcome::MustMove
        } else {
            TurnOutcome::TurnComplete
        })
    }

    /// Hand the dice to the opponent. Refused while moves remain.
    pub fn end_turn(&mut self) -> Result<Color> {
        match self.phase {
            Phase::Finished(_) => return Err(EngineError::GameOver),
            Phase::Moving if self.board.has_valid_moves_left() => {
                return Err(EngineError::TurnInProgress)
            }
            _ => {}
        }
        self.pass_turn();
        Ok(self.board.active())
    }

    fn pass_turn(&mut self) {
        let next = self.board.opponent();
        self.board.clear_dices();
        self.board.clear_undo_cache();
        self.board.set_active(next);
        self.history.clear();
        self.turn_number += 1;
        self.phase = Phase::AwaitingRoll;
        debug!(
            turn = self.turn_number,
            %next,
            white_pips = self.board.count_white(),
            black_pips = self.board.count_black(),
            "turn passed"
        );
    }

    fn after_move(&mut self, mv: Move) -> TurnOutcome {
        self.history.push(mv);

        let status = self.board.check_win();
        if status.is_over() {
            self.board.clear_dices();
            self.phase = Phase::Finished(status);
            info!(?status, turn = self.turn_number, "game over");
            return TurnOutcome::GameOver(status);
        }

        self.board.search_for_valid_moves();
        if self.board.has_valid_moves_left() {
            TurnOutcome::MustMove
        } else {
            TurnOutcome::TurnComplete
        }
    }

    fn ensure_moving(&self) -> Result<()> {
        match self.phase {
            Phase::Moving => Ok(()),
            Phase::Finished(_) => Err(EngineError::GameOver),
            Phase::AwaitingRoll => Err(EngineError::NotRolled),
        }
    }
}

impl<D> Game<D> {
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn valid_moves(&self) -> &[Move] {
        self.board.valid_moves()
    }

    #[must_use]
    pub fn active(&self) -> Color {
        self.board.active()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.phase {
            Phase::Finished(status) => status,
            _ => GameStatus::InProgress,
        }
    }

    /// Moves played so far this turn.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<DiceRoll> {
        self.last_roll
    }

    /// Starts at 1 and increases on every handover.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Remaining pips per color.
    #[must_use]
    pub fn pip_counts(&self) -> ColorMap<u32> {
        ColorMap::new(|color| crate::rules::pip_count(&self.board, color))
    }
}
