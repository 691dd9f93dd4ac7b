//! Game configuration types.
//!
//! - `RulesConfig`: rule variants the move generator honours
//! - `StartingPlayer`: who opens the game
//! - `GameConfig`: combines the above with the RNG seed
//!
//! All types are serde-serializable so a front end can load them from
//! whatever settings format it uses.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Rule variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Only allow bearing off with a die larger than needed from the
    /// rearmost occupied home point.
    ///
    /// Off by default: any home checker may then be borne off with an
    /// oversized die.
    #[serde(default)]
    pub strict_bear_off: bool,
}

impl RulesConfig {
    /// Enable or disable the strict bear-off rule.
    #[must_use]
    pub fn with_strict_bear_off(mut self, strict: bool) -> Self {
        self.strict_bear_off = strict;
        self
    }
}

/// Who takes the first turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartingPlayer {
    White,
    Black,
    /// Coin flip from the game RNG.
    #[default]
    Random,
}

impl StartingPlayer {
    /// The fixed color, if any.
    #[must_use]
    pub fn fixed(self) -> Option<Color> {
        match self {
            StartingPlayer::White => Some(Color::White),
            StartingPlayer::Black => Some(Color::Black),
            StartingPlayer::Random => None,
        }
    }
}

/// Configuration for a whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for dice and the opening coin flip.
    pub seed: u64,

    #[serde(default)]
    pub starting_player: StartingPlayer,

    #[serde(default)]
    pub rules: RulesConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_player: StartingPlayer::Random,
            rules: RulesConfig::default(),
        }
    }
}

impl GameConfig {
    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the opening player.
    #[must_use]
    pub fn with_starting_player(mut self, starting_player: StartingPlayer) -> Self {
        self.starting_player = starting_player;
        self
    }

    /// Set the rule variants.
    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }
}
