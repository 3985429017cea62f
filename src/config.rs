//! Game configuration: who controls each side and how deep the engine looks.

use crate::board::Player;
use crate::constants::{DEFAULT_DEPTH, MAX_DEPTH};
use crate::error::ConfigError;

/// Who chooses moves for one side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Controller {
    /// Moves are read from the input stream
    Human,
    /// Moves are chosen by minimax search
    Engine,
}

/// Settings for one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub black: Controller,
    pub white: Controller,
    /// Search depth in plies
    pub depth: u32,
    /// Use alpha-beta pruning (otherwise plain minimax)
    pub pruning: bool,
}

impl Default for GameConfig {
    /// Human Black against the engine.
    fn default() -> Self {
        Self {
            black: Controller::Human,
            white: Controller::Engine,
            depth: DEFAULT_DEPTH,
            pruning: true,
        }
    }
}

impl GameConfig {
    /// Two humans sharing the input stream.
    pub fn hotseat() -> Self {
        Self {
            black: Controller::Human,
            white: Controller::Human,
            ..Self::default()
        }
    }

    /// Engine against itself.
    pub fn self_play(depth: u32) -> Self {
        Self {
            black: Controller::Engine,
            white: Controller::Engine,
            depth,
            ..Self::default()
        }
    }

    pub fn controller(&self, player: Player) -> Controller {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::DepthOutOfRange(self.depth));
        }
        Ok(())
    }
}
