//! Turn orchestration and the text front end.
//!
//! [`Game`] owns the authoritative board and alternates turns, passing
//! automatically when the side to move has no legal placement. Human moves
//! are read from any `BufRead` as `<row> <col>` lines; engine moves come from
//! [`Engine`]. The game ends when neither side can move.
//!
//! ## Example
//!
//! ```
//! use othello_rust::config::GameConfig;
//! use othello_rust::game::Game;
//!
//! // Engine against itself, one ply deep; no human input needed.
//! let mut game = Game::new(GameConfig::self_play(1)).unwrap();
//! let summary = game.run(std::io::empty(), std::io::sink()).unwrap();
//! assert!(game.is_over());
//! println!("{summary}");
//! ```

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{info, warn};

use crate::board::{Board, Move, Player};
use crate::config::{Controller, GameConfig};
use crate::constants::N;
use crate::engine::{Decision, Engine};
use crate::error::{ConfigError, MoveError, ParseMoveError};
use crate::rules::{has_legal_move, is_terminal, legal_moves, play_move};

const INPUT_HINT: &str = "Moves are entered as '<row> <col>' with numbers 0-7, e.g. '1 2'.";

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Disc counts and move count at the end of (or during) a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub black: usize,
    pub white: usize,
    /// Placements made; passes are not counted
    pub moves: usize,
}

impl GameSummary {
    pub fn outcome(&self) -> Outcome {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::Black),
            std::cmp::Ordering::Less => Outcome::Winner(Player::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Black total: {}", self.black)?;
        writeln!(f, "White total: {}", self.white)?;
        match self.outcome() {
            Outcome::Winner(p) => write!(f, "{p} wins!"),
            Outcome::Draw => write!(f, "TIE GAME"),
        }
    }
}

/// Parse a typed move such as `2 3` or `2,3`.
pub fn parse_move(s: &str) -> Result<Move, ParseMoveError> {
    let parts: Vec<&str> = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    let &[row, col] = parts.as_slice() else {
        return Err(ParseMoveError::Format(s.to_string()));
    };
    let number = |t: &str| {
        t.parse::<usize>()
            .map_err(|_| ParseMoveError::NotANumber(t.to_string()))
    };
    let (row, col) = (number(row)?, number(col)?);
    if row >= N || col >= N {
        return Err(ParseMoveError::OutOfRange { row, col });
    }
    Ok(Move::new(row, col))
}

/// Format a move list the way it is shown to the player.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join("  ")
}

/// A game in progress.
pub struct Game {
    board: Board,
    to_move: Player,
    config: GameConfig,
    engine: Engine,
    moves_played: usize,
}

impl Game {
    /// Start from the standard opening with Black to move.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::from_position(config, Board::new(), Player::Black)
    }

    /// Start from an arbitrary position.
    pub fn from_position(
        config: GameConfig,
        board: Board,
        to_move: Player,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = Engine {
            depth: config.depth,
            pruning: config.pruning,
        };
        Ok(Self {
            board,
            to_move,
            config,
            engine,
            moves_played: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.to_move)
    }

    pub fn is_over(&self) -> bool {
        is_terminal(&self.board)
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            black: self.board.count_of(Player::Black),
            white: self.board.count_of(Player::White),
            moves: self.moves_played,
        }
    }

    /// Hand the turn over if the side to move is stuck but the game is not
    /// over. Returns true if a pass happened. No move is counted.
    pub fn pass_if_stuck(&mut self) -> bool {
        if has_legal_move(&self.board, self.to_move) || self.is_over() {
            return false;
        }
        info!("{} has no legal move and passes", self.to_move);
        self.to_move = self.to_move.opponent();
        true
    }

    /// Play `mv` for the side to move and hand the turn over.
    ///
    /// Rejected moves leave the game unchanged.
    pub fn play(&mut self, mv: Move) -> Result<usize, MoveError> {
        let flipped = play_move(&mut self.board, mv, self.to_move)?;
        self.to_move = self.to_move.opponent();
        self.moves_played += 1;
        Ok(flipped)
    }

    /// Let the engine pick and play a move for the side to move.
    pub fn engine_turn(&mut self) -> Option<Decision> {
        let decision = self.engine.choose_move(&self.board, self.to_move)?;
        match self.play(decision.mv) {
            Ok(_) => Some(decision),
            Err(e) => {
                // select_move only returns generated moves.
                warn!("engine chose a rejected move {}: {e}", decision.mv);
                None
            }
        }
    }

    /// Play the game to the end, reading human moves from `input` and
    /// writing the board and prompts to `out`.
    ///
    /// # Errors
    /// Fails on I/O errors, or if `input` runs out while a human is to move.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut out: W,
    ) -> anyhow::Result<GameSummary> {
        let mut lines = input.lines();

        while !self.is_over() {
            let player = self.to_move;
            if self.pass_if_stuck() {
                writeln!(out, "{player} is out of moves, PASS to {}.\n", player.opponent())?;
                continue;
            }

            let summary = self.summary();
            writeln!(out, "Black total: {}", summary.black)?;
            writeln!(out, "White total: {}", summary.white)?;
            writeln!(out, "{}", self.board)?;

            match self.config.controller(player) {
                Controller::Human => loop {
                    writeln!(out, "{player} legal moves:\n{}", format_moves(&self.legal_moves()))?;
                    write!(out, "Your move ({}): ", player.symbol())?;
                    out.flush()?;

                    let line = lines
                        .next()
                        .context("input ended before the game finished")?
                        .context("failed to read move")?;
                    let mv = match parse_move(&line) {
                        Ok(mv) => mv,
                        Err(e) => {
                            writeln!(out, "\nInvalid input: {e}")?;
                            writeln!(out, "{INPUT_HINT}\n")?;
                            continue;
                        }
                    };
                    match self.play(mv) {
                        Ok(_) => break,
                        Err(e) => {
                            if !e.is_illegal_move() {
                                warn!("move passed input validation but was rejected: {e}");
                            }
                            writeln!(out, "{e}. Try again.")?;
                        }
                    }
                },
                Controller::Engine => {
                    let decision = self.engine_turn().context("engine found no move")?;
                    writeln!(out, "{player} plays {}\n", decision.mv)?;
                }
            }
        }

        let summary = self.summary();
        writeln!(out, "{}", self.board)?;
        writeln!(out, "{summary}")?;
        out.flush()?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("2 3"), Ok(Move::new(2, 3)));
        assert_eq!(parse_move("  7   0 "), Ok(Move::new(7, 0)));
        assert_eq!(parse_move("4,5"), Ok(Move::new(4, 5)));
        assert_eq!(parse_move("23"), Err(ParseMoveError::Format("23".into())));
        assert_eq!(parse_move("1 2 3"), Err(ParseMoveError::Format("1 2 3".into())));
        assert_eq!(parse_move("a 3"), Err(ParseMoveError::NotANumber("a".into())));
        assert_eq!(parse_move("-1 3"), Err(ParseMoveError::NotANumber("-1".into())));
        assert_eq!(
            parse_move("8 0"),
            Err(ParseMoveError::OutOfRange { row: 8, col: 0 })
        );
    }

    #[test]
    fn test_play_switches_turn() {
        let mut game = Game::new(GameConfig::hotseat()).unwrap();
        assert_eq!(game.to_move(), Player::Black);
        assert_eq!(game.play(Move::new(2, 3)), Ok(1));
        assert_eq!(game.to_move(), Player::White);
        assert_eq!(game.moves_played(), 1);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new(GameConfig::hotseat()).unwrap();
        assert!(game.play(Move::new(0, 0)).is_err());
        assert_eq!(game.to_move(), Player::Black);
        assert_eq!(game.moves_played(), 0);
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_engine_turn() {
        let mut game = Game::new(GameConfig::self_play(2)).unwrap();
        let d = game.engine_turn().unwrap();
        assert_eq!(game.board().cell_at(d.mv.row, d.mv.col), Some(Player::Black));
        assert_eq!(game.to_move(), Player::White);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Game::new(GameConfig::self_play(0)).is_err());
    }

    #[test]
    fn test_summary_display() {
        let s = GameSummary {
            black: 40,
            white: 24,
            moves: 60,
        };
        assert_eq!(s.to_string(), "Black total: 40\nWhite total: 24\nBlack wins!");
        let tie = GameSummary {
            black: 32,
            white: 32,
            moves: 60,
        };
        assert_eq!(tie.outcome(), Outcome::Draw);
    }
}
