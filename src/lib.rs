//! Othello-Rust: an 8x8 flanking-capture board game with a minimax engine.
//!
//! The engine builds a fixed-depth game tree and searches it with
//! alpha-beta pruned minimax, scoring leaves with a mobility + disc count +
//! corner heuristic. Black is always the maximizing side.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, heuristic weights, search limits
//! - [`board`] - Board, player and move types
//! - [`rules`] - Legal moves and the capture-and-flip transition
//! - [`eval`] - Static position evaluation
//! - [`tree`] - Game tree construction
//! - [`search`] - Alpha-beta and plain minimax over the tree
//! - [`engine`] - Move selection for the computer player
//! - [`config`] - Per-game settings
//! - [`game`] - Turn loop and text front end
//! - [`selfplay`] - Engine-vs-engine matches
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use othello_rust::board::{Board, Move, Player};
//! use othello_rust::engine::Engine;
//! use othello_rust::rules::{apply_move, legal_moves};
//!
//! let mut board = Board::new();
//! assert_eq!(legal_moves(&board, Player::Black).len(), 4);
//!
//! apply_move(&mut board, Move::new(2, 3), Player::Black);
//!
//! // Let the engine answer for White, searching 3 plies deep
//! let reply = Engine::new(3).choose_move(&board, Player::White).unwrap();
//! println!("White plays {}", reply.mv);
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod selfplay;
pub mod tree;
