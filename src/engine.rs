//! The computer player: build a tree, search it, pick a move.

use tracing::{debug, info, warn};

use crate::board::{Board, Move, Player};
use crate::constants::DEFAULT_DEPTH;
use crate::search::{minimax, search, select_move};
use crate::tree::build_tree;

/// A chosen move and the minimax value that justified it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub mv: Move,
    pub value: i32,
}

/// Fixed-depth minimax player. Black maximizes, White minimizes.
#[derive(Copy, Clone, Debug)]
pub struct Engine {
    pub depth: u32,
    pub pruning: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Engine {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            pruning: true,
        }
    }

    /// Search without alpha-beta pruning.
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    /// Choose a move for `player`, or `None` if it has no legal move.
    ///
    /// The tree is rebuilt from scratch for every call and dropped before
    /// returning.
    pub fn choose_move(&self, board: &Board, player: Player) -> Option<Decision> {
        let mut root = build_tree(board, self.depth, player);
        if root.moves.is_empty() {
            return None;
        }

        let maximizing = player == Player::Black;
        let value = if self.pruning {
            search(&mut root, self.depth, maximizing)
        } else {
            minimax(&mut root, self.depth, maximizing)
        };

        debug!(
            "{player} considered {} moves, {} of {} nodes visited",
            root.moves.len(),
            root.visited(),
            root.len()
        );
        for (mv, v) in root.child_values() {
            debug!("  {mv} -> {v:?}");
        }

        let mv = select_move(&root, value, board)?;
        if root.best_child().is_none() {
            warn!("no child carries root value {value}, playing first legal move {mv}");
        }
        info!("{player} plays {mv} (value {value})");
        Some(Decision { mv, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_choice() {
        let engine = Engine::new(1);
        let d = engine.choose_move(&Board::new(), Player::Black).unwrap();
        assert_eq!(d.mv, Move::new(2, 3));
    }

    #[test]
    fn test_no_move() {
        let engine = Engine::new(3);
        assert_eq!(engine.choose_move(&Board::empty(), Player::White), None);
    }

    #[test]
    fn test_pruning_does_not_change_choice() {
        let mut board = Board::new();
        crate::rules::apply_move(&mut board, Move::new(2, 3), Player::Black);
        let pruned = Engine::new(3).choose_move(&board, Player::White);
        let plain = Engine::new(3).without_pruning().choose_move(&board, Player::White);
        assert_eq!(pruned, plain);
    }

    #[test]
    fn test_takes_corner() {
        // Black can take (0,0) by flanking along the diagonal, or play
        // elsewhere; the corner bonus makes the diagonal capture best.
        let board: Board = "\
            --------
            -w------
            --b-----
            --------
            --------
            ----wb--
            --------
            --------"
            .parse()
            .unwrap();
        let d = Engine::new(1).choose_move(&board, Player::Black).unwrap();
        assert_eq!(d.mv, Move::new(0, 0));
    }
}
