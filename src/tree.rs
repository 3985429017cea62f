//! Game tree construction.
//!
//! The tree is built to a fixed ply depth before any search runs. Each node
//! owns its children outright; the whole tree is dropped once the engine has
//! picked a move.

use crate::board::{Board, Move, Player};
use crate::rules::{apply_move, legal_moves};

/// A position in the explored game tree.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// The position at this node
    pub board: Board,
    /// Side to move at this node
    pub player: Player,
    /// Legal moves for `player`, row-major. `children[i]` follows `moves[i]`.
    pub moves: Vec<Move>,
    /// One child per legal move, empty at leaves
    pub children: Vec<SearchNode>,
    /// Backed-up minimax value, set once search has visited the node
    pub value: Option<i32>,
}

impl SearchNode {
    /// A leaf for `player` to move on `board`, with its legal moves computed.
    pub fn new(board: &Board, player: Player) -> Self {
        Self {
            board: *board,
            player,
            moves: legal_moves(board, player),
            children: Vec::new(),
            value: None,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(SearchNode::len).sum::<usize>()
    }

    /// Number of nodes in this subtree that search assigned a value to.
    pub fn visited(&self) -> usize {
        usize::from(self.value.is_some())
            + self.children.iter().map(SearchNode::visited).sum::<usize>()
    }

    /// Clear every recorded value so the tree can be searched again.
    pub fn reset_values(&mut self) {
        self.value = None;
        for child in &mut self.children {
            child.reset_values();
        }
    }

    /// First child, in generation order, whose recorded value is `value`.
    pub fn child_with_value(&self, value: i32) -> Option<(Move, &SearchNode)> {
        self.moves
            .iter()
            .zip(&self.children)
            .find(|(_, child)| child.value == Some(value))
            .map(|(&mv, child)| (mv, child))
    }

    /// First child carrying this node's own backed-up value, i.e. the
    /// principal move. `None` before search or when no child matches.
    pub fn best_child(&self) -> Option<(Move, &SearchNode)> {
        self.child_with_value(self.value?)
    }

    /// Pairs of (move, child value) for the root's children, for diagnostics.
    pub fn child_values(&self) -> impl Iterator<Item = (Move, Option<i32>)> + '_ {
        self.moves
            .iter()
            .zip(&self.children)
            .map(|(&mv, child)| (mv, child.value))
    }
}

/// Expand one node: one child per legal move, each with the turn passed on.
fn expand(node: &mut SearchNode, depth: u32) {
    let opponent = node.player.opponent();
    node.children = node
        .moves
        .iter()
        .map(|&mv| {
            let mut next = node.board;
            apply_move(&mut next, mv, node.player);
            build_tree(&next, depth - 1, opponent)
        })
        .collect();
}

/// Build the game tree rooted at `board` with `player` to move, `depth` plies
/// deep.
///
/// A node whose player has no legal move is a leaf even with depth left: a
/// forced pass ends that line of the tree and is scored by the heuristic.
pub fn build_tree(board: &Board, depth: u32, player: Player) -> SearchNode {
    let mut node = SearchNode::new(board, player);
    if depth > 0 && !node.moves.is_empty() {
        expand(&mut node, depth);
    }
    node
}
