//! Minimax search over a prebuilt game tree.
//!
//! Black is always the maximizing side and White the minimizing side. Both
//! searches record the backed-up value on every node they visit, so the
//! caller can read the best root move off the children afterwards.
//!
//! [`alpha_beta`] is the search used in play; [`minimax`] visits every node
//! and serves as a reference. They agree on the root value and on the value
//! of every node the pruned search visits completely.

use tracing::trace;

use crate::board::{Board, Move};
use crate::constants::SCORE_INF;
use crate::eval::evaluate;
use crate::rules::is_terminal;
use crate::tree::SearchNode;

/// Whether `node` is scored statically rather than expanded further.
///
/// A node with no children is a leaf even with depth remaining: either the
/// side to move must pass or the tree was built shallower than the search.
/// Such a node gets its heuristic score, never the +/-`SCORE_INF` bound.
#[inline]
fn is_static(node: &SearchNode, depth: u32) -> bool {
    depth == 0 || node.is_leaf() || is_terminal(&node.board)
}

fn leaf_value(node: &mut SearchNode) -> i32 {
    let v = evaluate(&node.board);
    node.value = Some(v);
    v
}

/// Alpha-beta pruned minimax. Returns the value of `node` searched to
/// `depth` plies within the window `(alpha, beta)`.
pub fn alpha_beta(
    node: &mut SearchNode,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    if is_static(node, depth) {
        return leaf_value(node);
    }

    let n_children = node.children.len();
    let best = if maximizing {
        let mut best = -SCORE_INF;
        for (i, child) in node.children.iter_mut().enumerate() {
            let eval = alpha_beta(child, depth - 1, alpha, beta, false);
            best = best.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                trace!(depth, pruned = n_children - (i + 1), "beta cutoff");
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_INF;
        for (i, child) in node.children.iter_mut().enumerate() {
            let eval = alpha_beta(child, depth - 1, alpha, beta, true);
            best = best.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                trace!(depth, pruned = n_children - (i + 1), "alpha cutoff");
                break;
            }
        }
        best
    };

    node.value = Some(best);
    best
}

/// Plain minimax without pruning. Visits the whole tree to `depth` plies.
pub fn minimax(node: &mut SearchNode, depth: u32, maximizing: bool) -> i32 {
    if is_static(node, depth) {
        return leaf_value(node);
    }

    let values = node
        .children
        .iter_mut()
        .map(|child| minimax(child, depth - 1, !maximizing));
    let best = if maximizing {
        values.fold(-SCORE_INF, i32::max)
    } else {
        values.fold(SCORE_INF, i32::min)
    };

    node.value = Some(best);
    best
}

/// Alpha-beta search with the full window.
pub fn search(node: &mut SearchNode, depth: u32, maximizing: bool) -> i32 {
    alpha_beta(node, depth, -SCORE_INF, SCORE_INF, maximizing)
}

/// Pick the root move whose child carries `root_value`.
///
/// The first matching child in generation order wins. If that child's board
/// equals `current` the search degenerated, and the first legal move is
/// played instead; the same fallback applies when no child matches. Returns
/// `None` only when the root has no legal moves.
pub fn select_move(root: &SearchNode, root_value: i32, current: &Board) -> Option<Move> {
    let first = root.moves.first().copied()?;
    match root.child_with_value(root_value) {
        Some((mv, child)) if child.board != *current => Some(mv),
        _ => Some(first),
    }
}
