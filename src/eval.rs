//! Static evaluation of a position.
//!
//! Each side scores one point per legal move, one per disc, and
//! [`CORNER_BONUS`] per corner held. The evaluation is Black's score minus
//! White's, so Black is always the maximizing side.

use crate::board::{Board, Player};
use crate::constants::{CORNERS, CORNER_BONUS};
use crate::rules::legal_moves;

/// Number of corners held by `player`.
pub fn corners_held(board: &Board, player: Player) -> usize {
    CORNERS
        .iter()
        .filter(|&&(r, c)| board.cell_at(r, c) == Some(player))
        .count()
}

/// One side's term of the heuristic: mobility + discs + corner bonus.
pub fn player_score(board: &Board, player: Player) -> i32 {
    let mobility = legal_moves(board, player).len() as i32;
    let discs = board.count_of(player) as i32;
    mobility + discs + CORNER_BONUS * corners_held(board, player) as i32
}

/// Signed evaluation: positive favours Black, negative favours White.
pub fn evaluate(board: &Board) -> i32 {
    player_score(board, Player::Black) - player_score(board, Player::White)
}
