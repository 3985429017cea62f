//! Move legality and the capture-and-flip transition.
//!
//! A placement is legal when the target cell is empty and, in at least one of
//! the 8 directions, an unbroken run of opposing discs is closed off by one of
//! the mover's own discs. Applying the move flips every such run.

use crate::board::{Board, Move, Player};
use crate::constants::{DIRECTIONS, N};
use crate::error::MoveError;

/// Step one cell from `(row, col)` by `(dr, dc)`, or `None` off the grid.
#[inline]
fn step(row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    (r < N && c < N).then_some((r, c))
}

/// Length of the opposing run flanked from `(row, col)` in direction `dir`,
/// or 0 if the run is empty, hits an empty cell, or runs off the board.
fn flank_length(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
    dir: (isize, isize),
) -> usize {
    let opp = player.opponent();
    let mut len = 0;
    let (mut r, mut c) = (row, col);
    loop {
        let Some((nr, nc)) = step(r, c, dir) else {
            return 0;
        };
        match board.cell_at(nr, nc) {
            Some(p) if p == opp => len += 1,
            Some(_) => return len,
            None => return 0,
        }
        (r, c) = (nr, nc);
    }
}

/// Check whether `player` may place a disc at `(row, col)`.
///
/// The cell must be empty and at least one direction must capture.
pub fn is_capture_move(board: &Board, row: usize, col: usize, player: Player) -> bool {
    board.is_empty_at(row, col)
        && DIRECTIONS
            .iter()
            .any(|&dir| flank_length(board, row, col, player, dir) > 0)
}

/// All legal placements for `player`, in row-major order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..N {
        for col in 0..N {
            if is_capture_move(board, row, col, player) {
                moves.push(Move::new(row, col));
            }
        }
    }
    moves
}

/// Whether `player` has any legal placement. Stops at the first one found.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    (0..N).any(|row| (0..N).any(|col| is_capture_move(board, row, col, player)))
}

/// Place a disc for `player` and flip every flanked run.
///
/// Returns the number of discs flipped. The move must already be known to be
/// legal; use [`play_move`] for unchecked input.
pub fn apply_move(board: &mut Board, mv: Move, player: Player) -> usize {
    debug_assert!(
        is_capture_move(board, mv.row, mv.col, player),
        "apply_move called with illegal move {mv} for {player}"
    );

    // Collect run lengths before mutating so later directions see the
    // original position.
    let runs = DIRECTIONS.map(|dir| flank_length(board, mv.row, mv.col, player, dir));

    board.set_cell(mv.row, mv.col, Some(player));
    let mut flipped = 0;
    for (dir, len) in DIRECTIONS.into_iter().zip(runs) {
        let (mut r, mut c) = (mv.row, mv.col);
        for _ in 0..len {
            // In range: flank_length walked these cells already.
            if let Some((nr, nc)) = step(r, c, dir) {
                board.set_cell(nr, nc, Some(player));
                (r, c) = (nr, nc);
            }
        }
        flipped += len;
    }
    flipped
}

/// Check a proposed move without changing the board.
pub fn validate_move(board: &Board, mv: Move, player: Player) -> Result<(), MoveError> {
    let Move { row, col } = mv;
    if !mv.in_range() {
        return Err(MoveError::OutOfRange { row, col });
    }
    if !board.is_empty_at(row, col) {
        return Err(MoveError::Occupied { row, col });
    }
    if !is_capture_move(board, row, col, player) {
        return Err(MoveError::NoCapture { row, col });
    }
    Ok(())
}

/// Validate and apply a move. Returns the number of discs flipped.
///
/// # Errors
/// - [`MoveError::OutOfRange`] if either coordinate is off the board
/// - [`MoveError::Occupied`] if the cell already holds a disc
/// - [`MoveError::NoCapture`] if the move would flip nothing
pub fn play_move(board: &mut Board, mv: Move, player: Player) -> Result<usize, MoveError> {
    validate_move(board, mv, player)?;
    Ok(apply_move(board, mv, player))
}

/// True when neither side has a legal move.
pub fn is_terminal(board: &Board) -> bool {
    !has_legal_move(board, Player::Black) && !has_legal_move(board, Player::White)
}
