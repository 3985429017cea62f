//! Constants for board geometry, heuristic weights, and search limits.
//!
//! The board is a fixed 8x8 grid stored row-major in a flat array, so a cell
//! at `(row, col)` lives at index `row * N + col`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Fixed by the rules of the game.
pub const N: usize = 8;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

/// Row/column offsets to the 8 neighbouring cells.
/// Order: NW, N, NE, W, E, SW, S, SE (row-major around the centre).
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The four corner cells, which can never be flipped once taken.
pub const CORNERS: [(usize, usize); 4] = [(0, 0), (N - 1, 0), (0, N - 1), (N - 1, N - 1)];

/// Cells occupied at the start of a game: `(row, col, is_black)`.
pub const START_DISCS: [(usize, usize, bool); 4] = [
    (3, 3, false),
    (3, 4, true),
    (4, 3, true),
    (4, 4, false),
];

// =============================================================================
// Heuristic Weights
// =============================================================================

/// Bonus per corner held.
pub const CORNER_BONUS: i32 = 10;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 5;

/// Largest accepted search depth. The whole tree is built before searching,
/// so memory grows with the branching factor raised to this power.
pub const MAX_DEPTH: u32 = 6;

/// Bound used as +/- infinity for alpha-beta windows. Larger than any
/// reachable heuristic value.
pub const SCORE_INF: i32 = 9_999_999;

// =============================================================================
// Cell Characters
// =============================================================================

/// Printed and parsed character for a Black disc.
pub const CHAR_BLACK: char = 'b';

/// Printed and parsed character for a White disc.
pub const CHAR_WHITE: char = 'w';

/// Printed character for an empty cell. `.` is also accepted when parsing.
pub const CHAR_EMPTY: char = '-';
