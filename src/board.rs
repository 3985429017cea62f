//! The 8x8 board: cell storage, occupancy queries and text form.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CELLS, CHAR_BLACK, CHAR_EMPTY, CHAR_WHITE, N, START_DISCS};
use crate::error::BoardParseError;

/// One of the two sides. Black always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Character used for this side's discs on a printed board.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => CHAR_BLACK,
            Player::White => CHAR_WHITE,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// A board coordinate. Rows and columns run 0..8 from the top left.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates fall on the grid.
    #[inline]
    pub fn in_range(self) -> bool {
        self.row < N && self.col < N
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Cell states, row-major. `None` is an empty cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Player>; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position with four centre discs.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (row, col, is_black) in START_DISCS {
            let player = if is_black { Player::Black } else { Player::White };
            board.set_cell(row, col, Some(player));
        }
        board
    }

    /// A board with no discs at all.
    pub fn empty() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    #[inline]
    fn idx(row: usize, col: usize) -> usize {
        debug_assert!(row < N && col < N, "cell ({row},{col}) off the board");
        row * N + col
    }

    /// Contents of a cell. Coordinates must be in range.
    #[inline]
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[Self::idx(row, col)]
    }

    /// Overwrite a cell. Coordinates must be in range.
    #[inline]
    pub fn set_cell(&mut self, row: usize, col: usize, state: Option<Player>) {
        self.cells[Self::idx(row, col)] = state;
    }

    #[inline]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cell_at(row, col).is_none()
    }

    /// Number of discs `player` has on the board.
    pub fn count_of(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    #[cfg(test)]
    fn empties(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// The same position with every disc's colour swapped.
    pub fn inverted(&self) -> Self {
        let mut cells = self.cells;
        for c in &mut cells {
            *c = c.map(Player::opponent);
        }
        Self { cells }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..N {
            write!(f, " {col} ")?;
        }
        writeln!(f)?;
        for row in 0..N {
            write!(f, "{row} ")?;
            for col in 0..N {
                let ch = match self.cell_at(row, col) {
                    Some(p) => p.symbol(),
                    None => CHAR_EMPTY,
                };
                write!(f, " {ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse 64 cell characters in row-major order. Whitespace is ignored,
    /// so a diagram can be written one row per line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut i = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let state = match ch {
                'b' | 'B' => Some(Player::Black),
                'w' | 'W' => Some(Player::White),
                '-' | '.' => None,
                other => {
                    return Err(BoardParseError::InvalidCell {
                        character: other,
                        position: i,
                    });
                }
            };
            if i < CELLS {
                board.cells[i] = state;
            }
            i += 1;
        }
        if i != CELLS {
            return Err(BoardParseError::WrongLength { got: i });
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_centre() {
        let board = Board::new();
        assert_eq!(board.cell_at(3, 3), Some(Player::White));
        assert_eq!(board.cell_at(3, 4), Some(Player::Black));
        assert_eq!(board.cell_at(4, 3), Some(Player::Black));
        assert_eq!(board.cell_at(4, 4), Some(Player::White));
        assert_eq!(board.count_of(Player::Black), 2);
        assert_eq!(board.count_of(Player::White), 2);
        assert_eq!(board.empties(), 60);
    }

    #[test]
    fn test_set_cell() {
        let mut board = Board::empty();
        board.set_cell(7, 0, Some(Player::Black));
        assert_eq!(board.cell_at(7, 0), Some(Player::Black));
        assert!(board.is_empty_at(0, 7));
        board.set_cell(7, 0, None);
        assert_eq!(board.count_of(Player::Black), 0);
    }

    #[test]
    fn test_inverted() {
        let board = Board::new().inverted();
        assert_eq!(board.cell_at(3, 3), Some(Player::Black));
        assert_eq!(board.cell_at(3, 4), Some(Player::White));
        assert_eq!(board.inverted(), Board::new());
    }

    #[test]
    fn test_parse_matches_display_cells() {
        let text = "\
            --------
            --------
            --------
            ---wb---
            ---bw---
            --------
            --------
            --------";
        let board: Board = text.parse().unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "bw".parse::<Board>(),
            Err(BoardParseError::WrongLength { got: 2 })
        );
        let bad = format!("x{}", "-".repeat(63));
        assert_eq!(
            bad.parse::<Board>(),
            Err(BoardParseError::InvalidCell {
                character: 'x',
                position: 0
            })
        );
        assert_eq!(
            "-".repeat(65).parse::<Board>(),
            Err(BoardParseError::WrongLength { got: 65 })
        );
    }

    #[test]
    fn test_display() {
        let out = Board::new().to_string();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "   0  1  2  3  4  5  6  7 ");
        assert_eq!(lines[4], "3  -  -  -  w  b  -  -  - ");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }
}
