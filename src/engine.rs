//! State and move model for the 8-tile sliding puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Tile`: a single cell, either a numbered tile or the blank.
//! - `Board`: an immutable 3x3 arrangement of the eight tiles and the blank,
//!   identified by its row-major canonical encoding.
//! - `Move`: a slide of one neighbouring tile into the blank, looked up from a
//!   fixed adjacency table.
use crate::error::{Error, Result};
use std::fmt;

/// Number of rows on the board.
pub const ROWS: usize = 3;
/// Number of columns on the board.
pub const COLS: usize = 3;
/// Number of cells on the board.
pub const CELLS: usize = ROWS * COLS;

/// Encoding of the blank cell in a canonical encoding.
pub const BLANK: u8 = 0;

const GOAL_CELLS: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, BLANK];

/// Represents the content of one cell on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// The single empty cell that neighbouring tiles slide into.
    Blank,
    /// A numbered tile, labelled 1 through 8.
    Number(u8),
}

impl Tile {
    /// Converts the tile to its character representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzle_slider::engine::Tile;
    /// assert_eq!(Tile::Number(7).to_char(), '7');
    /// assert_eq!(Tile::Blank.to_char(), 'E');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Tile::Blank => 'E',
            Tile::Number(n) => char::from(b'0' + n),
        }
    }

    fn from_code(code: u8) -> Self {
        if code == BLANK {
            Tile::Blank
        } else {
            Tile::Number(code)
        }
    }
}

/// A transition that slides the tile at `target` into the blank at `blank`.
///
/// Positions are row-major cell indices (0..9). Moves are only obtained from
/// [`legal_moves`], so `target` is always orthogonally adjacent to `blank`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    blank: u8,
    target: u8,
}

impl Move {
    /// Row-major index of the blank before the move.
    pub fn blank(&self) -> usize {
        self.blank as usize
    }

    /// Row-major index of the tile that slides into the blank.
    pub fn target(&self) -> usize {
        self.target as usize
    }

    /// Human-readable descriptor, numbering positions 1..=9.
    ///
    /// ```
    /// use puzzle_slider::engine::legal_moves;
    /// let first = legal_moves((0, 0))[0];
    /// assert_eq!(first.descriptor(), "1 to 2");
    /// ```
    pub fn descriptor(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.blank + 1, self.target + 1)
    }
}

const fn mv(blank: u8, target: u8) -> Move {
    Move { blank, target }
}

// Per blank position: right, down, left, up (whichever exist).
const MOVE_TABLE: [&[Move]; CELLS] = [
    &[mv(0, 1), mv(0, 3)],
    &[mv(1, 2), mv(1, 4), mv(1, 0)],
    &[mv(2, 5), mv(2, 1)],
    &[mv(3, 4), mv(3, 6), mv(3, 0)],
    &[mv(4, 5), mv(4, 7), mv(4, 3), mv(4, 1)],
    &[mv(5, 8), mv(5, 4), mv(5, 2)],
    &[mv(6, 7), mv(6, 3)],
    &[mv(7, 8), mv(7, 6), mv(7, 4)],
    &[mv(8, 7), mv(8, 5)],
];

/// Returns the legal moves for a blank at `(row, col)`.
///
/// A corner blank admits 2 moves, an edge blank 3, and the centre blank 4.
/// The order (right, down, left, up) is fixed, which makes every search
/// strategy deterministic.
///
/// # Panics
/// Panics if `row` or `col` lie outside the 3x3 grid.
pub fn legal_moves(blank: (usize, usize)) -> &'static [Move] {
    let (r, c) = blank;
    assert!(r < ROWS && c < COLS, "blank position ({}, {}) is off the board", r, c);
    MOVE_TABLE[r * COLS + c]
}

/// Converts a row-major index into `(row, col)`.
pub fn position_of(index: usize) -> (usize, usize) {
    (index / COLS, index % COLS)
}

/// An immutable arrangement of the eight tiles and the blank.
///
/// The board is stored as its canonical encoding: the row-major sequence of
/// labels with the blank as `0`. Equality and hashing use that encoding, so
/// two boards are equal iff their encodings are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// Returns the goal arrangement `12345678E`.
    pub fn goal() -> Self {
        Board { cells: GOAL_CELLS }
    }

    /// Creates a board from a row-major encoding, validating that each of
    /// `0..=8` appears exactly once.
    ///
    /// # Examples
    /// ```
    /// use puzzle_slider::engine::Board;
    /// assert!(Board::from_cells([2, 1, 3, 4, 5, 6, 7, 8, 0]).is_ok());
    /// assert!(Board::from_cells([1, 1, 3, 4, 5, 6, 7, 8, 0]).is_err());
    /// ```
    pub fn from_cells(cells: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for (i, &code) in cells.iter().enumerate() {
            let slot = seen.get_mut(code as usize).ok_or_else(|| {
                Error::InvalidState(format!("label {} at position {} is out of range", code, i + 1))
            })?;
            if *slot {
                let what = if code == BLANK {
                    "blank".to_string()
                } else {
                    format!("label {}", code)
                };
                return Err(Error::InvalidState(format!("{} appears more than once", what)));
            }
            *slot = true;
        }
        Ok(Board { cells })
    }

    /// Returns the canonical encoding of this board.
    pub fn encode(&self) -> [u8; CELLS] {
        self.cells
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board.
    pub fn get_tile(&self, r: usize, c: usize) -> Tile {
        assert!(r < ROWS && c < COLS, "cell ({}, {}) is off the board", r, c);
        Tile::from_code(self.cells[r * COLS + c])
    }

    /// Returns the `(row, col)` of the blank.
    pub fn locate_blank(&self) -> Result<(usize, usize)> {
        self.cells
            .iter()
            .position(|&code| code == BLANK)
            .map(position_of)
            .ok_or_else(|| Error::InvalidState(format!("board {} has no blank", self)))
    }

    /// Returns the board reached by applying `mv`, leaving `self` untouched.
    ///
    /// `mv` must come from [`legal_moves`] for this board's blank.
    pub fn apply(&self, mv: Move) -> Board {
        debug_assert_eq!(self.cells[mv.blank()], BLANK, "move {} does not start at the blank", mv);
        let mut cells = self.cells;
        cells.swap(mv.blank(), mv.target());
        Board { cells }
    }

    /// Lists every `(move, resulting board)` pair reachable in one slide.
    pub fn successors(&self) -> Result<Vec<(Move, Board)>> {
        let blank = self.locate_blank()?;
        Ok(legal_moves(blank)
            .iter()
            .map(|&mv| (mv, self.apply(mv)))
            .collect())
    }

    /// Checks whether this board is the goal arrangement.
    pub fn is_goal(&self) -> bool {
        self.cells == GOAL_CELLS
    }

    /// Formats the board as three lines of tab-separated cells.
    pub fn to_grid_string(&self) -> String {
        let mut output = String::new();
        for r in 0..ROWS {
            let row: Vec<String> = (0..COLS)
                .map(|c| self.get_tile(r, c).to_char().to_string())
                .collect();
            output.push_str(&row.join("\t"));
            if r < ROWS - 1 {
                output.push('\n');
            }
        }
        output
    }
}

impl fmt::Display for Board {
    /// Writes the canonical encoding with the blank as `E`, e.g. `12345678E`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &code in &self.cells {
            write!(f, "{}", Tile::from_code(code).to_char())?;
        }
        Ok(())
    }
}
