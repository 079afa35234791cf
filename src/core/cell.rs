use super::types::{Colour, Direction};
use thiserror::Error;

/******************************************\
|==========================================|
|                  Cells                   |
|==========================================|
\******************************************/

/// # Cell representation
///
/// A coordinate on the hexagonal board, addressed along its two diagonals.
///
/// - `rdiag` and `ldiag` both run from 0 to 10
/// - a coordinate is on the board when `|rdiag - ldiag| <= 5`, which cuts the
///   two corners off the 11x11 rhombus and leaves 91 cells
/// - [`Cell::EMPTY`] is the "no cell" sentinel `(-1, -1)`
///
/// Off-board coordinates are representable so that stepping past an edge can
/// be tested rather than prevented.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub rdiag: i32,
    pub ldiag: i32,
}

impl Cell {
    /// Number of cells on the board
    pub const NUM: usize = 91;

    /// Sentinel for "no cell"
    pub const EMPTY: Cell = Cell::new(-1, -1);

    /// Largest coordinate on either diagonal
    pub const MAX: i32 = 10;

    /// Largest distance between the two coordinates of an on-board cell
    pub const SPREAD: i32 = 5;
}

/******************************************\
|==========================================|
|               Index Tables               |
|==========================================|
\******************************************/

/// Index of the first cell of each `rdiag` row in the dense table
const ROW_START: [usize; 11] = [0, 6, 13, 21, 30, 40, 51, 61, 70, 78, 85];

/// Every on-board cell, ordered by `rdiag` then `ldiag`
const CELLS: [Cell; Cell::NUM] = {
    let mut cells = [Cell::EMPTY; Cell::NUM];
    let mut i = 0;
    let mut r = 0;

    while r <= Cell::MAX {
        let mut l = 0;
        while l <= Cell::MAX {
            if Cell::new(r, l).on_board() {
                cells[i] = Cell::new(r, l);
                i += 1;
            }
            l += 1;
        }
        r += 1;
    }

    cells
};

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Cell {
    #[inline]
    pub const fn new(rdiag: i32, ldiag: i32) -> Self {
        Cell { rdiag, ldiag }
    }

    /// Whether this is the [`Cell::EMPTY`] sentinel (either coordinate `-1`)
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rdiag == -1 || self.ldiag == -1
    }

    /// Whether the coordinate lies on the 91-cell board
    #[inline]
    pub const fn on_board(self) -> bool {
        self.rdiag >= 0
            && self.rdiag <= Cell::MAX
            && self.ldiag >= 0
            && self.ldiag <= Cell::MAX
            && (self.rdiag - self.ldiag).abs() <= Cell::SPREAD
    }

    /// Dense table index in `0..91`, or `None` for off-board coordinates
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if !self.on_board() {
            return None;
        }

        let row = self.rdiag as usize;
        let first = if self.rdiag > Cell::SPREAD { self.rdiag - Cell::SPREAD } else { 0 };
        Some(ROW_START[row] + (self.ldiag - first) as usize)
    }

    /// Inverse of [`Cell::index`]
    ///
    /// ## Panics
    /// - if `index >= Cell::NUM`
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        CELLS[index]
    }

    /// Iterates every on-board cell in index order
    pub fn iter() -> impl DoubleEndedIterator<Item = Cell> + ExactSizeIterator {
        CELLS.into_iter()
    }

    /// The coordinate one step away in `dir`. May be off the board.
    #[inline]
    pub const fn shift(self, dir: Direction) -> Self {
        let (dr, dl) = dir.offset();
        Cell::new(self.rdiag + dr, self.ldiag + dl)
    }

    /// Whether `other` is one orthogonal step away
    pub fn is_pawn_adjacent(self, other: Cell) -> bool {
        Direction::ORTHOGONAL
            .iter()
            .any(|&dir| self.shift(dir) == other)
    }

    /// Whether `other` is one orthogonal or diagonal step away
    pub fn is_king_adjacent(self, other: Cell) -> bool {
        Direction::ALL.iter().any(|&dir| self.shift(dir) == other)
    }

    /// Whether a pawn of `colour` standing here still has its two-step advance
    pub const fn on_pawn_start(self, colour: Colour) -> bool {
        let (r, l) = (self.rdiag, self.ldiag);

        match colour {
            Colour::White => (r == 4 && l >= 0 && l <= 4) || (l == 4 && r >= 0 && r <= 4),
            Colour::Black => (r == 6 && l >= 6 && l <= 10) || (l == 6 && r >= 6 && r <= 10),
        }
    }

    /// Whether a pawn of `colour` standing here has reached the far edge
    pub const fn on_promotion_edge(self, colour: Colour) -> bool {
        match colour {
            Colour::White => self.rdiag == Cell::MAX || self.ldiag == Cell::MAX,
            Colour::Black => self.rdiag == 0 || self.ldiag == 0,
        }
    }

    /// Reflects the cell across the long diagonal separating the two camps
    #[inline]
    pub const fn mirror(self) -> Self {
        Cell::new(Cell::MAX - self.ldiag, Cell::MAX - self.rdiag)
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.rdiag, self.ldiag)
    }
}

/******************************************\
|==========================================|
|                 Parsing                  |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCellError {
    #[error("Invalid cell string '{0}', expected two integers separated by whitespace")]
    InvalidFormat(String),

    #[error("Invalid cell coordinate '{0}'")]
    InvalidNumber(String),

    #[error("Cell ({0}) is not on the board")]
    OffBoard(Cell),
}

impl std::str::FromStr for Cell {
    type Err = ParseCellError;

    /// Parses a cell from `"rdiag ldiag"`, e.g. `"5 10"`.
    ///
    /// ```
    /// use hexchess::core::{Cell, ParseCellError};
    ///
    /// assert_eq!("5 10".parse::<Cell>(), Ok(Cell::new(5, 10)));
    /// assert!(matches!("3 10".parse::<Cell>(), Err(ParseCellError::OffBoard(_))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();

        let [rdiag, ldiag] = parts[..] else {
            return Err(ParseCellError::InvalidFormat(s.to_string()));
        };

        let coord = |part: &str| {
            part.parse::<i32>()
                .map_err(|_| ParseCellError::InvalidNumber(part.to_string()))
        };

        let cell = Cell::new(coord(rdiag)?, coord(ldiag)?);

        match cell.on_board() {
            true => Ok(cell),
            false => Err(ParseCellError::OffBoard(cell)),
        }
    }
}
