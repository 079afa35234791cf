pub mod legal;
pub mod movement;
pub mod template;

pub use movement::MoveError;
pub use template::{SetupError, Template};

use crate::core::*;

/******************************************\
|==========================================|
|                 Captured                 |
|==========================================|
\******************************************/

/// A record in the capture log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Captured {
    pub colour: Colour,
    pub kind: PieceKind,
}

impl From<&Piece> for Captured {
    fn from(piece: &Piece) -> Self {
        Captured { colour: piece.colour(), kind: piece.kind() }
    }
}

/******************************************\
|==========================================|
|                  Board                   |
|==========================================|
\******************************************/

/// # Board
///
/// Dense per-cell tables for the pieces and their legal destinations, plus
/// the capture log. Both tables cover all 91 cells for the board's lifetime,
/// and the destination table is rebuilt after every mutation.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    board: [Option<Piece>; Cell::NUM],

    movable: [CellSet; Cell::NUM],

    grave: Vec<Captured>,
}

/******************************************\
|==========================================|
|               Construction               |
|==========================================|
\******************************************/

impl Board {
    /// Builds a board from a template and computes every destination set
    pub fn new(template: Template) -> Self {
        let mut board = Board {
            board: template.into_cells(),
            movable: [CellSet::EMPTY; Cell::NUM],
            grave: Vec::new(),
        };

        board.recompute();
        board
    }
}

impl Default for Board {
    /// The standard opening position
    fn default() -> Self {
        Board::new(Template::standard())
    }
}

/******************************************\
|==========================================|
|                 Queries                  |
|==========================================|
\******************************************/

impl Board {
    /// The piece standing on `cell`, if any
    #[inline]
    pub fn on(&self, cell: Cell) -> Option<&Piece> {
        cell.index().and_then(|index| self.board[index].as_ref())
    }

    /// The legal destinations of the piece on `cell`. Empty for empty and
    /// off-board cells.
    #[inline]
    pub fn movable(&self, cell: Cell) -> CellSet {
        cell.index()
            .map_or(CellSet::EMPTY, |index| self.movable[index])
    }

    #[inline]
    pub fn can_move(&self, from: Cell, to: Cell) -> bool {
        self.movable(from).contains(to)
    }

    /// Every piece on the board, in cell index order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.board.iter().flatten()
    }

    pub fn pieces_of(&self, colour: Colour) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.colour() == colour)
    }

    /// Every cell paired with its destination set
    pub fn movable_map(&self) -> impl Iterator<Item = (Cell, CellSet)> {
        Cell::iter().zip(self.movable.iter().copied())
    }

    /// Captures so far, oldest first
    #[inline]
    pub fn grave(&self) -> &[Captured] {
        &self.grave
    }

    /// Every `(from, to)` pair currently open to `colour`
    pub fn legal_moves(&self, colour: Colour) -> impl Iterator<Item = (Cell, Cell)> {
        self.pieces_of(colour).flat_map(move |piece| {
            let from = piece.cell();
            self.movable(from).into_iter().map(move |to| (from, to))
        })
    }

    /// The cell of the first king of `colour`, if one is on the board
    pub fn king(&self, colour: Colour) -> Option<Cell> {
        self.pieces_of(colour)
            .find(|piece| piece.kind() == PieceKind::King)
            .map(Piece::cell)
    }
}
