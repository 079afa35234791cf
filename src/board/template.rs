use crate::core::*;
use thiserror::Error;

/******************************************\
|==========================================|
|               Setup Errors               |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    #[error("Cell {0} is not on the board")]
    OffBoard(Cell),

    #[error("Cell {0} is already occupied")]
    Occupied(Cell),
}

/******************************************\
|==========================================|
|                 Template                 |
|==========================================|
\******************************************/

/// # Template
///
/// An initial placement of pieces, checked as it is built and turned into a
/// [`Board`](super::Board) by [`Board::new`](super::Board::new).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    cells: [Option<Piece>; Cell::NUM],
}

impl Default for Template {
    fn default() -> Self {
        Template { cells: [None; Cell::NUM] }
    }
}

/// White's opening placement. Black's is its mirror image.
#[rustfmt::skip]
const STANDARD: [(PieceKind, (i32, i32)); 18] = [
    (PieceKind::Pawn, (0, 4)), (PieceKind::Pawn, (1, 4)), (PieceKind::Pawn, (2, 4)),
    (PieceKind::Pawn, (3, 4)), (PieceKind::Pawn, (4, 4)), (PieceKind::Pawn, (4, 3)),
    (PieceKind::Pawn, (4, 2)), (PieceKind::Pawn, (4, 1)), (PieceKind::Pawn, (4, 0)),
    (PieceKind::Bishop, (0, 0)), (PieceKind::Bishop, (1, 1)), (PieceKind::Bishop, (2, 2)),
    (PieceKind::Rook, (0, 3)), (PieceKind::Rook, (3, 0)),
    (PieceKind::Knight, (0, 2)), (PieceKind::Knight, (2, 0)),
    (PieceKind::King, (1, 0)), (PieceKind::Queen, (0, 1)),
];

impl Template {
    /// An empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// The opening position of the game
    pub fn standard() -> Self {
        let mut template = Template::new();

        for (kind, (r, l)) in STANDARD {
            let cell = Cell::new(r, l);
            template.place(Piece::new(kind, Colour::White, cell));
            template.place(Piece::new(kind, Colour::Black, cell.mirror()));
        }

        template
    }

    /// Places `piece` on its own cell
    pub fn add(&mut self, piece: Piece) -> Result<&mut Self, SetupError> {
        let cell = piece.cell();
        let index = cell.index().ok_or(SetupError::OffBoard(cell))?;

        if self.cells[index].is_some() {
            return Err(SetupError::Occupied(cell));
        }

        self.cells[index] = Some(piece);
        Ok(self)
    }

    #[inline]
    pub fn on(&self, cell: Cell) -> Option<&Piece> {
        cell.index().and_then(|index| self.cells[index].as_ref())
    }

    /// Placement of a known-good fixed layout
    fn place(&mut self, piece: Piece) {
        debug_assert!(self.on(piece.cell()).is_none(), "{piece} placed twice");

        if let Some(index) = piece.cell().index() {
            self.cells[index] = Some(piece);
        }
    }

    pub(crate) fn into_cells(self) -> [Option<Piece>; Cell::NUM] {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_conflicts() {
        let mut template = Template::new();
        let rook = Piece::new(PieceKind::Rook, Colour::White, Cell::new(5, 5));

        assert!(template.add(rook).is_ok());
        assert_eq!(template.on(Cell::new(5, 5)), Some(&rook));

        let knight = Piece::new(PieceKind::Knight, Colour::Black, Cell::new(5, 5));
        assert_eq!(template.add(knight), Err(SetupError::Occupied(Cell::new(5, 5))));
        assert_eq!(template.on(Cell::new(5, 5)), Some(&rook));

        let stray = Piece::new(PieceKind::Queen, Colour::White, Cell::new(0, 9));
        assert_eq!(template.add(stray), Err(SetupError::OffBoard(Cell::new(0, 9))));
    }

    #[test]
    fn test_standard_layout() {
        let template = Template::standard();
        let pieces: Vec<&Piece> = Cell::iter().filter_map(|cell| template.on(cell)).collect();

        assert_eq!(pieces.len(), 36);

        for colour in Colour::iter() {
            let count = |kind| {
                pieces
                    .iter()
                    .filter(|p| p.colour() == colour && p.kind() == kind)
                    .count()
            };

            assert_eq!(count(PieceKind::Pawn), 9);
            assert_eq!(count(PieceKind::Bishop), 3);
            assert_eq!(count(PieceKind::Rook), 2);
            assert_eq!(count(PieceKind::Knight), 2);
            assert_eq!(count(PieceKind::Queen), 1);
            assert_eq!(count(PieceKind::King), 1);
        }

        assert!(
            pieces
                .iter()
                .filter(|p| p.kind() == PieceKind::Pawn)
                .all(|p| p.has_double_step())
        );

        let king = template.on(Cell::new(10, 9)).copied();
        assert_eq!(king.map(|p| (p.kind(), p.colour())), Some((PieceKind::King, Colour::Black)));
        let queen = template.on(Cell::new(9, 10)).copied();
        assert_eq!(queen.map(|p| (p.kind(), p.colour())), Some((PieceKind::Queen, Colour::Black)));
    }
}
