use super::{Board, Captured};
use crate::core::*;
use thiserror::Error;
use tracing::debug;

/******************************************\
|==========================================|
|               Move Errors                |
|==========================================|
\******************************************/

/// Reasons a move request is refused. A refused move leaves the board untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("No piece on {0}")]
    EmptyOrigin(Cell),

    #[error("Piece on {cell} is {found:?}, expected {expected:?}")]
    WrongColour {
        cell: Cell,
        expected: Colour,
        found: Colour,
    },

    #[error("{to} is not a legal destination from {from}")]
    IllegalDestination { from: Cell, to: Cell },
}

/******************************************\
|==========================================|
|                Make Move                 |
|==========================================|
\******************************************/

impl Board {
    /// Moves the `colour` piece on `from` to `to`.
    ///
    /// Checks, in order, that `from` holds a piece, that it belongs to
    /// `colour`, and that `to` is in its destination set. On success any piece
    /// on `to` goes to the capture log, the mover is relocated, and every
    /// destination set is recomputed before returning.
    ///
    /// Turn order is not enforced here, see [`Game`](crate::Game).
    pub fn make_move(&mut self, from: Cell, colour: Colour, to: Cell) -> Result<(), MoveError> {
        let (from_index, to_index, mut piece) = self
            .validate(from, colour, to)
            .inspect_err(|err| debug!(%err, "move rejected"))?;

        if let Some(victim) = self.board[to_index].take() {
            debug!(victim = %victim, by = %piece, "piece captured");
            self.grave.push(Captured::from(&victim));
        }

        piece.relocate(to);
        self.board[from_index] = None;
        self.board[to_index] = Some(piece);

        self.recompute();

        debug!(%from, %to, ?colour, "move applied");
        Ok(())
    }

    /// Slot indices of both cells and a copy of the mover
    fn validate(&self, from: Cell, colour: Colour, to: Cell) -> Result<(usize, usize, Piece), MoveError> {
        let (from_index, piece) = from
            .index()
            .and_then(|index| self.board[index].map(|piece| (index, piece)))
            .ok_or(MoveError::EmptyOrigin(from))?;

        if piece.colour() != colour {
            return Err(MoveError::WrongColour { cell: from, expected: colour, found: piece.colour() });
        }

        let to_index = to
            .index()
            .filter(|_| self.movable[from_index].contains(to))
            .ok_or(MoveError::IllegalDestination { from, to })?;

        Ok((from_index, to_index, piece))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Template;

    fn board() -> Board {
        let mut template = Template::new();
        template
            .add(Piece::new(PieceKind::Rook, Colour::White, Cell::new(5, 5)))
            .unwrap()
            .add(Piece::new(PieceKind::Knight, Colour::Black, Cell::new(8, 8)))
            .unwrap()
            .add(Piece::new(PieceKind::King, Colour::Black, Cell::new(10, 9)))
            .unwrap();
        Board::new(template)
    }

    #[test]
    fn test_move_updates_board() {
        let mut board = board();

        board.make_move(Cell::new(5, 5), Colour::White, Cell::new(5, 0)).unwrap();

        assert!(board.on(Cell::new(5, 5)).is_none());
        assert_eq!(board.on(Cell::new(5, 0)).map(Piece::cell), Some(Cell::new(5, 0)));
        assert!(board.movable(Cell::new(5, 5)).is_empty());
        assert!(board.can_move(Cell::new(5, 0), Cell::new(10, 5)));
        assert!(board.grave().is_empty());
    }

    #[test]
    fn test_capture_goes_to_grave() {
        let mut board = board();

        board.make_move(Cell::new(5, 5), Colour::White, Cell::new(8, 8)).unwrap();

        assert_eq!(board.on(Cell::new(8, 8)).map(Piece::kind), Some(PieceKind::Rook));
        assert_eq!(
            board.grave(),
            &[Captured { colour: Colour::Black, kind: PieceKind::Knight }]
        );
    }

    #[test]
    fn test_empty_origin() {
        let mut board = board();
        let before = board.clone();

        assert_eq!(
            board.make_move(Cell::new(0, 0), Colour::White, Cell::new(1, 1)),
            Err(MoveError::EmptyOrigin(Cell::new(0, 0)))
        );
        assert_eq!(
            board.make_move(Cell::new(0, 7), Colour::White, Cell::new(1, 1)),
            Err(MoveError::EmptyOrigin(Cell::new(0, 7)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_wrong_colour() {
        let mut board = board();
        let before = board.clone();

        assert_eq!(
            board.make_move(Cell::new(5, 5), Colour::Black, Cell::new(6, 6)),
            Err(MoveError::WrongColour {
                cell: Cell::new(5, 5),
                expected: Colour::Black,
                found: Colour::White,
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_illegal_destination() {
        let mut board = board();
        let before = board.clone();

        for to in [Cell::new(6, 7), Cell::new(9, 9), Cell::new(5, 5), Cell::new(0, 9)] {
            assert_eq!(
                board.make_move(Cell::new(5, 5), Colour::White, to),
                Err(MoveError::IllegalDestination { from: Cell::new(5, 5), to })
            );
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(MoveError::EmptyOrigin(Cell::new(1, 2)).to_string(), "No piece on 1 2");
        assert_eq!(
            MoveError::IllegalDestination { from: Cell::new(5, 5), to: Cell::new(6, 7) }.to_string(),
            "6 7 is not a legal destination from 5 5"
        );
    }
}
