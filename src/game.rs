use crate::board::{Board, MoveError};
use crate::core::*;

/******************************************\
|==========================================|
|                   Game                   |
|==========================================|
\******************************************/

/// A board plus the side to move. White moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,

    stm: Colour,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Board::default())
    }
}

impl Game {
    pub fn new(board: Board) -> Self {
        Game { board, stm: Colour::White }
    }

    pub fn with_side_to_move(board: Board, stm: Colour) -> Self {
        Game { board, stm }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn stm(&self) -> Colour {
        self.stm
    }

    /// Moves a piece of the side to move and passes the turn
    pub fn play(&mut self, from: Cell, to: Cell) -> Result<(), MoveError> {
        self.board.make_move(from, self.stm, to)?;
        self.stm = !self.stm;
        Ok(())
    }

    /// Every move open to the side to move
    pub fn legal_moves(&self) -> Vec<(Cell, Cell)> {
        self.board.legal_moves(self.stm).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::default();
        assert_eq!(game.stm(), Colour::White);

        game.play(Cell::new(4, 4), Cell::new(5, 5)).unwrap();
        assert_eq!(game.stm(), Colour::Black);

        game.play(Cell::new(6, 7), Cell::new(5, 6)).unwrap();
        assert_eq!(game.stm(), Colour::White);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::default();

        assert_eq!(
            game.play(Cell::new(6, 7), Cell::new(5, 6)),
            Err(MoveError::WrongColour {
                cell: Cell::new(6, 7),
                expected: Colour::White,
                found: Colour::Black,
            })
        );
        assert_eq!(game.stm(), Colour::White);
        assert_eq!(game.board(), &Board::default());
    }

    #[test]
    fn test_legal_moves_belong_to_side_to_move() {
        let mut game = Game::default();

        for _ in 0..6 {
            let moves = game.legal_moves();
            assert!(!moves.is_empty());
            assert!(
                moves
                    .iter()
                    .all(|&(from, _)| game.board().on(from).map(Piece::colour) == Some(game.stm()))
            );

            let (from, to) = moves[0];
            game.play(from, to).unwrap();
        }
    }

    #[test]
    fn test_with_side_to_move() {
        let game = Game::with_side_to_move(Board::default(), Colour::Black);
        assert_eq!(game.stm(), Colour::Black);
        assert!(game.legal_moves().iter().all(|&(from, _)| from.rdiag >= 6));
    }
}
