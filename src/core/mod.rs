// Core value types shared by the board and the game

pub mod cell;
pub mod cellset;
pub mod macros;
pub mod piece;
pub mod ray;
pub mod types;

pub use cell::{Cell, ParseCellError};
pub use cellset::{CellSet, CellSetIter};
pub use piece::{Pawn, PawnRules, Piece, PieceKind, Rays, Unit};
pub use ray::{Bound, Ray, RayIter, Step};
pub use types::{Colour, Direction};
