//! # hexchess
//!
//! Legal-move computation for hexagonal chess on the 91-cell board.
//!
//! A [`Board`] keeps, for every cell, the set of destinations the piece
//! standing there may legally move to. The sets are rebuilt after every
//! move, so queries are plain lookups.
pub mod board;
pub mod core;
pub mod game;

pub use crate::core::*;
pub use board::{Board, Captured, MoveError, SetupError, Template};
pub use game::Game;
