use super::cell::Cell;
use super::ray::Ray;
use super::types::{Colour, Direction};

/******************************************\
|==========================================|
|                Piece Kind                |
|==========================================|
\******************************************/

/// # Piece Kind representation
///
/// - Represents the six kinds of piece, independent of colour

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    King, Queen, Rook, Bishop, Knight, Pawn,
}

impl PieceKind {
    /// Number of elements in the PieceKind enum
    pub const NUM: usize = 6;
}

crate::impl_from_to_primitive!(PieceKind);
crate::impl_enum_iter!(PieceKind);

/******************************************\
|==========================================|
|               Pawn Rules                 |
|==========================================|
\******************************************/

/// # Pawn Rules
///
/// Flags carried by a pawn between moves.
///
/// - `DOUBLE_STEP`: still in its starting band, may advance two cells
/// - `EN_PASSANT`: has just advanced two cells and may be passed diagonally
/// - `PROMOTION`: has reached the far edge
///
/// Other pieces always carry [`PawnRules::NONE`].

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PawnRules(pub u8);

crate::impl_bit_ops!(PawnRules);

impl PawnRules {
    pub const NONE: PawnRules = PawnRules(0);
    pub const EN_PASSANT: PawnRules = PawnRules(1);
    pub const DOUBLE_STEP: PawnRules = PawnRules(2);
    pub const PROMOTION: PawnRules = PawnRules(4);
    pub const ALL: PawnRules = PawnRules(7);

    /// Returns true if every flag in `flags` is set
    #[inline]
    pub const fn has(self, flags: PawnRules) -> bool {
        self.0 & flags.0 == flags.0
    }

    #[inline]
    pub fn set(&mut self, flags: PawnRules) {
        *self |= flags;
    }

    #[inline]
    pub fn remove(&mut self, flags: PawnRules) {
        *self &= !flags;
    }
}

impl std::ops::Not for PawnRules {
    type Output = Self;

    fn not(self) -> Self::Output {
        PawnRules(!self.0 & PawnRules::ALL.0)
    }
}

/******************************************\
|==========================================|
|                  Pieces                  |
|==========================================|
\******************************************/

/// Colour and position of a piece with no per-move state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    colour: Colour,
    cell: Cell,
}

/// Colour, position and rule flags of a pawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pawn {
    colour: Colour,
    cell: Cell,
    rules: PawnRules,
}

/// # Piece representation
///
/// A piece on the board. The variant fixes the movement pattern, and only
/// pawns carry [`PawnRules`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Piece {
    King(Unit),
    Queen(Unit),
    Rook(Unit),
    Bishop(Unit),
    Knight(Unit),
    Pawn(Pawn),
}

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl PieceKind {
    /// Directions and per-direction step limit of every kind but the pawn,
    /// whose pattern depends on its colour and flags
    const fn pattern(self) -> (&'static [Direction], u32) {
        match self {
            PieceKind::King => (&Direction::ALL, 1),
            PieceKind::Queen => (&Direction::ALL, Ray::UNBOUNDED),
            PieceKind::Rook => (&Direction::ORTHOGONAL, Ray::UNBOUNDED),
            PieceKind::Bishop => (&Direction::DIAGONAL, Ray::UNBOUNDED),
            PieceKind::Knight => (&Direction::KNIGHT, 1),
            PieceKind::Pawn => (&[], 0),
        }
    }
}

impl Unit {
    #[inline]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    #[inline]
    pub const fn cell(&self) -> Cell {
        self.cell
    }
}

impl Pawn {
    #[inline]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    #[inline]
    pub const fn cell(&self) -> Cell {
        self.cell
    }

    #[inline]
    pub const fn rules(&self) -> PawnRules {
        self.rules
    }

    /// Moves the pawn and updates its flags.
    ///
    /// - reaching the far edge sets `PROMOTION`
    /// - `EN_PASSANT` only lasts for one move of this pawn
    /// - leaving the starting band drops `DOUBLE_STEP`, and sets `EN_PASSANT`
    ///   when the move that left it was a two-cell advance
    fn relocate(&mut self, to: Cell) {
        let two_step = !self.cell.is_pawn_adjacent(to);
        self.cell = to;

        if to.on_promotion_edge(self.colour) {
            self.rules.set(PawnRules::PROMOTION);
        }

        self.rules.remove(PawnRules::EN_PASSANT);

        if self.rules.has(PawnRules::DOUBLE_STEP) && !to.on_pawn_start(self.colour) {
            self.rules.remove(PawnRules::DOUBLE_STEP);

            if two_step {
                self.rules.set(PawnRules::EN_PASSANT);
            }
        }
    }
}

impl Piece {
    /// Creates a piece. A pawn placed in its starting band receives `DOUBLE_STEP`.
    pub const fn new(kind: PieceKind, colour: Colour, cell: Cell) -> Self {
        let unit = Unit { colour, cell };

        match kind {
            PieceKind::King => Piece::King(unit),
            PieceKind::Queen => Piece::Queen(unit),
            PieceKind::Rook => Piece::Rook(unit),
            PieceKind::Bishop => Piece::Bishop(unit),
            PieceKind::Knight => Piece::Knight(unit),
            PieceKind::Pawn => {
                let rules = match cell.on_pawn_start(colour) {
                    true => PawnRules::DOUBLE_STEP,
                    false => PawnRules::NONE,
                };
                Piece::pawn(colour, cell, rules)
            }
        }
    }

    /// Creates a pawn with explicit flags
    pub const fn pawn(colour: Colour, cell: Cell, rules: PawnRules) -> Self {
        Piece::Pawn(Pawn { colour, cell, rules })
    }

    pub const fn kind(&self) -> PieceKind {
        match self {
            Piece::King(_) => PieceKind::King,
            Piece::Queen(_) => PieceKind::Queen,
            Piece::Rook(_) => PieceKind::Rook,
            Piece::Bishop(_) => PieceKind::Bishop,
            Piece::Knight(_) => PieceKind::Knight,
            Piece::Pawn(_) => PieceKind::Pawn,
        }
    }

    pub const fn colour(&self) -> Colour {
        match self {
            Piece::King(u) | Piece::Queen(u) | Piece::Rook(u) | Piece::Bishop(u) | Piece::Knight(u) => {
                u.colour
            }
            Piece::Pawn(p) => p.colour,
        }
    }

    pub const fn cell(&self) -> Cell {
        match self {
            Piece::King(u) | Piece::Queen(u) | Piece::Rook(u) | Piece::Bishop(u) | Piece::Knight(u) => {
                u.cell
            }
            Piece::Pawn(p) => p.cell,
        }
    }

    /// Pawn flags, [`PawnRules::NONE`] for every other kind
    pub const fn rules(&self) -> PawnRules {
        match self {
            Piece::Pawn(p) => p.rules,
            _ => PawnRules::NONE,
        }
    }

    #[inline]
    pub const fn can_promote(&self) -> bool {
        self.rules().has(PawnRules::PROMOTION)
    }

    #[inline]
    pub const fn can_be_passed(&self) -> bool {
        self.rules().has(PawnRules::EN_PASSANT)
    }

    #[inline]
    pub const fn has_double_step(&self) -> bool {
        self.rules().has(PawnRules::DOUBLE_STEP)
    }

    /// The unfiltered movement pattern: one ray per direction, clipped to the board.
    ///
    /// For a pawn the forward ray comes first, with two steps while it holds
    /// `DOUBLE_STEP`, followed by its two capture rays of one step each.
    pub fn rays(&self) -> Rays {
        let origin = self.cell();

        match self {
            Piece::Pawn(p) => Rays {
                origin,
                directions: p.colour.pawn_directions(),
                limit: 1,
                first_limit: if p.rules.has(PawnRules::DOUBLE_STEP) { 2 } else { 1 },
                next: 0,
            },
            _ => {
                let (directions, limit) = self.kind().pattern();
                Rays { origin, directions, limit, first_limit: limit, next: 0 }
            }
        }
    }

    /// Moves the piece to `to`, updating pawn flags. No legality is checked.
    pub fn relocate(&mut self, to: Cell) {
        match self {
            Piece::King(u) | Piece::Queen(u) | Piece::Rook(u) | Piece::Bishop(u) | Piece::Knight(u) => {
                u.cell = to
            }
            Piece::Pawn(p) => p.relocate(to),
        }
    }
}

/******************************************\
|==========================================|
|                   Rays                   |
|==========================================|
\******************************************/

/// The rays of a piece's movement pattern, see [`Piece::rays`]
#[derive(Debug, Clone)]
pub struct Rays {
    origin: Cell,
    directions: &'static [Direction],
    limit: u32,
    first_limit: u32,
    next: usize,
}

impl Iterator for Rays {
    type Item = Ray;

    fn next(&mut self) -> Option<Self::Item> {
        let dir = *self.directions.get(self.next)?;
        let limit = if self.next == 0 { self.first_limit } else { self.limit };

        self.next += 1;
        Some(Ray::new(self.origin, dir, limit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.directions.len() - self.next;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Rays {}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

const KIND_STR: &[u8; PieceKind::NUM] = b"KQRBNP";

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", KIND_STR[self.index()] as char)
    }
}

impl std::fmt::Display for Piece {
    /// Uppercase for white, lowercase for black, followed by the cell
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = KIND_STR[self.kind().index()] as char;
        let letter = match self.colour() {
            Colour::White => letter,
            Colour::Black => letter.to_ascii_lowercase(),
        };
        write!(f, "{letter}@{}", self.cell())
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
