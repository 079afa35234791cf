/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// The two sides of a game. White starts on the low cells of the board and
/// advances towards `rdiag == 10` / `ldiag == 10`.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);
crate::impl_enum_iter!(Colour);

/******************************************\
|==========================================|
|                 Direction                |
|==========================================|
\******************************************/

/// # Direction Representation
///
/// Every step a piece can take, named after the clock position it points at.
///
/// - `OrthoN` moves across an edge into a neighbouring cell
/// - `DiagN` moves through a vertex, skipping over two orthogonal neighbours
/// - `KnightNL` / `KnightNR` are the two leaps either side of diagonal `N`

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ortho0, Ortho2, Ortho4, Ortho6, Ortho8, Ortho10,
    Diag1, Diag3, Diag5, Diag7, Diag9, Diag11,
    Knight1L, Knight1R, Knight3L, Knight3R, Knight5L, Knight5R,
    Knight7L, Knight7R, Knight9L, Knight9R, Knight11L, Knight11R,
}

impl Direction {
    /// Number of elements in the Direction enum
    pub const NUM: usize = 24;

    #[rustfmt::skip]
    pub const ORTHOGONAL: [Direction; 6] = [
        Direction::Ortho0, Direction::Ortho2, Direction::Ortho4,
        Direction::Ortho6, Direction::Ortho8, Direction::Ortho10,
    ];

    #[rustfmt::skip]
    pub const DIAGONAL: [Direction; 6] = [
        Direction::Diag1, Direction::Diag3, Direction::Diag5,
        Direction::Diag7, Direction::Diag9, Direction::Diag11,
    ];

    /// Orthogonal and diagonal steps together, the moves of a king or queen.
    #[rustfmt::skip]
    pub const ALL: [Direction; 12] = [
        Direction::Ortho0, Direction::Ortho2, Direction::Ortho4,
        Direction::Ortho6, Direction::Ortho8, Direction::Ortho10,
        Direction::Diag1, Direction::Diag3, Direction::Diag5,
        Direction::Diag7, Direction::Diag9, Direction::Diag11,
    ];

    #[rustfmt::skip]
    pub const KNIGHT: [Direction; 12] = [
        Direction::Knight1L, Direction::Knight1R, Direction::Knight3L,
        Direction::Knight3R, Direction::Knight5L, Direction::Knight5R,
        Direction::Knight7L, Direction::Knight7R, Direction::Knight9L,
        Direction::Knight9R, Direction::Knight11L, Direction::Knight11R,
    ];
}

crate::impl_from_to_primitive!(Direction);
crate::impl_enum_iter!(Direction);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Colour {
    /// Returns the direction a pawn of this colour advances in
    pub const fn forward(&self) -> Direction {
        match self {
            Colour::White => Direction::Ortho0,
            Colour::Black => Direction::Ortho6,
        }
    }

    /// Returns the two directions a pawn of this colour captures in
    pub const fn captures(&self) -> [Direction; 2] {
        match self {
            Colour::White => [Direction::Ortho2, Direction::Ortho10],
            Colour::Black => [Direction::Ortho4, Direction::Ortho8],
        }
    }

    /// Forward step first, then the capture steps
    pub(crate) const fn pawn_directions(&self) -> &'static [Direction] {
        const WHITE: [Direction; 3] = [Direction::Ortho0, Direction::Ortho2, Direction::Ortho10];
        const BLACK: [Direction; 3] = [Direction::Ortho6, Direction::Ortho4, Direction::Ortho8];

        match self {
            Colour::White => &WHITE,
            Colour::Black => &BLACK,
        }
    }
}

impl std::ops::Not for Colour {
    type Output = Self;

    /// Returns the opposite colour
    fn not(self) -> Self::Output {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

impl Direction {
    /// Returns the `(rdiag, ldiag)` delta of one step in this direction
    #[rustfmt::skip]
    pub const fn offset(self) -> (i32, i32) {
        use Direction::*;

        match self {
            Ortho0 => (1, 1),     Ortho2 => (1, 0),     Ortho4 => (0, -1),
            Ortho6 => (-1, -1),   Ortho8 => (-1, 0),    Ortho10 => (0, 1),
            Diag1 => (2, 1),      Diag3 => (1, -1),     Diag5 => (-1, -2),
            Diag7 => (-2, -1),    Diag9 => (-1, 1),     Diag11 => (1, 2),
            Knight1L => (3, 2),   Knight1R => (3, 1),   Knight3L => (2, -1),
            Knight3R => (1, -2),  Knight5L => (-1, -3), Knight5R => (-2, -3),
            Knight7L => (-3, -2), Knight7R => (-3, -1), Knight9L => (-2, 1),
            Knight9R => (-1, 2),  Knight11L => (1, 3),  Knight11R => (2, 3),
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Self;

    /// Returns the direction pointing the opposite way
    fn neg(self) -> Self::Output {
        use Direction::*;

        match self {
            Ortho0 => Ortho6,
            Ortho2 => Ortho8,
            Ortho4 => Ortho10,
            Ortho6 => Ortho0,
            Ortho8 => Ortho2,
            Ortho10 => Ortho4,
            Diag1 => Diag7,
            Diag3 => Diag9,
            Diag5 => Diag11,
            Diag7 => Diag1,
            Diag9 => Diag3,
            Diag11 => Diag5,
            Knight1L => Knight7L,
            Knight1R => Knight7R,
            Knight3L => Knight9L,
            Knight3R => Knight9R,
            Knight5L => Knight11L,
            Knight5R => Knight11R,
            Knight7L => Knight1L,
            Knight7R => Knight1R,
            Knight9L => Knight3L,
            Knight9R => Knight3R,
            Knight11L => Knight5L,
            Knight11R => Knight5R,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_not() {
        assert_eq!(!Colour::White, Colour::Black);
        assert_eq!(!Colour::Black, Colour::White);
        assert_eq!(Colour::iter().count(), Colour::NUM);
    }

    #[test]
    fn test_pawn_directions() {
        for colour in Colour::iter() {
            let dirs = colour.pawn_directions();
            assert_eq!(dirs[0], colour.forward());
            assert_eq!(&dirs[1..], &colour.captures());
        }

        assert_eq!(Colour::White.forward(), -Colour::Black.forward());
    }

    #[test]
    fn test_neg_reverses_offset() {
        for dir in Direction::iter() {
            let (r, l) = dir.offset();
            assert_eq!((-dir).offset(), (-r, -l), "{dir:?}");
            assert_eq!(-(-dir), dir);
        }
    }

    #[test]
    fn test_diagonal_is_sum_of_neighbouring_orthogonals() {
        for (i, diag) in Direction::DIAGONAL.iter().enumerate() {
            let (ar, al) = Direction::ORTHOGONAL[i].offset();
            let (br, bl) = Direction::ORTHOGONAL[(i + 1) % 6].offset();
            assert_eq!(diag.offset(), (ar + br, al + bl), "{diag:?}");
        }
    }

    #[test]
    fn test_knight_is_diagonal_plus_orthogonal() {
        for (i, knight) in Direction::KNIGHT.iter().enumerate() {
            let (dr, dl) = Direction::DIAGONAL[i / 2].offset();
            let (kr, kl) = knight.offset();
            let rest = (kr - dr, kl - dl);
            assert!(
                Direction::ORTHOGONAL.iter().any(|o| o.offset() == rest),
                "{knight:?}"
            );
        }
    }

    #[test]
    fn test_direction_sets_are_disjoint() {
        let all: Vec<Direction> = Direction::ORTHOGONAL
            .iter()
            .chain(Direction::DIAGONAL.iter())
            .chain(Direction::KNIGHT.iter())
            .copied()
            .collect();

        assert_eq!(all.len(), Direction::NUM);
        assert!(Direction::iter().all(|dir| all.contains(&dir)));
        assert_eq!(&Direction::ALL[..6], &Direction::ORTHOGONAL);
        assert_eq!(&Direction::ALL[6..], &Direction::DIAGONAL);
    }
}
