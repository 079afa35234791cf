use super::cell::Cell;
use super::types::Direction;

/******************************************\
|==========================================|
|                 Cell Set                 |
|==========================================|
\******************************************/

/// # Cell Set
///
/// A set of on-board cells stored as a 91-bit mask, one bit per dense
/// [`Cell::index`]. Off-board coordinates are never members: inserting one is
/// a no-op and querying one answers `false`.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSet(pub u128);

crate::impl_bit_ops!(CellSet);

impl CellSet {
    /// The empty set
    pub const EMPTY: CellSet = CellSet(0);

    /// Every cell on the board
    pub const FULL: CellSet = CellSet((1 << Cell::NUM) - 1);
}

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl CellSet {
    /// Set containing only `cell`, or nothing if it is off the board
    #[inline]
    pub const fn from_cell(cell: Cell) -> Self {
        match cell.index() {
            Some(index) => CellSet(1 << index),
            None => CellSet::EMPTY,
        }
    }

    /// Returns the number of cells in the set
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if there are no cells in the set
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if `cell` is in the set
    #[inline]
    pub const fn contains(&self, cell: Cell) -> bool {
        self.0 & CellSet::from_cell(cell).0 != 0
    }

    /// Adds `cell` to the set
    #[inline]
    pub fn set(&mut self, cell: Cell) {
        *self |= CellSet::from_cell(cell);
    }

    /// Removes `cell` from the set
    #[inline]
    pub fn clear(&mut self, cell: Cell) {
        *self &= !CellSet::from_cell(cell);
    }

    /// Returns the member with the lowest index
    #[inline]
    pub const fn lsb(&self) -> Option<Cell> {
        match self.0 {
            0 => None,
            bits => Some(Cell::from_index(bits.trailing_zeros() as usize)),
        }
    }

    /// Removes and returns the member with the lowest index
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Cell> {
        let cell = self.lsb()?;
        self.0 &= self.0 - 1;
        Some(cell)
    }

    /// Iterates the members in index order
    #[inline]
    pub fn iter(&self) -> CellSetIter {
        CellSetIter(*self)
    }
}

impl Cell {
    /// The on-board cells a king standing here could step to, ignoring occupancy
    pub fn king_zone(self) -> CellSet {
        Direction::ALL
            .iter()
            .map(|&dir| CellSet::from_cell(self.shift(dir)))
            .fold(CellSet::EMPTY, |zone, cell| zone | cell)
    }
}

impl std::ops::Not for CellSet {
    type Output = Self;

    /// Complement within the board, so unused high bits stay clear
    fn not(self) -> Self::Output {
        CellSet(!self.0 & CellSet::FULL.0)
    }
}

impl From<Cell> for CellSet {
    fn from(cell: Cell) -> Self {
        CellSet::from_cell(cell)
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::EMPTY;
        iter.into_iter().for_each(|cell| set.set(cell));
        set
    }
}

/******************************************\
|==========================================|
|                 Iterator                 |
|==========================================|
\******************************************/

/// Drains a copy of a [`CellSet`] from the lowest index upwards
#[derive(Debug, Clone)]
pub struct CellSetIter(CellSet);

impl Iterator for CellSetIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for CellSetIter {}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CellSetIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clear_contains() {
        let mut set = CellSet::EMPTY;
        let cell = Cell::new(5, 5);

        set.set(cell);
        assert!(set.contains(cell));
        assert_eq!(set.count(), 1);

        set.set(cell);
        assert_eq!(set.count(), 1);

        set.clear(cell);
        assert!(set.is_empty());
    }

    #[test]
    fn test_off_board_is_never_a_member() {
        let mut set = CellSet::EMPTY;
        set.set(Cell::new(0, 6));
        set.set(Cell::EMPTY);

        assert!(set.is_empty());
        assert!(!CellSet::FULL.contains(Cell::new(11, 10)));
        assert!(!CellSet::FULL.contains(Cell::EMPTY));
    }

    #[test]
    fn test_full_and_complement() {
        assert_eq!(CellSet::FULL.count(), Cell::NUM as u32);
        assert_eq!(!CellSet::EMPTY, CellSet::FULL);
        assert_eq!(!CellSet::FULL, CellSet::EMPTY);

        let set: CellSet = [Cell::new(0, 0), Cell::new(10, 10)].into_iter().collect();
        assert_eq!((!set).count(), Cell::NUM as u32 - 2);
        assert_eq!(set & !set, CellSet::EMPTY);
        assert_eq!(set | !set, CellSet::FULL);
    }

    #[test]
    fn test_iter_in_index_order() {
        let cells = [Cell::new(9, 9), Cell::new(0, 3), Cell::new(5, 1)];
        let set: CellSet = cells.into_iter().collect();

        let collected: Vec<Cell> = set.iter().collect();
        assert_eq!(collected, vec![Cell::new(0, 3), Cell::new(5, 1), Cell::new(9, 9)]);
        assert_eq!(set.iter().len(), 3);
        assert_eq!(set.lsb(), Some(Cell::new(0, 3)));
        assert_eq!(CellSet::EMPTY.lsb(), None);
    }

    #[test]
    fn test_king_zone() {
        assert_eq!(Cell::new(5, 5).king_zone().count(), 12);

        let corner = Cell::new(0, 0).king_zone();
        let expected: CellSet = [(1, 1), (1, 0), (0, 1), (2, 1), (1, 2)]
            .into_iter()
            .map(|(r, l)| Cell::new(r, l))
            .collect();
        assert_eq!(corner, expected);

        for cell in Cell::iter() {
            for other in cell.king_zone() {
                assert!(cell.is_king_adjacent(other));
            }
        }
    }
}
