use super::cell::Cell;
use super::types::Direction;
use std::iter::FusedIterator;

/******************************************\
|==========================================|
|                   Step                   |
|==========================================|
\******************************************/

/// Something that can advance a cell by one step along a ray.
///
/// Implemented for [`Direction`] and for any `Fn(Cell) -> Cell`, so custom
/// walks need no new type.
pub trait Step {
    fn step(&self, cell: Cell) -> Cell;
}

impl Step for Direction {
    #[inline]
    fn step(&self, cell: Cell) -> Cell {
        cell.shift(*self)
    }
}

impl<F: Fn(Cell) -> Cell> Step for F {
    #[inline]
    fn step(&self, cell: Cell) -> Cell {
        self(cell)
    }
}

/******************************************\
|==========================================|
|                   Ray                    |
|==========================================|
\******************************************/

/// The predicate used by plain rays: stay on the board
pub type Bound = fn(Cell) -> bool;

/// # Ray
///
/// A lazy walk of cells from an origin (excluded), repeatedly applying a step
/// until either `limit` cells have been produced or the next cell fails the
/// bound. Once the bound fails the walk is over, even if later cells would
/// pass it again.
///
/// A ray is a value: every call to [`Ray::iter`] restarts from the origin.

#[derive(Debug, Clone, Copy)]
pub struct Ray<S = Direction, B = Bound> {
    origin: Cell,
    step: S,
    limit: u32,
    bound: B,
}

impl Ray {
    /// Limit for sliders: walk until the bound stops it
    pub const UNBOUNDED: u32 = u32::MAX;

    /// A ray along `dir` that stops at the edge of the board
    #[inline]
    pub fn new(origin: Cell, dir: Direction, limit: u32) -> Self {
        Ray { origin, step: dir, limit, bound: Cell::on_board }
    }
}

impl<S: Step, B: Fn(Cell) -> bool> Ray<S, B> {
    /// A ray with a custom step and bound
    #[inline]
    pub fn with_bound(origin: Cell, step: S, limit: u32, bound: B) -> Self {
        Ray { origin, step, limit, bound }
    }

    #[inline]
    pub fn origin(&self) -> Cell {
        self.origin
    }

    #[inline]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Starts a fresh walk from the origin
    #[inline]
    pub fn iter(&self) -> RayIter<'_, S, B> {
        RayIter { ray: self, current: self.origin, taken: 0 }
    }
}

impl<'a, S: Step, B: Fn(Cell) -> bool> IntoIterator for &'a Ray<S, B> {
    type Item = Cell;
    type IntoIter = RayIter<'a, S, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/******************************************\
|==========================================|
|                 Iterator                 |
|==========================================|
\******************************************/

/// One walk along a [`Ray`]
pub struct RayIter<'a, S, B> {
    ray: &'a Ray<S, B>,
    current: Cell,
    taken: u32,
}

impl<S: Step, B: Fn(Cell) -> bool> Iterator for RayIter<'_, S, B> {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.taken >= self.ray.limit {
            return None;
        }

        let next = self.ray.step.step(self.current);

        if !(self.ray.bound)(next) {
            self.taken = self.ray.limit;
            return None;
        }

        self.taken += 1;
        self.current = next;
        Some(next)
    }
}

impl<S: Step, B: Fn(Cell) -> bool> FusedIterator for RayIter<'_, S, B> {}
