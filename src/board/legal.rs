//! Legality pipeline.
//!
//! Destination sets are rebuilt from scratch in four passes, in this order:
//!
//! 1. Occupancy: walk every ray of every piece. Empty cells are added and an
//!    ally ends the ray. An enemy is added as a capture, then the walk goes
//!    on past it looking for the enemy king: reaching the king marks the
//!    captured piece as pinned, any other piece ends the ray.
//! 2. Pins: pinned pieces lose every destination.
//! 3. King safety: a king loses every destination next to it that the other
//!    side can reach, judged on the sets left after pass 2.
//! 4. Pawn diagonals: a pawn keeps a capture step only when it lands on an
//!    enemy, or when the cell behind the target holds a pawn that may be
//!    passed.

use super::Board;
use crate::core::*;
use tracing::trace;

/// Where a ray walk stands while scanning for pins
#[derive(Debug, Clone, Copy)]
enum Walk {
    /// Nothing hit yet
    Open,
    /// Passed the enemy piece on this cell, now looking for its king
    PastCapture(Cell),
}

impl Board {
    /// Rebuilds every destination set from the current piece placement
    pub fn recompute(&mut self) {
        let (movable, pinned) = self.occupancy_moves();
        self.movable = movable;

        self.clear_pinned(pinned);
        self.guard_kings();
        self.filter_pawn_diagonals();

        trace!(pinned = pinned.count(), "recomputed destinations");
    }

    /// Pass 1, also returning the cells of pinned pieces
    fn occupancy_moves(&self) -> ([CellSet; Cell::NUM], CellSet) {
        let mut movable = [CellSet::EMPTY; Cell::NUM];
        let mut pinned = CellSet::EMPTY;

        for (slot, piece) in movable.iter_mut().zip(self.board.iter()) {
            let Some(piece) = piece else { continue };
            let colour = piece.colour();

            for ray in piece.rays() {
                let mut walk = Walk::Open;

                for to in ray.iter() {
                    match (walk, self.on(to)) {
                        (Walk::Open, None) => slot.set(to),
                        (Walk::Open, Some(other)) if other.colour() == colour => break,
                        (Walk::Open, Some(_)) => {
                            slot.set(to);
                            walk = Walk::PastCapture(to);
                        }
                        (Walk::PastCapture(_), None) => {}
                        (Walk::PastCapture(candidate), Some(other)) => {
                            if other.colour() != colour && other.kind() == PieceKind::King {
                                pinned.set(candidate);
                            }
                            break;
                        }
                    }
                }
            }
        }

        (movable, pinned)
    }

    /// Pass 2
    fn clear_pinned(&mut self, pinned: CellSet) {
        for cell in pinned {
            if let Some(index) = cell.index() {
                self.movable[index] = CellSet::EMPTY;
            }
        }
    }

    /// Pass 3
    fn guard_kings(&mut self) {
        let mut reach = [CellSet::EMPTY; Colour::NUM];

        for (piece, set) in self.board.iter().zip(self.movable.iter()) {
            if let Some(piece) = piece {
                reach[piece.colour().index()] |= *set;
            }
        }

        for (piece, set) in self.board.iter().zip(self.movable.iter_mut()) {
            let Some(Piece::King(king)) = piece else { continue };

            let threatened = reach[(!king.colour()).index()] & king.cell().king_zone();
            *set &= !threatened;
        }
    }

    /// Pass 4
    fn filter_pawn_diagonals(&mut self) {
        for index in 0..Cell::NUM {
            let Some(Piece::Pawn(pawn)) = self.board[index] else { continue };
            let colour = pawn.colour();

            for dir in colour.captures() {
                let target = pawn.cell().shift(dir);

                if !target.on_board() {
                    continue;
                }

                if self.on(target).is_some_and(|piece| piece.colour() != colour) {
                    continue;
                }

                let companion = target.shift(-colour.forward());

                if !companion.on_board() {
                    continue;
                }

                if self.on(companion).is_some_and(Piece::can_be_passed) {
                    continue;
                }

                self.movable[index].clear(target);
            }
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
