//! Taken-Cell Cache
//!
//! Tracks the cells known to be occupied so move enumeration can skip them
//! without asking the board. Discs are never removed in Othello, so entries
//! picked up from the live board never go stale. The search marks
//! hypothetical moves through [`TakenGuard`], which undoes the mark when the
//! branch is left, whichever way it is left.

use std::collections::HashSet;
use std::ops::{Deref, DerefMut};

use othello_board::{Board, Cell, Position, CELL_COUNT, SIZE};

/// The four cells occupied in the standard opening position
const CENTER: [Position; 4] = [
    Position::new(3, 3),
    Position::new(4, 3),
    Position::new(3, 4),
    Position::new(4, 4),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakenCellCache {
    taken: HashSet<Position>,
}

impl TakenCellCache {
    /// A cache seeded with the four centre cells of the opening position
    pub fn new() -> Self {
        Self {
            taken: CENTER.iter().copied().collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            taken: HashSet::with_capacity(CELL_COUNT),
        }
    }

    /// Add every occupied cell of `board` that is not cached yet.
    /// Never removes entries.
    pub fn refresh(&mut self, board: &Board) {
        for column in 0..SIZE {
            for row in 0..SIZE {
                let pos = Position::new(row, column);
                if self.taken.contains(&pos) {
                    continue;
                }
                if board.status(pos) != Cell::Empty {
                    self.taken.insert(pos);
                }
            }
        }
    }

    /// Drop the seeded centre cells that are empty on `board`.
    /// Returns how many were dropped.
    pub fn drop_vacant_center(&mut self, board: &Board) -> usize {
        let before = self.taken.len();
        for pos in CENTER {
            if board.status(pos) == Cell::Empty {
                self.taken.remove(&pos);
            }
        }
        before - self.taken.len()
    }

    /// Returns true if the position was not cached before
    pub fn add(&mut self, pos: Position) -> bool {
        self.taken.insert(pos)
    }

    /// Returns true if the position was cached before
    pub fn remove(&mut self, pos: Position) -> bool {
        self.taken.remove(&pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.taken.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }

    /// Every cell on the board is taken
    pub fn is_full(&self) -> bool {
        self.taken.len() == CELL_COUNT
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.taken.iter()
    }

    /// Mark `pos` as taken until the returned guard is dropped.
    ///
    /// A position that was already cached stays cached after the guard goes
    /// away.
    pub fn mark(&mut self, pos: Position) -> TakenGuard<'_> {
        let inserted = self.taken.insert(pos);
        TakenGuard {
            cache: self,
            pos,
            inserted,
        }
    }
}

impl Default for TakenCellCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped speculative entry in a [`TakenCellCache`].
///
/// Dereferences to the cache so the recursion below the marked move keeps
/// using it.
#[derive(Debug)]
pub struct TakenGuard<'a> {
    cache: &'a mut TakenCellCache,
    pos: Position,
    inserted: bool,
}

impl Deref for TakenGuard<'_> {
    type Target = TakenCellCache;

    fn deref(&self) -> &TakenCellCache {
        self.cache
    }
}

impl DerefMut for TakenGuard<'_> {
    fn deref_mut(&mut self) -> &mut TakenCellCache {
        self.cache
    }
}

impl Drop for TakenGuard<'_> {
    fn drop(&mut self) {
        if self.inserted {
            self.cache.taken.remove(&self.pos);
        }
    }
}
