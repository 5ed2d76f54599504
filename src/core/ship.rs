//! Hidden single-cell ships.

use rand::seq::index;
use rand::Rng;

use super::bitboard::BitBoardError;
use super::config::{BB, BOARD_SIZE};

/// Positions of the ships that are still afloat.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ShipSet {
    cells: BB,
}

impl ShipSet {
    /// Place `count` ships on distinct cells chosen uniformly at random.
    ///
    /// `count` is clamped to the number of cells on the grid.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let size = BOARD_SIZE as usize;
        let total = BB::CELLS;
        let picked = index::sample(rng, total, count.min(total));
        // every sampled index is below CELLS, so no position is out of bounds
        let cells = BB::from_cells(picked.iter().map(|idx| (idx / size, idx % size)))
            .unwrap_or_default();
        log::debug!("ships placed:\n{}", cells);
        Self { cells }
    }

    /// Ships at fixed positions.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Ok(Self {
            cells: BB::from_cells(cells)?,
        })
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col).unwrap_or(false)
    }

    /// Sink the ship at (row, col). Returns `false` if there was none.
    pub fn remove(&mut self, row: usize, col: usize) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        self.cells.clear(row, col).is_ok()
    }

    /// Ships still afloat.
    pub fn len(&self) -> usize {
        self.cells.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> {
        self.cells.iter_set_bits()
    }
}

impl core::fmt::Debug for ShipSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ShipSet").field(&self.cells).finish()
    }
}
