//! Guess history for the player's grid.

use super::common::{BoardError, Cell};
use super::config::{BB, BOARD_SIZE};

/// The visible grid: which cells were guessed and how they resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    hits: BB,
    misses: BB,
}

impl Board {
    /// Create a board with every cell unguessed.
    pub fn new() -> Self {
        Self::default()
    }

    /// State of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if self.hits.get(row, col)? {
            Ok(Cell::Hit)
        } else if self.misses.get(row, col)? {
            Ok(Cell::Miss)
        } else {
            Ok(Cell::Unguessed)
        }
    }

    pub fn is_guessed(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.cell(row, col)? != Cell::Unguessed)
    }

    /// Record the result of a guess. A cell can only be recorded once.
    pub fn record(&mut self, row: usize, col: usize, hit: bool) -> Result<Cell, BoardError> {
        if self.is_guessed(row, col)? {
            return Err(BoardError::AlreadyGuessed);
        }
        if hit {
            self.hits.set(row, col)?;
            Ok(Cell::Hit)
        } else {
            self.misses.set(row, col)?;
            Ok(Cell::Miss)
        }
    }

    /// Number of cells guessed so far.
    pub fn guessed_count(&self) -> usize {
        (self.hits | self.misses).count_ones()
    }

    /// Returns `true` if nothing has been guessed yet.
    pub fn is_pristine(&self) -> bool {
        self.hits.is_empty() && self.misses.is_empty()
    }

    /// Row-major snapshot of all cells.
    pub fn cells(&self) -> [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        core::array::from_fn(|r| {
            core::array::from_fn(|c| self.cell(r, c).unwrap_or(Cell::Unguessed))
        })
    }
}
