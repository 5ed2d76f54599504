//! Common types for the game core: cell states, guess outcomes and errors.

use core::fmt;

use super::bitboard::BitBoardError;

/// What the player can see of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Unguessed,
    Hit,
    Miss,
}

/// How a single guess resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The cell was guessed before; no turn consumed.
    AlreadyGuessed,
    /// A ship was sunk.
    Hit,
    /// Open water.
    Miss,
}

impl GuessOutcome {
    /// Message shown to the player for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            GuessOutcome::AlreadyGuessed => "You guessed that one already.",
            GuessOutcome::Hit => "Congratulations! You sunk my battleship!",
            GuessOutcome::Miss => "You missed my battleship!",
        }
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Guess was already made at this position.
    AlreadyGuessed,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::AlreadyGuessed => write!(f, "Guess was already made at this position"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
