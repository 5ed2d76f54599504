//! Core game logic (no_std compatible)
//!
//! Board, hidden ships, the session state machine and the cumulative
//! statistics record. Nothing in here touches the filesystem or a terminal.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod ship;
pub mod stats;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::Board;
pub use common::{BoardError, Cell, GuessOutcome};
pub use config::*;
pub use game::{GameSession, Outcome, SessionError, SessionState};
pub use ship::ShipSet;
pub use stats::Statistics;
