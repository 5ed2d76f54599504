//! Presentation collaborator interface and implementations
//!
//! The game core never draws or reads input itself. A [`Presenter`] renders
//! what the session exposes and hands back the player's choices:
//! - `layout`: pixel geometry and click-to-cell hit testing
//! - `cli`: terminal presenter over any reader/writer pair

use crate::core::{Board, Statistics, BOARD_SIZE};

pub mod layout;
pub use layout::{GridLayout, Rect};

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPresenter;

/// A cell chosen by the player, either directly or by clicking a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Cell(usize, usize),
    Pixel(u32, u32),
}

impl Selection {
    /// Resolve to a grid cell. Anything off the grid gives `None`.
    pub fn resolve(self, layout: &GridLayout) -> Option<(usize, usize)> {
        let size = BOARD_SIZE as usize;
        match self {
            Selection::Cell(r, c) => (r < size && c < size).then_some((r, c)),
            Selection::Pixel(x, y) => layout.cell_at(x, y),
        }
    }
}

/// Interface implemented by different front ends.
pub trait Presenter {
    /// Draw every cell of the board.
    fn render_board(&mut self, board: &Board);

    /// Show the number of turns used so far.
    fn render_turn(&mut self, turns: u8);

    /// Show the result of the last action. An empty string clears it.
    fn render_result_message(&mut self, text: &str);

    /// Show the cumulative statistics.
    fn render_statistics_summary(&mut self, stats: &Statistics);

    /// Wait for the next selection. `None` means the player closed the game.
    fn next_selection(&mut self) -> Option<Selection>;

    /// Ask whether to play again.
    fn confirm_rematch(&mut self) -> bool;
}
