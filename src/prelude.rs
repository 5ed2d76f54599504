//! Commonly used types and utilities for ease of import.

pub use crate::core::{GameSession, GuessOutcome, Outcome, SessionState, Statistics};
pub use crate::runner::{play, PlayEnd};
pub use crate::ui::{GridLayout, Presenter, Selection};

#[cfg(feature = "std")]
pub use crate::{store::StatisticsStore, ui::CliPresenter};
