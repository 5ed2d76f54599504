#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
pub mod runner;
#[cfg(feature = "std")]
pub mod store;
pub mod ui;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use runner::{play, PlayEnd, PlayReport};
#[cfg(feature = "std")]
pub use store::{format_statistics, parse_statistics, StatisticsStore, StatsError};
#[cfg(feature = "std")]
pub use ui::CliPresenter;
pub use ui::{GridLayout, Presenter, Selection};
