#![cfg(feature = "std")]
//! Text-file persistence for [`Statistics`].
//!
//! The file holds one `Key: Value` pair per line:
//!
//! ```text
//! Wins: 2
//! Losses: 1
//! TotalGamesPlayed: 3
//! WinRate: 66.66666666666667
//! ```
//!
//! `WinRate` is written for humans reading the file; on load it is checked
//! to be a number and then recomputed from the counts.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::string::String;

use crate::core::Statistics;

const WINS: &str = "Wins";
const LOSSES: &str = "Losses";
const TOTAL: &str = "TotalGamesPlayed";
const WIN_RATE: &str = "WinRate";

/// Errors returned by [`StatisticsStore`].
#[derive(Debug)]
pub enum StatsError {
    /// The statistics file does not exist.
    Missing { path: PathBuf },
    /// The statistics file exists but may not be read.
    Unreadable { path: PathBuf },
    /// The contents could not be read as a statistics record.
    Malformed { line: Option<usize>, reason: String },
    /// Writing the statistics file failed.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::Missing { path } => {
                write!(f, "the file {} was not found", path.display())
            }
            StatsError::Unreadable { path } => {
                write!(f, "permission denied to read the file {}", path.display())
            }
            StatsError::Malformed {
                line: Some(line),
                reason,
            } => write!(f, "malformed statistics at line {}: {}", line, reason),
            StatsError::Malformed { line: None, reason } => {
                write!(f, "malformed statistics: {}", reason)
            }
            StatsError::Write { path, source } => {
                write!(f, "could not write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn malformed(line: usize, reason: impl Into<String>) -> StatsError {
    StatsError::Malformed {
        line: Some(line),
        reason: reason.into(),
    }
}

/// Classify a failure to read the statistics file at `path`.
fn read_error(path: &Path, e: io::Error) -> StatsError {
    match e.kind() {
        io::ErrorKind::NotFound => StatsError::Missing {
            path: path.to_path_buf(),
        },
        io::ErrorKind::PermissionDenied => StatsError::Unreadable {
            path: path.to_path_buf(),
        },
        _ => StatsError::Malformed {
            line: None,
            reason: e.to_string(),
        },
    }
}

/// Parse the `Key: Value` text of a statistics file.
///
/// All four keys must be present exactly once. Blank lines are ignored.
pub fn parse_statistics(text: &str) -> Result<Statistics, StatsError> {
    let mut wins = None;
    let mut losses = None;
    let mut total = None;
    let mut win_rate_seen = false;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let (key, value) = line
            .split_once(": ")
            .ok_or_else(|| malformed(line_no, format!("expected `Key: Value`, got {:?}", line)))?;
        let value = value.trim();
        let slot = match key {
            WINS => &mut wins,
            LOSSES => &mut losses,
            TOTAL => &mut total,
            WIN_RATE => {
                if win_rate_seen {
                    return Err(malformed(line_no, "duplicate key `WinRate`"));
                }
                value
                    .parse::<f64>()
                    .map_err(|e| malformed(line_no, format!("invalid WinRate {:?}: {}", value, e)))?;
                win_rate_seen = true;
                continue;
            }
            other => return Err(malformed(line_no, format!("unknown key {:?}", other))),
        };
        if slot.is_some() {
            return Err(malformed(line_no, format!("duplicate key `{}`", key)));
        }
        let parsed = value
            .parse::<u32>()
            .map_err(|e| malformed(line_no, format!("invalid {} {:?}: {}", key, value, e)))?;
        *slot = Some(parsed);
    }

    let require = |slot: Option<u32>, key: &str| {
        slot.ok_or_else(|| StatsError::Malformed {
            line: None,
            reason: format!("missing key `{}`", key),
        })
    };
    let stats = Statistics::new(
        require(wins, WINS)?,
        require(losses, LOSSES)?,
        require(total, TOTAL)?,
    );
    if !win_rate_seen {
        return Err(StatsError::Malformed {
            line: None,
            reason: format!("missing key `{}`", WIN_RATE),
        });
    }
    Ok(stats)
}

/// Render statistics in file order: wins, losses, total, win rate.
pub fn format_statistics(stats: &Statistics) -> String {
    format!(
        "{}: {}\n{}: {}\n{}: {}\n{}: {}\n",
        WINS,
        stats.wins,
        LOSSES,
        stats.losses,
        TOTAL,
        stats.total_games_played,
        WIN_RATE,
        stats.win_rate()
    )
}

/// Statistics file at a fixed path.
#[derive(Debug, Clone)]
pub struct StatisticsStore {
    path: PathBuf,
}

impl StatisticsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the statistics record. A missing file is an error, not a fresh start.
    pub fn load(&self) -> Result<Statistics, StatsError> {
        let text = fs::read_to_string(&self.path).map_err(|e| read_error(&self.path, e))?;
        let stats = parse_statistics(&text)?;
        log::info!("loaded statistics from {}", self.path.display());
        Ok(stats)
    }

    /// Overwrite the statistics file with `stats`.
    pub fn save(&self, stats: &Statistics) -> Result<(), StatsError> {
        fs::write(&self.path, format_statistics(stats)).map_err(|source| StatsError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::info!("saved statistics to {}", self.path.display());
        Ok(())
    }

    /// Create a zeroed statistics file if none exists yet.
    ///
    /// Returns `true` when a file was created.
    pub fn init(&self) -> Result<bool, StatsError> {
        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path);
        let mut file = match file {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(source) => {
                return Err(StatsError::Write {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        file.write_all(format_statistics(&Statistics::default()).as_bytes())
            .map_err(|source| StatsError::Write {
                path: self.path.clone(),
                source,
            })?;
        log::info!("created statistics file {}", self.path.display());
        Ok(true)
    }
}
