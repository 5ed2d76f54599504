//! Cumulative win/loss record shared by the session and the statistics store.

use core::fmt;

/// Cumulative results across every game played with a statistics file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub wins: u32,
    pub losses: u32,
    pub total_games_played: u32,
}

impl Statistics {
    pub fn new(wins: u32, losses: u32, total_games_played: u32) -> Self {
        Self {
            wins,
            losses,
            total_games_played,
        }
    }

    /// Percentage of games won, or `0.0` before any game is finished.
    pub fn win_rate(&self) -> f64 {
        if self.total_games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.total_games_played) * 100.0
        }
    }

    pub(crate) fn record_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    pub(crate) fn record_loss(&mut self) {
        self.losses = self.losses.saturating_add(1);
    }

    pub(crate) fn record_game(&mut self) {
        self.total_games_played = self.total_games_played.saturating_add(1);
    }
}

/// Two-line summary shown under the board.
impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wins: {}\tLosses: {}\t   Win Rate: {}%\nTotal Games Played: {}",
            self.wins,
            self.losses,
            self.win_rate(),
            self.total_games_played
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_rate_is_zero_without_games() {
        assert_eq!(Statistics::new(3, 0, 0).win_rate(), 0.0);
    }

    #[test]
    fn win_rate_keeps_fraction() {
        let stats = Statistics::new(2, 1, 3);
        assert!((stats.win_rate() - 66.666_666_666_666_67).abs() < 1e-9);
    }

    #[test]
    fn summary_text() {
        let stats = Statistics::new(1, 1, 2);
        assert_eq!(
            format!("{}", stats),
            "Wins: 1\tLosses: 1\t   Win Rate: 50%\nTotal Games Played: 2"
        );
    }
}
