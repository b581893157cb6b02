//! Per-session round statistics (kept in memory only)

use super::RoundStatus;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

impl Statistics {
    /// Count a finished round; non-terminal statuses are ignored
    pub fn record(&mut self, status: RoundStatus) {
        match status {
            RoundStatus::Won => {
                self.rounds_played += 1;
                self.rounds_won += 1;
            }
            RoundStatus::Lost => self.rounds_played += 1,
            RoundStatus::NotStarted | RoundStatus::InProgress => {}
        }
    }

    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}
