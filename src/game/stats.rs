//! In-memory play statistics

use crate::core::MAX_ROWS;

/// Results across the rounds played in this process
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Index n counts wins in n guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_ROWS + 1],
}

impl Statistics {
    /// Record a win after `guesses` rows
    pub fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        if let Some(slot) = self.guess_distribution.get_mut(guesses) {
            *slot += 1;
        }
    }

    pub fn record_loss(&mut self) {
        self.total_games += 1;
        self.current_streak = 0;
    }

    /// Percentage of games won, 0 when nothing was played yet
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wins_and_losses_update_streaks() {
        let mut stats = Statistics::default();
        stats.record_win(3);
        stats.record_win(4);
        stats.record_loss();
        stats.record_win(6);

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution[3], 1);
        assert_eq!(stats.guess_distribution[6], 1);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_stats_have_zero_win_rate() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
