//! Cumulative statistics and user preferences

use super::MAX_GUESSES;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Cumulative record across all days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    /// Wins by guess count; index 0 is a first-guess win
    pub guess_distribution: Vec<u32>,
    /// Day indices with a recorded win, in the order they were won
    pub completed_days: Vec<i64>,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            best_streak: 0,
            guess_distribution: vec![0; MAX_GUESSES],
            completed_days: Vec::new(),
        }
    }
}

impl Stats {
    /// Record a win on `day` after `guess_count` guesses
    ///
    /// Streak counters only move when the win was not a retry.
    pub(crate) fn record_win(&mut self, day: i64, guess_count: usize, is_retry: bool) {
        self.games_played += 1;
        self.games_won += 1;

        if let Some(bucket) = guess_count
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get_mut(i))
        {
            *bucket += 1;
        }

        if !is_retry {
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        }

        if !self.completed_days.contains(&day) {
            self.completed_days.push(day);
        }
    }

    pub(crate) fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
    }

    /// Win percentage rounded to the nearest whole number, 0 with no games
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            0
        } else {
            (f64::from(self.games_won) * 100.0 / f64::from(self.games_played)).round() as u32
        }
    }

    /// Number of distinct days won
    #[must_use]
    pub fn words_solved(&self) -> usize {
        self.completed_days.len()
    }

    /// Largest distribution bucket, used to scale bars
    #[must_use]
    pub fn max_bucket(&self) -> u32 {
        self.guess_distribution.iter().copied().max().unwrap_or(0)
    }

    /// Bring a deserialized record back within its invariants
    ///
    /// Returns true if anything had to change.
    pub(crate) fn repair(&mut self) -> bool {
        let mut changed = false;

        if self.guess_distribution.len() != MAX_GUESSES {
            self.guess_distribution.resize(MAX_GUESSES, 0);
            changed = true;
        }

        let mut seen = FxHashSet::default();
        let before = self.completed_days.len();
        self.completed_days.retain(|day| seen.insert(*day));
        changed |= self.completed_days.len() != before;

        if self.best_streak < self.current_streak {
            self.best_streak = self.current_streak;
            changed = true;
        }

        changed
    }
}

/// User-configurable settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub sound_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sound_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_stats_are_zeroed() {
        let stats = Stats::default();
        assert_eq!(stats.guess_distribution, vec![0; MAX_GUESSES]);
        assert_eq!(stats.win_percentage(), 0);
        assert_eq!(stats.words_solved(), 0);
        assert_eq!(stats.max_bucket(), 0);
    }

    #[test]
    fn win_updates_counters_and_streak() {
        let mut stats = Stats::default();
        stats.record_win(3, 4, false);

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 1);
        assert_eq!(stats.guess_distribution, vec![0, 0, 0, 1, 0, 0]);
        assert_eq!(stats.completed_days, vec![3]);
    }

    #[test]
    fn retry_win_leaves_streak_alone() {
        let mut stats = Stats {
            current_streak: 0,
            best_streak: 5,
            ..Stats::default()
        };
        stats.record_win(8, 2, true);

        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 5);
        assert_eq!(stats.guess_distribution[1], 1);
    }

    #[test]
    fn completed_day_recorded_once() {
        let mut stats = Stats::default();
        stats.record_win(1, 1, false);
        stats.record_win(1, 2, true);
        assert_eq!(stats.completed_days, vec![1]);
    }

    #[test]
    fn loss_resets_streak_keeps_best() {
        let mut stats = Stats {
            current_streak: 3,
            best_streak: 4,
            ..Stats::default()
        };
        stats.record_loss();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 4);
    }

    #[test]
    fn win_percentage_rounds() {
        let stats = Stats {
            games_played: 3,
            games_won: 2,
            ..Stats::default()
        };
        assert_eq!(stats.win_percentage(), 67);
    }

    #[test]
    fn repair_fixes_shape() {
        let mut stats = Stats {
            current_streak: 4,
            best_streak: 2,
            guess_distribution: vec![1, 2],
            completed_days: vec![0, 1, 1, 2, 0],
            ..Stats::default()
        };
        assert!(stats.repair());
        assert_eq!(stats.guess_distribution, vec![1, 2, 0, 0, 0, 0]);
        assert_eq!(stats.completed_days, vec![0, 1, 2]);
        assert_eq!(stats.best_streak, 4);

        assert!(!stats.repair());
    }

    #[test]
    fn preferences_default_sound_on() {
        assert!(Preferences::default().sound_enabled);
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert!(prefs.sound_enabled);
    }
}
