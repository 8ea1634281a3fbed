//! Daily word scheduling
//!
//! Maps wall-clock time to a day index and the day index to a target word. The
//! vocabulary is shuffled once with a fixed seed so every player sees the same
//! word on the same day without any server coordination.

mod clock;
mod prng;

pub use clock::{
    Countdown, LAUNCH_DATE, REFERENCE_TZ, ROLLOVER_HOUR, SHUFFLE_SEED, ScheduleConfig,
    ScheduleError, day_index, time_until_next_rollover,
};
pub use prng::{Mulberry32, seeded_shuffle};

use crate::core::Word;
use crate::wordlists::{WORDS, loader::words_from_slice};
use chrono::{DateTime, Utc};

/// Word scheduler
///
/// Owns the vocabulary in canonical order and its seeded permutation.
#[derive(Debug, Clone)]
pub struct Schedule {
    config: ScheduleConfig,
    words: Vec<Word>,
    shuffled: Vec<Word>,
}

impl Schedule {
    /// Create a scheduler over `words` in their canonical order
    ///
    /// # Errors
    /// Returns `ScheduleError::EmptyVocabulary` if `words` is empty.
    pub fn new(words: Vec<Word>, config: ScheduleConfig) -> Result<Self, ScheduleError> {
        if words.is_empty() {
            return Err(ScheduleError::EmptyVocabulary);
        }

        let shuffled = seeded_shuffle(&words, config.seed());
        tracing::debug!(
            "Schedule ready: {} words, seed {}, launch {}",
            words.len(),
            config.seed(),
            config.launch_date()
        );

        Ok(Self {
            config,
            words,
            shuffled,
        })
    }

    /// Scheduler over the embedded vocabulary with the default configuration
    ///
    /// # Errors
    /// Returns `ScheduleError::EmptyVocabulary` if the embedded list is empty.
    pub fn embedded() -> Result<Self, ScheduleError> {
        Self::new(words_from_slice(WORDS), ScheduleConfig::default())
    }

    #[must_use]
    pub const fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Vocabulary in canonical order
    #[must_use]
    pub fn word_list(&self) -> &[Word] {
        &self.words
    }

    /// Vocabulary in daily order
    #[must_use]
    pub fn shuffled_order(&self) -> &[Word] {
        &self.shuffled
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    /// Day index for `now`
    #[must_use]
    pub fn day_index(&self, now: DateTime<Utc>) -> i64 {
        day_index(&self.config, now)
    }

    /// Target word for a day index, or `None` before launch or after the
    /// vocabulary is exhausted
    #[must_use]
    pub fn word_for_day(&self, day: i64) -> Option<&Word> {
        usize::try_from(day).ok().and_then(|i| self.shuffled.get(i))
    }

    /// Target word active at `now`
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::schedule::Schedule;
    ///
    /// let schedule = Schedule::embedded().unwrap();
    /// let launch = "2026-02-08T12:00:00Z".parse().unwrap();
    /// assert_eq!(schedule.todays_word(launch).unwrap().text(), "SPICY");
    /// ```
    #[must_use]
    pub fn todays_word(&self, now: DateTime<Utc>) -> Option<&Word> {
        self.word_for_day(self.day_index(now))
    }

    /// Countdown to the next word
    #[must_use]
    pub fn time_until_next_rollover(&self, now: DateTime<Utc>) -> Countdown {
        time_until_next_rollover(&self.config, now)
    }

    /// 1-based day number for display
    #[must_use]
    pub const fn day_number(day: i64) -> i64 {
        day + 1
    }
}
