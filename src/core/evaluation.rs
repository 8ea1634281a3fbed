//! Guess feedback calculation
//!
//! Each guess position is scored as one of three outcomes:
//! - `Absent`: letter not available in the target
//! - `Present`: letter in the target at a different, unconsumed position
//! - `Correct`: letter in the correct position
//!
//! Each target position is consumed by at most one guess position, so the
//! number of `Correct` + `Present` marks for a letter never exceeds the number
//! of times that letter appears in the target.

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter position
///
/// Variants are declared in precedence order, so `Ord` ranks
/// `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Absent,
    Present,
    Correct,
}

impl Outcome {
    /// Precedence rank used for keyboard aggregation
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Lowercase name as used in the persisted and rendered forms
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-position feedback for one guess against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([Outcome; WORD_LENGTH]);

impl Evaluation {
    /// All positions correct
    pub const PERFECT: Self = Self([Outcome::Correct; WORD_LENGTH]);

    /// Build an evaluation from explicit outcomes
    #[inline]
    #[must_use]
    pub const fn new(outcomes: [Outcome; WORD_LENGTH]) -> Self {
        Self(outcomes)
    }

    /// Outcomes in guess order
    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[Outcome; WORD_LENGTH] {
        &self.0
    }

    /// Outcome at a position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Outcome {
        self.0[position]
    }

    /// Iterate over outcomes in guess order
    pub fn iter(&self) -> impl Iterator<Item = Outcome> + '_ {
        self.0.iter().copied()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.iter().filter(|&o| o == Outcome::Correct).count()
    }

    /// Count the number of present (displaced) positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.iter().filter(|&o| o == Outcome::Present).count()
    }
}

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct` and consume those target slots
/// 2. Second pass: for every remaining guess position, scan the target left to right
///    and take the first unconsumed slot holding the same letter as `Present`
/// 3. Anything untouched stays `Absent`
///
/// Exact matches always claim their target slot before any displaced match can.
///
/// # Examples
/// ```
/// use daily_wordle::core::{Outcome::*, Word, evaluate};
///
/// let guess = Word::new("CRANE").unwrap();
/// let target = Word::new("TRACE").unwrap();
///
/// assert_eq!(
///     evaluate(&guess, &target).outcomes(),
///     &[Present, Correct, Correct, Absent, Correct]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Evaluation {
    let guess = guess.letters();
    let target = target.letters();
    let mut result = [Outcome::Absent; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    // Index needed to pair guess[i], target[i] and result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess[i] == target[i] {
            result[i] = Outcome::Correct;
            consumed[i] = true;
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == Outcome::Correct {
            continue;
        }

        if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && target[j] == guess[i]) {
            result[i] = Outcome::Present;
            consumed[j] = true;
        }
    }

    Evaluation(result)
}

/// Check if a guess is exactly the target
#[inline]
#[must_use]
pub fn is_winning_guess(guess: &Word, target: &Word) -> bool {
    guess.letters() == target.letters()
}
