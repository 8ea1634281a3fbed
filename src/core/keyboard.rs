//! Keyboard feedback aggregation
//!
//! Tracks the best outcome seen for each letter across a session's guesses.

use super::evaluation::{Evaluation, Outcome, evaluate};
use super::word::Word;

const ALPHABET_LEN: usize = 26;

/// Best-known outcome per letter `A`-`Z`
///
/// Entries only ever move up in precedence (`Absent` → `Present` → `Correct`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Option<Outcome>; ALPHABET_LEN],
}

impl KeyboardState {
    /// Empty keyboard, no letter tried yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best outcome recorded for `letter`, if it has been guessed
    ///
    /// Accepts either case; non-letters return `None`.
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Outcome> {
        slot(letter).and_then(|i| self.letters[i])
    }

    /// Fold one evaluated guess into the keyboard
    pub fn merge(&mut self, guess: &Word, evaluation: &Evaluation) {
        for (&letter, outcome) in guess.letters().iter().zip(evaluation.iter()) {
            let Some(i) = slot(letter) else { continue };
            let upgrade = self.letters[i].is_none_or(|current| outcome.rank() > current.rank());
            if upgrade {
                self.letters[i] = Some(outcome);
            }
        }
    }

    /// Letters with a recorded outcome, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, Outcome)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter_map(|(i, outcome)| outcome.map(|o| (char::from(b'A' + i as u8), o)))
    }

    /// Number of letters with a recorded outcome
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.iter().flatten().count()
    }

    /// True when no letter has been guessed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.iter().all(Option::is_none)
    }
}

fn slot(letter: u8) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| usize::from(upper - b'A'))
}

/// Aggregate keyboard feedback for all guesses so far
///
/// Pure function: evaluates each guess against `target` in order and keeps the
/// highest-precedence outcome per letter.
///
/// # Examples
/// ```
/// use daily_wordle::core::{Outcome, Word, keyboard_states};
///
/// let target = Word::new("SPEED").unwrap();
/// let guesses = [Word::new("ERASE").unwrap(), Word::new("SHEEP").unwrap()];
/// let keyboard = keyboard_states(&guesses, &target);
///
/// assert_eq!(keyboard.get(b'E'), Some(Outcome::Correct));
/// assert_eq!(keyboard.get(b'R'), Some(Outcome::Absent));
/// assert_eq!(keyboard.get(b'Z'), None);
/// ```
#[must_use]
pub fn keyboard_states(guesses: &[Word], target: &Word) -> KeyboardState {
    guesses
        .iter()
        .fold(KeyboardState::new(), |mut keyboard, guess| {
            keyboard.merge(guess, &evaluate(guess, target));
            keyboard
        })
}
