//! Puzzle word representation
//!
//! A Word stores a fixed-length uppercase word as bytes. Both target words and
//! player guesses use this type, so shape validation happens once at construction.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every target word and guess
pub const WORD_LENGTH: usize = 5;

/// A fixed-length uppercase word
///
/// Construction validates shape (exact length, `A`-`Z` only). A `Word` is never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Error type for words that fail shape validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),

    #[error("invalid character {ch:?} at position {position}, expected A-Z")]
    InvalidCharacter { ch: char, position: usize },
}

/// Check whether a raw guess has the required shape
///
/// True iff `guess` is exactly [`WORD_LENGTH`] characters and every character is
/// an uppercase ASCII letter. No dictionary lookup is performed.
///
/// # Examples
/// ```
/// use daily_wordle::core::is_shape_valid;
///
/// assert!(is_shape_valid("CRANE"));
/// assert!(!is_shape_valid("crane"));
/// assert!(!is_shape_valid("CRAN"));
/// ```
#[must_use]
pub fn is_shape_valid(guess: &str) -> bool {
    guess.len() == WORD_LENGTH && guess.bytes().all(|b| b.is_ascii_uppercase())
}

impl Word {
    /// Create a new Word from an already-normalized string
    ///
    /// # Errors
    /// Returns `WordError` if the length is not [`WORD_LENGTH`] or any character
    /// is outside `A`-`Z`. Lowercase input is rejected; use [`Word::parse`] for
    /// raw player input.
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("TOO LONG").is_err());
    /// assert!(Word::new("SH0RT").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if let Some((position, ch)) = text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_uppercase())
        {
            return Err(WordError::InvalidCharacter { ch, position });
        }

        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(text.as_bytes());

        Ok(Self {
            text: text.to_string(),
            letters,
        })
    }

    /// Trim and uppercase raw input, then validate it
    ///
    /// # Errors
    /// Same as [`Word::new`].
    pub fn parse(input: &str) -> Result<Self, WordError> {
        Self::new(&input.trim().to_ascii_uppercase())
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Count occurrences of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl serde::Serialize for Word {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> serde::Deserialize<'de> for Word {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::new(&text).map_err(serde::de::Error::custom)
    }
}
