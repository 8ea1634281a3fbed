//! Core domain types for the daily puzzle
//!
//! This module contains the guess evaluator with zero I/O dependencies.
//! Everything here is a pure function of its inputs.

mod evaluation;
mod keyboard;
mod word;

pub use evaluation::{Evaluation, Outcome, evaluate, is_winning_guess};
pub use keyboard::{KeyboardState, keyboard_states};
pub use word::{WORD_LENGTH, Word, WordError, is_shape_valid};
