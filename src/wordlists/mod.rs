//! Word lists for the daily puzzle
//!
//! Provides the embedded vocabulary compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
