//! Game state machine
//!
//! Owns the persisted player record and applies every transition to it:
//!
//! ```text
//! playing  --submit (correct)------------> won
//! playing  --submit (wrong, last guess)--> lost
//! playing  --submit (wrong)--------------> playing
//! won|lost --retry-----------------------> playing   (isRetry = true)
//! any      --day rollover----------------> playing   (isRetry = false)
//! ```

mod machine;
mod player;
mod stats;

pub use machine::{RetryError, SubmitError, Submission};
pub use player::{GameStatus, PlayerState};
pub use stats::{Preferences, Stats};

/// Attempts allowed per day
pub const MAX_GUESSES: usize = 6;

/// Schema version written by this release
pub const CURRENT_VERSION: u32 = 1;
