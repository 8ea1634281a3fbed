//! Daily Wordle
//!
//! A daily word-guessing puzzle: every player gets the same five-letter word
//! each day and six tries to find it.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use daily_wordle::core::{Word, evaluate};
//! use daily_wordle::schedule::Schedule;
//!
//! let schedule = Schedule::embedded().unwrap();
//! let now = chrono::Utc::now();
//!
//! if let Some(target) = schedule.todays_word(now) {
//!     let guess = Word::parse("crane").unwrap();
//!     println!("{:?}", evaluate(&guess, target));
//! }
//! ```

// Core domain types
pub mod core;

// Daily word selection
pub mod schedule;

// Persisted player state and transitions
pub mod state;

// Load/save backends
pub mod storage;

// Input buffer, reveal pacing and rollover around the state machine
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
