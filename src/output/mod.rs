//! Terminal output formatting
//!
//! Share text and colored display helpers for the CLI commands.

pub mod display;
pub mod formatters;

pub use display::{
    format_guess_row, print_board, print_completion, print_countdown, print_keyboard, print_stats,
};
pub use formatters::{SHARE_URL, evaluation_to_emoji, share_text};
