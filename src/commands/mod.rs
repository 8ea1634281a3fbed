//! Command implementations

pub mod share;
pub mod simple;
pub mod today;

pub use share::share_current_game;
pub use simple::run_simple;
pub use today::{TodayReport, print_today_report, today_report};
