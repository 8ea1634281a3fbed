//! Summary of the current day

use crate::schedule::{Countdown, Schedule};
use crate::session::{Availability, Session};
use crate::state::GameStatus;
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use colored::Colorize;

/// Snapshot of today's puzzle for the `today` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayReport {
    pub day: i64,
    pub total_words: usize,
    pub availability: Availability,
    pub status: GameStatus,
    pub guesses_used: usize,
    pub is_retry: bool,
    pub countdown: Countdown,
}

impl TodayReport {
    /// 1-based day number for display
    #[must_use]
    pub const fn day_number(&self) -> i64 {
        Schedule::day_number(self.day)
    }
}

#[must_use]
pub fn today_report<S: Storage>(session: &Session<S>, now: DateTime<Utc>) -> TodayReport {
    let state = session.state();
    TodayReport {
        day: session.day(),
        total_words: session.schedule().total_words(),
        availability: session.availability(),
        status: state.current_state(),
        guesses_used: state.current_guesses().len(),
        is_retry: state.is_retry(),
        countdown: session.countdown(now),
    }
}

pub fn print_today_report(report: &TodayReport) {
    match report.availability {
        Availability::BeforeLaunch => {
            println!("\n{}", "The first word has not been released yet.".yellow());
        }
        Availability::Exhausted => {
            println!(
                "\n{}",
                format!("All {} words have been played.", report.total_words).bright_green()
            );
        }
        Availability::Active => {
            println!(
                "\n🧩 Day {}/{}",
                report.day_number().to_string().bright_yellow().bold(),
                report.total_words
            );
            let status = match report.status {
                GameStatus::Playing if report.guesses_used == 0 => "not started".to_string(),
                GameStatus::Playing => format!("in progress, {} guesses used", report.guesses_used),
                GameStatus::Won => format!("won in {}", report.guesses_used),
                GameStatus::Lost => "lost".to_string(),
            };
            let retry = if report.is_retry { " (retry)" } else { "" };
            println!("   Status: {status}{retry}");
        }
    }
    println!(
        "⏳ Next word in {}\n",
        report.countdown.to_string().bright_yellow().bold()
    );
}
