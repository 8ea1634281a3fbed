//! Formatting utilities for terminal output and sharing

use crate::core::{Evaluation, Outcome, Word, evaluate};
use crate::schedule::Schedule;
use crate::state::{MAX_GUESSES, PlayerState};

/// Address printed at the bottom of shared results
pub const SHARE_URL: &str = "eds-wordle.vercel.app";

/// Emoji square for one outcome
#[must_use]
pub const fn outcome_to_emoji(outcome: Outcome) -> char {
    match outcome {
        Outcome::Correct => '🟩',
        Outcome::Present => '🟨',
        Outcome::Absent => '⬛',
    }
}

/// Format an evaluation as a row of emoji squares
#[must_use]
pub fn evaluation_to_emoji(evaluation: &Evaluation) -> String {
    evaluation.iter().map(outcome_to_emoji).collect()
}

/// Build the spoiler-free share text for the current game
///
/// # Examples
/// ```
/// use daily_wordle::core::Word;
/// use daily_wordle::output::formatters::share_text;
/// use daily_wordle::schedule::Schedule;
/// use daily_wordle::state::PlayerState;
///
/// let schedule = Schedule::embedded().unwrap();
/// let target = Word::new("SPICY").unwrap();
/// let mut state = PlayerState::new(0);
/// state.submit_guess("SPICY", &target).unwrap();
///
/// let text = share_text(&state, &target, &schedule);
/// assert!(text.starts_with("Ed's Wordle - Day 1/10"));
/// ```
#[must_use]
pub fn share_text(state: &PlayerState, target: &Word, schedule: &Schedule) -> String {
    let guesses = state.current_guesses();
    let streak = state.stats().current_streak;

    let mut text = format!(
        "Ed's Wordle - Day {}/{} 🧩\nGuessed in {}/{MAX_GUESSES}",
        Schedule::day_number(state.current_day()),
        schedule.total_words(),
        guesses.len()
    );

    if streak > 0 && !state.is_retry() {
        text.push_str(&format!(" 🔥 Streak: {streak}"));
    }
    if state.is_retry() {
        text.push_str(" (retry)");
    }
    text.push_str("\n\n");

    for guess in guesses {
        text.push_str(&evaluation_to_emoji(&evaluate(guess, target)));
        text.push('\n');
    }

    text.push('\n');
    text.push_str(SHARE_URL);
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value as usize * width / max as usize).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spicy() -> Word {
        Word::new("SPICY").unwrap()
    }

    #[test]
    fn evaluation_to_emoji_mixed() {
        let guess = Word::new("SPAIN").unwrap();
        assert_eq!(evaluation_to_emoji(&evaluate(&guess, &spicy())), "🟩🟩⬛🟨⬛");
    }

    #[test]
    fn evaluation_to_emoji_all_green() {
        assert_eq!(evaluation_to_emoji(&Evaluation::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_text_with_streak() {
        let schedule = Schedule::embedded().unwrap();
        let mut state = PlayerState::new(0);
        state.submit_guess("SPAIN", &spicy()).unwrap();
        state.submit_guess("SPICY", &spicy()).unwrap();

        assert_eq!(
            share_text(&state, &spicy(), &schedule),
            "Ed's Wordle - Day 1/10 🧩\n\
             Guessed in 2/6 🔥 Streak: 1\n\
             \n\
             🟩🟩⬛🟨⬛\n\
             🟩🟩🟩🟩🟩\n\
             \n\
             eds-wordle.vercel.app"
        );
    }

    #[test]
    fn share_text_for_retry_omits_streak() {
        let schedule = Schedule::embedded().unwrap();
        let legal = Word::new("LEGAL").unwrap();
        let mut state = PlayerState::new(1);
        state.submit_guess("LEGAL", &legal).unwrap();
        state.retry().unwrap();
        state.submit_guess("LABOR", &legal).unwrap();
        state.submit_guess("LEGAL", &legal).unwrap();

        let text = share_text(&state, &legal, &schedule);
        let header: Vec<&str> = text.lines().take(2).collect();
        assert_eq!(
            header,
            vec!["Ed's Wordle - Day 2/10 🧩", "Guessed in 2/6 (retry)"]
        );
    }

    #[test]
    fn share_text_after_loss_has_no_streak() {
        let schedule = Schedule::embedded().unwrap();
        let mut state = PlayerState::new(0);
        for guess in ["RALPH", "REYVA", "RUGBY", "SCOUT", "BAGEL", "LABOR"] {
            state.submit_guess(guess, &spicy()).unwrap();
        }

        let text = share_text(&state, &spicy(), &schedule);
        assert_eq!(text.lines().nth(1), Some("Guessed in 6/6"));
        // header, two blank separators, six rows and the url
        assert_eq!(text.lines().count(), 11);
        assert!(!text.contains("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 100, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100, 100, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(5, 10, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
