//! Colored terminal display for the line-based commands

use super::formatters::create_progress_bar;
use crate::core::{Evaluation, KeyboardState, Outcome, Word, evaluate};
use crate::schedule::{Countdown, Schedule};
use crate::state::{MAX_GUESSES, PlayerState, Stats};
use colored::{ColoredString, Colorize};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn tile(letter: char, outcome: Option<Outcome>) -> ColoredString {
    let text = format!(" {letter} ");
    match outcome {
        Some(Outcome::Correct) => text.black().on_green().bold(),
        Some(Outcome::Present) => text.black().on_yellow().bold(),
        Some(Outcome::Absent) => text.white().on_bright_black(),
        None => text.bright_white(),
    }
}

/// Format one evaluated guess as a row of colored tiles
#[must_use]
pub fn format_guess_row(guess: &Word, evaluation: &Evaluation) -> String {
    guess
        .text()
        .chars()
        .zip(evaluation.iter())
        .map(|(letter, outcome)| tile(letter, Some(outcome)).to_string())
        .collect()
}

/// Print the guesses so far followed by empty rows up to the limit
pub fn print_board(state: &PlayerState, target: &Word) {
    println!();
    for guess in state.current_guesses() {
        println!("  {}", format_guess_row(guess, &evaluate(guess, target)));
    }
    for _ in state.current_guesses().len()..MAX_GUESSES {
        println!("  {}", " _ ".repeat(5).bright_black());
    }
    println!();
}

/// Print the letter feedback in keyboard layout
pub fn print_keyboard(keyboard: &KeyboardState) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .bytes()
            .map(|b| tile(char::from(b), keyboard.get(b)).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print cumulative stats and the guess distribution
pub fn print_stats(stats: &Stats, schedule: &Schedule) {
    println!("\n{}", "═".repeat(44).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(44).cyan());

    println!("\n   Played:        {}", stats.games_played);
    println!(
        "   Win %:         {}",
        stats.win_percentage().to_string().bright_yellow().bold()
    );
    println!("   Streak:        {}", stats.current_streak);
    println!("   Best streak:   {}", stats.best_streak);
    println!(
        "   Words solved:  {}/{}",
        stats.words_solved(),
        schedule.total_words()
    );

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.max_bucket();
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count, max, 24);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
    println!();
}

/// Print the time left until the next word
pub fn print_countdown(countdown: Countdown) {
    println!(
        "⏳ Next word in {}",
        countdown.to_string().bright_yellow().bold()
    );
}

/// Print the final screen shown once every word has been played
pub fn print_completion(stats: &Stats, schedule: &Schedule) {
    println!("\n{}", "═".repeat(44).bright_cyan());
    println!(
        "{}",
        "   🏁  ALL WORDS COMPLETE  🏁".bright_green().bold()
    );
    println!("{}", "═".repeat(44).bright_cyan());
    println!(
        "\n   Words solved:  {}/{}",
        stats.words_solved(),
        schedule.total_words()
    );
    println!("   Best streak:   {}\n", stats.best_streak);
}
