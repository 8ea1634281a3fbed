//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line.

use super::share::share_current_game;
use crate::core::Word;
use crate::output::{print_board, print_completion, print_countdown, print_keyboard};
use crate::session::{Availability, Session};
use crate::state::GameStatus;
use crate::storage::Storage;
use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input or writing to the terminal fails.
pub fn run_simple<S: Storage>(session: &mut Session<S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Ed's Wordle - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in six tries.");
    println!("  - {} right letter, right spot", " A ".black().on_green());
    println!("  - {} right letter, wrong spot", " A ".black().on_yellow());
    println!("  - {} not in the word\n", " A ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'mute' to toggle sound\n");

    loop {
        let now = Utc::now();
        if session.has_rolled_over(now) {
            println!("\n🌅 {}\n", "A new word is available!".bright_green().bold());
            session.refresh(now);
        }

        match session.availability() {
            Availability::BeforeLaunch => {
                println!("The first word has not been released yet.");
                print_countdown(session.countdown(now));
                return Ok(());
            }
            Availability::Exhausted => {
                print_completion(session.state().stats(), session.schedule());
                return Ok(());
            }
            Availability::Active => {}
        }

        let Some(target) = session.target().cloned() else {
            return Ok(());
        };

        print_board(session.state(), &target);

        match session.state().current_state() {
            GameStatus::Playing => {
                print_keyboard(&session.keyboard());
                let prompt = format!("Guess {}", session.state().current_guesses().len() + 1);
                let input = get_user_input(&prompt)?;

                match input.to_lowercase().as_str() {
                    "quit" | "q" | "exit" => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    "mute" => {
                        let enabled = session.toggle_sound();
                        println!("🔊 Sound {}\n", if enabled { "on" } else { "off" });
                    }
                    _ => submit_line(session, &input),
                }
            }
            status => {
                print_result(session, status, &target)?;
                match get_user_input("Type 'retry' to play again or 'quit' to exit")?
                    .to_lowercase()
                    .as_str()
                {
                    "retry" | "r" => {
                        session.retry()?;
                        println!("\n🔄 Starting over. Streaks are not counted on a retry.\n");
                    }
                    _ => {
                        println!("\n👋 See you tomorrow!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn submit_line<S: Storage>(session: &mut Session<S>, input: &str) {
    if let Err(e) = Word::parse(input) {
        println!("❌ {e}\n");
        return;
    }

    session.clear_input();
    for letter in input.trim().chars() {
        session.add_letter(letter);
    }

    match session.submit() {
        Ok(_) => session.finish_reveal(),
        Err(e) => println!("❌ {e}\n"),
    }
}

fn print_result<S: Storage>(session: &Session<S>, status: GameStatus, target: &Word) -> Result<()> {
    let state = session.state();
    if status == GameStatus::Won {
        println!(
            "{}",
            format!("🎉 GUESSED IN {}/6", state.current_guesses().len())
                .bright_green()
                .bold()
        );
    } else {
        println!(
            "{} {}",
            "❌ Out of guesses. The word was".red().bold(),
            target.text().bright_yellow().bold()
        );
    }

    println!("\n{}\n", share_current_game(session)?);
    print_countdown(session.countdown(Utc::now()));
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
