//! Daily Wordle - CLI
//!
//! Daily word puzzle with TUI and line-based modes.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use daily_wordle::{
    commands::{print_today_report, run_simple, share_current_game, today_report},
    core::Word,
    output::print_stats,
    schedule::{Schedule, ScheduleConfig},
    session::Session,
    storage::FileStorage,
    wordlists::{WORDS, loader::words_from_slice},
};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const APP_NAME: &str = "daily_wordle";

#[derive(Parser)]
#[command(
    name = "daily_wordle",
    about = "A new five-letter word every day, six tries to find it",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the saved game (default: platform data directory)
    #[arg(long, global = true, env = "DAILY_WORDLE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Custom word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Show today's day number, progress and time until the next word
    Today,

    /// Show cumulative statistics
    Stats,

    /// Print the share text for today's finished game
    Share,

    /// Turn sound effects on or off
    Sound {
        #[arg(value_enum)]
        setting: Toggle,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = setup_logging().ok();

    let schedule = load_schedule(cli.wordlist.as_deref())?;
    let data_dir = resolve_data_dir(cli.data_dir)?;
    let now = Utc::now();
    let mut session = Session::start(schedule, FileStorage::new(&data_dir), now);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(session),
        Commands::Simple => run_simple(&mut session),
        Commands::Today => {
            print_today_report(&today_report(&session, now));
            Ok(())
        }
        Commands::Stats => {
            print_stats(session.state().stats(), session.schedule());
            Ok(())
        }
        Commands::Share => {
            println!("{}", share_current_game(&session)?);
            Ok(())
        }
        Commands::Sound { setting } => {
            let enabled = matches!(setting, Toggle::On);
            session.set_sound(enabled);
            println!("Sound {}", if enabled { "on" } else { "off" });
            Ok(())
        }
    }
}

/// Build the schedule from the built-in list or a custom file
fn load_schedule(wordlist: Option<&Path>) -> Result<Schedule> {
    use daily_wordle::wordlists::loader::load_from_file;

    let words: Vec<Word> = match wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => words_from_slice(WORDS),
    };

    Schedule::new(words, ScheduleConfig::default()).context("failed to build the word schedule")
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    explicit
        .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
        .context("could not determine a data directory; pass --data-dir")
}

/// Log to a file in the cache directory so the TUI screen stays clean
fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = project_dirs()
        .map(|dirs| dirs.cache_dir().join("logs"))
        .context("could not determine a cache directory")?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "daily_wordle.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!("Log file: {}/daily_wordle.log", log_dir.display());
    Ok(guard)
}

fn run_play_command(session: Session<FileStorage>) -> Result<()> {
    use daily_wordle::interactive::{App, run_tui};
    use std::time::Instant;

    let app = App::new(session, Utc::now(), Instant::now());
    run_tui(app)
}
