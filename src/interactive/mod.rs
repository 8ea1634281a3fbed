//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Overlay, Reveal, run_tui};
pub use rendering::ui;
