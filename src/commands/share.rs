//! Share text for a finished game

use crate::output::share_text;
use crate::session::Session;
use crate::storage::Storage;
use anyhow::{Result, bail};

/// Share text for today's game, available once the game is over
///
/// # Errors
/// Fails when no word is scheduled today or the game is still in progress.
pub fn share_current_game<S: Storage>(session: &Session<S>) -> Result<String> {
    let Some(target) = session.target() else {
        bail!("no word is scheduled for today");
    };

    let state = session.state();
    if !state.current_state().is_finished() {
        bail!(
            "today's game is still in progress ({} guesses left)",
            state.remaining_guesses()
        );
    }

    Ok(share_text(state, target, session.schedule()))
}
