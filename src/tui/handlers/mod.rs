//! Input handler modules for different TUI contexts.

pub mod main;

use anyhow::Result;
use crossterm::event::KeyEvent;

use super::{engraving_entry, option_picker, AppState, PopupType};

pub use main::handle_main_input;

/// Top-level key dispatch.
///
/// Returns `Ok(true)` when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // An error overlay swallows the next key press
    if state.error_message.is_some() {
        state.error_message = None;
        return Ok(false);
    }

    match state.active_popup {
        Some(PopupType::OptionPicker) => option_picker::handle_input(state, key),
        Some(PopupType::EngravingEntry) => engraving_entry::handle_input(state, key),
        None => handle_main_input(state, key),
    }
}
