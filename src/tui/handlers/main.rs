//! Main UI input handler.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::AppState;

/// Handle input for the main category list
pub fn handle_main_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
            Ok(true)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous_category();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.next_category();
            Ok(false)
        }
        KeyCode::Enter => {
            state.open_option_picker();
            Ok(false)
        }
        KeyCode::Char('e') => {
            state.open_engraving_entry();
            Ok(false)
        }
        KeyCode::Char('x') => {
            state.clear_engraving();
            Ok(false)
        }
        KeyCode::Char('o') => {
            state.export_order();
            Ok(false)
        }
        KeyCode::Char('c') => {
            state.copy_order_link();
            Ok(false)
        }
        _ => Ok(false),
    }
}
