//! Engraving artwork file name entry dialog

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// State for the engraving artwork entry dialog
#[derive(Debug, Clone, Default)]
pub struct EngravingEntryState {
    /// File name being typed
    pub input: String,
}

impl EngravingEntryState {
    /// Create an entry dialog pre-filled with the current file name (if any)
    #[must_use]
    pub fn new(current: Option<&str>) -> Self {
        Self {
            input: current.unwrap_or_default().to_string(),
        }
    }
}

/// Render the engraving artwork entry dialog
pub fn render_engraving_entry(f: &mut Frame, state: &super::AppState) {
    let theme = &state.theme;
    let area = super::centered_rect(60, 20, f.area());

    f.render_widget(Clear, area);

    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let block = Block::default()
        .title(" Engraving Artwork ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let prompt = Paragraph::new(vec![
        Line::from(Span::styled(
            "File name of the artwork you will send in chat:",
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.accent)),
            Span::styled(state.engraving_entry_state.input.clone(), Style::default().fg(theme.text)),
            Span::styled("█", Style::default().fg(theme.accent)),
        ]),
    ]);
    f.render_widget(prompt, inner);

    let instructions_area = Rect {
        x: area.x + 2,
        y: area.y + area.height.saturating_sub(2),
        width: area.width.saturating_sub(4),
        height: 1,
    };
    let instructions = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Attach  "),
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Cancel"),
    ]));
    f.render_widget(instructions, instructions_area);
}

/// Handle input for the engraving artwork entry dialog
pub fn handle_input(state: &mut super::AppState, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
        KeyCode::Esc => {
            state.close_popup();
            state.set_status("Cancelled");
            Ok(false)
        }
        KeyCode::Enter => {
            state.commit_engraving_entry();
            Ok(false)
        }
        KeyCode::Backspace => {
            state.engraving_entry_state.input.pop();
            Ok(false)
        }
        KeyCode::Char(c) => {
            state.engraving_entry_state.input.push(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}
