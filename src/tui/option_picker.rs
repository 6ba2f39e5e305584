//! Option picker dialog for choosing an option within a category

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::pricing::format_price;

/// State for the option picker dialog
#[derive(Debug, Clone)]
pub struct OptionPickerState {
    /// Index of the highlighted option
    pub selected: usize,
    /// List state for Ratatui list widget
    pub list_state: ListState,
}

impl OptionPickerState {
    /// Create a new option picker starting at the given option index
    #[must_use]
    pub fn new(selected: usize) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(selected));

        Self {
            selected,
            list_state,
        }
    }

    /// Move selection up
    pub fn previous(&mut self, option_count: usize) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = option_count.saturating_sub(1);
        }
        self.list_state.select(Some(self.selected));
    }

    /// Move selection down
    pub fn next(&mut self, option_count: usize) {
        if self.selected + 1 < option_count {
            self.selected += 1;
        } else {
            self.selected = 0;
        }
        self.list_state.select(Some(self.selected));
    }
}

impl Default for OptionPickerState {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Render the option picker dialog for the currently open category
pub fn render_option_picker(f: &mut Frame, state: &super::AppState) {
    let theme = &state.theme;
    let Some(category) = state.open_category() else {
        return;
    };

    let area = super::centered_rect(60, 60, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    // Render opaque background with theme color
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let current_value = state
        .configuration
        .selection(&category.id)
        .map(|option| option.value.clone());

    let items: Vec<ListItem> = category
        .options
        .iter()
        .map(|option| {
            let price_span = if option.price > 0 {
                Span::styled(
                    format!("  +{}", format_price(option.price)),
                    Style::default().fg(theme.accent),
                )
            } else {
                Span::styled("  included", Style::default().fg(theme.text_muted))
            };

            let current_marker = if current_value.as_deref() == Some(option.value.as_str()) {
                Span::styled(" ●", Style::default().fg(theme.success))
            } else {
                Span::raw("")
            };

            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(option.label.clone(), Style::default().fg(theme.text)),
                price_span,
                current_marker,
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", category.name))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.surface)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    // Clone the list_state for rendering
    let mut list_state = state.option_picker_state.list_state.clone();
    f.render_stateful_widget(list, area, &mut list_state);

    // Instructions at the bottom
    let instructions_area = Rect {
        x: area.x + 2,
        y: area.y + area.height.saturating_sub(2),
        width: area.width.saturating_sub(4),
        height: 1,
    };

    let instructions = Paragraph::new(Line::from(vec![
        Span::styled("↑↓", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Navigate  "),
        Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Select  "),
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Cancel"),
    ]));
    f.render_widget(instructions, instructions_area);
}

/// Handle input for the option picker
pub fn handle_input(state: &mut super::AppState, key: KeyEvent) -> anyhow::Result<bool> {
    let option_count = state
        .open_category()
        .map_or(0, |category| category.options.len());

    match key.code {
        KeyCode::Esc => {
            state.close_popup();
            state.set_status("Cancelled");
            Ok(false)
        }
        KeyCode::Enter => {
            state.apply_picked_option();
            Ok(false)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.option_picker_state.previous(option_count);
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.option_picker_state.next(option_count);
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_starts_at_given_index() {
        let picker = OptionPickerState::new(2);
        assert_eq!(picker.selected, 2);
        assert_eq!(picker.list_state.selected(), Some(2));
    }

    #[test]
    fn test_picker_wraps_both_directions() {
        let mut picker = OptionPickerState::new(0);
        picker.previous(3);
        assert_eq!(picker.selected, 2);
        picker.next(3);
        assert_eq!(picker.selected, 0);
    }

    #[test]
    fn test_picker_next_advances() {
        let mut picker = OptionPickerState::new(0);
        picker.next(3);
        assert_eq!(picker.selected, 1);
        assert_eq!(picker.list_state.selected(), Some(1));
    }
}
