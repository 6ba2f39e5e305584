//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow clone assignment patterns - common in UI state management
#![allow(clippy::assigning_clones)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod engraving_entry;
pub mod handlers;
pub mod option_picker;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::fs;
use std::io;
use std::time::Duration;

use crate::catalog::OptionCatalog;
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::Configuration;
use crate::order::OrderMessage;
use crate::pricing::format_price;

pub use engraving_entry::EngravingEntryState;
pub use option_picker::OptionPickerState;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Option picker for the highlighted category
    OptionPicker,
    /// Engraving artwork file name entry
    EngravingEntry,
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Product option catalog
    pub catalog: OptionCatalog,
    /// Current product configuration
    pub configuration: Configuration,
    /// Application configuration
    pub config: Config,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Index of the highlighted category in the main list
    pub selected_category: usize,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Option picker dialog state
    pub option_picker_state: OptionPickerState,
    /// Engraving artwork entry dialog state
    pub engraving_entry_state: EngravingEntryState,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` with every category set to its default option.
    #[must_use]
    pub fn new(catalog: OptionCatalog, config: Config) -> Self {
        let configuration = catalog.default_configuration();
        let theme = Theme::from_mode(config.ui.theme_mode);

        Self {
            catalog,
            configuration,
            config,
            theme,
            selected_category: 0,
            active_popup: None,
            option_picker_state: OptionPickerState::default(),
            engraving_entry_state: EngravingEntryState::default(),
            status_message: "Pick a category and press Enter to change it".to_string(),
            error_message: None,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// The category the main list highlight (and any open picker) points at
    #[must_use]
    pub fn open_category(&self) -> Option<&crate::models::ConfigCategory> {
        self.catalog.categories().get(self.selected_category)
    }

    /// Move the category highlight up, wrapping at the top
    pub fn previous_category(&mut self) {
        let count = self.catalog.categories().len();
        if count == 0 {
            return;
        }
        if self.selected_category > 0 {
            self.selected_category -= 1;
        } else {
            self.selected_category = count - 1;
        }
    }

    /// Move the category highlight down, wrapping at the bottom
    pub fn next_category(&mut self) {
        let count = self.catalog.categories().len();
        if count == 0 {
            return;
        }
        if self.selected_category + 1 < count {
            self.selected_category += 1;
        } else {
            self.selected_category = 0;
        }
    }

    /// Open the option picker for the highlighted category,
    /// starting at the currently selected option
    pub fn open_option_picker(&mut self) {
        let Some(category) = self.open_category() else {
            return;
        };

        let current = self
            .configuration
            .selection(&category.id)
            .and_then(|selected| {
                category
                    .options
                    .iter()
                    .position(|option| option.value == selected.value)
            })
            .unwrap_or(0);

        self.option_picker_state = OptionPickerState::new(current);
        self.active_popup = Some(PopupType::OptionPicker);
    }

    /// Apply the option highlighted in the picker to the configuration
    pub fn apply_picked_option(&mut self) {
        let Some(category) = self.open_category().cloned() else {
            self.close_popup();
            return;
        };
        let Some(option) = category.options.get(self.option_picker_state.selected).cloned() else {
            self.close_popup();
            return;
        };

        match self.configuration.select(&category, &option) {
            Ok(()) => self.set_status(format!("{}: {}", category.name, option.label)),
            Err(e) => self.set_error(e.to_string()),
        }
        self.close_popup();
    }

    /// Open the engraving artwork entry dialog, pre-filled with the current file
    pub fn open_engraving_entry(&mut self) {
        let current = self
            .configuration
            .engraving_attachment()
            .map(|a| a.file_name.as_str());
        self.engraving_entry_state = EngravingEntryState::new(current);
        self.active_popup = Some(PopupType::EngravingEntry);
    }

    /// Attach the typed file name to the configuration
    pub fn commit_engraving_entry(&mut self) {
        let file_name = self.engraving_entry_state.input.trim().to_string();
        self.close_popup();

        if file_name.is_empty() {
            self.set_status("No file name entered");
            return;
        }

        self.configuration.attach_engraving_file(file_name.clone());
        if self.configuration.engraving_selected() {
            self.set_status(format!("Attached engraving artwork: {file_name}"));
        } else {
            self.set_status(format!(
                "Attached engraving artwork: {file_name} (kept, but the engraving style is not selected)"
            ));
        }
    }

    /// Remove the engraving artwork attachment (if any)
    pub fn clear_engraving(&mut self) {
        if self.configuration.engraving_attachment().is_some() {
            self.configuration.clear_engraving_file();
            self.set_status("Removed engraving artwork");
        } else {
            self.set_status("No engraving artwork attached");
        }
    }

    /// Export the order message to the configured output directory
    pub fn export_order(&mut self) {
        let message = match OrderMessage::build(&self.catalog, &self.configuration) {
            Ok(message) => message,
            Err(e) => {
                self.set_error(format!("Failed to build order message: {e}"));
                return;
            }
        };

        let output_dir = self.config.export.output_dir.clone();
        let path = output_dir.join(OrderMessage::default_export_file_name());

        let write_result = fs::create_dir_all(&output_dir)
            .and_then(|()| fs::write(&path, format!("{}\n", message.to_text())));

        match write_result {
            Ok(()) => self.set_status(format!("✓ Exported order message to: {}", path.display())),
            Err(e) => self.set_error(format!("Failed to export order message: {e}")),
        }
    }

    /// Copy the order handoff link to the system clipboard
    pub fn copy_order_link(&mut self) {
        let message = match OrderMessage::build(&self.catalog, &self.configuration) {
            Ok(message) => message,
            Err(e) => {
                self.set_error(format!("Failed to build order message: {e}"));
                return;
            }
        };

        let url = message.to_url(&self.config.contact.url);
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url)) {
            Ok(()) => self.set_status("Order link copied to clipboard"),
            Err(e) => self.set_error(format!("Failed to copy to clipboard: {e}")),
        }
    }

    /// Close the currently active popup
    pub fn close_popup(&mut self) {
        self.active_popup = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS, Dark/Light are explicit)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handlers::handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    // This ensures consistent background regardless of terminal settings
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Category list
            Constraint::Length(6), // Status bar (price + attachment + message + help)
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_category_list(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    // Render popup if active
    if let Some(popup_type) = &state.active_popup {
        render_popup(f, popup_type, state);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" {APP_NAME} - Build your grill");

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render the category list with each category's current selection
fn render_category_list(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let items: Vec<ListItem> = state
        .catalog
        .categories()
        .iter()
        .map(|category| {
            let selected = state.configuration.selection(&category.id);

            let mut spans = vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<14}", category.name),
                    Style::default().fg(theme.primary),
                ),
            ];

            match selected {
                Some(option) => {
                    spans.push(Span::styled(
                        option.label.clone(),
                        Style::default().fg(theme.text),
                    ));
                    if option.price > 0 {
                        spans.push(Span::styled(
                            format!("  +{}", format_price(option.price)),
                            Style::default().fg(theme.accent),
                        ));
                    }
                }
                None => {
                    spans.push(Span::styled(
                        "(not selected)",
                        Style::default().fg(theme.error),
                    ));
                }
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Configuration ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.surface)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_category));

    f.render_stateful_widget(list, area, &mut list_state);
}

/// Render active popup
fn render_popup(f: &mut Frame, popup_type: &PopupType, state: &AppState) {
    match popup_type {
        PopupType::OptionPicker => option_picker::render_option_picker(f, state),
        PopupType::EngravingEntry => engraving_entry::render_engraving_entry(f, state),
    }
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    // Render opaque background with error color
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(2), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Any key",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to dismiss", Style::default().fg(theme.text_muted)),
    ])]);
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
