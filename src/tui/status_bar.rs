//! Status bar widget for displaying the running total, status messages, and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::pricing::{self, format_price};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the estimated price and contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let total_line = match pricing::total(&state.catalog, &state.configuration) {
            Ok(total) => Line::from(vec![
                Span::styled("Estimated price: ", Style::default().fg(theme.primary)),
                Span::styled(
                    format_price(total),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Err(e) => Line::from(Span::styled(
                format!("Price unavailable: {e}"),
                Style::default().fg(theme.error),
            )),
        };

        // Attachment note only when the engraving style is actually selected
        let engraving_line = state.configuration.active_engraving_attachment().map(|a| {
            Line::from(vec![
                Span::styled("Engraving artwork: ", Style::default().fg(theme.primary)),
                Span::styled(a.file_name.clone(), Style::default().fg(theme.text)),
                Span::styled(
                    " (file sent separately in chat)",
                    Style::default().fg(theme.text_muted),
                ),
            ])
        });

        // Error takes precedence over the last status message
        let message_line = if let Some(error) = &state.error_message {
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text_secondary),
            ))
        };

        let help_line = Line::from(vec![
            Span::styled("↑↓", Style::default().fg(theme.accent)),
            Span::styled(" Navigate  ", Style::default().fg(theme.text_muted)),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::styled(" Change  ", Style::default().fg(theme.text_muted)),
            Span::styled("e", Style::default().fg(theme.accent)),
            Span::styled(" Artwork  ", Style::default().fg(theme.text_muted)),
            Span::styled("x", Style::default().fg(theme.accent)),
            Span::styled(" Clear artwork  ", Style::default().fg(theme.text_muted)),
            Span::styled("o", Style::default().fg(theme.accent)),
            Span::styled(" Export  ", Style::default().fg(theme.text_muted)),
            Span::styled("c", Style::default().fg(theme.accent)),
            Span::styled(" Copy link  ", Style::default().fg(theme.text_muted)),
            Span::styled("q", Style::default().fg(theme.accent)),
            Span::styled(" Quit", Style::default().fg(theme.text_muted)),
        ]);

        let mut lines = vec![total_line];
        if let Some(line) = engraving_line {
            lines.push(line);
        }
        lines.push(message_line);
        lines.push(help_line);

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );

        f.render_widget(paragraph, area);
    }
}
