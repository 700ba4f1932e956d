//! Status bar rendering

use std::path::Path;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::AppState;

/// Render the status bar: transient message, or current directory with a
/// tile count and the focused label.
pub fn render_status_bar(frame: &mut Frame, state: &AppState, current: &Path, area: Rect) {
    let line = match &state.message {
        Some(msg) => Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => {
            let mut spans = vec![
                Span::styled(
                    current.display().to_string(),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!("  {} tiles", state.tiles.len())),
            ];
            if let Some(tile) = state.focused_tile() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    tile.label.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        }
    };

    let para = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(para, area);
}
