//! Rendering helpers for the event loop

use std::path::Path;

use ratatui::prelude::*;

use crate::core::AppState;
use crate::render::{render_grid, render_popup, render_status_bar, GridLayout};

/// Context for rendering a frame
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub current_dir: &'a Path,
    pub layout: &'a GridLayout,
}

/// Render a complete frame: grid, status bar, popup overlay on top
pub fn render_frame(frame: &mut Frame, ctx: RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_grid(frame, ctx.state, ctx.layout);
    render_status_bar(frame, ctx.state, ctx.current_dir, chunks[1]);

    if let Some(popup) = &ctx.state.popup {
        render_popup(frame, popup);
    }
}
