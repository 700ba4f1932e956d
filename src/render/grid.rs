//! Tile grid rendering and geometry

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::AppState;

use super::halfblock::halfblock_lines;

/// Width of one tile cell in terminal cells, border included
pub const TILE_WIDTH: u16 = 18;
/// Height of one tile cell in terminal cells, border included
pub const TILE_HEIGHT: u16 = 9;

/// Grid geometry derived from the drawing area
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub area: Rect,
    pub columns: usize,
    pub visible_rows: usize,
}

impl GridLayout {
    pub fn new(area: Rect) -> Self {
        let columns = (area.width / TILE_WIDTH).max(1) as usize;
        let visible_rows = (area.height / TILE_HEIGHT).max(1) as usize;
        Self {
            area,
            columns,
            visible_rows,
        }
    }

    /// Screen rect of the tile at `index`, or `None` when it is scrolled
    /// out of the viewport.
    pub fn tile_rect(&self, index: usize, viewport_row: usize) -> Option<Rect> {
        let col = index % self.columns;
        let row = index / self.columns;
        if row < viewport_row || row >= viewport_row + self.visible_rows {
            return None;
        }

        let x = self.area.x + col as u16 * TILE_WIDTH;
        let y = self.area.y + (row - viewport_row) as u16 * TILE_HEIGHT;
        let rect = Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT);
        (rect.right() <= self.area.right() && rect.bottom() <= self.area.bottom()).then_some(rect)
    }

    /// Tile index under a screen position, if any
    pub fn hit_test(&self, tile_count: usize, viewport_row: usize, column: u16, row: u16) -> Option<usize> {
        if column < self.area.x
            || row < self.area.y
            || column >= self.area.right()
            || row >= self.area.bottom()
        {
            return None;
        }
        let col = ((column - self.area.x) / TILE_WIDTH) as usize;
        if col >= self.columns {
            return None;
        }
        let grid_row = ((row - self.area.y) / TILE_HEIGHT) as usize + viewport_row;
        let index = grid_row * self.columns + col;
        (index < tile_count).then_some(index)
    }
}

/// Render the tile grid
pub fn render_grid(frame: &mut Frame, state: &AppState, layout: &GridLayout) {
    for (i, tile) in state.tiles.iter().enumerate() {
        let Some(rect) = layout.tile_rect(i, state.viewport_row) else {
            continue;
        };

        let border_style = if i == state.focus_index {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        if inner.height == 0 || inner.width == 0 {
            continue;
        }

        // Thumbnail fills the cell above a single label line.
        let thumb_rows = inner.height.saturating_sub(1);
        let mut lines = match &tile.thumbnail {
            Some(bitmap) if thumb_rows > 0 => halfblock_lines(bitmap, inner.width, thumb_rows),
            _ => Vec::new(),
        };
        while lines.len() < thumb_rows as usize {
            lines.push(Line::default());
        }

        let label_style = if tile.entry.is_dir() {
            Style::default().fg(Color::Blue)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(tile.label.clone(), label_style)));

        let para = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(para, inner);
    }
}
