//! Popup overlay rendering

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::core::Popup;

use super::halfblock::halfblock_lines;

/// Centered rect sized for the picture's display size, clamped to the
/// screen. Display pixels map to cells one wide and half a row tall.
fn popup_rect(display: (u32, u32), screen: Rect) -> Rect {
    let want_w = (display.0.min(u16::MAX as u32) as u16).saturating_add(2);
    let want_h = (display.1.min(u16::MAX as u32) as u16)
        .div_ceil(2)
        .saturating_add(2);
    let w = want_w.min(screen.width);
    let h = want_h.min(screen.height);
    let x = screen.x + (screen.width - w) / 2;
    let y = screen.y + (screen.height - h) / 2;
    Rect::new(x, y, w, h)
}

/// Render the picture popup over the grid
pub fn render_popup(frame: &mut Frame, popup: &Popup) {
    let area = popup_rect(popup.picture.display, frame.area());
    frame.render_widget(Clear, area);

    let (img_w, img_h) = popup.picture.bitmap.dimensions();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ({}x{}) ", popup.title, img_w, img_h));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The bitmap may be full resolution; letterbox it into the window.
    let lines = halfblock_lines(&popup.picture.bitmap, inner.width, inner.height);
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, inner);
}
