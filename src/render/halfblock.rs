//! Half-block pixel rendering
//!
//! Draws a bitmap into terminal cells using the upper-half-block glyph,
//! two vertically stacked pixels per cell. A half cell is roughly square,
//! so the pixel grid needs no extra aspect correction.

use image::RgbaImage;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::picture::fit_size;

/// Render `bitmap` as half-block lines fitting into `max_cols` x `max_rows`
/// terminal cells, preserving aspect ratio. Returns at most `max_rows`
/// lines of at most `max_cols` spans each.
pub fn halfblock_lines(bitmap: &RgbaImage, max_cols: u16, max_rows: u16) -> Vec<Line<'static>> {
    let (img_w, img_h) = bitmap.dimensions();
    if img_w == 0 || img_h == 0 || max_cols == 0 || max_rows == 0 {
        return Vec::new();
    }

    // One column is one pixel wide; one row holds two pixels.
    let (out_w, out_h) = fit_size(img_w, img_h, max_cols as u32, max_rows as u32 * 2);
    let rows = out_h.div_ceil(2);

    let mut lines = Vec::with_capacity(rows as usize);
    for row in 0..rows {
        let mut spans = Vec::with_capacity(out_w as usize);
        for col in 0..out_w {
            let top = sample_region(bitmap, out_w, out_h, col, row * 2);
            let bottom = if row * 2 + 1 < out_h {
                sample_region(bitmap, out_w, out_h, col, row * 2 + 1)
            } else {
                top
            };
            spans.push(Span::styled(
                "\u{2580}", // ▀
                Style::default().fg(top).bg(bottom),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Average the source region that maps onto one output pixel
fn sample_region(bitmap: &RgbaImage, out_w: u32, out_h: u32, ox: u32, oy: u32) -> Color {
    let (img_w, img_h) = bitmap.dimensions();

    let x_start = (ox as u64 * img_w as u64 / out_w as u64) as u32;
    let x_end = (((ox + 1) as u64 * img_w as u64) / out_w as u64).clamp(x_start as u64 + 1, img_w as u64) as u32;
    let y_start = (oy as u64 * img_h as u64 / out_h as u64) as u32;
    let y_end = (((oy + 1) as u64 * img_h as u64) / out_h as u64).clamp(y_start as u64 + 1, img_h as u64) as u32;

    let mut r_sum: u32 = 0;
    let mut g_sum: u32 = 0;
    let mut b_sum: u32 = 0;
    let mut count: u32 = 0;

    for y in y_start..y_end.min(img_h) {
        for x in x_start..x_end.min(img_w) {
            let p = bitmap.get_pixel(x, y);
            r_sum += p[0] as u32;
            g_sum += p[1] as u32;
            b_sum += p[2] as u32;
            count += 1;
        }
    }

    if count == 0 {
        Color::Rgb(0, 0, 0)
    } else {
        Color::Rgb(
            (r_sum / count) as u8,
            (g_sum / count) as u8,
            (b_sum / count) as u8,
        )
    }
}
