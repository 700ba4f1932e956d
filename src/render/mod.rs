//! Render module - UI rendering

pub mod grid;
pub mod halfblock;
pub mod popup;
pub mod status;

pub use grid::{render_grid, GridLayout, TILE_HEIGHT, TILE_WIDTH};
pub use halfblock::halfblock_lines;
pub use popup::render_popup;
pub use status::render_status_bar;
