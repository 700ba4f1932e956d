//! Application state management

use std::path::PathBuf;

use crate::browser::Tile;
use crate::picture::Picture;

/// Popup overlay: a loaded picture pending display
pub struct Popup {
    /// The loaded picture and its display size
    pub picture: Picture,
    /// Window title, usually the file name
    pub title: String,
}

/// Main application state
///
/// Owned by the event loop; only ever touched between events.
pub struct AppState {
    /// Directory the browser started in
    pub root: PathBuf,
    /// Tiles for the current directory, in grid order
    pub tiles: Vec<Tile>,
    /// Focused tile index
    pub focus_index: usize,
    /// First visible grid row (scroll position)
    pub viewport_row: usize,
    /// Popup overlay, when a picture is being shown
    pub popup: Option<Popup>,
    /// Status message
    pub message: Option<String>,
    /// Exit flag
    pub should_quit: bool,
}

impl AppState {
    /// Create new application state
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            tiles: Vec::new(),
            focus_index: 0,
            viewport_row: 0,
            popup: None,
            message: None,
            should_quit: false,
        }
    }

    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear the status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Replace the whole tile set, discarding the old one
    pub fn set_tiles(&mut self, tiles: Vec<Tile>) {
        self.tiles = tiles;
        self.focus_index = 0;
        self.viewport_row = 0;
    }

    /// Currently focused tile, if any
    pub fn focused_tile(&self) -> Option<&Tile> {
        self.tiles.get(self.focus_index)
    }

    /// Move focus by grid offsets, clamped to the tile count
    pub fn move_focus(&mut self, dx: isize, dy: isize, columns: usize) {
        if self.tiles.is_empty() || columns == 0 {
            return;
        }
        let idx = self.focus_index as isize + dx + dy * columns as isize;
        let max = self.tiles.len() as isize - 1;
        self.focus_index = idx.clamp(0, max) as usize;
    }

    /// Keep the focused tile's row inside the viewport
    pub fn adjust_viewport(&mut self, columns: usize, visible_rows: usize) {
        if columns == 0 || visible_rows == 0 {
            return;
        }
        let row = self.focus_index / columns;
        if row < self.viewport_row {
            self.viewport_row = row;
        } else if row >= self.viewport_row + visible_rows {
            self.viewport_row = row + 1 - visible_rows;
        }
    }
}
