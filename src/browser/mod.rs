//! Browser module - directory listing, tiles, and grid navigation

mod entry;
mod lister;
mod navigator;
mod tile;

pub use entry::{Entry, EntryKind, ALLOWED_EXTENSIONS};
pub use lister::read_entries;
pub use navigator::{Activation, GridNavigator, PixelBox};
pub use tile::Tile;
