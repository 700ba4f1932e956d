//! Picview - a minimal picture grid browser for terminal emulators
//!
//! This crate renders a directory as a grid of labeled thumbnail tiles.
//! Activating a directory tile re-lists it; activating a file tile shows
//! the picture in a popup overlay.

pub mod app;
pub mod browser;
pub mod core;
pub mod error;
pub mod handler;
pub mod picture;
pub mod render;
