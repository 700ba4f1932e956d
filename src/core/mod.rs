//! Core module - application state

pub mod state;

pub use state::{AppState, Popup};
