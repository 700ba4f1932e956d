//! Main event loop for the application
//!
//! Everything runs on this single thread: input handling, directory
//! listing, image decoding, and drawing. A slow decode blocks the loop;
//! there is no background work to coordinate with.

use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use crate::browser::{Activation, GridNavigator};
use crate::core::{AppState, Popup};
use crate::handler::{handle_key_event, handle_mouse_event, KeyAction, MouseAction};
use crate::render::GridLayout;

use super::exit_code;
use super::render::{render_frame, RenderContext};
use super::Config;

/// Result of running the app
pub struct AppResult {
    pub exit_code: i32,
}

/// Main event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Config,
) -> anyhow::Result<AppResult> {
    let mut state = AppState::new(config.root.clone());
    let mut navigator = GridNavigator::new(&config.root, config.thumb_box, config.popup_box);

    match navigator.list() {
        Ok(tiles) => state.set_tiles(tiles),
        Err(e) => state.set_message(format!("Failed: list - {}", e)),
    }

    loop {
        let size = terminal.size()?;
        let grid_area = Rect::new(0, 0, size.width, size.height.saturating_sub(3));
        let layout = GridLayout::new(grid_area);
        state.adjust_viewport(layout.columns, layout.visible_rows);

        terminal.draw(|frame| {
            render_frame(
                frame,
                RenderContext {
                    state: &state,
                    current_dir: navigator.current(),
                    layout: &layout,
                },
            );
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                let action = handle_key_event(&state, key);
                apply_key_action(action, &mut state, &mut navigator, &layout);
            }
            Event::Mouse(mouse) if config.mouse_enabled => {
                let action = handle_mouse_event(mouse);
                apply_mouse_action(action, &mut state, &mut navigator, &layout);
            }
            _ => {}
        }

        if state.should_quit {
            return Ok(AppResult {
                exit_code: exit_code::SUCCESS,
            });
        }
    }
}

/// Activate the tile at `index`: directories re-list, files open the popup
fn activate_tile(index: usize, state: &mut AppState, navigator: &mut GridNavigator) {
    let Some(tile) = state.tiles.get(index).cloned() else {
        return;
    };
    state.focus_index = index;
    state.clear_message();

    match navigator.activate(&tile) {
        Activation::Relisted(tiles) => state.set_tiles(tiles),
        Activation::Popup(picture) => {
            state.popup = Some(Popup {
                picture,
                title: tile.entry.name.clone(),
            });
        }
        Activation::Failed(msg) => state.set_message(msg),
    }
}

fn apply_key_action(
    action: KeyAction,
    state: &mut AppState,
    navigator: &mut GridNavigator,
    layout: &GridLayout,
) {
    match action {
        KeyAction::None => {}
        KeyAction::Quit => state.should_quit = true,
        KeyAction::ClosePopup => state.popup = None,
        KeyAction::MoveLeft => state.move_focus(-1, 0, layout.columns),
        KeyAction::MoveRight => state.move_focus(1, 0, layout.columns),
        KeyAction::MoveUp => state.move_focus(0, -1, layout.columns),
        KeyAction::MoveDown => state.move_focus(0, 1, layout.columns),
        KeyAction::MoveToStart => state.focus_index = 0,
        KeyAction::MoveToEnd => {
            state.focus_index = state.tiles.len().saturating_sub(1);
        }
        KeyAction::Activate => activate_tile(state.focus_index, state, navigator),
        KeyAction::GoUp => {
            if let Some(index) = state.tiles.iter().position(|t| t.is_up) {
                activate_tile(index, state, navigator);
            }
        }
        KeyAction::Refresh => match navigator.list() {
            Ok(tiles) => state.set_tiles(tiles),
            Err(e) => state.set_message(format!("Failed: list - {}", e)),
        },
    }
}

fn apply_mouse_action(
    action: MouseAction,
    state: &mut AppState,
    navigator: &mut GridNavigator,
    layout: &GridLayout,
) {
    match action {
        MouseAction::None => {}
        MouseAction::Click { column, row } => {
            // A click anywhere dismisses an open popup.
            if state.popup.is_some() {
                state.popup = None;
                return;
            }
            if let Some(index) =
                layout.hit_test(state.tiles.len(), state.viewport_row, column, row)
            {
                activate_tile(index, state, navigator);
            }
        }
        MouseAction::ScrollUp => state.move_focus(0, -1, layout.columns),
        MouseAction::ScrollDown => state.move_focus(0, 1, layout.columns),
    }
}
