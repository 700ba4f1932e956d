//! Picview - a minimal picture grid browser for terminal emulators

use std::io::stdout;
use std::process::ExitCode;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use picview::app::{exit_code, run_app, Config, HELP};
use picview::browser::GridNavigator;

fn main() -> ExitCode {
    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    if config.help {
        print!("{}", HELP);
        return ExitCode::from(exit_code::SUCCESS as u8);
    }

    if config.version {
        println!("pv {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::from(exit_code::SUCCESS as u8);
    }

    // Handle non-interactive mode first
    if config.list_mode {
        return run_list_mode(&config);
    }

    match run_with_config(config) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

/// Run in label listing mode (non-interactive)
fn run_list_mode(config: &Config) -> ExitCode {
    let mut navigator = GridNavigator::new(&config.root, config.thumb_box, config.popup_box);
    match navigator.list_labels() {
        Ok(labels) => {
            for label in labels {
                println!("{}", label);
            }
            ExitCode::from(exit_code::SUCCESS as u8)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

fn run_with_config(config: Config) -> anyhow::Result<i32> {
    // Initialize terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let mouse_enabled = config.mouse_enabled;
    let result = run_app(&mut terminal, config);

    // Restore terminal
    terminal::disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;

    result.map(|app_result| app_result.exit_code)
}
