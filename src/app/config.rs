//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;

use crate::browser::PixelBox;

use super::config_file::ConfigFile;

/// Usage text for `--help`
pub const HELP: &str = "\
pv - a minimal picture grid browser for terminal emulators

Usage: pv [OPTIONS] [DIRECTORY]

Arguments:
  [DIRECTORY]      Directory to browse (default: current directory)

Options:
  -l, --list       Print the tile labels for the directory and exit
  -h, --help       Print this help
  -V, --version    Print version

Keys:
  arrows / hjkl    Move focus in the grid
  Enter / Space    Open the focused tile
  Backspace        Go to the parent directory
  r                Re-read the current directory
  q / Esc          Quit (any key closes the popup first)
";

/// Application configuration from CLI args and config file
pub struct Config {
    pub root: PathBuf,
    /// Non-interactive label listing mode
    pub list_mode: bool,
    /// Print help and exit
    pub help: bool,
    /// Print version and exit
    pub version: bool,
    /// Enable mouse support (from config file)
    pub mouse_enabled: bool,
    /// Thumbnail bounding box (from config file)
    pub thumb_box: PixelBox,
    /// Popup bounding box (from config file)
    pub popup_box: PixelBox,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        Self::parse(env::args().skip(1))
    }

    fn parse(args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        // Load config file first (provides defaults)
        let config_file = ConfigFile::load();

        let mut root: Option<PathBuf> = None;
        let mut list_mode = false;
        let mut help = false;
        let mut version = false;

        for arg in args {
            match arg.as_str() {
                "--list" | "-l" => list_mode = true,
                "--help" | "-h" => help = true,
                "--version" | "-V" => version = true,
                other if other.starts_with('-') => {
                    anyhow::bail!("unknown option: {}", other);
                }
                other => {
                    if root.is_some() {
                        anyhow::bail!("unexpected argument: {}", other);
                    }
                    root = Some(PathBuf::from(other));
                }
            }
        }

        let root = match root {
            Some(dir) => dir,
            None => env::current_dir()?,
        };
        if !(help || version) {
            anyhow::ensure!(root.is_dir(), "not a directory: {}", root.display());
        }

        Ok(Self {
            root,
            list_mode,
            help,
            version,
            mouse_enabled: config_file.general.mouse_enabled,
            thumb_box: PixelBox {
                width: config_file.grid.thumb_width,
                height: config_file.grid.thumb_height,
            },
            popup_box: PixelBox {
                width: config_file.popup.width,
                height: config_file.popup.height,
            },
        })
    }
}
