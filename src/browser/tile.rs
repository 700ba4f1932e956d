//! Tile construction and labeling

use image::RgbaImage;

use super::Entry;

/// Directory names longer than this are shortened
const DIR_NAME_MAX: usize = 13;
/// Kept prefix of a shortened directory name
const DIR_NAME_KEEP: usize = 12;
/// File stems longer than this are shortened
const FILE_STEM_MAX: usize = 9;
/// Kept prefix of a shortened file stem
const FILE_STEM_KEEP: usize = 8;

/// UI-bound projection of one entry
///
/// Tiles are rebuilt wholesale on every navigation; nothing is reused.
#[derive(Debug, Clone)]
pub struct Tile {
    /// The entry this tile represents
    pub entry: Entry,
    /// Display label
    pub label: String,
    /// Decoded thumbnail, when the entry is a file that decoded cleanly
    pub thumbnail: Option<RgbaImage>,
    /// Marks the synthetic tile pointing at the parent directory
    pub is_up: bool,
}

impl Tile {
    /// Tile for a subdirectory: bracketed, length-capped label
    pub fn directory(entry: Entry) -> Self {
        let label = format!("[{}]", dir_label(&entry.name));
        Self {
            entry,
            label,
            thumbnail: None,
            is_up: false,
        }
    }

    /// Synthetic tile pointing at the parent directory
    pub fn up(entry: Entry) -> Self {
        Self {
            entry,
            label: "[..]".to_string(),
            thumbnail: None,
            is_up: true,
        }
    }

    /// Tile for a file, with its thumbnail if one could be decoded
    pub fn file(entry: Entry, thumbnail: Option<RgbaImage>) -> Self {
        let label = file_label(&entry.name);
        Self {
            entry,
            label,
            thumbnail,
            is_up: false,
        }
    }
}

/// Cap a directory name at its first characters plus an ellipsis.
/// Truncation counts characters, not bytes.
fn dir_label(name: &str) -> String {
    if name.chars().count() > DIR_NAME_MAX {
        let mut out: String = name.chars().take(DIR_NAME_KEEP).collect();
        out.push_str("...");
        out
    } else {
        name.to_string()
    }
}

/// Shorten an over-long file name to `<stem prefix>..<extension>`,
/// keeping the original extension (dot included) intact.
fn file_label(name: &str) -> String {
    let (stem, ext) = match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    };
    if stem.chars().count() > FILE_STEM_MAX {
        let prefix: String = stem.chars().take(FILE_STEM_KEEP).collect();
        format!("{}..{}", prefix, ext)
    } else {
        name.to_string()
    }
}
