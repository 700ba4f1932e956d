//! Filesystem entry snapshot

use std::path::PathBuf;

/// File extensions the lister keeps (lowercase, without the dot).
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "png", "bmp", "tif", "gif"];

/// Kind of a filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// Immutable snapshot of one filesystem node, taken at listing time
#[derive(Debug, Clone)]
pub struct Entry {
    /// Full path to the entry
    pub path: PathBuf,
    /// Display name
    pub name: String,
    /// Directory or file
    pub kind: EntryKind,
    /// Lowercased extension without the dot (files only)
    pub extension: Option<String>,
}

impl Entry {
    /// Snapshot the node at `path`
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let kind = if path.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        };
        let extension = match kind {
            EntryKind::Dir => None,
            EntryKind::File => path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase()),
        };

        Self {
            path,
            name,
            kind,
            extension,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Whether the lister keeps this entry.
    ///
    /// Directories always survive; files survive only with an allow-listed
    /// extension.
    pub fn is_listed(&self) -> bool {
        match self.kind {
            EntryKind::Dir => true,
            EntryKind::File => self
                .extension
                .as_deref()
                .map(|ext| ALLOWED_EXTENSIONS.contains(&ext))
                .unwrap_or(false),
        }
    }
}
