//! Directory enumeration, ordering, and filtering

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use crate::error::Result;

use super::{Entry, EntryKind};

/// Enumerate the immediate children of `dir`, filtered and ordered.
///
/// Directories come before files; within the same kind entries are ordered
/// lexicographically by name. Files with a disallowed extension are dropped
/// entirely; directories are never filtered. Children that cannot be read
/// are skipped.
pub fn read_entries(dir: &Path) -> Result<Vec<Entry>> {
    let mut entries: Vec<Entry> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| Entry::from_path(e.path()))
        .filter(Entry::is_listed)
        .collect();

    entries.sort_by(|a, b| match (a.kind, b.kind) {
        (EntryKind::Dir, EntryKind::File) => Ordering::Less,
        (EntryKind::File, EntryKind::Dir) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    });

    Ok(entries)
}
