//! Grid navigation - current directory, root boundary, tile activation

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::picture::{load_picture, Picture};

use super::{read_entries, Entry, Tile};

/// Bounding box in pixels for thumbnails or the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub width: u32,
    pub height: u32,
}

/// Outcome of activating a tile
pub enum Activation {
    /// A directory tile was activated; the grid was rebuilt for it
    Relisted(Vec<Tile>),
    /// A file tile was activated; present the picture in the popup
    Popup(Picture),
    /// The activation failed; the grid is unchanged
    Failed(String),
}

/// Holds the current directory and the fixed traversal boundary
///
/// The boundary is the parent of the initial directory. The up tile only
/// exists while the current directory's parent differs from it, so
/// navigation can never climb past the initial directory.
pub struct GridNavigator {
    current: PathBuf,
    boundary: Option<PathBuf>,
    thumb_box: PixelBox,
    popup_box: PixelBox,
}

impl GridNavigator {
    pub fn new(initial: &Path, thumb_box: PixelBox, popup_box: PixelBox) -> Self {
        Self {
            current: initial.to_path_buf(),
            boundary: initial.parent().map(Path::to_path_buf),
            thumb_box,
            popup_box,
        }
    }

    /// Directory currently being listed
    pub fn current(&self) -> &Path {
        &self.current
    }

    /// Build the tile set for the current directory
    pub fn list(&mut self) -> Result<Vec<Tile>> {
        self.list_dir(self.current.clone(), true)
    }

    /// Tile labels for the current directory, without decoding thumbnails
    pub fn list_labels(&mut self) -> Result<Vec<String>> {
        let tiles = self.list_dir(self.current.clone(), false)?;
        Ok(tiles.into_iter().map(|t| t.label).collect())
    }

    /// React to a tile being activated: directories are re-listed, files
    /// are loaded at popup resolution.
    pub fn activate(&mut self, tile: &Tile) -> Activation {
        if tile.entry.is_dir() {
            match self.list_dir(tile.entry.path.clone(), true) {
                Ok(tiles) => Activation::Relisted(tiles),
                Err(e) => Activation::Failed(format!("Failed: list - {}", e)),
            }
        } else {
            let b = self.popup_box;
            match load_picture(&tile.entry.path, b.width, b.height, false) {
                Ok(picture) => Activation::Popup(picture),
                Err(e) => Activation::Failed(format!("Failed: load - {}", e)),
            }
        }
    }

    /// Parent directory the up tile points at; `None` at the boundary or
    /// the filesystem root.
    pub fn up_target(&self) -> Option<PathBuf> {
        let parent = self.current.parent()?;
        match &self.boundary {
            Some(boundary) if parent == boundary.as_path() => None,
            _ => Some(parent.to_path_buf()),
        }
    }

    /// Rebuild the tile set for `dir` and make it the current directory.
    /// The previous tile set is discarded by the caller wholesale.
    fn list_dir(&mut self, dir: PathBuf, thumbnails: bool) -> Result<Vec<Tile>> {
        let entries = read_entries(&dir)?;
        self.current = dir;

        let mut tiles = Vec::with_capacity(entries.len() + 1);
        if let Some(parent) = self.up_target() {
            tiles.push(Tile::up(Entry::from_path(parent)));
        }
        for entry in entries {
            if entry.is_dir() {
                tiles.push(Tile::directory(entry));
            } else {
                let thumbnail = if thumbnails {
                    let b = self.thumb_box;
                    load_picture(&entry.path, b.width, b.height, true)
                        .map(|p| p.bitmap)
                        .ok()
                } else {
                    None
                };
                tiles.push(Tile::file(entry, thumbnail));
            }
        }
        Ok(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::TempDir;

    const THUMB: PixelBox = PixelBox {
        width: 80,
        height: 60,
    };
    const POPUP: PixelBox = PixelBox {
        width: 280,
        height: 280,
    };

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 200, 30, 255]));
        img.save(path).unwrap();
    }

    fn labels(tiles: &[Tile]) -> Vec<&str> {
        tiles.iter().map(|t| t.label.as_str()).collect()
    }

    #[test]
    fn test_no_up_tile_at_the_initial_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let mut nav = GridNavigator::new(temp.path(), THUMB, POPUP);
        let tiles = nav.list().unwrap();
        assert_eq!(labels(&tiles), vec!["[sub]"]);
    }

    #[test]
    fn test_up_tile_appears_after_descending() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("sub");
        fs::create_dir(&sub).unwrap();

        let mut nav = GridNavigator::new(temp.path(), THUMB, POPUP);
        let tiles = nav.list().unwrap();

        match nav.activate(&tiles[0]) {
            Activation::Relisted(tiles) => {
                assert_eq!(nav.current(), sub.as_path());
                assert_eq!(labels(&tiles), vec!["[..]"]);
                assert!(tiles[0].is_up);
                assert_eq!(tiles[0].entry.path, temp.path());
            }
            _ => panic!("expected Relisted"),
        }
    }

    #[test]
    fn test_up_tile_returns_to_the_parent() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        write_png(&temp.path().join("top.png"), 10, 10);

        let mut nav = GridNavigator::new(temp.path(), THUMB, POPUP);
        let tiles = nav.list().unwrap();
        let Activation::Relisted(tiles) = nav.activate(&tiles[0]) else {
            panic!("expected Relisted");
        };
        let Activation::Relisted(tiles) = nav.activate(&tiles[0]) else {
            panic!("expected Relisted");
        };
        assert_eq!(nav.current(), temp.path());
        assert_eq!(labels(&tiles), vec!["[sub]", "top.png"]);
    }

    #[test]
    fn test_listing_order_and_filtering() {
        let temp = TempDir::new().unwrap();
        write_png(&temp.path().join("b.png"), 4, 4);
        fs::write(temp.path().join("a.txt"), b"x").unwrap();
        fs::create_dir(temp.path().join("Z")).unwrap();

        let mut nav = GridNavigator::new(temp.path(), THUMB, POPUP);
        let tiles = nav.list().unwrap();
        assert_eq!(labels(&tiles), vec!["[Z]", "b.png"]);
        assert!(tiles[1].thumbnail.is_some());
    }

    #[test]
    fn test_file_activation_opens_a_popup() {
        let temp = TempDir::new().unwrap();
        write_png(&temp.path().join("photo.png"), 400, 100);

        let mut nav = GridNavigator::new(temp.path(), THUMB, POPUP);
        let tiles = nav.list().unwrap();

        match nav.activate(&tiles[0]) {
            Activation::Popup(picture) => {
                // Popup keeps the full decoded resolution; only the
                // display size is fitted.
                assert_eq!(picture.bitmap.dimensions(), (400, 100));
                assert_eq!(picture.display, (280, 70));
            }
            _ => panic!("expected Popup"),
        }
    }

    #[test]
    fn test_failed_activation_leaves_current_unchanged() {
        let temp = TempDir::new().unwrap();
        write_png(&temp.path().join("photo.png"), 8, 8);

        let mut nav = GridNavigator::new(temp.path(), THUMB, POPUP);
        let tiles = nav.list().unwrap();

        let ghost = Tile::file(Entry::from_path(temp.path().join("gone.png")), None);
        match nav.activate(&ghost) {
            Activation::Failed(msg) => assert!(msg.starts_with("Failed: load")),
            _ => panic!("expected Failed"),
        }
        assert_eq!(nav.current(), temp.path());
        assert_eq!(tiles.len(), 1);
    }

    #[test]
    fn test_undecodable_file_gets_no_thumbnail() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("fake.png"), b"not a png").unwrap();

        let mut nav = GridNavigator::new(temp.path(), THUMB, POPUP);
        let tiles = nav.list().unwrap();
        assert_eq!(labels(&tiles), vec!["fake.png"]);
        assert!(tiles[0].thumbnail.is_none());
    }

    #[test]
    fn test_list_labels_skips_decoding() {
        let temp = TempDir::new().unwrap();
        write_png(&temp.path().join("photo.png"), 4, 4);
        fs::create_dir(temp.path().join("album")).unwrap();

        let mut nav = GridNavigator::new(temp.path(), THUMB, POPUP);
        let labels = nav.list_labels().unwrap();
        assert_eq!(labels, vec!["[album]", "photo.png"]);
    }
}
