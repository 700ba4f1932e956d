//! Synchronous picture loading
//!
//! Decodes an image file and fits it into a bounding box. Loading happens
//! on the caller's stack; the browsing layer decides what to do with a
//! failure (it swallows it and moves on).

use std::path::Path;

use image::RgbaImage;

use crate::error::{PicviewError, Result};

use super::{fit_size, resize_bilinear};

/// A decoded picture together with its display size.
#[derive(Debug, Clone)]
pub struct Picture {
    /// Decoded pixels; resampled to `display` when requested, otherwise
    /// the full decoded resolution.
    pub bitmap: RgbaImage,
    /// Aspect-preserving size the picture should occupy on screen.
    pub display: (u32, u32),
}

/// Decode `path` and fit it into a `box_w` x `box_h` bounding box.
///
/// With `resample` set, the bitmap itself is resized to the fit size with
/// bilinear sampling. Otherwise the decoded bitmap is returned unchanged
/// and only the reported display size shrinks; the renderer letterboxes.
pub fn load_picture(path: &Path, box_w: u32, box_h: u32, resample: bool) -> Result<Picture> {
    if !path.exists() {
        return Err(PicviewError::path(path, "no such file"));
    }

    let decoded = image::open(path)?.to_rgba8();
    let (src_w, src_h) = decoded.dimensions();
    let display = fit_size(src_w, src_h, box_w, box_h);

    let bitmap = if resample {
        resize_bilinear(&decoded, display.0, display.1)
    } else {
        decoded
    };

    Ok(Picture { bitmap, display })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    fn write_png(dir: &TempDir, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let img = RgbaImage::from_pixel(width, height, Rgba([120, 40, 220, 255]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_picture(Path::new("/nonexistent/image.png"), 80, 60, true);
        assert!(matches!(err, Err(PicviewError::Path { .. })));
    }

    #[test]
    fn test_undecodable_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.png");
        std::fs::write(&path, b"not a png at all").unwrap();
        let err = load_picture(&path, 80, 60, true);
        assert!(matches!(err, Err(PicviewError::Decode(_))));
    }

    #[test]
    fn test_resampled_bitmap_matches_fit_size() {
        let temp = TempDir::new().unwrap();
        let path = write_png(&temp, "wide.png", 400, 100);

        let picture = load_picture(&path, 80, 60, true).unwrap();
        assert_eq!(picture.display, (80, 20));
        assert_eq!(picture.bitmap.dimensions(), (80, 20));
    }

    #[test]
    fn test_without_resample_keeps_full_resolution() {
        let temp = TempDir::new().unwrap();
        let path = write_png(&temp, "big.png", 400, 100);

        let picture = load_picture(&path, 80, 60, false).unwrap();
        assert_eq!(picture.display, (80, 20));
        assert_eq!(picture.bitmap.dimensions(), (400, 100));
    }

    #[test]
    fn test_small_source_is_untouched() {
        let temp = TempDir::new().unwrap();
        let path = write_png(&temp, "small.png", 20, 10);

        let picture = load_picture(&path, 80, 60, true).unwrap();
        assert_eq!(picture.display, (20, 10));
        assert_eq!(picture.bitmap.dimensions(), (20, 10));
    }
}
