//! Bilinear resampling

use image::{Rgba, RgbaImage};

/// Resample `src` into a new `dst_w` x `dst_h` bitmap.
///
/// Each destination pixel samples the source at the normalized coordinates
/// `(x / dst_w, y / dst_h)`, blending the four nearest source pixels.
/// Source lookups are clamped to the image edges.
pub fn resize_bilinear(src: &RgbaImage, dst_w: u32, dst_h: u32) -> RgbaImage {
    let (src_w, src_h) = src.dimensions();
    if src_w == 0 || src_h == 0 || dst_w == 0 || dst_h == 0 {
        return RgbaImage::new(dst_w, dst_h);
    }

    let mut out = RgbaImage::new(dst_w, dst_h);
    for y in 0..dst_h {
        let sy = y as f32 / dst_h as f32 * src_h as f32;
        let y0 = (sy.floor() as u32).min(src_h - 1);
        let y1 = (y0 + 1).min(src_h - 1);
        let ty = sy - y0 as f32;

        for x in 0..dst_w {
            let sx = x as f32 / dst_w as f32 * src_w as f32;
            let x0 = (sx.floor() as u32).min(src_w - 1);
            let x1 = (x0 + 1).min(src_w - 1);
            let tx = sx - x0 as f32;

            let p00 = src.get_pixel(x0, y0);
            let p10 = src.get_pixel(x1, y0);
            let p01 = src.get_pixel(x0, y1);
            let p11 = src.get_pixel(x1, y1);

            let mut px = [0u8; 4];
            for (c, out_c) in px.iter_mut().enumerate() {
                let top = p00[c] as f32 * (1.0 - tx) + p10[c] as f32 * tx;
                let bottom = p01[c] as f32 * (1.0 - tx) + p11[c] as f32 * tx;
                *out_c = (top * (1.0 - ty) + bottom * ty).round() as u8;
            }
            out.put_pixel(x, y, Rgba(px));
        }
    }
    out
}
