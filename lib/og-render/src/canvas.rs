//! Canvas allocation and alpha compositing

use crate::{OgImageError, OgImageResult};
use image::{Rgba, RgbaImage};
use imageproc::rect::Rect;

/// Allocate a `width` x `height` canvas filled with `background`.
pub fn new_canvas(width: u32, height: u32, background: Rgba<u8>) -> OgImageResult<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(OgImageError::InvalidParameter(format!(
            "canvas size must be non-zero, got {width}x{height}"
        )));
    }

    Ok(RgbaImage::from_pixel(width, height, background))
}

/// Composite a `color` rectangle inset by `margin` on every side.
///
/// Blending is source-over, so an opaque canvas stays opaque.
pub fn draw_overlay(image: &mut RgbaImage, margin: u32, color: Rgba<u8>) -> OgImageResult<()> {
    let (width, height) = image.dimensions();
    let inset = margin.saturating_mul(2);
    if inset >= width || inset >= height {
        return Err(OgImageError::InvalidParameter(format!(
            "overlay margin {margin} leaves no area on a {width}x{height} canvas"
        )));
    }

    let rect = Rect::at(margin as i32, margin as i32).of_size(width - inset, height - inset);
    log::debug!("overlay rect: {:?}", rect);

    for y in rect.top()..=rect.bottom() {
        for x in rect.left()..=rect.right() {
            blend_pixel(image, x, y, color, 1.0);
        }
    }

    Ok(())
}

/// Source-over `color` at `(x, y)`, scaling its alpha by `coverage`.
/// Points outside the canvas are ignored.
pub(crate) fn blend_pixel(image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= image.width() || y as u32 >= image.height() {
        return;
    }

    let src_a = color[3] as f32 / 255.0 * coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }

    let dst = image.get_pixel_mut(x as u32, y as u32);
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return;
    }

    for c in 0..3 {
        let value = (color[c] as f32 * src_a + dst[c] as f32 * dst_a * (1.0 - src_a)) / out_a;
        dst[c] = value.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}
