//! Single-line text drawing and glyph measurement
//!
//! Positions are the top-left corner of the line box: glyphs hang from the
//! font's ascender line at `y`. Lines are never wrapped or truncated, and
//! anything past the canvas edge is clipped.

use crate::{canvas::blend_pixel, font::em_scale};
use ab_glyph::{Font, FontArc, GlyphId, ScaleFont, point};
use image::{Rgba, RgbaImage};
use imageproc::drawing::text_size;

/// How a glyph's size was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    /// Tight pixel bounds of the glyph outline
    OutlineBounds,
    /// Advance width and line height, for glyphs without an outline
    Advance,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    pub width: f32,
    pub height: f32,
    /// Offset of the measured box from the line box's top-left corner
    pub offset: (f32, f32),
    pub method: Measurement,
}

pub fn draw_text(
    image: &mut RgbaImage,
    font: &FontArc,
    em_px: f32,
    (x, y): (i32, i32),
    color: Rgba<u8>,
    text: &str,
) {
    let scale = em_scale(font, em_px);
    let scaled = font.as_scaled(scale);
    let baseline = y as f32 + scaled.ascent();

    let mut caret = x as f32;
    let mut last: Option<GlyphId> = None;

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(last) = last {
            caret += scaled.kern(last, id);
        }
        last = Some(id);

        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);

        let Some(outline) = font.outline_glyph(glyph) else {
            continue;
        };

        let bounds = outline.px_bounds();
        outline.draw(|gx, gy, coverage| {
            let px = bounds.min.x as i32 + gx as i32;
            let py = bounds.min.y as i32 + gy as i32;
            blend_pixel(image, px, py, color, coverage);
        });
    }
}

/// Measure `c` at `em_px`.
///
/// Outline bounds are tried first; glyphs that have no outline (spaces,
/// characters missing from the face) fall back to the advance-based size.
pub fn measure_glyph(font: &FontArc, em_px: f32, c: char) -> GlyphMetrics {
    let scale = em_scale(font, em_px);

    outline_metrics(font, scale, c).unwrap_or_else(|| {
        let (width, height) = text_size(scale, font, &c.to_string());
        let height = if height == 0 {
            font.as_scaled(scale).height()
        } else {
            height as f32
        };

        GlyphMetrics {
            width: width as f32,
            height,
            offset: (0.0, 0.0),
            method: Measurement::Advance,
        }
    })
}

fn outline_metrics(font: &FontArc, scale: ab_glyph::PxScale, c: char) -> Option<GlyphMetrics> {
    let scaled = font.as_scaled(scale);
    let glyph = scaled
        .glyph_id(c)
        .with_scale_and_position(scale, point(0.0, scaled.ascent()));
    let bounds = font.outline_glyph(glyph)?.px_bounds();

    Some(GlyphMetrics {
        width: bounds.width(),
        height: bounds.height(),
        offset: (bounds.min.x, bounds.min.y),
        method: Measurement::OutlineBounds,
    })
}
