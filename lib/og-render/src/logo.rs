use crate::{
    config::LogoMarkConfig,
    text::{draw_text, measure_glyph},
};
use ab_glyph::FontArc;
use image::RgbaImage;
use imageproc::drawing::draw_filled_circle_mut;

/// Draw the filled badge and center its letter inside it.
pub fn draw_logo_mark(image: &mut RgbaImage, font: &FontArc, config: &LogoMarkConfig) {
    let (cx, cy) = config.center(image.width());
    draw_filled_circle_mut(image, (cx, cy), config.radius, config.fill);

    let metrics = measure_glyph(font, config.letter_em_px, config.letter);
    let x = cx as f32 - metrics.width / 2.0 - metrics.offset.0;
    let y = cy as f32 - metrics.height / 2.0 - metrics.offset.1;
    log::debug!(
        "logo mark at ({cx}, {cy}), letter {:?} measured by {:?}",
        config.letter,
        metrics.method
    );

    draw_text(
        image,
        font,
        config.letter_em_px,
        (x.round() as i32, y.round() as i32),
        config.letter_color,
        &config.letter.to_string(),
    );
}
