//! Open Graph image renderer
//!
//! Draws the site's link-preview card onto a fixed-size RGBA canvas and
//! encodes it as PNG:
//! - dark background with an inset, semi-transparent overlay panel
//! - title and subtitle lines
//! - a circular logo mark with a centered letter
//!
//! Every constant lives in [`OgImageConfig`]; [`OgImageConfig::default`]
//! reproduces the published card.

pub mod canvas;
pub mod config;
pub mod font;
pub mod logo;
pub mod output;
pub mod text;

pub use config::{LogoMarkConfig, OgImageConfig, OverlayConfig, TextConfig};
pub use font::{FontOrigin, FontSource, LoadedFont};
pub use output::{default_output_path, encode_png, write_png};

use image::RgbaImage;

pub type OgImageResult<T> = Result<T, OgImageError>;

#[derive(thiserror::Error, Debug)]
pub enum OgImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Font error: {0}")]
    Font(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Draw the whole card described by `config`.
///
/// The font is resolved once and shared by the title, subtitle and logo
/// letter; only the scale differs between them.
pub fn render(config: &OgImageConfig) -> OgImageResult<RgbaImage> {
    let loaded = font::resolve_font(&config.font_source)?;
    log::info!("rendering {}x{} with font from {}", config.width, config.height, loaded.origin);

    let mut image = canvas::new_canvas(config.width, config.height, config.background)?;
    canvas::draw_overlay(&mut image, config.overlay.margin, config.overlay.color)?;

    for line in [&config.title, &config.subtitle] {
        text::draw_text(
            &mut image,
            &loaded.font,
            line.em_px,
            line.position,
            line.color,
            &line.text,
        );
    }

    logo::draw_logo_mark(&mut image, &loaded.font, &config.logo);

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_dimensions() {
        let image = render(&OgImageConfig::default()).unwrap();
        assert_eq!(image.dimensions(), (1200, 630));
    }

    #[test]
    fn test_render_rejects_zero_canvas() {
        let config = OgImageConfig::new().with_width(0);
        assert!(matches!(
            render(&config),
            Err(OgImageError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_render_rejects_oversized_margin() {
        let config =
            OgImageConfig::new().with_overlay(OverlayConfig::new().with_margin(400));
        assert!(matches!(
            render(&config),
            Err(OgImageError::InvalidParameter(_))
        ));
    }
}
