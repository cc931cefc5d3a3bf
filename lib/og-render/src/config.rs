//! Card layout constants
//!
//! Defaults reproduce the published 1200x630 card. The `with_*` setters
//! exist so tests can render variants; the executable never changes them.

use crate::font::FontSource;
use derivative::Derivative;
use derive_setters::Setters;
use image::Rgba;

/// Configuration for the whole card
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct OgImageConfig {
    /// Canvas width in pixels
    #[derivative(Default(value = "1200"))]
    pub width: u32,
    /// Canvas height in pixels
    #[derivative(Default(value = "630"))]
    pub height: u32,
    /// Background fill, dark navy `#0f172a`
    #[derivative(Default(value = "Rgba([15, 23, 42, 255])"))]
    pub background: Rgba<u8>,
    /// Inset translucent panel
    pub overlay: OverlayConfig,
    /// Large headline line
    #[derivative(Default(value = "TextConfig::title()"))]
    pub title: TextConfig,
    /// Tagline under the headline
    #[derivative(Default(value = "TextConfig::subtitle()"))]
    pub subtitle: TextConfig,
    /// Circular badge near the top-right corner
    pub logo: LogoMarkConfig,
    /// Where the typeface comes from
    pub font_source: FontSource,
}

impl OgImageConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Translucent panel inset from every canvas edge
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct OverlayConfig {
    /// Distance from each canvas edge in pixels
    #[derivative(Default(value = "60"))]
    pub margin: u32,
    /// Low-alpha cyan tint
    #[derivative(Default(value = "Rgba([6, 182, 212, 20])"))]
    pub color: Rgba<u8>,
}

impl OverlayConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One line of text
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct TextConfig {
    #[derivative(Default(value = "String::new()"))]
    pub text: String,
    /// Font size in pixels per em
    #[derivative(Default(value = "24.0"))]
    pub em_px: f32,
    /// Top-left corner of the line box
    #[derivative(Default(value = "(0, 0)"))]
    pub position: (i32, i32),
    #[derivative(Default(value = "Rgba([255, 255, 255, 255])"))]
    pub color: Rgba<u8>,
}

impl TextConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self::default().with_text(text.into())
    }

    pub fn title() -> Self {
        Self::new("Outbound.ing")
            .with_em_px(64.0)
            .with_position((90, 180))
    }

    /// Sits 80px under the title.
    pub fn subtitle() -> Self {
        Self::new("AI-powered cold outreach emails — personalized at scale")
            .with_em_px(28.0)
            .with_position((90, 260))
            .with_color(Rgba([255, 255, 255, 220]))
    }
}

/// Filled circle with a single centered letter
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct LogoMarkConfig {
    /// Distance from the canvas right edge to the circle's bounding box
    #[derivative(Default(value = "108"))]
    pub right_offset: u32,
    /// Top of the circle's bounding box
    #[derivative(Default(value = "64"))]
    pub top: i32,
    #[derivative(Default(value = "36"))]
    pub radius: i32,
    #[derivative(Default(value = "Rgba([6, 182, 212, 255])"))]
    pub fill: Rgba<u8>,
    #[derivative(Default(value = "'O'"))]
    pub letter: char,
    #[derivative(Default(value = "36.0"))]
    pub letter_em_px: f32,
    #[derivative(Default(value = "Rgba([7, 16, 36, 255])"))]
    pub letter_color: Rgba<u8>,
}

impl LogoMarkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Circle center for a canvas `canvas_width` pixels wide.
    pub fn center(&self, canvas_width: u32) -> (i32, i32) {
        let left = canvas_width as i32 - self.right_offset as i32;
        (left + self.radius, self.top + self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_card_constants() {
        let config = OgImageConfig::default();
        assert_eq!((config.width, config.height), (1200, 630));
        assert_eq!(config.background, Rgba([15, 23, 42, 255]));
        assert_eq!(config.overlay.margin, 60);
        assert_eq!(config.overlay.color, Rgba([6, 182, 212, 20]));
        assert_eq!(config.title.text, "Outbound.ing");
        assert_eq!(config.title.em_px, 64.0);
        assert_eq!(config.subtitle.em_px, 28.0);
        assert_eq!(config.subtitle.color, Rgba([255, 255, 255, 220]));
        assert_eq!(config.logo.letter, 'O');
        assert!(matches!(config.font_source, FontSource::Bundled));
    }

    #[test]
    fn test_subtitle_sits_below_title() {
        let title = TextConfig::title();
        let subtitle = TextConfig::subtitle();
        assert_eq!(subtitle.position.0, title.position.0);
        assert_eq!(subtitle.position.1 - title.position.1, 80);
    }

    #[test]
    fn test_logo_center() {
        let logo = LogoMarkConfig::default();
        assert_eq!(logo.center(1200), (1128, 100));

        let logo = logo.with_right_offset(240);
        assert_eq!(logo.center(1200), (996, 100));
    }

    #[test]
    fn test_text_config_setters() {
        let line = TextConfig::new("Hello")
            .with_em_px(48.0)
            .with_position((10, 20));

        assert_eq!(line.text, "Hello");
        assert_eq!(line.em_px, 48.0);
        assert_eq!(line.position, (10, 20));
        assert_eq!(line.color, Rgba([255, 255, 255, 255]));
    }
}
