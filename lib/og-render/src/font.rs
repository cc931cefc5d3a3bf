//! Typeface resolution
//!
//! The bundled DejaVu Sans Bold keeps output identical across hosts. The
//! system probe walks a fixed candidate list and falls back to the bundled
//! face when nothing loads.

use crate::{OgImageError, OgImageResult};
use ab_glyph::{Font, FontArc, PxScale};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

/// DejaVu Sans Bold, see `assets/LICENSE-DejaVu.txt`.
pub static BUNDLED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

/// Well-known font files on macOS and Debian-like Linux hosts, in probe order.
pub const SYSTEM_FONT_CANDIDATES: [&str; 4] = [
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/SFNSDisplay.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FontSource {
    /// Use the font compiled into this crate
    #[default]
    Bundled,
    /// Probe `candidates` in order, then fall back to the bundled font
    System { candidates: Vec<PathBuf> },
}

impl FontSource {
    pub fn system() -> Self {
        Self::System {
            candidates: SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontOrigin {
    Bundled,
    File(PathBuf),
}

impl fmt::Display for FontOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontOrigin::Bundled => write!(f, "bundled DejaVu Sans Bold"),
            FontOrigin::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Clone)]
pub struct LoadedFont {
    pub font: FontArc,
    pub origin: FontOrigin,
}

pub fn resolve_font(source: &FontSource) -> OgImageResult<LoadedFont> {
    if let FontSource::System { candidates } = source {
        for path in candidates {
            match load_font_file(path) {
                Ok(font) => {
                    return Ok(LoadedFont {
                        font,
                        origin: FontOrigin::File(path.clone()),
                    });
                }
                Err(e) => log::debug!("skip font candidate: {e}"),
            }
        }

        log::debug!("no system font candidate loaded, using bundled font");
    }

    Ok(LoadedFont {
        font: bundled_font()?,
        origin: FontOrigin::Bundled,
    })
}

pub fn bundled_font() -> OgImageResult<FontArc> {
    FontArc::try_from_slice(BUNDLED_FONT)
        .map_err(|e| OgImageError::Font(format!("bundled font: {e}")))
}

pub fn load_font_file(path: impl AsRef<Path>) -> OgImageResult<FontArc> {
    let path = path.as_ref();
    let data = fs::read(path)
        .map_err(|e| OgImageError::Font(format!("{}: {e}", path.display())))?;

    FontArc::try_from_vec(data).map_err(|e| OgImageError::Font(format!("{}: {e}", path.display())))
}

/// Convert a size in pixels per em into the height-relative [`PxScale`]
/// that `ab_glyph` lays glyphs out with.
pub fn em_scale(font: &impl Font, em_px: f32) -> PxScale {
    match font.units_per_em() {
        Some(units_per_em) => PxScale::from(em_px * font.height_unscaled() / units_per_em),
        None => PxScale::from(em_px),
    }
}
