//! PNG encoding and the output location

use crate::OgImageResult;
use image::{ImageFormat, RgbaImage};
use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

/// `<root>/public/og-image.png`
pub fn default_output_path(root: impl AsRef<Path>) -> PathBuf {
    root.as_ref().join("public").join("og-image.png")
}

pub fn encode_png(image: &RgbaImage) -> OgImageResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Encode `image` and write it to `path`, replacing any existing file.
///
/// The image is fully encoded before the file is opened, and the parent
/// directory is never created: a missing directory is an error and leaves
/// nothing behind.
pub fn write_png(image: &RgbaImage, path: impl AsRef<Path>) -> OgImageResult<()> {
    let path = path.as_ref();
    let bytes = encode_png(image)?;
    fs::write(path, &bytes)?;

    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
