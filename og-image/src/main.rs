//! Writes the site's Open Graph preview card to `public/og-image.png`.
//!
//! Takes no arguments. Logging goes to stderr and is controlled by
//! `RUST_LOG`; stdout carries only the confirmation line.

use anyhow::{Context, Result};
use og_render::{OgImageConfig, default_output_path, render, write_png};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    init_logger();

    let output = default_output_path(repository_root());
    log::debug!("output path: {}", output.display());

    let image = render(&OgImageConfig::default()).context("render og image")?;
    write_png(&image, &output).with_context(|| format!("write {}", output.display()))?;

    println!("Wrote {}", output.display());
    Ok(())
}

/// The workspace root, one level above this crate.
fn repository_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_root_holds_workspace() {
        let root = repository_root();
        assert!(root.is_absolute());
        assert!(root.join("Cargo.toml").exists());
        assert!(root.join("og-image").is_dir());
    }

    #[test]
    fn test_output_lands_in_public() {
        let output = default_output_path(repository_root());
        assert!(output.ends_with("public/og-image.png"));
        assert!(output.parent().is_some_and(Path::is_dir));
    }
}
