//! PNG export of the committed drawing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use image::{ImageFormat, RgbaImage};

use crate::engine::InkEngine;
use crate::surface::Surface;

pub fn timestamped_file_name(now: DateTime<Local>) -> String {
    format!("scribble_{}.png", now.format("%Y%m%d_%H%M%S"))
}

pub fn export_png(surface: &Surface, path: &Path) -> Result<()> {
    let img = RgbaImage::from_raw(surface.width(), surface.height(), surface.pixels().to_vec())
        .context("surface pixel buffer does not match its dimensions")?;
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write png {}", path.display()))?;
    tracing::debug!(path = %path.display(), "exported committed surface");
    Ok(())
}

/// Writes the committed surface into `folder` under a timestamped name and
/// returns the path written.
pub fn export_committed(engine: &InkEngine, folder: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(folder)
        .with_context(|| format!("create export folder {}", folder.display()))?;
    let path = folder.join(timestamped_file_name(Local::now()));
    export_png(engine.committed(), &path)?;
    Ok(path)
}
