//! Export: resampling, flattening and PNG output

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};
use log::info;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::font::Fonts;
use crate::palette::BG_COLOR;
use crate::rendering::{flatten, render_splash};

pub const ICON_FILE: &str = "icon.png";
pub const ADAPTIVE_ICON_FILE: &str = "adaptive-icon.png";
pub const FAVICON_FILE: &str = "favicon.png";
pub const SPLASH_FILE: &str = "splash-icon.png";

/// A written asset, as recorded in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedAsset {
    /// File name inside the assets directory
    pub file: String,
    #[serde(skip)]
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Lowercase hex SHA-256 of the PNG bytes
    pub sha256: String,
}

/// Save `master` as `dir/filename`, resampled to `target_size` when it differs
/// from the master size. Output is always opaque RGB.
pub fn save_icon(
    master: &RgbaImage,
    dir: &Path,
    filename: &str,
    target_size: Option<u32>,
) -> Result<ExportedAsset> {
    let resized = resample(master, target_size)?;
    let rgb = flatten(&resized, BG_COLOR);
    write_asset(&rgb, dir, filename)
}

/// Render the splash mark at `size` and save it as `dir/splash-icon.png`.
pub fn save_splash(dir: &Path, size: u32, fonts: &Fonts) -> Result<ExportedAsset> {
    let rgb = render_splash(size, fonts)?;
    write_asset(&rgb, dir, SPLASH_FILE)
}

/// Lanczos resample to a square `target_size`; `None` or the current size
/// returns the image unchanged.
pub fn resample(master: &RgbaImage, target_size: Option<u32>) -> Result<RgbaImage> {
    match target_size {
        Some(0) => Err(Error::InvalidSize(0)),
        Some(size) if size != master.width() || size != master.height() => {
            Ok(imageops::resize(master, size, size, FilterType::Lanczos3))
        }
        _ => Ok(master.clone()),
    }
}

/// Lossless PNG encoding at the highest compression setting.
pub fn encode_png(rgb: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, PngFilter::Adaptive);
    encoder.write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)?;
    Ok(bytes)
}

fn write_asset(rgb: &RgbImage, dir: &Path, filename: &str) -> Result<ExportedAsset> {
    let bytes = encode_png(rgb)?;
    let path = dir.join(filename);
    fs::write(&path, &bytes)?;
    info!("  Saved: {} ({}x{})", path.display(), rgb.width(), rgb.height());

    Ok(ExportedAsset {
        file: filename.to_string(),
        path,
        width: rgb.width(),
        height: rgb.height(),
        sha256: hex::encode(Sha256::digest(&bytes)),
    })
}

/// Write the manifest of exported assets as pretty JSON.
pub fn write_manifest(path: &Path, assets: &[ExportedAsset]) -> Result<()> {
    let json = serde_json::to_string_pretty(assets)?;
    fs::write(path, json)?;
    info!("Wrote manifest: {}", path.display());
    Ok(())
}
