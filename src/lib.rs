//! AZ Barber lettermark
//!
//! Renders the "AZ / BARBER" lettermark app icon onto a raster canvas and
//! exports the PNG assets the mobile app ships with.
//!
//! # Outputs
//!
//! - `icon.png` (1024x1024) master icon
//! - `adaptive-icon.png` (1024x1024) same design, used as the Android adaptive icon
//! - `favicon.png` (48x48) the master, resampled
//! - `splash-icon.png` (200x200) just the "AZ" mark, no frame
//!
//! Every output is opaque RGB. Missing font files degrade to a built-in
//! bitmap face; generation still succeeds.
//!
//! # Example
//!
//! ```no_run
//! use lettermark::IconConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IconConfig {
//!     project_root: "path/to/app".into(),
//!     ..Default::default()
//! };
//! let assets = lettermark::generate_all(&config)?;
//! for asset in &assets {
//!     println!("{} {}x{}", asset.file, asset.width, asset.height);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

pub mod error;
pub use error::{Error, Result};

pub mod export;
pub mod font;
pub mod palette;
pub mod rendering;

pub use export::{save_icon, save_splash, write_manifest, ExportedAsset};
pub use font::{Fonts, Typeface};
pub use rendering::{render_icon, render_splash};

/// Configuration for an asset generation run
///
/// Relative paths are resolved against `project_root`. The defaults match the
/// layout of the app repository:
/// - fonts come from the Expo Google Fonts packages under `node_modules`
/// - assets are written to `assets/`, which must already exist
///
/// # Examples
///
/// ```
/// let cfg = lettermark::IconConfig::default();
/// assert_eq!(cfg.icon_size, 1024);
/// assert_eq!(cfg.favicon_size, 48);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Directory every relative path is resolved against
    pub project_root: PathBuf,
    /// Output directory for the PNG assets
    pub assets_dir: PathBuf,
    /// Root of the font packages
    pub fonts_dir: PathBuf,
    /// Bold serif face for the mark, relative to `fonts_dir`
    pub serif_font: PathBuf,
    /// Medium monospace face for the subtitle, relative to `fonts_dir`
    pub mono_font: PathBuf,
    /// Master icon size (also used for the adaptive icon)
    pub icon_size: u32,
    pub favicon_size: u32,
    pub splash_size: u32,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            assets_dir: PathBuf::from("assets"),
            fonts_dir: PathBuf::from("node_modules/@expo-google-fonts"),
            serif_font: PathBuf::from("playfair-display/700Bold/PlayfairDisplay_700Bold.ttf"),
            mono_font: PathBuf::from("jetbrains-mono/500Medium/JetBrainsMono_500Medium.ttf"),
            icon_size: rendering::REFERENCE_SIZE,
            favicon_size: 48,
            splash_size: rendering::SPLASH_REFERENCE_SIZE,
        }
    }
}

impl IconConfig {
    /// Read a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&data)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| Error::ConfigError(e.to_string()))
    }

    /// Reject zero sizes before any work is done.
    pub fn validate(&self) -> Result<()> {
        for (name, size) in [
            ("icon_size", self.icon_size),
            ("favicon_size", self.favicon_size),
            ("splash_size", self.splash_size),
        ] {
            if size == 0 {
                return Err(Error::ConfigError(format!("{} must be greater than zero", name)));
            }
        }
        Ok(())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    pub fn assets_path(&self) -> PathBuf {
        self.resolve(&self.assets_dir)
    }

    pub fn fonts_path(&self) -> PathBuf {
        self.resolve(&self.fonts_dir)
    }

    pub fn serif_font_path(&self) -> PathBuf {
        self.fonts_path().join(&self.serif_font)
    }

    pub fn mono_font_path(&self) -> PathBuf {
        self.fonts_path().join(&self.mono_font)
    }

    /// Load both faces; failures fall back to the built-in face.
    pub fn load_fonts(&self) -> Fonts {
        Fonts::load(&self.serif_font_path(), &self.mono_font_path())
    }
}

/// Run the whole job: master icon, adaptive icon, favicon and splash icon.
///
/// Assets are returned in the order they were written.
pub fn generate_all(config: &IconConfig) -> Result<Vec<ExportedAsset>> {
    config.validate()?;
    let assets_dir = config.assets_path();
    let fonts = config.load_fonts();
    let mut assets = Vec::with_capacity(4);

    info!("1. Creating {0}x{0} master icon...", config.icon_size);
    let master = render_icon(config.icon_size, &fonts)?;
    assets.push(save_icon(&master, &assets_dir, export::ICON_FILE, Some(config.icon_size))?);

    info!("2. Creating adaptive icon (Android)...");
    assets.push(save_icon(&master, &assets_dir, export::ADAPTIVE_ICON_FILE, Some(config.icon_size))?);

    info!("3. Creating favicon...");
    assets.push(save_icon(&master, &assets_dir, export::FAVICON_FILE, Some(config.favicon_size))?);

    info!("4. Creating splash icon...");
    assets.push(save_splash(&assets_dir, config.splash_size, &fonts)?);

    info!("All icons generated successfully! Output directory: {}", assets_dir.display());
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_resolve_against_root() {
        let cfg = IconConfig {
            project_root: PathBuf::from("/srv/app"),
            ..Default::default()
        };
        assert_eq!(cfg.assets_path(), PathBuf::from("/srv/app/assets"));
        assert!(cfg.serif_font_path().ends_with("PlayfairDisplay_700Bold.ttf"));
        assert!(cfg.mono_font_path().starts_with("/srv/app/node_modules/@expo-google-fonts"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let cfg = IconConfig {
            assets_dir: PathBuf::from("/tmp/out"),
            ..Default::default()
        };
        assert_eq!(cfg.assets_path(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = IconConfig::from_json_str(r#"{ "favicon_size": 64 }"#).expect("parse");
        assert_eq!(cfg.favicon_size, 64);
        assert_eq!(cfg.icon_size, 1024);
        assert_eq!(cfg.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn bad_json_is_a_config_error() {
        let err = IconConfig::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn zero_sizes_fail_validation() {
        let cfg = IconConfig {
            splash_size: 0,
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("splash_size"));
    }
}
