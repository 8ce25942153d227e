use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use photoview_core::PhotoViewConfig;
use serde::{Deserialize, Serialize};

/// Settings file picked up from the working directory at startup.
pub const DEFAULT_SETTINGS_FILE: &str = "photoview-gui.toml";

/// Display width of a loaded image in logical points.
pub const DEFAULT_IMAGE_WIDTH: f32 = 300.0;

fn default_image_width() -> f32 {
    DEFAULT_IMAGE_WIDTH
}

/// Persistable GUI settings: the decode width plus the transform config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    #[serde(default = "default_image_width")]
    pub image_width: f32,
    #[serde(default)]
    pub view: PhotoViewConfig,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            image_width: DEFAULT_IMAGE_WIDTH,
            view: PhotoViewConfig::default(),
        }
    }
}

impl ViewSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {}", path.display()))?;
        let settings: Self = toml::from_str(&contents).context("Invalid view settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load [`DEFAULT_SETTINGS_FILE`] if it exists, else the defaults.
    pub fn load_default() -> Result<(Self, Option<PathBuf>)> {
        let path = PathBuf::from(DEFAULT_SETTINGS_FILE);
        if path.exists() {
            Ok((Self::load(&path)?, Some(path)))
        } else {
            Ok((Self::default(), None))
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.image_width.is_finite() && self.image_width >= 1.0,
            "image_width must be at least 1, got {}",
            self.image_width
        );
        self.view.validate()?;
        Ok(())
    }

    /// Decode width in physical pixels for the given display scale.
    pub fn target_width(&self, pixels_per_point: f32) -> u32 {
        (self.image_width * pixels_per_point).round().max(1.0) as u32
    }
}
