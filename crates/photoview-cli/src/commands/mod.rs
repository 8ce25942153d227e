pub mod config;
pub mod info;
pub mod replay;

use std::path::Path;

use anyhow::{bail, Context, Result};
use photoview_core::{PhotoViewConfig, Size};

/// Load a view config from TOML, or the defaults when no path is given.
pub(crate) fn load_config(path: Option<&Path>) -> Result<PhotoViewConfig> {
    let Some(path) = path else {
        return Ok(PhotoViewConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: PhotoViewConfig = toml::from_str(&contents).context("Invalid view config")?;
    config.validate()?;
    Ok(config)
}

/// Parse a `WIDTHxHEIGHT` argument such as `1080x1920`.
pub(crate) fn parse_size(s: &str) -> Result<Size> {
    let Some((w, h)) = s.split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT, got '{s}'");
    };
    let width: f32 = w.trim().parse().with_context(|| format!("Invalid width '{w}'"))?;
    let height: f32 = h.trim().parse().with_context(|| format!("Invalid height '{h}'"))?;
    Ok(Size::new(width, height))
}
