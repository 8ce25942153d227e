use serde::{Deserialize, Serialize};

use crate::animation::Interpolator;
use crate::consts::{
    DEFAULT_DENSITY, DEFAULT_FLING_BOUNCE, DEFAULT_OVER_SCALE_FACTOR, DEFAULT_ZOOM_DURATION_MS,
};
use crate::error::{PhotoViewError, Result};

/// Tunables for the transform controller and its animations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotoViewConfig {
    /// Multiplier applied to the fill scale to get the maximum zoom.
    #[serde(default = "default_over_scale_factor")]
    pub over_scale_factor: f32,
    /// Maximum overshoot past a pan edge during a fling.
    #[serde(default = "default_fling_bounce")]
    pub fling_bounce: f32,
    /// Double-tap zoom animation length in milliseconds.
    #[serde(default = "default_zoom_duration_ms")]
    pub zoom_duration_ms: u32,
    #[serde(default)]
    pub zoom_interpolator: Interpolator,
    /// Display density fed into the fling deceleration model.
    #[serde(default = "default_density")]
    pub density: f32,
}

fn default_over_scale_factor() -> f32 {
    DEFAULT_OVER_SCALE_FACTOR
}
fn default_fling_bounce() -> f32 {
    DEFAULT_FLING_BOUNCE
}
fn default_zoom_duration_ms() -> u32 {
    DEFAULT_ZOOM_DURATION_MS
}
fn default_density() -> f32 {
    DEFAULT_DENSITY
}

impl Default for PhotoViewConfig {
    fn default() -> Self {
        Self {
            over_scale_factor: DEFAULT_OVER_SCALE_FACTOR,
            fling_bounce: DEFAULT_FLING_BOUNCE,
            zoom_duration_ms: DEFAULT_ZOOM_DURATION_MS,
            zoom_interpolator: Interpolator::default(),
            density: DEFAULT_DENSITY,
        }
    }
}

impl PhotoViewConfig {
    /// Reject values that would break the scale range or the fling model.
    pub fn validate(&self) -> Result<()> {
        if !self.over_scale_factor.is_finite() || self.over_scale_factor <= 1.0 {
            return Err(PhotoViewError::InvalidConfig(format!(
                "over_scale_factor must be greater than 1.0 (got {})",
                self.over_scale_factor
            )));
        }
        if !self.fling_bounce.is_finite() || self.fling_bounce < 0.0 {
            return Err(PhotoViewError::InvalidConfig(format!(
                "fling_bounce must be non-negative (got {})",
                self.fling_bounce
            )));
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(PhotoViewError::InvalidConfig(format!(
                "density must be positive (got {})",
                self.density
            )));
        }
        Ok(())
    }
}
