//! Zoom/pan state of a single-image view and the transform derived from it.
//!
//! The state is created at layout time from the viewport and bitmap sizes.
//! All mutation goes through [`crate::controller::TransformController`],
//! which keeps `scale` inside `[min_scale, max_scale]` and the pan offset
//! inside [`ViewTransformState::pan_bound`].

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::geometry::{Size, Vec2};

/// Coarse zoom classification of a [`ViewTransformState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomState {
    /// Scale rests at the fit-to-viewport minimum.
    AtMin,
    /// Scale is above the minimum, up to and including the maximum.
    Zoomed,
}

impl std::fmt::Display for ZoomState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtMin => write!(f, "At Min"),
            Self::Zoomed => write!(f, "Zoomed"),
        }
    }
}

/// Per-frame transform handed to the renderer.
///
/// Apply as: translate by `(dx, dy)`, then scale by `scale` about the
/// viewport centre, then draw the bitmap at its centring offset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderTransform {
    pub dx: f32,
    pub dy: f32,
    pub scale: f32,
}

impl RenderTransform {
    /// Map an untransformed screen point through this transform, scaling
    /// about `pivot`.
    pub fn map_point(self, pivot: Vec2, point: Vec2) -> Vec2 {
        Vec2::new(self.dx, self.dy) + pivot + (point - pivot) * self.scale
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransformState {
    viewport: Size,
    bitmap: Size,
    centering: Vec2,
    min_scale: f32,
    max_scale: f32,
    pub(crate) scale: f32,
    pub(crate) offset: Vec2,
    pub(crate) enlarged: bool,
}

impl ViewTransformState {
    /// Derive the zoom range for `bitmap` shown inside `viewport`.
    ///
    /// A bitmap relatively wider than the viewport fits by width and
    /// over-zooms by height; otherwise the other way round.
    pub fn new(viewport: Size, bitmap: Size, over_scale_factor: f32) -> Result<Self> {
        let viewport = viewport.validate()?;
        let bitmap = bitmap.validate()?;

        let centering = Vec2::new(
            (viewport.width - bitmap.width) / 2.0,
            (viewport.height - bitmap.height) / 2.0,
        );

        let (min_scale, max_scale) = if bitmap.aspect() > viewport.aspect() {
            (
                viewport.width / bitmap.width,
                viewport.height / bitmap.height * over_scale_factor,
            )
        } else {
            (
                viewport.height / bitmap.height,
                viewport.width / bitmap.width * over_scale_factor,
            )
        };

        info!(
            %viewport,
            %bitmap,
            min_scale,
            max_scale,
            "Transform state initialised"
        );

        Ok(Self {
            viewport,
            bitmap,
            centering,
            min_scale,
            max_scale,
            scale: min_scale,
            offset: Vec2::ZERO,
            enlarged: false,
        })
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn bitmap(&self) -> Size {
        self.bitmap
    }

    /// Offset at which the unscaled bitmap is centred in the viewport.
    pub fn centering_offset(&self) -> Vec2 {
        self.centering
    }

    pub fn min_scale(&self) -> f32 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f32 {
        self.max_scale
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Stored pan offset in image pixels.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_enlarged(&self) -> bool {
        self.enlarged
    }

    pub fn zoom_state(&self) -> ZoomState {
        if self.scale <= self.min_scale {
            ZoomState::AtMin
        } else {
            ZoomState::Zoomed
        }
    }

    /// Half-extent of the permitted pan range on each axis.
    ///
    /// Always measured at `max_scale`, whatever the current zoom.
    pub fn pan_bound(&self) -> Vec2 {
        Vec2::new(
            ((self.bitmap.width * self.max_scale - self.viewport.width) / 2.0).max(0.0),
            ((self.bitmap.height * self.max_scale - self.viewport.height) / 2.0).max(0.0),
        )
    }

    /// 0.0 at `min_scale`, 1.0 at `max_scale`.
    pub fn zoom_progress(&self) -> f32 {
        (self.scale - self.min_scale) / (self.max_scale - self.min_scale)
    }

    pub fn render_transform(&self) -> RenderTransform {
        let t = self.zoom_progress();
        RenderTransform {
            dx: self.offset.x * t,
            dy: self.offset.y * t,
            scale: self.scale,
        }
    }

    /// Screen position of a bitmap-space point under the current transform.
    pub fn map_bitmap_point(&self, point: Vec2) -> Vec2 {
        self.render_transform()
            .map_point(self.viewport.center(), self.centering + point)
    }

    /// On-screen `(min, max)` corners of the whole bitmap.
    pub fn image_rect(&self) -> (Vec2, Vec2) {
        (
            self.map_bitmap_point(Vec2::ZERO),
            self.map_bitmap_point(Vec2::new(self.bitmap.width, self.bitmap.height)),
        )
    }

    pub(crate) fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(self.min_scale, self.max_scale);
    }

    pub(crate) fn clamp_offsets(&mut self) {
        self.offset = self.offset.clamp_symmetric(self.pan_bound());
    }
}
