use std::time::Duration;

use tracing::debug;

use crate::animation::ValueAnimator;
use crate::config::PhotoViewConfig;
use crate::error::Result;
use crate::fling::FlingAnimator;
use crate::geometry::{Size, Vec2};
use crate::transform::{RenderTransform, ViewTransformState};

/// Turns gesture callbacks into updates of a [`ViewTransformState`].
///
/// Handlers return `true` when the state changed and the view should be
/// redrawn. Animations started by a fling or a double tap are stepped by
/// [`TransformController::tick`], which the host calls once per frame for
/// as long as it returns `true`.
#[derive(Clone, Debug)]
pub struct TransformController {
    config: PhotoViewConfig,
    state: ViewTransformState,
    fling: Option<FlingAnimator>,
    zoom: Option<ValueAnimator>,
    /// Scale captured when the current pinch began.
    pinch_base: Option<f32>,
}

impl TransformController {
    pub fn new(viewport: Size, bitmap: Size, config: PhotoViewConfig) -> Result<Self> {
        config.validate()?;
        let state = ViewTransformState::new(viewport, bitmap, config.over_scale_factor)?;
        Ok(Self {
            config,
            state,
            fling: None,
            zoom: None,
            pinch_base: None,
        })
    }

    /// Rebuild the state for new viewport or bitmap dimensions. Running
    /// animations are dropped. On error the previous state is kept.
    pub fn on_layout(&mut self, viewport: Size, bitmap: Size) -> Result<()> {
        self.state = ViewTransformState::new(viewport, bitmap, self.config.over_scale_factor)?;
        self.fling = None;
        self.zoom = None;
        self.pinch_base = None;
        Ok(())
    }

    pub fn config(&self) -> &PhotoViewConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewTransformState {
        &self.state
    }

    pub fn render_transform(&self) -> RenderTransform {
        self.state.render_transform()
    }

    /// On-screen `(min, max)` corners of the bitmap.
    pub fn image_rect(&self) -> (Vec2, Vec2) {
        self.state.image_rect()
    }

    pub fn is_flinging(&self) -> bool {
        self.fling.as_ref().is_some_and(|f| !f.is_finished())
    }

    pub fn is_zoom_animating(&self) -> bool {
        self.zoom.as_ref().is_some_and(|z| !z.is_finished())
    }

    pub fn is_animating(&self) -> bool {
        self.is_flinging() || self.is_zoom_animating()
    }

    /// Pan by a scroll `distance` (previous minus current pointer position).
    pub fn on_drag(&mut self, distance: Vec2) -> bool {
        if !self.state.enlarged {
            return false;
        }
        self.state.offset = self.state.offset - distance;
        self.state.clamp_offsets();
        debug!(dx = distance.x, dy = distance.y, offset = ?self.state.offset, "Drag");
        true
    }

    /// Start an inertial pan with `velocity` in px/s. Replaces any running
    /// fling.
    pub fn on_fling(&mut self, velocity: Vec2, now: Duration) -> bool {
        if !self.state.enlarged {
            return false;
        }
        debug!(vx = velocity.x, vy = velocity.y, "Fling");
        self.fling = Some(FlingAnimator::start(
            self.state.offset,
            velocity,
            self.state.pan_bound(),
            self.config.fling_bounce,
            self.config.density,
            now,
        ));
        true
    }

    /// Toggle between fit and full zoom, anchoring a zoom-in at `tap`.
    pub fn on_double_tap(&mut self, tap: Vec2, now: Duration) -> bool {
        self.stop_fling();

        let (from, to) = if self.state.enlarged {
            (self.state.scale, self.state.min_scale())
        } else {
            let from_center = tap - self.state.viewport().center();
            let ratio = self.state.max_scale() / self.state.min_scale();
            self.state.offset = from_center - from_center * ratio;
            self.state.clamp_offsets();
            (self.state.min_scale(), self.state.max_scale())
        };

        debug!(
            x = tap.x,
            y = tap.y,
            from,
            to,
            offset = ?self.state.offset,
            "Double tap"
        );

        let mut zoom = ValueAnimator::start(
            from,
            to,
            Duration::from_millis(u64::from(self.config.zoom_duration_ms)),
            self.config.zoom_interpolator,
            now,
        );
        let state = &mut self.state;
        if zoom.advance(now, |v| state.set_scale(v)) {
            self.zoom = Some(zoom);
        } else {
            self.zoom = None;
        }

        self.state.enlarged = !self.state.enlarged;
        true
    }

    pub fn on_scale_begin(&mut self) -> bool {
        self.stop_fling();
        if let Some(zoom) = self.zoom.as_mut() {
            zoom.cancel();
        }
        self.zoom = None;
        self.pinch_base = Some(self.state.scale);
        debug!(base = self.state.scale, "Pinch begin");
        true
    }

    /// Apply a pinch `factor`: the finger span relative to the span when
    /// the pinch began.
    pub fn on_scale_update(&mut self, factor: f32) -> bool {
        let scale = self.state.scale;
        let min = self.state.min_scale();
        let max = self.state.max_scale();

        let applicable = (scale >= max && factor < 1.0)
            || (scale <= min && factor > 1.0)
            || (scale > min && scale < max);
        if !applicable {
            return false;
        }

        let base = self.pinch_base.unwrap_or(scale);
        let candidate = base * factor;
        if candidate <= min {
            self.state.scale = min;
            self.state.enlarged = false;
        } else if candidate >= max {
            self.state.scale = max;
            self.state.enlarged = true;
        } else {
            self.state.scale = candidate;
            self.state.enlarged = true;
        }
        debug!(factor, scale = self.state.scale, enlarged = self.state.enlarged, "Pinch");
        true
    }

    pub fn on_scale_end(&mut self) {
        self.pinch_base = None;
        debug!(scale = self.state.scale, "Pinch end");
    }

    /// Step running animations to `now`. Returns `true` while another frame
    /// is needed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let state = &mut self.state;

        if let Some(fling) = self.fling.as_mut() {
            if !fling.advance(now, |p| state.offset = p) {
                self.fling = None;
            }
        }

        if let Some(zoom) = self.zoom.as_mut() {
            if !zoom.advance(now, |v| state.set_scale(v)) {
                self.zoom = None;
            }
        }

        self.is_animating()
    }

    fn stop_fling(&mut self) {
        if let Some(mut fling) = self.fling.take() {
            fling.abort();
            // An aborted bounce never springs back on its own.
            self.state.clamp_offsets();
            debug!(offset = ?self.state.offset, "Fling stopped");
        }
    }
}
