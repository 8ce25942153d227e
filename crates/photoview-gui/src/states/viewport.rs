use photoview_core::{Size, TransformController};

/// Pinch tracking across frames. egui reports per-frame zoom deltas while
/// the controller wants a factor relative to the start of the gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchState {
    pub active: bool,
    pub factor: f32,
}

impl Default for PinchState {
    fn default() -> Self {
        Self {
            active: false,
            factor: 1.0,
        }
    }
}

impl PinchState {
    /// Fold a per-frame zoom delta into the gesture. Returns `true` when
    /// this delta started a new pinch.
    pub fn accumulate(&mut self, zoom_delta: f32) -> bool {
        let began = !self.active;
        if began {
            self.active = true;
            self.factor = 1.0;
        }
        self.factor *= zoom_delta;
        began
    }

    pub fn finish(&mut self) {
        *self = Self::default();
    }
}

/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Displayed bitmap size in logical points.
    pub bitmap: Option<Size>,
    /// Built lazily once the panel size is known.
    pub controller: Option<TransformController>,
    pub pinch: PinchState,
    pub viewing_label: String,
}

impl ViewportState {
    /// Drop the controller so the next frame rebuilds it from fresh config.
    pub fn reset_controller(&mut self) {
        self.controller = None;
        self.pinch.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinch_factor_is_cumulative() {
        let mut pinch = PinchState::default();
        assert!(pinch.accumulate(1.5));
        assert!(!pinch.accumulate(2.0));
        assert_eq!(pinch.factor, 3.0);
        pinch.finish();
        assert!(!pinch.active);
        assert!(pinch.accumulate(0.5));
        assert_eq!(pinch.factor, 0.5);
    }
}
