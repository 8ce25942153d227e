#![allow(dead_code)]

use std::time::Duration;

use photoview_core::{PhotoViewConfig, Size, TransformController};

/// Frame spacing used when stepping animations in tests.
pub const FRAME_MS: u64 = 16;

/// 1000x1000 viewport showing a 1000x2000 bitmap: min scale 0.5, max 1.5.
pub fn tall_bitmap_controller() -> TransformController {
    controller_with(Size::new(1000.0, 1000.0), Size::new(1000.0, 2000.0))
}

pub fn controller_with(viewport: Size, bitmap: Size) -> TransformController {
    TransformController::new(viewport, bitmap, PhotoViewConfig::default()).unwrap()
}

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// Tick frames from `start_ms` until no animation is running. Calls
/// `on_frame` after every tick and returns the time of the last frame.
pub fn settle_with(
    controller: &mut TransformController,
    start_ms: u64,
    mut on_frame: impl FnMut(&TransformController),
) -> u64 {
    let mut t = start_ms;
    for _ in 0..10_000 {
        if !controller.is_animating() {
            break;
        }
        t += FRAME_MS;
        controller.tick(ms(t));
        on_frame(controller);
    }
    assert!(!controller.is_animating(), "animations did not settle");
    t
}

pub fn settle(controller: &mut TransformController, start_ms: u64) -> u64 {
    settle_with(controller, start_ms, |_| {})
}
