//! Headless replay of timestamped gesture streams.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::PhotoViewConfig;
use crate::consts::{DEFAULT_FRAME_INTERVAL_MS, MAX_SETTLE_FRAMES};
use crate::controller::TransformController;
use crate::error::{PhotoViewError, Result};
use crate::geometry::{Size, Vec2};

/// One gesture callback as delivered by a gesture recogniser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gesture {
    /// Scroll distance: previous minus current pointer position.
    Drag { dx: f32, dy: f32 },
    /// Release velocity in px/s.
    Fling { vx: f32, vy: f32 },
    DoubleTap { x: f32, y: f32 },
    PinchBegin,
    /// Span ratio relative to the start of the pinch.
    PinchUpdate { factor: f32 },
    PinchEnd,
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drag { dx, dy } => write!(f, "drag ({dx}, {dy})"),
            Self::Fling { vx, vy } => write!(f, "fling ({vx}, {vy})"),
            Self::DoubleTap { x, y } => write!(f, "double tap @ ({x}, {y})"),
            Self::PinchBegin => write!(f, "pinch begin"),
            Self::PinchUpdate { factor } => write!(f, "pinch x{factor}"),
            Self::PinchEnd => write!(f, "pinch end"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimedGesture {
    pub at_ms: u64,
    #[serde(flatten)]
    pub gesture: Gesture,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    pub viewport: Size,
    pub bitmap: Size,
    /// Spacing of animation frames between and after events.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u32,
    #[serde(default)]
    pub events: Vec<TimedGesture>,
}

fn default_frame_interval_ms() -> u32 {
    DEFAULT_FRAME_INTERVAL_MS
}

/// Controller state captured after an event or an animation frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameSample {
    pub at_ms: u64,
    /// The gesture dispatched at this sample, `None` for animation frames.
    pub gesture: Option<Gesture>,
    pub scale: f32,
    pub dx: f32,
    pub dy: f32,
    pub offset: Vec2,
    pub enlarged: bool,
}

impl FrameSample {
    fn capture(at_ms: u64, gesture: Option<Gesture>, controller: &TransformController) -> Self {
        let render = controller.render_transform();
        let state = controller.state();
        Self {
            at_ms,
            gesture,
            scale: render.scale,
            dx: render.dx,
            dy: render.dy,
            offset: state.offset(),
            enlarged: state.is_enlarged(),
        }
    }
}

/// Dispatch a single gesture to `controller` at time `now`.
pub fn dispatch(controller: &mut TransformController, gesture: &Gesture, now: Duration) -> bool {
    match *gesture {
        Gesture::Drag { dx, dy } => controller.on_drag(Vec2::new(dx, dy)),
        Gesture::Fling { vx, vy } => controller.on_fling(Vec2::new(vx, vy), now),
        Gesture::DoubleTap { x, y } => controller.on_double_tap(Vec2::new(x, y), now),
        Gesture::PinchBegin => controller.on_scale_begin(),
        Gesture::PinchUpdate { factor } => controller.on_scale_update(factor),
        Gesture::PinchEnd => {
            controller.on_scale_end();
            false
        }
    }
}

/// Run `script` through a fresh controller and record every frame.
pub fn replay(script: &GestureScript, config: &PhotoViewConfig) -> Result<Vec<FrameSample>> {
    if script.frame_interval_ms == 0 {
        return Err(PhotoViewError::Script(
            "frame_interval_ms must be greater than zero".into(),
        ));
    }
    if let Some(pair) = script.events.windows(2).find(|w| w[1].at_ms < w[0].at_ms) {
        return Err(PhotoViewError::Script(format!(
            "event at {} ms follows event at {} ms",
            pair[1].at_ms, pair[0].at_ms
        )));
    }

    let mut controller = TransformController::new(script.viewport, script.bitmap, config.clone())?;
    let interval = u64::from(script.frame_interval_ms);
    let mut samples = vec![FrameSample::capture(0, None, &controller)];
    let mut clock = 0u64;

    for event in &script.events {
        // Animation frames up to (but not including) the next event.
        while controller.is_animating() && clock + interval < event.at_ms {
            clock += interval;
            controller.tick(Duration::from_millis(clock));
            samples.push(FrameSample::capture(clock, None, &controller));
        }

        clock = event.at_ms;
        let now = Duration::from_millis(clock);
        controller.tick(now);
        dispatch(&mut controller, &event.gesture, now);
        debug!(at_ms = clock, gesture = %event.gesture, "Replayed gesture");
        samples.push(FrameSample::capture(clock, Some(event.gesture.clone()), &controller));
    }

    let mut settle_frames = 0;
    while controller.is_animating() {
        if settle_frames == MAX_SETTLE_FRAMES {
            warn!(frames = settle_frames, "Animations still running at end of replay");
            break;
        }
        clock += interval;
        controller.tick(Duration::from_millis(clock));
        samples.push(FrameSample::capture(clock, None, &controller));
        settle_frames += 1;
    }

    Ok(samples)
}
