/// Factor applied to the fill scale to get the maximum zoom, so the narrow
/// side of the bitmap can still overflow the viewport when fully zoomed.
pub const DEFAULT_OVER_SCALE_FACTOR: f32 = 1.5;

/// Distance (in image pixels) a fling may overshoot a pan edge before it
/// springs back.
pub const DEFAULT_FLING_BOUNCE: f32 = 300.0;

/// Duration of the double-tap zoom animation in milliseconds.
pub const DEFAULT_ZOOM_DURATION_MS: u32 = 300;

/// Display density (physical pixels per density-independent pixel) used by
/// the fling deceleration model.
pub const DEFAULT_DENSITY: f32 = 1.0;

/// Default frame interval (in ms) used when replaying gesture scripts.
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 16;

/// Upper bound on frames ticked after the last scripted event while waiting
/// for animations to settle.
pub const MAX_SETTLE_FRAMES: usize = 1_000;

/// Dynamic friction applied to flings.
pub const SCROLL_FRICTION: f32 = 0.015;

/// Earth gravity in m/s^2, used to derive the physical deceleration.
pub const GRAVITY_EARTH: f32 = 9.806_65;

/// Inches per meter.
pub const INCHES_PER_METER: f32 = 39.37;

/// Dots per inch of a baseline density-1.0 display.
pub const BASELINE_DPI: f32 = 160.0;

/// Empirical tuning factor for the physical deceleration coefficient.
pub const PHYSICAL_TUNING: f32 = 0.84;

/// Deceleration applied (in px/s^2) while a fling coasts past an edge.
pub const OVERFLING_GRAVITY: f32 = 2000.0;

/// Inflexion point of the fling deceleration spline.
pub const SPLINE_INFLEXION: f32 = 0.35;

/// Tension at the start of the fling spline.
pub const SPLINE_START_TENSION: f32 = 0.5;

/// Tension at the end of the fling spline.
pub const SPLINE_END_TENSION: f32 = 1.0;

/// Number of samples in the precomputed fling spline tables.
pub const SPLINE_SAMPLES: usize = 100;

/// Small epsilon to avoid division by zero in floating-point comparisons.
pub const EPSILON: f32 = 1e-6;
