use std::f32::consts::PI;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing curve mapping elapsed fraction to value fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpolator {
    Linear,
    /// Slow start and end, fastest in the middle.
    #[default]
    AccelerateDecelerate,
}

impl Interpolator {
    /// `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

impl std::fmt::Display for Interpolator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::AccelerateDecelerate => write!(f, "Accelerate/Decelerate"),
        }
    }
}

/// Interpolates a single float between two values over a fixed duration.
///
/// The animator does not own the animated property: each step hands the
/// current value to a caller-supplied closure.
#[derive(Clone, Debug)]
pub struct ValueAnimator {
    from: f32,
    to: f32,
    duration: Duration,
    interpolator: Interpolator,
    start_time: Duration,
    finished: bool,
}

impl ValueAnimator {
    pub fn start(
        from: f32,
        to: f32,
        duration: Duration,
        interpolator: Interpolator,
        now: Duration,
    ) -> Self {
        Self {
            from,
            to,
            duration,
            interpolator,
            start_time: now,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Elapsed fraction at `now`, in `[0, 1]`.
    pub fn fraction_at(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start_time);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn value_at(&self, now: Duration) -> f32 {
        let fraction = self.fraction_at(now);
        if fraction >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.interpolator.apply(fraction)
    }

    /// Feed the value at `now` to `apply`. Returns `true` while the
    /// animation has further frames to produce.
    pub fn advance(&mut self, now: Duration, mut apply: impl FnMut(f32)) -> bool {
        if self.finished {
            return false;
        }
        apply(self.value_at(now));
        if self.fraction_at(now) >= 1.0 {
            self.finished = true;
        }
        !self.finished
    }

    pub fn cancel(&mut self) {
        self.finished = true;
    }
}
