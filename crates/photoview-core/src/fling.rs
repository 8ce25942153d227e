//! Inertial fling with edge bounce.
//!
//! Each axis decelerates along a precomputed spline. A fling that reaches
//! the edge of its range keeps coasting past it under constant
//! deceleration, by no more than the overfling distance, and then eases
//! back onto the edge along a cubic curve.

use std::sync::OnceLock;
use std::time::Duration;

use crate::consts::{
    BASELINE_DPI, EPSILON, GRAVITY_EARTH, INCHES_PER_METER, OVERFLING_GRAVITY, PHYSICAL_TUNING,
    SCROLL_FRICTION, SPLINE_END_TENSION, SPLINE_INFLEXION, SPLINE_SAMPLES, SPLINE_START_TENSION,
};
use crate::geometry::Vec2;

/// Sampled position/time curves of the deceleration spline.
struct SplineTables {
    position: [f32; SPLINE_SAMPLES + 1],
    time: [f32; SPLINE_SAMPLES + 1],
}

fn spline_tables() -> &'static SplineTables {
    static TABLES: OnceLock<SplineTables> = OnceLock::new();
    TABLES.get_or_init(build_spline_tables)
}

fn build_spline_tables() -> SplineTables {
    let p1 = SPLINE_START_TENSION * SPLINE_INFLEXION;
    let p2 = 1.0 - SPLINE_END_TENSION * (1.0 - SPLINE_INFLEXION);

    let mut position = [0.0f32; SPLINE_SAMPLES + 1];
    let mut time = [0.0f32; SPLINE_SAMPLES + 1];

    let mut x_min = 0.0f32;
    let mut y_min = 0.0f32;
    for i in 0..SPLINE_SAMPLES {
        let alpha = i as f32 / SPLINE_SAMPLES as f32;

        // Bisect for the curve parameter whose time coordinate is alpha.
        let mut x_max = 1.0f32;
        let (x, coef) = loop {
            let x = x_min + (x_max - x_min) / 2.0;
            let coef = 3.0 * x * (1.0 - x);
            let tx = coef * ((1.0 - x) * p1 + x * p2) + x * x * x;
            if (tx - alpha).abs() < 1e-5 || x_max - x_min < f32::EPSILON {
                break (x, coef);
            }
            if tx > alpha {
                x_max = x;
            } else {
                x_min = x;
            }
        };
        position[i] = coef * ((1.0 - x) * SPLINE_START_TENSION + x) + x * x * x;

        // Same again for the inverse curve.
        let mut y_max = 1.0f32;
        let (y, coef) = loop {
            let y = y_min + (y_max - y_min) / 2.0;
            let coef = 3.0 * y * (1.0 - y);
            let dy = coef * ((1.0 - y) * SPLINE_START_TENSION + y) + y * y * y;
            if (dy - alpha).abs() < 1e-5 || y_max - y_min < f32::EPSILON {
                break (y, coef);
            }
            if dy > alpha {
                y_max = y;
            } else {
                y_min = y;
            }
        };
        time[i] = coef * ((1.0 - y) * p1 + y * p2) + y * y * y;
    }
    position[SPLINE_SAMPLES] = 1.0;
    time[SPLINE_SAMPLES] = 1.0;

    SplineTables { position, time }
}

fn deceleration_rate() -> f64 {
    0.78f64.ln() / 0.9f64.ln()
}

/// Sign of a velocity, with zero mapping to zero.
fn direction(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Constant deceleration opposing `v`.
fn overfling_deceleration(v: f32) -> f32 {
    if v > 0.0 {
        -OVERFLING_GRAVITY
    } else {
        OVERFLING_GRAVITY
    }
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Spline,
    Ballistic,
    Cubic,
}

/// One axis of a fling. Times are in milliseconds, velocities in px/s.
#[derive(Clone, Debug)]
struct AxisScroller {
    start: f32,
    final_pos: f32,
    current: f32,
    velocity: f32,
    curr_velocity: f32,
    deceleration: f32,
    start_time: f64,
    duration: f64,
    spline_duration: f64,
    spline_distance: f32,
    over: f32,
    phase: Phase,
    finished: bool,
    physical_coeff: f64,
}

impl AxisScroller {
    fn new(density: f32) -> Self {
        let ppi = f64::from(density * BASELINE_DPI);
        Self {
            start: 0.0,
            final_pos: 0.0,
            current: 0.0,
            velocity: 0.0,
            curr_velocity: 0.0,
            deceleration: 0.0,
            start_time: 0.0,
            duration: 0.0,
            spline_duration: 0.0,
            spline_distance: 0.0,
            over: 0.0,
            phase: Phase::Spline,
            finished: true,
            physical_coeff: f64::from(GRAVITY_EARTH)
                * f64::from(INCHES_PER_METER)
                * ppi
                * f64::from(PHYSICAL_TUNING),
        }
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        (f64::from(SPLINE_INFLEXION) * f64::from(velocity.abs())
            / (f64::from(SCROLL_FRICTION) * self.physical_coeff))
            .ln()
    }

    fn spline_fling_duration(&self, velocity: f32) -> f64 {
        let l = self.spline_deceleration(velocity);
        1000.0 * (l / (deceleration_rate() - 1.0)).exp()
    }

    fn spline_fling_distance(&self, velocity: f32) -> f64 {
        if velocity == 0.0 {
            return 0.0;
        }
        let l = self.spline_deceleration(velocity);
        let rate = deceleration_rate();
        f64::from(SCROLL_FRICTION) * self.physical_coeff * (rate / (rate - 1.0) * l).exp()
    }

    fn fling(&mut self, start: f32, velocity: f32, min: f32, max: f32, over: f32, now: f64) {
        self.over = over;
        self.finished = false;
        self.velocity = velocity;
        self.curr_velocity = velocity;
        self.duration = 0.0;
        self.spline_duration = 0.0;
        self.start_time = now;
        self.start = start;
        self.current = start;

        if start > max || start < min {
            self.start_after_edge(start, min, max, velocity, now);
            return;
        }

        self.phase = Phase::Spline;
        let mut total_distance = 0.0;
        if velocity != 0.0 {
            self.spline_duration = self.spline_fling_duration(velocity);
            self.duration = self.spline_duration;
            total_distance = self.spline_fling_distance(velocity);
        }

        self.spline_distance = total_distance as f32 * direction(velocity);
        self.final_pos = start + self.spline_distance;

        if self.final_pos < min {
            self.adjust_duration(self.start, self.final_pos, min);
            self.final_pos = min;
        }
        if self.final_pos > max {
            self.adjust_duration(self.start, self.final_pos, max);
            self.final_pos = max;
        }
    }

    /// Shorten the spline duration so it ends where the travel is cut at
    /// `new_final` instead of `old_final`.
    fn adjust_duration(&mut self, start: f32, old_final: f32, new_final: f32) {
        let old_distance = old_final - start;
        if old_distance.abs() < EPSILON {
            return;
        }
        let new_distance = new_final - start;
        let x = (new_distance / old_distance).abs();
        let index = (SPLINE_SAMPLES as f32 * x) as usize;
        if index < SPLINE_SAMPLES {
            let tables = spline_tables();
            let x_inf = index as f32 / SPLINE_SAMPLES as f32;
            let x_sup = (index + 1) as f32 / SPLINE_SAMPLES as f32;
            let t_inf = tables.time[index];
            let t_sup = tables.time[index + 1];
            let time_coef = t_inf + (x - x_inf) / (x_sup - x_inf) * (t_sup - t_inf);
            self.duration *= f64::from(time_coef);
        }
    }

    /// `(distance_coef, velocity_coef)` at spline fraction `t`.
    fn spline_sample(t: f32) -> (f32, f32) {
        let tables = spline_tables();
        let index = (SPLINE_SAMPLES as f32 * t) as usize;
        if index >= SPLINE_SAMPLES {
            return (1.0, 0.0);
        }
        let t_inf = index as f32 / SPLINE_SAMPLES as f32;
        let t_sup = (index + 1) as f32 / SPLINE_SAMPLES as f32;
        let d_inf = tables.position[index];
        let d_sup = tables.position[index + 1];
        let velocity_coef = (d_sup - d_inf) / (t_sup - t_inf);
        (d_inf + (t - t_inf) * velocity_coef, velocity_coef)
    }

    fn start_springback(&mut self, start: f32, end: f32) {
        self.finished = false;
        self.phase = Phase::Cubic;
        self.start = start;
        self.current = start;
        self.final_pos = end;
        let delta = start - end;
        self.deceleration = overfling_deceleration(delta);
        self.velocity = -delta;
        self.over = delta.abs();
        self.duration = 1000.0 * (f64::from(-2.0 * delta / self.deceleration)).max(0.0).sqrt();
    }

    fn start_after_edge(&mut self, start: f32, min: f32, max: f32, velocity: f32, now: f64) {
        if start > min && start < max {
            self.finished = true;
            return;
        }
        let positive = start > max;
        let edge = if positive { max } else { min };
        let over_distance = start - edge;
        let keep_increasing = over_distance * velocity >= 0.0;
        if keep_increasing {
            self.start_bounce_after_edge(start, edge, velocity);
        } else {
            let total_distance = self.spline_fling_distance(velocity);
            if total_distance > f64::from(over_distance.abs()) {
                let (lo, hi) = if positive { (min, start) } else { (start, max) };
                self.fling(start, velocity, lo, hi, self.over, now);
            } else {
                self.start_springback(start, edge);
            }
        }
    }

    fn start_bounce_after_edge(&mut self, start: f32, end: f32, velocity: f32) {
        self.deceleration =
            overfling_deceleration(if velocity == 0.0 { start - end } else { velocity });
        self.fit_on_bounce_curve(start, end, velocity);
        self.on_edge_reached();
    }

    /// Rewind the start time so a ballistic curve launched from `end`
    /// passes through `start` with `velocity` now.
    fn fit_on_bounce_curve(&mut self, start: f32, end: f32, velocity: f32) {
        let decel = self.deceleration;
        let duration_to_apex = -velocity / decel;
        let distance_to_apex = velocity * velocity / 2.0 / decel.abs();
        let distance_to_edge = (end - start).abs();
        let total_duration = (2.0 * (distance_to_apex + distance_to_edge) / decel.abs()).sqrt();
        self.start_time -= 1000.0 * f64::from(total_duration - duration_to_apex);
        self.start = end;
        self.current = end;
        self.velocity = -decel * total_duration;
    }

    fn on_edge_reached(&mut self) {
        let velocity_squared = self.velocity * self.velocity;
        let mut distance = if self.deceleration == 0.0 {
            0.0
        } else {
            velocity_squared / (2.0 * self.deceleration.abs())
        };
        if distance > self.over {
            if self.over > 0.0 {
                self.deceleration = -direction(self.velocity) * velocity_squared / (2.0 * self.over);
            }
            distance = self.over;
        }
        self.over = distance;
        self.phase = Phase::Ballistic;
        self.final_pos = self.start + if self.velocity > 0.0 { distance } else { -distance };
        self.duration = if distance > 0.0 && self.deceleration != 0.0 {
            -1000.0 * f64::from(self.velocity / self.deceleration)
        } else {
            0.0
        };
    }

    /// Advance the current phase's curve. `false` once `now` is past its end.
    fn update(&mut self, now: f64) -> bool {
        let time = now - self.start_time;
        if time <= 0.0 {
            return self.duration > 0.0;
        }
        if time > self.duration {
            return false;
        }

        let distance = match self.phase {
            Phase::Spline => {
                let t = (time / self.spline_duration) as f32;
                let (distance_coef, velocity_coef) = Self::spline_sample(t);
                self.curr_velocity =
                    velocity_coef * self.spline_distance / self.spline_duration as f32 * 1000.0;
                distance_coef * self.spline_distance
            }
            Phase::Ballistic => {
                let t = (time / 1000.0) as f32;
                self.curr_velocity = self.velocity + self.deceleration * t;
                self.velocity * t + self.deceleration * t * t / 2.0
            }
            Phase::Cubic => {
                let t = (time / self.duration) as f32;
                let t2 = t * t;
                let sign = direction(self.velocity);
                self.curr_velocity = sign * self.over * 6.0 * (-t + t2);
                sign * self.over * (3.0 * t2 - 2.0 * t * t2)
            }
        };

        self.current = self.start + distance;
        true
    }

    /// Move on to the next phase once the current one has run out.
    fn continue_when_finished(&mut self, now: f64) -> bool {
        match self.phase {
            Phase::Spline => {
                if self.duration < self.spline_duration {
                    // Clipped by an edge: carry the remaining speed past it.
                    let t = (self.duration / self.spline_duration) as f32;
                    let (_, velocity_coef) = Self::spline_sample(t);
                    self.start = self.final_pos;
                    self.current = self.final_pos;
                    self.velocity =
                        velocity_coef * self.spline_distance / self.spline_duration as f32 * 1000.0;
                    self.deceleration = overfling_deceleration(self.velocity);
                    self.start_time += self.duration;
                    self.on_edge_reached();
                } else {
                    return false;
                }
            }
            Phase::Ballistic => {
                self.start_time += self.duration;
                self.start_springback(self.final_pos, self.start);
            }
            Phase::Cubic => return false,
        }
        self.update(now);
        true
    }

    fn finish(&mut self) {
        self.current = self.final_pos;
        self.finished = true;
    }

    fn compute(&mut self, now: f64) {
        if self.finished {
            return;
        }
        if !self.update(now) && !self.continue_when_finished(now) {
            self.finish();
        }
    }
}

/// Two-axis fling over a symmetric `[-bound, bound]` range.
#[derive(Clone, Debug)]
pub struct FlingAnimator {
    x: AxisScroller,
    y: AxisScroller,
}

impl FlingAnimator {
    /// Launch a fling from `start` with `velocity` (px/s). Each axis may
    /// overshoot its bound by at most `overfling`.
    pub fn start(
        start: Vec2,
        velocity: Vec2,
        bound: Vec2,
        overfling: f32,
        density: f32,
        now: Duration,
    ) -> Self {
        let now = millis(now);
        let mut x = AxisScroller::new(density);
        let mut y = AxisScroller::new(density);
        x.fling(start.x, velocity.x, -bound.x, bound.x, overfling, now);
        y.fling(start.y, velocity.y, -bound.y, bound.y, overfling, now);
        Self { x, y }
    }

    pub fn is_finished(&self) -> bool {
        self.x.finished && self.y.finished
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.current, self.y.current)
    }

    /// Where the fling is currently heading. During a bounce this is the
    /// overshoot apex or the edge it springs back to.
    pub fn final_position(&self) -> Vec2 {
        Vec2::new(self.x.final_pos, self.y.final_pos)
    }

    /// Step both axes to `now` and feed the position to `apply`. Returns
    /// `true` while further frames are needed.
    pub fn advance(&mut self, now: Duration, mut apply: impl FnMut(Vec2)) -> bool {
        if self.is_finished() {
            return false;
        }
        let now = millis(now);
        self.x.compute(now);
        self.y.compute(now);
        apply(self.position());
        !self.is_finished()
    }

    /// Stop where the fling currently is.
    pub fn abort(&mut self) {
        self.x.finished = true;
        self.y.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(fling: &mut FlingAnimator, from_ms: u64) -> Vec<Vec2> {
        let mut positions = Vec::new();
        let mut t = from_ms;
        for _ in 0..2_000 {
            t += 16;
            let running = fling.advance(Duration::from_millis(t), |p| positions.push(p));
            if !running {
                break;
            }
        }
        positions
    }

    #[test]
    fn test_spline_tables_monotonic() {
        let tables = spline_tables();
        assert_eq!(tables.position[0], 0.0);
        assert_eq!(tables.position[SPLINE_SAMPLES], 1.0);
        for w in tables.position.windows(2) {
            assert!(w[1] >= w[0], "position table must not decrease");
        }
        for w in tables.time.windows(2) {
            assert!(w[1] >= w[0], "time table must not decrease");
        }
    }

    #[test]
    fn test_spline_distance_grows_with_velocity() {
        let axis = AxisScroller::new(1.0);
        let slow = axis.spline_fling_distance(500.0);
        let fast = axis.spline_fling_distance(4000.0);
        assert!(slow > 0.0);
        assert!(fast > slow);
        assert_eq!(axis.spline_fling_distance(0.0), 0.0);
    }

    #[test]
    fn test_zero_velocity_finishes_in_place() {
        let mut fling = FlingAnimator::start(
            Vec2::new(10.0, -20.0),
            Vec2::ZERO,
            Vec2::new(100.0, 100.0),
            300.0,
            1.0,
            Duration::ZERO,
        );
        let positions = run_to_end(&mut fling, 0);
        assert!(fling.is_finished());
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0], Vec2::new(10.0, -20.0));
    }

    #[test]
    fn test_free_fling_decelerates_inside_bounds() {
        let mut fling = FlingAnimator::start(
            Vec2::ZERO,
            Vec2::new(800.0, 0.0),
            Vec2::new(10_000.0, 10_000.0),
            300.0,
            1.0,
            Duration::ZERO,
        );
        let positions = run_to_end(&mut fling, 0);
        assert!(fling.is_finished());
        let xs: Vec<f32> = positions.iter().map(|p| p.x).collect();
        for w in xs.windows(2) {
            assert!(w[1] >= w[0] - 1e-3, "free fling must not reverse: {w:?}");
        }
        let last = *xs.last().unwrap();
        assert!(last > 0.0);
        assert!((last - fling.final_position().x).abs() < 1e-3);
    }

    #[test]
    fn test_fling_into_edge_bounces_back() {
        let bound = 50.0;
        let over = 30.0;
        let mut fling = FlingAnimator::start(
            Vec2::ZERO,
            Vec2::new(6000.0, 0.0),
            Vec2::new(bound, bound),
            over,
            1.0,
            Duration::ZERO,
        );
        let positions = run_to_end(&mut fling, 0);
        assert!(fling.is_finished());

        let max_x = positions.iter().map(|p| p.x).fold(f32::MIN, f32::max);
        assert!(max_x > bound, "expected an overshoot past the edge");
        assert!(max_x <= bound + over + 1e-2, "overshoot {max_x} exceeds bounce distance");
        assert!((positions.last().unwrap().x - bound).abs() < 1e-2);
    }

    #[test]
    fn test_start_outside_bounds_springs_back() {
        let mut fling = FlingAnimator::start(
            Vec2::new(0.0, -80.0),
            Vec2::ZERO,
            Vec2::new(50.0, 50.0),
            300.0,
            1.0,
            Duration::ZERO,
        );
        let positions = run_to_end(&mut fling, 0);
        assert!(fling.is_finished());
        assert!((positions.last().unwrap().y + 50.0).abs() < 1e-2);
    }

    #[test]
    fn test_abort_freezes_position() {
        let mut fling = FlingAnimator::start(
            Vec2::ZERO,
            Vec2::new(2000.0, 2000.0),
            Vec2::new(1000.0, 1000.0),
            300.0,
            1.0,
            Duration::ZERO,
        );
        assert!(fling.advance(Duration::from_millis(16), |_| {}));
        let frozen = fling.position();
        fling.abort();
        assert!(fling.is_finished());
        let mut called = false;
        assert!(!fling.advance(Duration::from_millis(32), |_| called = true));
        assert!(!called);
        assert_eq!(fling.position(), frozen);
    }
}
