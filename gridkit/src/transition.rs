//! Timed transitions: a scalar animated from its current value towards a
//! target over a duration, advanced by the host's frame clock.
//!
//! A [`Transition`] never reads the wall clock. The host calls
//! [`TimedTransition::tick`] once per frame with the frame timestamp, which
//! keeps widgets deterministic under test.

use std::fmt;
use std::time::{Duration, Instant};

/// Configuration for a single property transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Cubic bezier (0.4, 0.0, 0.2, 1.0): quick acceleration, long settle.
    FastOutSlowIn,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
        }
    }
}

/// Evaluate a unit cubic bezier with control points `(x1, y1)`, `(x2, y2)`
/// at horizontal position `t`, bisecting for the curve parameter.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    const EPSILON: f32 = 0.0005;
    const MAX_ITERATIONS: usize = 48;

    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    fn eval(p1: f32, p2: f32, m: f32) -> f32 {
        let inv = 1.0 - m;
        3.0 * p1 * inv * inv * m + 3.0 * p2 * inv * m * m + m * m * m
    }

    let mut start = 0.0;
    let mut end = 1.0;
    let mut mid = 0.5;
    for _ in 0..MAX_ITERATIONS {
        mid = (start + end) / 2.0;
        let estimate = eval(x1, x2, mid);
        if (t - estimate).abs() < EPSILON {
            break;
        }
        if estimate < t {
            start = mid;
        } else {
            end = mid;
        }
    }
    eval(y1, y2, mid)
}

/// Where a transition is relative to its `[0, 1]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStatus {
    /// At rest at 0.
    Dismissed,
    /// Last moved towards 1 (running, or stopped part-way).
    Forward,
    /// Last moved towards 0 (running, or stopped part-way).
    Reverse,
    /// At rest at 1.
    Completed,
}

/// A scalar in `[0, 1]` animated over time by the host frame clock.
///
/// Any frame source can drive an implementation: call `tick` once per frame
/// until it returns `false`.
pub trait TimedTransition {
    /// Replace duration and easing. Applies to the next `animate_to`.
    fn configure(&mut self, config: TransitionConfig);

    /// Start moving towards `target` from the current value. An in-flight run
    /// is redirected without a jump.
    fn animate_to(&mut self, target: f32, now: Instant);

    fn forward(&mut self, now: Instant) {
        self.animate_to(1.0, now);
    }

    fn reverse(&mut self, now: Instant) {
        self.animate_to(0.0, now);
    }

    /// Halt at the current value.
    fn stop(&mut self);

    /// Stop and jump to `value` without animating.
    fn set_value(&mut self, value: f32);

    /// Raw linear value in `[0, 1]`.
    fn value(&self) -> f32;

    /// Value after the easing curve.
    fn eased(&self) -> f32;

    fn status(&self) -> TransitionStatus;

    fn is_animating(&self) -> bool;

    /// Advance to `now`. Returns true while still animating.
    fn tick(&mut self, now: Instant) -> bool;

    /// Stop for good and drop listeners. Further calls are ignored.
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}

/// Frame listener, called with the new raw value.
pub type FrameListener = Box<dyn FnMut(f32) + Send>;

#[derive(Debug, Clone, Copy)]
struct Run {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

/// Default [`TimedTransition`] implementation.
pub struct Transition {
    config: TransitionConfig,
    value: f32,
    run: Option<Run>,
    heading_forward: bool,
    listeners: Vec<FrameListener>,
    disposed: bool,
}

impl Transition {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            value: 0.0,
            run: None,
            heading_forward: true,
            listeners: Vec::new(),
            disposed: false,
        }
    }

    /// Start at rest at `value`.
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value.clamp(0.0, 1.0);
        self
    }

    pub fn config(&self) -> TransitionConfig {
        self.config
    }

    /// Register a listener fired whenever the value changes.
    pub fn add_listener(&mut self, listener: impl FnMut(f32) + Send + 'static) {
        if self.disposed {
            log::warn!("listener added to a disposed transition");
            return;
        }
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self) {
        let value = self.value;
        for listener in &mut self.listeners {
            listener(value);
        }
    }
}

impl TimedTransition for Transition {
    fn configure(&mut self, config: TransitionConfig) {
        self.config = config;
    }

    fn animate_to(&mut self, target: f32, now: Instant) {
        if self.disposed {
            log::warn!("animate_to called on a disposed transition");
            return;
        }

        let target = target.clamp(0.0, 1.0);
        if target != self.value {
            self.heading_forward = target > self.value;
        }

        // Scale by remaining distance so a redirect keeps the same speed
        let duration = self.config.duration.mul_f32((target - self.value).abs());
        if duration.is_zero() {
            self.run = None;
            if self.value != target {
                self.value = target;
                self.notify();
            }
            return;
        }

        self.run = Some(Run {
            from: self.value,
            to: target,
            start: now,
            duration,
        });
    }

    fn stop(&mut self) {
        self.run = None;
    }

    fn set_value(&mut self, value: f32) {
        if self.disposed {
            return;
        }
        self.run = None;
        let value = value.clamp(0.0, 1.0);
        if value != self.value {
            self.value = value;
            self.notify();
        }
    }

    fn value(&self) -> f32 {
        self.value
    }

    fn eased(&self) -> f32 {
        self.config.easing.apply(self.value)
    }

    fn status(&self) -> TransitionStatus {
        if self.run.is_none() {
            if self.value <= 0.0 {
                return TransitionStatus::Dismissed;
            }
            if self.value >= 1.0 {
                return TransitionStatus::Completed;
            }
        }
        if self.heading_forward {
            TransitionStatus::Forward
        } else {
            TransitionStatus::Reverse
        }
    }

    fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    fn tick(&mut self, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        let Some(run) = self.run else {
            return false;
        };

        let elapsed = now.saturating_duration_since(run.start);
        let progress = (elapsed.as_secs_f32() / run.duration.as_secs_f32()).min(1.0);

        if progress >= 1.0 {
            self.value = run.to;
            self.run = None;
        } else {
            self.value = run.from + (run.to - run.from) * progress;
        }
        self.notify();

        self.run.is_some()
    }

    fn dispose(&mut self) {
        self.run = None;
        self.listeners.clear();
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("run", &self.run)
            .field("listeners", &self.listeners.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}
