//! Timed value animation
//!
//! Screens drive animations explicitly: a host calls `tick(dt)` once per
//! frame and reads the current value back. Nothing here owns a clock, so
//! every animation is deterministic under test.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// Easing
// =============================================================================

/// Easing curve mapping linear progress in [0, 1] to eased progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant velocity
    Linear,
    /// Slow start, `cubic-bezier(0.42, 0, 1, 1)`
    Ease,
    /// Mirror of [`Easing::Ease`], slow end
    EaseOut,
    /// Slow start and end
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the curve to `t`, clamped to [0, 1]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Ease => ease(t),
            Easing::EaseOut => 1.0 - ease(1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    ease(t * 2.0) / 2.0
                } else {
                    1.0 - ease((1.0 - t) * 2.0) / 2.0
                }
            }
        }
    }
}

fn ease(t: f32) -> f32 {
    cubic_bezier(0.42, 0.0, 1.0, 1.0, t)
}

/// Evaluate a CSS-style cubic bezier `(0,0) (x1,y1) (x2,y2) (1,1)` at `x`
pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    if x == 0.0 || x == 1.0 {
        return x;
    }

    let coord = |t: f32, p1: f32, p2: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    };

    // x(t) is monotonic for x1, x2 in [0, 1], so bisection converges
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut t = x;
    for _ in 0..32 {
        let cx = coord(t, x1, x2);
        if (cx - x).abs() < 1e-6 {
            break;
        }
        if cx < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    coord(t, y1, y2)
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// =============================================================================
// Timing
// =============================================================================

/// Duration and curve of a timed animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    /// Total duration
    pub duration: Duration,
    /// Curve
    pub easing: Easing,
}

impl Timing {
    /// Timing of `ms` milliseconds with the default curve
    pub fn millis(ms: u64) -> Self {
        Self {
            duration: Duration::from_millis(ms),
            easing: Easing::default(),
        }
    }

    /// Set the easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

// =============================================================================
// Animated value
// =============================================================================

/// A scalar animated towards a target over time
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue {
    value: f32,
    from: f32,
    to: f32,
    elapsed: Duration,
    timing: Timing,
    running: bool,
}

impl AnimatedValue {
    /// Create a value at rest
    pub fn new(value: f32) -> Self {
        Self {
            value,
            from: value,
            to: value,
            elapsed: Duration::ZERO,
            timing: Timing::millis(0),
            running: false,
        }
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value the animation is heading to (the current value when at rest)
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Whether an animation is in progress
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Linear progress of the running animation in [0, 1] (1 at rest)
    pub fn progress(&self) -> f32 {
        if !self.running {
            return 1.0;
        }
        let total = self.timing.duration.as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        ((self.elapsed.as_secs_f64() / total) as f32).clamp(0.0, 1.0)
    }

    /// Jump to a value, cancelling any running animation
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.from = value;
        self.to = value;
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    /// Start animating from the current value to `target`
    ///
    /// A zero duration lands on the target immediately.
    pub fn animate_to(&mut self, target: f32, timing: Timing) {
        if timing.duration.is_zero() {
            self.set(target);
            return;
        }
        self.from = self.value;
        self.to = target;
        self.timing = timing;
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    /// Advance by `dt`; returns true when the animation finishes on this tick
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.timing.duration {
            self.value = self.to;
            self.from = self.to;
            self.running = false;
            return true;
        }
        let eased = self.timing.easing.apply(self.progress());
        self.value = lerp(self.from, self.to, eased);
        false
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::Ease, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert!(approx(easing.apply(1.0), 1.0), "{:?}", easing);
            assert_eq!(easing.apply(-1.0), 0.0);
        }
    }

    #[test]
    fn test_ease_shapes() {
        // slow start
        assert!(Easing::Ease.apply(0.25) < 0.25);
        // slow end
        assert!(Easing::EaseOut.apply(0.75) > 0.75);
        assert!(approx(Easing::EaseInOut.apply(0.5), 0.5));
        assert!(approx(Easing::Linear.apply(0.3), 0.3));
    }

    #[test]
    fn test_cubic_bezier_linear_control_points() {
        assert!(approx(cubic_bezier(0.25, 0.25, 0.75, 0.75, 0.4), 0.4));
    }

    #[test]
    fn test_animate_to() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(1.0, Timing::millis(200).with_easing(Easing::Linear));
        assert!(v.is_animating());
        assert_eq!(v.target(), 1.0);

        assert!(!v.tick(Duration::from_millis(100)));
        assert!(approx(v.value(), 0.5));
        assert!(approx(v.progress(), 0.5));

        assert!(v.tick(Duration::from_millis(150)));
        assert_eq!(v.value(), 1.0);
        assert!(!v.is_animating());
        assert!(!v.tick(Duration::from_millis(10)));
    }

    #[test]
    fn test_retarget_midway_starts_from_current() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(1.0, Timing::millis(100).with_easing(Easing::Linear));
        v.tick(Duration::from_millis(40));
        v.animate_to(0.0, Timing::millis(100).with_easing(Easing::Linear));
        v.tick(Duration::from_millis(50));
        assert!(approx(v.value(), 0.2));
    }

    #[test]
    fn test_zero_duration_and_set() {
        let mut v = AnimatedValue::default();
        v.animate_to(5.0, Timing::millis(0));
        assert_eq!(v.value(), 5.0);
        assert!(!v.is_animating());

        v.animate_to(10.0, Timing::millis(100));
        v.set(2.0);
        assert_eq!(v.value(), 2.0);
        assert!(!v.is_animating());
    }
}
