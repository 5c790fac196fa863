//! Time-bounded interpolation values.
//!
//! A [`Tween`] is plain data sampled against a clock reading, so an
//! animation is a pure function of time and can be replayed in tests.

use bevy::prelude::*;

/// Easing curves mapping linear progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Decelerating; the curve used for focus transitions.
    #[default]
    QuadraticOut,
    CubicInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticOut => t * (2.0 - t),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Interpolation of a point from `start` to `end` over `duration` seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub start: Vec3,
    pub end: Vec3,
    /// Clock reading at which the tween began.
    pub start_time: f64,
    /// Length in seconds; zero finishes immediately.
    pub duration: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(start: Vec3, end: Vec3, start_time: f64, duration: f64, easing: Easing) -> Self {
        Self {
            start,
            end,
            start_time,
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Linear progress in `[0, 1]` at clock reading `now`.
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0) as f32
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Value at `now`. Exactly `end` once finished.
    pub fn sample(&self, now: f64) -> Vec3 {
        if self.is_finished(now) {
            return self.end;
        }
        self.start.lerp(self.end, self.easing.apply(self.progress(now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::QuadraticOut, Easing::CubicInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_quadratic_out_front_loaded() {
        assert_relative_eq!(Easing::QuadraticOut.apply(0.5), 0.75);
        assert_relative_eq!(Easing::CubicInOut.apply(0.5), 0.5);
    }

    #[test]
    fn test_sample_lifecycle() {
        let tween = Tween::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 2.0, 1.0, Easing::Linear);
        assert_eq!(tween.sample(1.0), Vec3::ZERO);
        assert_relative_eq!(tween.sample(2.5).x, 5.0);
        assert!(!tween.is_finished(2.999));
        assert!(tween.is_finished(3.0));
        assert_eq!(tween.sample(50.0), tween.end);
    }

    #[test]
    fn test_zero_duration_is_finished() {
        let tween = Tween::new(Vec3::ONE, Vec3::X, 0.0, 0.0, Easing::QuadraticOut);
        assert!(tween.is_finished(0.0));
        assert_eq!(tween.sample(0.0), Vec3::X);
    }
}
