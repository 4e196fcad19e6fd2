#![forbid(unsafe_code)]

//! Animation timing shared by the host and the layout pass.

use std::time::{Duration, Instant};

/// Entrance window: a new toast slides/fades in over this long.
pub const ENTRANCE: Duration = Duration::from_millis(180);

/// Exit grace: a leaving toast stays on screen this long before it is
/// purged from the host.
pub const EXIT_GRACE: Duration = Duration::from_millis(220);

/// Reflow window: survivors slide into freed rows over this long.
pub const REFLOW: Duration = Duration::from_millis(180);

/// Easing curves used by toast motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Decelerating cubic ease-out.
    #[default]
    EaseOut,
    /// Accelerating cubic ease-in.
    EaseIn,
}

impl Easing {
    /// Apply the curve to a progress value in `0.0..=1.0`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseIn => t * t * t,
        }
    }
}

/// Progress of a window that started at `started`, in `0.0..=1.0`.
///
/// A zero-length window is always complete.
pub fn progress(started: Instant, now: Instant, window: Duration) -> f32 {
    if window.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f32() / window.as_secs_f32()).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseIn] {
            assert!((easing.apply(0.0)).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn progress_zero_window_is_complete() {
        let now = Instant::now();
        assert_eq!(progress(now, now, Duration::ZERO), 1.0);
    }

    #[test]
    fn progress_clamps_at_one() {
        let start = Instant::now();
        let later = start + Duration::from_secs(10);
        assert_eq!(progress(start, later, Duration::from_millis(100)), 1.0);
    }

    #[test]
    fn progress_is_zero_before_start() {
        let start = Instant::now();
        let earlier = start - Duration::from_secs(1);
        assert_eq!(progress(start, earlier, Duration::from_millis(100)), 0.0);
    }
}
