// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: translation accumulation, bounce, and release velocity.
//!
//! ## Samples
//!
//! A [`DragSample`] carries the gesture's cumulative vertical distance in
//! screen space (down is positive) and a monotonic timestamp. The sheet's
//! translation grows upwards, so a run that started at translation `t0` sits at
//! `t0 - sample.translation`.
//!
//! ## Velocity
//!
//! Velocity is reported in points per millisecond with the sign flipped to the
//! sheet's frame: positive while the sheet grows. It is measured from the
//! start of the run to the latest sample. Without a start time, or with no
//! elapsed time, it is `0`.

use core::time::Duration;

use understory_detent::Limits;

/// One move sample of an active drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSample {
    /// Monotonic timestamp of the sample.
    pub time: Duration,
    /// Cumulative vertical distance since the gesture began; down is positive.
    pub translation: f64,
}

impl DragSample {
    /// Create a sample.
    pub const fn new(time: Duration, translation: f64) -> Self {
        Self { time, translation }
    }
}

/// Result of feeding a sample to the [`DragTracker`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragUpdate {
    /// Translation implied by the finger, clamped at the largest detent.
    pub candidate: f64,
    /// Translation to render; damped below the smallest detent.
    pub displayed: f64,
    /// Velocity estimate for this sample.
    pub velocity: f64,
    /// True when `displayed` is a damped overshoot.
    pub bouncing: bool,
}

#[derive(Copy, Clone, Debug)]
struct Session {
    start_time: Option<Duration>,
    start_translation: f64,
    velocity: f64,
    bouncing: bool,
}

/// Accumulates a continuous drag into a sheet translation.
#[derive(Clone, Debug)]
pub struct DragTracker {
    damping: f64,
    session: Option<Session>,
}

impl DragTracker {
    /// Create an idle tracker with the given bounce damping.
    pub const fn new(damping: f64) -> Self {
        Self {
            damping,
            session: None,
        }
    }

    /// True while a run is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// True if the last update was a damped overshoot.
    pub fn is_bouncing(&self) -> bool {
        self.session.is_some_and(|s| s.bouncing)
    }

    /// Velocity of the most recent sample, `0` when idle.
    pub fn last_velocity(&self) -> f64 {
        self.session.map_or(0.0, |s| s.velocity)
    }

    /// Start a run at `time` from the sheet's current `translation`.
    ///
    /// Any previous run and its bounce state are discarded.
    pub fn begin(&mut self, time: Duration, translation: f64) {
        self.session = Some(Session {
            start_time: Some(time),
            start_translation: translation,
            velocity: 0.0,
            bouncing: false,
        });
    }

    /// Feed a move sample.
    ///
    /// If no run is active, one is started from `translation` and the sample's
    /// time becomes the start time (its velocity is then `0`).
    pub fn update(&mut self, sample: DragSample, translation: f64, limits: Limits) -> DragUpdate {
        let session = self.session.get_or_insert(Session {
            start_time: None,
            start_translation: translation,
            velocity: 0.0,
            bouncing: false,
        });

        let velocity = session
            .start_time
            .map_or(0.0, |start| velocity_between(start, sample));
        if session.start_time.is_none() {
            session.start_time = Some(sample.time);
        }

        let candidate = (session.start_translation - sample.translation).min(limits.max);
        let bouncing = candidate < limits.min;
        let displayed = if bouncing {
            bounce(candidate, limits.min, self.damping)
        } else {
            candidate
        };

        session.velocity = velocity;
        session.bouncing = bouncing;

        DragUpdate {
            candidate,
            displayed,
            velocity,
            bouncing,
        }
    }

    /// Velocity `sample` would have relative to the current run, `0` when idle.
    pub fn velocity(&self, sample: DragSample) -> f64 {
        self.session
            .and_then(|s| s.start_time)
            .map_or(0.0, |start| velocity_between(start, sample))
    }

    /// Finish the run, returning the release velocity.
    ///
    /// With a final sample the velocity is measured against it; otherwise the
    /// last move's velocity is used.
    pub fn end(&mut self, sample: Option<DragSample>) -> f64 {
        let velocity = match sample {
            Some(sample) => self.velocity(sample),
            None => self.last_velocity(),
        };
        self.session = None;
        velocity
    }

    /// Drop the run without producing a velocity.
    pub fn reset(&mut self) {
        self.session = None;
    }
}

/// Damped overshoot for a candidate below `min`.
#[inline]
pub fn bounce(candidate: f64, min: f64, damping: f64) -> f64 {
    min - (min - candidate) * damping
}

/// Velocity from `start` to `sample` in points per millisecond, positive when
/// the sheet grows.
pub fn velocity_between(start: Duration, sample: DragSample) -> f64 {
    let elapsed = sample.time.saturating_sub(start).as_secs_f64();
    if elapsed <= 0.0 {
        return 0.0;
    }
    -(sample.translation / elapsed) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: Limits = Limits {
        min: 100.0,
        max: 600.0,
    };

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn close(a: f64, b: f64) -> bool {
        let d = a - b;
        d < 1e-9 && d > -1e-9
    }

    #[test]
    fn upward_drag_grows_translation() {
        let mut t = DragTracker::new(0.4);
        t.begin(ms(0), 300.0);
        let u = t.update(DragSample::new(ms(100), -50.0), 300.0, LIMITS);
        assert_eq!(u.candidate, 350.0);
        assert_eq!(u.displayed, 350.0);
        assert!(!u.bouncing);
        // 50pt up in 100ms: 0.5 pt/ms, positive because the sheet grows.
        assert!(close(u.velocity, 0.5));
    }

    #[test]
    fn translation_is_relative_to_run_start() {
        let mut t = DragTracker::new(0.4);
        t.begin(ms(0), 300.0);
        let _ = t.update(DragSample::new(ms(10), -20.0), 300.0, LIMITS);
        // The caller's live translation moved, but the run keeps its origin.
        let u = t.update(DragSample::new(ms(20), -40.0), 320.0, LIMITS);
        assert_eq!(u.candidate, 340.0);
    }

    #[test]
    fn clamps_at_max() {
        let mut t = DragTracker::new(0.4);
        t.begin(ms(0), 550.0);
        let u = t.update(DragSample::new(ms(16), -200.0), 550.0, LIMITS);
        assert_eq!(u.candidate, 600.0);
        assert_eq!(u.displayed, 600.0);
    }

    #[test]
    fn bounces_below_min() {
        let mut t = DragTracker::new(0.4);
        t.begin(ms(0), 100.0);
        let u = t.update(DragSample::new(ms(50), 60.0), 100.0, LIMITS);
        assert_eq!(u.candidate, 40.0);
        assert!(close(u.displayed, 76.0));
        assert!(u.bouncing);
        assert!(t.is_bouncing());
        assert_eq!(bounce(40.0, 100.0, 0.4), 76.0);
    }

    #[test]
    fn begin_clears_bounce_state() {
        let mut t = DragTracker::new(0.4);
        t.begin(ms(0), 100.0);
        let _ = t.update(DragSample::new(ms(50), 60.0), 100.0, LIMITS);
        t.begin(ms(100), 100.0);
        assert!(!t.is_bouncing());
    }

    #[test]
    fn implicit_start_reports_zero_velocity_first() {
        let mut t = DragTracker::new(0.4);
        assert!(!t.is_active());
        let first = t.update(DragSample::new(ms(1000), -10.0), 200.0, LIMITS);
        assert_eq!(first.velocity, 0.0);
        assert!(t.is_active());
        let second = t.update(DragSample::new(ms(1100), -110.0), 200.0, LIMITS);
        // 110pt over 100ms.
        assert!(close(second.velocity, 1.1));
        assert_eq!(second.candidate, 310.0);
    }

    #[test]
    fn downward_velocity_is_negative() {
        let mut t = DragTracker::new(0.4);
        t.begin(ms(0), 500.0);
        let v = t.end(Some(DragSample::new(ms(50), 150.0)));
        assert!(close(v, -3.0));
        assert!(!t.is_active());
    }

    #[test]
    fn idle_or_instant_velocity_is_zero() {
        let mut t = DragTracker::new(0.4);
        assert_eq!(t.velocity(DragSample::new(ms(5), 100.0)), 0.0);
        assert_eq!(t.end(None), 0.0);
        t.begin(ms(5), 0.0);
        assert_eq!(t.velocity(DragSample::new(ms(5), 100.0)), 0.0);
        // Samples older than the start clamp to zero elapsed time.
        assert_eq!(t.velocity(DragSample::new(ms(1), 100.0)), 0.0);
    }

    #[test]
    fn end_without_sample_uses_last_velocity() {
        let mut t = DragTracker::new(0.4);
        t.begin(ms(0), 300.0);
        let _ = t.update(DragSample::new(ms(100), -200.0), 300.0, LIMITS);
        assert!(close(t.end(None), 2.0));
        assert_eq!(t.last_velocity(), 0.0);
    }
}
