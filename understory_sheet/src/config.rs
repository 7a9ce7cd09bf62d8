// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet configuration and its validation errors.

use core::time::Duration;

use understory_detent::DEFAULT_FLICK_VELOCITY;

/// Default damping applied when dragging below the smallest detent.
pub const DEFAULT_BOUNCE_DAMPING: f64 = 0.4;

/// Default duration of a settle transition.
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(230);

/// Default delay after which a settle is assumed finished when no completion
/// signal is available.
pub const DEFAULT_UNMOUNT_DELAY: Duration = Duration::from_millis(500);

/// Tunables for a [`Sheet`](crate::Sheet).
///
/// Construct with [`SheetConfig::default`] and adjust with the `with_*`
/// methods. [`Sheet::new`](crate::Sheet::new) validates the result.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetConfig {
    /// Release speed (points per millisecond) above which a drag is a flick.
    pub flick_velocity: f64,
    /// Fraction of the overshoot shown when dragging below the smallest detent.
    pub bounce_damping: f64,
    /// Duration the renderer should use for settle transitions.
    pub settle_duration: Duration,
    /// Fixed delay used to infer that a settle finished.
    ///
    /// Only consulted when no completion signal will arrive: either the host
    /// has no completion hooks, or no animation ran. This is a best-effort
    /// stand-in and can race with animation curves slower than the delay.
    pub unmount_delay: Duration,
    /// Hide the main content while the sheet rests at
    /// [`Detent::FullScreen`](understory_detent::Detent::FullScreen).
    pub hide_main_content_in_full_screen: bool,
    /// Whether the host reports transition completion through
    /// [`Sheet::transition_finished`](crate::Sheet::transition_finished).
    pub completion_hooks: bool,
    /// Dim the content behind the sheet in proportion to its height.
    pub scrim: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            flick_velocity: DEFAULT_FLICK_VELOCITY,
            bounce_damping: DEFAULT_BOUNCE_DAMPING,
            settle_duration: DEFAULT_SETTLE_DURATION,
            unmount_delay: DEFAULT_UNMOUNT_DELAY,
            hide_main_content_in_full_screen: false,
            completion_hooks: true,
            scrim: false,
        }
    }
}

impl SheetConfig {
    /// Set the flick threshold.
    #[must_use]
    pub fn with_flick_velocity(mut self, v: f64) -> Self {
        self.flick_velocity = v;
        self
    }

    /// Set the bounce damping factor.
    #[must_use]
    pub fn with_bounce_damping(mut self, damping: f64) -> Self {
        self.bounce_damping = damping;
        self
    }

    /// Set the settle transition duration.
    #[must_use]
    pub fn with_settle_duration(mut self, d: Duration) -> Self {
        self.settle_duration = d;
        self
    }

    /// Set the fallback unmount delay.
    #[must_use]
    pub fn with_unmount_delay(mut self, d: Duration) -> Self {
        self.unmount_delay = d;
        self
    }

    /// Hide main content at the full-screen detent.
    #[must_use]
    pub fn with_hide_main_content_in_full_screen(mut self, hide: bool) -> Self {
        self.hide_main_content_in_full_screen = hide;
        self
    }

    /// Declare whether transition completion signals are available.
    #[must_use]
    pub fn with_completion_hooks(mut self, available: bool) -> Self {
        self.completion_hooks = available;
        self
    }

    /// Enable or disable the background scrim.
    #[must_use]
    pub fn with_scrim(mut self, scrim: bool) -> Self {
        self.scrim = scrim;
        self
    }

    /// Check that numeric tunables are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.flick_velocity.is_finite() && self.flick_velocity > 0.0) {
            return Err(ConfigError::FlickVelocity(self.flick_velocity));
        }
        if !(0.0..=1.0).contains(&self.bounce_damping) {
            return Err(ConfigError::BounceDamping(self.bounce_damping));
        }
        Ok(())
    }
}

/// Rejected sheet configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The flick threshold is not a finite positive number.
    #[error("flick velocity must be finite and positive, got {0}")]
    FlickVelocity(f64),
    /// The bounce damping lies outside `[0, 1]`.
    #[error("bounce damping must lie within [0, 1], got {0}")]
    BounceDamping(f64),
    /// The detent set is empty.
    #[error("a sheet needs at least one detent")]
    NoDetents,
}
