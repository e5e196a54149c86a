//! Sweep clock for the demo timeline.
//!
//! The demo animates each curve over a fixed span, holding still for a short
//! moment at both ends before wrapping around. This type owns that state
//! explicitly so the shell never needs process-wide time globals.

use serde::{Deserialize, Serialize};

/// Default animated span in seconds.
pub const DEFAULT_SPAN: f32 = 3.0;
/// Default hold at each end of the sweep, in seconds.
pub const DEFAULT_HOLD: f32 = 0.25;

/// A clock that sweeps `0..span` repeatedly, sitting still for `hold`
/// seconds at each end of every pass.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SweepClock {
    /// Raw elapsed time within the current pass, in `0..period()`.
    elapsed: f32,
    /// Animated portion of the pass, in seconds.
    pub span: f32,
    /// Still time at each end of the pass, in seconds.
    pub hold: f32,
}

impl Default for SweepClock {
    fn default() -> Self {
        Self::new(DEFAULT_SPAN, DEFAULT_HOLD)
    }
}

impl SweepClock {
    pub fn new(span: f32, hold: f32) -> Self {
        Self {
            elapsed: 0.0,
            span,
            hold,
        }
    }

    /// Full pass length: the animated span plus a hold at each end.
    #[inline]
    pub fn period(&self) -> f32 {
        self.span + 2.0 * self.hold
    }

    /// Advance by `dt` seconds, wrapping at the end of the pass.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).rem_euclid(self.period());
    }

    /// Raw elapsed time within the current pass.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Time value to feed the easing functions: holds at `0.0` during the
    /// leading hold, runs `0..span` through the animated window, and holds
    /// at `span` during the trailing hold.
    pub fn settled(&self) -> f32 {
        if self.elapsed < self.hold {
            0.0
        } else if self.elapsed < self.hold + self.span {
            self.elapsed - self.hold
        } else {
            self.span
        }
    }

    /// Normalized sweep progress in `[0, 1]`, for placing a time cursor.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.settled() / self.span
    }
}
