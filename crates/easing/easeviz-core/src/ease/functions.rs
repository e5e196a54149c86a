//! The 25 easing functions of the catalog (classic Penner equations, f32).
//!
//! Shared signature: `f(time, start, delta, duration) -> f32`, computing
//! `start + delta * shape(time / duration)` where `shape(0) = 0` and
//! `shape(1) = 1`.
//!
//! Conventions:
//! - Families that would be numerically unstable at the endpoints (Expo,
//!   Elastic) special-case `time == 0` and `time == duration` to the exact
//!   start/end values, using float equality on purpose.
//! - No clamping and no validation: out-of-range `time` extrapolates, and
//!   NaN/inf/zero `duration` propagate through ordinary IEEE arithmetic.

use std::f32::consts::PI;

/// Overshoot constant for the Back family (Penner's default, ~10% overshoot).
const BACK_OVERSHOOT: f32 = 1.70158;
/// Back-InOut applies extra overshoot so each half still peaks at ~10%.
const BACK_INOUT_SCALE: f32 = 1.525;
/// Leading coefficient of every Bounce-Out polynomial segment.
const BOUNCE_COEFF: f32 = 7.5625;

// ---------------------------------------------------------------------------
// Linear
//
// All four variants share the same line; the catalog keeps them as distinct
// entries to stay index-compatible with the classic naming scheme.
// ---------------------------------------------------------------------------

/// Linear easing, no acceleration.
#[inline]
pub fn linear_none(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    delta * time / duration + start
}

/// Same line as [`linear_none`]; distinct catalog entry.
#[inline]
pub fn linear_in(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    delta * time / duration + start
}

/// Same line as [`linear_none`]; distinct catalog entry.
#[inline]
pub fn linear_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    delta * time / duration + start
}

/// Same line as [`linear_none`]; distinct catalog entry.
#[inline]
pub fn linear_in_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    delta * time / duration + start
}

// ---------------------------------------------------------------------------
// Sine
// ---------------------------------------------------------------------------

/// Sinusoidal ease-in: `shape(t) = 1 - cos(t * pi/2)`.
#[inline]
pub fn sine_in(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    -delta * (time / duration * (PI / 2.0)).cos() + delta + start
}

/// Sinusoidal ease-out: `shape(t) = sin(t * pi/2)`.
#[inline]
pub fn sine_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    delta * (time / duration * (PI / 2.0)).sin() + start
}

/// Sinusoidal ease-in-out: `shape(t) = -(cos(pi * t) - 1) / 2`.
#[inline]
pub fn sine_in_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    -delta / 2.0 * ((PI * time / duration).cos() - 1.0) + start
}

// ---------------------------------------------------------------------------
// Circular
// ---------------------------------------------------------------------------

/// Circular ease-in: `shape(t) = 1 - sqrt(1 - t^2)`.
#[inline]
pub fn circ_in(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    let t = time / duration;
    -delta * ((1.0 - t * t).sqrt() - 1.0) + start
}

/// Circular ease-out: `shape(t) = sqrt(1 - (t - 1)^2)`.
#[inline]
pub fn circ_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    let t = time / duration - 1.0;
    delta * (1.0 - t * t).sqrt() + start
}

/// Circular ease-in-out: quarter-circle halves joined at the midpoint.
#[inline]
pub fn circ_in_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    let mut t = time / (duration / 2.0);
    if t < 1.0 {
        return -delta / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + start;
    }
    t -= 2.0;
    delta / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + start
}

// ---------------------------------------------------------------------------
// Quadratic
// ---------------------------------------------------------------------------

/// Quadratic ease-in: `shape(t) = t^2`.
#[inline]
pub fn quad_in(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    let t = time / duration;
    delta * t * t + start
}

/// Quadratic ease-out: `shape(t) = -t * (t - 2)`.
#[inline]
pub fn quad_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    let t = time / duration;
    -delta * t * (t - 2.0) + start
}

/// Quadratic ease-in-out: `2t^2` below the midpoint, `-2t^2 + 4t - 1` above.
#[inline]
pub fn quad_in_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    let mut t = time / (duration / 2.0);
    if t < 1.0 {
        return delta / 2.0 * t * t + start;
    }
    t -= 1.0;
    -delta / 2.0 * (t * (t - 2.0) - 1.0) + start
}

// ---------------------------------------------------------------------------
// Exponential
//
// The pure formula never reaches the endpoints (2^x has no zero), so both
// ends are special-cased to the exact start/end values.
// ---------------------------------------------------------------------------

/// Exponential ease-in: `shape(t) = 2^(10 * (t - 1))`, with `shape(0) = 0` forced.
#[inline]
pub fn expo_in(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    if time == 0.0 {
        start
    } else {
        delta * 2f32.powf(10.0 * (time / duration - 1.0)) + start
    }
}

/// Exponential ease-out: `shape(t) = 1 - 2^(-10t)`, with `shape(1) = 1` forced.
#[inline]
pub fn expo_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    if time == duration {
        start + delta
    } else {
        delta * (1.0 - 2f32.powf(-10.0 * time / duration)) + start
    }
}

/// Exponential ease-in-out: exponential halves, both endpoints forced exact.
#[inline]
pub fn expo_in_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    if time == 0.0 {
        return start;
    }
    if time == duration {
        return start + delta;
    }
    let mut t = time / (duration / 2.0);
    if t < 1.0 {
        return delta / 2.0 * 2f32.powf(10.0 * (t - 1.0)) + start;
    }
    t -= 1.0;
    delta / 2.0 * (2.0 - 2f32.powf(-10.0 * t)) + start
}

// ---------------------------------------------------------------------------
// Back
// ---------------------------------------------------------------------------

/// Back ease-in: `shape(t) = t^2 * ((s + 1) * t - s)`, dipping below the
/// start value before accelerating.
#[inline]
pub fn back_in(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    let t = time / duration;
    let s = BACK_OVERSHOOT;
    delta * t * t * ((s + 1.0) * t - s) + start
}

/// Back ease-out: mirror of [`back_in`], overshooting past the end value.
#[inline]
pub fn back_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    let t = time / duration - 1.0;
    let s = BACK_OVERSHOOT;
    delta * (t * t * ((s + 1.0) * t + s) + 1.0) + start
}

/// Back ease-in-out: both halves with the enlarged overshoot constant.
#[inline]
pub fn back_in_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    let s = BACK_OVERSHOOT * BACK_INOUT_SCALE;
    let mut t = time / (duration / 2.0);
    if t < 1.0 {
        return delta / 2.0 * (t * t * ((s + 1.0) * t - s)) + start;
    }
    t -= 2.0;
    delta / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + start
}

// ---------------------------------------------------------------------------
// Bounce
// ---------------------------------------------------------------------------

/// Bounce ease-out: four parabolic segments of decaying height, split at
/// t = 1/2.75, 2/2.75 and 2.5/2.75.
#[inline]
pub fn bounce_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    let mut t = time / duration;
    if t < 1.0 / 2.75 {
        delta * (BOUNCE_COEFF * t * t) + start
    } else if t < 2.0 / 2.75 {
        t -= 1.5 / 2.75;
        delta * (BOUNCE_COEFF * t * t + 0.75) + start
    } else if t < 2.5 / 2.75 {
        t -= 2.25 / 2.75;
        delta * (BOUNCE_COEFF * t * t + 0.9375) + start
    } else {
        t -= 2.625 / 2.75;
        delta * (BOUNCE_COEFF * t * t + 0.984375) + start
    }
}

/// Bounce ease-in: [`bounce_out`] run on the reversed clock, then inverted.
#[inline]
pub fn bounce_in(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    delta - bounce_out(duration - time, 0.0, delta, duration) + start
}

/// Bounce ease-in-out: in-half compressed into the first half, out-half into
/// the second.
#[inline]
pub fn bounce_in_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    if time < duration / 2.0 {
        bounce_in(time * 2.0, 0.0, delta, duration) * 0.5 + start
    } else {
        bounce_out(time * 2.0 - duration, 0.0, delta, duration) * 0.5 + delta * 0.5 + start
    }
}

// ---------------------------------------------------------------------------
// Elastic
//
// Exponentially decaying sine with period `duration * 0.3` (0.45 for InOut)
// and amplitude equal to `delta`. Both endpoints are special-cased exact;
// note the equality test runs on the already-divided `t`, as in the classic
// catalog.
// ---------------------------------------------------------------------------

/// Elastic ease-in.
#[inline]
pub fn elastic_in(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    if time == 0.0 {
        return start;
    }
    let mut t = time / duration;
    if t == 1.0 {
        return start + delta;
    }
    let p = duration * 0.3;
    let a = delta;
    let s = p / 4.0;
    t -= 1.0;
    -(a * 2f32.powf(10.0 * t) * ((t * duration - s) * (2.0 * PI) / p).sin()) + start
}

/// Elastic ease-out.
#[inline]
pub fn elastic_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    if time == 0.0 {
        return start;
    }
    let t = time / duration;
    if t == 1.0 {
        return start + delta;
    }
    let p = duration * 0.3;
    let a = delta;
    let s = p / 4.0;
    a * 2f32.powf(-10.0 * t) * ((t * duration - s) * (2.0 * PI) / p).sin() + delta + start
}

/// Elastic ease-in-out.
#[inline]
pub fn elastic_in_out(time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    if time == 0.0 {
        return start;
    }
    let mut t = time / (duration / 2.0);
    if t == 2.0 {
        return start + delta;
    }
    let p = duration * (0.3 * 1.5);
    let a = delta;
    let s = p / 4.0;
    if t < 1.0 {
        t -= 1.0;
        return -0.5 * (a * 2f32.powf(10.0 * t) * ((t * duration - s) * (2.0 * PI) / p).sin())
            + start;
    }
    t -= 1.0;
    a * 2f32.powf(-10.0 * t) * ((t * duration - s) * (2.0 * PI) / p).sin() * 0.5 + delta + start
}
