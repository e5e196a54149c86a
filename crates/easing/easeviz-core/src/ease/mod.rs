//! Easing catalog and wrapped-index dispatcher.
//!
//! The catalog is a closed set of 25 named variants in a fixed order; the
//! dispatcher reduces any integer index modulo the catalog size and invokes
//! the selected function. Selection and evaluation are pure and total.

pub mod functions;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the 25 easing variants, in catalog order.
///
/// The discriminants are the catalog indices: `LinearNone` is 0 and
/// `ElasticInOut` is 24. The four Linear variants compute the same line but
/// stay distinct entries so indices and display names line up with the
/// classic catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EasingFunction {
    LinearNone,
    LinearIn,
    LinearOut,
    LinearInOut,
    SineIn,
    SineOut,
    SineInOut,
    CircIn,
    CircOut,
    CircInOut,
    QuadIn,
    QuadOut,
    QuadInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    BackIn,
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
}

impl EasingFunction {
    /// Number of catalog entries.
    pub const COUNT: usize = 25;

    /// Every variant, in catalog order (index-aligned with [`Self::from_index`]).
    pub const ALL: [EasingFunction; Self::COUNT] = [
        Self::LinearNone,
        Self::LinearIn,
        Self::LinearOut,
        Self::LinearInOut,
        Self::SineIn,
        Self::SineOut,
        Self::SineInOut,
        Self::CircIn,
        Self::CircOut,
        Self::CircInOut,
        Self::QuadIn,
        Self::QuadOut,
        Self::QuadInOut,
        Self::ExpoIn,
        Self::ExpoOut,
        Self::ExpoInOut,
        Self::BackIn,
        Self::BackOut,
        Self::BackInOut,
        Self::BounceIn,
        Self::BounceOut,
        Self::BounceInOut,
        Self::ElasticIn,
        Self::ElasticOut,
        Self::ElasticInOut,
    ];

    /// Select a variant by index, wrapping modulo the catalog size.
    ///
    /// Total for every `i32`, negatives included: `from_index(-1)` is
    /// `ElasticInOut`, `from_index(25)` is `LinearNone` again.
    #[inline]
    pub fn from_index(index: i32) -> EasingFunction {
        Self::ALL[index.rem_euclid(Self::COUNT as i32) as usize]
    }

    /// Catalog index of this variant (0..25).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The variant after this one, wrapping at the end of the catalog.
    #[inline]
    pub fn next(self) -> EasingFunction {
        Self::from_index(self as i32 + 1)
    }

    /// Display name, matching the classic catalog spelling
    /// (`"EaseLinearNone"` .. `"EaseElasticInOut"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::LinearNone => "EaseLinearNone",
            Self::LinearIn => "EaseLinearIn",
            Self::LinearOut => "EaseLinearOut",
            Self::LinearInOut => "EaseLinearInOut",
            Self::SineIn => "EaseSineIn",
            Self::SineOut => "EaseSineOut",
            Self::SineInOut => "EaseSineInOut",
            Self::CircIn => "EaseCircIn",
            Self::CircOut => "EaseCircOut",
            Self::CircInOut => "EaseCircInOut",
            Self::QuadIn => "EaseQuadIn",
            Self::QuadOut => "EaseQuadOut",
            Self::QuadInOut => "EaseQuadInOut",
            Self::ExpoIn => "EaseExpoIn",
            Self::ExpoOut => "EaseExpoOut",
            Self::ExpoInOut => "EaseExpoInOut",
            Self::BackIn => "EaseBackIn",
            Self::BackOut => "EaseBackOut",
            Self::BackInOut => "EaseBackInOut",
            Self::BounceIn => "EaseBounceIn",
            Self::BounceOut => "EaseBounceOut",
            Self::BounceInOut => "EaseBounceInOut",
            Self::ElasticIn => "EaseElasticIn",
            Self::ElasticOut => "EaseElasticOut",
            Self::ElasticInOut => "EaseElasticInOut",
        }
    }

    /// Evaluate this variant at `time` over `duration`, easing from `start`
    /// by `delta`. Pure; see [`functions`] for per-family semantics.
    #[inline]
    pub fn apply(self, time: f32, start: f32, delta: f32, duration: f32) -> f32 {
        use functions::*;
        match self {
            Self::LinearNone => linear_none(time, start, delta, duration),
            Self::LinearIn => linear_in(time, start, delta, duration),
            Self::LinearOut => linear_out(time, start, delta, duration),
            Self::LinearInOut => linear_in_out(time, start, delta, duration),
            Self::SineIn => sine_in(time, start, delta, duration),
            Self::SineOut => sine_out(time, start, delta, duration),
            Self::SineInOut => sine_in_out(time, start, delta, duration),
            Self::CircIn => circ_in(time, start, delta, duration),
            Self::CircOut => circ_out(time, start, delta, duration),
            Self::CircInOut => circ_in_out(time, start, delta, duration),
            Self::QuadIn => quad_in(time, start, delta, duration),
            Self::QuadOut => quad_out(time, start, delta, duration),
            Self::QuadInOut => quad_in_out(time, start, delta, duration),
            Self::ExpoIn => expo_in(time, start, delta, duration),
            Self::ExpoOut => expo_out(time, start, delta, duration),
            Self::ExpoInOut => expo_in_out(time, start, delta, duration),
            Self::BackIn => back_in(time, start, delta, duration),
            Self::BackOut => back_out(time, start, delta, duration),
            Self::BackInOut => back_in_out(time, start, delta, duration),
            Self::BounceIn => bounce_in(time, start, delta, duration),
            Self::BounceOut => bounce_out(time, start, delta, duration),
            Self::BounceInOut => bounce_in_out(time, start, delta, duration),
            Self::ElasticIn => elastic_in(time, start, delta, duration),
            Self::ElasticOut => elastic_out(time, start, delta, duration),
            Self::ElasticInOut => elastic_in_out(time, start, delta, duration),
        }
    }
}

impl fmt::Display for EasingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown easing-function name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown easing function `{0}`")]
pub struct ParseEasingError(pub String);

impl FromStr for EasingFunction {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EasingFunction::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| ParseEasingError(s.to_string()))
    }
}

/// Select by wrapped index and evaluate in one call.
///
/// Equivalent to `EasingFunction::from_index(index).apply(..)`; never fails
/// and has no side effects.
#[inline]
pub fn dispatch(index: i32, time: f32, start: f32, delta: f32, duration: f32) -> f32 {
    EasingFunction::from_index(index).apply(time, start, delta, duration)
}
