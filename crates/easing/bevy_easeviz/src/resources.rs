use bevy::prelude::*;
use easeviz_core::{EasingFunction, SweepClock};

/// The two curve indices currently on display. Kept as raw wrapped indices so
/// the dispatcher's any-integer contract stays visible at the call sites.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSelection {
    pub left: i32,
    pub right: i32,
}

impl Default for CurveSelection {
    /// The demo opens comparing LinearNone (red) against BounceOut (blue).
    fn default() -> Self {
        Self { left: 0, right: 20 }
    }
}

impl CurveSelection {
    pub fn left_easing(&self) -> EasingFunction {
        EasingFunction::from_index(self.left)
    }

    pub fn right_easing(&self) -> EasingFunction {
        EasingFunction::from_index(self.right)
    }

    /// Step the red curve to the next catalog entry, wrapping at the end.
    pub fn cycle_left(&mut self) {
        self.left = (self.left + 1).rem_euclid(EasingFunction::COUNT as i32);
    }

    /// Step the blue curve to the next catalog entry, wrapping at the end.
    pub fn cycle_right(&mut self) {
        self.right = (self.right + 1).rem_euclid(EasingFunction::COUNT as i32);
    }
}

/// The sweep clock driving both animated boxes and the time cursor.
#[derive(Resource, Debug, Default)]
pub struct DemoClock(pub SweepClock);
