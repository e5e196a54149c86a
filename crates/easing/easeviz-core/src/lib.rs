//! Easeviz easing core (engine-agnostic)
//!
//! This crate holds the pure parts of the Easeviz demo: the easing-function
//! catalog (25 classic Penner-style variants), the wrapped-index dispatcher
//! that selects among them, and the sweep clock driving the demo timeline.
//! No windowing or rendering here; adapters own the frame loop.

pub mod clock;
pub mod ease;

// Re-exports for consumers (adapters)
pub use clock::SweepClock;
pub use ease::functions;
pub use ease::{dispatch, EasingFunction, ParseEasingError};
