use easeviz_core::clock::{SweepClock, DEFAULT_HOLD, DEFAULT_SPAN};

#[test]
fn default_clock_matches_demo_timing() {
    let clock = SweepClock::default();
    assert_eq!(clock.span, DEFAULT_SPAN);
    assert_eq!(clock.hold, DEFAULT_HOLD);
    assert_eq!(clock.period(), 3.5);
    assert_eq!(clock.elapsed(), 0.0);
    assert_eq!(clock.settled(), 0.0);
}

#[test]
fn settled_holds_then_sweeps_then_holds() {
    // Dyadic increments keep every accumulation exact in f32.
    let mut clock = SweepClock::default();

    clock.advance(0.125);
    assert_eq!(clock.settled(), 0.0, "inside the leading hold");

    clock.advance(0.125);
    assert_eq!(clock.elapsed(), 0.25);
    assert_eq!(clock.settled(), 0.0, "boundary of the animated window");

    clock.advance(1.5);
    assert_eq!(clock.settled(), 1.5, "mid-sweep");

    clock.advance(1.5);
    assert_eq!(clock.elapsed(), 3.25);
    assert_eq!(clock.settled(), 3.0, "start of the trailing hold");

    clock.advance(0.125);
    assert_eq!(clock.settled(), 3.0, "inside the trailing hold");
}

#[test]
fn clock_wraps_at_the_end_of_a_pass() {
    let mut clock = SweepClock::default();
    clock.advance(3.5);
    assert_eq!(clock.elapsed(), 0.0);

    // More than two full passes collapses to the in-pass remainder.
    clock.advance(7.25);
    assert_eq!(clock.elapsed(), 0.25);
    assert_eq!(clock.settled(), 0.0);
}

#[test]
fn progress_tracks_the_animated_window() {
    let mut clock = SweepClock::default();
    assert_eq!(clock.progress(), 0.0);

    clock.advance(1.75);
    assert_eq!(clock.settled(), 1.5);
    assert_eq!(clock.progress(), 0.5);

    clock.advance(1.5);
    assert_eq!(clock.progress(), 1.0);
}

#[test]
fn zero_hold_clock_sweeps_immediately() {
    let mut clock = SweepClock::new(2.0, 0.0);
    assert_eq!(clock.period(), 2.0);

    clock.advance(0.5);
    assert_eq!(clock.settled(), 0.5);

    clock.advance(1.5);
    assert_eq!(clock.elapsed(), 0.0, "wraps exactly at span");
    assert_eq!(clock.settled(), 0.0);
}
