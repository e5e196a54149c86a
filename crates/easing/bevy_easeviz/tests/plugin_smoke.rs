use bevy::prelude::*;
use bevy_easeviz::{
    systems::sample_curve, CurveSelection, DemoClock, EaseVizPlugin, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use easeviz_core::EasingFunction;

#[test]
fn plugin_inserts_demo_resources() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(EaseVizPlugin);

    let selection = app
        .world()
        .get_resource::<CurveSelection>()
        .expect("selection resource");
    // The demo opens on LinearNone vs BounceOut, like the classic catalog demo.
    assert_eq!(selection.left, 0);
    assert_eq!(selection.right, 20);
    assert_eq!(selection.left_easing(), EasingFunction::LinearNone);
    assert_eq!(selection.right_easing(), EasingFunction::BounceOut);

    let clock = app
        .world()
        .get_resource::<DemoClock>()
        .expect("clock resource");
    assert_eq!(clock.0.period(), 3.5);
    assert_eq!(clock.0.settled(), 0.0);
}

#[test]
fn selection_cycles_wrap_the_catalog() {
    let mut selection = CurveSelection::default();
    for _ in 0..EasingFunction::COUNT {
        selection.cycle_left();
    }
    assert_eq!(selection.left, 0, "left wraps back to the start");

    selection.cycle_right();
    assert_eq!(selection.right_easing(), EasingFunction::BounceInOut);
    for _ in 0..4 {
        selection.cycle_right();
    }
    assert_eq!(selection.right, 0, "right wraps past ElasticInOut");
}

#[test]
fn curve_samples_pin_the_graph_corners() {
    // One point every 5 px across a 500 px plot, endpoints included.
    let points = sample_curve(0);
    assert_eq!(points.len(), 101);

    let first = points.first().unwrap();
    let last = points.last().unwrap();
    // The linear curve runs corner to corner, inside the window bounds.
    assert_eq!(first.x, -350.0);
    assert_eq!(first.y, 250.0);
    assert_eq!(last.x, 150.0);
    assert_eq!(last.y, -250.0);
    for p in &points {
        assert!(p.x.abs() <= SCREEN_WIDTH / 2.0);
        assert!(p.y.abs() <= SCREEN_HEIGHT / 2.0);
    }
}

#[test]
fn overshooting_curves_may_leave_the_graph_box() {
    // Back-InOut overshoots ~10% past both ends; the plot must not clamp it.
    let points = sample_curve(18);
    let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
    assert!(max_y > 250.0, "rises above the graph top");
    assert!(min_y < -250.0, "dips below the graph bottom");
}
