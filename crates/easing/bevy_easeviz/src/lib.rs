//! Bevy plugin for the Easeviz demo.
//!
//! Renders two easing curves side by side in a fixed 800x600 window: the
//! graph on the left (red and blue polylines plus a green time cursor) and
//! two animated boxes on the right, each easing from the top of the graph to
//! the bottom over one sweep of the clock. Keys 1 and 2 cycle the red and
//! blue curves through the catalog.
//!
//! All curve math lives in `easeviz-core`; this crate owns the window-space
//! glue only.

use bevy::prelude::*;

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{AnimatedBox, CurveSide, InstructionText, LegendText};
pub use resources::{CurveSelection, DemoClock};

/// Window size the layout is designed for.
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Graph placement in world coordinates (origin at window center, y up),
/// mirroring a 500x500 plot inset 50 px from the top-left of the window.
pub(crate) const GRAPH_LEFT: f32 = -350.0;
pub(crate) const GRAPH_TOP: f32 = 250.0;
pub(crate) const GRAPH_WIDTH: f32 = 500.0;
pub(crate) const GRAPH_HEIGHT: f32 = 500.0;

/// Horizontal sampling step for the curve polylines, in pixels.
pub(crate) const CURVE_STEP: f32 = 5.0;

/// Animated boxes to the right of the graph.
pub(crate) const BOX_SIZE: f32 = 50.0;
pub(crate) const LEFT_BOX_X: f32 = GRAPH_LEFT + GRAPH_WIDTH + 75.0;
pub(crate) const RIGHT_BOX_X: f32 = GRAPH_LEFT + GRAPH_WIDTH + 175.0;

pub struct EaseVizPlugin;

impl Plugin for EaseVizPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .init_resource::<CurveSelection>()
            .init_resource::<DemoClock>()
            .add_systems(Startup, systems::setup)
            .add_systems(
                Update,
                (
                    systems::advance_clock,
                    systems::cycle_selection,
                    (
                        systems::move_boxes,
                        systems::draw_graph,
                        systems::update_legend,
                    ),
                )
                    .chain(),
            );
    }
}
