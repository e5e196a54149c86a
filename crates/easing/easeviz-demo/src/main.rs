//! Easings visualization: two curves side by side, keys 1 and 2 cycle them.

use bevy::prelude::*;
use bevy_easeviz::{EaseVizPlugin, SCREEN_HEIGHT, SCREEN_WIDTH};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Easings Visualization".into(),
                resolution: (SCREEN_WIDTH, SCREEN_HEIGHT).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EaseVizPlugin)
        .run();
}
