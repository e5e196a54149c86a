use bevy::color::palettes::css::{BLUE, LIME, RED, WHITE};
use bevy::color::Srgba;
use bevy::prelude::*;

use easeviz_core::dispatch;

use crate::components::{AnimatedBox, CurveSide, InstructionText, LegendText};
use crate::resources::{CurveSelection, DemoClock};
use crate::{
    BOX_SIZE, CURVE_STEP, GRAPH_HEIGHT, GRAPH_LEFT, GRAPH_TOP, GRAPH_WIDTH, LEFT_BOX_X,
    RIGHT_BOX_X,
};

const FONT_SIZE: f32 = 20.0;

/// Spawn the camera, the two animated boxes, and the UI text. The demo loads
/// no assets; all text uses the default font.
pub fn setup(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());

    for (side, x, color) in [
        (CurveSide::Left, LEFT_BOX_X, RED),
        (CurveSide::Right, RIGHT_BOX_X, BLUE),
    ] {
        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: color.into(),
                    custom_size: Some(Vec2::splat(BOX_SIZE)),
                    ..default()
                },
                transform: Transform::from_xyz(x, GRAPH_TOP, 0.0),
                ..default()
            },
            AnimatedBox,
            side,
        ));
    }

    commands.spawn((
        TextBundle::from_section(
            "Press 1 to change the red easing, 2 to change the blue easing",
            TextStyle {
                font_size: FONT_SIZE,
                color: WHITE.into(),
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(5.0),
            left: Val::Px(5.0),
            ..default()
        }),
        InstructionText,
    ));

    // Axis label over the plot.
    commands.spawn(
        TextBundle::from_section(
            "Time",
            TextStyle {
                font_size: FONT_SIZE,
                color: WHITE.into(),
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(28.0),
            left: Val::Px(280.0),
            ..default()
        }),
    );

    // Legend below the graph; values are filled in by `update_legend`.
    commands.spawn((
        TextBundle::from_sections([
            TextSection::new(
                "",
                TextStyle {
                    font_size: FONT_SIZE,
                    color: RED.into(),
                    ..default()
                },
            ),
            TextSection::new(
                "",
                TextStyle {
                    font_size: FONT_SIZE,
                    color: BLUE.into(),
                    ..default()
                },
            ),
        ])
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(552.0),
            left: Val::Px(50.0),
            ..default()
        }),
        LegendText,
    ));
}

pub fn advance_clock(time: Res<Time>, mut clock: ResMut<DemoClock>) {
    clock.0.advance(time.delta_seconds());
}

pub fn cycle_selection(keys: Res<ButtonInput<KeyCode>>, mut selection: ResMut<CurveSelection>) {
    if keys.just_pressed(KeyCode::Digit1) {
        selection.cycle_left();
        info!("red curve -> {}", selection.left_easing().name());
    }
    if keys.just_pressed(KeyCode::Digit2) {
        selection.cycle_right();
        info!("blue curve -> {}", selection.right_easing().name());
    }
}

/// Ease each box from the top of the graph to the bottom over one sweep.
pub fn move_boxes(
    selection: Res<CurveSelection>,
    clock: Res<DemoClock>,
    mut boxes: Query<(&CurveSide, &mut Transform), With<AnimatedBox>>,
) {
    let time = clock.0.settled();
    for (side, mut transform) in &mut boxes {
        let index = match side {
            CurveSide::Left => selection.left,
            CurveSide::Right => selection.right,
        };
        transform.translation.y = GRAPH_TOP - dispatch(index, time, 0.0, GRAPH_HEIGHT, clock.0.span);
    }
}

/// Sample one curve across the graph, x standing in for time so the plot
/// always spans the full width regardless of the clock span.
pub fn sample_curve(index: i32) -> Vec<Vec2> {
    let steps = (GRAPH_WIDTH / CURVE_STEP) as i32;
    (0..=steps)
        .map(|i| {
            let time = i as f32 * CURVE_STEP;
            Vec2::new(
                GRAPH_LEFT + time,
                GRAPH_TOP - dispatch(index, time, 0.0, GRAPH_HEIGHT, GRAPH_WIDTH),
            )
        })
        .collect()
}

pub fn draw_graph(mut gizmos: Gizmos, selection: Res<CurveSelection>, clock: Res<DemoClock>) {
    for (index, color) in [(selection.left, RED), (selection.right, BLUE)] {
        gizmos.linestrip_2d(sample_curve(index), color);
    }

    rect_outline(
        &mut gizmos,
        Vec2::new(GRAPH_LEFT, GRAPH_TOP - GRAPH_HEIGHT),
        Vec2::new(GRAPH_WIDTH, GRAPH_HEIGHT),
        WHITE,
    );

    let cursor_x = GRAPH_LEFT + GRAPH_WIDTH * clock.0.progress();
    gizmos.line_2d(
        Vec2::new(cursor_x, GRAPH_TOP),
        Vec2::new(cursor_x, GRAPH_TOP - GRAPH_HEIGHT),
        LIME,
    );

    // Outline boxes marking the start and end positions of each animated box.
    for (x, color) in [(LEFT_BOX_X, RED), (RIGHT_BOX_X, BLUE)] {
        for y in [GRAPH_TOP, GRAPH_TOP - GRAPH_HEIGHT] {
            rect_outline(
                &mut gizmos,
                Vec2::new(x - BOX_SIZE / 2.0, y - BOX_SIZE / 2.0),
                Vec2::splat(BOX_SIZE),
                color,
            );
        }
    }
}

pub fn update_legend(selection: Res<CurveSelection>, mut query: Query<&mut Text, With<LegendText>>) {
    for mut text in &mut query {
        text.sections[0].value = format!("{}\n", selection.left_easing().name());
        text.sections[1].value = selection.right_easing().name().to_string();
    }
}

fn rect_outline(gizmos: &mut Gizmos, min: Vec2, size: Vec2, color: Srgba) {
    let max = min + size;
    gizmos.line_2d(min, Vec2::new(max.x, min.y), color);
    gizmos.line_2d(Vec2::new(max.x, min.y), max, color);
    gizmos.line_2d(max, Vec2::new(min.x, max.y), color);
    gizmos.line_2d(Vec2::new(min.x, max.y), min, color);
}
