use bevy::prelude::*;

/// Which of the two displayed curves an entity belongs to.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveSide {
    Left,
    Right,
}

/// Marker for the solid box whose vertical position is eased every frame.
#[derive(Component)]
pub struct AnimatedBox;

/// Marker for the two-line legend naming the selected curves.
#[derive(Component)]
pub struct LegendText;

/// Marker for the static key-binding instructions.
#[derive(Component)]
pub struct InstructionText;
