//! Rendering plugin - camera and color configuration.
//!
//! Everything is drawn as flat colored rectangles; the camera is fixed on the
//! room, which exactly fills the window.

use bevy::prelude::*;

use super::visual_config::load_visual_config;
use crate::core::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Rendering plugin - camera and colors.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (load_visual_config, spawn_camera));
    }
}

/// Center the camera so world coordinates match screen pixels, with the
/// origin in the bottom-left corner.
fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0, 0.0),
    ));
}
