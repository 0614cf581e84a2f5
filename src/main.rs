//! Locked Rooms - Entry Point
//!
//! A top-down exploration game: find the keys, open the doors.
//!
//! Controls:
//! - Arrows / WASD: Move
//! - Z / E: Use objects and portals, advance dialogue
//! - C / I: Inventory
//! - X / Escape: Close overlays
//! - Enter: Start

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use locked_rooms::core::{GameConfig, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE};

fn main() -> AppExit {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Locked Rooms".to_string(),
                resolution: (SCREEN_WIDTH, SCREEN_HEIGHT).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))

        // Physics, one tile per meter; collider outlines only on request
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(TILE_SIZE))
        .add_plugins(RapierDebugRenderPlugin {
            enabled: false,
            ..default()
        })

        // Our game plugin
        .add_plugins(locked_rooms::LockedRoomsPlugin)
        .add_systems(Startup, apply_physics_debug)
        .run()
}

/// Show collider outlines when the loaded config asks for them.
fn apply_physics_debug(config: Res<GameConfig>, mut debug_render: ResMut<DebugRenderContext>) {
    debug_render.enabled = config.physics_debug;
}
