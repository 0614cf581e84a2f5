//! Locked Rooms - a small top-down exploration game in Bevy.
//!
//! The player walks between two rooms, picks up keys, unlocks doors and reads
//! the messages objects have to say.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, configuration, key bindings
//! - **Player**: Motion intent, inventory, movement
//! - **World**: Rooms, interactables, room transitions
//! - **Rendering**: Camera and colors
//! - **UI**: Start menu, dialogue box, inventory panel

pub mod core;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct LockedRoomsPlugin;

impl Plugin for LockedRoomsPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Rendering systems
            .add_plugins(rendering::RenderingPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
