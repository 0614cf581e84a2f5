//! Player plugin - input, movement and overlay halting.

use bevy::prelude::*;

use super::movement::{self, apply_player_motion, read_player_input};
use crate::core::GameplaySet;

/// Player plugin - handles player input and movement.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // Set up movement systems
        movement::setup_movement_systems(app);

        app.add_systems(Update, read_player_input.in_set(GameplaySet::Input))
            .add_systems(Update, apply_player_motion.in_set(GameplaySet::Movement));
    }
}
