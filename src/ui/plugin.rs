//! UI plugin - title screen and gameplay overlays.

use bevy::prelude::*;

use super::{dialogue, inventory, start_menu};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        start_menu::setup_start_menu_systems(app);

        // Overlays shown on top of the room
        dialogue::setup_dialogue_systems(app);
        inventory::setup_inventory_systems(app);
    }
}
