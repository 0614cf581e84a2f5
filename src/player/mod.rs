//! Player module - player entity, motion intent, inventory and movement.

mod components;
mod inventory;
mod motion;
mod movement;
mod plugin;

pub use components::*;
pub use inventory::{Inventory, Item, INVENTORY_SLOTS, INVENTORY_SLOT_LEFT};
pub use motion::{Direction, Facing, Horizontal, Motion, Vertical};
pub use movement::{handle_playing_key, spawn_player, starting_inventory};
pub use plugin::PlayerPlugin;
