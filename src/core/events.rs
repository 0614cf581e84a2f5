//! Global events used for cross-system communication.
//!
//! Gameplay systems mutate room and inventory data directly; these events let
//! the entity builder and logging react without knowing who caused the change.

use bevy::prelude::*;

use crate::player::Item;
use crate::world::ObjectId;

/// Sent to leave the title screen, by the confirm key or the start button.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartGame;

/// Sent when the current room index changes.
///
/// The room builder listens for this to despawn the previous room's entities
/// (and with them their colliders) and spawn the new room.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomChanged {
    /// Room the player left, `None` when the world is first entered
    pub from: Option<usize>,
    /// Room the player is now in
    pub to: usize,
}

/// Sent when a locked door is opened with a key.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorUnlocked {
    /// Room the door belongs to
    pub room: usize,
    /// The door object
    pub object: ObjectId,
}

/// Sent when the player picks up an item.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPickedUp {
    pub item: Item,
    /// Object that handed out the item
    pub source: ObjectId,
}
