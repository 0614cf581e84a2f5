//! World module - rooms, interactables and room transitions.

mod bounds;
mod builder;
mod data;
mod error;
mod interaction;
mod plugin;
mod room;
mod transition;

pub use bounds::Bounded;
pub use builder::{spawn_room, RoomEntity, RoomObject};
pub use data::{cell_rect, load_rooms, parse_rooms, CurrentRoom, RoomRegistry, ROOMS_PATH};
pub use error::DataLoadError;
pub use interaction::{ActiveDialogue, DialogueTarget};
pub use plugin::{setup_world, WorldPlugin};
pub use room::{
    DialogueAdvance, Door, Interaction, InteractableObject, ObjectId, ObjectKind, Portal, Room,
    RoomExits, Wall, WallKind,
};
pub use transition::{evaluate_transition, RoomTransition};
