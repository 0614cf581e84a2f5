//! Room model and the rules for interacting with room objects.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;
use serde::Deserialize;

use super::bounds::Bounded;
use crate::player::{Inventory, Item};

/// Message an unlocked door shows when no custom one is given.
pub const DEFAULT_UNLOCKED_MESSAGE: &str = "Used the key.";

/// Identifier of an interactable object, unique within the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// What a blocking tile is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallKind {
    Solid,
    Furniture,
    /// An interactable object, which also blocks movement
    Object(ObjectId),
}

/// A tile that blocks movement.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub kind: WallKind,
    pub bounds: Rect,
}

impl Bounded for Wall {
    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// A door as drawn on screen. Doors stay drawn after being opened, but stop
/// blocking movement.
#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    pub id: ObjectId,
    pub bounds: Rect,
    pub open: bool,
}

impl Bounded for Door {
    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Teleports the player to another room when used.
#[derive(Debug, Clone, PartialEq)]
pub struct Portal {
    pub bounds: Rect,
    pub target: usize,
}

impl Bounded for Portal {
    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// A floor tile drawn under everything else, e.g. a rug.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub bounds: Rect,
}

impl Bounded for Decoration {
    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ObjectKind {
    Sign,
    Chest,
    Door,
}

/// A room entity the player can interact with.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractableObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub bounds: Rect,
    pub message: String,
    pub alternate_message: Option<String>,
    pub unlocked_message: String,
    pub grants_key: bool,
    pub locked: bool,
}

impl InteractableObject {
    pub fn new(id: ObjectId, kind: ObjectKind, bounds: Rect, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            bounds,
            message: message.into(),
            alternate_message: None,
            unlocked_message: DEFAULT_UNLOCKED_MESSAGE.to_string(),
            grants_key: false,
            locked: false,
        }
    }

    pub fn is_door(&self) -> bool {
        self.kind == ObjectKind::Door
    }

    /// Exchange the message and the alternate message. Returns false when
    /// there is no alternate.
    pub fn swap_message(&mut self) -> bool {
        match self.alternate_message.as_mut() {
            Some(alternate) => {
                std::mem::swap(&mut self.message, alternate);
                true
            }
            None => false,
        }
    }

    fn unlock(&mut self) {
        self.locked = false;
        self.message = self.unlocked_message.clone();
    }
}

impl Bounded for InteractableObject {
    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Rooms reached by walking off the screen edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RoomExits {
    #[serde(default)]
    pub east: Option<usize>,
    #[serde(default)]
    pub west: Option<usize>,
}

/// Result of interacting with one object.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub object: ObjectId,
    /// Message to show once the interaction is done
    pub message: String,
    pub granted_key: bool,
    pub unlocked: bool,
    /// The object was removed from the room (an opened door)
    pub removed: bool,
}

/// What the action key did to an open dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueAdvance {
    /// The object showed its alternate message instead
    Swapped(String),
    /// Nothing left to show
    Closed,
}

/// All static content of one room.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Room {
    pub name: String,
    pub background: Color,
    pub walls: Vec<Wall>,
    pub doors: Vec<Door>,
    pub portals: Vec<Portal>,
    pub decorations: Vec<Decoration>,
    pub objects: Vec<InteractableObject>,
    pub exits: RoomExits,
}

impl Room {
    pub fn object(&self, id: ObjectId) -> Option<&InteractableObject> {
        self.objects.iter().find(|object| object.id == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut InteractableObject> {
        self.objects.iter_mut().find(|object| object.id == id)
    }

    /// Add an object; it blocks movement and, if it is a door, is drawn as one.
    pub fn add_object(&mut self, object: InteractableObject) {
        self.walls.push(Wall {
            kind: WallKind::Object(object.id),
            bounds: object.bounds,
        });
        if object.is_door() {
            self.doors.push(Door {
                id: object.id,
                bounds: object.bounds,
                open: false,
            });
        }
        self.objects.push(object);
    }

    /// Whether the object still blocks movement.
    pub fn blocks(&self, id: ObjectId) -> bool {
        self.walls.iter().any(|wall| wall.kind == WallKind::Object(id))
    }

    /// First portal overlapping `area`.
    pub fn portal_at(&self, area: &Aabb2d) -> Option<&Portal> {
        self.portals.iter().find(|portal| portal.overlaps(area))
    }

    /// Interact with every object overlapping `reach`, in room order.
    ///
    /// A key-granting object hands its key over once. A locked object opens
    /// when a key is held, using it up; opened doors leave the wall and object
    /// lists for good. When several objects overlap, the last interaction is
    /// the one whose message ends up on screen.
    pub fn interact(&mut self, reach: &Aabb2d, inventory: &mut Inventory) -> Vec<Interaction> {
        let touched: Vec<ObjectId> = self
            .objects
            .iter()
            .filter(|object| object.overlaps(reach))
            .map(|object| object.id)
            .collect();

        touched
            .into_iter()
            .filter_map(|id| self.interact_with(id, inventory))
            .collect()
    }

    fn interact_with(&mut self, id: ObjectId, inventory: &mut Inventory) -> Option<Interaction> {
        let object = self.object_mut(id)?;

        let granted_key = object.grants_key;
        if granted_key {
            object.grants_key = false;
            inventory.pick_up(Item::Key);
        }

        let unlocked = object.locked && inventory.contains(Item::Key);
        if unlocked {
            object.unlock();
        }

        let message = object.message.clone();
        let removed = unlocked && object.is_door();

        if unlocked {
            inventory.consume(Item::Key);
        }
        if removed {
            self.open_door(id);
        }

        Some(Interaction {
            object: id,
            message,
            granted_key,
            unlocked,
            removed,
        })
    }

    fn open_door(&mut self, id: ObjectId) {
        self.walls.retain(|wall| wall.kind != WallKind::Object(id));
        self.objects.retain(|object| object.id != id);
        if let Some(door) = self.doors.iter_mut().find(|door| door.id == id) {
            door.open = true;
        }
    }

    /// The action key was pressed while `id` is the dialogue target: show the
    /// alternate message if the object has one, otherwise close the dialogue.
    pub fn advance_dialogue(&mut self, id: ObjectId) -> DialogueAdvance {
        let Some(object) = self.object_mut(id) else {
            return DialogueAdvance::Closed;
        };
        if object.swap_message() {
            DialogueAdvance::Swapped(object.message.clone())
        } else {
            DialogueAdvance::Closed
        }
    }
}
