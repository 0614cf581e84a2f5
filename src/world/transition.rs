//! Moving between rooms.
//!
//! Three triggers are checked each frame, in order: walking off the east edge,
//! walking off the west edge, and using a portal. At most one applies.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use super::data::{CurrentRoom, RoomRegistry};
use super::room::Room;
use crate::core::{RoomChanged, SCREEN_WIDTH};
use crate::player::{player_box, Player, UseIntent};

/// A room change decided for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomTransition {
    /// Walked past the right edge; enter the next room from its left edge
    East { to: usize },
    /// Walked past the left edge; enter the next room from its right edge
    West { to: usize },
    /// Used a portal; position is kept
    Portal { to: usize },
}

impl RoomTransition {
    pub fn target(&self) -> usize {
        match *self {
            RoomTransition::East { to } | RoomTransition::West { to } | RoomTransition::Portal { to } => to,
        }
    }

    /// Horizontal position the player is moved to, if any.
    pub fn entry_x(&self, screen_width: f32) -> Option<f32> {
        match self {
            RoomTransition::East { .. } => Some(0.0),
            RoomTransition::West { .. } => Some(screen_width),
            RoomTransition::Portal { .. } => None,
        }
    }
}

/// Decide whether the player leaves `room` this frame.
pub fn evaluate_transition(
    room: &Room,
    player_x: f32,
    player_area: &Aabb2d,
    use_object: bool,
    screen_width: f32,
) -> Option<RoomTransition> {
    if player_x > screen_width {
        if let Some(to) = room.exits.east {
            return Some(RoomTransition::East { to });
        }
    }
    if player_x < 0.0 {
        if let Some(to) = room.exits.west {
            return Some(RoomTransition::West { to });
        }
    }
    if use_object {
        if let Some(portal) = room.portal_at(player_area) {
            return Some(RoomTransition::Portal { to: portal.target });
        }
    }
    None
}

/// Apply the room transition for this frame, if any.
pub fn check_room_transition(
    registry: Res<RoomRegistry>,
    mut current: ResMut<CurrentRoom>,
    mut player_query: Query<(&mut Transform, &UseIntent), With<Player>>,
    mut room_changed: EventWriter<RoomChanged>,
) {
    let Ok((mut transform, intent)) = player_query.get_single_mut() else {
        return;
    };
    let Some(room) = registry.get(current.index) else {
        error!("Current room {} does not exist", current.index);
        return;
    };

    let position = transform.translation.truncate();
    let Some(transition) = evaluate_transition(
        room,
        position.x,
        &player_box(position),
        intent.active,
        SCREEN_WIDTH,
    ) else {
        return;
    };

    if let Some(x) = transition.entry_x(SCREEN_WIDTH) {
        transform.translation.x = x;
    }

    let from = current.index;
    current.index = transition.target();
    info!("Room {} -> {} ({:?})", from, current.index, transition);
    room_changed.send(RoomChanged {
        from: Some(from),
        to: current.index,
    });
}
