//! Room entity construction from room data.
//!
//! Only the current room exists as entities. Switching rooms despawns every
//! `RoomEntity` and spawns the new room, which also swaps the set of colliders
//! the player moves against.

use bevy::ecs::system::EntityCommands;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::bounds::Bounded;
use super::data::{CurrentRoom, RoomRegistry};
use super::room::{Door, ObjectKind, Room, WallKind};
use crate::core::{DoorUnlocked, RoomChanged, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::rendering::{rgb, VisualConfig};

/// Marker for every entity belonging to the current room.
#[derive(Component)]
pub struct RoomEntity;

/// Links a spawned entity to the interactable object it shows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomObject(pub super::room::ObjectId);

// Draw order, back to front
const BACKGROUND_Z: f32 = -10.0;
const DECORATION_Z: f32 = -5.0;
const PORTAL_Z: f32 = -4.0;
const WALL_Z: f32 = 0.0;

/// Spawn all entities of a room.
pub fn spawn_room(commands: &mut Commands, room: &Room, visuals: &VisualConfig) {
    commands.spawn((
        Sprite::from_color(room.background, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
        Transform::from_xyz(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0, BACKGROUND_Z),
        RoomEntity,
    ));

    for decoration in &room.decorations {
        spawn_tile(commands, decoration.bounds(), rgb(visuals.rug_color), DECORATION_Z);
    }

    for portal in &room.portals {
        spawn_tile(commands, portal.bounds(), rgb(visuals.portal_color), PORTAL_Z);
    }

    for wall in &room.walls {
        let color = match wall.kind {
            WallKind::Solid => visuals.wall_color,
            WallKind::Furniture => visuals.furniture_color,
            WallKind::Object(id) => match room.object(id).map(|object| object.kind) {
                Some(ObjectKind::Sign) => visuals.sign_color,
                Some(ObjectKind::Chest) => visuals.chest_color,
                Some(ObjectKind::Door) => visuals.door_locked_color,
                None => {
                    warn!("Wall refers to missing object {:?} in room '{}'", id, room.name);
                    visuals.wall_color
                }
            },
        };

        let bounds = wall.bounds();
        let mut entity = spawn_tile(commands, bounds, rgb(color), WALL_Z);
        entity.insert(Collider::cuboid(bounds.half_size().x, bounds.half_size().y));
        if let WallKind::Object(id) = wall.kind {
            entity.insert(RoomObject(id));
        }
    }

    // Doors that no longer block are drawn open, without a collider
    for door in room.doors.iter().filter(|door| door.open) {
        spawn_open_door(commands, door, visuals);
    }

    debug!(
        "Spawned room '{}': {} walls, {} objects, {} portals",
        room.name,
        room.walls.len(),
        room.objects.len(),
        room.portals.len()
    );
}

fn spawn_tile<'a>(commands: &'a mut Commands, bounds: Rect, color: Color, z: f32) -> EntityCommands<'a> {
    commands.spawn((
        Sprite::from_color(color, bounds.size()),
        Transform::from_translation(bounds.center().extend(z)),
        RoomEntity,
    ))
}

fn spawn_open_door(commands: &mut Commands, door: &Door, visuals: &VisualConfig) {
    spawn_tile(commands, door.bounds(), rgb(visuals.door_open_color), WALL_Z).insert(RoomObject(door.id));
}

/// Replace the spawned room whenever the current room changes.
pub fn rebuild_room(
    mut commands: Commands,
    mut room_changed: EventReader<RoomChanged>,
    registry: Res<RoomRegistry>,
    visuals: Res<VisualConfig>,
    room_entities: Query<Entity, With<RoomEntity>>,
) {
    // Only the latest change matters if several arrive in one frame
    let Some(change) = room_changed.read().last().copied() else {
        return;
    };
    let Some(room) = registry.get(change.to) else {
        error!("Cannot build missing room {}", change.to);
        return;
    };

    for entity in room_entities.iter() {
        commands.entity(entity).despawn_recursive();
    }

    info!("Entering room '{}'", room.name);
    spawn_room(&mut commands, room, &visuals);
}

/// Turn the sprite of a freshly unlocked door into an open door and drop its
/// collider.
pub fn open_unlocked_doors(
    mut commands: Commands,
    mut unlocked: EventReader<DoorUnlocked>,
    current: Res<CurrentRoom>,
    visuals: Res<VisualConfig>,
    mut objects: Query<(Entity, &RoomObject, &mut Sprite)>,
) {
    for event in unlocked.read() {
        if event.room != current.index {
            continue;
        }
        for (entity, object, mut sprite) in objects.iter_mut() {
            if object.0 == event.object {
                sprite.color = rgb(visuals.door_open_color);
                commands.entity(entity).remove::<Collider>();
            }
        }
    }
}
