//! Room data structures and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;
use super::room::{
    Decoration, InteractableObject, ObjectId, ObjectKind, Portal, Room, RoomExits, Wall, WallKind,
    DEFAULT_UNLOCKED_MESSAGE,
};
use crate::core::{ROOM_COLUMNS, ROOM_ROWS, TILE_SIZE};

/// Path of the world file, relative to the working directory.
pub const ROOMS_PATH: &str = "assets/data/rooms.ron";

// === Raw RON types ===

/// Raw world file as read from RON.
#[derive(Debug, Clone, Deserialize)]
pub struct WorldDefinitionRaw {
    #[serde(default)]
    pub start_room: usize,
    pub rooms: Vec<RoomDefinitionRaw>,
}

/// Raw room definition as read from RON.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomDefinitionRaw {
    pub name: String,
    pub background: (f32, f32, f32),
    /// One string per row, top row first
    pub layout: Vec<String>,
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
    #[serde(default)]
    pub exits: RoomExits,
    /// Where the `P` tiles of this room lead
    #[serde(default)]
    pub portal_target: Option<usize>,
}

/// An interactable object placed on the grid.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectDef {
    pub kind: ObjectKind,
    /// Grid cell (column, row), row 0 at the top
    pub at: (usize, usize),
    pub message: String,
    #[serde(default)]
    pub alternate_message: Option<String>,
    #[serde(default)]
    pub unlocked_message: Option<String>,
    #[serde(default)]
    pub grants_key: bool,
    #[serde(default)]
    pub locked: bool,
}

/// Meaning of a layout character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Floor,
    Wall,
    Furniture,
    Rug,
    Portal,
}

impl TileKind {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | ' ' => Some(TileKind::Floor),
            '#' => Some(TileKind::Wall),
            'T' | 'S' => Some(TileKind::Furniture),
            ',' => Some(TileKind::Rug),
            'P' => Some(TileKind::Portal),
            _ => None,
        }
    }
}

/// Screen rectangle of a grid cell. Row 0 is the top row of the layout.
pub fn cell_rect(column: usize, row: usize) -> Rect {
    let left = column as f32 * TILE_SIZE;
    let bottom = (ROOM_ROWS - 1 - row) as f32 * TILE_SIZE;
    Rect::new(left, bottom, left + TILE_SIZE, bottom + TILE_SIZE)
}

impl RoomDefinitionRaw {
    /// Resolve the layout grid and objects into a room. Object ids are handed
    /// out from `next_id` so they stay unique across rooms.
    pub fn into_room(self, next_id: &mut u32) -> Result<Room, DataLoadError> {
        let height = self.layout.len();
        let width = self.layout.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let ragged = self.layout.iter().any(|row| row.chars().count() != ROOM_COLUMNS);
        if height != ROOM_ROWS || width != ROOM_COLUMNS || ragged {
            return Err(DataLoadError::GridMismatch {
                room: self.name,
                expected_width: ROOM_COLUMNS,
                expected_height: ROOM_ROWS,
                actual_width: width,
                actual_height: height,
            });
        }

        let mut room = Room {
            name: self.name.clone(),
            background: Color::srgb(self.background.0, self.background.1, self.background.2),
            exits: self.exits,
            ..default()
        };

        for (row, line) in self.layout.iter().enumerate() {
            for (column, c) in line.chars().enumerate() {
                let Some(kind) = TileKind::from_char(c) else {
                    return Err(DataLoadError::UnknownTile {
                        room: self.name,
                        character: c,
                        column,
                        row,
                    });
                };
                let bounds = cell_rect(column, row);
                match kind {
                    TileKind::Floor => {}
                    TileKind::Wall => room.walls.push(Wall {
                        kind: WallKind::Solid,
                        bounds,
                    }),
                    TileKind::Furniture => room.walls.push(Wall {
                        kind: WallKind::Furniture,
                        bounds,
                    }),
                    TileKind::Rug => room.decorations.push(Decoration { bounds }),
                    TileKind::Portal => {
                        let Some(target) = self.portal_target else {
                            return Err(DataLoadError::MissingPortalTarget { room: self.name });
                        };
                        room.portals.push(Portal { bounds, target });
                    }
                }
            }
        }

        for (index, def) in self.objects.into_iter().enumerate() {
            let (column, row) = def.at;
            if column >= ROOM_COLUMNS || row >= ROOM_ROWS {
                return Err(DataLoadError::ObjectOutOfBounds {
                    room: self.name,
                    index,
                    column,
                    row,
                });
            }

            let id = ObjectId(*next_id);
            *next_id += 1;

            let mut object = InteractableObject::new(id, def.kind, cell_rect(column, row), def.message);
            object.alternate_message = def.alternate_message;
            object.unlocked_message = def
                .unlocked_message
                .unwrap_or_else(|| DEFAULT_UNLOCKED_MESSAGE.to_string());
            object.grants_key = def.grants_key;
            object.locked = def.locked;
            room.add_object(object);
        }

        Ok(room)
    }
}

/// Parse and validate a world file.
pub fn parse_rooms(contents: &str, path: &str) -> Result<RoomRegistry, DataLoadError> {
    let raw: WorldDefinitionRaw = ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
        path: path.to_string(),
        details: e.to_string(),
    })?;

    if raw.rooms.is_empty() {
        return Err(DataLoadError::NoRooms);
    }

    let count = raw.rooms.len();
    let mut next_id = 0;
    let mut rooms = Vec::with_capacity(count);
    for room_raw in raw.rooms {
        let room = room_raw.into_room(&mut next_id)?;
        let links = [room.exits.east, room.exits.west]
            .into_iter()
            .flatten()
            .chain(room.portals.iter().map(|portal| portal.target));
        for target in links {
            if target >= count {
                return Err(DataLoadError::InvalidRoomLink {
                    room: room.name,
                    target,
                    count,
                });
            }
        }
        rooms.push(room);
    }

    if raw.start_room >= count {
        return Err(DataLoadError::InvalidRoomLink {
            room: "<start>".to_string(),
            target: raw.start_room,
            count,
        });
    }

    Ok(RoomRegistry {
        rooms,
        start_room: raw.start_room,
    })
}

/// Read, parse and validate the world file at `path`.
pub fn load_rooms(path: &Path) -> Result<RoomRegistry, DataLoadError> {
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;
    parse_rooms(&contents, &display)
}

/// Resource storing every room of the world. Never empty.
#[derive(Resource, Debug, Clone)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
    start_room: usize,
}

impl RoomRegistry {
    pub fn get(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Room> {
        self.rooms.get_mut(index)
    }

    /// All rooms, in index order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn start_room(&self) -> usize {
        self.start_room
    }
}

/// Resource indicating which room the player is in.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CurrentRoom {
    pub index: usize,
}

/// Load the world file at startup. The game cannot run without rooms, so a
/// failure here exits the app.
pub fn load_room_registry(mut commands: Commands, mut exit: EventWriter<AppExit>) {
    match load_rooms(Path::new(ROOMS_PATH)) {
        Ok(registry) => {
            info!("Loaded {} room(s) from {}", registry.rooms().len(), ROOMS_PATH);
            commands.insert_resource(CurrentRoom {
                index: registry.start_room(),
            });
            commands.insert_resource(registry);
        }
        Err(e) => {
            error!("Failed to load rooms: {}", e);
            exit.send(AppExit::error());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUNDLED: &str = include_str!("../../assets/data/rooms.ron");

    fn wall_row() -> String {
        "#".repeat(ROOM_COLUMNS)
    }

    fn open_row() -> String {
        format!("#{}#", ".".repeat(ROOM_COLUMNS - 2))
    }

    fn layout_ron(rows: &[String]) -> String {
        let quoted: Vec<String> = rows.iter().map(|row| format!("\"{}\"", row)).collect();
        format!("[{}]", quoted.join(", "))
    }

    fn simple_layout() -> Vec<String> {
        let mut rows = vec![wall_row()];
        rows.extend((0..ROOM_ROWS - 2).map(|_| open_row()));
        rows.push(wall_row());
        rows
    }

    fn world_ron(layout: &[String], extra: &str) -> String {
        format!(
            "(rooms: [(name: \"test\", background: (0.1, 0.1, 0.1), layout: {}, {})])",
            layout_ron(layout),
            extra
        )
    }

    #[test]
    fn bundled_world_loads() {
        let registry = parse_rooms(BUNDLED, ROOMS_PATH).expect("bundled rooms should load");
        assert_eq!(registry.rooms().len(), 2);
        assert_eq!(registry.start_room(), 0);

        let first = registry.get(0).unwrap();
        assert_eq!(first.exits.east, Some(1));
        assert!(!first.portals.is_empty());
        assert!(first.portals.iter().all(|portal| portal.target == 1));
        assert!(first.objects.iter().any(|object| object.grants_key));
        assert!(first.objects.iter().any(|object| object.is_door() && object.locked));

        let second = registry.get(1).unwrap();
        assert_eq!(second.exits.west, Some(0));
        assert!(second.portals.is_empty());
    }

    #[test]
    fn bundled_world_has_enough_keys_for_its_doors() {
        let registry = parse_rooms(BUNDLED, ROOMS_PATH).unwrap();
        let rooms = registry.rooms().iter();
        let (keys, doors) = rooms.fold((0, 0), |(keys, doors), room| {
            (
                keys + room.objects.iter().filter(|o| o.grants_key).count(),
                doors + room.objects.iter().filter(|o| o.is_door() && o.locked).count(),
            )
        });
        assert!(keys >= doors, "{} keys for {} doors", keys, doors);
    }

    #[test]
    fn object_ids_are_unique_across_rooms() {
        let registry = parse_rooms(BUNDLED, ROOMS_PATH).unwrap();
        let mut ids: Vec<ObjectId> = registry
            .rooms()
            .iter()
            .flat_map(|room| room.objects.iter().map(|object| object.id))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn grid_rows_map_to_screen_from_the_top() {
        assert_eq!(cell_rect(0, ROOM_ROWS - 1), Rect::new(0.0, 0.0, TILE_SIZE, TILE_SIZE));
        assert_eq!(cell_rect(2, 0).min, Vec2::new(2.0 * TILE_SIZE, 15.0 * TILE_SIZE));
    }

    #[test]
    fn objects_block_and_doors_are_drawn() {
        let ron = world_ron(
            &simple_layout(),
            "objects: [(kind: Door, at: (5, 5), message: \"Shut.\", locked: true)]",
        );
        let registry = parse_rooms(&ron, "test.ron").unwrap();
        let room = registry.get(0).unwrap();
        let door = &room.objects[0];
        assert_eq!(door.unlocked_message, DEFAULT_UNLOCKED_MESSAGE);
        assert!(room.blocks(door.id));
        assert_eq!(room.doors.len(), 1);
        assert_eq!(room.doors[0].bounds, cell_rect(5, 5));
    }

    #[test]
    fn short_layout_is_rejected() {
        let mut layout = simple_layout();
        layout.pop();
        let err = parse_rooms(&world_ron(&layout, "objects: []"), "test.ron").unwrap_err();
        assert!(matches!(err, DataLoadError::GridMismatch { actual_height: 15, .. }));
    }

    #[test]
    fn unknown_tile_is_rejected() {
        let mut layout = simple_layout();
        layout[3].replace_range(4..5, "?");
        let err = parse_rooms(&world_ron(&layout, "objects: []"), "test.ron").unwrap_err();
        assert_eq!(
            err,
            DataLoadError::UnknownTile {
                room: "test".to_string(),
                character: '?',
                column: 4,
                row: 3,
            }
        );
    }

    #[test]
    fn dangling_exit_is_rejected() {
        let err = parse_rooms(&world_ron(&simple_layout(), "exits: (east: Some(3))"), "test.ron").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidRoomLink { target: 3, count: 1, .. }));
    }

    #[test]
    fn portal_without_target_is_rejected() {
        let mut layout = simple_layout();
        layout[3].replace_range(4..5, "P");
        let err = parse_rooms(&world_ron(&layout, "objects: []"), "test.ron").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingPortalTarget { .. }));
    }

    #[test]
    fn empty_world_is_rejected() {
        assert_eq!(parse_rooms("(rooms: [])", "test.ron").unwrap_err(), DataLoadError::NoRooms);
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        let err = parse_rooms("(rooms: [", "broken.ron").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { .. }));
    }
}
