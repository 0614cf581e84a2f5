//! Error types for room data loading.

use thiserror::Error;

/// Errors that can occur when loading room data.
#[derive(Debug, Error, PartialEq)]
pub enum DataLoadError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// The world file lists no rooms.
    #[error("No rooms defined")]
    NoRooms,

    /// A room layout does not have the screen's grid dimensions.
    #[error("Grid mismatch in room '{room}': expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    GridMismatch {
        room: String,
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    /// Layout character with no tile meaning.
    #[error("Unknown tile '{character}' in room '{room}' at ({column}, {row})")]
    UnknownTile {
        room: String,
        character: char,
        column: usize,
        row: usize,
    },

    /// An object placed outside the grid.
    #[error("Object {index} in room '{room}' is outside the grid at ({column}, {row})")]
    ObjectOutOfBounds {
        room: String,
        index: usize,
        column: usize,
        row: usize,
    },

    /// An exit, portal or the start room points at a room that does not exist.
    #[error("Room '{room}' links to room {target}, but only {count} rooms exist")]
    InvalidRoomLink {
        room: String,
        target: usize,
        count: usize,
    },

    /// Portal tiles without a portal target.
    #[error("Room '{room}' has portal tiles but no portal_target")]
    MissingPortalTarget { room: String },
}
