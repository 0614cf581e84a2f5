//! Gameplay configuration loaded from an external RON file.
//!
//! Screen geometry is fixed at compile time since room layouts are authored
//! against it; everything else can be tweaked without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

/// Scale applied to the 8x8 native tile art.
pub const SPRITE_SCALING: f32 = 5.0;
/// Native size of a tile in pixels.
pub const SPRITE_NATIVE_SIZE: f32 = 8.0;
/// On-screen size of a tile in pixels.
pub const TILE_SIZE: f32 = SPRITE_NATIVE_SIZE * SPRITE_SCALING;

/// Room grid width in tiles.
pub const ROOM_COLUMNS: usize = 30;
/// Room grid height in tiles.
pub const ROOM_ROWS: usize = 16;

pub const SCREEN_WIDTH: f32 = TILE_SIZE * ROOM_COLUMNS as f32;
pub const SCREEN_HEIGHT: f32 = TILE_SIZE * ROOM_ROWS as f32;

/// Height of the dialogue box at the bottom of the screen.
pub const TEXT_BOX_HEIGHT: f32 = 100.0;

/// Gameplay configuration loaded from assets/data/config/game_config.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player speed in pixels per second, also along diagonals
    pub move_speed: f32,
    /// How far beyond its own box the player can reach an object, in pixels
    pub interact_reach: f32,
    /// Player center when the world is first entered
    pub player_start: (f32, f32),
    /// Start with a key in the inventory (debugging doors)
    pub start_with_key: bool,
    /// Draw collider outlines
    pub physics_debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            move_speed: 300.0,
            interact_reach: 6.0,
            player_start: (100.0, 100.0),
            start_with_key: false,
            physics_debug: false,
        }
    }
}

impl GameConfig {
    pub const PATH: &'static str = "assets/data/config/game_config.ron";

    /// Load game config from RON file, falling back to defaults.
    pub fn load() -> Self {
        match fs::read_to_string(Self::PATH) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!("Loaded game config from {}", Self::PATH);
                    config
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", Self::PATH, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", Self::PATH, e);
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }

    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.player_start.0, self.player_start.1)
    }
}

/// System to load the game config before any other startup system reads it.
pub fn load_game_config(mut commands: Commands) {
    commands.insert_resource(GameConfig::load());
}
