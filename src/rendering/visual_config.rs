//! Visual configuration loaded from external RON file.
//!
//! Allows tweaking all colors without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

/// Visual configuration loaded from assets/data/rendering/visual_config.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    // Room tiles
    pub wall_color: (f32, f32, f32),
    pub furniture_color: (f32, f32, f32),
    pub rug_color: (f32, f32, f32),
    pub portal_color: (f32, f32, f32),
    // Interactables
    pub sign_color: (f32, f32, f32),
    pub chest_color: (f32, f32, f32),
    pub door_locked_color: (f32, f32, f32),
    pub door_open_color: (f32, f32, f32),
    // Player
    pub player_color: (f32, f32, f32),
    pub facing_marker_color: (f32, f32, f32),
    // Overlays
    pub dialogue_color: (f32, f32, f32),
    pub inventory_color: (f32, f32, f32),
    pub key_color: (f32, f32, f32),
    pub clear_color: (f32, f32, f32),
    // Title screen
    pub menu_background_color: (f32, f32, f32),
    pub menu_title_color: (f32, f32, f32),
    pub menu_text_color: (f32, f32, f32),
    pub button_color: (f32, f32, f32),
    pub button_hovered_color: (f32, f32, f32),
    pub button_pressed_color: (f32, f32, f32),
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            wall_color: (0.35, 0.35, 0.38),
            furniture_color: (0.45, 0.30, 0.18),
            rug_color: (0.55, 0.18, 0.20),
            portal_color: (0.95, 0.78, 0.20),
            sign_color: (0.60, 0.45, 0.25),
            chest_color: (0.50, 0.33, 0.15),
            door_locked_color: (0.40, 0.22, 0.10),
            door_open_color: (0.18, 0.12, 0.08),
            player_color: (0.25, 0.55, 0.85),
            facing_marker_color: (0.95, 0.95, 0.95),
            // Dark blue dialogue box, eggplant inventory panel
            dialogue_color: (0.0, 0.0, 0.55),
            inventory_color: (0.38, 0.25, 0.32),
            key_color: (0.95, 0.80, 0.20),
            clear_color: (0.0, 0.0, 0.0),
            menu_background_color: (0.12, 0.10, 0.08),
            menu_title_color: (0.95, 0.80, 0.20),
            menu_text_color: (0.85, 0.82, 0.75),
            button_color: (0.40, 0.22, 0.10),
            button_hovered_color: (0.50, 0.33, 0.15),
            button_pressed_color: (0.18, 0.12, 0.08),
        }
    }
}

impl VisualConfig {
    pub const PATH: &'static str = "assets/data/rendering/visual_config.ron";

    /// Load visual config from RON file.
    pub fn load() -> Self {
        match fs::read_to_string(Self::PATH) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded visual config from {}", Self::PATH);
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
}

/// Color from a config tuple.
pub fn rgb(color: (f32, f32, f32)) -> Color {
    Color::srgb(color.0, color.1, color.2)
}

/// System to load visual config at startup.
pub fn load_visual_config(mut commands: Commands) {
    let config = VisualConfig::load();
    commands.insert_resource(ClearColor(rgb(config.clear_color)));
    commands.insert_resource(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_visual_config_parses() {
        let config: VisualConfig =
            ron::from_str(include_str!("../../assets/data/rendering/visual_config.ron")).unwrap();
        assert_ne!(config.door_locked_color, config.door_open_color);
    }
}
