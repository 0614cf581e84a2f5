//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. For example,
//! player movement only runs while `PlayState::Playing` is active, while the
//! start menu systems only run in `GameState::Start`.

use bevy::prelude::*;

/// Top-level game states.
///
/// - Start on the title screen in `Start`
/// - Enter `InGame` when the player presses the start button
///
/// There is no way back to `Start`; the game runs until the window closes.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Title screen with the start button
    #[default]
    Start,
    /// The world is loaded and the player is in a room
    InGame,
}

/// Sub-states for gameplay - only active when GameState::InGame.
///
/// Together with `GameState::Start` these form the four screens of the game;
/// exactly one of them is active at a time.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Free movement, room transitions and object interaction
    #[default]
    Playing,
    /// A message box for the object the player interacted with
    Dialogue,
    /// Inventory panel is open, movement frozen
    Inventory,
}
