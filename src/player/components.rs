//! Player-related components.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

/// Half the side length of the player's collision box.
pub const PLAYER_HALF_SIZE: f32 = 16.0;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// The "use" action flag. Set while the action key is held and cleared on
/// release or once a dialogue consumes it.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UseIntent {
    pub active: bool,
}

/// Marker for the small child sprite showing which way the player faces.
#[derive(Component)]
pub struct FacingMarker;

/// Collision box of a player centred at `position`.
pub fn player_box(position: Vec2) -> Aabb2d {
    Aabb2d::new(position, Vec2::splat(PLAYER_HALF_SIZE))
}

/// The player box grown by `reach` on every side, used to touch objects the
/// player is blocked by.
pub fn reach_box(position: Vec2, reach: f32) -> Aabb2d {
    Aabb2d::new(position, Vec2::splat(PLAYER_HALF_SIZE + reach))
}
