//! Top-down player movement.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use super::inventory::{Inventory, Item};
use super::motion::Motion;
use crate::core::{GameConfig, GameKey, GameState, ItemPickedUp, KeyBindings, PlayState};
use crate::rendering::{rgb, VisualConfig};

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.add_systems(OnEnter(PlayState::Dialogue), halt_player)
        .add_systems(OnEnter(PlayState::Inventory), halt_player)
        .add_systems(
            Update,
            update_facing_marker.run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            inventory_input.run_if(in_state(PlayState::Inventory)),
        )
        .add_systems(Update, log_item_pickups.run_if(on_event::<ItemPickedUp>));
}

/// React to one logical key going down (`pressed`) or up while playing.
/// Returns the state to switch to, if the key asks for one.
pub fn handle_playing_key(
    key: GameKey,
    pressed: bool,
    motion: &mut Motion,
    intent: &mut UseIntent,
) -> Option<PlayState> {
    match (key, pressed) {
        (GameKey::Move(direction), true) => motion.press(direction),
        (GameKey::Move(direction), false) => motion.release(direction),
        (GameKey::Action, pressed) => intent.active = pressed,
        (GameKey::Inventory, true) => {
            motion.halt();
            return Some(PlayState::Inventory);
        }
        _ => {}
    }
    None
}

/// Feed this frame's key presses and releases into the player's intent.
pub fn read_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut next_state: ResMut<NextState<PlayState>>,
    mut player_query: Query<(&mut Motion, &mut UseIntent), With<Player>>,
) {
    let Ok((mut motion, mut intent)) = player_query.get_single_mut() else {
        return;
    };

    let pressed = bindings.just_pressed(&keyboard).map(|key| (key, true));
    let released = bindings.just_released(&keyboard).map(|key| (key, false));
    for (key, is_press) in pressed.chain(released) {
        if let Some(state) = handle_playing_key(key, is_press, &mut motion, &mut intent) {
            next_state.set(state);
        }
    }
}

/// Move the player by this frame's velocity. The character controller slides
/// the player along walls instead of letting it pass through them.
pub fn apply_player_motion(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut player_query: Query<(&Motion, &mut KinematicCharacterController), With<Player>>,
) {
    let Ok((motion, mut controller)) = player_query.get_single_mut() else {
        return;
    };

    let velocity = motion.velocity(config.move_speed);
    controller.translation = if velocity == Vec2::ZERO {
        None
    } else {
        Some(velocity * time.delta_secs())
    };
}

/// Stop all motion when an overlay opens. Key-ups are not read while an
/// overlay is open, so the action flag is dropped here as well.
fn halt_player(
    mut player_query: Query<(&mut Motion, &mut UseIntent, &mut KinematicCharacterController), With<Player>>,
) {
    for (mut motion, mut intent, mut controller) in player_query.iter_mut() {
        motion.halt();
        intent.active = false;
        controller.translation = None;
    }
}

/// Report every item that lands in the inventory.
pub fn log_item_pickups(
    mut picked_up: EventReader<ItemPickedUp>,
    player_query: Query<&Inventory, With<Player>>,
) {
    for event in picked_up.read() {
        let held = player_query.get_single().map_or(0, |inventory| inventory.len());
        info!("Picked up {} from {:?} ({} held)", event.item.name(), event.source, held);
    }
}

/// Inventory or cancel closes the inventory panel.
fn inventory_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if bindings
        .just_pressed(&keyboard)
        .any(|key| matches!(key, GameKey::Inventory | GameKey::Cancel))
    {
        next_state.set(PlayState::Playing);
    }
}

/// Keep the facing marker on the side the player faces.
fn update_facing_marker(
    player_query: Query<(&Motion, &Children), (With<Player>, Changed<Motion>)>,
    mut marker_query: Query<&mut Transform, With<FacingMarker>>,
) {
    for (motion, children) in player_query.iter() {
        for child in children.iter() {
            if let Ok(mut transform) = marker_query.get_mut(*child) {
                let offset = motion.facing().offset() * (PLAYER_HALF_SIZE - 5.0);
                transform.translation = offset.extend(transform.translation.z);
            }
        }
    }
}

/// Spawn the player entity.
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec2,
    inventory: Inventory,
    visuals: &VisualConfig,
) -> Entity {
    let motion = Motion::default();
    let marker_offset = motion.facing().offset() * (PLAYER_HALF_SIZE - 5.0);

    commands
        .spawn((
            Player,
            motion,
            UseIntent::default(),
            inventory,
            Sprite::from_color(rgb(visuals.player_color), Vec2::splat(PLAYER_HALF_SIZE * 2.0)),
            Transform::from_translation(position.extend(10.0)),
            // Rapier physics components
            RigidBody::KinematicPositionBased,
            Collider::cuboid(PLAYER_HALF_SIZE, PLAYER_HALF_SIZE),
            KinematicCharacterController {
                offset: CharacterLength::Absolute(1.0),
                // Top-down: no ground to snap to or climb onto
                snap_to_ground: None,
                autostep: None,
                slide: true,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                FacingMarker,
                Sprite::from_color(rgb(visuals.facing_marker_color), Vec2::splat(6.0)),
                Transform::from_translation(marker_offset.extend(0.1)),
            ));
        })
        .id()
}

/// Starting inventory for a new game.
pub fn starting_inventory(config: &GameConfig) -> Inventory {
    if config.start_with_key {
        Inventory::with_items([Item::Key])
    } else {
        Inventory::default()
    }
}
