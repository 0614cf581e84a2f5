//! World plugin - room loading, transitions and interactables.

use bevy::prelude::*;

use super::builder::{open_unlocked_doors, rebuild_room};
use super::data::{load_room_registry, CurrentRoom, RoomRegistry};
use super::interaction::{check_interactions, dialogue_input, end_dialogue, DialogueTarget};
use super::transition::check_room_transition;
use crate::core::{GameConfig, GameState, GameplaySet, PlayState, RoomChanged};
use crate::player::{spawn_player, starting_inventory};
use crate::rendering::VisualConfig;

/// World plugin - handles room loading and everything that happens in rooms.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogueTarget>()
            .init_resource::<CurrentRoom>()
            .add_systems(Startup, load_room_registry)
            .add_systems(OnEnter(GameState::InGame), setup_world)
            .add_systems(Update, check_room_transition.in_set(GameplaySet::RoomTransition))
            .add_systems(Update, check_interactions.in_set(GameplaySet::Interaction))
            .add_systems(
                Update,
                (rebuild_room, open_unlocked_doors)
                    .chain()
                    .after(GameplaySet::Interaction)
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(Update, dialogue_input.run_if(in_state(PlayState::Dialogue)))
            .add_systems(OnExit(PlayState::Dialogue), end_dialogue);
    }
}

/// Spawn the player and request the start room.
pub fn setup_world(
    mut commands: Commands,
    config: Res<GameConfig>,
    visuals: Res<VisualConfig>,
    registry: Res<RoomRegistry>,
    mut current: ResMut<CurrentRoom>,
    mut room_changed: EventWriter<RoomChanged>,
) {
    current.index = registry.start_room();
    info!("Starting in room {}", current.index);

    spawn_player(
        &mut commands,
        config.player_start(),
        starting_inventory(&config),
        &visuals,
    );

    room_changed.send(RoomChanged {
        from: None,
        to: current.index,
    });
}
