//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;

use super::config::{load_game_config, GameConfig};
use super::events::*;
use super::input::{GameKey, KeyBindings};
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Start, InGame and the PlayState sub-state)
/// - Global events (StartGame, RoomChanged, DoorUnlocked, ItemPickedUp)
/// - Key bindings, configuration and the elapsed-time counter
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()

            // Register global events
            .add_event::<StartGame>()
            .add_event::<RoomChanged>()
            .add_event::<DoorUnlocked>()
            .add_event::<ItemPickedUp>()

            // Frame order while playing: input, movement, room changes, interaction
            .configure_sets(
                Update,
                (
                    GameplaySet::Input,
                    GameplaySet::Movement,
                    GameplaySet::RoomTransition,
                    GameplaySet::Interaction,
                )
                    .chain()
                    .run_if(in_state(PlayState::Playing)),
            )

            // Defaults until the config file is read
            .init_resource::<GameConfig>()
            .add_systems(PreStartup, load_game_config)
            .init_resource::<KeyBindings>()
            .init_resource::<ElapsedTime>()

            // Title screen: confirm key and start button both request a start
            .add_systems(
                Update,
                (start_on_confirm, begin_game)
                    .chain()
                    .run_if(in_state(GameState::Start)),
            )

            .add_systems(OnEnter(GameState::InGame), log_state::<GameState>)
            .add_systems(OnEnter(PlayState::Dialogue), log_state::<PlayState>)
            .add_systems(OnEnter(PlayState::Inventory), log_state::<PlayState>)
            .add_systems(Update, tick_elapsed_time.run_if(in_state(GameState::InGame)));
    }
}

/// Ordered phases of a gameplay frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    /// Key events update the player's intent
    Input,
    /// The player's velocity is handed to the physics controller
    Movement,
    /// Edge and portal room changes
    RoomTransition,
    /// Object interaction, which may open a dialogue
    Interaction,
}

/// Time spent in-game, in seconds.
#[derive(Resource, Debug, Default)]
pub struct ElapsedTime {
    pub seconds: f32,
}

/// Ask to start when a confirm key goes down.
fn start_on_confirm(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut start: EventWriter<StartGame>,
) {
    if bindings.just_pressed(&keyboard).any(|key| key == GameKey::Confirm) {
        start.send(StartGame);
    }
}

/// Leave the title screen on the first start request.
fn begin_game(mut start: EventReader<StartGame>, mut next_state: ResMut<NextState<GameState>>) {
    if start.read().last().is_some() {
        info!("Starting game");
        next_state.set(GameState::InGame);
    }
}

fn tick_elapsed_time(time: Res<Time>, mut elapsed: ResMut<ElapsedTime>) {
    elapsed.seconds += time.delta_secs();
}

fn log_state<S: States>(state: Res<State<S>>) {
    debug!("Entered {:?}", state.get());
}
