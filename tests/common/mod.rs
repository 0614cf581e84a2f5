//! Headless app helpers shared by the integration tests.

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::app::Plugins;
use bevy::state::app::StatesPlugin;

use locked_rooms::core::{CorePlugin, GameState, PlayState};
use locked_rooms::player::{Player, PlayerPlugin};

/// App with states, input and the given game plugins, past its first frame.
pub fn app_with<M>(plugins: impl Plugins<M>) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins((CorePlugin, PlayerPlugin))
        .add_plugins(plugins);
    app.update();
    app
}

/// Run one frame, then forget this frame's presses and releases.
pub fn step(app: &mut App) {
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
}

/// Press a key and keep it down for one frame.
pub fn hold(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    step(app);
}

/// Let go of a held key. The release is seen on the next step.
pub fn release(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().release(key);
}

/// Press a key for exactly one frame.
pub fn tap(app: &mut App, key: KeyCode) {
    hold(app, key);
    release(app, key);
}

pub fn game_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

pub fn play_state(app: &App) -> Option<PlayState> {
    app.world()
        .get_resource::<State<PlayState>>()
        .map(|state| *state.get())
}

pub fn player(app: &mut App) -> Entity {
    app.world_mut()
        .query_filtered::<Entity, With<Player>>()
        .single(app.world())
}
