//! Headless run of the state machine: start screen, gameplay, inventory.

mod common;

use bevy::prelude::*;
use bevy_rapier2d::prelude::KinematicCharacterController;

use common::{app_with, game_state, hold, play_state, release, step, tap};
use locked_rooms::core::{GameConfig, GameState, PlayState, StartGame};
use locked_rooms::player::{Direction, Motion, Player, UseIntent};

fn app() -> App {
    app_with(())
}

/// Enter gameplay and add a bare player that is already moving diagonally.
fn playing_with_player(app: &mut App) -> Entity {
    tap(app, KeyCode::Enter);
    step(app);

    let mut motion = Motion::default();
    motion.press(Direction::Right);
    motion.press(Direction::Up);
    let player = app
        .world_mut()
        .spawn((
            Player,
            motion,
            UseIntent::default(),
            KinematicCharacterController::default(),
        ))
        .id();
    step(app);
    player
}

fn intent(app: &App, player: Entity) -> bool {
    app.world().get::<UseIntent>(player).unwrap().active
}

#[test]
fn starts_on_the_title_screen() {
    let app = app();
    assert_eq!(game_state(&app), GameState::Start);
    assert_eq!(play_state(&app), None);
}

#[test]
fn game_config_is_read_during_startup() {
    let app = app();
    let bundled = GameConfig::parse(include_str!("../assets/data/config/game_config.ron")).unwrap();
    assert_eq!(app.world().resource::<GameConfig>(), &bundled);
}

#[test]
fn confirm_enters_gameplay() {
    let mut app = app();
    tap(&mut app, KeyCode::Enter);
    step(&mut app);
    assert_eq!(game_state(&app), GameState::InGame);
    assert_eq!(play_state(&app), Some(PlayState::Playing));
}

#[test]
fn start_request_enters_gameplay() {
    let mut app = app();
    app.world_mut().send_event(StartGame);
    step(&mut app);
    step(&mut app);
    assert_eq!(game_state(&app), GameState::InGame);
}

#[test]
fn inventory_opens_halted_and_closes() {
    let mut app = app();
    let player = playing_with_player(&mut app);
    assert!(app.world().get::<Motion>(player).unwrap().is_moving());

    tap(&mut app, KeyCode::KeyC);
    step(&mut app);
    assert_eq!(play_state(&app), Some(PlayState::Inventory));
    assert!(!app.world().get::<Motion>(player).unwrap().is_moving());

    // Movement keys do nothing while the panel is open
    tap(&mut app, KeyCode::ArrowLeft);
    assert!(!app.world().get::<Motion>(player).unwrap().is_moving());

    tap(&mut app, KeyCode::KeyX);
    step(&mut app);
    assert_eq!(play_state(&app), Some(PlayState::Playing));
    assert_eq!(game_state(&app), GameState::InGame);
}

#[test]
fn action_released_inside_the_inventory_does_not_stay_set() {
    let mut app = app();
    let player = playing_with_player(&mut app);

    hold(&mut app, KeyCode::KeyZ);
    assert!(intent(&app, player));

    tap(&mut app, KeyCode::KeyC);
    step(&mut app);
    assert_eq!(play_state(&app), Some(PlayState::Inventory));

    // The release happens while the panel is open and is never read
    release(&mut app, KeyCode::KeyZ);
    step(&mut app);

    tap(&mut app, KeyCode::KeyX);
    step(&mut app);
    assert_eq!(play_state(&app), Some(PlayState::Playing));
    assert!(!intent(&app, player));
}
