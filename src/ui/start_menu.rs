//! Title screen with the controls and the start and quit buttons.

use bevy::prelude::*;

use crate::core::{key_label, GameKey, GameState, KeyBindings, StartGame};
use crate::player::Direction;
use crate::rendering::{rgb, VisualConfig};

/// Marker for the title screen root.
#[derive(Component)]
pub struct StartMenuUi;

/// What a title screen button does.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Quit,
}

/// Space between the two buttons.
const BUTTON_GAP: f32 = 40.0;

/// Controls listed on the title screen, in display order.
const CONTROLS: [(&str, &[GameKey]); 5] = [
    (
        "move",
        &[
            GameKey::Move(Direction::Up),
            GameKey::Move(Direction::Down),
            GameKey::Move(Direction::Left),
            GameKey::Move(Direction::Right),
        ],
    ),
    ("use", &[GameKey::Action]),
    ("inventory", &[GameKey::Inventory]),
    ("close", &[GameKey::Cancel]),
    ("start", &[GameKey::Confirm]),
];

pub fn setup_start_menu_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::Start), spawn_start_menu)
        .add_systems(
            Update,
            (highlight_menu_buttons, press_menu_buttons).run_if(in_state(GameState::Start)),
        )
        .add_systems(OnExit(GameState::Start), cleanup_start_menu);
}

/// One line per control with every key bound to it, e.g. "Z / E: use".
/// Controls without a bound key are left out.
pub fn control_lines(bindings: &KeyBindings) -> Vec<String> {
    CONTROLS
        .iter()
        .filter_map(|(label, keys)| {
            let names: Vec<String> = bindings.keys_for(keys).map(key_label).collect();
            (!names.is_empty()).then(|| format!("{}: {}", names.join(" / "), label))
        })
        .collect()
}

fn spawn_start_menu(mut commands: Commands, visuals: Res<VisualConfig>, bindings: Res<KeyBindings>) {
    let text_color = rgb(visuals.menu_text_color);

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(rgb(visuals.menu_background_color)),
            StartMenuUi,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("LOCKED ROOMS"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(rgb(visuals.menu_title_color)),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            for line in control_lines(&bindings) {
                root.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(text_color),
                ));
            }

            // Buttons side by side below the controls
            root.spawn(Node {
                margin: UiRect::top(Val::Px(32.0)),
                column_gap: Val::Px(BUTTON_GAP),
                ..default()
            })
            .with_children(|row| {
                for (label, action) in [("Start", MenuAction::Start), ("Quit", MenuAction::Quit)] {
                    row.spawn((
                        Button,
                        Node {
                            width: Val::Px(160.0),
                            height: Val::Px(44.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        BackgroundColor(rgb(visuals.button_color)),
                        action,
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(label),
                            TextFont {
                                font_size: 22.0,
                                ..default()
                            },
                            TextColor(text_color),
                        ));
                    });
                }
            });
        });
}

/// Recolor buttons as the pointer moves over and presses them.
fn highlight_menu_buttons(
    visuals: Res<VisualConfig>,
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<MenuAction>)>,
) {
    for (interaction, mut background) in buttons.iter_mut() {
        let color = match interaction {
            Interaction::Pressed => visuals.button_pressed_color,
            Interaction::Hovered => visuals.button_hovered_color,
            Interaction::None => visuals.button_color,
        };
        background.0 = rgb(color);
    }
}

/// Start goes through the same request as the confirm key.
fn press_menu_buttons(
    buttons: Query<(&Interaction, &MenuAction), Changed<Interaction>>,
    mut start: EventWriter<StartGame>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, action) in buttons.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match action {
            MenuAction::Start => {
                start.send(StartGame);
            }
            MenuAction::Quit => {
                info!("Quit from the title screen");
                exit.send(AppExit::Success);
            }
        }
    }
}

fn cleanup_start_menu(mut commands: Commands, query: Query<Entity, With<StartMenuUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_controls_list_every_binding() {
        let lines = control_lines(&KeyBindings::default());
        assert_eq!(
            lines,
            vec![
                "Up / Down / Left / Right / W / S / A / D: move".to_string(),
                "Z / E: use".to_string(),
                "C / I: inventory".to_string(),
                "X / Escape: close".to_string(),
                "Enter / Space: start".to_string(),
            ]
        );
    }

    #[test]
    fn unbound_controls_are_skipped() {
        let bindings = KeyBindings::new(vec![(KeyCode::KeyQ, GameKey::Action)]);
        assert_eq!(control_lines(&bindings), vec!["Q: use".to_string()]);
    }
}
