//! Dialogue box at the bottom of the screen.

use bevy::prelude::*;

use crate::core::{PlayState, TEXT_BOX_HEIGHT};
use crate::rendering::{rgb, VisualConfig};
use crate::world::DialogueTarget;

/// Marker for the dialogue box root.
#[derive(Component)]
pub struct DialogueUi;

/// Marker for the message text.
#[derive(Component)]
pub struct DialogueText;

pub fn setup_dialogue_systems(app: &mut App) {
    app.add_systems(OnEnter(PlayState::Dialogue), spawn_dialogue_box)
        .add_systems(
            Update,
            update_dialogue_text
                .run_if(in_state(PlayState::Dialogue))
                .run_if(resource_changed::<DialogueTarget>),
        )
        .add_systems(OnExit(PlayState::Dialogue), cleanup_dialogue_box);
}

fn spawn_dialogue_box(
    mut commands: Commands,
    target: Res<DialogueTarget>,
    visuals: Res<VisualConfig>,
) {
    let message = target
        .0
        .as_ref()
        .map(|dialogue| dialogue.message.clone())
        .unwrap_or_default();

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(0.0),
                left: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Px(TEXT_BOX_HEIGHT),
                padding: UiRect::left(Val::Px(20.0)),
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(rgb(visuals.dialogue_color)),
            DialogueUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(message),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                DialogueText,
            ));
        });
}

fn update_dialogue_text(target: Res<DialogueTarget>, mut text_query: Query<&mut Text, With<DialogueText>>) {
    let Some(dialogue) = target.0.as_ref() else {
        return;
    };
    for mut text in text_query.iter_mut() {
        text.0 = dialogue.message.clone();
    }
}

fn cleanup_dialogue_box(mut commands: Commands, query: Query<Entity, With<DialogueUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
