//! Interacting with room objects and advancing their dialogue.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::data::{CurrentRoom, RoomRegistry};
use super::room::{DialogueAdvance, ObjectId};
use crate::core::{DoorUnlocked, GameConfig, GameKey, ItemPickedUp, KeyBindings, PlayState};
use crate::player::{reach_box, Inventory, Item, Motion, Player, UseIntent};

/// The object whose message the dialogue box shows. Only set while
/// `PlayState::Dialogue` is active.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct DialogueTarget(pub Option<ActiveDialogue>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDialogue {
    pub object: ObjectId,
    pub message: String,
}

/// Interact with every object the player touches while the action flag is set.
/// Any interaction stops the player and opens a dialogue for the last object.
pub fn check_interactions(
    config: Res<GameConfig>,
    current: Res<CurrentRoom>,
    mut registry: ResMut<RoomRegistry>,
    mut dialogue: ResMut<DialogueTarget>,
    mut next_state: ResMut<NextState<PlayState>>,
    mut door_unlocked: EventWriter<DoorUnlocked>,
    mut item_picked_up: EventWriter<ItemPickedUp>,
    mut player_query: Query<
        (
            &Transform,
            &UseIntent,
            &mut Motion,
            &mut Inventory,
            &mut KinematicCharacterController,
        ),
        With<Player>,
    >,
) {
    let Ok((transform, intent, mut motion, mut inventory, mut controller)) = player_query.get_single_mut() else {
        return;
    };
    if !intent.active {
        return;
    }
    let Some(room) = registry.get_mut(current.index) else {
        return;
    };

    let reach = reach_box(transform.translation.truncate(), config.interact_reach);
    let interactions = room.interact(&reach, &mut inventory);

    for interaction in &interactions {
        if interaction.granted_key {
            item_picked_up.send(ItemPickedUp {
                item: Item::Key,
                source: interaction.object,
            });
        }
        if interaction.unlocked {
            info!("Unlocked {:?} in room '{}'", interaction.object, room.name);
            if interaction.removed {
                door_unlocked.send(DoorUnlocked {
                    room: current.index,
                    object: interaction.object,
                });
            }
        }
    }

    let Some(last) = interactions.into_iter().last() else {
        return;
    };

    motion.halt();
    controller.translation = None;
    dialogue.0 = Some(ActiveDialogue {
        object: last.object,
        message: last.message,
    });
    next_state.set(PlayState::Dialogue);
}

/// Action shows the alternate message or closes the dialogue; cancel always
/// closes it.
pub fn dialogue_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    current: Res<CurrentRoom>,
    mut registry: ResMut<RoomRegistry>,
    mut dialogue: ResMut<DialogueTarget>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    for key in bindings.just_pressed(&keyboard) {
        match key {
            GameKey::Action => {
                let Some(active) = dialogue.0.as_mut() else {
                    next_state.set(PlayState::Playing);
                    return;
                };
                let advance = registry
                    .get_mut(current.index)
                    .map_or(DialogueAdvance::Closed, |room| room.advance_dialogue(active.object));
                match advance {
                    DialogueAdvance::Swapped(message) => active.message = message,
                    DialogueAdvance::Closed => {
                        next_state.set(PlayState::Playing);
                        return;
                    }
                }
            }
            GameKey::Cancel => {
                next_state.set(PlayState::Playing);
                return;
            }
            _ => {}
        }
    }
}

/// Leaving the dialogue forgets the target and consumes the action flag, so
/// the same object is not triggered again until the key is pressed anew.
pub fn end_dialogue(
    mut dialogue: ResMut<DialogueTarget>,
    mut player_query: Query<&mut UseIntent, With<Player>>,
) {
    dialogue.0 = None;
    for mut intent in player_query.iter_mut() {
        intent.active = false;
    }
}
