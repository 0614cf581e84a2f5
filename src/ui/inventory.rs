//! Inventory panel at the top of the screen.

use bevy::prelude::*;

use crate::core::{ElapsedTime, PlayState, TEXT_BOX_HEIGHT};
use crate::player::{Inventory, Item, Player};
use crate::rendering::{rgb, VisualConfig};

/// Height of the inventory panel.
const PANEL_HEIGHT: f32 = TEXT_BOX_HEIGHT / 2.0;
/// Side length of an item token.
const TOKEN_SIZE: f32 = 30.0;

/// Marker for the inventory panel root.
#[derive(Component)]
pub struct InventoryUi;

pub fn setup_inventory_systems(app: &mut App) {
    app.add_systems(OnEnter(PlayState::Inventory), spawn_inventory_panel)
        .add_systems(OnExit(PlayState::Inventory), cleanup_inventory_panel);
}

fn spawn_inventory_panel(
    mut commands: Commands,
    visuals: Res<VisualConfig>,
    elapsed: Res<ElapsedTime>,
    player_query: Query<&Inventory, With<Player>>,
) {
    let Ok(inventory) = player_query.get_single() else {
        return;
    };
    if inventory.len() > crate::player::INVENTORY_SLOTS {
        debug!("{} items held, only the first slots are drawn", inventory.len());
    }

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Px(PANEL_HEIGHT),
                ..default()
            },
            BackgroundColor(rgb(visuals.inventory_color)),
            InventoryUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("INVENTORY:"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::BLACK),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(20.0),
                    top: Val::Px(14.0),
                    ..default()
                },
            ));

            for (left, item) in inventory.slots() {
                let color = match item {
                    Item::Key => visuals.key_color,
                };
                parent.spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(left),
                        top: Val::Px((PANEL_HEIGHT - TOKEN_SIZE) / 2.0),
                        width: Val::Px(TOKEN_SIZE),
                        height: Val::Px(TOKEN_SIZE),
                        ..default()
                    },
                    BackgroundColor(rgb(color)),
                ));
            }

            parent.spawn((
                Text::new(format!("Time: {:.0}s", elapsed.seconds)),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::BLACK),
                Node {
                    position_type: PositionType::Absolute,
                    right: Val::Px(20.0),
                    top: Val::Px(16.0),
                    ..default()
                },
            ));
        });
}

fn cleanup_inventory_panel(mut commands: Commands, query: Query<Entity, With<InventoryUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
