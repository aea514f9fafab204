//! In-game HUD - health, experience, level and inventory readouts.
//!
//! The HUD listens for `GameEvent`s and re-reads the player when one arrives,
//! so it never polls player state on quiet frames.

use bevy::prelude::*;

use crate::core::{FrameSet, GameEvent, GameState};
use crate::inventory::{Inventory, ItemType};
use crate::player::Player;
use crate::world::Encounter;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for health bar fill.
#[derive(Component)]
pub struct HealthBarFill;

/// Marker for experience bar fill.
#[derive(Component)]
pub struct ExperienceBarFill;

/// Marker for the "Level N" text.
#[derive(Component)]
pub struct LevelText;

/// Marker for the inventory summary text.
#[derive(Component)]
pub struct InventoryText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(Update, refresh_hud.in_set(FrameSet::Sync));
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // HUD root container (top-left corner)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Start,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(16.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_bar(parent, "Health", Color::srgb(0.8, 0.2, 0.2), HealthBarFill);
            spawn_bar(parent, "XP", Color::srgb(0.3, 0.5, 0.9), ExperienceBarFill);

            parent.spawn((
                Text::new("Level 1"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.4)),
                LevelText,
            ));

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    margin: UiRect::top(Val::Px(6.0)),
                    ..default()
                },
                InventoryText,
            ));
        });
}

/// Helper to spawn a labelled status bar.
fn spawn_bar<M: Component>(parent: &mut ChildBuilder, label: &str, color: Color, bar_marker: M) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            margin: UiRect::bottom(Val::Px(5.0)),
            ..default()
        })
        .with_children(|bar_parent| {
            // Label
            bar_parent.spawn((
                Text::new(label),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    width: Val::Px(60.0),
                    ..default()
                },
            ));

            // Bar background
            bar_parent
                .spawn((
                    Node {
                        width: Val::Px(150.0),
                        height: Val::Px(12.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    // Bar fill
                    bg.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(color),
                        bar_marker,
                    ));
                });
        });
}

/// Percentage of `value` over `max`, clamped to `0..=100`.
pub fn fill_percent(value: f32, max: f32) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// One-line inventory summary, e.g. `Gold 30 | Potions 2/1 | Slots 4/20`.
pub fn inventory_summary(inventory: &Inventory) -> String {
    format!(
        "Gold {} | Potions {}/{} | Slots {}/{}",
        inventory.gold(),
        inventory.total_quantity(ItemType::HealthPotion),
        inventory.total_quantity(ItemType::ManaPotion),
        inventory.used_slots(),
        inventory.capacity()
    )
}

/// Re-read the player whenever it announces a change.
fn refresh_hud(
    mut events: EventReader<GameEvent>,
    encounter: Option<Res<Encounter>>,
    mut health_bar: Query<&mut Node, (With<HealthBarFill>, Without<ExperienceBarFill>)>,
    mut xp_bar: Query<&mut Node, (With<ExperienceBarFill>, Without<HealthBarFill>)>,
    mut level_text: Query<&mut Text, (With<LevelText>, Without<InventoryText>)>,
    mut inventory_text: Query<&mut Text, (With<InventoryText>, Without<LevelText>)>,
) {
    let Some(encounter) = encounter else {
        return;
    };

    let changed = events.read().count() > 0;
    if !changed && !encounter.is_added() {
        return;
    }

    let player: &Player = &encounter.player;

    if let Ok(mut bar) = health_bar.get_single_mut() {
        bar.width = Val::Percent(fill_percent(player.health as f32, player.max_health as f32));
    }
    if let Ok(mut bar) = xp_bar.get_single_mut() {
        bar.width = Val::Percent(fill_percent(
            player.experience as f32,
            player.experience_to_next_level as f32,
        ));
    }
    if let Ok(mut text) = level_text.get_single_mut() {
        text.0 = format!("Level {}", player.level);
    }
    if let Ok(mut text) = inventory_text.get_single_mut() {
        text.0 = inventory_summary(&player.inventory);
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
