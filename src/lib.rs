//! Dungeon Skirmish - a top-down 2D action game in Bevy.
//!
//! The player walks a tiled arena, swings a sword at chasing enemies, levels
//! up from the experience they drop and collects items into an inventory.
//!
//! # Architecture
//!
//! Gameplay rules live in plain structs (`Player`, `Enemy`, `Encounter`) that
//! are stepped with an explicit `FrameContext`, so they run and test without
//! an `App`. Plugins mirror that state into sprites and UI:
//!
//! - **Core**: Game states, `GameEvent`, frame ordering, effect tweens
//! - **Units**: Shared movement body and the actor capabilities
//! - **Player**: Input, movement, attacks, leveling, items
//! - **Enemies**: Chase/attack AI, knockback, health-bar overlay
//! - **Inventory**: Slots and item stacks
//! - **Textures**: Texture keys and procedural fallbacks
//! - **World**: Gameplay config, the encounter and its sprites
//! - **Scenes**: Preload and boot screens
//! - **UI**: HUD

pub mod core;
pub mod enemies;
pub mod inventory;
pub mod player;
pub mod scenes;
pub mod textures;
pub mod ui;
pub mod units;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct DungeonPlugin;

impl Plugin for DungeonPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Preload and boot screens
            .add_plugins(scenes::ScenesPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
