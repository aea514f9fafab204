//! Dungeon Skirmish - Entry Point
//!
//! Controls:
//! - Arrows / WASD: Move
//! - Space: Attack
//! - 1-9: Use inventory slot

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins, pixel-art sampling
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Dungeon Skirmish".to_string(),
                        resolution: (800.0, 600.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .insert_resource(ClearColor(Color::srgb(0.08, 0.07, 0.06)))

        // Our game plugin
        .add_plugins(dungeon_skirmish::DungeonPlugin)

        .run();
}
