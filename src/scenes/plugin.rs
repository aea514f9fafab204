//! Scenes plugin - the preload and boot screens ahead of gameplay.

use bevy::prelude::*;

use super::boot;
use super::preload::preload_textures;
use crate::core::GameState;

/// Scenes plugin - camera, texture preload and the boot screen.
pub struct ScenesPlugin;

impl Plugin for ScenesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(OnEnter(GameState::Preload), preload_textures);

        boot::setup_boot_systems(app);
    }
}

/// Single 2D camera shared by every scene.
fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
