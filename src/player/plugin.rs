//! Player plugin - input polling, player sprite sync and the follow camera.

use bevy::prelude::*;

use super::components::{PlayerSprite, WeaponSprite};
use super::input::{read_keyboard_input, InputState};
use crate::core::FrameSet;
use crate::textures::TextureCache;
use crate::world::{to_world, Encounter};

/// Player plugin - handles keyboard input, animation frames and camera.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>()
            .add_systems(Update, read_keyboard_input.in_set(FrameSet::Input))
            .add_systems(
                Update,
                (sync_player_sprite, sync_weapon_sprite, camera_follow).in_set(FrameSet::Sync),
            );
    }
}

/// Move the player sprite and show the current animation frame.
fn sync_player_sprite(
    time: Res<Time>,
    encounter: Option<Res<Encounter>>,
    cache: Res<TextureCache>,
    mut query: Query<(&mut Transform, &mut Sprite), With<PlayerSprite>>,
) {
    let Some(encounter) = encounter else {
        return;
    };
    let player = &encounter.player;

    for (mut transform, mut sprite) in query.iter_mut() {
        transform.translation = to_world(player.unit.position, transform.translation.z);
        sprite.image = cache.get(player.animation.frame_key(time.elapsed()));
    }
}

/// Show the weapon during a swing, placed and rotated for the facing.
fn sync_weapon_sprite(
    encounter: Option<Res<Encounter>>,
    mut query: Query<(&mut Transform, &mut Visibility), With<WeaponSprite>>,
) {
    let Some(encounter) = encounter else {
        return;
    };
    let player = &encounter.player;
    let pose = player.weapon_pose();

    for (mut transform, mut visibility) in query.iter_mut() {
        *visibility = if player.weapon_visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };

        // Child transform: screen offset with y flipped, clockwise angle negated
        transform.translation = to_world(pose.offset, transform.translation.z);
        transform.rotation = Quat::from_rotation_z(-pose.angle_degrees.to_radians());
    }
}

/// Keep the camera centred on the player.
fn camera_follow(
    encounter: Option<Res<Encounter>>,
    mut camera: Query<&mut Transform, (With<Camera2d>, Without<PlayerSprite>, Without<WeaponSprite>)>,
) {
    let Some(encounter) = encounter else {
        return;
    };
    let target = to_world(encounter.player.unit.position, 0.0);

    for mut transform in camera.iter_mut() {
        transform.translation.x = target.x;
        transform.translation.y = target.y;
    }
}
