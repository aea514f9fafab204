//! Sprite spawning for the arena, actors, pickups and effects.
//!
//! Gameplay runs in screen space with y growing downward. Sprites live in
//! Bevy world space, so every position goes through `to_world`.

use std::time::Duration;

use bevy::prelude::*;
use bevy::sprite::Anchor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::EncounterSettings;
use super::encounter::{Pickup, PickupId};
use crate::core::{ActorId, EffectSprite, FadeTween};
use crate::enemies::{BarPart, Enemy, EnemySprite, HealthBarSprite};
use crate::player::{Player, PlayerSprite, WeaponSprite};
use crate::textures::{keys, TextureCache};
use crate::units::Damageable;

pub const TILE_DEPTH: f32 = 0.0;
pub const PICKUP_DEPTH: f32 = 1.0;
pub const ENEMY_DEPTH: f32 = 2.0;
pub const PLAYER_DEPTH: f32 = 3.0;
pub const HEALTH_BAR_DEPTH: f32 = 10.0;

/// Links a sprite to the actor it draws.
#[derive(Component, Debug, Clone, Copy)]
pub struct ActorSprite(pub ActorId);

/// Links a sprite to the pickup it draws.
#[derive(Component, Debug, Clone, Copy)]
pub struct PickupSprite(pub PickupId);

/// Marker for floor and wall tiles.
#[derive(Component)]
pub struct ArenaTile;

/// Screen-space position to a world translation at `depth`.
pub fn to_world(position: Vec2, depth: f32) -> Vec3 {
    Vec3::new(position.x, -position.y, depth)
}

/// Floor tiles with a one-tile wall border. Stone patches are placed from
/// the encounter seed so the layout is stable between runs.
pub fn spawn_arena(commands: &mut Commands, cache: &TextureCache, settings: &EncounterSettings) {
    let mut rng = StdRng::seed_from_u64(settings.seed.wrapping_add(1));
    let stone_ratio = settings.stone_ratio.clamp(0.0, 1.0);
    let last_x = settings.width_tiles.saturating_sub(1);
    let last_y = settings.height_tiles.saturating_sub(1);

    for y in 0..settings.height_tiles {
        for x in 0..settings.width_tiles {
            let key = if x == 0 || y == 0 || x == last_x || y == last_y {
                keys::WALL_TILE
            } else if rng.gen_bool(stone_ratio) {
                keys::STONE_TILE
            } else {
                keys::GRASS_TILE
            };

            let centre = (Vec2::new(x as f32, y as f32) + 0.5) * settings.tile_size;
            commands.spawn((
                Sprite {
                    image: cache.get(key),
                    custom_size: Some(Vec2::splat(settings.tile_size)),
                    ..default()
                },
                Transform::from_translation(to_world(centre, TILE_DEPTH)),
                ArenaTile,
            ));
        }
    }

    info!(
        "Spawned {}x{} arena",
        settings.width_tiles, settings.height_tiles
    );
}

/// Player body with the weapon as a hidden child.
pub fn spawn_player(commands: &mut Commands, cache: &TextureCache, player: &Player) {
    commands
        .spawn((
            Sprite::from_image(cache.get(player.animation.frame_key(Duration::ZERO))),
            Transform::from_translation(to_world(player.unit.position, PLAYER_DEPTH)),
            PlayerSprite,
            ActorSprite(player.id()),
        ))
        .with_children(|parent| {
            parent.spawn((
                Sprite::from_image(cache.get(keys::WEAPON)),
                Transform::from_xyz(0.0, 0.0, 0.5),
                Visibility::Hidden,
                WeaponSprite,
            ));
        });
}

/// Enemy body plus its two health-bar sprites.
pub fn spawn_enemy(commands: &mut Commands, cache: &TextureCache, enemy: &Enemy) {
    let id = enemy.id();

    commands.spawn((
        Sprite::from_image(cache.get(keys::ENEMY)),
        Transform::from_translation(to_world(enemy.unit.position, ENEMY_DEPTH)),
        EnemySprite,
        ActorSprite(id),
    ));

    for (part, offset) in [(BarPart::Background, 0.0), (BarPart::Fill, 0.1)] {
        commands.spawn((
            Sprite {
                anchor: Anchor::TopLeft,
                ..default()
            },
            Transform::from_translation(to_world(enemy.unit.position, HEALTH_BAR_DEPTH + offset)),
            Visibility::Hidden,
            HealthBarSprite { owner: id, part },
        ));
    }
}

/// Item sprite with a soft glow behind it.
pub fn spawn_pickup(commands: &mut Commands, cache: &TextureCache, pickup: &Pickup) {
    commands
        .spawn((
            Sprite::from_image(cache.get(pickup.item.item_type.texture_key())),
            Transform::from_translation(to_world(pickup.position, PICKUP_DEPTH)),
            PickupSprite(pickup.id),
        ))
        .with_children(|parent| {
            parent.spawn((
                Sprite {
                    image: cache.get(keys::ITEM_GLOW),
                    color: Color::WHITE.with_alpha(0.5),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, -0.1).with_scale(Vec3::splat(0.75)),
            ));
        });
}

/// Transient effect sprite that fades out and despawns itself.
pub fn spawn_effect(commands: &mut Commands, cache: &TextureCache, effect: &EffectSprite) {
    let color = effect.tint.unwrap_or(Color::WHITE).with_alpha(effect.alpha);

    commands.spawn((
        Sprite {
            image: cache.get(effect.texture),
            color,
            ..default()
        },
        Transform::from_translation(to_world(effect.position, effect.depth)),
        FadeTween::new(effect.alpha, effect.fade),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_y_is_flipped() {
        assert_eq!(to_world(Vec2::new(10.0, 20.0), 3.0), Vec3::new(10.0, -20.0, 3.0));
    }
}
