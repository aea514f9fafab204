//! Enemy plugin - keeps enemy and health-bar sprites in line with the encounter.

use bevy::prelude::*;

use super::components::{BarPart, EnemySprite, HealthBarSprite};
use crate::core::FrameSet;
use crate::units::Direction;
use crate::world::{to_world, ActorSprite, Encounter};

/// Enemy plugin - sprite sync for enemies and their health bars.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (sync_enemy_sprites, sync_health_bars).in_set(FrameSet::Sync),
        );
    }
}

/// Move enemy sprites and face them toward their velocity.
fn sync_enemy_sprites(
    encounter: Option<Res<Encounter>>,
    mut query: Query<(&ActorSprite, &mut Transform, &mut Sprite), With<EnemySprite>>,
) {
    let Some(encounter) = encounter else {
        return;
    };

    for (actor, mut transform, mut sprite) in query.iter_mut() {
        let Some(enemy) = encounter.enemy(actor.0) else {
            continue;
        };

        transform.translation = to_world(enemy.unit.position, transform.translation.z);
        sprite.flip_x = enemy.unit.facing == Direction::Left;
    }
}

/// Place, size and show or hide each bar from the enemy's current layout.
fn sync_health_bars(
    encounter: Option<Res<Encounter>>,
    mut query: Query<(&HealthBarSprite, &mut Transform, &mut Sprite, &mut Visibility)>,
) {
    let Some(encounter) = encounter else {
        return;
    };

    for (bar, mut transform, mut sprite, mut visibility) in query.iter_mut() {
        let layout = encounter.enemy(bar.owner).and_then(|enemy| enemy.health_bar());

        let Some(layout) = layout else {
            *visibility = Visibility::Hidden;
            continue;
        };

        let rect = match bar.part {
            BarPart::Background => layout.background,
            BarPart::Fill => layout.fill,
        };

        transform.translation = to_world(rect.min, transform.translation.z);
        sprite.custom_size = Some(rect.size);
        sprite.color = rect.color;
        *visibility = Visibility::Visible;
    }
}
