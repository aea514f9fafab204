//! World plugin - config loading, encounter setup and the per-frame step.

use std::time::Duration;

use bevy::prelude::*;

use super::config::{load_gameplay_config, GameplayConfig};
use super::encounter::Encounter;
use super::spawning::{self, ActorSprite, PickupSprite};
use crate::core::{EffectSpawn, FlashTween, FrameSet, GameEvent, GameState};
use crate::enemies::HealthBarSprite;
use crate::player::InputState;
use crate::textures::TextureCache;

/// World plugin - owns the `Encounter` resource and mirrors it into sprites.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_gameplay_config)
            .add_systems(OnEnter(GameState::InGame), setup_encounter)
            .add_systems(Update, step_encounter.in_set(FrameSet::Step));
    }
}

/// Build and populate the encounter, then spawn a sprite for everything in it.
pub fn setup_encounter(
    mut commands: Commands,
    config: Res<GameplayConfig>,
    cache: Res<TextureCache>,
) {
    let mut encounter = Encounter::new(&config);
    encounter.populate();

    spawning::spawn_arena(&mut commands, &cache, encounter.settings());
    spawning::spawn_player(&mut commands, &cache, &encounter.player);
    for enemy in encounter.enemies() {
        spawning::spawn_enemy(&mut commands, &cache, enemy);
    }
    for pickup in encounter.pickups() {
        spawning::spawn_pickup(&mut commands, &cache, pickup);
    }

    commands.insert_resource(encounter);
}

/// Advance the encounter by one frame and apply its report.
fn step_encounter(
    mut commands: Commands,
    time: Res<Time>,
    mut clock: Local<Duration>,
    input: Res<InputState>,
    encounter: Option<ResMut<Encounter>>,
    cache: Res<TextureCache>,
    mut game_events: EventWriter<GameEvent>,
    actor_sprites: Query<(Entity, &ActorSprite)>,
    bar_sprites: Query<(Entity, &HealthBarSprite)>,
    pickup_sprites: Query<(Entity, &PickupSprite)>,
) {
    let Some(mut encounter) = encounter else {
        return;
    };

    *clock += time.delta();
    let report = encounter.step(&input, *clock);

    for event in &report.events {
        game_events.send(*event);
    }

    for effect in &report.effects {
        match effect {
            EffectSpawn::Sprite(sprite) => spawning::spawn_effect(&mut commands, &cache, sprite),
            EffectSpawn::Flash(flash) => {
                if let Some((entity, _)) = actor_sprites.iter().find(|(_, a)| a.0 == flash.actor) {
                    commands.entity(entity).insert(FlashTween::new(*flash));
                }
            }
        }
    }

    for id in &report.removed_enemies {
        for (entity, _) in actor_sprites.iter().filter(|(_, a)| a.0 == *id) {
            commands.entity(entity).despawn_recursive();
        }
        for (entity, _) in bar_sprites.iter().filter(|(_, bar)| bar.owner == *id) {
            commands.entity(entity).despawn_recursive();
        }
    }

    for id in &report.dropped_pickups {
        if let Some(pickup) = encounter.pickup(*id) {
            spawning::spawn_pickup(&mut commands, &cache, pickup);
        }
    }

    for id in &report.collected_pickups {
        for (entity, _) in pickup_sprites.iter().filter(|(_, p)| p.0 == *id) {
            commands.entity(entity).despawn_recursive();
        }
    }
}
