//! The running encounter: one player, the enemies and the loose pickups.
//!
//! `Encounter::step` is the whole game loop for one frame. It owns the
//! `FrameContext`, so everything it does is deterministic for a given input
//! sequence, timestamps and seed.

use std::time::Duration;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{EncounterSettings, GameplayConfig};
use crate::core::{ActorId, EffectSpawn, EffectSprite, Fade, FrameContext, GameEvent};
use crate::enemies::{Enemy, EnemyStats, HealthBarStyle};
use crate::inventory::{ItemData, ItemType};
use crate::player::{InputState, Player};
use crate::textures::keys;
use crate::units::{Actor, Damageable};

const PLAYER_ID: ActorId = ActorId(0);

/// Longest time integrated in one step, so a stalled frame cannot tunnel
/// actors through the arena.
const MAX_STEP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickupId(pub u32);

/// An item lying in the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct Pickup {
    pub id: PickupId,
    pub position: Vec2,
    pub item: ItemData,
}

/// What changed during one step, for the host to mirror.
#[derive(Debug, Default)]
pub struct FrameReport {
    pub events: Vec<GameEvent>,
    pub effects: Vec<EffectSpawn>,
    pub removed_enemies: Vec<ActorId>,
    pub dropped_pickups: Vec<PickupId>,
    pub collected_pickups: Vec<PickupId>,
}

#[derive(Resource)]
pub struct Encounter {
    pub player: Player,
    enemies: Vec<Enemy>,
    pickups: Vec<Pickup>,
    ctx: FrameContext,
    settings: EncounterSettings,
    enemy_stats: EnemyStats,
    bar_style: HealthBarStyle,
    next_actor: u32,
    next_pickup: u32,
    rng: StdRng,
}

impl Encounter {
    /// Empty arena with the player in the middle.
    pub fn new(config: &GameplayConfig) -> Self {
        let settings = config.encounter.clone();
        let spawn = settings.arena_size() / 2.0;

        Self {
            player: Player::new(PLAYER_ID, spawn, &config.player),
            enemies: Vec::new(),
            pickups: Vec::new(),
            ctx: FrameContext::new(),
            rng: StdRng::seed_from_u64(settings.seed),
            settings,
            enemy_stats: config.enemy.clone(),
            bar_style: config.health_bar,
            next_actor: PLAYER_ID.0 + 1,
            next_pickup: 0,
        }
    }

    /// Scatter the configured number of enemies and pickups.
    pub fn populate(&mut self) {
        let player_position = self.player.unit.position;

        for _ in 0..self.settings.enemy_count {
            // Retry a few times to respect the safe radius, then accept
            let mut position = self.random_position();
            for _ in 0..16 {
                if position.distance(player_position) >= self.settings.safe_radius {
                    break;
                }
                position = self.random_position();
            }
            self.spawn_enemy(position);
        }

        for _ in 0..self.settings.pickup_count {
            let position = self.random_position();
            let item = self.random_item();
            self.spawn_pickup(position, item);
        }

        info!(
            "Encounter populated with {} enemies and {} pickups",
            self.enemies.len(),
            self.pickups.len()
        );
    }

    pub fn spawn_enemy(&mut self, position: Vec2) -> ActorId {
        let id = ActorId(self.next_actor);
        self.next_actor += 1;

        self.enemies
            .push(Enemy::new(id, position, &self.enemy_stats, self.bar_style));
        debug!("Spawned enemy {:?} at {}", id, position);
        id
    }

    pub fn spawn_pickup(&mut self, position: Vec2, item: ItemData) -> PickupId {
        let id = PickupId(self.next_pickup);
        self.next_pickup += 1;

        self.pickups.push(Pickup { id, position, item });
        id
    }

    pub fn settings(&self) -> &EncounterSettings {
        &self.settings
    }

    pub fn now(&self) -> Duration {
        self.ctx.now()
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy(&self, id: ActorId) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id() == id)
    }

    pub fn enemy_mut(&mut self, id: ActorId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|enemy| enemy.id() == id)
    }

    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    pub fn pickup(&self, id: PickupId) -> Option<&Pickup> {
        self.pickups.iter().find(|pickup| pickup.id == id)
    }

    /// Mutable view of any actor by id.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<Actor<'_>> {
        if self.player.id() == id {
            return Some(Actor::Player(&mut self.player));
        }
        self.enemy_mut(id).map(Actor::Enemy)
    }

    /// Run one frame at timestamp `now`.
    pub fn step(&mut self, input: &InputState, now: Duration) -> FrameReport {
        let dt = now.saturating_sub(self.ctx.now()).min(MAX_STEP);
        let mut report = FrameReport::default();

        for (id, expiry) in self.ctx.advance(now) {
            if let Some(mut actor) = self.actor_mut(id) {
                actor.expire(expiry);
            }
        }

        if let Some(slot) = input.use_slot {
            self.player.use_item(slot, &mut self.ctx);
        }

        self.player.update(input, &mut self.ctx);

        let player_position = self.player.unit.position;
        for enemy in &mut self.enemies {
            enemy.follow_player(player_position, &mut self.ctx);
        }

        let swung = self
            .ctx
            .events()
            .iter()
            .any(|event| matches!(event, GameEvent::PlayerAttack(_)));
        if swung {
            self.resolve_attack();
        }

        self.remove_defeated(&mut report);
        self.integrate(dt);

        for enemy in &mut self.enemies {
            enemy.update();
        }

        self.collect_pickups(&mut report);

        report.events = self.ctx.drain_events();
        report.effects = self.ctx.drain_effects();
        report
    }

    /// Hit every enemy close enough to the swing centre.
    fn resolve_attack(&mut self) {
        let point = self.player.attack_point();
        let source = self.player.unit.position;
        let damage = self.player.attack_damage;
        let reach = self.settings.attack_reach;

        for enemy in &mut self.enemies {
            if enemy.unit.distance_to(point) <= reach {
                enemy.apply_damage(damage, Some(source), &mut self.ctx);
            }
        }
    }

    fn remove_defeated(&mut self, report: &mut FrameReport) {
        let (defeated, alive): (Vec<Enemy>, Vec<Enemy>) =
            self.enemies.drain(..).partition(|enemy| enemy.is_dead());
        self.enemies = alive;

        for enemy in defeated {
            let id = enemy.id();
            self.ctx.forget(id);
            report.removed_enemies.push(id);

            info!("Enemy {:?} defeated, +{} xp", id, enemy.experience_reward);
            self.player.gain_experience(enemy.experience_reward, &mut self.ctx);

            if self.rng.gen_bool(self.settings.drop_chance.clamp(0.0, 1.0)) {
                let gold = ItemData::new(ItemType::Gold, self.rng.gen_range(5..=15));
                let position = enemy.unit.position;
                report.dropped_pickups.push(self.spawn_pickup(position, gold));

                self.ctx.spawn(EffectSpawn::Sprite(
                    EffectSprite::new(keys::DROP_EFFECT, position, Fade::out(1.5, 500))
                        .with_alpha(0.8)
                        .with_depth(5.0),
                ));
            }
        }
    }

    fn integrate(&mut self, dt: Duration) {
        let (min, max) = self.settings.walkable_bounds();

        self.player.unit.integrate(dt);
        self.player.unit.position = self.player.unit.position.clamp(min, max);

        for enemy in &mut self.enemies {
            enemy.unit.integrate(dt);
            enemy.unit.position = enemy.unit.position.clamp(min, max);
        }
    }

    fn collect_pickups(&mut self, report: &mut FrameReport) {
        let position = self.player.unit.position;
        let radius = self.settings.pickup_radius;
        let mut index = 0;

        while index < self.pickups.len() {
            let pickup = &self.pickups[index];
            if pickup.position.distance(position) <= radius
                && self.player.collect_item(pickup.item, &mut self.ctx)
            {
                report.collected_pickups.push(self.pickups.remove(index).id);
            } else {
                index += 1;
            }
        }
    }

    fn random_position(&mut self) -> Vec2 {
        let (min, max) = self.settings.walkable_bounds();
        Vec2::new(
            self.rng.gen_range(min.x..=max.x),
            self.rng.gen_range(min.y..=max.y),
        )
    }

    fn random_item(&mut self) -> ItemData {
        let item_type = ItemType::ALL[self.rng.gen_range(0..ItemType::ALL.len())];
        let value = match item_type {
            ItemType::HealthPotion => 25,
            ItemType::ManaPotion => 20,
            ItemType::Gold => self.rng.gen_range(5..=15),
            ItemType::Weapon => 5,
            ItemType::Armor => 3,
        };
        ItemData::new(item_type, value)
    }
}
