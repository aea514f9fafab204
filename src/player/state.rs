//! Player stats, damage, invulnerability, leveling and item handling.

use std::time::Duration;

use bevy::prelude::*;

use super::components::{PlayerAnimation, PlayerTuning};
use crate::core::{ActorId, EffectSprite, EffectSpawn, Expiry, Fade, Flash, FrameContext, GameEvent};
use crate::inventory::{Inventory, ItemData, ItemType};
use crate::textures::keys;
use crate::units::{Damageable, Mobile, Unit};

/// Depth of transient effects spawned around the player.
const EFFECT_DEPTH: f32 = 9.0;

/// The player character.
#[derive(Debug, Clone)]
pub struct Player {
    id: ActorId,
    pub unit: Unit,

    // Stats
    pub health: i32,
    pub max_health: i32,
    pub attack_damage: i32,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next_level: u32,

    // State
    pub is_attacking: bool,
    pub is_invulnerable: bool,
    pub weapon_visible: bool,
    pub animation: PlayerAnimation,
    pub(super) last_attack_time: Option<Duration>,

    pub inventory: Inventory,
    pub(super) tuning: PlayerTuning,
}

impl Player {
    pub fn new(id: ActorId, position: Vec2, tuning: &PlayerTuning) -> Self {
        let mut unit = Unit::new(position);
        unit.set_body_size(20.0, 30.0);
        unit.set_body_offset(6.0, 10.0);
        unit.set_move_speed(tuning.move_speed);

        Self {
            id,
            unit,
            health: tuning.max_health,
            max_health: tuning.max_health,
            attack_damage: tuning.attack_damage,
            level: 1,
            experience: 0,
            experience_to_next_level: tuning.first_level_threshold,
            is_attacking: false,
            is_invulnerable: false,
            weapon_visible: false,
            animation: PlayerAnimation::default(),
            last_attack_time: None,
            inventory: Inventory::new(tuning.inventory_slots),
            tuning: tuning.clone(),
        }
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    pub fn last_attack_time(&self) -> Option<Duration> {
        self.last_attack_time
    }

    /// Take a hit. Ignored while invulnerable.
    pub fn take_damage(&mut self, amount: i32, ctx: &mut FrameContext) {
        if self.is_invulnerable {
            return;
        }

        self.health = (self.health - amount.max(0)).max(0);

        ctx.spawn(EffectSpawn::Sprite(
            EffectSprite::new(keys::HIT_EFFECT, self.unit.position, Fade::out(1.5, 300))
                .with_alpha(0.7)
                .with_depth(EFFECT_DEPTH),
        ));
        ctx.spawn(EffectSpawn::Flash(Flash::new(self.id, 0.5, 100, 3)));

        ctx.emit(GameEvent::HealthChanged(self.id));
    }

    /// Start (or restart) the invulnerability window, or end it early.
    pub fn set_invulnerable(&mut self, invulnerable: bool, ctx: &mut FrameContext) {
        self.is_invulnerable = invulnerable;

        if invulnerable {
            ctx.schedule_in(self.id, Expiry::Invulnerability, self.tuning.invulnerability());
        } else {
            ctx.cancel(self.id, Expiry::Invulnerability);
        }
    }

    /// Add experience; levels up at most once per call.
    pub fn gain_experience(&mut self, amount: u32, ctx: &mut FrameContext) {
        self.experience = self.experience.saturating_add(amount);

        if self.experience >= self.experience_to_next_level {
            self.level_up(ctx);
        }

        ctx.emit(GameEvent::ExperienceChanged(self.id));
    }

    /// Advance one level, keeping experience carried past the threshold.
    pub fn level_up(&mut self, ctx: &mut FrameContext) {
        self.level += 1;
        self.experience = self.experience.saturating_sub(self.experience_to_next_level);

        self.max_health += self.tuning.health_per_level;
        self.health = self.max_health;
        self.attack_damage += self.tuning.damage_per_level;
        self.unit.move_speed += self.tuning.speed_per_level;

        self.experience_to_next_level =
            (self.experience_to_next_level as f32 * self.tuning.threshold_growth).floor() as u32;

        info!("Player reached level {}", self.level);

        ctx.spawn(EffectSpawn::Sprite(
            EffectSprite::new(keys::ATTACK_EFFECT, self.unit.position, Fade::out(2.0, 500))
                .with_tint(Color::srgb(1.0, 1.0, 0.0))
                .with_alpha(0.7)
                .with_depth(EFFECT_DEPTH),
        ));

        ctx.emit(GameEvent::LevelChanged(self.id));
        ctx.emit(GameEvent::HealthChanged(self.id));
    }

    /// Pick up an item. Returns `false` when the inventory is full; the
    /// caller then leaves the world pickup in place.
    pub fn collect_item(&mut self, item: ItemData, ctx: &mut FrameContext) -> bool {
        if !self.inventory.add_item(item) {
            debug!("Inventory full, left {:?} on the ground", item.item_type);
            return false;
        }

        self.apply_item_effects(item, ctx);

        ctx.spawn(EffectSpawn::Sprite(
            EffectSprite::new(keys::PICKUP_EFFECT, self.unit.position, Fade::out(1.5, 300))
                .with_alpha(0.7)
                .with_depth(EFFECT_DEPTH),
        ));
        ctx.emit(GameEvent::InventoryChanged(self.id));

        true
    }

    /// Use the item in `slot`. Consumables are removed one at a time.
    /// Returns `false` for an empty slot.
    pub fn use_item(&mut self, slot: usize, ctx: &mut FrameContext) -> bool {
        let Some(item) = self.inventory.get_item(slot).map(|stack| stack.data()) else {
            return false;
        };

        self.apply_item_effects(item, ctx);

        if item.item_type.is_consumable() {
            self.inventory.remove_item(slot, 1);
            ctx.emit(GameEvent::InventoryChanged(self.id));
        }

        true
    }

    fn apply_item_effects(&mut self, item: ItemData, ctx: &mut FrameContext) {
        match item.item_type {
            ItemType::HealthPotion => {
                let healed = self.health.saturating_add(item.value.min(i32::MAX as u32) as i32);
                self.health = healed.min(self.max_health);
                ctx.emit(GameEvent::HealthChanged(self.id));
            }
            // Mana has no pool yet; gold and gear are only stored.
            ItemType::ManaPotion | ItemType::Gold | ItemType::Weapon | ItemType::Armor => {}
        }
    }

    /// Fire a scheduled expiry.
    pub fn expire(&mut self, expiry: Expiry) {
        match expiry {
            Expiry::AttackWindow => {
                self.is_attacking = false;
                self.weapon_visible = false;
            }
            Expiry::Invulnerability => self.is_invulnerable = false,
            Expiry::KnockbackStop => {}
        }
    }
}

impl Mobile for Player {
    fn unit(&self) -> &Unit {
        &self.unit
    }

    fn unit_mut(&mut self) -> &mut Unit {
        &mut self.unit
    }
}

impl Damageable for Player {
    fn id(&self) -> ActorId {
        self.id
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn max_health(&self) -> i32 {
        self.max_health
    }

    /// The player is never knocked back, so `source` is ignored.
    fn apply_damage(&mut self, amount: i32, _source: Option<Vec2>, ctx: &mut FrameContext) {
        self.take_damage(amount, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player() -> Player {
        Player::new(ActorId(0), Vec2::new(100.0, 100.0), &PlayerTuning::default())
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn defaults() {
        let player = player();
        assert_eq!(player.health, 100);
        assert_eq!(player.attack_damage, 20);
        assert_eq!(player.level, 1);
        assert_eq!(player.experience_to_next_level, 100);
        assert_eq!(player.inventory.capacity(), 20);
        assert_eq!(player.unit.body.size, Vec2::new(20.0, 30.0));
    }

    #[test]
    fn damage_emits_health_changed_and_flashes() {
        let mut player = player();
        let mut ctx = FrameContext::new();

        player.take_damage(30, &mut ctx);

        assert_eq!(player.health, 70);
        assert_eq!(ctx.events(), &[GameEvent::HealthChanged(ActorId(0))]);
        assert!(ctx
            .effects()
            .iter()
            .any(|fx| matches!(fx, EffectSpawn::Flash(flash) if flash.repeat == 3)));
        assert_eq!(player.unit.velocity, Vec2::ZERO);
    }

    #[test]
    fn invulnerable_player_ignores_damage_until_window_ends() {
        let mut player = player();
        let mut ctx = FrameContext::at(ms(2000));

        player.set_invulnerable(true, &mut ctx);
        player.take_damage(50, &mut ctx);
        assert_eq!(player.health, 100);
        assert!(ctx.events().is_empty());

        for (id, expiry) in ctx.advance(ms(2999)) {
            assert_eq!(id, ActorId(0));
            player.expire(expiry);
        }
        assert!(player.is_invulnerable);

        for (_, expiry) in ctx.advance(ms(3000)) {
            player.expire(expiry);
        }
        assert!(!player.is_invulnerable);

        player.take_damage(50, &mut ctx);
        assert_eq!(player.health, 50);
    }

    #[test]
    fn restarting_invulnerability_cancels_pending_expiry() {
        let mut player = player();
        let mut ctx = FrameContext::at(ms(0));
        player.set_invulnerable(true, &mut ctx);

        ctx.advance(ms(600));
        player.set_invulnerable(true, &mut ctx);

        for (_, expiry) in ctx.advance(ms(1000)) {
            player.expire(expiry);
        }
        assert!(player.is_invulnerable);

        for (_, expiry) in ctx.advance(ms(1600)) {
            player.expire(expiry);
        }
        assert!(!player.is_invulnerable);
    }

    #[test]
    fn exact_threshold_levels_up_cleanly() {
        let mut player = player();
        let mut ctx = FrameContext::new();

        player.gain_experience(100, &mut ctx);

        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 0);
        assert_eq!(player.max_health, 120);
        assert_eq!(player.health, player.max_health);
        assert_eq!(player.attack_damage, 25);
        assert!((player.unit.move_speed - 110.0).abs() < f32::EPSILON);
        assert_eq!(player.experience_to_next_level, 150);
        assert_eq!(
            ctx.events(),
            &[
                GameEvent::LevelChanged(ActorId(0)),
                GameEvent::HealthChanged(ActorId(0)),
                GameEvent::ExperienceChanged(ActorId(0)),
            ]
        );
    }

    #[test]
    fn level_up_keeps_carry_over_and_does_not_cascade() {
        let mut player = player();
        let mut ctx = FrameContext::new();

        player.gain_experience(400, &mut ctx);

        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 300);
        assert_eq!(player.experience_to_next_level, 150);
    }

    #[test]
    fn experience_saturates_instead_of_overflowing() {
        let mut player = player();
        let mut ctx = FrameContext::new();
        player.experience_to_next_level = u32::MAX;
        player.experience = u32::MAX - 10;

        player.gain_experience(1_000, &mut ctx);

        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 0);
    }

    #[test]
    fn level_up_heals_fully() {
        let mut player = player();
        let mut ctx = FrameContext::new();
        player.take_damage(90, &mut ctx);

        player.level_up(&mut ctx);

        assert_eq!(player.health, 120);
    }

    #[test]
    fn collect_item_on_full_inventory_changes_nothing() {
        let tuning = PlayerTuning {
            inventory_slots: 1,
            ..PlayerTuning::default()
        };
        let mut player = Player::new(ActorId(0), Vec2::ZERO, &tuning);
        let mut ctx = FrameContext::new();
        assert!(player.collect_item(ItemData::new(ItemType::Weapon, 3), &mut ctx));
        let before = player.inventory.clone();
        ctx.drain_events();
        ctx.drain_effects();

        assert!(!player.collect_item(ItemData::new(ItemType::Armor, 3), &mut ctx));

        assert_eq!(player.inventory, before);
        assert!(ctx.events().is_empty());
        assert!(ctx.effects().is_empty());
    }

    #[test]
    fn collect_item_stores_and_announces() {
        let mut player = player();
        let mut ctx = FrameContext::new();
        let gold = ItemData::new(ItemType::Gold, 10);

        assert!(player.collect_item(gold, &mut ctx));
        assert!(player.collect_item(gold, &mut ctx));

        assert_eq!(player.inventory.total_quantity(ItemType::Gold), 2);
        assert_eq!(
            ctx.events().last(),
            Some(&GameEvent::InventoryChanged(ActorId(0)))
        );
    }

    #[test]
    fn collecting_a_health_potion_heals_immediately() {
        let mut player = player();
        let mut ctx = FrameContext::new();
        player.take_damage(40, &mut ctx);

        player.collect_item(ItemData::new(ItemType::HealthPotion, 25), &mut ctx);

        assert_eq!(player.health, 85);
    }

    #[test]
    fn use_item_on_empty_slot_is_a_no_op() {
        let mut player = player();
        let mut ctx = FrameContext::new();

        assert!(!player.use_item(0, &mut ctx));
        assert!(!player.use_item(500, &mut ctx));
        assert!(ctx.events().is_empty());
        assert_eq!(player.health, 100);
    }

    #[test]
    fn health_potion_never_overheals_and_is_consumed() {
        let mut player = player();
        let mut ctx = FrameContext::new();
        player.inventory.add_item(ItemData::new(ItemType::HealthPotion, 50));
        player.inventory.add_item(ItemData::new(ItemType::HealthPotion, 50));
        player.take_damage(10, &mut ctx);

        assert!(player.use_item(0, &mut ctx));

        assert_eq!(player.health, 100);
        assert_eq!(player.inventory.get_item(0).map(|s| s.quantity), Some(1));
    }

    #[test]
    fn gear_is_not_consumed_on_use() {
        let mut player = player();
        let mut ctx = FrameContext::new();
        player.inventory.add_item(ItemData::new(ItemType::Armor, 4));

        assert!(player.use_item(0, &mut ctx));

        assert!(player.inventory.get_item(0).is_some());
        assert!(ctx.events().is_empty());
    }

    proptest! {
        #[test]
        fn health_never_negative(amount in 0i32..10_000) {
            let mut player = player();
            let mut ctx = FrameContext::new();
            player.take_damage(amount, &mut ctx);

            prop_assert!(player.health >= 0);
            if amount >= 100 {
                prop_assert_eq!(player.health, 0);
            }
        }

        #[test]
        fn invulnerability_blocks_any_amount(amount in 1i32..10_000) {
            let mut player = player();
            let mut ctx = FrameContext::new();
            player.set_invulnerable(true, &mut ctx);
            player.take_damage(amount, &mut ctx);

            prop_assert_eq!(player.health, 100);
        }
    }
}
