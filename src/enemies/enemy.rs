//! Enemy stats, damage and knockback.

use std::time::Duration;

use bevy::prelude::*;

use super::components::{AiState, EnemyStats};
use super::health_bar::{HealthBar, HealthBarStyle};
use crate::core::{ActorId, EffectSprite, EffectSpawn, Expiry, Fade, Flash, FrameContext};
use crate::textures::keys;
use crate::units::{Damageable, Mobile, Unit};

/// A hostile unit that chases and swings at the player.
#[derive(Debug, Clone)]
pub struct Enemy {
    id: ActorId,
    pub unit: Unit,

    pub health: i32,
    pub max_health: i32,
    pub attack_damage: i32,
    pub aggro_range: f32,
    pub attack_range: f32,
    pub experience_reward: u32,

    pub ai_state: AiState,
    pub(super) last_attack_time: Option<Duration>,
    /// Set while a knockback impulse is running; chasing is suspended.
    pub(super) knocked_back: bool,

    pub(super) stats: EnemyStats,
    bar_style: HealthBarStyle,
    health_bar: Option<HealthBar>,
}

impl Enemy {
    pub fn new(id: ActorId, position: Vec2, stats: &EnemyStats, bar_style: HealthBarStyle) -> Self {
        let mut unit = Unit::new(position);
        unit.set_move_speed(stats.move_speed);
        unit.set_body_size(20.0, 30.0);
        unit.set_body_offset(6.0, 10.0);

        Self {
            id,
            unit,
            health: stats.max_health,
            max_health: stats.max_health,
            attack_damage: stats.damage,
            aggro_range: stats.aggro_range,
            attack_range: stats.attack_range,
            experience_reward: stats.experience_reward,
            ai_state: AiState::Idle,
            last_attack_time: None,
            knocked_back: false,
            stats: stats.clone(),
            bar_style,
            health_bar: None,
        }
    }

    pub fn stats(&self) -> &EnemyStats {
        &self.stats
    }

    /// Time of the last swing, `None` before the first one.
    pub fn last_attack_time(&self) -> Option<Duration> {
        self.last_attack_time
    }

    pub fn is_knocked_back(&self) -> bool {
        self.knocked_back
    }

    /// Take a hit, flash, and get pushed away from `source` if given.
    pub fn take_damage(&mut self, amount: i32, source: Option<Vec2>, ctx: &mut FrameContext) {
        self.health = (self.health - amount.max(0)).max(0);

        ctx.spawn(EffectSpawn::Sprite(
            EffectSprite::new(keys::HIT_EFFECT, self.unit.position, Fade::out(1.5, 300))
                .with_alpha(0.7)
                .with_depth(9.0),
        ));
        ctx.spawn(EffectSpawn::Flash(Flash::new(self.id, 0.5, 100, 1)));

        self.refresh_health_bar();

        if let Some(source) = source {
            let away = self.unit.position - source;
            let angle = away.y.atan2(away.x);
            let speed = self.stats.knockback_speed;

            self.unit.set_velocity(angle.cos() * speed, angle.sin() * speed);
            self.knocked_back = true;
            ctx.schedule_in(self.id, Expiry::KnockbackStop, self.stats.knockback_duration());
        }

        if self.health == 0 {
            debug!("Enemy {:?} defeated", self.id);
        }
    }

    /// Per-frame bookkeeping; keeps the health bar glued to the enemy.
    pub fn update(&mut self) {
        self.refresh_health_bar();
    }

    /// Current overlay, `None` while hidden.
    pub fn health_bar(&self) -> Option<&HealthBar> {
        self.health_bar.as_ref()
    }

    fn refresh_health_bar(&mut self) {
        self.health_bar =
            HealthBar::layout(self.unit.position, self.health, self.max_health, &self.bar_style);
    }

    /// Fire a scheduled expiry.
    pub fn expire(&mut self, expiry: Expiry) {
        if expiry == Expiry::KnockbackStop {
            self.knocked_back = false;
            self.unit.stop();
        }
    }
}

impl Mobile for Enemy {
    fn unit(&self) -> &Unit {
        &self.unit
    }

    fn unit_mut(&mut self) -> &mut Unit {
        &mut self.unit
    }
}

impl Damageable for Enemy {
    fn id(&self) -> ActorId {
        self.id
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn max_health(&self) -> i32 {
        self.max_health
    }

    fn apply_damage(&mut self, amount: i32, source: Option<Vec2>, ctx: &mut FrameContext) {
        self.take_damage(amount, source, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn enemy_at(x: f32, y: f32) -> Enemy {
        Enemy::new(ActorId(7), Vec2::new(x, y), &EnemyStats::default(), HealthBarStyle::default())
    }

    #[test]
    fn knockback_pushes_away_then_stops() {
        let mut enemy = enemy_at(100.0, 100.0);
        let mut ctx = FrameContext::at(Duration::from_millis(500));

        enemy.take_damage(20, Some(Vec2::new(80.0, 100.0)), &mut ctx);

        assert_eq!(enemy.health, 30);
        assert!((enemy.unit.velocity.x - 150.0).abs() < 1e-3);
        assert!(enemy.unit.velocity.y.abs() < 1e-3);
        assert_eq!(
            ctx.schedule().due_at(ActorId(7), Expiry::KnockbackStop),
            Some(Duration::from_millis(600))
        );

        for (_, expiry) in ctx.advance(Duration::from_millis(600)) {
            enemy.expire(expiry);
        }
        assert_eq!(enemy.unit.velocity, Vec2::ZERO);
        assert!(!enemy.is_knocked_back());
    }

    #[test]
    fn damage_without_source_does_not_move() {
        let mut enemy = enemy_at(0.0, 0.0);
        let mut ctx = FrameContext::new();

        enemy.take_damage(10, None, &mut ctx);

        assert_eq!(enemy.unit.velocity, Vec2::ZERO);
        assert!(ctx.schedule().is_empty());
    }

    #[test]
    fn damage_spawns_hit_effect_and_single_repeat_flash() {
        let mut enemy = enemy_at(0.0, 0.0);
        let mut ctx = FrameContext::new();

        enemy.take_damage(10, None, &mut ctx);

        let effects = ctx.effects();
        assert!(matches!(&effects[0], EffectSpawn::Sprite(fx) if fx.texture == keys::HIT_EFFECT));
        assert!(matches!(&effects[1], EffectSpawn::Flash(flash) if flash.repeat == 1));
        assert!(ctx.events().is_empty());
    }

    #[test]
    fn health_bar_appears_once_damaged() {
        let mut enemy = enemy_at(50.0, 50.0);
        enemy.update();
        assert!(enemy.health_bar().is_none());

        enemy.take_damage(25, None, &mut FrameContext::new());

        let bar = enemy.health_bar().expect("bar visible");
        assert_eq!(bar.fill.size.x, 15.0);
    }

    #[test]
    fn lethal_damage_clamps_to_zero() {
        let mut enemy = enemy_at(0.0, 0.0);
        enemy.take_damage(500, None, &mut FrameContext::new());

        assert_eq!(enemy.health, 0);
        assert!(enemy.is_dead());
    }

    proptest! {
        #[test]
        fn health_stays_in_bounds(hits in proptest::collection::vec(0i32..80, 0..10)) {
            let mut enemy = enemy_at(0.0, 0.0);
            let mut ctx = FrameContext::new();
            for amount in hits {
                enemy.take_damage(amount, None, &mut ctx);
                prop_assert!(enemy.health >= 0 && enemy.health <= enemy.max_health);
            }
        }
    }
}
