//! Chase and attack behavior.

use bevy::prelude::*;

use super::components::AiState;
use super::enemy::Enemy;
use crate::core::{EffectSprite, EffectSpawn, Fade, FrameContext};
use crate::textures::keys;
use crate::units::Direction;

impl Enemy {
    /// Steer toward the player, stopping to attack inside attack range and
    /// idling outside aggro range. Every call overwrites the current
    /// velocity, a running knockback included.
    pub fn follow_player(&mut self, player_position: Vec2, ctx: &mut FrameContext) {
        let distance = self.unit.distance_to(player_position);

        if distance >= self.aggro_range {
            self.unit.stop();
            self.ai_state = AiState::Idle;
            return;
        }

        if distance > self.attack_range {
            let to_player = player_position - self.unit.position;
            let angle = to_player.y.atan2(to_player.x);
            let speed = self.unit.move_speed;

            self.unit.set_velocity(angle.cos() * speed, angle.sin() * speed);
            if let Some(direction) = Direction::from_vector(to_player) {
                self.unit.face(direction);
            }
            self.ai_state = AiState::Chasing;
            return;
        }

        self.unit.stop();
        self.ai_state = AiState::Attacking;

        let now = ctx.now();
        let ready = self
            .last_attack_time
            .map_or(true, |last| now > last + self.stats.attack_cooldown());
        if ready {
            self.attack(ctx);
            self.last_attack_time = Some(now);
        }
    }

    /// Swing at the player. Only the visual is produced; the player takes
    /// no damage from enemy swings.
    pub fn attack(&mut self, ctx: &mut FrameContext) {
        ctx.spawn(EffectSpawn::Sprite(
            EffectSprite::new(keys::HIT_EFFECT, self.unit.position, Fade::out(1.2, 200))
                .with_alpha(0.5)
                .with_depth(4.0),
        ));
    }
}
