//! Per-frame player control: keyboard movement and the sword swing.

use bevy::prelude::*;

use super::components::{PlayerAnimation, WeaponPose};
use super::input::InputState;
use super::state::Player;
use crate::core::{EffectSprite, EffectSpawn, Expiry, Fade, FrameContext, GameEvent};
use crate::textures::keys;
use crate::units::{Damageable, Direction};

/// Distance from the player to the centre of the swing effect.
pub const ATTACK_EFFECT_OFFSET: f32 = 20.0;

/// Distance from the player to the weapon grip.
const WEAPON_OFFSET: f32 = 5.0;

impl Player {
    /// Run one frame of player control.
    pub fn update(&mut self, input: &InputState, ctx: &mut FrameContext) {
        self.handle_movement(input);
        self.handle_attack(input, ctx);
    }

    /// Set velocity, facing and animation from the directional keys.
    ///
    /// Left wins over right and up wins over down. A
    /// vertical key changes facing only while no horizontal key is held.
    /// Diagonals are rescaled to `move_speed`. Nothing moves mid-swing.
    pub fn handle_movement(&mut self, input: &InputState) {
        self.unit.stop();

        if self.is_attacking {
            return;
        }

        let speed = self.unit.move_speed;
        let horizontal_held = input.left || input.right;

        if input.left {
            self.unit.set_velocity(-speed, 0.0);
            self.walk(Direction::Left);
        } else if input.right {
            self.unit.set_velocity(speed, 0.0);
            self.walk(Direction::Right);
        }

        if input.up {
            self.unit.set_velocity(self.unit.velocity.x, -speed);
            if !horizontal_held {
                self.walk(Direction::Up);
            }
        } else if input.down {
            self.unit.set_velocity(self.unit.velocity.x, speed);
            if !horizontal_held {
                self.walk(Direction::Down);
            }
        }

        if self.unit.velocity != Vec2::ZERO {
            self.unit.velocity = self.unit.velocity.normalize() * speed;
        } else {
            self.animation = PlayerAnimation::Idle(self.unit.facing);
        }
    }

    fn walk(&mut self, direction: Direction) {
        self.unit.face(direction);
        self.animation = PlayerAnimation::Walk(direction);
    }

    /// Start a swing if the attack key is down, the cooldown has elapsed
    /// and no swing is running. The swing window closes after a fixed time
    /// regardless of animation playback.
    pub fn handle_attack(&mut self, input: &InputState, ctx: &mut FrameContext) {
        let now = ctx.now();
        let ready = self
            .last_attack_time
            .map_or(true, |last| now > last + self.tuning.attack_cooldown());

        if !input.attack || !ready || self.is_attacking {
            return;
        }

        self.is_attacking = true;
        self.last_attack_time = Some(now);
        self.weapon_visible = true;
        self.animation = PlayerAnimation::Attack(self.unit.facing);

        ctx.spawn(EffectSpawn::Sprite(
            EffectSprite::new(keys::ATTACK_EFFECT, self.attack_point(), Fade::out(1.5, 300))
                .with_alpha(0.7)
                .with_depth(9.0),
        ));

        ctx.emit(GameEvent::PlayerAttack(self.id()));

        ctx.schedule_in(self.id(), Expiry::AttackWindow, self.tuning.attack_window());
    }

    /// Centre of the swing, in front of the player.
    pub fn attack_point(&self) -> Vec2 {
        self.unit.position + self.unit.facing.unit_vector() * ATTACK_EFFECT_OFFSET
    }

    /// Weapon placement for the current facing.
    pub fn weapon_pose(&self) -> WeaponPose {
        let angle_degrees = match self.unit.facing {
            Direction::Up => -90.0,
            Direction::Down => 90.0,
            Direction::Left => 180.0,
            Direction::Right => 0.0,
        };

        WeaponPose {
            offset: self.unit.facing.unit_vector() * WEAPON_OFFSET,
            angle_degrees,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::ActorId;
    use crate::player::PlayerTuning;

    fn player() -> Player {
        Player::new(ActorId(0), Vec2::new(50.0, 50.0), &PlayerTuning::default())
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn held(left: bool, right: bool, up: bool, down: bool) -> InputState {
        InputState {
            left,
            right,
            up,
            down,
            ..InputState::default()
        }
    }

    #[test]
    fn diagonal_is_normalized_to_move_speed() {
        let mut player = player();
        player.handle_movement(&held(true, false, true, false));

        let v = player.unit.velocity;
        assert!((v.length() - 100.0).abs() < 1e-3);
        assert!(v.x < 0.0 && v.y < 0.0);
        // Vertical key does not steal facing while a horizontal key is held
        assert_eq!(player.unit.facing, Direction::Left);
        assert_eq!(player.animation, PlayerAnimation::Walk(Direction::Left));
    }

    #[test]
    fn left_wins_over_right() {
        let mut player = player();
        player.handle_movement(&held(true, true, false, false));

        assert_eq!(player.unit.velocity, Vec2::new(-100.0, 0.0));
        assert_eq!(player.unit.facing, Direction::Left);
    }

    #[test]
    fn vertical_only_changes_facing() {
        let mut player = player();
        player.handle_movement(&held(false, false, false, true));

        assert_eq!(player.unit.velocity, Vec2::new(0.0, 100.0));
        assert_eq!(player.unit.facing, Direction::Down);

        player.handle_movement(&held(false, false, true, true));
        assert_eq!(player.unit.velocity, Vec2::new(0.0, -100.0));
        assert_eq!(player.unit.facing, Direction::Up);
    }

    #[test]
    fn idle_animation_keeps_last_facing() {
        let mut player = player();
        player.handle_movement(&held(true, false, false, false));
        player.handle_movement(&InputState::default());

        assert_eq!(player.unit.velocity, Vec2::ZERO);
        assert_eq!(player.animation, PlayerAnimation::Idle(Direction::Left));
    }

    #[test]
    fn swing_opens_fixed_window_and_blocks_movement() {
        let mut player = player();
        let mut ctx = FrameContext::at(ms(1000));
        let input = InputState {
            attack: true,
            right: true,
            ..InputState::default()
        };

        player.update(&input, &mut ctx);

        assert!(player.is_attacking);
        assert!(player.weapon_visible);
        assert_eq!(ctx.events(), &[GameEvent::PlayerAttack(ActorId(0))]);
        assert_eq!(
            ctx.schedule().due_at(ActorId(0), Expiry::AttackWindow),
            Some(ms(1300))
        );

        // Mid-swing: movement ignored
        ctx.advance(ms(1100));
        player.update(&input, &mut ctx);
        assert_eq!(player.unit.velocity, Vec2::ZERO);
        assert_eq!(player.animation, PlayerAnimation::Attack(Direction::Right));

        for (_, expiry) in ctx.advance(ms(1300)) {
            player.expire(expiry);
        }
        assert!(!player.is_attacking);
        assert!(!player.weapon_visible);
    }

    #[test]
    fn attack_effect_spawns_in_front_of_player() {
        let mut player = player();
        player.unit.face(Direction::Up);
        let mut ctx = FrameContext::at(ms(1000));

        player.handle_attack(&InputState { attack: true, ..InputState::default() }, &mut ctx);

        let Some(EffectSpawn::Sprite(effect)) = ctx.effects().first() else {
            panic!("expected a swing effect");
        };
        assert_eq!(effect.texture, keys::ATTACK_EFFECT);
        assert_eq!(effect.position, Vec2::new(50.0, 30.0));
    }

    #[test]
    fn cooldown_gates_swings() {
        let mut player = player();
        let attack = InputState { attack: true, ..InputState::default() };

        // Ready on the very first frame
        let mut ctx = FrameContext::at(ms(0));
        player.handle_attack(&attack, &mut ctx);
        assert!(player.is_attacking);
        assert_eq!(player.last_attack_time(), Some(ms(0)));

        player.expire(Expiry::AttackWindow);
        ctx.advance(ms(500));
        player.handle_attack(&attack, &mut ctx);
        assert!(!player.is_attacking);

        ctx.advance(ms(501));
        player.handle_attack(&attack, &mut ctx);
        assert!(player.is_attacking);
    }

    #[test]
    fn weapon_pose_follows_facing() {
        let mut player = player();
        player.unit.face(Direction::Left);

        let pose = player.weapon_pose();
        assert_eq!(pose.offset, Vec2::new(-5.0, 0.0));
        assert_eq!(pose.angle_degrees, 180.0);
    }
}
