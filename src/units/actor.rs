//! Capabilities shared by the player and enemies, and the actor union.

use bevy::prelude::*;

use super::unit::{Direction, Unit};
use crate::core::{ActorId, Expiry, FrameContext};
use crate::enemies::Enemy;
use crate::player::Player;

/// Anything that owns a `Unit` and can move.
pub trait Mobile {
    fn unit(&self) -> &Unit;
    fn unit_mut(&mut self) -> &mut Unit;

    fn position(&self) -> Vec2 {
        self.unit().position
    }

    fn set_velocity(&mut self, vx: f32, vy: f32) {
        self.unit_mut().set_velocity(vx, vy);
    }

    fn face(&mut self, direction: Direction) {
        self.unit_mut().face(direction);
    }
}

/// Anything with health that can be hit.
pub trait Damageable {
    fn id(&self) -> ActorId;
    fn health(&self) -> i32;
    fn max_health(&self) -> i32;

    /// Apply a hit. `source` is the attacker's position, used for knockback
    /// by actors that react to it.
    fn apply_damage(&mut self, amount: i32, source: Option<Vec2>, ctx: &mut FrameContext);

    fn is_dead(&self) -> bool {
        self.health() <= 0
    }
}

/// Mutable view of one actor, the player or an enemy.
pub enum Actor<'a> {
    Player(&'a mut Player),
    Enemy(&'a mut Enemy),
}

impl Actor<'_> {
    /// Fire a scheduled expiry on the actor.
    pub fn expire(&mut self, expiry: Expiry) {
        match self {
            Actor::Player(player) => player.expire(expiry),
            Actor::Enemy(enemy) => enemy.expire(expiry),
        }
    }
}

impl Mobile for Actor<'_> {
    fn unit(&self) -> &Unit {
        match self {
            Actor::Player(player) => player.unit(),
            Actor::Enemy(enemy) => enemy.unit(),
        }
    }

    fn unit_mut(&mut self) -> &mut Unit {
        match self {
            Actor::Player(player) => player.unit_mut(),
            Actor::Enemy(enemy) => enemy.unit_mut(),
        }
    }
}

impl Damageable for Actor<'_> {
    fn id(&self) -> ActorId {
        match self {
            Actor::Player(player) => player.id(),
            Actor::Enemy(enemy) => enemy.id(),
        }
    }

    fn health(&self) -> i32 {
        match self {
            Actor::Player(player) => player.health(),
            Actor::Enemy(enemy) => enemy.health(),
        }
    }

    fn max_health(&self) -> i32 {
        match self {
            Actor::Player(player) => player.max_health(),
            Actor::Enemy(enemy) => enemy.max_health(),
        }
    }

    fn apply_damage(&mut self, amount: i32, source: Option<Vec2>, ctx: &mut FrameContext) {
        match self {
            Actor::Player(player) => player.apply_damage(amount, source, ctx),
            Actor::Enemy(enemy) => enemy.apply_damage(amount, source, ctx),
        }
    }
}
