//! Enemy-related data: stats, AI state and sprite markers.

use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::ActorId;

/// AI state machine for enemy behavior.
#[derive(Default, PartialEq, Eq, Clone, Copy, Debug)]
pub enum AiState {
    /// Player outside aggro range; standing still.
    #[default]
    Idle,
    /// Moving toward the player.
    Chasing,
    /// In attack range; stands still and swings on cooldown.
    Attacking,
}

/// Enemy stats loaded from the gameplay config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnemyStats {
    pub max_health: i32,
    pub damage: i32,
    pub move_speed: f32,
    /// Radius within which the enemy starts chasing
    pub aggro_range: f32,
    /// Radius within which the enemy stops and attacks
    pub attack_range: f32,
    pub attack_cooldown_ms: u64,
    /// Experience granted to the player on kill
    pub experience_reward: u32,
    pub knockback_speed: f32,
    pub knockback_ms: u64,
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            max_health: 50,
            damage: 10,
            move_speed: 80.0,
            aggro_range: 200.0,
            attack_range: 20.0,
            attack_cooldown_ms: 1000,
            experience_reward: 25,
            knockback_speed: 150.0,
            knockback_ms: 100,
        }
    }
}

impl EnemyStats {
    pub fn attack_cooldown(&self) -> Duration {
        Duration::from_millis(self.attack_cooldown_ms)
    }

    pub fn knockback_duration(&self) -> Duration {
        Duration::from_millis(self.knockback_ms)
    }
}

/// Marker for an enemy body sprite.
#[derive(Component)]
pub struct EnemySprite;

/// Which half of the overlay a health-bar sprite draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarPart {
    Background,
    Fill,
}

/// Marker for a health-bar sprite owned by an enemy.
#[derive(Component)]
pub struct HealthBarSprite {
    pub owner: ActorId,
    pub part: BarPart,
}
