//! Player-related data: tuning, animation selection, weapon pose and
//! sprite markers.

use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;

use crate::textures::keys;
use crate::units::Direction;

/// Player tuning loaded from the gameplay config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_health: i32,
    pub attack_damage: i32,
    /// Units per second
    pub move_speed: f32,
    /// Minimum time between two swings
    pub attack_cooldown_ms: u64,
    /// How long a swing blocks movement and shows the weapon
    pub attack_window_ms: u64,
    pub invulnerability_ms: u64,
    /// Experience needed for level 2
    pub first_level_threshold: u32,
    /// Threshold multiplier applied on every level-up
    pub threshold_growth: f32,
    pub health_per_level: i32,
    pub damage_per_level: i32,
    pub speed_per_level: f32,
    pub inventory_slots: usize,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_health: 100,
            attack_damage: 20,
            move_speed: 100.0,
            attack_cooldown_ms: 500,
            attack_window_ms: 300,
            invulnerability_ms: 1000,
            first_level_threshold: 100,
            threshold_growth: 1.5,
            health_per_level: 20,
            damage_per_level: 5,
            speed_per_level: 10.0,
            inventory_slots: crate::inventory::DEFAULT_CAPACITY,
        }
    }
}

impl PlayerTuning {
    pub fn attack_cooldown(&self) -> Duration {
        Duration::from_millis(self.attack_cooldown_ms)
    }

    pub fn attack_window(&self) -> Duration {
        Duration::from_millis(self.attack_window_ms)
    }

    pub fn invulnerability(&self) -> Duration {
        Duration::from_millis(self.invulnerability_ms)
    }
}

/// Animation currently requested by the player logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAnimation {
    Walk(Direction),
    Idle(Direction),
    Attack(Direction),
}

impl Default for PlayerAnimation {
    fn default() -> Self {
        PlayerAnimation::Idle(Direction::default())
    }
}

impl PlayerAnimation {
    /// Walk cycles run at this many frames per second.
    pub const WALK_FRAME_RATE: f32 = 8.0;

    /// Animation name, e.g. `player-left`, `player-idle-down`.
    pub fn key(&self) -> String {
        match self {
            PlayerAnimation::Walk(dir) => format!("player-{}", dir.as_str()),
            PlayerAnimation::Idle(dir) => format!("player-idle-{}", dir.as_str()),
            PlayerAnimation::Attack(dir) => format!("player-attack-{}", dir.as_str()),
        }
    }

    /// Texture to show `elapsed` into the animation.
    pub fn frame_key(&self, elapsed: Duration) -> &'static str {
        match *self {
            PlayerAnimation::Walk(dir) => {
                let frame = (elapsed.as_secs_f32() * Self::WALK_FRAME_RATE) as usize % 2;
                keys::player_frame(dir, frame + 1)
            }
            PlayerAnimation::Idle(dir) | PlayerAnimation::Attack(dir) => keys::player_frame(dir, 1),
        }
    }
}

/// Where the weapon sprite sits relative to the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponPose {
    pub offset: Vec2,
    /// Clockwise degrees in screen space
    pub angle_degrees: f32,
}

/// Marker for the player's body sprite.
#[derive(Component)]
pub struct PlayerSprite;

/// Marker for the weapon sprite shown during swings.
#[derive(Component)]
pub struct WeaponSprite;
