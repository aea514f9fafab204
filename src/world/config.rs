//! Gameplay tuning loaded from `assets/data/gameplay.ron`.
//!
//! Every field has a default, so the file may list only what it overrides.
//! A missing or broken file never stops the game; it logs and falls back.

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use super::error::DataLoadError;
use crate::enemies::{EnemyStats, HealthBarStyle};
use crate::player::PlayerTuning;

pub const CONFIG_PATH: &str = "assets/data/gameplay.ron";

/// Layout and rules of the demo arena.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EncounterSettings {
    /// Enemies within this distance of the swing centre are hit
    pub attack_reach: f32,
    /// Pickups within this distance of the player are collected
    pub pickup_radius: f32,
    /// Arena size in tiles
    pub width_tiles: u32,
    pub height_tiles: u32,
    pub tile_size: f32,
    pub enemy_count: u32,
    pub pickup_count: u32,
    /// Enemies never spawn closer than this to the player
    pub safe_radius: f32,
    /// Chance that a defeated enemy drops gold
    pub drop_chance: f64,
    /// Fraction of floor tiles drawn as stone instead of grass
    pub stone_ratio: f64,
    pub seed: u64,
}

impl Default for EncounterSettings {
    fn default() -> Self {
        Self {
            attack_reach: 28.0,
            pickup_radius: 16.0,
            width_tiles: 25,
            height_tiles: 19,
            tile_size: 32.0,
            enemy_count: 5,
            pickup_count: 6,
            safe_radius: 120.0,
            drop_chance: 0.5,
            stone_ratio: 0.1,
            seed: 7,
        }
    }
}

impl EncounterSettings {
    /// Arena size in world units.
    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(
            self.width_tiles as f32 * self.tile_size,
            self.height_tiles as f32 * self.tile_size,
        )
    }

    /// Walkable area inside the one-tile wall border, as (min, max).
    pub fn walkable_bounds(&self) -> (Vec2, Vec2) {
        let border = Vec2::splat(self.tile_size);
        (border, (self.arena_size() - border).max(border))
    }
}

/// All gameplay tuning.
#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub player: PlayerTuning,
    pub enemy: EnemyStats,
    pub health_bar: HealthBarStyle,
    pub encounter: EncounterSettings,
}

impl GameplayConfig {
    /// Load from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::load_from(CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded gameplay config from {}", CONFIG_PATH);
                config
            }
            Err(DataLoadError::FileNotFound(path)) => {
                warn!("Could not find {}. Using defaults.", path);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if !path.exists() {
            return Err(DataLoadError::FileNotFound(display));
        }

        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;

        Self::from_ron_str(&contents).map_err(|e| match e {
            DataLoadError::ParseError { details, .. } => DataLoadError::ParseError {
                path: display,
                details,
            },
            other => other,
        })
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, DataLoadError> {
        let config: Self = ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: "<inline>".to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tunings the encounter cannot act on.
    pub fn validate(&self) -> Result<(), DataLoadError> {
        let finite = [
            ("player.move_speed", self.player.move_speed),
            ("player.threshold_growth", self.player.threshold_growth),
            ("player.speed_per_level", self.player.speed_per_level),
            ("enemy.move_speed", self.enemy.move_speed),
            ("enemy.aggro_range", self.enemy.aggro_range),
            ("enemy.attack_range", self.enemy.attack_range),
            ("enemy.knockback_speed", self.enemy.knockback_speed),
            ("health_bar.width", self.health_bar.width),
            ("health_bar.height", self.health_bar.height),
            ("health_bar.offset_y", self.health_bar.offset_y),
            ("encounter.attack_reach", self.encounter.attack_reach),
            ("encounter.pickup_radius", self.encounter.pickup_radius),
            ("encounter.safe_radius", self.encounter.safe_radius),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(DataLoadError::InvalidValue {
                    field,
                    value: value.into(),
                    expected: "finite",
                });
            }
        }

        let tile_size = self.encounter.tile_size;
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(DataLoadError::InvalidValue {
                field: "encounter.tile_size",
                value: tile_size.into(),
                expected: "finite and positive",
            });
        }

        let ratios = [
            ("encounter.drop_chance", self.encounter.drop_chance),
            ("encounter.stone_ratio", self.encounter.stone_ratio),
        ];
        for (field, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(DataLoadError::InvalidValue {
                    field,
                    value,
                    expected: "within 0.0..=1.0",
                });
            }
        }

        if self.enemy.attack_range >= self.enemy.aggro_range {
            return Err(DataLoadError::InvalidRange {
                field: "enemy.attack_range",
                value: self.enemy.attack_range,
                limit_field: "enemy.aggro_range",
                limit: self.enemy.aggro_range,
            });
        }
        Ok(())
    }
}

/// System to load the gameplay config at startup.
pub fn load_gameplay_config(mut commands: Commands) {
    commands.insert_resource(GameplayConfig::load());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = GameplayConfig::from_ron_str(
            "(player: (max_health: 150), encounter: (enemy_count: 2))",
        )
        .unwrap();

        assert_eq!(config.player.max_health, 150);
        assert_eq!(config.player.attack_damage, 20);
        assert_eq!(config.encounter.enemy_count, 2);
        assert_eq!(config.enemy, EnemyStats::default());
    }

    #[test]
    fn empty_struct_is_all_defaults() {
        assert_eq!(GameplayConfig::from_ron_str("()").unwrap(), GameplayConfig::default());
    }

    #[test]
    fn attack_range_must_be_below_aggro_range() {
        let err = GameplayConfig::from_ron_str("(enemy: (attack_range: 300.0))").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidRange { .. }));
    }

    #[test]
    fn non_finite_settings_are_rejected() {
        let mut config = GameplayConfig::default();
        config.encounter.drop_chance = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(DataLoadError::InvalidValue { field: "encounter.drop_chance", .. })
        ));

        let mut config = GameplayConfig::default();
        config.encounter.tile_size = f32::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(DataLoadError::InvalidValue { field: "encounter.tile_size", .. })
        ));

        let mut config = GameplayConfig::default();
        config.enemy.aggro_range = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(DataLoadError::InvalidValue { field: "enemy.aggro_range", .. })
        ));
    }

    #[test]
    fn stone_ratio_above_one_is_rejected() {
        let err = GameplayConfig::from_ron_str("(encounter: (stone_ratio: 1.5))").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = GameplayConfig::from_ron_str("(player: (max_health: \"lots\"))").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { .. }));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = GameplayConfig::load_from("assets/data/does-not-exist.ron").unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound(_)));
    }

    #[test]
    fn walkable_bounds_skip_wall_border() {
        let settings = EncounterSettings::default();
        let (min, max) = settings.walkable_bounds();
        assert_eq!(min, Vec2::splat(32.0));
        assert_eq!(max, Vec2::new(768.0, 576.0));
    }
}
