//! Health-bar overlay geometry.
//!
//! The bar floats above the enemy and must be recomputed every frame because
//! the enemy moves. It is hidden while the enemy is at full health.

use bevy::prelude::*;
use serde::Deserialize;

/// Size and placement of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HealthBarStyle {
    pub width: f32,
    pub height: f32,
    /// Vertical offset from the enemy's position (negative is above)
    pub offset_y: f32,
}

impl Default for HealthBarStyle {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 5.0,
            offset_y: -35.0,
        }
    }
}

/// Axis-aligned rectangle in screen space, `min` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub min: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl BarRect {
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }
}

/// Background plus proportional red fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthBar {
    pub background: BarRect,
    pub fill: BarRect,
}

impl HealthBar {
    /// Layout for an enemy at `position`, `None` at full health.
    pub fn layout(position: Vec2, health: i32, max_health: i32, style: &HealthBarStyle) -> Option<Self> {
        if max_health <= 0 || health >= max_health {
            return None;
        }

        let min = Vec2::new(position.x - style.width / 2.0, position.y + style.offset_y);
        let ratio = health.max(0) as f32 / max_health as f32;

        Some(Self {
            background: BarRect {
                min,
                size: Vec2::new(style.width, style.height),
                color: Color::srgba(0.0, 0.0, 0.0, 0.5),
            },
            fill: BarRect {
                min,
                size: Vec2::new(style.width * ratio, style.height),
                color: Color::srgb(1.0, 0.0, 0.0),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_at_full_health() {
        assert!(HealthBar::layout(Vec2::ZERO, 50, 50, &HealthBarStyle::default()).is_none());
    }

    #[test]
    fn fill_is_proportional_and_above_enemy() {
        let bar = HealthBar::layout(Vec2::new(100.0, 100.0), 25, 50, &HealthBarStyle::default())
            .expect("bar shown when damaged");

        assert_eq!(bar.background.min, Vec2::new(85.0, 65.0));
        assert_eq!(bar.background.size, Vec2::new(30.0, 5.0));
        assert_eq!(bar.fill.size, Vec2::new(15.0, 5.0));
    }

    #[test]
    fn empty_fill_at_zero_health() {
        let bar = HealthBar::layout(Vec2::ZERO, 0, 50, &HealthBarStyle::default()).unwrap();
        assert_eq!(bar.fill.size.x, 0.0);
    }
}
