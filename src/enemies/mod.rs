//! Enemies module - stats, chase/attack AI, damage and the health-bar overlay.

mod ai;
mod components;
mod enemy;
mod health_bar;
mod plugin;

pub use components::*;
pub use enemy::Enemy;
pub use health_bar::{BarRect, HealthBar, HealthBarStyle};
pub use plugin::EnemyPlugin;
