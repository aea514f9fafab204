//! UI module - HUD.

mod hud;
mod plugin;

pub use hud::{fill_percent, inventory_summary};
pub use plugin::UiPlugin;
