//! World module - gameplay config, the encounter and its sprites.

mod config;
mod encounter;
mod error;
mod plugin;
mod spawning;

pub use config::{EncounterSettings, GameplayConfig, CONFIG_PATH};
pub use encounter::{Encounter, FrameReport, Pickup, PickupId};
pub use error::DataLoadError;
pub use plugin::WorldPlugin;
pub use spawning::{to_world, ActorSprite, PickupSprite};
