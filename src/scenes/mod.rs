//! Scenes module - preload and boot, the states before the encounter.

mod boot;
mod plugin;
mod preload;

pub use boot::pulse_alpha;
pub use plugin::ScenesPlugin;
pub use preload::{missing_asset_files, ASSET_ROOT};
