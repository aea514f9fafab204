//! Player module - player logic, keyboard input and sprite sync.

mod components;
mod input;
mod movement;
mod plugin;
mod state;

pub use components::*;
pub use input::InputState;
pub use movement::ATTACK_EFFECT_OFFSET;
pub use plugin::PlayerPlugin;
pub use state::Player;
