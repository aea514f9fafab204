//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;

use super::events::GameEvent;
use super::states::GameState;
use super::tween::*;

/// Per-frame ordering of gameplay systems.
///
/// Input is polled first, then the encounter steps once, then sprites,
/// effects and UI are brought in line with the new state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Step,
    Sync,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Preload, Boot, InGame)
/// - The `GameEvent` channel used by UI listeners
/// - Frame system ordering
/// - Effect tweens
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<GameEvent>()

            // System ordering
            .configure_sets(
                Update,
                (FrameSet::Input, FrameSet::Step, FrameSet::Sync)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )

            // Tweens run in every state
            .add_systems(Update, (update_fade_tweens, update_flash_tweens));
    }
}
