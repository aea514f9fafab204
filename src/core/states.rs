//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Gameplay systems
//! only run in `InGame`; the asset fallback only runs in `Preload`.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Preload` to load asset files and generate placeholders
/// - `Boot` shows a short splash
/// - `InGame` runs the encounter
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Asset loading with procedural fallbacks
    #[default]
    Preload,
    /// "Starting Game..." splash
    Boot,
    /// Active gameplay
    InGame,
}
