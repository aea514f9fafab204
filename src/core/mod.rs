//! Core game module - states, events, the frame clock and fundamental systems.
//!
//! This module provides the foundation that all other game systems build upon.

mod events;
mod frame;
mod plugin;
mod schedule;
mod states;
mod tween;

pub use events::*;
pub use frame::FrameContext;
pub use plugin::{CorePlugin, FrameSet};
pub use schedule::{Expiry, Schedule};
pub use states::*;
pub use tween::*;
