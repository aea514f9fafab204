//! Notifications and visual-effect requests produced by a frame step.
//!
//! Entity logic never talks to the renderer or the UI directly. It pushes
//! `GameEvent`s and `EffectSpawn`s into the `FrameContext` outbox, and the
//! host drains them after the step: events go to UI listeners, effects become
//! short-lived sprites and tweens.

use std::time::Duration;

use bevy::prelude::*;

/// Identifies one actor (the player or an enemy) inside an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u32);

/// Named notifications for external listeners.
///
/// Events carry only the emitting actor. Listeners re-read actor state
/// after the event fires.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PlayerAttack(ActorId),
    HealthChanged(ActorId),
    ExperienceChanged(ActorId),
    LevelChanged(ActorId),
    InventoryChanged(ActorId),
}

impl GameEvent {
    /// The wire name listeners subscribe to.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::PlayerAttack(_) => "player-attack",
            GameEvent::HealthChanged(_) => "health-changed",
            GameEvent::ExperienceChanged(_) => "experience-changed",
            GameEvent::LevelChanged(_) => "level-changed",
            GameEvent::InventoryChanged(_) => "inventory-changed",
        }
    }

    /// Actor that emitted the event.
    pub fn source(&self) -> ActorId {
        match *self {
            GameEvent::PlayerAttack(id)
            | GameEvent::HealthChanged(id)
            | GameEvent::ExperienceChanged(id)
            | GameEvent::LevelChanged(id)
            | GameEvent::InventoryChanged(id) => id,
        }
    }
}

/// Tween that fades a transient sprite out while scaling it, then removes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub to_alpha: f32,
    pub to_scale: f32,
    pub duration: Duration,
}

impl Fade {
    pub fn out(to_scale: f32, duration_ms: u64) -> Self {
        Self {
            to_alpha: 0.0,
            to_scale,
            duration: Duration::from_millis(duration_ms),
        }
    }
}

/// A transient sprite such as a hit spark or a level-up burst.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSprite {
    /// Texture key (see `textures::keys`)
    pub texture: &'static str,
    /// Screen position (y grows downward)
    pub position: Vec2,
    pub alpha: f32,
    /// Draw order; higher draws on top
    pub depth: f32,
    pub tint: Option<Color>,
    pub fade: Fade,
}

impl EffectSprite {
    pub fn new(texture: &'static str, position: Vec2, fade: Fade) -> Self {
        Self {
            texture,
            position,
            alpha: 1.0,
            depth: 0.0,
            tint: None,
            fade,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }
}

/// Alpha flash on an actor's own sprite: dips to `alpha` and back
/// (yoyo), `repeat + 1` times in total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flash {
    pub actor: ActorId,
    pub alpha: f32,
    /// Duration of a single leg (down or back up)
    pub leg: Duration,
    pub repeat: u32,
}

impl Flash {
    pub fn new(actor: ActorId, alpha: f32, leg_ms: u64, repeat: u32) -> Self {
        Self {
            actor,
            alpha,
            leg: Duration::from_millis(leg_ms),
            repeat,
        }
    }

    /// Total running time of the flash.
    pub fn total(&self) -> Duration {
        self.leg * 2 * (self.repeat + 1)
    }

    /// Sprite alpha at `elapsed`, or `None` once the flash has finished.
    pub fn alpha_at(&self, elapsed: Duration) -> Option<f32> {
        if elapsed >= self.total() || self.leg.is_zero() {
            return None;
        }
        let leg = self.leg.as_secs_f32();
        let phase = (elapsed.as_secs_f32() % (leg * 2.0)) / leg;
        let t = if phase < 1.0 { phase } else { 2.0 - phase };
        Some(1.0 + (self.alpha - 1.0) * t)
    }
}

/// A visual side effect requested by entity logic.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectSpawn {
    Sprite(EffectSprite),
    Flash(Flash),
}
