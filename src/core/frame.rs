//! The explicit frame clock handed to entity logic.

use std::time::Duration;

use super::events::{ActorId, EffectSpawn, GameEvent};
use super::schedule::{Expiry, Schedule};

/// Current timestamp, pending expiries and the outbox of one encounter.
///
/// Entity operations take `&mut FrameContext` instead of reaching for an
/// engine clock, timer service or event bus, so every timing rule can be
/// driven from tests with hand-picked timestamps.
#[derive(Debug, Default)]
pub struct FrameContext {
    now: Duration,
    schedule: Schedule,
    events: Vec<GameEvent>,
    effects: Vec<EffectSpawn>,
}

impl FrameContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context frozen at `now`, for driving single operations.
    pub fn at(now: Duration) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the clock forward and return the expiries that became due.
    /// The clock never runs backwards.
    pub fn advance(&mut self, now: Duration) -> Vec<(ActorId, Expiry)> {
        self.now = self.now.max(now);
        self.schedule.take_due(self.now)
    }

    /// Schedule `expiry` for `actor` after `delay`, replacing a pending one.
    pub fn schedule_in(&mut self, actor: ActorId, expiry: Expiry, delay: Duration) {
        self.schedule.schedule(actor, expiry, self.now + delay);
    }

    pub fn cancel(&mut self, actor: ActorId, expiry: Expiry) -> bool {
        self.schedule.cancel(actor, expiry)
    }

    /// Forget a removed actor's pending expiries.
    pub fn forget(&mut self, actor: ActorId) {
        self.schedule.cancel_actor(actor);
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn spawn(&mut self, effect: EffectSpawn) {
        self.effects.push(effect);
    }

    /// Events emitted since the last drain.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Effects requested since the last drain.
    pub fn effects(&self) -> &[EffectSpawn] {
        &self.effects
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn drain_effects(&mut self) -> Vec<EffectSpawn> {
        std::mem::take(&mut self.effects)
    }
}
