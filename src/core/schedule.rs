//! Scheduled state expiries keyed by actor.
//!
//! Delayed transitions (end of an attack swing, end of invulnerability,
//! end of a knockback) are stored as due timestamps and fired by the frame
//! step once the clock reaches them.

use std::collections::HashMap;
use std::time::Duration;

use super::events::ActorId;

/// Kinds of delayed state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Expiry {
    /// Player swing window closes; weapon is hidden.
    AttackWindow,
    /// Player invulnerability ends.
    Invulnerability,
    /// Enemy knockback impulse is stopped.
    KnockbackStop,
}

/// Pending expiries, at most one per `(actor, kind)`.
#[derive(Debug, Default, Clone)]
pub struct Schedule {
    entries: HashMap<(ActorId, Expiry), Duration>,
}

impl Schedule {
    /// Schedule `expiry` for `actor` at `due`. Replaces (cancels) any pending
    /// entry with the same key and returns its old due time.
    pub fn schedule(&mut self, actor: ActorId, expiry: Expiry, due: Duration) -> Option<Duration> {
        self.entries.insert((actor, expiry), due)
    }

    pub fn cancel(&mut self, actor: ActorId, expiry: Expiry) -> bool {
        self.entries.remove(&(actor, expiry)).is_some()
    }

    /// Drop every pending entry of a removed actor.
    pub fn cancel_actor(&mut self, actor: ActorId) {
        self.entries.retain(|(owner, _), _| *owner != actor);
    }

    pub fn due_at(&self, actor: ActorId, expiry: Expiry) -> Option<Duration> {
        self.entries.get(&(actor, expiry)).copied()
    }

    /// Remove and return every entry due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Duration) -> Vec<(ActorId, Expiry)> {
        let mut due: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(key, at)| (*at, *key))
            .collect();
        due.sort();

        for (_, key) in &due {
            self.entries.remove(key);
        }
        due.into_iter().map(|(_, key)| key).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_in_due_order_and_only_once() {
        let mut schedule = Schedule::default();
        schedule.schedule(ActorId(1), Expiry::KnockbackStop, ms(300));
        schedule.schedule(ActorId(0), Expiry::AttackWindow, ms(100));

        assert!(schedule.take_due(ms(99)).is_empty());
        assert_eq!(
            schedule.take_due(ms(300)),
            vec![
                (ActorId(0), Expiry::AttackWindow),
                (ActorId(1), Expiry::KnockbackStop)
            ]
        );
        assert!(schedule.take_due(ms(1000)).is_empty());
    }

    #[test]
    fn rescheduling_replaces_pending_entry() {
        let mut schedule = Schedule::default();
        schedule.schedule(ActorId(0), Expiry::Invulnerability, ms(1000));
        let old = schedule.schedule(ActorId(0), Expiry::Invulnerability, ms(1500));

        assert_eq!(old, Some(ms(1000)));
        assert!(schedule.take_due(ms(1200)).is_empty());
        assert_eq!(schedule.take_due(ms(1500)).len(), 1);
    }

    #[test]
    fn cancel_actor_drops_all_entries() {
        let mut schedule = Schedule::default();
        schedule.schedule(ActorId(4), Expiry::KnockbackStop, ms(10));
        schedule.schedule(ActorId(4), Expiry::AttackWindow, ms(10));
        schedule.schedule(ActorId(5), Expiry::KnockbackStop, ms(10));

        schedule.cancel_actor(ActorId(4));

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.due_at(ActorId(5), Expiry::KnockbackStop), Some(ms(10)));
    }
}
