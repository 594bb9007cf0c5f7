//! Echo scheduler.
//!
//! The [`EchoSystem`] is the authoritative registry of live echoes. Each echo
//! is mirrored as a [`Modifier`](crate::stats::Modifier) on its target; both
//! copies are added and removed in the same call, so an echo is either in the
//! registry and on its target or in neither.
//!
//! # Turn-start processing
//!
//! [`EchoSystem::process_turn_start`] ticks only the echoes whose target is
//! the character passed in (compared by [`CharacterId`], never by name):
//!
//! 1. decrement `turns_remaining`
//! 2. queue [`EchoEvent::Triggered`]
//! 3. if nothing remains, remove from registry and target, queue [`EchoEvent::Expired`]
//!
//! Expiry is synchronous; a zero-turn echo never survives the call that
//! exhausted it.

use std::collections::BTreeMap;

use crate::echo::{Echo, EchoEvent, EchoId, EchoSpec};
use crate::state::{Character, CharacterId, Roster, RosterError};

/// Value of the id counter after construction or [`EchoSystem::clear`].
const INITIAL_COUNTER: u64 = 0;

#[derive(Clone, Debug, Default)]
pub struct EchoSystem {
    echoes: Vec<Echo>,
    counter: u64,
    events: Vec<EchoEvent>,
}

impl EchoSystem {
    pub fn new() -> Self {
        Self {
            echoes: Vec::new(),
            counter: INITIAL_COUNTER,
            events: Vec::new(),
        }
    }

    /// Registers a new echo and attaches it to its target.
    ///
    /// Fails without consuming an id when the target is not in `roster`.
    pub fn add_echo(&mut self, roster: &mut Roster, spec: EchoSpec) -> Result<Echo, RosterError> {
        let target = roster.get_mut(spec.target)?;

        self.counter += 1;
        let echo = Echo::from_spec(EchoId(self.counter), spec);

        target.add_modifier(echo.modifier());
        self.echoes.push(echo.clone());

        Ok(echo)
    }

    /// Ticks every echo targeting `character`.
    ///
    /// Returns the echoes triggered by this call in registry order, including
    /// the ones that expired.
    pub fn process_turn_start(&mut self, character: &mut Character) -> Vec<Echo> {
        let id = character.id();
        let mut triggered = Vec::new();

        let mut index = 0;
        while index < self.echoes.len() {
            if self.echoes[index].target != id {
                index += 1;
                continue;
            }

            let echo = &mut self.echoes[index];
            echo.turns_remaining = echo.turns_remaining.saturating_sub(1);
            let ticked = echo.clone();

            self.events.push(EchoEvent::Triggered(ticked.clone()));
            triggered.push(ticked.clone());

            if ticked.is_expired() {
                self.echoes.remove(index);
                character.remove_modifier(ticked.id);
                self.events.push(EchoEvent::Expired(ticked));
            } else {
                index += 1;
            }
        }

        triggered
    }

    /// Removes an echo from the registry and from its target.
    ///
    /// No-op returning `None` if `id` is not live.
    pub fn remove_echo(&mut self, roster: &mut Roster, id: EchoId) -> Option<Echo> {
        let index = self.echoes.iter().position(|e| e.id == id)?;
        let echo = self.echoes.remove(index);

        if let Ok(target) = roster.get_mut(echo.target) {
            target.remove_modifier(echo.id);
        }
        self.events.push(EchoEvent::Expired(echo.clone()));

        Some(echo)
    }

    /// Detaches every echo, empties the registry and restarts id allocation.
    ///
    /// No expiry events are produced; undelivered events are discarded.
    pub fn clear(&mut self, roster: &mut Roster) {
        for echo in &self.echoes {
            if let Ok(target) = roster.get_mut(echo.target) {
                target.remove_modifier(echo.id);
            }
        }
        self.echoes.clear();
        self.events.clear();
        self.counter = INITIAL_COUNTER;
    }

    /// Snapshot of every live echo in registry order.
    pub fn all_echoes(&self) -> Vec<Echo> {
        self.echoes.clone()
    }

    /// Snapshot of the echoes targeting `character`.
    pub fn echoes_for(&self, character: CharacterId) -> Vec<Echo> {
        self.echoes
            .iter()
            .filter(|e| e.target == character)
            .cloned()
            .collect()
    }

    /// Snapshot of the echoes created by `character`.
    pub fn echoes_by_source(&self, character: CharacterId) -> Vec<Echo> {
        self.echoes
            .iter()
            .filter(|e| e.source == character)
            .cloned()
            .collect()
    }

    /// Copy of a single live echo.
    pub fn get(&self, id: EchoId) -> Option<Echo> {
        self.echoes.iter().find(|e| e.id == id).cloned()
    }

    /// Live echoes grouped by turns remaining, soonest first.
    pub fn timeline(&self) -> BTreeMap<u32, Vec<Echo>> {
        let mut timeline: BTreeMap<u32, Vec<Echo>> = BTreeMap::new();
        for echo in &self.echoes {
            timeline
                .entry(echo.turns_remaining)
                .or_default()
                .push(echo.clone());
        }
        timeline
    }

    pub fn len(&self) -> usize {
        self.echoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.echoes.is_empty()
    }

    /// Events queued since the last drain, oldest first.
    pub fn pending_events(&self) -> &[EchoEvent] {
        &self.events
    }

    /// Takes all queued events.
    pub fn drain_events(&mut self) -> Vec<EchoEvent> {
        std::mem::take(&mut self.events)
    }
}
