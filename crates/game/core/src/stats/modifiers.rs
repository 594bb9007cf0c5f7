//! Modifiers - the character-side view of live echoes.
//!
//! A modifier copies the immutable part of an echo (id, kind, magnitude). The
//! countdown stays in the [`EchoSystem`](crate::echo::EchoSystem), which adds
//! and removes modifiers in the same step as its own registry entry.
//!
//! Formulas (multiplicative, applied in insertion order):
//! - attack  = base × Π(1 + v) for AttackBoost × Π(1 - v/2) for Fatigue, floored, min 1
//! - defense = base × Π(1 - v) for DefenseReduction × Π(1 + v) for DefenseBoost, floored, min 0

use crate::echo::{EchoId, EchoKind};

/// A live echo effect as seen by the character it targets.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub echo: EchoId,
    pub kind: EchoKind,
    pub value: f64,
}

impl Modifier {
    pub const fn new(echo: EchoId, kind: EchoKind, value: f64) -> Self {
        Self { echo, kind, value }
    }
}

/// Ordered list of active modifiers (most recent last).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers {
    entries: Vec<Modifier>,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, modifier: Modifier) {
        self.entries.push(modifier);
    }

    /// Removes the modifier backed by `echo`, returning it if present.
    pub(crate) fn remove(&mut self, echo: EchoId) -> Option<Modifier> {
        let index = self.entries.iter().position(|m| m.echo == echo)?;
        Some(self.entries.remove(index))
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Checks if any modifier of `kind` is active.
    pub fn has(&self, kind: EchoKind) -> bool {
        self.entries.iter().any(|m| m.kind == kind)
    }

    /// Returns true if a modifier for `echo` is present.
    pub fn contains(&self, echo: EchoId) -> bool {
        self.entries.iter().any(|m| m.echo == echo)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Effective attack for a base attack value.
    pub fn effective_attack(&self, base: u32) -> u32 {
        let mut attack = f64::from(base);
        for modifier in &self.entries {
            match modifier.kind {
                EchoKind::AttackBoost => attack *= 1.0 + modifier.value,
                EchoKind::Fatigue => attack *= 1.0 - modifier.value * 0.5,
                _ => {}
            }
        }
        (attack.floor().max(1.0)) as u32
    }

    /// Effective defense for a base defense value.
    pub fn effective_defense(&self, base: u32) -> u32 {
        let mut defense = f64::from(base);
        for modifier in &self.entries {
            match modifier.kind {
                EchoKind::DefenseReduction => defense *= 1.0 - modifier.value,
                EchoKind::DefenseBoost => defense *= 1.0 + modifier.value,
                _ => {}
            }
        }
        (defense.floor().max(0.0)) as u32
    }
}
