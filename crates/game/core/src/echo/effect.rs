//! Echo records.

use core::fmt;

use crate::echo::EchoKind;
use crate::state::CharacterId;
use crate::stats::Modifier;

/// Scheduler-assigned echo identifier. Never reused within an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EchoId(pub u64);

impl fmt::Display for EchoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "echo_{}", self.0)
    }
}

/// Everything needed to schedule an echo, minus the id.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EchoSpec {
    pub name: String,
    pub kind: EchoKind,
    pub value: f64,
    /// Number of turn starts of `target` the echo survives. Zero behaves as one.
    pub turns: u32,
    pub target: CharacterId,
    pub source: CharacterId,
    pub icon: String,
    pub description: String,
}

impl EchoSpec {
    pub fn new(
        name: impl Into<String>,
        kind: EchoKind,
        value: f64,
        turns: u32,
        target: CharacterId,
        source: CharacterId,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            value,
            turns,
            target,
            source,
            icon: String::new(),
            description: String::new(),
        }
    }

    /// Echo created by `actor` on itself.
    pub fn on_self(
        name: impl Into<String>,
        kind: EchoKind,
        value: f64,
        turns: u32,
        actor: CharacterId,
    ) -> Self {
        Self::new(name, kind, value, turns, actor, actor)
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A live delayed effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Echo {
    pub id: EchoId,
    pub name: String,
    pub kind: EchoKind,
    pub value: f64,
    pub turns_remaining: u32,
    pub target: CharacterId,
    pub source: CharacterId,
    pub icon: String,
    pub description: String,
}

impl Echo {
    pub(crate) fn from_spec(id: EchoId, spec: EchoSpec) -> Self {
        Self {
            id,
            name: spec.name,
            kind: spec.kind,
            value: spec.value,
            turns_remaining: spec.turns.max(1),
            target: spec.target,
            source: spec.source,
            icon: spec.icon,
            description: spec.description,
        }
    }

    /// The character-side record of this echo.
    pub fn modifier(&self) -> Modifier {
        Modifier::new(self.id, self.kind, self.value)
    }

    pub fn is_expired(&self) -> bool {
        self.turns_remaining == 0
    }
}
