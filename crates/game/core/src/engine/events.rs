//! Notifications produced by the battle engine.
//!
//! The engine queues events as it resolves each step; callers drain them with
//! [`BattleEngine::drain_events`](super::BattleEngine::drain_events) and may
//! forward them to any number of observers.

use crate::action::{ActionKind, ActionResult};
use crate::echo::{Echo, EchoEvent};
use crate::engine::BattleOutcome;
use crate::state::CharacterId;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum BattleEvent {
    BattleStarted {
        player: CharacterId,
        enemy: CharacterId,
    },
    /// Emitted before the actor's echoes tick.
    TurnStarted { actor: CharacterId, turn: u32 },
    EchoTriggered { echo: Echo },
    EchoExpired { echo: Echo },
    /// The actor could not act (stunned); echoes and MP were still processed.
    TurnSkipped { actor: CharacterId },
    ActionResolved {
        actor: CharacterId,
        target: CharacterId,
        kind: ActionKind,
        result: ActionResult,
    },
    BattleEnded { outcome: BattleOutcome },
}

impl BattleEvent {
    /// Echo lifecycle notifications (trigger or expiry).
    pub fn is_echo(&self) -> bool {
        matches!(self, Self::EchoTriggered { .. } | Self::EchoExpired { .. })
    }
}

impl From<EchoEvent> for BattleEvent {
    fn from(event: EchoEvent) -> Self {
        match event {
            EchoEvent::Triggered(echo) => Self::EchoTriggered { echo },
            EchoEvent::Expired(echo) => Self::EchoExpired { echo },
        }
    }
}
