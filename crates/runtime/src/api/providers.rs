//! Asynchronous abstraction for sourcing the player's intent.
//!
//! Runtime users plug in [`ActionProvider`] implementations so a battle can
//! run with human input, scripted fixtures, or heuristic policies. The enemy
//! is driven by the engine's own AI selector.
use std::collections::VecDeque;

use async_trait::async_trait;
use echo_core::{ActionKind, BattleSnapshot, CharacterId};
use tokio::sync::Mutex;

use super::errors::Result;

/// Trait for choosing an action from the current battle state.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Scripted/replayed choices
/// - Testing fixtures
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Choose an action for `actor`.
    ///
    /// `usable` lists the actor's skills that pass the MP and stun checks,
    /// in skill-list order. Returning a kind outside it is rejected by the
    /// engine.
    async fn provide_action(
        &self,
        actor: CharacterId,
        snapshot: &BattleSnapshot,
        usable: &[ActionKind],
    ) -> Result<ActionKind>;
}

/// Always attacks. Useful for testing or as a fallback.
pub struct BasicAttackProvider;

#[async_trait]
impl ActionProvider for BasicAttackProvider {
    async fn provide_action(
        &self,
        _actor: CharacterId,
        _snapshot: &BattleSnapshot,
        _usable: &[ActionKind],
    ) -> Result<ActionKind> {
        Ok(ActionKind::Attack)
    }
}

/// Replays a fixed queue of choices, then attacks.
#[derive(Default)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<ActionKind>>,
}

impl ScriptedProvider {
    pub fn new(script: impl IntoIterator<Item = ActionKind>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }

    /// Choices not yet handed out.
    pub async fn remaining(&self) -> usize {
        self.script.lock().await.len()
    }
}

#[async_trait]
impl ActionProvider for ScriptedProvider {
    async fn provide_action(
        &self,
        _actor: CharacterId,
        _snapshot: &BattleSnapshot,
        _usable: &[ActionKind],
    ) -> Result<ActionKind> {
        Ok(self
            .script
            .lock()
            .await
            .pop_front()
            .unwrap_or(ActionKind::Attack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echo_core::{BattleConfig, BattleEngine, CharacterTemplate};

    fn snapshot() -> BattleSnapshot {
        BattleEngine::new(
            BattleConfig::default(),
            &CharacterTemplate::hero("Hero"),
            &CharacterTemplate::slime(),
            7,
        )
        .snapshot()
    }

    #[tokio::test]
    async fn scripted_provider_replays_then_attacks() {
        let provider = ScriptedProvider::new([ActionKind::Defend, ActionKind::Heal]);
        let snapshot = snapshot();
        let actor = snapshot.player.id;

        let mut picks = Vec::new();
        for _ in 0..3 {
            picks.push(
                provider
                    .provide_action(actor, &snapshot, &ActionKind::ALL)
                    .await
                    .unwrap(),
            );
        }

        assert_eq!(
            picks,
            [ActionKind::Defend, ActionKind::Heal, ActionKind::Attack]
        );
        assert_eq!(provider.remaining().await, 0);
    }

    #[tokio::test]
    async fn basic_provider_always_attacks() {
        let snapshot = snapshot();
        let kind = BasicAttackProvider
            .provide_action(snapshot.player.id, &snapshot, &[])
            .await
            .unwrap();
        assert_eq!(kind, ActionKind::Attack);
    }
}
