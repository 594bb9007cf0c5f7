use strum::IntoStaticStr;

/// Battle state machine phases.
///
/// ```text
/// INTRO → PLAYER_TURN → PLAYER_ACTION → ENEMY_TURN ─┐
///              ↑                                    │
///              └────────────────────────────────────┘
/// any action resolution → VICTORY | DEFEAT (terminal)
/// ```
///
/// `ENEMY_TURN` is transient: the enemy's whole turn resolves inside one
/// [`advance`](super::BattleEngine::advance) call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum BattlePhase {
    Intro,
    /// Waiting for the player to submit an action.
    PlayerTurn,
    /// Player action resolved (or skipped); the enemy moves next.
    PlayerAction,
    EnemyTurn,
    Victory,
    Defeat,
}

impl BattlePhase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

/// Battle result signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "result", rename_all = "snake_case"))]
pub enum BattleOutcome {
    /// The enemy fell. `exp_reward` has already been granted to the player.
    Victory { exp_reward: u32, leveled_up: bool },
    /// The player fell, including mutual knock-outs.
    Defeat,
}

impl BattleOutcome {
    pub const fn is_victory(self) -> bool {
        matches!(self, Self::Victory { .. })
    }
}
