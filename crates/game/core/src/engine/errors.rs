//! Error types for the battle state machine.
//!
//! Every variant is raised before any state is touched, so a rejected call
//! leaves the battle exactly as it was.

use crate::action::{ActionError, ActionKind};
use crate::engine::BattlePhase;
use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("battle has already started")]
    AlreadyStarted,

    #[error("not the player's turn (phase: {phase})")]
    NotPlayerTurn { phase: BattlePhase },

    #[error("waiting for the player to choose an action")]
    AwaitingPlayerAction,

    #[error("{kind} is not one of the player's skills")]
    UnknownSkill { kind: ActionKind },

    #[error("{kind} cannot be used right now")]
    ActionUnavailable { kind: ActionKind },

    #[error("battle is over")]
    BattleOver,

    #[error(transparent)]
    Action(#[from] ActionError),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AwaitingPlayerAction | Self::ActionUnavailable { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::AlreadyStarted
            | Self::NotPlayerTurn { .. }
            | Self::UnknownSkill { .. }
            | Self::BattleOver => ErrorSeverity::Validation,
            Self::Action(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyStarted => "TURN_ALREADY_STARTED",
            Self::NotPlayerTurn { .. } => "TURN_NOT_PLAYER_TURN",
            Self::AwaitingPlayerAction => "TURN_AWAITING_PLAYER_ACTION",
            Self::UnknownSkill { .. } => "TURN_UNKNOWN_SKILL",
            Self::ActionUnavailable { .. } => "TURN_ACTION_UNAVAILABLE",
            Self::BattleOver => "TURN_BATTLE_OVER",
            Self::Action(err) => err.error_code(),
        }
    }
}
