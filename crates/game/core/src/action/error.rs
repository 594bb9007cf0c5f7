//! Action execution errors.
//!
//! Running out of MP is not an error; see [`ActionResult`](super::ActionResult).

use crate::error::{ErrorSeverity, GameError};
use crate::state::{CharacterId, RosterError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Actor or target is not in the roster, or both are the same character.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// Actor is dead.
    #[error("character {0} is dead and cannot act")]
    ActorDead(CharacterId),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Roster(err) => err.severity(),
            Self::ActorDead(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Roster(err) => err.error_code(),
            Self::ActorDead(_) => "ACTION_ACTOR_DEAD",
        }
    }
}
