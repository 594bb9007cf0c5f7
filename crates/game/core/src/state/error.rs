//! State management errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::CharacterId;

/// Errors that occur while looking characters up in a roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RosterError {
    /// No character is registered under this handle.
    #[error("character {0} is not in the roster")]
    UnknownCharacter(CharacterId),

    /// A disjoint pair was requested with the same handle twice.
    #[error("character {0} cannot act on itself as a separate target")]
    SameCharacter(CharacterId),
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCharacter(_) => "ROSTER_UNKNOWN_CHARACTER",
            Self::SameCharacter(_) => "ROSTER_SAME_CHARACTER",
        }
    }
}
