//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the battle engine, content lookups, and action
//! providers so clients can bubble them up with consistent context.
use thiserror::Error;

use echo_core::TurnError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error("player action provider not set")]
    ProviderNotSet,

    #[error("runtime requires a {role} template before building")]
    MissingCombatant { role: &'static str },

    #[error("unknown character '{0}'")]
    UnknownCharacter(String),

    #[error("battle did not finish within {max_turns} turns")]
    TurnLimitReached { max_turns: u32 },
}
