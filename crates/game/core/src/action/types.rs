//! Action outcome.

use crate::echo::Echo;

/// Immediate result of executing an action.
///
/// A rejected action (`success == false`) never carries damage, healing or an
/// echo and has spent no MP.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionResult {
    pub success: bool,
    pub damage: Option<u32>,
    pub healing: Option<u32>,
    pub mp_used: u32,
    /// Human-readable battle log line(s).
    pub message: String,
    /// Echo scheduled by this action, if any.
    pub echo: Option<Echo>,
}

impl ActionResult {
    pub(crate) fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            damage: None,
            healing: None,
            mp_used: 0,
            message: message.into(),
            echo: None,
        }
    }

    pub(crate) fn succeeded(mp_used: u32, message: impl Into<String>) -> Self {
        Self {
            success: true,
            damage: None,
            healing: None,
            mp_used,
            message: message.into(),
            echo: None,
        }
    }

    pub(crate) fn with_damage(mut self, damage: u32) -> Self {
        self.damage = Some(damage);
        self
    }

    pub(crate) fn with_healing(mut self, healing: u32) -> Self {
        self.healing = Some(healing);
        self
    }

    pub(crate) fn with_echo(mut self, echo: Echo) -> Self {
        self.echo = Some(echo);
        self
    }
}
