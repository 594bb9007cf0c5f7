use crate::echo::Echo;

/// Notification produced by the scheduler.
///
/// Events are queued in the order they happen and drained by the owner of the
/// scheduler; the scheduler itself never calls out.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EchoEvent {
    /// The echo ticked at its target's turn start (also on the expiring tick).
    Triggered(Echo),
    /// The echo left the registry and its target's modifier list.
    Expired(Echo),
}

impl EchoEvent {
    pub fn echo(&self) -> &Echo {
        match self {
            Self::Triggered(echo) | Self::Expired(echo) => echo,
        }
    }
}
