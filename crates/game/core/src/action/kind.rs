//! Action kind enumeration - the fixed skill catalog.

use core::fmt;

use strum::{EnumIter, EnumString, IntoStaticStr};

use super::ActionProfile;

/// Skills a character can use on its turn.
///
/// Static metadata (name, MP cost, icon) lives in [`ActionProfile`]; the
/// behavior of each variant is in [`execute`](super::execute).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionKind {
    // ========================================================================
    // Physical
    // ========================================================================
    /// Basic attack. Always usable by a character that can act.
    Attack,

    /// 1.8x attack; leaves the attacker vulnerable.
    HeavyAttack,

    // ========================================================================
    // Magic
    // ========================================================================
    /// Flat heal; causes fatigue.
    Heal,

    /// Magic damage that ignores defense; blocks MP regeneration.
    PowerMagic,

    // ========================================================================
    // Support
    // ========================================================================
    /// Small heal now, raised defense next turn.
    Defend,
}

impl ActionKind {
    /// Every catalog entry, in menu order.
    pub const ALL: [ActionKind; 5] = [
        Self::Attack,
        Self::HeavyAttack,
        Self::Heal,
        Self::PowerMagic,
        Self::Defend,
    ];

    pub fn profile(self) -> &'static ActionProfile {
        ActionProfile::of(self)
    }

    /// Stable snake_case tag used in content files.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().name)
    }
}
