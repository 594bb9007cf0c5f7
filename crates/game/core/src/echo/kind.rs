//! Echo categories.

use strum::{EnumIter, EnumString, IntoStaticStr};

/// Types of delayed effects.
///
/// `value` semantics depend on the kind: percentage kinds read it as a
/// fraction in `[0, 1]`, flag-like kinds (MpBlock, Stun) ignore it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, strum::Display,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EchoKind {
    // ========================================================================
    // Debuffs
    // ========================================================================
    /// Defense multiplied by `1 - value`.
    DefenseReduction,

    /// MP regeneration suppressed.
    MpBlock,

    /// Attack multiplied by `1 - value / 2`.
    Fatigue,

    /// Damage over time. Carried as data; no catalog action creates it.
    Poison,

    /// Cannot act.
    Stun,

    // ========================================================================
    // Buffs
    // ========================================================================
    /// Attack multiplied by `1 + value`.
    AttackBoost,

    /// Healing over time. Carried as data; no catalog action creates it.
    Regen,

    /// Defense multiplied by `1 + value`.
    DefenseBoost,
}

impl EchoKind {
    /// Returns true for echoes that help their target.
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::AttackBoost | Self::Regen | Self::DefenseBoost)
    }

    /// Returns the snake_case tag of this kind.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
