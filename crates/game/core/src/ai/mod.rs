//! Enemy action selection.
//!
//! A pure function of the enemy's [`Behavior`] tag, its skill list and its
//! current state. Randomness comes from the injected [`RngOracle`], so the
//! same seed always yields the same choices.

use core::str::FromStr;

use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::action::ActionKind;
use crate::env::RngOracle;
use crate::state::Character;

/// Fixed AI policy of an enemy.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Behavior {
    /// Always the last usable skill (the strongest by convention).
    Aggressive,
    /// Always the first usable skill.
    Defensive,
    /// Coin flip between the first two usable skills while above half HP.
    #[default]
    Balanced,
    /// Uniform pick among usable skills.
    Random,
}

impl Behavior {
    /// Parses a behavior tag; unknown tags fall back to [`Behavior::Random`].
    pub fn from_tag(tag: &str) -> Self {
        Self::from_str(tag).unwrap_or(Self::Random)
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Chooses the action `actor` takes this turn.
///
/// Only skills whose profile passes `can_use` are considered, in skill-list
/// order. When none is usable the basic attack is returned.
pub fn select_action(
    behavior: Behavior,
    skills: &[ActionKind],
    actor: &Character,
    rng: &mut dyn RngOracle,
) -> ActionKind {
    let usable: Vec<ActionKind> = skills
        .iter()
        .copied()
        .filter(|kind| kind.profile().can_use(actor))
        .collect();

    let Some((&first, _)) = usable.split_first() else {
        return ActionKind::Attack;
    };

    match behavior {
        Behavior::Aggressive => usable[usable.len() - 1],
        Behavior::Defensive => first,
        Behavior::Balanced => {
            let healthy = u64::from(actor.hp()) * 2 > u64::from(actor.stats().max_hp);
            if healthy && usable.len() > 1 && rng.unit() > 0.5 {
                usable[1]
            } else {
                first
            }
        }
        Behavior::Random => usable[rng.below(usable.len())],
    }
}
