//! Stat system.
//!
//! # Architecture
//!
//! ```text
//! [ CharacterStats (base snapshot) ]
//!      ↓
//! [ Modifiers (live echo effects, multiplicative) ]
//!      ↓
//! [ Effective attack / defense ]
//! ```
//!
//! Base stats change only through progression (level up). Everything an echo
//! does to a character is expressed as a [`Modifier`] and folded in when an
//! effective value is read, so removing the modifier restores the base value
//! exactly.

pub mod modifiers;
pub mod progression;

pub use modifiers::{Modifier, Modifiers};
pub use progression::Progression;

/// Base stats of a character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStats {
    pub max_hp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub magic_power: u32,
}

impl CharacterStats {
    pub const fn new(
        max_hp: u32,
        max_mp: u32,
        attack: u32,
        defense: u32,
        speed: u32,
        magic_power: u32,
    ) -> Self {
        Self {
            max_hp,
            max_mp,
            attack,
            defense,
            speed,
            magic_power,
        }
    }
}
