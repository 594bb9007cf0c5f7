//! Battle participants.
//!
//! Characters live in a [`Roster`] and are referred to by [`CharacterId`].
//! Their modifiers are mutated only by the echo scheduler; everything else
//! flows through the action catalog and the battle engine.

mod character;
mod common;
mod error;
mod roster;
mod template;

pub use character::Character;
pub use common::CharacterId;
pub use error::RosterError;
pub use roster::Roster;
pub use template::{CharacterTemplate, SkillSet};
