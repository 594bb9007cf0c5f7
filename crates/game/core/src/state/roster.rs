//! Character arena.
//!
//! Characters are stored by index and addressed with [`CharacterId`] handles.
//! Handles are never reused while the roster lives.

use core::ops::{Index, IndexMut};

use crate::state::{Character, CharacterId, RosterError};
use crate::stats::CharacterStats;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a character at full resources and returns its handle.
    pub fn spawn(&mut self, name: impl Into<String>, stats: CharacterStats) -> CharacterId {
        let id = CharacterId(self.characters.len() as u32);
        self.characters.push(Character::new(id, name, stats));
        id
    }

    pub fn get(&self, id: CharacterId) -> Result<&Character, RosterError> {
        self.characters
            .get(id.index())
            .ok_or(RosterError::UnknownCharacter(id))
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Result<&mut Character, RosterError> {
        self.characters
            .get_mut(id.index())
            .ok_or(RosterError::UnknownCharacter(id))
    }

    /// Borrows two distinct characters mutably at once.
    pub fn pair_mut(
        &mut self,
        first: CharacterId,
        second: CharacterId,
    ) -> Result<(&mut Character, &mut Character), RosterError> {
        if first == second {
            return Err(RosterError::SameCharacter(first));
        }
        let len = self.characters.len();
        for id in [first, second] {
            if id.index() >= len {
                return Err(RosterError::UnknownCharacter(id));
            }
        }

        let (low, high, swapped) = if first.index() < second.index() {
            (first.index(), second.index(), false)
        } else {
            (second.index(), first.index(), true)
        };
        let (head, tail) = self.characters.split_at_mut(high);
        let (a, b) = (&mut head[low], &mut tail[0]);

        Ok(if swapped { (b, a) } else { (a, b) })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Character> {
        self.characters.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

/// Panics on a handle that was not issued by this roster, like slice indexing.
impl Index<CharacterId> for Roster {
    type Output = Character;

    fn index(&self, id: CharacterId) -> &Character {
        &self.characters[id.index()]
    }
}

impl IndexMut<CharacterId> for Roster {
    fn index_mut(&mut self, id: CharacterId) -> &mut Character {
        &mut self.characters[id.index()]
    }
}
