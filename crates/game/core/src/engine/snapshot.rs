//! Read-only battle views for presentation layers.

use crate::echo::Echo;
use crate::engine::{BattleOutcome, BattlePhase};
use crate::state::{Character, CharacterId};
use crate::stats::Modifier;

/// Display data for one combatant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterView {
    pub id: CharacterId,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
    pub alive: bool,
    pub can_act: bool,
    pub level: u32,
    pub experience: u32,
    pub modifiers: Vec<Modifier>,
}

impl From<&Character> for CharacterView {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id(),
            name: character.name().to_owned(),
            hp: character.hp(),
            max_hp: character.stats().max_hp,
            mp: character.mp(),
            max_mp: character.stats().max_mp,
            attack: character.attack(),
            defense: character.defense(),
            alive: character.is_alive(),
            can_act: character.can_act(),
            level: character.progression().level,
            experience: character.progression().experience,
            modifiers: character.modifiers().iter().copied().collect(),
        }
    }
}

/// Everything a presentation layer needs to draw the battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    pub phase: BattlePhase,
    pub turn: u32,
    pub player: CharacterView,
    pub enemy: CharacterView,
    /// Live echoes in registry order.
    pub echoes: Vec<Echo>,
    pub outcome: Option<BattleOutcome>,
}

impl BattleSnapshot {
    /// Live echoes targeting `character`.
    pub fn echoes_on(&self, character: CharacterId) -> impl Iterator<Item = &Echo> {
        self.echoes.iter().filter(move |e| e.target == character)
    }
}
