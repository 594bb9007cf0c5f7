//! Character state: resources, modifiers and life.
//!
//! # Invariants
//!
//! - `hp` stays within `[0, stats.max_hp]`, `mp` within `[0, stats.max_mp]`
//! - `alive` is cleared whenever `hp` reaches 0 (and may also be set directly)
//! - `modifiers` only change through the [`EchoSystem`](crate::echo::EchoSystem)
//!   or [`Character::reset`]

use crate::echo::{EchoId, EchoKind};
use crate::state::CharacterId;
use crate::stats::{CharacterStats, Modifier, Modifiers, Progression};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    id: CharacterId,
    name: String,
    hp: u32,
    mp: u32,
    stats: CharacterStats,
    modifiers: Modifiers,
    alive: bool,
    progression: Progression,
}

impl Character {
    /// Creates a character at full HP and MP.
    pub fn new(id: CharacterId, name: impl Into<String>, stats: CharacterStats) -> Self {
        Self {
            id,
            name: name.into(),
            hp: stats.max_hp,
            mp: stats.max_mp,
            stats,
            modifiers: Modifiers::new(),
            alive: true,
            progression: Progression::new(),
        }
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn mp(&self) -> u32 {
        self.mp
    }

    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Attack after modifiers, at least 1.
    pub fn attack(&self) -> u32 {
        self.modifiers.effective_attack(self.stats.attack)
    }

    /// Defense after modifiers, at least 0.
    pub fn defense(&self) -> u32 {
        self.modifiers.effective_defense(self.stats.defense)
    }

    /// Applies `raw` damage mitigated by defense. Always deals at least 1.
    ///
    /// Returns the damage dealt (before clamping HP at zero).
    pub fn take_damage(&mut self, raw: u32) -> u32 {
        let actual = raw.saturating_sub(self.defense()).max(1);
        self.lose_hp(actual);
        actual
    }

    /// Applies damage straight to HP, ignoring defense and the 1-damage floor.
    pub fn take_direct_damage(&mut self, amount: u32) -> u32 {
        self.lose_hp(amount);
        amount
    }

    fn lose_hp(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
        if self.hp == 0 {
            self.alive = false;
        }
    }

    /// Restores HP up to the maximum; returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.stats.max_hp.saturating_sub(self.hp));
        self.hp += actual;
        actual
    }

    /// Spends MP. Fails without mutation if the pool is too small.
    pub fn use_mp(&mut self, amount: u32) -> bool {
        if self.mp < amount {
            return false;
        }
        self.mp -= amount;
        true
    }

    /// Regenerates MP up to the maximum unless an MP block is active.
    pub fn regenerate_mp(&mut self, amount: u32) {
        if self.modifiers.has(EchoKind::MpBlock) {
            return;
        }
        self.mp = self.stats.max_mp.min(self.mp.saturating_add(amount));
    }

    /// True while alive and not stunned.
    pub fn can_act(&self) -> bool {
        self.alive && !self.modifiers.has(EchoKind::Stun)
    }

    pub(crate) fn add_modifier(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }

    pub(crate) fn remove_modifier(&mut self, echo: EchoId) -> Option<Modifier> {
        self.modifiers.remove(echo)
    }

    /// Adds experience; on level up grows stats and restores HP/MP.
    ///
    /// Returns true if a level was gained.
    pub fn gain_experience(&mut self, amount: u32) -> bool {
        if !self.progression.gain(amount) {
            return false;
        }
        Progression::grow(&mut self.stats);
        self.hp = self.stats.max_hp;
        self.mp = self.stats.max_mp;
        true
    }

    /// Restores the character for a new battle. Progression is kept.
    ///
    /// Callers that also own an [`EchoSystem`](crate::echo::EchoSystem) must
    /// clear it as well so no registry entry outlives its modifier.
    pub fn reset(&mut self) {
        self.hp = self.stats.max_hp;
        self.mp = self.stats.max_mp;
        self.modifiers.clear();
        self.alive = true;
    }
}
