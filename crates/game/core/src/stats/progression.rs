//! Experience and level growth.
//!
//! Formula: a level up happens when `experience >= level × 100`; experience
//! resets to zero and every level grants +10 max HP, +5 max MP, +2 attack,
//! +1 defense and +2 magic power.

use super::CharacterStats;

/// Experience needed per level.
const EXP_PER_LEVEL: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    pub level: u32,
    pub experience: u32,
}

impl Progression {
    pub const fn new() -> Self {
        Self {
            level: 1,
            experience: 0,
        }
    }

    /// Experience required to reach the next level.
    pub const fn experience_to_next(&self) -> u32 {
        self.level.saturating_mul(EXP_PER_LEVEL)
    }

    /// Adds experience; returns true if a level was gained.
    pub(crate) fn gain(&mut self, amount: u32) -> bool {
        self.experience = self.experience.saturating_add(amount);
        if self.experience >= self.experience_to_next() {
            self.level = self.level.saturating_add(1);
            self.experience = 0;
            return true;
        }
        false
    }

    /// Stat growth applied on every level up.
    pub(crate) fn grow(stats: &mut CharacterStats) {
        stats.max_hp = stats.max_hp.saturating_add(10);
        stats.max_mp = stats.max_mp.saturating_add(5);
        stats.attack = stats.attack.saturating_add(2);
        stats.defense = stats.defense.saturating_add(1);
        stats.magic_power = stats.magic_power.saturating_add(2);
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}
