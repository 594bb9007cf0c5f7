//! Data-driven character definitions.
//!
//! A [`CharacterTemplate`] holds everything needed to spawn a combatant. The
//! content crate loads them from RON; tests build them with the presets below.

use arrayvec::ArrayVec;

use crate::action::ActionKind;
use crate::ai::Behavior;
use crate::config::BattleConfig;
use crate::state::{CharacterId, Roster};
use crate::stats::CharacterStats;

/// Ordered skill list. Order matters for AI selection.
pub type SkillSet = ArrayVec<ActionKind, { BattleConfig::MAX_SKILLS }>;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterTemplate {
    pub name: String,
    pub stats: CharacterStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: SkillSet,
    #[cfg_attr(feature = "serde", serde(default))]
    pub behavior: Behavior,
    /// Experience granted to the winner when this character is defeated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exp_reward: u32,
}

impl CharacterTemplate {
    pub fn new(name: impl Into<String>, stats: CharacterStats) -> Self {
        Self {
            name: name.into(),
            stats,
            skills: SkillSet::new(),
            behavior: Behavior::default(),
            exp_reward: 0,
        }
    }

    /// Replaces the skill list, keeping at most `MAX_SKILLS` entries.
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = ActionKind>) -> Self {
        self.skills = skills.into_iter().take(BattleConfig::MAX_SKILLS).collect();
        self
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_exp_reward(mut self, exp_reward: u32) -> Self {
        self.exp_reward = exp_reward;
        self
    }

    /// Spawns a fresh character from this template.
    pub fn spawn(&self, roster: &mut Roster) -> CharacterId {
        roster.spawn(self.name.clone(), self.stats)
    }

    /// The player character: every catalog action.
    pub fn hero(name: impl Into<String>) -> Self {
        Self::new(name, CharacterStats::new(100, 50, 15, 8, 10, 12))
            .with_skills(ActionKind::ALL)
    }

    pub fn slime() -> Self {
        Self::new("Slime", CharacterStats::new(40, 10, 8, 3, 5, 2))
            .with_skills([ActionKind::Attack, ActionKind::HeavyAttack])
            .with_behavior(Behavior::Random)
            .with_exp_reward(30)
    }

    pub fn goblin() -> Self {
        Self::new("Goblin", CharacterStats::new(60, 20, 12, 5, 8, 5))
            .with_skills([ActionKind::Attack, ActionKind::HeavyAttack])
            .with_behavior(Behavior::Aggressive)
            .with_exp_reward(50)
    }

    pub fn dark_knight() -> Self {
        Self::new("Dark Knight", CharacterStats::new(120, 40, 18, 12, 6, 8))
            .with_skills([ActionKind::Attack, ActionKind::HeavyAttack])
            .with_behavior(Behavior::Balanced)
            .with_exp_reward(100)
    }
}
