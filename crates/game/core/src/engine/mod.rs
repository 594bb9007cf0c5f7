//! Battle state machine.
//!
//! The [`BattleEngine`] owns one encounter: both combatants, the echo
//! scheduler, the RNG stream and the battle log. It is driven by discrete
//! calls from outside:
//!
//! - [`BattleEngine::advance`] starts the battle or runs the enemy turn
//! - [`BattleEngine::submit_player_action`] resolves the player's choice
//!
//! Each call runs to completion and queues [`BattleEvent`]s for the caller.
//! Turn sequencing lives in `turns.rs`.

mod errors;
mod events;
mod phase;
mod snapshot;
mod turns;

pub use errors::TurnError;
pub use events::BattleEvent;
pub use phase::{BattleOutcome, BattlePhase};
pub use snapshot::{BattleSnapshot, CharacterView};

use crate::action::ActionKind;
use crate::ai::Behavior;
use crate::config::BattleConfig;
use crate::echo::EchoSystem;
use crate::env::{PcgRng, RngOracle, compute_seed};
use crate::state::{Character, CharacterId, CharacterTemplate, Roster, SkillSet};

/// RNG stream context shared by damage rolls and AI decisions.
const BATTLE_STREAM: u32 = 0;

pub struct BattleEngine {
    config: BattleConfig,
    roster: Roster,
    echoes: EchoSystem,
    player: CharacterId,
    enemy: CharacterId,
    player_skills: SkillSet,
    enemy_skills: SkillSet,
    enemy_behavior: Behavior,
    exp_reward: u32,
    phase: BattlePhase,
    turn: u32,
    seed: u64,
    encounter: u64,
    rng: Box<dyn RngOracle>,
    events: Vec<BattleEvent>,
    log: Vec<String>,
    outcome: Option<BattleOutcome>,
}

impl BattleEngine {
    /// Sets up a battle in the `INTRO` phase.
    pub fn new(
        config: BattleConfig,
        player: &CharacterTemplate,
        enemy: &CharacterTemplate,
        seed: u64,
    ) -> Self {
        let mut roster = Roster::new();
        let player_id = player.spawn(&mut roster);
        let enemy_id = enemy.spawn(&mut roster);

        Self {
            config,
            roster,
            echoes: EchoSystem::new(),
            player: player_id,
            enemy: enemy_id,
            player_skills: player.skills.clone(),
            enemy_skills: enemy.skills.clone(),
            enemy_behavior: enemy.behavior,
            exp_reward: enemy.exp_reward,
            phase: BattlePhase::Intro,
            turn: 0,
            seed,
            encounter: 0,
            rng: Self::encounter_rng(seed, 0),
            events: Vec::new(),
            log: Vec::new(),
            outcome: None,
        }
    }

    /// Replaces the random stream for the current encounter.
    ///
    /// [`reset`](Self::reset) goes back to the seeded stream.
    pub fn with_rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    fn encounter_rng(seed: u64, encounter: u64) -> Box<dyn RngOracle> {
        Box::new(PcgRng::new(compute_seed(seed, encounter, 0, BATTLE_STREAM)))
    }

    /// Restarts the encounter: full resources, no echoes, back to `INTRO`.
    ///
    /// Progression earned so far is kept. The next encounter draws from a
    /// fresh stream derived from the same seed.
    pub fn reset(&mut self) {
        self.echoes.clear(&mut self.roster);
        for character in self.roster.iter_mut() {
            character.reset();
        }

        self.phase = BattlePhase::Intro;
        self.turn = 0;
        self.outcome = None;
        self.events.clear();
        self.log.clear();

        self.encounter += 1;
        self.rng = Self::encounter_rng(self.seed, self.encounter);
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Current turn number; 0 before the battle starts.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn encounter(&self) -> u64 {
        self.encounter
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn player_id(&self) -> CharacterId {
        self.player
    }

    pub fn enemy_id(&self) -> CharacterId {
        self.enemy
    }

    pub fn player(&self) -> &Character {
        &self.roster[self.player]
    }

    pub fn enemy(&self) -> &Character {
        &self.roster[self.enemy]
    }

    pub fn echoes(&self) -> &EchoSystem {
        &self.echoes
    }

    pub fn player_skills(&self) -> &[ActionKind] {
        &self.player_skills
    }

    pub fn enemy_behavior(&self) -> Behavior {
        self.enemy_behavior
    }

    /// Player skills usable right now, in skill-list order.
    ///
    /// Empty outside `PLAYER_TURN`.
    pub fn available_actions(&self) -> Vec<ActionKind> {
        if self.phase != BattlePhase::PlayerTurn {
            return Vec::new();
        }
        let player = self.player();
        self.player_skills
            .iter()
            .copied()
            .filter(|kind| kind.profile().can_use(player))
            .collect()
    }

    /// Battle log lines, oldest first.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Events queued since the last drain, oldest first.
    pub fn pending_events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            phase: self.phase,
            turn: self.turn,
            player: CharacterView::from(self.player()),
            enemy: CharacterView::from(self.enemy()),
            echoes: self.echoes.all_echoes(),
            outcome: self.outcome,
        }
    }
}
