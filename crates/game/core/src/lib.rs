//! Deterministic battle rules for the Echo combat simulator.
//!
//! `echo-core` defines the canonical rules (stats, actions, echoes, battle
//! flow, enemy AI) and exposes pure APIs that are reused by the runtime and
//! by offline tools. All battle mutation flows through
//! [`engine::BattleEngine`]; randomness is injected through
//! [`env::RngOracle`] so every battle replays from its seed.
pub mod action;
pub mod ai;
pub mod config;
pub mod echo;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use action::{ActionContext, ActionError, ActionKind, ActionProfile, ActionResult, execute};
pub use ai::{Behavior, select_action};
pub use config::BattleConfig;
pub use echo::{Echo, EchoEvent, EchoId, EchoKind, EchoSpec, EchoSystem};
pub use engine::{
    BattleEngine, BattleEvent, BattleOutcome, BattlePhase, BattleSnapshot, CharacterView,
    TurnError,
};
pub use env::{PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use state::{Character, CharacterId, CharacterTemplate, Roster, RosterError, SkillSet};
pub use stats::{CharacterStats, Modifier, Modifiers, Progression};

#[cfg(test)]
pub(crate) mod testing {
    use crate::env::RngOracle;

    /// Replays a fixed cycle of unit rolls.
    pub struct FixedRng {
        rolls: Vec<f64>,
        cursor: usize,
    }

    impl FixedRng {
        pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
            Self {
                rolls: rolls.into_iter().collect(),
                cursor: 0,
            }
        }
    }

    impl RngOracle for FixedRng {
        fn next_u32(&mut self) -> u32 {
            (self.unit() * (f64::from(u32::MAX) + 1.0)) as u32
        }

        fn unit(&mut self) -> f64 {
            let roll = self.rolls[self.cursor % self.rolls.len()];
            self.cursor += 1;
            roll
        }
    }
}
