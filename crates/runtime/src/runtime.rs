//! High-level runtime orchestrator.
//!
//! The runtime owns one [`BattleEngine`], asks the player's
//! [`ActionProvider`] for choices, and republishes every engine event on the
//! [`EventBus`]. It exposes a builder-based API for clients to drive battles.

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use echo_content::CharacterCatalog;
use echo_core::{
    BattleConfig, BattleEngine, BattleEvent, BattleOutcome, BattlePhase, BattleSnapshot,
    CharacterId, CharacterTemplate, GameError,
};

use crate::api::{ActionProvider, Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};

/// Runtime configuration shared across the orchestrator and the event bus.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    pub event_buffer_size: usize,
    /// Game seed; a random one is drawn at build time when unset.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            event_buffer_size: 100,
            seed: None,
        }
    }
}

/// Main runtime that orchestrates one battle at a time.
///
/// Each [`step`](Runtime::step) resolves exactly one discrete engine event:
/// the battle start, a player submission, or an enemy turn.
pub struct Runtime {
    engine: BattleEngine,
    player_provider: Box<dyn ActionProvider>,
    event_bus: EventBus,
    next_seq: u64,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn engine(&self) -> &BattleEngine {
        &self.engine
    }

    pub fn phase(&self) -> BattlePhase {
        self.engine.phase()
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        self.engine.snapshot()
    }

    /// Get a handle to the event bus; clones share its channels.
    pub fn event_bus(&self) -> EventBus {
        self.event_bus.clone()
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Swap the player's provider between battles or mid-battle.
    pub fn set_player_provider(&mut self, provider: impl ActionProvider + 'static) {
        self.player_provider = Box::new(provider);
    }

    /// Advance the battle by one discrete event and return the new phase.
    ///
    /// In `PLAYER_TURN` the player's provider is consulted; a choice the
    /// engine rejects surfaces as [`RuntimeError::Turn`] and leaves the
    /// battle untouched.
    pub async fn step(&mut self) -> Result<BattlePhase> {
        let turn_before = self.engine.turn();
        let result = match self.engine.phase() {
            BattlePhase::PlayerTurn => self.play_player_turn().await,
            _ => self.engine.advance().map_err(RuntimeError::from),
        };
        // Flush before propagating so rejected steps never strand events.
        self.publish_events(turn_before);
        if let Err(RuntimeError::Turn(err)) = &result {
            warn!(
                code = err.error_code(),
                severity = err.severity().as_str(),
                "step rejected: {}",
                err
            );
        }
        result
    }

    /// Step until the battle ends.
    ///
    /// Fails with [`RuntimeError::TurnLimitReached`] once turn `max_turns`
    /// has been played without a result.
    pub async fn run_to_completion(&mut self, max_turns: u32) -> Result<BattleOutcome> {
        loop {
            if let Some(outcome) = self.engine.outcome() {
                return Ok(outcome);
            }
            if self.engine.turn() > max_turns {
                return Err(RuntimeError::TurnLimitReached { max_turns });
            }
            self.step().await?;
        }
    }

    /// Start the next encounter against the same opponent.
    ///
    /// Combatants keep their progression; echoes and resources are reset.
    pub fn restart(&mut self) {
        self.engine.reset();
        info!(encounter = self.engine.encounter(), "battle restarted");
    }

    async fn play_player_turn(&mut self) -> Result<BattlePhase> {
        let actor = self.engine.player_id();
        let usable = self.engine.available_actions();
        let snapshot = self.engine.snapshot();

        let kind = self
            .player_provider
            .provide_action(actor, &snapshot, &usable)
            .await?;
        debug!(turn = self.engine.turn(), action = %kind, "player chose action");

        self.engine.submit_player_action(kind)?;
        Ok(self.engine.phase())
    }

    /// Stamps each drained event with the turn it happened in.
    ///
    /// `turn` is the engine's turn when the step began; every `TurnStarted`
    /// moves the stamp forward, so an enemy turn keeps its own number even
    /// though the same step opens the next player turn.
    fn publish_events(&mut self, mut turn: u32) {
        let encounter = self.engine.encounter();

        for battle in self.engine.drain_events() {
            if let BattleEvent::TurnStarted { turn: started, .. } = battle {
                turn = started;
            }
            self.trace_event(&battle);
            self.event_bus.publish(Event {
                seq: self.next_seq,
                encounter,
                turn,
                battle,
            });
            self.next_seq += 1;
        }
    }

    fn name_of(&self, id: CharacterId) -> &str {
        if id == self.engine.player_id() {
            self.engine.player().name()
        } else {
            self.engine.enemy().name()
        }
    }

    fn trace_event(&self, event: &BattleEvent) {
        let name = |id: CharacterId| self.name_of(id);

        match event {
            BattleEvent::BattleStarted { player, enemy } => {
                info!(player = name(*player), enemy = name(*enemy), "battle started");
            }
            BattleEvent::TurnStarted { actor, turn } => {
                info!(turn, actor = name(*actor), "turn started");
            }
            BattleEvent::EchoTriggered { echo } => {
                debug!(echo = %echo.name, target = name(echo.target), "echo triggered");
            }
            BattleEvent::EchoExpired { echo } => {
                debug!(echo = %echo.name, target = name(echo.target), "echo expired");
            }
            BattleEvent::TurnSkipped { actor } => {
                info!(actor = name(*actor), "turn skipped");
            }
            BattleEvent::ActionResolved {
                actor, kind, result, ..
            } => {
                debug!(
                    actor = name(*actor),
                    action = %kind,
                    success = result.success,
                    message = %result.message,
                    "action resolved"
                );
            }
            BattleEvent::BattleEnded { outcome } => match outcome {
                BattleOutcome::Victory {
                    exp_reward,
                    leveled_up,
                } => info!(exp_reward, leveled_up, "battle won"),
                BattleOutcome::Defeat => info!("battle lost"),
            },
        }
    }
}

/// Builder for constructing a [`Runtime`]
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    player: Option<CharacterTemplate>,
    enemy: Option<CharacterTemplate>,
    player_provider: Option<Box<dyn ActionProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            player: None,
            enemy: None,
            player_provider: None,
        }
    }

    /// Set runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player(mut self, template: CharacterTemplate) -> Self {
        self.player = Some(template);
        self
    }

    pub fn enemy(mut self, template: CharacterTemplate) -> Self {
        self.enemy = Some(template);
        self
    }

    /// Pick both combatants from a catalog by key.
    pub fn from_catalog(
        self,
        catalog: &CharacterCatalog,
        player_key: &str,
        enemy_key: &str,
    ) -> Result<Self> {
        let lookup = |key: &str| {
            catalog
                .get(key)
                .cloned()
                .ok_or_else(|| RuntimeError::UnknownCharacter(key.to_owned()))
        };
        let player = lookup(player_key)?;
        let enemy = lookup(enemy_key)?;
        Ok(self.player(player).enemy(enemy))
    }

    /// Set player action provider
    pub fn player_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.player_provider = Some(Box::new(provider));
        self
    }

    /// Build the runtime with the battle in its `INTRO` phase.
    pub fn build(self) -> Result<Runtime> {
        let player = self
            .player
            .ok_or(RuntimeError::MissingCombatant { role: "player" })?;
        let enemy = self
            .enemy
            .ok_or(RuntimeError::MissingCombatant { role: "enemy" })?;
        let player_provider = self.player_provider.ok_or(RuntimeError::ProviderNotSet)?;

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let engine = BattleEngine::new(self.config.battle, &player, &enemy, seed);
        info!(
            seed,
            player = %player.name,
            enemy = %enemy.name,
            "runtime ready"
        );

        Ok(Runtime {
            engine,
            player_provider,
            event_bus: EventBus::with_capacity(self.config.event_buffer_size),
            next_seq: 0,
        })
    }
}
