use crate::action::{ActionContext, ActionKind, ActionResult, execute};
use crate::ai::select_action;
use crate::echo::EchoEvent;
use crate::engine::{BattleEngine, BattleEvent, BattleOutcome, BattlePhase, TurnError};
use crate::state::CharacterId;

/// Turn sequencing for BattleEngine.
///
/// Per-turn sequence for the acting side:
/// 1. tick echoes targeting the actor
/// 2. regenerate MP (blocked by an MP block)
/// 3. skip the action if the actor cannot act
/// 4. resolve the action against the opponent
/// 5. terminal check (player defeat first)
impl BattleEngine {
    /// `INTRO` → `PLAYER_TURN` (or `PLAYER_ACTION` if the player starts stunned).
    pub fn start(&mut self) -> Result<BattlePhase, TurnError> {
        match self.phase {
            BattlePhase::Intro => {}
            phase if phase.is_terminal() => return Err(TurnError::BattleOver),
            _ => return Err(TurnError::AlreadyStarted),
        }

        let line = format!(
            "⚔️ Battle Start! {} vs {}!",
            self.player().name(),
            self.enemy().name()
        );
        self.log.push(line);
        self.events.push(BattleEvent::BattleStarted {
            player: self.player,
            enemy: self.enemy,
        });

        self.turn = 1;
        self.begin_player_turn();
        Ok(self.phase)
    }

    /// Advances the state machine by one discrete step.
    ///
    /// - `INTRO`: starts the battle
    /// - `PLAYER_ACTION`: runs the enemy turn, then opens the next player turn
    /// - `PLAYER_TURN`: error, the player must submit first
    /// - terminal phases: error
    pub fn advance(&mut self) -> Result<BattlePhase, TurnError> {
        match self.phase {
            BattlePhase::Intro => self.start(),
            BattlePhase::PlayerTurn => Err(TurnError::AwaitingPlayerAction),
            BattlePhase::PlayerAction | BattlePhase::EnemyTurn => {
                self.run_enemy_turn()?;
                Ok(self.phase)
            }
            BattlePhase::Victory | BattlePhase::Defeat => Err(TurnError::BattleOver),
        }
    }

    /// Resolves the player's chosen action.
    ///
    /// Rejections happen before any mutation. On success the phase moves to
    /// `PLAYER_ACTION`, or to a terminal phase if someone fell.
    pub fn submit_player_action(&mut self, kind: ActionKind) -> Result<ActionResult, TurnError> {
        match self.phase {
            BattlePhase::PlayerTurn => {}
            phase if phase.is_terminal() => return Err(TurnError::BattleOver),
            phase => return Err(TurnError::NotPlayerTurn { phase }),
        }
        if !self.player_skills.contains(&kind) {
            return Err(TurnError::UnknownSkill { kind });
        }
        if !kind.profile().can_use(self.player()) {
            return Err(TurnError::ActionUnavailable { kind });
        }

        let result = self.resolve_action(self.player, self.enemy, kind)?;
        self.phase = BattlePhase::PlayerAction;
        self.check_battle_end();
        Ok(result)
    }

    fn begin_player_turn(&mut self) {
        self.phase = BattlePhase::PlayerTurn;
        self.log.push(format!("--- Turn {} ---", self.turn));
        if !self.begin_turn(self.player) {
            self.phase = BattlePhase::PlayerAction;
        }
    }

    fn run_enemy_turn(&mut self) -> Result<(), TurnError> {
        self.phase = BattlePhase::EnemyTurn;

        if self.begin_turn(self.enemy) {
            let kind = select_action(
                self.enemy_behavior,
                &self.enemy_skills,
                &self.roster[self.enemy],
                self.rng.as_mut(),
            );
            self.resolve_action(self.enemy, self.player, kind)?;
            if self.check_battle_end() {
                return Ok(());
            }
        }

        self.turn += 1;
        self.begin_player_turn();
        Ok(())
    }

    /// Turn-start processing. Returns whether the actor may act.
    fn begin_turn(&mut self, actor: CharacterId) -> bool {
        self.events.push(BattleEvent::TurnStarted {
            actor,
            turn: self.turn,
        });

        let character = &mut self.roster[actor];
        self.echoes.process_turn_start(character);
        character.regenerate_mp(self.config.mp_regen_per_turn);
        self.flush_echo_events();

        let character = &self.roster[actor];
        if character.can_act() {
            return true;
        }

        let line = format!("💫 {} is stunned and cannot act!", character.name());
        self.log.push(line);
        self.events.push(BattleEvent::TurnSkipped { actor });
        false
    }

    fn resolve_action(
        &mut self,
        actor: CharacterId,
        target: CharacterId,
        kind: ActionKind,
    ) -> Result<ActionResult, TurnError> {
        let mut ctx = ActionContext {
            roster: &mut self.roster,
            echoes: &mut self.echoes,
            rng: self.rng.as_mut(),
            config: &self.config,
        };
        let result = execute(kind, actor, target, &mut ctx)?;

        self.log.push(result.message.clone());
        self.events.push(BattleEvent::ActionResolved {
            actor,
            target,
            kind,
            result: result.clone(),
        });
        Ok(result)
    }

    /// Moves echo notifications from the scheduler into the battle queue.
    fn flush_echo_events(&mut self) {
        for event in self.echoes.drain_events() {
            let line = match &event {
                EchoEvent::Triggered(echo) => format!(
                    "⚡ Echo triggered: {} on {}",
                    echo.name,
                    self.roster[echo.target].name()
                ),
                EchoEvent::Expired(echo) => format!("✨ Echo expired: {}", echo.name),
            };
            self.log.push(line);
            self.events.push(event.into());
        }
    }

    /// Enters a terminal phase if either side has fallen.
    ///
    /// The player is checked first, so a mutual knock-out is a defeat.
    fn check_battle_end(&mut self) -> bool {
        let outcome = if !self.player().is_alive() {
            let line = format!("💀 DEFEAT! {} has fallen...", self.player().name());
            self.log.push(line);
            BattleOutcome::Defeat
        } else if !self.enemy().is_alive() {
            let line = format!("🎉 VICTORY! {} defeated!", self.enemy().name());
            self.log.push(line);

            let exp_reward = self.exp_reward;
            let player = &mut self.roster[self.player];
            let leveled_up = player.gain_experience(exp_reward);

            let mut lines = vec![format!("{} gained {} EXP!", player.name(), exp_reward)];
            if leveled_up {
                lines.push(format!(
                    "⬆️ {} reached level {}!",
                    player.name(),
                    player.progression().level
                ));
            }
            self.log.extend(lines);

            BattleOutcome::Victory {
                exp_reward,
                leveled_up,
            }
        } else {
            return false;
        };

        self.phase = match outcome {
            BattleOutcome::Victory { .. } => BattlePhase::Victory,
            BattleOutcome::Defeat => BattlePhase::Defeat,
        };
        self.outcome = Some(outcome);
        self.events.push(BattleEvent::BattleEnded { outcome });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BattleConfig;
    use crate::echo::{EchoKind, EchoSpec};
    use crate::state::CharacterTemplate;
    use crate::testing::FixedRng;

    /// Hero vs aggressive goblin with every roll at the bottom of its band.
    fn engine() -> BattleEngine {
        BattleEngine::new(
            BattleConfig::default(),
            &CharacterTemplate::hero("Hero"),
            &CharacterTemplate::goblin(),
            7,
        )
        .with_rng(FixedRng::new([0.0]))
    }

    fn started() -> BattleEngine {
        let mut engine = engine();
        engine.advance().unwrap();
        engine.drain_events();
        engine
    }

    #[test]
    fn intro_to_player_turn() {
        let mut engine = engine();
        assert_eq!(engine.phase(), BattlePhase::Intro);
        assert_eq!(engine.turn(), 0);
        assert!(engine.available_actions().is_empty());

        assert_eq!(engine.advance().unwrap(), BattlePhase::PlayerTurn);
        assert_eq!(engine.turn(), 1);
        assert_eq!(engine.log()[0], "⚔️ Battle Start! Hero vs Goblin!");
        assert_eq!(engine.log()[1], "--- Turn 1 ---");
        assert_eq!(engine.available_actions(), ActionKind::ALL.to_vec());

        let events = engine.drain_events();
        assert!(matches!(events[0], BattleEvent::BattleStarted { .. }));
        assert!(matches!(
            events[1],
            BattleEvent::TurnStarted { turn: 1, .. }
        ));
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut engine = started();
        assert_eq!(engine.start(), Err(TurnError::AlreadyStarted));
    }

    #[test]
    fn submit_before_start_is_rejected() {
        let mut engine = engine();
        assert_eq!(
            engine.submit_player_action(ActionKind::Attack),
            Err(TurnError::NotPlayerTurn {
                phase: BattlePhase::Intro
            })
        );
    }

    #[test]
    fn advance_waits_for_player() {
        let mut engine = started();
        let before = engine.snapshot();
        assert_eq!(engine.advance(), Err(TurnError::AwaitingPlayerAction));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn full_cycle_increments_turn_once() {
        let mut engine = started();

        let result = engine.submit_player_action(ActionKind::Attack).unwrap();
        assert_eq!(result.damage, Some(8));
        assert_eq!(engine.phase(), BattlePhase::PlayerAction);
        assert_eq!(engine.turn(), 1);
        assert_eq!(
            engine.submit_player_action(ActionKind::Attack),
            Err(TurnError::NotPlayerTurn {
                phase: BattlePhase::PlayerAction
            })
        );

        assert_eq!(engine.advance().unwrap(), BattlePhase::PlayerTurn);
        assert_eq!(engine.turn(), 2);
        // Goblin heavy attack: floor(21.6 * 0.9) = 19, minus defense 8.
        assert_eq!(engine.player().hp(), 89);
        assert_eq!(engine.enemy().hp(), 52);
    }

    #[test]
    fn unknown_skill_is_rejected() {
        let mut engine = BattleEngine::new(
            BattleConfig::default(),
            &CharacterTemplate::hero("Hero").with_skills([ActionKind::Attack]),
            &CharacterTemplate::slime(),
            1,
        );
        engine.advance().unwrap();
        assert_eq!(
            engine.submit_player_action(ActionKind::Heal),
            Err(TurnError::UnknownSkill {
                kind: ActionKind::Heal
            })
        );
    }

    #[test]
    fn unaffordable_action_is_a_no_op() {
        let mut engine = started();
        engine.roster[engine.player].use_mp(40);
        let before = engine.snapshot();

        assert_eq!(
            engine.submit_player_action(ActionKind::PowerMagic),
            Err(TurnError::ActionUnavailable {
                kind: ActionKind::PowerMagic
            })
        );
        assert_eq!(engine.snapshot(), before);
        assert!(engine.pending_events().is_empty());
        assert!(!engine.available_actions().contains(&ActionKind::PowerMagic));
    }

    #[test]
    fn echoes_tick_only_on_their_target_turn() {
        let mut engine = started();
        let hero = engine.player_id();

        let echo = engine
            .submit_player_action(ActionKind::HeavyAttack)
            .unwrap()
            .echo
            .unwrap();
        assert_eq!(engine.player().defense(), 5);
        engine.drain_events();

        // Enemy turn leaves the hero's echo alone; the hero's turn expires it.
        engine.advance().unwrap();
        let events = engine.drain_events();
        let echo_events: Vec<_> = events.iter().filter(|e| e.is_echo()).collect();
        assert_eq!(
            echo_events,
            vec![
                &BattleEvent::EchoTriggered {
                    echo: crate::echo::Echo {
                        turns_remaining: 0,
                        ..echo.clone()
                    }
                },
                &BattleEvent::EchoExpired {
                    echo: crate::echo::Echo {
                        turns_remaining: 0,
                        ..echo.clone()
                    }
                },
            ]
        );
        assert!(matches!(
            events[0],
            BattleEvent::TurnStarted { actor, .. } if actor == engine.enemy_id()
        ));
        assert!(engine.echoes().echoes_for(hero).is_empty());
        assert_eq!(engine.player().defense(), 8);
        // 50 - 8 + 5 regen
        assert_eq!(engine.player().mp(), 47);
        assert!(engine.log().contains(&"⚡ Echo triggered: Vulnerability on Hero".to_owned()));
        assert!(engine.log().contains(&"✨ Echo expired: Vulnerability".to_owned()));
    }

    #[test]
    fn mp_block_suppresses_regen_until_expiry() {
        let mut engine = started();

        engine.submit_player_action(ActionKind::PowerMagic).unwrap();
        assert_eq!(engine.player().mp(), 30);

        engine.advance().unwrap();
        assert_eq!(engine.turn(), 2);
        assert_eq!(engine.player().mp(), 30);

        engine.submit_player_action(ActionKind::Defend).unwrap();
        engine.advance().unwrap();
        assert_eq!(engine.turn(), 3);
        assert_eq!(engine.player().mp(), 35);
        assert!(!engine.player().modifiers().has(EchoKind::MpBlock));
    }

    #[test]
    fn stunned_player_skips_but_still_ticks_and_regenerates() {
        let mut engine = engine();
        let (hero, goblin) = (engine.player_id(), engine.enemy_id());
        engine.roster[hero].use_mp(10);
        engine
            .echoes
            .add_echo(
                &mut engine.roster,
                EchoSpec::new("Daze", EchoKind::Stun, 1.0, 2, hero, goblin),
            )
            .unwrap();

        assert_eq!(engine.advance().unwrap(), BattlePhase::PlayerAction);
        assert_eq!(engine.player().mp(), 45);
        assert!(
            engine
                .drain_events()
                .contains(&BattleEvent::TurnSkipped { actor: hero })
        );
        assert_eq!(
            engine.submit_player_action(ActionKind::Attack),
            Err(TurnError::NotPlayerTurn {
                phase: BattlePhase::PlayerAction
            })
        );

        assert_eq!(engine.advance().unwrap(), BattlePhase::PlayerTurn);
        assert!(engine.player().can_act());
    }

    #[test]
    fn victory_awards_experience() {
        let mut engine = started();
        engine.roster[engine.enemy].take_direct_damage(59);

        engine.submit_player_action(ActionKind::Attack).unwrap();

        assert_eq!(engine.phase(), BattlePhase::Victory);
        assert_eq!(
            engine.outcome(),
            Some(BattleOutcome::Victory {
                exp_reward: 50,
                leveled_up: false
            })
        );
        assert_eq!(engine.player().progression().experience, 50);
        assert_eq!(
            engine.drain_events().last(),
            Some(&BattleEvent::BattleEnded {
                outcome: BattleOutcome::Victory {
                    exp_reward: 50,
                    leveled_up: false
                }
            })
        );
        assert!(engine.log().contains(&"🎉 VICTORY! Goblin defeated!".to_owned()));

        assert_eq!(engine.advance(), Err(TurnError::BattleOver));
        assert_eq!(
            engine.submit_player_action(ActionKind::Attack),
            Err(TurnError::BattleOver)
        );
        assert_eq!(engine.start(), Err(TurnError::BattleOver));
    }

    #[test]
    fn enemy_kill_is_defeat() {
        let mut engine = started();
        engine.roster[engine.player].take_direct_damage(95);

        engine.submit_player_action(ActionKind::Attack).unwrap();
        assert_eq!(engine.advance().unwrap(), BattlePhase::Defeat);
        assert_eq!(engine.outcome(), Some(BattleOutcome::Defeat));
        assert_eq!(engine.turn(), 1);
        assert_eq!(engine.log().last().unwrap(), "💀 DEFEAT! Hero has fallen...");
    }

    #[test]
    fn mutual_knockout_is_defeat() {
        let mut engine = started();
        engine.roster[engine.player].set_alive(false);
        engine.roster[engine.enemy].set_alive(false);

        assert!(engine.check_battle_end());
        assert_eq!(engine.outcome(), Some(BattleOutcome::Defeat));
        assert_eq!(engine.player().progression().experience, 0);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut engine = started();
        engine.submit_player_action(ActionKind::HeavyAttack).unwrap();
        engine.advance().unwrap();
        engine.submit_player_action(ActionKind::Heal).unwrap();

        engine.reset();

        assert_eq!(engine.phase(), BattlePhase::Intro);
        assert_eq!(engine.turn(), 0);
        assert_eq!(engine.encounter(), 1);
        assert!(engine.echoes().is_empty());
        assert!(engine.log().is_empty());
        assert!(engine.pending_events().is_empty());
        assert_eq!(engine.player().hp(), 100);
        assert_eq!(engine.enemy().hp(), 60);
        assert!(engine.player().modifiers().is_empty());

        engine.advance().unwrap();
        let echo = engine
            .submit_player_action(ActionKind::Heal)
            .unwrap()
            .echo
            .unwrap();
        assert_eq!(echo.id, crate::echo::EchoId(1));
    }

    #[test]
    fn same_seed_same_battle() {
        let play = || {
            let mut engine = BattleEngine::new(
                BattleConfig::default(),
                &CharacterTemplate::hero("Hero"),
                &CharacterTemplate::slime(),
                2024,
            );
            engine.advance().unwrap();
            while !engine.is_over() {
                engine.submit_player_action(ActionKind::Attack).unwrap();
                if !engine.is_over() {
                    engine.advance().unwrap();
                }
            }
            engine.log().to_vec()
        };
        assert_eq!(play(), play());
    }
}
