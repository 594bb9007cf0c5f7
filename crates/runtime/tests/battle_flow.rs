//! End-to-end battles driven through the runtime.

use echo_content::CharacterCatalog;
use echo_core::{
    ActionKind, BattleEvent, BattleOutcome, BattlePhase, CharacterStats, CharacterTemplate,
    EchoKind, TurnError,
};
use echo_runtime::{
    BasicAttackProvider, Runtime, RuntimeConfig, RuntimeError, ScriptedProvider, Topic,
};

fn config(seed: u64) -> RuntimeConfig {
    RuntimeConfig {
        seed: Some(seed),
        ..RuntimeConfig::default()
    }
}

fn hero_vs_slime(provider: ScriptedProvider) -> Runtime {
    Runtime::builder()
        .config(config(42))
        .player(CharacterTemplate::hero("Hero"))
        .enemy(CharacterTemplate::slime())
        .player_provider(provider)
        .build()
        .unwrap()
}

fn wall(name: &str) -> CharacterTemplate {
    CharacterTemplate::new(name, CharacterStats::new(1000, 0, 1, 50, 1, 0))
        .with_skills([ActionKind::Attack])
}

#[tokio::test]
async fn hero_defeats_slime() {
    let mut runtime = Runtime::builder()
        .config(config(7))
        .from_catalog(&CharacterCatalog::builtin(), "hero", "slime")
        .unwrap()
        .player_provider(BasicAttackProvider)
        .build()
        .unwrap();

    let outcome = runtime.run_to_completion(50).await.unwrap();

    assert_eq!(
        outcome,
        BattleOutcome::Victory {
            exp_reward: 30,
            leveled_up: false
        }
    );
    assert_eq!(runtime.phase(), BattlePhase::Victory);
    assert_eq!(runtime.engine().player().progression().experience, 30);
    assert!(
        runtime
            .engine()
            .log()
            .iter()
            .any(|line| line.contains("VICTORY"))
    );
}

#[tokio::test]
async fn each_step_resolves_one_discrete_event() {
    let mut runtime = hero_vs_slime(ScriptedProvider::new([ActionKind::Defend]));

    assert_eq!(runtime.phase(), BattlePhase::Intro);
    assert_eq!(runtime.step().await.unwrap(), BattlePhase::PlayerTurn);
    assert_eq!(runtime.step().await.unwrap(), BattlePhase::PlayerAction);
    assert_eq!(runtime.step().await.unwrap(), BattlePhase::PlayerTurn);
    assert_eq!(runtime.engine().turn(), 2);
}

#[tokio::test]
async fn battle_topic_brackets_the_fight() {
    let mut runtime = hero_vs_slime(ScriptedProvider::default());
    let mut battle = runtime.subscribe(Topic::Battle);

    runtime.run_to_completion(50).await.unwrap();

    let first = battle.try_recv().unwrap();
    let last = battle.try_recv().unwrap();
    assert!(matches!(first.battle, BattleEvent::BattleStarted { .. }));
    assert!(matches!(last.battle, BattleEvent::BattleEnded { .. }));
    assert!(battle.try_recv().is_err());
    assert_eq!(first.seq, 0);
    assert!(last.seq > first.seq);
}

#[tokio::test]
async fn echo_topic_reports_vulnerability_lifecycle() {
    let mut runtime = hero_vs_slime(ScriptedProvider::new([ActionKind::HeavyAttack]));
    let mut echoes = runtime.subscribe(Topic::Echo);

    // start, heavy attack, enemy turn + next player turn start
    for _ in 0..3 {
        runtime.step().await.unwrap();
    }

    let triggered = echoes.try_recv().unwrap();
    let expired = echoes.try_recv().unwrap();
    match (triggered.battle, expired.battle) {
        (BattleEvent::EchoTriggered { echo: a }, BattleEvent::EchoExpired { echo: b }) => {
            assert_eq!(a.kind, EchoKind::DefenseReduction);
            assert_eq!(a.target, runtime.engine().player_id());
            assert_eq!(a.id, b.id);
            assert_eq!(b.turns_remaining, 0);
        }
        other => panic!("unexpected echo events: {other:?}"),
    }
    assert_eq!(triggered.turn, 2);
    let player = runtime.engine().player_id();
    assert!(runtime.engine().echoes().echoes_for(player).is_empty());
}

#[tokio::test]
async fn enemy_events_carry_the_enemy_turn() {
    let mut runtime = hero_vs_slime(ScriptedProvider::new([ActionKind::Defend]));
    let mut turns = runtime.subscribe(Topic::Turn);

    // start, defend, enemy turn 1 + player turn 2 start
    for _ in 0..3 {
        runtime.step().await.unwrap();
    }

    let enemy = runtime.engine().enemy_id();
    let mut events = Vec::new();
    while let Ok(event) = turns.try_recv() {
        events.push(event);
    }

    let enemy_action = events
        .iter()
        .find(|event| {
            matches!(event.battle, BattleEvent::ActionResolved { actor, .. } if actor == enemy)
        })
        .unwrap();
    assert_eq!(enemy_action.turn, 1);

    for event in &events {
        if let BattleEvent::TurnStarted { turn, .. } = event.battle {
            assert_eq!(event.turn, turn);
        }
    }
    assert_eq!(events.last().map(|event| event.turn), Some(2));
}

#[tokio::test]
async fn rejected_choice_leaves_battle_untouched() {
    let mut runtime = Runtime::builder()
        .config(config(3))
        .player(CharacterTemplate::hero("Hero").with_skills([ActionKind::Attack]))
        .enemy(CharacterTemplate::goblin())
        .player_provider(ScriptedProvider::new([ActionKind::PowerMagic]))
        .build()
        .unwrap();

    runtime.step().await.unwrap();
    let before = runtime.snapshot();

    let err = runtime.step().await.unwrap_err();

    assert!(matches!(
        err,
        RuntimeError::Turn(TurnError::UnknownSkill {
            kind: ActionKind::PowerMagic
        })
    ));
    assert_eq!(runtime.snapshot(), before);
    assert_eq!(runtime.phase(), BattlePhase::PlayerTurn);
}

#[tokio::test]
async fn stalemate_hits_the_turn_cap() {
    let mut runtime = Runtime::builder()
        .config(config(11))
        .player(wall("Left Wall"))
        .enemy(wall("Right Wall"))
        .player_provider(BasicAttackProvider)
        .build()
        .unwrap();

    let err = runtime.run_to_completion(3).await.unwrap_err();

    assert!(matches!(err, RuntimeError::TurnLimitReached { max_turns: 3 }));
    assert_eq!(runtime.engine().player().hp(), 997);
    assert_eq!(runtime.engine().enemy().hp(), 997);
}

#[tokio::test]
async fn restart_keeps_progression() {
    let mut runtime = hero_vs_slime(ScriptedProvider::default());
    runtime.run_to_completion(50).await.unwrap();

    runtime.restart();

    assert_eq!(runtime.phase(), BattlePhase::Intro);
    assert_eq!(runtime.engine().encounter(), 1);
    assert_eq!(runtime.engine().player().progression().experience, 30);
    assert_eq!(runtime.engine().enemy().hp(), 40);

    let outcome = runtime.run_to_completion(50).await.unwrap();
    assert!(outcome.is_victory());
    assert_eq!(runtime.engine().player().progression().experience, 60);
}

#[tokio::test]
async fn same_seed_and_script_replays_identically() {
    let script = [
        ActionKind::PowerMagic,
        ActionKind::Defend,
        ActionKind::HeavyAttack,
    ];
    let run = |seed| async move {
        let mut runtime = Runtime::builder()
            .config(config(seed))
            .player(CharacterTemplate::hero("Hero"))
            .enemy(CharacterTemplate::dark_knight())
            .player_provider(ScriptedProvider::new(script))
            .build()
            .unwrap();
        let _ = runtime.run_to_completion(50).await;
        runtime.engine().log().to_vec()
    };

    assert_eq!(run(99).await, run(99).await);
}

#[tokio::test]
async fn builder_reports_missing_pieces() {
    let missing_provider = Runtime::builder()
        .player(CharacterTemplate::hero("Hero"))
        .enemy(CharacterTemplate::slime())
        .build();
    assert!(matches!(missing_provider, Err(RuntimeError::ProviderNotSet)));

    let missing_enemy = Runtime::builder()
        .player(CharacterTemplate::hero("Hero"))
        .player_provider(BasicAttackProvider)
        .build();
    assert!(matches!(
        missing_enemy,
        Err(RuntimeError::MissingCombatant { role: "enemy" })
    ));

    let unknown = Runtime::builder().from_catalog(&CharacterCatalog::builtin(), "hero", "dragon");
    assert!(matches!(unknown, Err(RuntimeError::UnknownCharacter(key)) if key == "dragon"));
}
