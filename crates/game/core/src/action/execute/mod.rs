//! Action execution.
//!
//! Each catalog entry resolves in three steps:
//!
//! 1. spend MP; a shortfall rejects the whole action with no other mutation
//! 2. apply the immediate effect to actor or target
//! 3. schedule the echo on the actor
//!
//! Echo creation goes through the [`EchoSystem`] so the registry and the
//! actor's modifier list change together.

use crate::action::formula::{HEAVY_ATTACK_MULTIPLIER, POWER_MAGIC_MULTIPLIER, roll_damage};
use crate::action::{ActionError, ActionKind, ActionResult};
use crate::config::BattleConfig;
use crate::echo::{EchoKind, EchoSpec, EchoSystem};
use crate::env::RngOracle;
use crate::state::{CharacterId, Roster};

/// Flat HP restored by Heal.
pub const HEAL_AMOUNT: u32 = 35;

/// Fraction of max HP restored by Defend.
pub const DEFEND_HEAL_RATIO: f64 = 0.05;

/// Mutable battle state an action needs.
pub struct ActionContext<'a> {
    pub roster: &'a mut Roster,
    pub echoes: &'a mut EchoSystem,
    pub rng: &'a mut dyn RngOracle,
    pub config: &'a BattleConfig,
}

/// Executes `kind` for `actor` against `target`.
///
/// Damaging actions need `target` to be a different character of
/// `ctx.roster`; self-only actions (Heal, Defend) ignore it.
pub fn execute(
    kind: ActionKind,
    actor: CharacterId,
    target: CharacterId,
    ctx: &mut ActionContext<'_>,
) -> Result<ActionResult, ActionError> {
    let actor_ref = if hits_target(kind) {
        ctx.roster.pair_mut(actor, target)?.0
    } else {
        ctx.roster.get_mut(actor)?
    };
    if !actor_ref.is_alive() {
        return Err(ActionError::ActorDead(actor));
    }

    let mp_cost = kind.profile().mp_cost;
    if !actor_ref.use_mp(mp_cost) {
        return Ok(ActionResult::rejected(format!(
            "{} doesn't have enough MP!",
            actor_ref.name()
        )));
    }

    match kind {
        ActionKind::Attack => attack(actor, target, ctx),
        ActionKind::HeavyAttack => heavy_attack(actor, target, ctx, mp_cost),
        ActionKind::Heal => heal(actor, ctx, mp_cost),
        ActionKind::PowerMagic => power_magic(actor, target, ctx, mp_cost),
        ActionKind::Defend => defend(actor, ctx),
    }
}

fn hits_target(kind: ActionKind) -> bool {
    matches!(kind, ActionKind::Attack | ActionKind::HeavyAttack | ActionKind::PowerMagic)
}

fn attack(
    actor: CharacterId,
    target: CharacterId,
    ctx: &mut ActionContext<'_>,
) -> Result<ActionResult, ActionError> {
    let (actor_ref, target_ref) = ctx.roster.pair_mut(actor, target)?;

    let damage = roll_damage(
        f64::from(actor_ref.attack()),
        ctx.config.damage_variance,
        ctx.rng,
    );
    let dealt = target_ref.take_damage(damage);

    let message = format!(
        "{} attacks {} for {} damage!",
        actor_ref.name(),
        target_ref.name(),
        dealt
    );
    Ok(ActionResult::succeeded(0, message).with_damage(dealt))
}

fn heavy_attack(
    actor: CharacterId,
    target: CharacterId,
    ctx: &mut ActionContext<'_>,
    mp_cost: u32,
) -> Result<ActionResult, ActionError> {
    let (actor_ref, target_ref) = ctx.roster.pair_mut(actor, target)?;

    let base = f64::from(actor_ref.attack()) * HEAVY_ATTACK_MULTIPLIER;
    let damage = roll_damage(base, ctx.config.damage_variance, ctx.rng);
    let dealt = target_ref.take_damage(damage);

    let message = format!(
        "{actor_name} unleashes a HEAVY ATTACK on {target_name} for {dealt} damage! 🔨\n\
         Echo: {actor_name}'s defense will drop next turn...",
        actor_name = actor_ref.name(),
        target_name = target_ref.name(),
    );

    let spec = EchoSpec::on_self("Vulnerability", EchoKind::DefenseReduction, 0.3, 1, actor)
        .with_icon("🛡️↓")
        .with_description("Defense reduced by 30%");
    let echo = ctx.echoes.add_echo(ctx.roster, spec)?;

    Ok(ActionResult::succeeded(mp_cost, message)
        .with_damage(dealt)
        .with_echo(echo))
}

fn heal(
    actor: CharacterId,
    ctx: &mut ActionContext<'_>,
    mp_cost: u32,
) -> Result<ActionResult, ActionError> {
    let actor_ref = ctx.roster.get_mut(actor)?;
    let healed = actor_ref.heal(HEAL_AMOUNT);

    let message = format!(
        "{} heals for {} HP! 💚\nEcho: Fatigue will reduce attack for 2 turns...",
        actor_ref.name(),
        healed
    );

    // Scheduled even when the heal was fully capped.
    let spec = EchoSpec::on_self("Fatigue", EchoKind::Fatigue, 0.25, 2, actor)
        .with_icon("😩")
        .with_description("Attack reduced by 25% due to fatigue");
    let echo = ctx.echoes.add_echo(ctx.roster, spec)?;

    Ok(ActionResult::succeeded(mp_cost, message)
        .with_healing(healed)
        .with_echo(echo))
}

fn power_magic(
    actor: CharacterId,
    target: CharacterId,
    ctx: &mut ActionContext<'_>,
    mp_cost: u32,
) -> Result<ActionResult, ActionError> {
    let (actor_ref, target_ref) = ctx.roster.pair_mut(actor, target)?;

    let base = f64::from(actor_ref.stats().magic_power) * POWER_MAGIC_MULTIPLIER;
    let damage = roll_damage(base, ctx.config.damage_variance, ctx.rng);
    target_ref.take_direct_damage(damage);

    let message = format!(
        "{actor_name} casts POWER MAGIC on {target_name} for {damage} damage! ✨\n\
         Echo: {actor_name}'s MP recovery is blocked for 2 turns...",
        actor_name = actor_ref.name(),
        target_name = target_ref.name(),
    );

    let spec = EchoSpec::on_self("Mana Drain", EchoKind::MpBlock, 1.0, 2, actor)
        .with_icon("🔮❌")
        .with_description("MP regeneration is blocked");
    let echo = ctx.echoes.add_echo(ctx.roster, spec)?;

    Ok(ActionResult::succeeded(mp_cost, message)
        .with_damage(damage)
        .with_echo(echo))
}

fn defend(actor: CharacterId, ctx: &mut ActionContext<'_>) -> Result<ActionResult, ActionError> {
    let actor_ref = ctx.roster.get_mut(actor)?;
    let amount = (f64::from(actor_ref.stats().max_hp) * DEFEND_HEAL_RATIO).floor() as u32;
    actor_ref.heal(amount);

    let message = format!(
        "{} takes a defensive stance and recovers {} HP! 🛡️\nEcho: Defense will be boosted next turn!",
        actor_ref.name(),
        amount
    );

    let spec = EchoSpec::on_self("Fortified", EchoKind::DefenseBoost, 0.5, 1, actor)
        .with_icon("🛡️↑")
        .with_description("Defense boosted by 50%");
    let echo = ctx.echoes.add_echo(ctx.roster, spec)?;

    Ok(ActionResult::succeeded(0, message)
        .with_healing(amount)
        .with_echo(echo))
}
