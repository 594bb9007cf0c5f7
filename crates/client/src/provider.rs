//! Auto-play policy for the player side.
use async_trait::async_trait;
use echo_core::{ActionKind, BattleSnapshot, CharacterId, CharacterView, EchoKind};
use echo_runtime::{ActionProvider, Result};

/// Picks the player's action from simple HP and MP thresholds.
///
/// In priority order: heal when hurt, open with power magic while the enemy
/// is healthy, heavy attack when not already vulnerable, defend when
/// wounded, otherwise attack.
#[derive(Clone, Debug)]
pub struct HeuristicProvider {
    /// Heal below this HP ratio.
    pub heal_below: f64,
    /// Defend below this HP ratio.
    pub defend_below: f64,
    /// Spend MP on power magic only while the enemy has more HP than this.
    pub magic_above_hp: u32,
}

impl Default for HeuristicProvider {
    fn default() -> Self {
        Self {
            heal_below: 0.4,
            defend_below: 0.6,
            magic_above_hp: 20,
        }
    }
}

impl HeuristicProvider {
    pub fn choose(
        &self,
        actor: CharacterId,
        snapshot: &BattleSnapshot,
        usable: &[ActionKind],
    ) -> ActionKind {
        let (me, foe) = views(actor, snapshot);
        let can = |kind| usable.contains(&kind);
        let hp_ratio = ratio(me.hp, me.max_hp);

        if hp_ratio < self.heal_below && can(ActionKind::Heal) {
            return ActionKind::Heal;
        }
        if foe.hp > self.magic_above_hp && can(ActionKind::PowerMagic) {
            return ActionKind::PowerMagic;
        }

        let vulnerable = snapshot
            .echoes_on(actor)
            .any(|echo| echo.kind == EchoKind::DefenseReduction);
        if !vulnerable && can(ActionKind::HeavyAttack) {
            return ActionKind::HeavyAttack;
        }
        if hp_ratio < self.defend_below && can(ActionKind::Defend) {
            return ActionKind::Defend;
        }

        ActionKind::Attack
    }
}

#[async_trait]
impl ActionProvider for HeuristicProvider {
    async fn provide_action(
        &self,
        actor: CharacterId,
        snapshot: &BattleSnapshot,
        usable: &[ActionKind],
    ) -> Result<ActionKind> {
        Ok(self.choose(actor, snapshot, usable))
    }
}

fn views(actor: CharacterId, snapshot: &BattleSnapshot) -> (&CharacterView, &CharacterView) {
    if snapshot.enemy.id == actor {
        (&snapshot.enemy, &snapshot.player)
    } else {
        (&snapshot.player, &snapshot.enemy)
    }
}

fn ratio(current: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(current) / f64::from(max)
}
