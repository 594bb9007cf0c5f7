//! Action profiles - static metadata for each catalog entry.

use crate::action::ActionKind;
use crate::state::Character;

/// Name, cost and presentation data for one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActionProfile {
    pub kind: ActionKind,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Flat MP cost. Checked by [`can_use`](Self::can_use), spent on execution.
    pub mp_cost: u32,
}

const PROFILES: [ActionProfile; 5] = [
    ActionProfile {
        kind: ActionKind::Attack,
        name: "Attack",
        description: "A basic physical attack.",
        icon: "⚔️",
        mp_cost: 0,
    },
    ActionProfile {
        kind: ActionKind::HeavyAttack,
        name: "Heavy Attack",
        description: "A devastating blow. Echo: -30% defense next turn.",
        icon: "🔨",
        mp_cost: 8,
    },
    ActionProfile {
        kind: ActionKind::Heal,
        name: "Heal",
        description: "Restore 35 HP. Echo: Fatigue reduces attack for 2 turns.",
        icon: "💚",
        mp_cost: 12,
    },
    ActionProfile {
        kind: ActionKind::PowerMagic,
        name: "Power Magic",
        description: "Devastating magic that ignores defense. Echo: No MP regen for 2 turns.",
        icon: "✨",
        mp_cost: 20,
    },
    ActionProfile {
        kind: ActionKind::Defend,
        name: "Defend",
        description: "Guard stance. Echo: +50% defense next turn.",
        icon: "🛡️",
        mp_cost: 0,
    },
];

impl ActionProfile {
    /// Profile for `kind`.
    pub fn of(kind: ActionKind) -> &'static ActionProfile {
        &PROFILES[kind as usize]
    }

    /// Whole catalog in menu order.
    pub fn all() -> &'static [ActionProfile] {
        &PROFILES
    }

    /// True when the actor can act and has enough MP. Does not spend MP.
    pub fn can_use(&self, actor: &Character) -> bool {
        actor.mp() >= self.mp_cost && actor.can_act()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::echo::{EchoId, EchoKind};
    use crate::state::CharacterId;
    use crate::stats::{CharacterStats, Modifier};

    #[test]
    fn table_is_indexed_by_kind() {
        for kind in ActionKind::ALL {
            assert_eq!(ActionProfile::of(kind).kind, kind);
        }
    }

    #[test]
    fn costs_match_catalog() {
        let costs: Vec<_> = ActionKind::ALL
            .iter()
            .map(|kind| kind.profile().mp_cost)
            .collect();
        assert_eq!(costs, vec![0, 8, 12, 20, 0]);
    }

    #[test]
    fn can_use_checks_mp_and_stun() {
        let mut actor = Character::new(
            CharacterId(0),
            "Hero",
            CharacterStats::new(100, 15, 15, 8, 10, 12),
        );
        assert!(ActionKind::Heal.profile().can_use(&actor));
        assert!(!ActionKind::PowerMagic.profile().can_use(&actor));

        actor.add_modifier(Modifier::new(EchoId(1), EchoKind::Stun, 1.0));
        assert!(!ActionKind::Attack.profile().can_use(&actor));
    }
}
