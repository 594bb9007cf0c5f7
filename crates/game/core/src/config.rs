/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// MP restored to the acting side at the start of its turn, after echoes tick.
    pub mp_regen_per_turn: u32,
    /// Half-width of the uniform damage jitter, as a fraction of base damage.
    pub damage_variance: f64,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of skills a single character can carry.
    pub const MAX_SKILLS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MP_REGEN: u32 = 5;
    pub const DEFAULT_DAMAGE_VARIANCE: f64 = 0.1;
    /// Largest accepted variance; the valid range is `[0, 1)`.
    pub const MAX_DAMAGE_VARIANCE: f64 = 1.0 - f64::EPSILON;

    pub fn new() -> Self {
        Self {
            mp_regen_per_turn: Self::DEFAULT_MP_REGEN,
            damage_variance: Self::DEFAULT_DAMAGE_VARIANCE,
        }
    }

    pub fn with_mp_regen(mut self, mp_regen_per_turn: u32) -> Self {
        self.mp_regen_per_turn = mp_regen_per_turn;
        self
    }

    /// Sets the damage jitter, clamped into `[0, 1)`. NaN becomes 0.
    pub fn with_damage_variance(mut self, damage_variance: f64) -> Self {
        self.damage_variance = if damage_variance.is_nan() {
            0.0
        } else {
            damage_variance.clamp(0.0, Self::MAX_DAMAGE_VARIANCE)
        };
        self
    }

    /// True when `damage_variance` lies in `[0, 1)`.
    pub fn has_valid_variance(&self) -> bool {
        (0.0..1.0).contains(&self.damage_variance)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
