//! Damage formulas.
//!
//! Jitter: `floor(r × (max - min + 1) + min)` with `min = base × (1 - v)`,
//! `max = base × (1 + v)` and `r` uniform in `[0, 1)`.

use crate::env::RngOracle;

/// Multiplier applied to attack by Heavy Attack.
pub const HEAVY_ATTACK_MULTIPLIER: f64 = 1.8;

/// Multiplier applied to magic power by Power Magic.
pub const POWER_MAGIC_MULTIPLIER: f64 = 2.5;

/// Rolls jittered damage around `base` with relative `variance`.
pub fn roll_damage(base: f64, variance: f64, rng: &mut dyn RngOracle) -> u32 {
    let min = base * (1.0 - variance);
    let max = base * (1.0 + variance);
    let roll = rng.unit() * (max - min + 1.0) + min;
    roll.floor().max(0.0) as u32
}
