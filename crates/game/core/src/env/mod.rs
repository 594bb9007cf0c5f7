//! Environment collaborators injected into the rules.
//!
//! The only oracle the battle rules need is a deterministic random source.
mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};
