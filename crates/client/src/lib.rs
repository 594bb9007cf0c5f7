//! Terminal client for Echo battles.
//!
//! # Architecture
//!
//! ```text
//! Client (composition root)
//!   ├─→ ClientConfig    (environment)
//!   ├─→ echo-content    (battle tuning and character catalog)
//!   ├─→ Runtime         (battle orchestration and event bus)
//!   └─→ Renderer        (text log or JSON event lines)
//! ```
//!
//! The player is driven by [`HeuristicProvider`], so a battle plays itself
//! from start to finish.

pub mod config;
pub mod provider;
pub mod render;

pub use config::{ClientConfig, OutputFormat};
pub use provider::HeuristicProvider;
pub use render::{Renderer, drain_events};
