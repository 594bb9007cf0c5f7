//! Runtime orchestration for Echo battles.
//!
//! This crate drives a [`echo_core::BattleEngine`] through pluggable action
//! providers and fans the engine's events out to subscribers. Consumers embed
//! [`Runtime`] to step a battle, run it to completion, or restart it.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides a topic-based event bus for flexible event routing
pub mod api;
pub mod events;
pub mod runtime;

pub use api::{ActionProvider, BasicAttackProvider, Result, RuntimeError, ScriptedProvider};
pub use events::{Event, EventBus, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
