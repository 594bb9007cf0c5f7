//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the orchestrator can stay focused on sequencing.

pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{ActionProvider, BasicAttackProvider, ScriptedProvider};
