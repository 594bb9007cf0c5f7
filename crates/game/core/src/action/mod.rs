//! Action domain - the fixed skill catalog.
//!
//! Actions are a closed enum ([`ActionKind`]) with a static metadata table
//! ([`ActionProfile`]) and one dispatch function ([`execute`]). Every action
//! produces an immediate [`ActionResult`] and may schedule one echo on its
//! actor.
//!
//! # Module Structure
//!
//! - `kind`: the catalog enum
//! - `profile`: names, costs and `can_use`
//! - `formula`: damage jitter and multipliers
//! - `execute`: per-action resolution
//! - `types`: action results
//! - `error`: action errors

pub mod error;
pub mod execute;
pub mod formula;
pub mod kind;
pub mod profile;
pub mod types;

pub use error::ActionError;
pub use execute::{ActionContext, execute};
pub use kind::ActionKind;
pub use profile::ActionProfile;
pub use types::ActionResult;
