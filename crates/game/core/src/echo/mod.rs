//! Echo domain - delayed effects scheduled by actions.
//!
//! An echo is created as a side effect of an action, lives on its target for
//! a number of the target's own turn starts, and disappears when the count
//! runs out.
//!
//! # Module Structure
//!
//! - `kind`: closed set of echo categories
//! - `effect`: echo records and the spec used to create them
//! - `events`: trigger/expire notifications
//! - `scheduler`: the [`EchoSystem`] registry and its lifecycle

mod effect;
mod events;
mod kind;
mod scheduler;

pub use effect::{Echo, EchoId, EchoSpec};
pub use events::EchoEvent;
pub use kind::EchoKind;
pub use scheduler::EchoSystem;
