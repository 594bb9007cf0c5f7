//! Topic-based event bus for runtime events.
//!
//! Battle events are published to topics, and consumers subscribe only to the
//! topics they need.

mod bus;

pub use bus::{Event, EventBus, Topic};
