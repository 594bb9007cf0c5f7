//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;

use echo_core::BattleEvent;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Echo triggers and expiries
    Echo,
    /// Turn starts, skipped turns and resolved actions
    Turn,
    /// Battle start and end
    Battle,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Echo, Topic::Turn, Topic::Battle];
}

/// A battle event stamped with where it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Publication order across all topics, starting at 0 per runtime.
    pub seq: u64,
    pub encounter: u64,
    pub turn: u32,
    #[serde(flatten)]
    pub battle: BattleEvent,
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self.battle {
            BattleEvent::EchoTriggered { .. } | BattleEvent::EchoExpired { .. } => Topic::Echo,
            BattleEvent::TurnStarted { .. }
            | BattleEvent::TurnSkipped { .. }
            | BattleEvent::ActionResolved { .. } => Topic::Turn,
            BattleEvent::BattleStarted { .. } | BattleEvent::BattleEnded { .. } => Topic::Battle,
        }
    }
}

struct Channels {
    echo: broadcast::Sender<Event>,
    turn: broadcast::Sender<Event>,
    battle: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Echo => &self.echo,
            Topic::Turn => &self.turn,
            Topic::Battle => &self.battle,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Clones share the same channels.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(Channels {
                echo: broadcast::channel(capacity).0,
                turn: broadcast::channel(capacity).0,
                battle: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echo_core::{BattleOutcome, CharacterId};

    fn event(battle: BattleEvent) -> Event {
        Event {
            seq: 0,
            encounter: 0,
            turn: 1,
            battle,
        }
    }

    #[test]
    fn events_route_by_kind() {
        let started = event(BattleEvent::TurnStarted {
            actor: CharacterId(0),
            turn: 1,
        });
        let ended = event(BattleEvent::BattleEnded {
            outcome: BattleOutcome::Defeat,
        });
        assert_eq!(started.topic(), Topic::Turn);
        assert_eq!(ended.topic(), Topic::Battle);
    }

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut turns = bus.subscribe(Topic::Turn);
        let mut battles = bus.subscribe(Topic::Battle);

        bus.publish(event(BattleEvent::TurnSkipped {
            actor: CharacterId(1),
        }));

        let received = turns.recv().await.unwrap();
        assert_eq!(
            received.battle,
            BattleEvent::TurnSkipped {
                actor: CharacterId(1)
            }
        );
        assert!(battles.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::default();
        bus.publish(event(BattleEvent::BattleStarted {
            player: CharacterId(0),
            enemy: CharacterId(1),
        }));
    }

    #[test]
    fn clones_share_channels() {
        let bus = EventBus::new();
        let mut rx = bus.clone().subscribe(Topic::Battle);
        bus.publish(event(BattleEvent::BattleEnded {
            outcome: BattleOutcome::Defeat,
        }));
        assert!(rx.try_recv().is_ok());
    }
}
