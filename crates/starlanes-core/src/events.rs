//! Engine event queue.
//!
//! Structural changes and non-fatal failures are queued here instead of
//! invoking observer callbacks. The driver drains the queue once per frame
//! and attaches visuals, detaches despawned ships, or surfaces a transient
//! failure toast; nothing re-enters the engine while a system is iterating.

use hecs::Entity;

/// Something the presentation layer needs to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A body entered the world: initial seeding, procedural spawn, or a
    /// finished station.
    BodyAdded(Entity),
    /// A cargo ship was dispatched and now exists in the world.
    CargoLaunched(Entity),
    /// A cargo ship put its load down and was despawned.
    ///
    /// `fallback` is set when transit routing failed and the delivery
    /// happened at a non-final hop.
    CargoDelivered {
        ship: Entity,
        at: Entity,
        fallback: bool,
    },
    /// A ship in transit found no usable next hop toward its destination.
    /// Always followed by a fallback `CargoDelivered`.
    RouteFailed {
        ship: Entity,
        at: Entity,
        destination: Entity,
    },
    /// A new mission was posted to the board.
    MissionPosted { key: String },
    /// A mission's demand was met and its reward paid out.
    MissionCompleted { key: String, reward: u64 },
    /// A mission was withdrawn without payout.
    MissionCancelled { key: String },
}

/// FIFO queue of engine events, drained by the driver.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take everything queued since the last drain, in emission order.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::MissionPosted { key: "0".into() });
        queue.push(GameEvent::MissionCancelled { key: "0".into() });

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }
}
