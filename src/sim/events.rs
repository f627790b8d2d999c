//! Typed in-process event queue
//!
//! Collision detection and input mapping only post events; health changes,
//! bullet spawns and sound cues happen when the queue is drained later in
//! the same tick.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::state::Side;

/// Notification produced during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A red bullet struck the yellow ship
    YellowHit,
    /// A yellow bullet struck the red ship
    RedHit,
    /// A side pressed its fire key
    FireRequested(Side),
    /// Window close
    Quit,
}

impl GameEvent {
    /// Hit event for the ship on `side`
    pub fn hit(side: Side) -> Self {
        match side {
            Side::Yellow => GameEvent::YellowHit,
            Side::Red => GameEvent::RedHit,
        }
    }
}

/// FIFO of pending events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQueue {
    pending: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: GameEvent) {
        self.pending.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Take every pending event in arrival order, leaving the queue empty
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.pending.drain(..)
    }
}

impl Extend<GameEvent> for EventQueue {
    fn extend<T: IntoIterator<Item = GameEvent>>(&mut self, iter: T) {
        self.pending.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_arrival_order() {
        let mut queue = EventQueue::default();
        queue.push(GameEvent::FireRequested(Side::Red));
        queue.push(GameEvent::YellowHit);
        queue.extend([GameEvent::RedHit, GameEvent::Quit]);
        assert_eq!(queue.len(), 4);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                GameEvent::FireRequested(Side::Red),
                GameEvent::YellowHit,
                GameEvent::RedHit,
                GameEvent::Quit,
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_hit_maps_to_target_ship() {
        assert_eq!(GameEvent::hit(Side::Yellow), GameEvent::YellowHit);
        assert_eq!(GameEvent::hit(Side::Red), GameEvent::RedHit);
    }
}
