//! Keyboard input mapping
//!
//! Held keys drive movement (level-triggered, read once per tick).
//! Key-down events drive firing (edge-triggered, one shot per press).

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, border};
use super::events::GameEvent;
use super::state::Side;
use crate::consts::*;

/// Keys the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    ControlLeft,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ControlRight,
    /// Not bound to either side
    Space,
}

impl Key {
    #[inline]
    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Set of currently held keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Key>", into = "Vec<Key>")]
pub struct KeySnapshot {
    bits: u16,
}

impl KeySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.bits |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.bits &= !key.bit();
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.bits & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl FromIterator<Key> for KeySnapshot {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        let mut keys = Self::new();
        for key in iter {
            keys.press(key);
        }
        keys
    }
}

impl From<Vec<Key>> for KeySnapshot {
    fn from(keys: Vec<Key>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<KeySnapshot> for Vec<Key> {
    fn from(keys: KeySnapshot) -> Self {
        ALL_KEYS
            .iter()
            .copied()
            .filter(|k| keys.is_pressed(*k))
            .collect()
    }
}

const ALL_KEYS: [Key; 11] = [
    Key::KeyW,
    Key::KeyA,
    Key::KeyS,
    Key::KeyD,
    Key::ControlLeft,
    Key::ArrowUp,
    Key::ArrowDown,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::ControlRight,
    Key::Space,
];

/// Raw events reported by the window each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowEvent {
    /// Window close request
    Quit,
    /// A key went down this tick
    KeyDown(Key),
}

/// Fixed key bindings for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    pub fire: Key,
}

impl Controls {
    pub const YELLOW: Controls = Controls {
        up: Key::KeyW,
        down: Key::KeyS,
        left: Key::KeyA,
        right: Key::KeyD,
        fire: Key::ControlLeft,
    };

    pub const RED: Controls = Controls {
        up: Key::ArrowUp,
        down: Key::ArrowDown,
        left: Key::ArrowLeft,
        right: Key::ArrowRight,
        fire: Key::ControlRight,
    };

    pub fn for_side(side: Side) -> Controls {
        match side {
            Side::Yellow => Self::YELLOW,
            Side::Red => Self::RED,
        }
    }
}

/// Map a window event to a game event, if it means anything to the match
pub fn map_window_event(event: WindowEvent) -> Option<GameEvent> {
    match event {
        WindowEvent::Quit => Some(GameEvent::Quit),
        WindowEvent::KeyDown(key) if key == Controls::YELLOW.fire => {
            Some(GameEvent::FireRequested(Side::Yellow))
        }
        WindowEvent::KeyDown(key) if key == Controls::RED.fire => {
            Some(GameEvent::FireRequested(Side::Red))
        }
        WindowEvent::KeyDown(_) => None,
    }
}

/// Per-axis movement for this tick, already limited to legal moves
pub fn movement_delta(side: Side, keys: &KeySnapshot, ship: &Rect) -> IVec2 {
    let controls = Controls::for_side(side);
    let border = border();
    let mut delta = IVec2::ZERO;

    // Each guard looks at the position before this tick's move
    let (can_left, can_right) = match side {
        Side::Yellow => (
            ship.x() - VELOCITY > 0,
            ship.x() + ship.width() - YELLOW_RIGHT_SLACK + VELOCITY < border.x(),
        ),
        Side::Red => (
            ship.x() - RED_LEFT_MARGIN - VELOCITY > border.x(),
            ship.x() + ship.width() + VELOCITY < ARENA_WIDTH,
        ),
    };
    let can_up = ship.y() - VELOCITY > 0;
    let can_down = ship.y() + ship.height() + VELOCITY < ARENA_HEIGHT - BOTTOM_MARGIN;

    if keys.is_pressed(controls.left) && can_left {
        delta.x -= VELOCITY;
    }
    if keys.is_pressed(controls.right) && can_right {
        delta.x += VELOCITY;
    }
    if keys.is_pressed(controls.up) && can_up {
        delta.y -= VELOCITY;
    }
    if keys.is_pressed(controls.down) && can_down {
        delta.y += VELOCITY;
    }

    delta
}

/// Move a ship in place according to held keys
pub fn handle_movement(side: Side, keys: &KeySnapshot, ship: &mut Rect) {
    ship.pos += movement_delta(side, keys, ship);
}
