//! Match state and core simulation types
//!
//! Everything needed to resume a match lives here and is serializable.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::events::EventQueue;
use crate::consts::*;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left player
    Yellow,
    /// Right player
    Red,
}

impl Side {
    /// Horizontal direction this side's bullets travel
    pub fn bullet_dir(self) -> i32 {
        match self {
            Side::Yellow => 1,
            Side::Red => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Yellow => "Yellow",
            Side::Red => "Red",
        }
    }

    /// Banner shown when this side wins
    pub fn winner_text(self) -> &'static str {
        match self {
            Side::Yellow => "Yellow Wins!",
            Side::Red => "Red Wins!",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Someone ran out of health
    MatchOver { winner: Side },
}

/// A player's ship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub side: Side,
    pub rect: Rect,
    pub health: i32,
}

impl Ship {
    pub fn new(side: Side) -> Self {
        let (x, y) = match side {
            Side::Yellow => YELLOW_START,
            Side::Red => RED_START,
        };
        Self {
            side,
            rect: Rect::new(x, y, SHIP_WIDTH, SHIP_HEIGHT),
            health: START_HEALTH,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }

    /// Apply one hit. Health is not clamped at zero.
    pub fn take_hit(&mut self) {
        self.health -= 1;
    }
}

/// A bullet in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub owner: Side,
    pub rect: Rect,
}

impl Bullet {
    /// Create a bullet at the muzzle of `ship`, vertically centered
    pub fn fired_from(ship: &Ship) -> Self {
        let x = match ship.side {
            Side::Yellow => ship.rect.right(),
            Side::Red => ship.rect.x(),
        };
        let y = ship.rect.y() + ship.rect.height() / 2;
        Self {
            owner: ship.side,
            rect: Rect::new(x, y, BULLET_WIDTH, BULLET_HEIGHT),
        }
    }

    /// Move one tick along the owner's direction
    pub fn advance(&mut self) {
        self.rect.pos += IVec2::new(self.owner.bullet_dir() * BULLET_VELOCITY, 0);
    }

    /// True once the bullet has left the arena on its travel side
    pub fn has_exited(&self) -> bool {
        match self.owner {
            Side::Yellow => self.rect.x() > ARENA_WIDTH,
            Side::Red => self.rect.x() < 0,
        }
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Simulation tick counter for this match
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub yellow: Ship,
    pub red: Ship,
    /// Live yellow bullets in spawn order
    pub yellow_bullets: Vec<Bullet>,
    /// Live red bullets in spawn order
    pub red_bullets: Vec<Bullet>,
    /// Pending notifications; always empty between ticks
    #[serde(skip)]
    pub events: EventQueue,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Fresh match: full health, no bullets, ships at their start positions
    pub fn new() -> Self {
        Self {
            time_ticks: 0,
            phase: GamePhase::Playing,
            yellow: Ship::new(Side::Yellow),
            red: Ship::new(Side::Red),
            yellow_bullets: Vec::with_capacity(MAX_BULLETS),
            red_bullets: Vec::with_capacity(MAX_BULLETS),
            events: EventQueue::default(),
        }
    }

    pub fn ship(&self, side: Side) -> &Ship {
        match side {
            Side::Yellow => &self.yellow,
            Side::Red => &self.red,
        }
    }

    pub fn ship_mut(&mut self, side: Side) -> &mut Ship {
        match side {
            Side::Yellow => &mut self.yellow,
            Side::Red => &mut self.red,
        }
    }

    pub fn bullets(&self, side: Side) -> &[Bullet] {
        match side {
            Side::Yellow => &self.yellow_bullets,
            Side::Red => &self.red_bullets,
        }
    }

    /// Decide the winner from current health.
    ///
    /// Red is checked first, so if both ships are down yellow wins.
    pub fn winner(&self) -> Option<Side> {
        if self.red.is_destroyed() {
            Some(Side::Yellow)
        } else if self.yellow.is_destroyed() {
            Some(Side::Red)
        } else {
            None
        }
    }

    /// Banner text for the current phase ("" while playing)
    pub fn winner_text(&self) -> &'static str {
        match self.phase {
            GamePhase::Playing => "",
            GamePhase::MatchOver { winner } => winner.winner_text(),
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::MatchOver { .. })
    }
}
