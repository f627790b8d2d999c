//! Rendering module
//!
//! The core hands the backend a read-only [`Frame`] each tick. Backends that
//! draw with a GPU can turn it into a triangle list with
//! [`shapes::frame_vertices`].

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use crate::sim::{Bullet, MatchState, Ship, Side};

/// Everything drawn in one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub yellow: &'a Ship,
    pub red: &'a Ship,
    pub yellow_bullets: &'a [Bullet],
    pub red_bullets: &'a [Bullet],
    /// Winner banner, only set once the match is over
    pub winner_text: Option<&'static str>,
}

impl<'a> Frame<'a> {
    pub fn from_state(state: &'a MatchState) -> Self {
        let text = state.winner_text();
        Self {
            yellow: &state.yellow,
            red: &state.red,
            yellow_bullets: &state.yellow_bullets,
            red_bullets: &state.red_bullets,
            winner_text: (!text.is_empty()).then_some(text),
        }
    }

    pub fn ship(&self, side: Side) -> &'a Ship {
        match side {
            Side::Yellow => self.yellow,
            Side::Red => self.red,
        }
    }

    pub fn bullets(&self, side: Side) -> &'a [Bullet] {
        match side {
            Side::Yellow => self.yellow_bullets,
            Side::Red => self.red_bullets,
        }
    }

    /// HUD text for a side, e.g. "Health: 7"
    pub fn health_text(&self, side: Side) -> String {
        format!("Health: {}", self.ship(side).health)
    }
}
