//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per frame)
//! - No randomness
//! - Stable iteration order (yellow before red, bullets in spawn order)
//! - No rendering or platform dependencies

pub mod bullets;
pub mod collision;
pub mod events;
pub mod input;
pub mod state;
pub mod tick;

pub use bullets::{advance_and_resolve, spawn};
pub use collision::{Rect, arena, border, intersects};
pub use events::{EventQueue, GameEvent};
pub use input::{Controls, Key, KeySnapshot, WindowEvent, handle_movement, movement_delta};
pub use state::{Bullet, GamePhase, MatchState, Ship, Side};
pub use tick::{TickInput, TickOutcome, tick};
