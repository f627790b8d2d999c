//! Space Duel - a two-player local arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, bullets, events, win check)
//! - `game`: Fixed-rate loop driving the simulation against a backend
//! - `platform`: Backend and clock abstraction (window, input, audio, timing)
//! - `renderer`: Per-frame view and vertex generation
//! - `persistence`: Versioned match snapshots
//! - `settings`: Tunable loop/audio settings

pub mod audio;
pub mod error;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::{GameLoop, RunSummary};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target simulation rate (ticks per second)
    pub const FPS: u32 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: i32 = 900;
    pub const ARENA_HEIGHT: i32 = 500;
    /// Vertical bar in the middle of the arena, blocks ships only
    pub const BORDER_WIDTH: i32 = 10;
    pub const BORDER_X: i32 = ARENA_WIDTH / 2 - BORDER_WIDTH / 2;

    /// Ship movement per tick, per axis
    pub const VELOCITY: i32 = 5;
    pub const SHIP_WIDTH: i32 = 55;
    pub const SHIP_HEIGHT: i32 = 40;
    pub const START_HEALTH: i32 = 10;
    pub const YELLOW_START: (i32, i32) = (100, 300);
    pub const RED_START: (i32, i32) = (800, 300);

    /// Ships stop this far above the bottom edge
    pub const BOTTOM_MARGIN: i32 = 15;
    /// Slack on yellow's right-hand check against the border
    pub const YELLOW_RIGHT_SLACK: i32 = 20;
    /// Extra gap red keeps from the border on its left
    pub const RED_LEFT_MARGIN: i32 = 5;

    /// Bullet defaults
    pub const BULLET_VELOCITY: i32 = 7;
    pub const BULLET_WIDTH: i32 = 10;
    pub const BULLET_HEIGHT: i32 = 5;
    pub const MAX_BULLETS: usize = 3;

    /// How long the winner banner stays up before the next match
    pub const WINNER_HOLD_MS: u64 = 5000;
}
