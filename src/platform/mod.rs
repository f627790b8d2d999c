//! Platform abstraction layer
//!
//! Window, input, audio output and drawing are supplied by a backend; the
//! core only talks to it through [`Backend`]. Timing goes through [`Clock`]
//! so the loop can run at wall-clock speed or instantly under test.

pub mod clock;
pub mod headless;

use std::time::Duration;

use crate::audio::SoundEffect;
use crate::renderer::Frame;
use crate::sim::{KeySnapshot, WindowEvent};

pub use clock::{FixedRateClock, ManualClock};
pub use headless::{Script, ScriptTick, ScriptedBackend};

/// Window/input/audio/draw provider
pub trait Backend {
    /// Drain every window event that arrived since the last call
    fn poll_events(&mut self) -> crate::Result<Vec<WindowEvent>>;

    /// Keys currently held down
    fn key_state(&self) -> KeySnapshot;

    /// Start a sound cue; nothing is reported back
    fn play_sound(&mut self, effect: SoundEffect, volume: f32);

    /// Present one frame
    fn draw_frame(&mut self, frame: &Frame<'_>) -> crate::Result<()>;
}

/// Source of loop pacing
pub trait Clock {
    /// Block until `interval` has passed since the previous call
    fn tick(&mut self, interval: Duration);

    /// Block for `duration` unconditionally
    fn sleep(&mut self, duration: Duration);
}
