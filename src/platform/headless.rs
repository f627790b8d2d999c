//! Headless backend driven by a scripted input sequence
//!
//! Replays one [`ScriptTick`] per poll and records every frame and sound, so
//! whole matches can run without a window. Once the script runs out the
//! backend reports a window close.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Backend;
use crate::audio::SoundEffect;
use crate::renderer::shapes::frame_vertices;
use crate::renderer::{Frame, Vertex};
use crate::sim::{Key, KeySnapshot, Rect, Side, WindowEvent};

/// Input for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptTick {
    /// Keys held during the tick
    pub held: KeySnapshot,
    /// Keys that went down this tick
    pub pressed: Vec<Key>,
    /// Window close
    pub quit: bool,
}

impl ScriptTick {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn holding(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            held: keys.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn pressing(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            pressed: keys.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }

    fn events(&self) -> Vec<WindowEvent> {
        let mut events: Vec<_> = self.pressed.iter().copied().map(WindowEvent::KeyDown).collect();
        if self.quit {
            events.push(WindowEvent::Quit);
        }
        events
    }
}

/// A recorded input sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub ticks: Vec<ScriptTick>,
}

impl Script {
    pub fn new(ticks: Vec<ScriptTick>) -> Self {
        Self { ticks }
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let script = Self::from_json(&json)?;
        log::info!("Loaded script {} ({} ticks)", path.display(), script.ticks.len());
        Ok(script)
    }
}

/// Owned copy of what was drawn in one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRecord {
    pub yellow: Rect,
    pub red: Rect,
    pub yellow_health: i32,
    pub red_health: i32,
    pub yellow_bullets: usize,
    pub red_bullets: usize,
    pub winner_text: Option<String>,
    /// Size of the vertex buffer a GPU backend would upload
    pub vertex_bytes: usize,
}

impl From<&Frame<'_>> for FrameRecord {
    fn from(frame: &Frame<'_>) -> Self {
        Self {
            yellow: frame.yellow.rect,
            red: frame.red.rect,
            yellow_health: frame.yellow.health,
            red_health: frame.red.health,
            yellow_bullets: frame.bullets(Side::Yellow).len(),
            red_bullets: frame.bullets(Side::Red).len(),
            winner_text: frame.winner_text.map(str::to_owned),
            vertex_bytes: Vertex::as_bytes(&frame_vertices(frame)).len(),
        }
    }
}

/// Backend that replays a [`Script`]
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    script: Script,
    cursor: usize,
    held: KeySnapshot,
    frames: Vec<FrameRecord>,
    sounds: Vec<SoundEffect>,
    fail_draw_at: Option<usize>,
}

impl ScriptedBackend {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            ..Self::default()
        }
    }

    /// Make the n-th `draw_frame` call (0-based) fail
    pub fn fail_draw_at(mut self, frame: usize) -> Self {
        self.fail_draw_at = Some(frame);
        self
    }

    pub fn frames(&self) -> &[FrameRecord] {
        &self.frames
    }

    pub fn sounds(&self) -> &[SoundEffect] {
        &self.sounds
    }

    /// Script ticks consumed so far
    pub fn polls(&self) -> usize {
        self.cursor
    }
}

impl Backend for ScriptedBackend {
    fn poll_events(&mut self) -> crate::Result<Vec<WindowEvent>> {
        let Some(tick) = self.script.ticks.get(self.cursor) else {
            self.held = KeySnapshot::new();
            return Ok(vec![WindowEvent::Quit]);
        };
        self.cursor += 1;
        self.held = tick.held;
        Ok(tick.events())
    }

    fn key_state(&self) -> KeySnapshot {
        self.held
    }

    fn play_sound(&mut self, effect: SoundEffect, _volume: f32) {
        self.sounds.push(effect);
    }

    fn draw_frame(&mut self, frame: &Frame<'_>) -> crate::Result<()> {
        if self.fail_draw_at == Some(self.frames.len()) {
            return Err(crate::Error::Backend("surface lost".into()));
        }
        self.frames.push(FrameRecord::from(frame));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_json() {
        let script = Script::from_json(
            r#"{ "ticks": [
                { "held": ["KeyD"], "pressed": ["ControlLeft"] },
                {},
                { "quit": true }
            ] }"#,
        )
        .unwrap();

        assert_eq!(script.ticks.len(), 3);
        assert!(script.ticks[0].held.is_pressed(Key::KeyD));
        assert_eq!(script.ticks[0].pressed, vec![Key::ControlLeft]);
        assert_eq!(script.ticks[1], ScriptTick::idle());
        assert!(script.ticks[2].quit);
    }

    #[test]
    fn test_replay_then_quit() {
        let mut backend = ScriptedBackend::new(Script::new(vec![
            ScriptTick::holding([Key::ArrowUp]),
            ScriptTick::pressing([Key::ControlRight]),
        ]));

        assert!(backend.poll_events().unwrap().is_empty());
        assert!(backend.key_state().is_pressed(Key::ArrowUp));

        assert_eq!(
            backend.poll_events().unwrap(),
            vec![WindowEvent::KeyDown(Key::ControlRight)]
        );
        assert!(backend.key_state().is_empty());

        assert_eq!(backend.poll_events().unwrap(), vec![WindowEvent::Quit]);
        assert_eq!(backend.polls(), 2);
    }

    #[test]
    fn test_draw_records_vertex_buffer() {
        use crate::renderer::shapes::QUAD_VERTICES;
        use crate::sim::{Bullet, MatchState};

        let mut state = MatchState::new();
        state.red_bullets.push(Bullet::fired_from(&state.red));

        let mut backend = ScriptedBackend::default();
        backend.draw_frame(&Frame::from_state(&state)).unwrap();

        // background + border + 1 bullet + 2 ships
        let record = &backend.frames()[0];
        assert_eq!(record.red_bullets, 1);
        assert_eq!(record.vertex_bytes, 5 * QUAD_VERTICES * Vertex::STRIDE);
    }
}
