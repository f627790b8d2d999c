//! Sound cues and volume handling
//!
//! Decoding and playback belong to the backend; the core only decides which
//! cue to play and how loud.

use serde::{Deserialize, Serialize};

use crate::platform::Backend;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// A bullet left a ship
    Fire,
    /// A bullet struck a ship
    Hit,
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect through the backend (silently skipped at zero volume)
    pub fn play<B: Backend + ?Sized>(&self, backend: &mut B, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        backend.play_sound(effect, vol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::{Script, ScriptedBackend};

    #[test]
    fn test_effective_volume() {
        let mut audio = AudioManager::new();
        assert!((audio.effective_volume() - 0.8).abs() < 1e-6);

        audio.set_sfx_volume(0.5);
        assert!((audio.effective_volume() - 0.4).abs() < 1e-6);

        audio.set_master_volume(3.0);
        assert!((audio.effective_volume() - 0.5).abs() < 1e-6);

        audio.set_muted(true);
        assert_eq!(audio.effective_volume(), 0.0);
    }

    #[test]
    fn test_muted_audio_skips_backend() {
        let mut backend = ScriptedBackend::new(Script::default());
        let mut audio = AudioManager::new();

        audio.play(&mut backend, SoundEffect::Fire);
        audio.set_muted(true);
        audio.play(&mut backend, SoundEffect::Hit);

        assert_eq!(backend.sounds(), &[SoundEffect::Fire]);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            ..Settings::default()
        };
        let audio = AudioManager::from_settings(&settings);
        assert!((audio.effective_volume() - 0.25).abs() < 1e-6);
    }
}
