//! Game settings and preferences
//!
//! Read from an optional JSON file; anything missing or unreadable falls
//! back to the defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{FPS, WINNER_HOLD_MS};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Loop ===
    /// Target ticks per second
    pub tick_rate: u32,
    /// How long the winner banner stays up before the next match (ms)
    pub winner_hold_ms: u64,
    /// Keep polling for window close while the winner banner is up
    pub observe_quit_during_hold: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate: FPS,
            winner_hold_ms: WINNER_HOLD_MS,
            observe_quit_during_hold: false,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Duration of one tick at the configured rate
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    pub fn winner_hold(&self) -> Duration {
        Duration::from_millis(self.winner_hold_ms)
    }

    /// Parse settings from JSON, clamping out-of-range values
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {e}, using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    fn sanitize(&mut self) {
        self.tick_rate = self.tick_rate.max(1);
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
    }
}
