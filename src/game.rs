//! Match controller
//!
//! Runs the fixed-rate loop: pace, poll, tick, play sounds, draw. When a
//! match ends the winner banner is held and a fresh match starts in the same
//! loop, until the window is closed.

use crate::audio::AudioManager;
use crate::platform::{Backend, Clock};
use crate::renderer::Frame;
use crate::settings::Settings;
use crate::sim::{GamePhase, MatchState, Side, TickInput, WindowEvent, tick};
use crate::Result;

/// What the loop got through before the window closed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks run across all matches
    pub ticks: u64,
    /// Matches that reached a winner
    pub matches_finished: u32,
    /// Winner of the most recent finished match
    pub last_winner: Option<Side>,
}

/// Game instance holding the backend, clock and settings
pub struct GameLoop<B: Backend, C: Clock> {
    backend: B,
    clock: C,
    settings: Settings,
    audio: AudioManager,
    /// State for the first match instead of a fresh one (resumed snapshot)
    initial: Option<MatchState>,
}

impl<B: Backend, C: Clock> GameLoop<B, C> {
    pub fn new(backend: B, clock: C, settings: Settings) -> Self {
        let audio = AudioManager::from_settings(&settings);
        Self {
            backend,
            clock,
            settings,
            audio,
            initial: None,
        }
    }

    /// Start the first match from `state` rather than from scratch
    pub fn with_initial_state(mut self, state: MatchState) -> Self {
        self.initial = Some(state);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run matches back to back until the window is closed.
    ///
    /// Backend failures end the loop immediately.
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        loop {
            let mut state = self.initial.take().unwrap_or_default();
            log::info!("Match {} starting", summary.matches_finished + 1);

            let winner = loop {
                self.clock.tick(self.settings.tick_interval());

                let input = TickInput {
                    events: self.backend.poll_events()?,
                    keys: self.backend.key_state(),
                };
                let outcome = tick(&mut state, &input);
                summary.ticks += 1;

                for effect in &outcome.sounds {
                    self.audio.play(&mut self.backend, *effect);
                }
                self.backend.draw_frame(&Frame::from_state(&state))?;

                if outcome.quit {
                    log::info!("Window closed, stopping after {} ticks", summary.ticks);
                    return Ok(summary);
                }
                if let GamePhase::MatchOver { winner } = state.phase {
                    break winner;
                }
            };

            summary.matches_finished += 1;
            summary.last_winner = Some(winner);

            if self.hold_winner_banner()? {
                log::info!("Window closed during winner banner");
                return Ok(summary);
            }
            log::info!("Restarting match");
        }
    }

    /// Keep the banner up for the configured hold. Returns true if a window
    /// close was seen (only when `observe_quit_during_hold` is set; otherwise
    /// the hold is a single blocking sleep and events wait for the next tick).
    fn hold_winner_banner(&mut self) -> Result<bool> {
        let hold = self.settings.winner_hold();
        if !self.settings.observe_quit_during_hold {
            self.clock.sleep(hold);
            return Ok(false);
        }

        let step = self.settings.tick_interval();
        let mut remaining = hold;
        while !remaining.is_zero() {
            let wait = remaining.min(step);
            self.clock.sleep(wait);
            remaining -= wait;
            if self.backend.poll_events()?.contains(&WindowEvent::Quit) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
