//! Fixed timestep simulation tick
//!
//! Advances a match by one tick. Pure and deterministic: the same state and
//! the same inputs always produce the same result.

use super::bullets;
use super::events::GameEvent;
use super::input::{KeySnapshot, WindowEvent, handle_movement, map_window_event};
use super::state::{GamePhase, MatchState, Side};
use crate::audio::SoundEffect;

/// Everything the backend reported for one tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Window events in arrival order (close, key-down edges)
    pub events: Vec<WindowEvent>,
    /// Keys held at the start of the tick
    pub keys: KeySnapshot,
}

/// What happened during a tick that the outer loop must act on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The window asked to close
    pub quit: bool,
    /// Sound cues in the order they were triggered
    pub sounds: Vec<SoundEffect>,
}

/// Advance the match by one tick.
///
/// Order: window events, win check, movement, bullets, hit resolution,
/// win check. Hits posted by the bullet pass are resolved before returning.
pub fn tick(state: &mut MatchState, input: &TickInput) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    // Finished matches wait for the outer loop to reset them
    if state.is_over() {
        return outcome;
    }

    state.time_ticks += 1;

    state
        .events
        .extend(input.events.iter().copied().filter_map(map_window_event));
    resolve_events(state, &mut outcome);

    if check_winner(state) {
        return outcome;
    }

    handle_movement(Side::Yellow, &input.keys, &mut state.yellow.rect);
    handle_movement(Side::Red, &input.keys, &mut state.red.rect);

    let hits = bullets::advance_and_resolve(
        &mut state.yellow_bullets,
        &mut state.red_bullets,
        &state.yellow,
        &state.red,
    );
    state.events.extend(hits);
    resolve_events(state, &mut outcome);

    check_winner(state);
    outcome
}

/// Drain the event queue, applying each event in arrival order
fn resolve_events(state: &mut MatchState, outcome: &mut TickOutcome) {
    let pending: Vec<GameEvent> = state.events.drain().collect();
    for event in pending {
        match event {
            GameEvent::Quit => {
                log::info!("Quit requested at tick {}", state.time_ticks);
                outcome.quit = true;
            }
            GameEvent::FireRequested(side) => {
                let (bullets, ship) = match side {
                    Side::Yellow => (&mut state.yellow_bullets, &state.yellow),
                    Side::Red => (&mut state.red_bullets, &state.red),
                };
                if bullets::spawn(bullets, ship).is_some() {
                    outcome.sounds.push(SoundEffect::Fire);
                } else {
                    log::debug!("{} fire dropped, magazine full", side.as_str());
                }
            }
            GameEvent::YellowHit | GameEvent::RedHit => {
                let side = if event == GameEvent::YellowHit {
                    Side::Yellow
                } else {
                    Side::Red
                };
                let ship = state.ship_mut(side);
                ship.take_hit();
                log::debug!("{} hit, health {}", side.as_str(), ship.health);
                outcome.sounds.push(SoundEffect::Hit);
            }
        }
    }
}

/// Move to `MatchOver` if someone is out of health. Returns true if over.
fn check_winner(state: &mut MatchState) -> bool {
    match state.winner() {
        Some(winner) => {
            log::info!(
                "{} after {} ticks (yellow {}, red {})",
                winner.winner_text(),
                state.time_ticks,
                state.yellow.health,
                state.red.health
            );
            state.phase = GamePhase::MatchOver { winner };
            true
        }
        None => false,
    }
}
