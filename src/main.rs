//! Space Duel entry point
//!
//! Runs matches headlessly from a recorded input script:
//!
//! ```text
//! space-duel [SCRIPT.json] [SETTINGS.json]
//! ```
//!
//! Without a script a short built-in demo is played. Set `RUST_LOG=debug`
//! to see every shot and hit.

use std::path::Path;

use space_duel::platform::{FixedRateClock, Script, ScriptTick, ScriptedBackend};
use space_duel::sim::Key;
use space_duel::{GameLoop, Settings};

fn main() {
    env_logger::init();
    log::info!("Space Duel (headless) starting...");

    if let Err(e) = run() {
        log::error!("Fatal: {e}");
        std::process::exit(1);
    }
}

fn run() -> space_duel::Result<()> {
    let mut args = std::env::args().skip(1);

    let script = match args.next() {
        Some(path) => Script::load(Path::new(&path))?,
        None => demo_script(),
    };
    let settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let backend = ScriptedBackend::new(script);
    let mut game = GameLoop::new(backend, FixedRateClock::new(), settings);
    let summary = game.run()?;

    log::info!(
        "Done: {} ticks, {} matches finished, last winner {}",
        summary.ticks,
        summary.matches_finished,
        summary.last_winner.map_or("none", |w| w.as_str())
    );
    Ok(())
}

/// Both ships line up and trade shots for a few seconds
fn demo_script() -> Script {
    let mut ticks = Vec::new();
    for i in 0..240 {
        let mut tick = ScriptTick::holding(match (i / 30) % 2 {
            0 => [Key::KeyS, Key::ArrowDown],
            _ => [Key::KeyW, Key::ArrowUp],
        });
        if i % 20 == 0 {
            tick.pressed.push(Key::ControlLeft);
        }
        if i % 25 == 0 {
            tick.pressed.push(Key::ControlRight);
        }
        ticks.push(tick);
    }
    ticks.push(ScriptTick::quit());
    Script::new(ticks)
}
