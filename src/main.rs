//! Neon Runner headless driver
//!
//! Stands in for the display loop: feeds 60 Hz timestamps through a
//! `FrameClock`, lets the autopilot play, and prints the final snapshot as JSON.
//!
//! Environment:
//! - `NEON_RUNNER_SEED`: run seed (decimal)
//! - `NEON_RUNNER_TUNING`: path to a JSON tuning override
//! - `RUST_LOG`: log filter (`env_logger`)

use neon_runner::consts::FRAME_DT;
use neon_runner::sim::{FrameClock, GamePhase, GameState, autopilot, tick};
use neon_runner::{Settings, Tuning};

/// Give up after two minutes of simulated play
const MAX_FRAMES: u32 = 120 * 60;
const DEFAULT_SEED: u64 = 0xC0FFEE;

fn load_tuning() -> Tuning {
    let Ok(path) = std::env::var("NEON_RUNNER_TUNING") else {
        return Tuning::default();
    };

    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Could not read tuning file {}: {} - using defaults", path, e);
            return Tuning::default();
        }
    };

    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("{} - using defaults", e);
            Tuning::default()
        }
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::var("NEON_RUNNER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    log::info!("Neon Runner (headless) starting, seed {}", seed);

    let mut state = GameState::with_config(seed, load_tuning(), Settings::default());
    let mut clock = FrameClock::new();
    let frame_ms = f64::from(FRAME_DT) * 1000.0;

    for frame in 0..MAX_FRAMES {
        if let Some(intent) = autopilot::decide(&state) {
            state.submit_intent(intent);
        }
        let dt = clock.advance(f64::from(frame) * frame_ms);
        tick(&mut state, dt);

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let snapshot = state.snapshot();
    log::info!(
        "Finished: {:?}, score {}, {:.1}s simulated",
        snapshot.phase,
        snapshot.score,
        snapshot.elapsed
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}
