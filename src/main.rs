//! Sky Drop headless runner
//!
//! Runs a seeded autoplay session and prints the final frame as JSON.
//!
//! Usage: `sky-drop [tuning.json] [seed]`

use sky_drop::Tuning;
use sky_drop::consts::FRAME_DT;
use sky_drop::sim::{GameEvent, GameState, TickInput, tick};

/// Session length in frames (30 seconds)
const SESSION_TICKS: u64 = 60 * 30;
const FIELD_WIDTH: f32 = 800.0;
const FIELD_HEIGHT: f32 = 600.0;
const DEFAULT_SEED: u64 = 0x5eed;

fn main() {
    env_logger::init();
    log::info!("Sky Drop (headless) starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let seed = match args.next() {
        Some(seed) => seed.parse()?,
        None => DEFAULT_SEED,
    };

    let mut state = GameState::new(seed, FIELD_WIDTH, FIELD_HEIGHT, tuning);

    while state.time_ticks < SESSION_TICKS {
        let input = TickInput::with_drops(autoplay_drops(&state));
        tick(&mut state, &input, FRAME_DT);

        for event in state.drain_events() {
            if let GameEvent::ScoreChanged { score } = event {
                log::info!("Score: {} (tick {})", score, state.time_ticks);
            }
        }
    }

    log::info!(
        "Session over: score {} / {} targets",
        state.score,
        state.targets.len()
    );
    println!("{}", state.snapshot().to_json()?);
    Ok(())
}

/// Drop when the flyer passes over an unstruck target and nothing is falling
fn autoplay_drops(state: &GameState) -> u32 {
    if !state.projectiles.is_empty() {
        return 0;
    }
    let over_target = state
        .targets
        .iter()
        .filter(|t| !t.is_struck())
        .any(|t| (t.pos.x - state.flyer.pos.x).abs() < t.radius / 2.0);
    u32::from(over_target)
}
