//! Per-frame simulation tick
//!
//! One external frame advances the simulation by exactly one step. There is
//! no accumulator and no substepping.

use super::motion;
use super::scoring;
use super::spawn;
use super::state::GameState;

/// Input commands buffered for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Drop presses (click/tap/space) since the last tick
    pub drops: u32,
}

impl TickInput {
    pub fn with_drops(drops: u32) -> Self {
        Self { drops }
    }
}

/// Advance the game state by one frame of `dt` seconds
///
/// Order: buffered drops, flyer, projectiles, struck targets, cull, hits.
/// Hits are tested only after every body has moved.
///
/// Events from the previous tick that were not drained are discarded here.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.expire_stale_events();

    for _ in 0..input.drops {
        spawn::drop_projectile(state);
    }

    state.time_ticks += 1;

    motion::integrate_all(state, dt);
    spawn::cull_projectiles(state);
    scoring::resolve_hits(state);

    state.mark_events_stale();
}
