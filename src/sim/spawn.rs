//! Spawning and culling
//!
//! Targets are laid out once per session in a single row. Projectiles are
//! created one per drop command and culled once they fall below the field.

use glam::Vec2;
use rand::Rng;

use super::state::{Flyer, GameEvent, GameState, Projectile, Target};
use crate::tuning::Tuning;

/// Left offsets of the target row for a field of the given width
///
/// Slots advance from `target_start_x` by `target_spacing` and stop at the
/// first slot that would not fit inside the right edge, so narrow fields get
/// fewer than `target_count` targets.
pub fn target_slots(field_width: f32, tuning: &Tuning) -> Vec<f32> {
    let limit = field_width - tuning.target_width;
    (0..tuning.target_count)
        .map(|i| tuning.target_start_x + i as f32 * tuning.target_spacing)
        .take_while(|&x| x <= limit)
        .collect()
}

/// Replace the target row with a fresh, unstruck one for the current field
pub fn initialize_targets(state: &mut GameState) {
    let field = state.field;
    let slots = target_slots(field.width, &state.tuning);
    let center_y = field.height - state.tuning.target_ground_offset;
    let half_width = state.tuning.target_width / 2.0;

    state.targets.clear();
    for x in slots {
        let id = state.next_entity_id();
        state.targets.push(Target::new(
            id,
            Vec2::new(x + half_width, center_y),
            state.tuning.target_radius,
            state.tuning.target_width,
        ));
    }

    if state.targets.len() < state.tuning.target_count {
        log::info!(
            "Field width {} fits {} of {} targets",
            field.width,
            state.targets.len(),
            state.tuning.target_count
        );
    }
}

/// Build a projectile just below the flyer with a random sideways speed
pub fn spawn_projectile<R: Rng>(
    flyer: &Flyer,
    id: u32,
    rng: &mut R,
    tuning: &Tuning,
) -> Projectile {
    let spread = i64::from(tuning.projectile_spread);
    let vx = rng.random_range(-spread..=spread) as f32;
    Projectile {
        id,
        pos: Vec2::new(flyer.pos.x, flyer.pos.y + flyer.radius),
        vel: Vec2::new(vx, 0.0),
        radius: tuning.projectile_radius,
    }
}

/// Drop one projectile from the flyer's current position
pub fn drop_projectile(state: &mut GameState) -> u32 {
    let id = state.next_entity_id();
    let projectile = spawn_projectile(&state.flyer, id, &mut state.rng, &state.tuning);
    log::debug!(
        "Projectile {} dropped at ({:.1}, {:.1}) vx={}",
        id,
        projectile.pos.x,
        projectile.pos.y,
        projectile.vel.x
    );
    state.projectiles.push(projectile);
    state.events.push(GameEvent::ProjectileDropped { projectile_id: id });
    id
}

/// Remove projectiles that fell past the bottom of the field plus the margin
///
/// Two passes: mark ids first, then compact the list.
pub fn cull_projectiles(state: &mut GameState) -> usize {
    let floor = state.field.height + state.tuning.cull_margin;

    state.cull_buffer.clear();
    for projectile in &state.projectiles {
        if projectile.pos.y > floor {
            state.cull_buffer.push(projectile.id);
        }
    }

    if state.cull_buffer.is_empty() {
        return 0;
    }

    let culled = &state.cull_buffer;
    state.projectiles.retain(|p| !culled.contains(&p.id));
    for &id in culled {
        log::trace!("Projectile {} culled", id);
        state
            .events
            .push(GameEvent::ProjectileCulled { projectile_id: id });
    }
    culled.len()
}
