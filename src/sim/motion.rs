//! Motion integration
//!
//! One shared integrator (semi-implicit Euler: velocity first, then position)
//! moves every body. Kind-specific rules are layered on top:
//! - the flyer bounces off the side edges at its patrol speed and is pinned to
//!   its baseline after integration, so gravity never pulls it down
//! - projectiles fall under gravity with no side bounds
//! - struck targets accelerate upward without limit, unstruck ones are static

use glam::Vec2;

use super::state::{Field, Flyer, GameState, Projectile, Target};
use crate::tuning::Tuning;

/// Advance a free body by `dt` under a constant acceleration
#[inline]
pub fn integrate_body(pos: &mut Vec2, vel: &mut Vec2, accel: Vec2, dt: f32) {
    *vel += accel * dt;
    *pos += *vel * dt;
}

/// Move the flyer one tick
///
/// Reads the field size every call so a resize takes effect immediately.
pub fn integrate_flyer(flyer: &mut Flyer, field: Field, gravity: f32, dt: f32) {
    integrate_body(&mut flyer.pos, &mut flyer.vel, Vec2::new(0.0, gravity), dt);

    let left = flyer.radius;
    let right = field.width - flyer.radius;
    if flyer.pos.x < left && flyer.vel.x < 0.0 {
        flyer.vel.x = flyer.patrol_speed;
        flyer.pos.x = left;
    } else if flyer.pos.x > right && flyer.vel.x > 0.0 {
        flyer.vel.x = -flyer.patrol_speed;
        flyer.pos.x = right.max(left);
    }

    // Pinned altitude, every tick, whatever gravity did above
    flyer.pos.y = flyer.baseline_y;
    flyer.vel.y = 0.0;
}

/// Move a projectile one tick
#[inline]
pub fn integrate_projectile(projectile: &mut Projectile, gravity: f32, dt: f32) {
    integrate_body(
        &mut projectile.pos,
        &mut projectile.vel,
        Vec2::new(0.0, gravity),
        dt,
    );
}

/// Move a target one tick. Only struck targets move.
pub fn integrate_target(target: &mut Target, tuning: &Tuning, dt: f32) {
    if !target.is_struck() {
        return;
    }
    target.vel.y += tuning.float_nudge;
    integrate_body(
        &mut target.pos,
        &mut target.vel,
        Vec2::new(0.0, target.accel_y),
        dt,
    );
}

/// Run the integrator over every body in tick order: flyer, projectiles, targets
pub fn integrate_all(state: &mut GameState, dt: f32) {
    let gravity = state.tuning.gravity;

    integrate_flyer(&mut state.flyer, state.field, gravity, dt);

    for projectile in &mut state.projectiles {
        integrate_projectile(projectile, gravity, dt);
    }

    for target in &mut state.targets {
        integrate_target(target, &state.tuning, dt);
    }
}
