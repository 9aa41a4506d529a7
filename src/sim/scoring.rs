//! Hit detection and scoring
//!
//! Runs after motion so every pair is tested against post-move positions.
//! A target scores at most once: the first projectile to overlap it strikes
//! it, and from then on it is skipped by every later test.

use glam::Vec2;

use super::collision::overlaps;
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Velocity of a projectile after it strikes a target
#[inline]
pub fn bounce_velocity(vel: Vec2, tuning: &Tuning) -> Vec2 {
    Vec2::new(vel.x * tuning.bounce_vx_factor, vel.y * tuning.bounce_vy_factor)
}

/// Test every projectile against every unstruck target and resolve hits
///
/// Returns the number of targets struck this pass. A projectile may strike
/// several targets in one pass; it bounces once per strike.
pub fn resolve_hits(state: &mut GameState) -> u32 {
    let tick = state.time_ticks;
    let tuning = &state.tuning;
    let mut hits = 0;

    for projectile in &mut state.projectiles {
        for target in &mut state.targets {
            if target.is_struck() {
                continue;
            }
            if !overlaps(projectile.circle(), target.circle()) {
                continue;
            }
            if !target.strike(tick, tuning.float_accel) {
                continue;
            }

            state.score += 1;
            hits += 1;
            let before = projectile.vel;
            projectile.vel = bounce_velocity(before, tuning);

            log::debug!(
                "Target {} struck by projectile {} on tick {} (score {})",
                target.id,
                projectile.id,
                tick,
                state.score
            );
            state.events.push(GameEvent::TargetStruck {
                target_id: target.id,
                projectile_id: projectile.id,
            });
            state
                .events
                .push(GameEvent::ScoreChanged { score: state.score });
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Projectile, TargetState};

    fn session() -> GameState {
        let mut state = GameState::new(3, 800.0, 600.0, Tuning::default());
        state.drain_events();
        state
    }

    fn place_projectile(state: &mut GameState, pos: Vec2, vel: Vec2) -> u32 {
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            pos,
            vel,
            radius: state.tuning.projectile_radius,
        });
        id
    }

    #[test]
    fn test_hit_scores_and_strikes() {
        let mut state = session();
        state.time_ticks = 12;
        // Target 0 centered at (140, 520), reach 28
        let projectile = place_projectile(
            &mut state,
            Vec2::new(140.0, 495.0),
            Vec2::new(10.0, 300.0),
        );

        assert_eq!(resolve_hits(&mut state), 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.targets[0].state, TargetState::Struck { since_tick: 12 });
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::TargetStruck {
                    target_id: state.targets[0].id,
                    projectile_id: projectile,
                },
                GameEvent::ScoreChanged { score: 1 },
            ]
        );
    }

    #[test]
    fn test_bounce_law() {
        let mut state = session();
        place_projectile(&mut state, Vec2::new(140.0, 500.0), Vec2::new(20.0, 400.0));
        resolve_hits(&mut state);

        let vel = state.projectiles[0].vel;
        assert!((vel.x - 24.0).abs() < 1e-4);
        assert!((vel.y - (-120.0)).abs() < 1e-4);
        // Projectile survives the hit
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_miss_changes_nothing() {
        let mut state = session();
        // Distance 28 == reach, touching only
        place_projectile(&mut state, Vec2::new(140.0, 492.0), Vec2::new(5.0, 100.0));
        assert_eq!(resolve_hits(&mut state), 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.projectiles[0].vel, Vec2::new(5.0, 100.0));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_simultaneous_projectiles_score_once() {
        let mut state = session();
        for dx in [-4.0, 0.0, 4.0] {
            place_projectile(
                &mut state,
                Vec2::new(140.0 + dx, 510.0),
                Vec2::new(0.0, 200.0),
            );
        }

        assert_eq!(resolve_hits(&mut state), 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.struck_count(), 1);
        // Only the first projectile bounced
        assert!((state.projectiles[0].vel.y - (-60.0)).abs() < 1e-4);
        assert_eq!(state.projectiles[1].vel.y, 200.0);
        assert_eq!(state.projectiles[2].vel.y, 200.0);
    }

    #[test]
    fn test_struck_target_never_scores_again() {
        let mut state = session();
        place_projectile(&mut state, Vec2::new(140.0, 510.0), Vec2::new(0.0, 200.0));
        resolve_hits(&mut state);
        place_projectile(&mut state, Vec2::new(140.0, 510.0), Vec2::new(0.0, 200.0));

        for _ in 0..5 {
            state.time_ticks += 1;
            resolve_hits(&mut state);
        }
        assert_eq!(state.score, 1);
        assert_eq!(state.targets[0].state, TargetState::Struck { since_tick: 0 });
    }

    #[test]
    fn test_one_projectile_can_strike_two_targets() {
        let mut state = session();
        // Pull two targets together under one projectile
        state.targets[1].pos = Vec2::new(150.0, 520.0);
        place_projectile(&mut state, Vec2::new(145.0, 500.0), Vec2::new(10.0, 100.0));

        assert_eq!(resolve_hits(&mut state), 2);
        assert_eq!(state.score, 2);
        // Bounced once per strike
        let vel = state.projectiles[0].vel;
        assert!((vel.x - 14.4).abs() < 1e-4);
        assert!((vel.y - 9.0).abs() < 1e-4);
    }
}
