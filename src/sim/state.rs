//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives on [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use super::spawn;
use crate::consts::STRUCK_TINT;
use crate::tuning::Tuning;

/// Rectangular play field. Origin top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The patrolling flyer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flyer {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Speed magnitude restored on every edge bounce
    pub patrol_speed: f32,
    /// Altitude the flyer is pinned to
    pub baseline_y: f32,
}

impl Flyer {
    /// Start at the horizontal center of the field, heading right
    pub fn new(field: Field, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(field.width / 2.0, tuning.flyer_baseline_y),
            vel: Vec2::new(tuning.patrol_speed, 0.0),
            radius: tuning.flyer_radius,
            patrol_speed: tuning.patrol_speed,
            baseline_y: tuning.flyer_baseline_y,
        }
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }
}

/// Whether a target has been scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetState {
    #[default]
    Unstruck,
    /// Scored on the given tick; the target floats away from then on
    Struck { since_tick: u64 },
}

/// A ground target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    /// Center of the target
    pub pos: Vec2,
    pub vel: Vec2,
    /// Vertical acceleration, set once struck
    pub accel_y: f32,
    pub state: TargetState,
    pub radius: f32,
    /// Horizontal extent used for row layout
    pub width: f32,
}

impl Target {
    pub fn new(id: u32, pos: Vec2, radius: f32, width: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            accel_y: 0.0,
            state: TargetState::Unstruck,
            radius,
            width,
        }
    }

    #[inline]
    pub fn is_struck(&self) -> bool {
        matches!(self.state, TargetState::Struck { .. })
    }

    /// Mark as struck. Returns false (and changes nothing) if already struck.
    pub fn strike(&mut self, tick: u64, float_accel: f32) -> bool {
        if self.is_struck() {
            return false;
        }
        self.state = TargetState::Struck { since_tick: tick };
        self.accel_y = float_accel;
        true
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    /// Render tint, if any
    pub fn tint(&self) -> Option<u32> {
        self.is_struck().then_some(STRUCK_TINT)
    }
}

/// A falling projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Projectile {
    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }
}

/// Things the host platform may want to react to (score display, effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileDropped { projectile_id: u32 },
    TargetStruck { target_id: u32, projectile_id: u32 },
    /// Pushed on every score change with the new total
    ScoreChanged { score: u64 },
    ProjectileCulled { projectile_id: u32 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub field: Field,
    pub flyer: Flyer,
    /// Target row (stable order by id)
    pub targets: Vec<Target>,
    /// Live projectiles (stable order by id)
    pub projectiles: Vec<Projectile>,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised since the last drain, at most one frame old
    pub events: Vec<GameEvent>,
    /// Number of queued events that were already there when the last tick ended
    stale_events: usize,
    pub(crate) rng: Pcg32,
    /// Scratch list of projectile ids marked for removal
    pub(crate) cull_buffer: Vec<u32>,
    next_id: u32,
}

impl GameState {
    /// Start a session on a field of the given size
    pub fn new(seed: u64, width: f32, height: f32, tuning: Tuning) -> Self {
        let field = Field::new(width, height);
        let flyer = Flyer::new(field, &tuning);
        let mut state = Self {
            seed,
            tuning,
            field,
            flyer,
            targets: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
            stale_events: 0,
            rng: Pcg32::seed_from_u64(seed),
            cull_buffer: Vec::new(),
            next_id: 1,
        };

        spawn::initialize_targets(&mut state);
        log::info!(
            "Session started: seed={}, field={}x{}, targets={}",
            seed,
            width,
            height,
            state.targets.len()
        );

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Drop one projectile below the flyer. Integrated from the next tick on.
    pub fn drop_projectile(&mut self) -> u32 {
        spawn::drop_projectile(self)
    }

    /// Update field bounds; boundary checks use the new size from the next tick
    pub fn resize(&mut self, width: f32, height: f32) {
        log::info!(
            "Field resized: {}x{} -> {}x{}",
            self.field.width,
            self.field.height,
            width,
            height
        );
        self.field = Field::new(width, height);
    }

    /// Lay the target row out again for the current field
    pub fn respawn_targets(&mut self) {
        spawn::initialize_targets(self);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.stale_events = 0;
        std::mem::take(&mut self.events)
    }

    /// Discard events a host left undrained through a whole frame.
    /// Drops made since the last tick stay queued.
    pub(crate) fn expire_stale_events(&mut self) {
        let stale = self.stale_events.min(self.events.len());
        self.events.drain(..stale);
        self.stale_events = 0;
    }

    /// Everything queued now expires at the start of the next tick
    pub(crate) fn mark_events_stale(&mut self) {
        self.stale_events = self.events.len();
    }

    /// Number of targets that have been scored
    pub fn struck_count(&self) -> usize {
        self.targets.iter().filter(|t| t.is_struck()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(7, 800.0, 600.0, Tuning::default());
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.flyer.pos, Vec2::new(400.0, 100.0));
        assert_eq!(state.flyer.vel, Vec2::new(120.0, 0.0));
        assert_eq!(state.targets.len(), 4);
        assert!(state.projectiles.is_empty());
        assert!(state.targets.iter().all(|t| !t.is_struck()));
    }

    #[test]
    fn test_strike_is_one_way() {
        let mut target = Target::new(1, Vec2::new(140.0, 520.0), 20.0, 40.0);
        assert_eq!(target.tint(), None);

        assert!(target.strike(3, -20.0));
        assert_eq!(target.state, TargetState::Struck { since_tick: 3 });
        assert_eq!(target.accel_y, -20.0);
        assert_eq!(target.tint(), Some(STRUCK_TINT));

        // Second strike is a no-op and keeps the original tick
        assert!(!target.strike(9, -20.0));
        assert_eq!(target.state, TargetState::Struck { since_tick: 3 });
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::new(1, 800.0, 600.0, Tuning::default());
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_ne!(a, b);
        assert!(state.targets.iter().all(|t| t.id != a && t.id != b));
    }

    #[test]
    fn test_resize_updates_field() {
        let mut state = GameState::new(1, 800.0, 600.0, Tuning::default());
        state.resize(1024.0, 768.0);
        assert_eq!(state.field, Field::new(1024.0, 768.0));
        // Targets stay where they were
        assert_eq!(state.targets.len(), 4);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(1, 800.0, 600.0, Tuning::default());
        state.drop_projectile();
        let events = state.drain_events();
        assert_eq!(events.len(), 1);
        assert!(state.drain_events().is_empty());
    }
}
