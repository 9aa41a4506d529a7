//! Sky Drop - a flyer patrols the sky and drops projectiles onto ground targets
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, scoring)
//! - `tuning`: Data-driven gameplay constants
//! - `error`: Errors raised while loading tuning data
//!
//! Rendering, input wiring and score display belong to the host platform. It
//! calls [`sim::tick`] once per frame, forwards drop presses to
//! [`sim::GameState::drop_projectile`], reads [`sim::RenderSnapshot`] back, and
//! takes score changes from [`sim::GameState::drain_events`]. Events not
//! drained by the end of the following tick are discarded.

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::TuningError;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal frame step (one tick per rendered frame at 60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Flyer defaults
    pub const FLYER_RADIUS: f32 = 22.0;
    pub const FLYER_BASELINE_Y: f32 = 100.0;
    pub const FLYER_PATROL_SPEED: f32 = 120.0;

    /// Ambient downward acceleration for free bodies (pixels/s²)
    pub const GRAVITY: f32 = 800.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 8.0;
    /// Horizontal launch speed is drawn from [-spread, spread] (pixels/s)
    pub const PROJECTILE_SPREAD: u32 = 45;
    /// Projectiles are culled once they fall this far below the field
    pub const CULL_MARGIN: f32 = 50.0;

    /// Hit bounce: vx is amplified, vy reversed and damped
    pub const BOUNCE_VX_FACTOR: f32 = 1.2;
    pub const BOUNCE_VY_FACTOR: f32 = -0.3;

    /// Target row layout
    pub const TARGET_COUNT: usize = 6;
    pub const TARGET_START_X: f32 = 120.0;
    pub const TARGET_SPACING: f32 = 180.0;
    pub const TARGET_WIDTH: f32 = 40.0;
    /// Target centers sit this far above the bottom of the field
    pub const TARGET_GROUND_OFFSET: f32 = 80.0;
    pub const TARGET_RADIUS: f32 = 20.0;

    /// Struck targets float away: constant upward acceleration (pixels/s²)
    pub const FLOAT_ACCEL: f32 = -20.0;
    /// plus an extra per-tick velocity nudge (pixels/s)
    pub const FLOAT_NUDGE: f32 = -5.0;

    /// Tint applied to struck targets (0xRRGGBB)
    pub const STRUCK_TINT: u32 = 0xffaaaa;
}
