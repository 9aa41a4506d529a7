//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per tick, step size supplied by the caller
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod scoring;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Circle, overlaps};
pub use snapshot::{RenderSnapshot, SpriteView};
pub use state::{Field, Flyer, GameEvent, GameState, Projectile, Target, TargetState};
pub use tick::{TickInput, tick};
