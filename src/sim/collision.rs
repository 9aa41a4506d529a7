//! Circle collision primitives
//!
//! Every body in the field collides as a circle: the flyer, each projectile
//! and each target.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A collision circle in field coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// True iff the distance between centers is strictly less than the sum of radii.
///
/// Touching circles do not overlap.
#[inline]
pub fn overlaps(a: Circle, b: Circle) -> bool {
    let reach = a.radius + b.radius;
    a.center.distance_squared(b.center) < reach * reach
}
