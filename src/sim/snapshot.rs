//! Read-only view of the field for the host renderer
//!
//! The platform draws from a [`RenderSnapshot`] taken after each tick. It is
//! plain data and serializes to JSON for hosts across an FFI/JS boundary.

use serde::{Deserialize, Serialize};

use super::state::{Field, GameState};

/// One drawable circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// 0xRRGGBB multiply tint, if any
    pub tint: Option<u32>,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub score: u64,
    pub field: Field,
    pub flyer: SpriteView,
    pub targets: Vec<SpriteView>,
    pub projectiles: Vec<SpriteView>,
}

impl RenderSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl GameState {
    /// Capture the current frame for rendering
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            tick: self.time_ticks,
            score: self.score,
            field: self.field,
            flyer: SpriteView {
                id: 0,
                x: self.flyer.pos.x,
                y: self.flyer.pos.y,
                radius: self.flyer.radius,
                tint: None,
            },
            targets: self
                .targets
                .iter()
                .map(|t| SpriteView {
                    id: t.id,
                    x: t.pos.x,
                    y: t.pos.y,
                    radius: t.radius,
                    tint: t.tint(),
                })
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .map(|p| SpriteView {
                    id: p.id,
                    x: p.pos.x,
                    y: p.pos.y,
                    radius: p.radius,
                    tint: None,
                })
                .collect(),
        }
    }
}
