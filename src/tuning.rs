//! Gameplay tuning
//!
//! Every constant the simulation reads at runtime. Defaults reproduce the
//! observed feel; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, TuningError};

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Flyer ===
    /// Collision radius of the flyer
    pub flyer_radius: f32,
    /// Fixed altitude the flyer patrols at
    pub flyer_baseline_y: f32,
    /// Horizontal speed magnitude, restored on every edge bounce
    pub patrol_speed: f32,

    // === World ===
    /// Downward acceleration applied to free bodies (pixels/s²)
    pub gravity: f32,

    // === Projectiles ===
    pub projectile_radius: f32,
    /// Horizontal launch speed range is [-spread, spread], whole pixels/s
    pub projectile_spread: u32,
    /// Distance below the field bottom at which projectiles are culled
    pub cull_margin: f32,
    pub bounce_vx_factor: f32,
    pub bounce_vy_factor: f32,

    // === Targets ===
    pub target_count: usize,
    pub target_start_x: f32,
    pub target_spacing: f32,
    pub target_width: f32,
    pub target_ground_offset: f32,
    pub target_radius: f32,
    /// Upward acceleration once struck (negative = up)
    pub float_accel: f32,
    /// Extra per-tick velocity nudge once struck (negative = up)
    pub float_nudge: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            flyer_radius: FLYER_RADIUS,
            flyer_baseline_y: FLYER_BASELINE_Y,
            patrol_speed: FLYER_PATROL_SPEED,

            gravity: GRAVITY,

            projectile_radius: PROJECTILE_RADIUS,
            projectile_spread: PROJECTILE_SPREAD,
            cull_margin: CULL_MARGIN,
            bounce_vx_factor: BOUNCE_VX_FACTOR,
            bounce_vy_factor: BOUNCE_VY_FACTOR,

            target_count: TARGET_COUNT,
            target_start_x: TARGET_START_X,
            target_spacing: TARGET_SPACING,
            target_width: TARGET_WIDTH,
            target_ground_offset: TARGET_GROUND_OFFSET,
            target_radius: TARGET_RADIUS,
            float_accel: FLOAT_ACCEL,
            float_nudge: FLOAT_NUDGE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a starting tuning file)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation laws cannot work with
    pub fn validate(&self) -> Result<()> {
        positive("flyer_radius", self.flyer_radius)?;
        positive("patrol_speed", self.patrol_speed)?;
        positive("projectile_radius", self.projectile_radius)?;
        positive("target_radius", self.target_radius)?;
        positive("target_width", self.target_width)?;
        positive("target_spacing", self.target_spacing)?;
        finite("flyer_baseline_y", self.flyer_baseline_y)?;
        finite("gravity", self.gravity)?;
        finite("cull_margin", self.cull_margin)?;
        finite("bounce_vx_factor", self.bounce_vx_factor)?;
        finite("bounce_vy_factor", self.bounce_vy_factor)?;
        finite("target_start_x", self.target_start_x)?;
        finite("target_ground_offset", self.target_ground_offset)?;

        // Struck targets must keep accelerating upward
        if !(self.float_accel.is_finite() && self.float_nudge.is_finite())
            || self.float_accel > 0.0
            || self.float_nudge > 0.0
            || (self.float_accel == 0.0 && self.float_nudge == 0.0)
        {
            return Err(TuningError::Invalid {
                field: "float_accel",
                reason: "float accel and nudge must be non-positive and not both zero",
            });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: "must be finite",
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: "must be greater than zero",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 400.0, "target_count": 3 }"#).unwrap();
        assert_eq!(tuning.gravity, 400.0);
        assert_eq!(tuning.target_count, 3);
        assert_eq!(tuning.patrol_speed, FLYER_PATROL_SPEED);
        assert_eq!(tuning.projectile_spread, PROJECTILE_SPREAD);
    }

    #[test]
    fn test_json_roundtrip() {
        let tuning = Tuning::default();
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "patrol_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "patrol_speed",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "float_accel": 10.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { .. }));

        // A negative spread cannot even be represented
        let err = Tuning::from_json(r#"{ "projectile_spread": -1 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_zero_target_count_is_valid() {
        let tuning = Tuning::from_json(r#"{ "target_count": 0 }"#).unwrap();
        let state = crate::sim::GameState::new(1, 800.0, 600.0, tuning);
        assert!(state.targets.is_empty());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load("/nonexistent/sky-drop/tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
