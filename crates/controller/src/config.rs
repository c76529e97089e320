//! Controller tuning constants and their JSON representation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use voxelwalk_common::EYE_HEIGHT;

/// Errors from loading or validating a controller configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// How the vertical axis is advanced each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityScaling {
    /// Integrate with the real frame time. Fall speed is frame-rate independent.
    #[default]
    TimeScaled,
    /// Integrate every tick with `reference_tick` regardless of the real frame
    /// time, so gravity and jumps are fixed per-tick quantities.
    FixedTick,
}

/// Tuning constants for the first-person controller.
///
/// Units are world units (one block edge) and seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Horizontal acceleration while a movement key is held (u/s²).
    pub acceleration: f32,
    /// Linear friction coefficient (1/s). Top speed is `acceleration / friction`.
    pub friction: f32,
    /// Player radius used against block faces.
    pub collision_radius: f32,
    /// Eye height above the feet.
    pub eye_height: f32,
    /// Vertical acceleration (u/s²). Negative pulls down.
    pub gravity: f32,
    /// Upward speed imparted by a jump (u/s).
    pub jump_speed: f32,
    pub gravity_scaling: GravityScaling,
    /// Step length used by [`GravityScaling::FixedTick`] (s).
    pub reference_tick: f32,
    /// Direction vectors shorter than this are treated as zero.
    pub direction_epsilon: f32,
    /// Degrees turned by one pan-left or pan-right step.
    pub pan_step_degrees: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            acceleration: 30.0,
            friction: 5.0,
            collision_radius: 0.5,
            eye_height: EYE_HEIGHT,
            // -0.015 and 0.25 per tick at 60 Hz.
            gravity: -54.0,
            jump_speed: 15.0,
            gravity_scaling: GravityScaling::TimeScaled,
            reference_tick: 1.0 / 60.0,
            direction_epsilon: 1e-5,
            pan_step_degrees: 5.0,
        }
    }
}

impl ControllerConfig {
    /// Load and validate a configuration from a JSON file. Missing fields
    /// take their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "loaded controller config");
        Ok(config)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make the integrators misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn check(ok: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            if ok {
                Ok(())
            } else {
                Err(ConfigError::Invalid { field, reason })
            }
        }
        check(
            self.acceleration.is_finite() && self.acceleration >= 0.0,
            "acceleration",
            "must be finite and non-negative",
        )?;
        check(
            self.friction.is_finite() && self.friction >= 0.0,
            "friction",
            "must be finite and non-negative",
        )?;
        check(
            self.collision_radius.is_finite() && self.collision_radius >= 0.0,
            "collision_radius",
            "must be finite and non-negative",
        )?;
        check(
            self.eye_height.is_finite() && self.eye_height > 0.0,
            "eye_height",
            "must be finite and positive",
        )?;
        check(
            self.gravity.is_finite() && self.gravity <= 0.0,
            "gravity",
            "must be finite and not point up",
        )?;
        check(
            self.jump_speed.is_finite() && self.jump_speed >= 0.0,
            "jump_speed",
            "must be finite and non-negative",
        )?;
        check(
            self.reference_tick.is_finite() && self.reference_tick > 0.0,
            "reference_tick",
            "must be finite and positive",
        )?;
        check(
            self.direction_epsilon.is_finite() && self.direction_epsilon > 0.0,
            "direction_epsilon",
            "must be finite and positive",
        )?;
        check(
            self.pan_step_degrees.is_finite(),
            "pan_step_degrees",
            "must be finite",
        )
    }

    /// Time step for the vertical integrator given the frame time `dt`.
    pub fn vertical_step(&self, dt: f32) -> f32 {
        match self.gravity_scaling {
            GravityScaling::TimeScaled => dt,
            GravityScaling::FixedTick => self.reference_tick,
        }
    }
}
