//! Solver tunables.
//!
//! `SolverParams` is snapshotted once per frame into an immutable value
//! and passed by reference into every body task, so runtime edits from
//! the UI never race against in-flight solves.

use serde::{Deserialize, Serialize};
use velum_math::Vec3;
use velum_types::constants::{
    DEFAULT_ALPHA, DEFAULT_BARRIER_HALF_EXTENT, DEFAULT_BETA, DEFAULT_GROUND_LEVEL,
    DEFAULT_PRESSURE, DEFAULT_SUBSTEPS, GRAVITY,
};
use velum_types::{VelumError, VelumResult};

/// Global solver tunables, shared read-only across a frame's tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    /// World-space gravitational acceleration.
    pub gravity: Vec3,

    /// XPBD substeps per frame. Must be at least 1.
    pub substeps: u32,

    /// Compliance (inverse stiffness). 0 is perfectly rigid.
    pub alpha: f32,

    /// Damping coefficient.
    pub beta: f32,

    /// Target-volume multiplier (overpressure). 1 preserves rest volume.
    pub pressure: f32,

    pub enable_distance: bool,
    pub enable_volume: bool,
    pub enable_collision: bool,

    /// Y coordinate of the ground plane.
    pub ground_level: f32,

    /// Half-extent of the invisible barrier box on X and Z.
    pub barrier_half_extent: f32,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -GRAVITY, 0.0),
            substeps: DEFAULT_SUBSTEPS,
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            pressure: DEFAULT_PRESSURE,
            enable_distance: true,
            enable_volume: true,
            enable_collision: true,
            ground_level: DEFAULT_GROUND_LEVEL,
            barrier_half_extent: DEFAULT_BARRIER_HALF_EXTENT,
        }
    }
}

impl SolverParams {
    /// Checks the parameter ranges the solver assumes.
    pub fn validate(&self) -> VelumResult<()> {
        if self.substeps == 0 {
            return Err(VelumError::InvalidConfig(
                "substeps must be at least 1".into(),
            ));
        }
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err(VelumError::InvalidConfig(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !(self.beta.is_finite() && self.beta >= 0.0) {
            return Err(VelumError::InvalidConfig(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !(self.pressure.is_finite() && self.pressure > 0.0) {
            return Err(VelumError::InvalidConfig(format!(
                "pressure must be finite and positive, got {}",
                self.pressure
            )));
        }
        if !(self.barrier_half_extent.is_finite() && self.barrier_half_extent > 0.0) {
            return Err(VelumError::InvalidConfig(format!(
                "barrier half-extent must be finite and positive, got {}",
                self.barrier_half_extent
            )));
        }
        if !self.gravity.is_finite() || !self.ground_level.is_finite() {
            return Err(VelumError::InvalidConfig(
                "gravity and ground level must be finite".into(),
            ));
        }
        Ok(())
    }
}
