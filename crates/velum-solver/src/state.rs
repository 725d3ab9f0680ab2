//! Per-vertex simulation state.

use velum_math::Vec3;
use velum_mesh::SurfaceMesh;
use velum_types::{VelumError, VelumResult};

/// Mutable per-vertex state of one body.
///
/// All vectors share the same length (the welded vertex count). Owned
/// and mutated by exactly one frame task at a time; other tasks only
/// ever see the previous frame's committed copy.
#[derive(Debug, Clone)]
pub struct VertexState {
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub accelerations: Vec<Vec3>,
    pub masses: Vec<f32>,
    pub inv_masses: Vec<f32>,
}

impl VertexState {
    /// Builds rest state from a mesh with a uniform per-vertex mass.
    pub fn from_mesh(mesh: &SurfaceMesh, mass: f32) -> VelumResult<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(VelumError::InvalidConfig(format!(
                "vertex mass must be positive and finite, got {mass}"
            )));
        }

        let n = mesh.vertex_count();
        Ok(Self {
            positions: mesh.positions.clone(),
            velocities: vec![Vec3::ZERO; n],
            accelerations: vec![Vec3::ZERO; n],
            masses: vec![mass; n],
            inv_masses: vec![1.0 / mass; n],
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Restores this state from a rest snapshot taken at body creation.
    pub fn reset_from(&mut self, rest: &VertexState) {
        self.positions.copy_from_slice(&rest.positions);
        self.velocities.copy_from_slice(&rest.velocities);
        self.accelerations.copy_from_slice(&rest.accelerations);
    }

    /// Mass-weighted mean of the current vertex positions.
    pub fn center_of_mass(&self) -> Vec3 {
        let total: f32 = self.masses.iter().sum();
        if total <= 0.0 {
            return Vec3::ZERO;
        }
        let sum: Vec3 = self
            .positions
            .iter()
            .zip(&self.masses)
            .map(|(p, m)| *p * *m)
            .sum();
        sum / total
    }

    /// Clamps vertices to the ground plane, zeroing downward velocity.
    pub fn clamp_ground(&mut self, ground_level: f32) {
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            if p.y < ground_level {
                p.y = ground_level;
                if v.y < 0.0 {
                    v.y = 0.0;
                }
            }
        }
    }

    /// Clamps vertices to the invisible barrier box on X and Z,
    /// zeroing the outward velocity component on the clamped axis.
    pub fn clamp_barrier(&mut self, half_extent: f32) {
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            if p.x > half_extent {
                p.x = half_extent;
                if v.x > 0.0 {
                    v.x = 0.0;
                }
            } else if p.x < -half_extent {
                p.x = -half_extent;
                if v.x < 0.0 {
                    v.x = 0.0;
                }
            }

            if p.z > half_extent {
                p.z = half_extent;
                if v.z > 0.0 {
                    v.z = 0.0;
                }
            } else if p.z < -half_extent {
                p.z = -half_extent;
                if v.z < 0.0 {
                    v.z = 0.0;
                }
            }
        }
    }
}
