//! Aggregate volume constraint family.
//!
//! One constraint per body over the whole triangle set:
//! `C(x) = V(x) - k·V0`, where `V` is the signed volume and `k` the
//! overpressure factor. The gradient touches every vertex of every
//! triangle, so the solve accumulates it into a caller-provided scratch
//! buffer and runs a single projection pass.

use velum_math::Vec3;
use velum_mesh::SurfaceMesh;
use velum_types::{VelumError, VelumResult};

use crate::projection::{self, SubstepScales};

/// Keeps a closed body's signed volume at `k` times its rest volume.
#[derive(Debug, Clone)]
pub struct VolumeConstraint {
    triangles: Vec<[u32; 3]>,
    rest_volume: f32,
}

impl VolumeConstraint {
    /// Builds the constraint from a mesh's triangles and rest positions.
    pub fn from_mesh(mesh: &SurfaceMesh) -> VelumResult<Self> {
        let rest_volume = mesh.signed_volume();
        if !(rest_volume.is_finite() && rest_volume > 0.0) {
            return Err(VelumError::InvalidMesh(format!(
                "volume constraint requires positive rest volume, got {rest_volume}"
            )));
        }
        let triangles = (0..mesh.triangle_count()).map(|t| mesh.triangle(t)).collect();
        Ok(Self {
            triangles,
            rest_volume,
        })
    }

    #[inline]
    pub fn rest_volume(&self) -> f32 {
        self.rest_volume
    }

    /// Largest vertex index referenced by any triangle.
    pub fn max_vertex_index(&self) -> Option<u32> {
        self.triangles
            .iter()
            .map(|t| t.iter().copied().max().unwrap_or(0))
            .max()
    }

    /// Signed volume of the current configuration.
    pub fn volume(&self, x: &[Vec3]) -> f32 {
        let six_v: f32 = self
            .triangles
            .iter()
            .map(|&[a, b, c]| {
                x[a as usize]
                    .cross(x[b as usize])
                    .dot(x[c as usize])
            })
            .sum();
        six_v / 6.0
    }

    /// Current violation against the overpressure target `k·V0`.
    #[inline]
    pub fn value(&self, x: &[Vec3], pressure: f32) -> f32 {
        self.volume(x) - pressure * self.rest_volume
    }

    /// Projects the constraint once.
    ///
    /// `grad_scratch` must be sized to the vertex count; it is zeroed
    /// and refilled here so the integrator can reuse one allocation
    /// across substeps.
    pub fn solve(
        &self,
        x: &mut [Vec3],
        pos_diff: &[Vec3],
        inv_mass: &[f32],
        scales: &SubstepScales,
        pressure: f32,
        grad_scratch: &mut [Vec3],
    ) {
        grad_scratch.fill(Vec3::ZERO);
        for &[a, b, c] in &self.triangles {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            grad_scratch[a] += x[b].cross(x[c]) / 6.0;
            grad_scratch[b] += x[c].cross(x[a]) / 6.0;
            grad_scratch[c] += x[a].cross(x[b]) / 6.0;
        }

        let mut grad_dot_diff = 0.0;
        let mut weighted_grad_sq = 0.0;
        for (i, grad) in grad_scratch.iter().enumerate() {
            grad_dot_diff += grad.dot(pos_diff[i]);
            weighted_grad_sq += inv_mass[i] * grad.length_squared();
        }

        let dl = projection::delta_lambda_from_sums(
            self.value(x, pressure),
            grad_dot_diff,
            weighted_grad_sq,
            scales,
        );
        for (i, grad) in grad_scratch.iter().enumerate() {
            x[i] += dl * inv_mass[i] * *grad;
        }
    }

    /// Elastic energy `(0.5 / alpha) · C²`, or `None` when `alpha = 0`.
    pub fn energy(&self, x: &[Vec3], pressure: f32, alpha: f32) -> Option<f32> {
        if alpha == 0.0 {
            return None;
        }
        let c = self.value(x, pressure);
        Some(0.5 / alpha * c * c)
    }
}
