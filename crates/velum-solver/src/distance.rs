//! Distance (edge-length) constraint family.

use velum_math::Vec3;
use velum_mesh::Edge;

use crate::projection::{self, SubstepScales};

/// Keeps one edge at its rest length: `C(x) = |x_v0 - x_v1| - d0`.
#[derive(Debug, Clone, Copy)]
pub struct DistanceConstraint {
    pub v0: u32,
    pub v1: u32,
    pub rest_length: f32,
}

impl DistanceConstraint {
    pub fn from_edge(edge: &Edge) -> Self {
        Self {
            v0: edge.v0,
            v1: edge.v1,
            rest_length: edge.rest_length,
        }
    }

    /// Current violation given positions `x`.
    #[inline]
    pub fn value(&self, x: &[Vec3]) -> f32 {
        (x[self.v0 as usize] - x[self.v1 as usize]).length() - self.rest_length
    }
}

/// Projects every edge constraint once, sequentially.
///
/// `x_prev` holds the last committed positions. When the predicted
/// endpoints coincide (a rigid edge overshooting through its rest
/// configuration lands both vertices on the same point), the gradient
/// falls back to the edge axis from `x_prev`, so the pass-through is
/// corrected in the same substep instead of tunneling. Only an edge
/// degenerate in both the predicted and committed positions is left
/// alone.
pub fn solve(
    constraints: &[DistanceConstraint],
    x: &mut [Vec3],
    x_prev: &[Vec3],
    pos_diff: &[Vec3],
    inv_mass: &[f32],
    scales: &SubstepScales,
) {
    for c in constraints {
        let (i, j) = (c.v0 as usize, c.v1 as usize);
        let mut n = (x[i] - x[j]).normalize_or_zero();
        if n == Vec3::ZERO {
            n = (x_prev[i] - x_prev[j]).normalize_or_zero();
        }
        let grads = [(c.v0, n), (c.v1, -n)];
        let dl = projection::delta_lambda(c.value(x), &grads, pos_diff, inv_mass, scales);
        projection::apply_correction(dl, &grads, inv_mass, x);
    }
}

/// Aggregate elastic energy `Σ (0.5 / alpha) · C²` over all edges.
///
/// `None` when `alpha = 0` (rigid constraints store no elastic energy
/// and the division is undefined).
pub fn energy(constraints: &[DistanceConstraint], x: &[Vec3], alpha: f32) -> Option<f32> {
    if alpha == 0.0 {
        return None;
    }
    let sum: f32 = constraints
        .iter()
        .map(|c| {
            let v = c.value(x);
            v * v
        })
        .sum();
    Some(0.5 / alpha * sum)
}
