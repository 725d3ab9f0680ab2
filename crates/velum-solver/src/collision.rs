//! Environment-collision constraint family.
//!
//! A sampling heuristic, not exact mesh collision: each dynamic vertex
//! carries a handful of half-space constraints sampled from a candidate
//! body's surface. A vertex counts as "inside" the candidate only when
//! every sampled half-space is violated; the correction then pushes it
//! out along the least-violated one. Vertices near the surface but
//! outside any sampled half-space are left alone, so shallow grazing
//! contacts can slip through at coarse sampling densities.

use velum_math::Vec3;

use crate::projection::{self, SubstepScales};

/// `C(x) = normal · (x - point)`; violated when negative.
#[derive(Debug, Clone, Copy)]
pub struct HalfSpace {
    pub point: Vec3,
    pub normal: Vec3,
}

impl HalfSpace {
    #[inline]
    pub fn value(&self, x: Vec3) -> f32 {
        self.normal.dot(x - self.point)
    }
}

/// Sampled half-space constraints against one candidate body,
/// grouped by the dynamic vertex they act on.
#[derive(Debug, Clone, Default)]
pub struct HalfSpaceSet {
    pub constraints: Vec<(u32, Vec<HalfSpace>)>,
}

impl HalfSpaceSet {
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Projects the set once. Contacts are rigid and undamped.
    ///
    /// A vertex with no sampled constraints receives no correction
    /// (nothing to divide by); a vertex with any non-violated sample
    /// is treated as outside and also skipped.
    pub fn solve(&self, x: &mut [Vec3], pos_diff: &[Vec3], inv_mass: &[f32]) {
        let scales = SubstepScales::rigid();

        for (vertex, spaces) in &self.constraints {
            let Some(least_violated) = Self::least_violated(spaces, x[*vertex as usize]) else {
                continue;
            };

            let grads = [(*vertex, least_violated.1.normal)];
            let dl =
                projection::delta_lambda(least_violated.0, &grads, pos_diff, inv_mass, &scales);
            projection::apply_correction(dl, &grads, inv_mass, x);
        }
    }

    /// Returns the least-violated sample (largest `C` below zero) when
    /// every sample is violated, `None` otherwise.
    fn least_violated(spaces: &[HalfSpace], x: Vec3) -> Option<(f32, HalfSpace)> {
        let mut best: Option<(f32, HalfSpace)> = None;
        for hs in spaces {
            let c = hs.value(x);
            if c >= 0.0 {
                return None;
            }
            if best.map_or(true, |(bc, _)| c > bc) {
                best = Some((c, *hs));
            }
        }
        best
    }
}
