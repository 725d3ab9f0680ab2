//! Core surface mesh type with welded vertex positions.

use serde::{Deserialize, Serialize};
use velum_math::Vec3;
use velum_types::constants::WELD_EPSILON;
use velum_types::{VelumError, VelumResult};

/// A triangulated surface mesh with welded (deduplicated) positions.
///
/// Triangle indices reference the welded position array. Two triangles
/// sharing a geometric vertex always reference the same index, which is
/// what makes edge deduplication and the aggregate volume constraint
/// well defined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceMesh {
    /// Welded vertex positions.
    pub positions: Vec<Vec3>,
    /// Triangle indices, stored flat: `[t0v0, t0v1, t0v2, t1v0, ...]`.
    pub indices: Vec<u32>,
}

impl SurfaceMesh {
    /// Builds a mesh from raw positions and indices without welding.
    ///
    /// The caller asserts the positions are already unique.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Returns the number of welded vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [
            self.indices[base],
            self.indices[base + 1],
            self.indices[base + 2],
        ]
    }

    /// Builds a mesh from an unwelded triangle soup.
    ///
    /// Positions closer than the weld epsilon are merged into a single
    /// welded vertex; every triangle corner is remapped to its welded
    /// index. Returns the mesh together with the soup-to-welded index
    /// map, which collaborators need to push solver positions back to
    /// duplicated render vertices.
    pub fn weld(soup_positions: &[Vec3], soup_indices: &[u32]) -> (Self, Vec<u32>) {
        let mut positions: Vec<Vec3> = Vec::new();
        let mut remap: Vec<u32> = Vec::with_capacity(soup_positions.len());

        for &p in soup_positions {
            let found = positions
                .iter()
                .position(|&q| (p - q).length_squared() < WELD_EPSILON * WELD_EPSILON);
            match found {
                Some(idx) => remap.push(idx as u32),
                None => {
                    remap.push(positions.len() as u32);
                    positions.push(p);
                }
            }
        }

        let indices = soup_indices
            .iter()
            .map(|&i| remap[i as usize])
            .collect();

        (Self { positions, indices }, remap)
    }

    /// Applies a rigid placement: uniform/per-axis scale then translation.
    ///
    /// Bodies are placed once at creation; rest topology is captured
    /// from the transformed positions.
    pub fn transform(&mut self, scale: Vec3, translation: Vec3) {
        for p in &mut self.positions {
            *p = *p * scale + translation;
        }
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Index count divisible by 3
    /// - Triangle indices within bounds
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> VelumResult<()> {
        let n = self.positions.len();

        if self.indices.len() % 3 != 0 {
            return Err(VelumError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(VelumError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(VelumError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        Ok(())
    }

    /// Signed volume enclosed by the surface: `(1/6) Σ det(p0, p1, p2)`.
    ///
    /// Only meaningful for closed meshes with consistent winding.
    pub fn signed_volume(&self) -> f32 {
        let mut volume = 0.0;
        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            let p0 = self.positions[a as usize];
            let p1 = self.positions[b as usize];
            let p2 = self.positions[c as usize];
            volume += p0.cross(p1).dot(p2) / 6.0;
        }
        volume
    }

    /// Axis-aligned bounding box as `(min, max)`.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for &p in &self.positions {
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }
}
