//! Candidate-surface sampling for environment collision.
//!
//! The candidate surface is sampled at the first corner of each of its
//! triangles, paired with that vertex's area-weighted normal. Every
//! dynamic vertex tests against the full sample list, so a vertex is
//! judged "inside" only when it sits behind every sampled tangent
//! plane. Sampling density is the candidate's triangle count; shallow
//! contacts between samples can be missed.

use velum_math::Vec3;
use velum_mesh::{vertex_normals, SurfaceMesh};
use velum_solver::{HalfSpace, HalfSpaceSet};

/// Samples one candidate body's surface for one dynamic body.
///
/// Topology (which vertices test, which candidate corners are sampled)
/// is fixed at construction; positions and normals are re-sampled each
/// frame from the candidate's previous committed state.
#[derive(Debug, Clone)]
pub struct ContactSampler {
    /// Dynamic body's welded vertices.
    vertices: Vec<u32>,

    /// First corner of each candidate triangle.
    sample_corners: Vec<u32>,
}

impl ContactSampler {
    pub fn new(dynamic_mesh: &SurfaceMesh, candidate_mesh: &SurfaceMesh) -> Self {
        let vertices = (0..dynamic_mesh.vertex_count() as u32).collect();
        let sample_corners = (0..candidate_mesh.triangle_count())
            .map(|t| candidate_mesh.triangle(t)[0])
            .collect();
        Self {
            vertices,
            sample_corners,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.sample_corners.len()
    }

    /// Builds this frame's half-space set from the candidate's
    /// committed positions.
    pub fn sample(
        &self,
        candidate_mesh: &SurfaceMesh,
        candidate_positions: &[Vec3],
    ) -> HalfSpaceSet {
        let normals = vertex_normals(candidate_mesh, candidate_positions);

        let spaces: Vec<HalfSpace> = self
            .sample_corners
            .iter()
            .map(|&corner| HalfSpace {
                point: candidate_positions[corner as usize],
                normal: normals[corner as usize],
            })
            .collect();

        HalfSpaceSet {
            constraints: self
                .vertices
                .iter()
                .map(|&v| (v, spaces.clone()))
                .collect(),
        }
    }
}
