//! Area-weighted vertex normals.
//!
//! Environment-collision sampling treats a candidate body's surface as a
//! set of (point, outward normal) pairs; those normals come from here.

use velum_math::Vec3;

use crate::mesh::SurfaceMesh;

/// Computes area-weighted vertex normals from the given positions.
///
/// `positions` may differ from the mesh's rest positions — the contact
/// sampler recomputes normals from a body's previous-frame committed
/// positions each frame. The cross product of two triangle edges weighs
/// each face's contribution by its area, so no per-face normalization
/// is needed before the final pass.
pub fn vertex_normals(mesh: &SurfaceMesh, positions: &[Vec3]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(t);
        let p0 = positions[a as usize];
        let p1 = positions[b as usize];
        let p2 = positions[c as usize];

        let face = (p1 - p0).cross(p2 - p0);
        normals[a as usize] += face;
        normals[b as usize] += face;
        normals[c as usize] += face;
    }

    for n in &mut normals {
        *n = n.normalize_or_zero();
    }

    normals
}
