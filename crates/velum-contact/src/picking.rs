//! Ray picking against a body's triangle set.

use velum_math::{intersect_triangle, Ray, Vec3};
use velum_mesh::SurfaceMesh;
use velum_types::TriangleId;

/// The closest ray hit on one body's surface.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    pub triangle_index: TriangleId,
    pub triangle: [u32; 3],
    pub point: Vec3,
    pub t: f32,
}

/// Tests the ray against every triangle and keeps the closest hit.
///
/// `positions` are the body's current (deformed) vertex positions;
/// the mesh supplies only topology.
pub fn pick_surface(ray: &Ray, mesh: &SurfaceMesh, positions: &[Vec3]) -> Option<SurfaceHit> {
    let mut best: Option<SurfaceHit> = None;

    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(t);
        let hit = intersect_triangle(
            ray,
            positions[a as usize],
            positions[b as usize],
            positions[c as usize],
        );

        if let Some(hit) = hit {
            if best.map_or(true, |prev| hit.t < prev.t) {
                best = Some(SurfaceHit {
                    triangle_index: TriangleId(t as u32),
                    triangle: [a, b, c],
                    point: hit.point,
                    t: hit.t,
                });
            }
        }
    }

    best
}
