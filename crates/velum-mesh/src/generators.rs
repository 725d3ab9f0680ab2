//! Procedural mesh generators for tests and headless scenarios.
//!
//! All generators produce deterministic, already-welded meshes with
//! outward (counter-clockwise) winding, so `signed_volume` is positive
//! for the closed shapes.

use velum_math::Vec3;

use crate::mesh::SurfaceMesh;

/// Generates an axis-aligned cube centered at the origin.
///
/// 8 welded vertices, 12 triangles, closed.
///
/// # Example
/// ```
/// use velum_mesh::generators::cube;
/// let mesh = cube(0.5);
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn cube(half_extent: f32) -> SurfaceMesh {
    let h = half_extent;
    let positions = vec![
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ];

    #[rustfmt::skip]
    let indices = vec![
        4, 5, 6, 4, 6, 7, // +Z
        1, 0, 3, 1, 3, 2, // -Z
        0, 4, 7, 0, 7, 3, // -X
        5, 1, 2, 5, 2, 6, // +X
        3, 7, 6, 3, 6, 2, // +Y
        0, 1, 5, 0, 5, 4, // -Y
    ];

    SurfaceMesh::new(positions, indices)
}

/// Generates a welded UV sphere centered at the origin.
///
/// Single vertices at the poles and merged seams, so the result is
/// closed: `2 + (stacks - 1) * slices` vertices.
///
/// # Arguments
/// - `radius` — Sphere radius in meters.
/// - `stacks` — Latitude divisions (>= 2).
/// - `slices` — Longitude divisions (>= 3).
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> SurfaceMesh {
    assert!(stacks >= 2 && slices >= 3, "degenerate sphere resolution");

    let mut positions = Vec::with_capacity(2 + (stacks - 1) * slices);
    positions.push(Vec3::new(0.0, radius, 0.0)); // North pole

    for i in 1..stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for j in 0..slices {
            let theta = 2.0 * std::f32::consts::PI * j as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            positions.push(Vec3::new(
                radius * sin_phi * cos_theta,
                radius * cos_phi,
                radius * sin_phi * sin_theta,
            ));
        }
    }

    let south = positions.len() as u32;
    positions.push(Vec3::new(0.0, -radius, 0.0));

    // Ring vertex index helper: ring 0 is the first ring below the pole.
    let ring = |i: usize, j: usize| -> u32 { (1 + i * slices + j % slices) as u32 };

    let mut indices = Vec::with_capacity((stacks * slices * 2 - 2 * slices + 2 * slices) * 3);

    // Top fan
    for j in 0..slices {
        indices.extend_from_slice(&[0, ring(0, j + 1), ring(0, j)]);
    }

    // Middle quads
    for i in 0..stacks.saturating_sub(2) {
        for j in 0..slices {
            let u0 = ring(i, j);
            let u1 = ring(i, j + 1);
            let l0 = ring(i + 1, j);
            let l1 = ring(i + 1, j + 1);
            indices.extend_from_slice(&[u0, u1, l1]);
            indices.extend_from_slice(&[u0, l1, l0]);
        }
    }

    // Bottom fan
    for j in 0..slices {
        indices.extend_from_slice(&[south, ring(stacks - 2, j), ring(stacks - 2, j + 1)]);
    }

    SurfaceMesh::new(positions, indices)
}

/// Generates a flat rectangular grid in the XZ plane, facing +Y.
///
/// Used for static ground bodies; not closed.
///
/// # Arguments
/// - `cols` — Number of quads along X (vertex count = cols + 1).
/// - `rows` — Number of quads along Z (vertex count = rows + 1).
/// - `width` — Total extent in X.
/// - `depth` — Total extent in Z.
pub fn quad_grid(cols: usize, rows: usize, width: f32, depth: f32) -> SurfaceMesh {
    let verts_x = cols + 1;
    let verts_z = rows + 1;

    let mut positions = Vec::with_capacity(verts_x * verts_z);
    for j in 0..verts_z {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;
            positions.push(Vec3::new(
                -width / 2.0 + u * width,
                0.0,
                -depth / 2.0 + v * depth,
            ));
        }
    }

    let mut indices = Vec::with_capacity(cols * rows * 6);
    for j in 0..rows {
        for i in 0..cols {
            let tl = (j * verts_x + i) as u32;
            let tr = tl + 1;
            let bl = tl + verts_x as u32;
            let br = bl + 1;

            indices.extend_from_slice(&[tl, bl, tr]);
            indices.extend_from_slice(&[tr, bl, br]);
        }
    }

    SurfaceMesh::new(positions, indices)
}
