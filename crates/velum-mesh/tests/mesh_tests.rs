//! Integration tests for velum-mesh.

use velum_math::Vec3;
use velum_mesh::generators::{cube, quad_grid, uv_sphere};
use velum_mesh::{vertex_normals, SurfaceMesh, Topology};

// ─── Welding Tests ────────────────────────────────────────────

#[test]
fn weld_merges_duplicate_positions() {
    // Two triangles sharing an edge, given as an unwelded soup of 6 corners.
    let soup = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0), // duplicate of 1
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0), // duplicate of 2
    ];
    let indices: Vec<u32> = (0..6).collect();

    let (mesh, remap) = SurfaceMesh::weld(&soup, &indices);

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(remap[3], remap[1]);
    assert_eq!(remap[5], remap[2]);
    mesh.validate().unwrap();
}

#[test]
fn weld_preserves_unique_positions() {
    let soup = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let (mesh, remap) = SurfaceMesh::weld(&soup, &[0, 1, 2]);
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(remap, vec![0, 1, 2]);
}

// ─── Validation Tests ─────────────────────────────────────────

#[test]
fn validate_rejects_out_of_range_index() {
    let mesh = SurfaceMesh::new(
        vec![Vec3::ZERO, Vec3::X, Vec3::Y],
        vec![0, 1, 5],
    );
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_rejects_degenerate_triangle() {
    let mesh = SurfaceMesh::new(
        vec![Vec3::ZERO, Vec3::X, Vec3::Y],
        vec![0, 1, 1],
    );
    assert!(mesh.validate().is_err());
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn cube_counts_and_closure() {
    let mesh = cube(0.5);
    mesh.validate().unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);

    let topo = Topology::build(&mesh);
    assert_eq!(topo.edges.len(), 18);
    assert!(topo.is_closed());
}

#[test]
fn cube_signed_volume() {
    let mesh = cube(0.5);
    // Unit cube volume = 1.
    assert!((mesh.signed_volume() - 1.0).abs() < 1e-5);
}

#[test]
fn sphere_is_closed_and_welded() {
    let mesh = uv_sphere(1.0, 6, 8);
    mesh.validate().unwrap();
    assert_eq!(mesh.vertex_count(), 2 + 5 * 8);

    let topo = Topology::build(&mesh);
    assert!(topo.is_closed());
}

#[test]
fn sphere_volume_approaches_analytic() {
    let mesh = uv_sphere(1.0, 24, 32);
    let analytic = 4.0 / 3.0 * std::f32::consts::PI;
    let v = mesh.signed_volume();
    assert!(v > 0.0, "winding should give positive volume, got {v}");
    // Coarse tessellation underestimates; 5% is plenty at this resolution.
    assert!(
        (v - analytic).abs() / analytic < 0.05,
        "volume {v} too far from analytic {analytic}"
    );
}

#[test]
fn quad_grid_is_open() {
    let mesh = quad_grid(4, 4, 2.0, 2.0);
    mesh.validate().unwrap();
    assert_eq!(mesh.vertex_count(), 25);
    assert_eq!(mesh.triangle_count(), 32);

    let topo = Topology::build(&mesh);
    assert!(!topo.is_closed());
    assert!(topo.boundary_edge_count() > 0);
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn edges_are_deduplicated_with_rest_lengths() {
    // Two triangles sharing edge (1, 2): 5 unique edges, not 6.
    let mesh = SurfaceMesh::new(
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ],
        vec![0, 1, 2, 1, 3, 2],
    );
    let topo = Topology::build(&mesh);
    assert_eq!(topo.edges.len(), 5);

    for edge in &topo.edges {
        let expected = (mesh.positions[edge.v0 as usize] - mesh.positions[edge.v1 as usize])
            .length();
        assert!((edge.rest_length - expected).abs() < 1e-6);
    }
}

#[test]
fn topology_order_is_deterministic() {
    let mesh = uv_sphere(1.0, 4, 6);
    let a = Topology::build(&mesh);
    let b = Topology::build(&mesh);
    assert_eq!(a.edges.len(), b.edges.len());
    for (ea, eb) in a.edges.iter().zip(b.edges.iter()) {
        assert_eq!((ea.v0, ea.v1), (eb.v0, eb.v1));
    }
}

// ─── Transform Tests ──────────────────────────────────────────

#[test]
fn transform_scales_then_translates() {
    let mut mesh = cube(0.5);
    mesh.transform(Vec3::splat(2.0), Vec3::new(0.0, 5.0, 0.0));

    let (min, max) = mesh.bounding_box();
    assert!((min - Vec3::new(-1.0, 4.0, -1.0)).length() < 1e-5);
    assert!((max - Vec3::new(1.0, 6.0, 1.0)).length() < 1e-5);
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn cube_normals_point_outward() {
    let mesh = cube(0.5);
    let normals = vertex_normals(&mesh, &mesh.positions);

    for (p, n) in mesh.positions.iter().zip(normals.iter()) {
        // For a cube centered at the origin, every vertex normal must
        // point away from the center.
        assert!(p.dot(*n) > 0.0, "normal {n} not outward at {p}");
        assert!((n.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn sphere_normals_are_radial() {
    let mesh = uv_sphere(1.0, 12, 16);
    let normals = vertex_normals(&mesh, &mesh.positions);

    for (p, n) in mesh.positions.iter().zip(normals.iter()) {
        let radial = p.normalize();
        assert!(
            radial.dot(*n) > 0.9,
            "normal {n} deviates from radial {radial}"
        );
    }
}

#[test]
fn mesh_serde_roundtrip() {
    let mesh = cube(0.5);
    let json = serde_json::to_string(&mesh).unwrap();
    let back: SurfaceMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(back.vertex_count(), mesh.vertex_count());
    assert_eq!(back.indices, mesh.indices);
}
