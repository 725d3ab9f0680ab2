//! Integration tests for velum-contact.

use velum_math::{Ray, Vec3};
use velum_mesh::generators::{cube, quad_grid, uv_sphere};
use velum_mesh::SurfaceMesh;
use velum_contact::{pick_surface, ContactSampler};

// ─── Picking Tests ────────────────────────────────────────────

#[test]
fn pick_hits_reference_triangle() {
    let mesh = SurfaceMesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1, 2]);
    let ray = Ray::new(Vec3::new(0.25, 0.25, 5.0), Vec3::new(0.0, 0.0, -1.0));

    let hit = pick_surface(&ray, &mesh, &mesh.positions).unwrap();
    assert!((hit.point - Vec3::new(0.25, 0.25, 0.0)).length() < 1.0e-5);
    assert!((hit.t - 5.0).abs() < 1.0e-5);
    assert_eq!(hit.triangle, [0, 1, 2]);
}

#[test]
fn pick_misses_outside_triangle() {
    let mesh = SurfaceMesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1, 2]);
    let ray = Ray::new(Vec3::new(2.0, 2.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
    assert!(pick_surface(&ray, &mesh, &mesh.positions).is_none());
}

#[test]
fn pick_keeps_the_closest_hit() {
    // A ray through the center of a cube crosses the near and far face.
    let mesh = cube(0.5);
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

    let hit = pick_surface(&ray, &mesh, &mesh.positions).unwrap();
    assert!((hit.t - 4.5).abs() < 1.0e-4, "expected near face, t = {}", hit.t);
    assert!((hit.point.z - 0.5).abs() < 1.0e-4);
}

#[test]
fn pick_uses_deformed_positions() {
    let mesh = cube(0.5);
    // Push the whole body down; topology is unchanged.
    let moved: Vec<Vec3> = mesh
        .positions
        .iter()
        .map(|p| *p + Vec3::new(0.0, -10.0, 0.0))
        .collect();

    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
    assert!(pick_surface(&ray, &mesh, &moved).is_none());

    let ray = Ray::new(Vec3::new(0.0, -10.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
    assert!(pick_surface(&ray, &mesh, &moved).is_some());
}

// ─── Sampling Tests ───────────────────────────────────────────

#[test]
fn sampler_takes_one_sample_per_candidate_triangle() {
    let body = uv_sphere(0.5, 4, 6);
    let ground = quad_grid(2, 2, 10.0, 10.0);

    let sampler = ContactSampler::new(&body, &ground);
    assert_eq!(sampler.sample_count(), ground.triangle_count());

    let set = sampler.sample(&ground, &ground.positions);
    assert_eq!(set.constraints.len(), body.vertex_count());
    for (_, spaces) in &set.constraints {
        assert_eq!(spaces.len(), ground.triangle_count());
    }
}

#[test]
fn samples_track_candidate_positions() {
    let body = cube(0.5);
    let ground = quad_grid(1, 1, 4.0, 4.0);
    let sampler = ContactSampler::new(&body, &ground);

    let lifted: Vec<Vec3> = ground
        .positions
        .iter()
        .map(|p| *p + Vec3::new(0.0, 2.0, 0.0))
        .collect();
    let set = sampler.sample(&ground, &lifted);

    for (_, spaces) in &set.constraints {
        for hs in spaces {
            assert!((hs.point.y - 2.0).abs() < 1.0e-6);
            // The grid faces +Y regardless of height.
            assert!(hs.normal.y > 0.99);
        }
    }
}

#[test]
fn sphere_above_ground_violates_no_sample() {
    let body = uv_sphere(0.5, 4, 6);
    let ground = quad_grid(2, 2, 10.0, 10.0);
    let sampler = ContactSampler::new(&body, &ground);
    let set = sampler.sample(&ground, &ground.positions);

    // Lift the sphere well clear of the plane: every sample's C > 0.
    let positions: Vec<Vec3> = body
        .positions
        .iter()
        .map(|p| *p + Vec3::new(0.0, 3.0, 0.0))
        .collect();

    for (v, spaces) in &set.constraints {
        for hs in spaces {
            assert!(hs.value(positions[*v as usize]) > 0.0);
        }
    }
}
