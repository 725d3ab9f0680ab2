//! Integration tests for velum-scene.

use velum_math::{Ray, Vec3};
use velum_mesh::generators::cube;
use velum_scene::{Body, BodyKind, Scene, SceneConfig};
use velum_solver::SolverParams;
use velum_types::BodyId;

const DT: f32 = 1.0 / 60.0;

fn quiet_params() -> SolverParams {
    SolverParams {
        gravity: Vec3::ZERO,
        enable_collision: false,
        ground_level: -1.0e3,
        barrier_half_extent: 1.0e3,
        ..SolverParams::default()
    }
}

fn cube_body(name: &str, kind: BodyKind, offset: Vec3) -> Body {
    let mut mesh = cube(0.5);
    mesh.transform(Vec3::ONE, offset);
    Body::new(name, kind, mesh, 1.0).unwrap()
}

// ─── Configuration Tests ──────────────────────────────────────

const DEMO_SCENE: &str = r#"
name = "demo"

[params]
substeps = 8
alpha = 0.002

[[bodies]]
name = "ball"
mesh = "sphere"
position = [0.0, 2.0, 0.0]

[[bodies]]
name = "floor"
mesh = "ground"
is_static = true
"#;

#[test]
fn scene_config_parses_with_defaults() {
    let config = SceneConfig::from_toml_str(DEMO_SCENE).unwrap();
    assert_eq!(config.name, "demo");
    assert_eq!(config.params.substeps, 8);
    // Unlisted params keep their defaults.
    assert_eq!(config.params.beta, SolverParams::default().beta);

    assert_eq!(config.bodies.len(), 2);
    assert_eq!(config.bodies[0].mesh, "sphere");
    assert!((config.bodies[0].position.y - 2.0).abs() < 1.0e-6);
    assert_eq!(config.bodies[0].scale, 1.0);
    assert!(config.bodies[1].is_static);
}

#[test]
fn scene_config_rejects_malformed_toml() {
    assert!(SceneConfig::from_toml_str("name = [").is_err());
}

#[test]
fn unknown_mesh_reference_drops_only_that_body() {
    let text = r#"
name = "partial"

[[bodies]]
name = "ball"
mesh = "sphere"

[[bodies]]
name = "ghost"
mesh = "torus"

[[bodies]]
name = "floor"
mesh = "ground"
is_static = true
"#;
    let config = SceneConfig::from_toml_str(text).unwrap();
    let scene = Scene::from_config(&config);

    assert_eq!(scene.bodies().len(), 2);
    assert_eq!(scene.bodies()[0].name, "ball");
    assert_eq!(scene.bodies()[1].name, "floor");
}

// ─── Picking Tests ────────────────────────────────────────────

#[test]
fn pick_resolves_closest_body() {
    let mut scene = Scene::new("pick", quiet_params());
    let near = scene.add_body(cube_body("near", BodyKind::Dynamic, Vec3::ZERO));
    scene.add_body(cube_body("far", BodyKind::Dynamic, Vec3::new(0.0, 0.0, -3.0)));

    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
    let hit = scene.pick(&ray).unwrap();
    assert_eq!(hit.body, near);
    assert!((hit.t - 9.5).abs() < 1.0e-4);
}

#[test]
fn static_bodies_are_not_pickable() {
    let mut scene = Scene::new("pick", quiet_params());
    scene.add_body(cube_body("wall", BodyKind::Static, Vec3::ZERO));
    let behind = scene.add_body(cube_body("soft", BodyKind::Dynamic, Vec3::new(0.0, 0.0, -3.0)));

    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
    let hit = scene.pick(&ray).unwrap();
    assert_eq!(hit.body, behind);
}

// ─── Drag Lifecycle ───────────────────────────────────────────

#[test]
fn drag_binds_tracks_and_releases() {
    let mut scene = Scene::new("drag", SolverParams {
        alpha: 0.001,
        beta: 5.0,
        ..quiet_params()
    });
    let id = scene.add_body(cube_body("soft", BodyKind::Dynamic, Vec3::ZERO));

    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
    let hit = scene.pick(&ray).unwrap();
    scene.grab(&hit);
    assert_eq!(scene.drag_body(), Some(id));

    // Slide the pick ray sideways; the anchor follows on the plane
    // through the previous anchor facing the camera.
    let moved = Ray::new(Vec3::new(2.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
    scene.track_drag(Vec3::new(0.0, 0.0, -1.0), &moved);

    for _ in 0..60 {
        scene.step(DT);
    }

    let com = scene.body(id).unwrap().center_of_mass();
    assert!(com.x > 0.2, "body should follow the anchor, com = {com}");

    scene.release_drag();
    assert_eq!(scene.drag_body(), None);

    let before = scene.body(id).unwrap().state.positions.clone();
    scene.release_drag(); // releasing twice is a no-op
    assert_eq!(scene.body(id).unwrap().state.positions, before);
}

// ─── Frame Dispatch ───────────────────────────────────────────

#[test]
fn task_failure_does_not_abort_siblings() {
    let mut scene = Scene::new("isolation", quiet_params());
    scene.params_mut().gravity = Vec3::new(0.0, -9.81, 0.0);

    let broken = scene.add_body(cube_body("broken", BodyKind::Dynamic, Vec3::ZERO));
    let healthy = scene.add_body(cube_body("healthy", BodyKind::Dynamic, Vec3::new(3.0, 2.0, 0.0)));

    // Desynchronize the broken body's state arrays.
    scene.body_mut(broken).unwrap().state.velocities.pop();

    let y_before = scene.body(healthy).unwrap().center_of_mass().y;
    let failures = scene.step(DT);

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, broken);

    let y_after = scene.body(healthy).unwrap().center_of_mass().y;
    assert!(y_after < y_before, "healthy body should keep falling");
}

#[test]
fn static_bodies_never_move() {
    let mut scene = Scene::new("statics", quiet_params());
    scene.params_mut().gravity = Vec3::new(0.0, -9.81, 0.0);
    let id = scene.add_body(cube_body("anchor", BodyKind::Static, Vec3::new(0.0, 5.0, 0.0)));

    for _ in 0..10 {
        scene.step(DT);
    }

    let com = scene.body(id).unwrap().center_of_mass();
    assert!((com.y - 5.0).abs() < 1.0e-6);
}

#[test]
fn energies_are_reported_for_compliant_bodies() {
    let mut scene = Scene::new("energy", quiet_params());
    scene.params_mut().gravity = Vec3::new(0.0, -9.81, 0.0);
    let id = scene.add_body(cube_body("soft", BodyKind::Dynamic, Vec3::new(0.0, 2.0, 0.0)));

    scene.step(DT);

    let body = scene.body(id).unwrap();
    assert!(body.distance_energy().is_some());
    assert!(body.volume_energy().is_some());
}

#[test]
fn reset_restores_rest_state() {
    let mut scene = Scene::new("reset", quiet_params());
    scene.params_mut().gravity = Vec3::new(0.0, -9.81, 0.0);
    let id = scene.add_body(cube_body("soft", BodyKind::Dynamic, Vec3::new(0.0, 2.0, 0.0)));

    let rest = scene.body(id).unwrap().state.positions.clone();
    for _ in 0..30 {
        scene.step(DT);
    }
    assert_ne!(scene.body(id).unwrap().state.positions, rest);

    scene.reset();
    assert_eq!(scene.body(id).unwrap().state.positions, rest);
    assert!(scene
        .body(id)
        .unwrap()
        .state
        .velocities
        .iter()
        .all(|v| *v == Vec3::ZERO));
}

#[test]
fn sphere_rests_on_static_ground() {
    let config_text = r#"
name = "drop"

[params]
ground_level = -50.0

[[bodies]]
name = "ball"
mesh = "sphere"
position = [0.0, 1.5, 0.0]

[[bodies]]
name = "floor"
mesh = "ground"
is_static = true
"#;
    let config = SceneConfig::from_toml_str(config_text).unwrap();
    let mut scene = Scene::from_config(&config);

    for _ in 0..240 {
        scene.step(DT);
    }

    let ball = scene.body(BodyId(0)).unwrap();
    for p in &ball.state.positions {
        assert!(
            p.y > -0.1,
            "vertex {p} should be held up by collision samples"
        );
    }
}
