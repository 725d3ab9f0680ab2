//! CLI command implementations.

use tracing::info;
use velum_scene::{Scene, SceneConfig};
use velum_types::constants::DEFAULT_DT;
use velum_types::VelumResult;

/// Run a headless simulation and report per-body results.
pub fn simulate(config_path: &str, frames: u32) -> VelumResult<()> {
    let config = SceneConfig::from_path(config_path)?;
    let mut scene = Scene::from_config(&config);
    info!(frames, "starting headless run");

    println!("Velum Simulation");
    println!("────────────────");
    println!("Scene:  {}", scene.name());
    println!("Bodies: {}", scene.bodies().len());
    println!("Frames: {frames}");
    println!();

    let mut failed_tasks = 0usize;
    for _ in 0..frames {
        failed_tasks += scene.step(DEFAULT_DT).len();
    }

    for body in scene.bodies() {
        let com = body.center_of_mass();
        println!(
            "{:<16} com = ({:>8.3}, {:>8.3}, {:>8.3})  E_dist = {}  E_vol = {}",
            body.name,
            com.x,
            com.y,
            com.z,
            format_energy(body.distance_energy()),
            format_energy(body.volume_energy()),
        );
    }

    if failed_tasks > 0 {
        println!();
        println!("{failed_tasks} body task(s) failed; see log for details.");
    }
    Ok(())
}

/// Validate a scene config: parse, resolve meshes, check parameters.
pub fn validate(path: &str) -> VelumResult<()> {
    let config = SceneConfig::from_path(path)?;
    config.params.validate()?;

    println!("Scene '{}':", config.name);
    let mut dropped = 0usize;
    for body in &config.bodies {
        match body.build_mesh() {
            Ok(mesh) => {
                let mut issues = Vec::new();
                if let Err(e) = mesh.validate() {
                    issues.push(e.to_string());
                }
                if !(body.mass.is_finite() && body.mass > 0.0) {
                    issues.push(format!("mass {} is not positive", body.mass));
                }

                if issues.is_empty() {
                    println!(
                        "  {:<16} ok  ({} verts, {} tris)",
                        body.name,
                        mesh.vertex_count(),
                        mesh.triangle_count()
                    );
                } else {
                    dropped += 1;
                    println!("  {:<16} INVALID: {}", body.name, issues.join("; "));
                }
            }
            Err(e) => {
                dropped += 1;
                println!("  {:<16} INVALID: {e}", body.name);
            }
        }
    }

    if dropped > 0 {
        println!("{dropped} body(ies) would be dropped at load time.");
    } else {
        println!("All bodies valid.");
    }
    Ok(())
}

fn format_energy(e: Option<f32>) -> String {
    match e {
        Some(v) => format!("{v:.4}"),
        None => "-".to_string(),
    }
}
