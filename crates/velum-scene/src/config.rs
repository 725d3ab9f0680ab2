//! TOML scene configuration.
//!
//! A scene file names its bodies by mesh reference (`"cube"`,
//! `"sphere"`, `"ground"`). A body whose reference does not resolve is
//! dropped with an error log; the rest of the scene still loads.

use std::path::Path;

use serde::{Deserialize, Serialize};
use velum_math::Vec3;
use velum_mesh::generators::{cube, quad_grid, uv_sphere};
use velum_mesh::SurfaceMesh;
use velum_solver::SolverParams;
use velum_types::{VelumError, VelumResult};

/// Top-level scene description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub name: String,

    #[serde(default)]
    pub params: SolverParams,

    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

/// One body entry in a scene file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyConfig {
    pub name: String,

    /// Mesh reference: `"cube"`, `"sphere"`, or `"ground"`.
    pub mesh: String,

    #[serde(default)]
    pub position: Vec3,

    #[serde(default = "default_scale")]
    pub scale: f32,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default = "default_mass")]
    pub mass: f32,
}

fn default_scale() -> f32 {
    1.0
}

fn default_mass() -> f32 {
    1.0
}

impl SceneConfig {
    /// Parses a scene from TOML text.
    pub fn from_toml_str(text: &str) -> VelumResult<Self> {
        toml::from_str(text).map_err(|e| VelumError::Parse(e.to_string()))
    }

    /// Reads and parses a scene file.
    pub fn from_path(path: impl AsRef<Path>) -> VelumResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

impl BodyConfig {
    /// Resolves the mesh reference and applies the body's placement.
    pub fn build_mesh(&self) -> VelumResult<SurfaceMesh> {
        let mut mesh = match self.mesh.as_str() {
            "cube" => cube(0.5),
            "sphere" => uv_sphere(0.5, 12, 16),
            "ground" => quad_grid(10, 10, 60.0, 60.0),
            other => {
                return Err(VelumError::InvalidBody {
                    name: self.name.clone(),
                    reason: format!("unknown mesh reference '{other}'"),
                })
            }
        };

        mesh.transform(Vec3::splat(self.scale), self.position);
        Ok(mesh)
    }
}
