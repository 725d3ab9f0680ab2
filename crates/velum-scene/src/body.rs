//! Simulation bodies.

use velum_math::Vec3;
use velum_mesh::{SurfaceMesh, Topology};
use velum_solver::integrator::{BodyConstraints, StepDiagnostics};
use velum_solver::state::VertexState;
use velum_types::VelumResult;

/// Whether a body participates in the solve or only serves as a
/// collision candidate and pick target for others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Never stepped; vertices stay at rest. Ground planes, walls.
    Static,
    /// Stepped every frame by its own solver task.
    Dynamic,
}

/// One body in the scene arena.
///
/// Topology, constraints, and the rest-state snapshot are built once
/// at creation and immutable thereafter; `state` is mutated by exactly
/// one frame task at a time.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub kind: BodyKind,
    pub mesh: SurfaceMesh,
    pub topology: Topology,
    pub constraints: BodyConstraints,
    pub state: VertexState,

    /// Diagnostics from the most recent frame.
    pub diagnostics: StepDiagnostics,

    rest_state: VertexState,
}

impl Body {
    /// Validates the mesh and builds topology, constraints, and rest
    /// state with a uniform per-vertex mass.
    pub fn new(name: impl Into<String>, kind: BodyKind, mesh: SurfaceMesh, mass: f32) -> VelumResult<Self> {
        mesh.validate()?;
        let topology = Topology::build(&mesh);
        let constraints = BodyConstraints::build(&mesh, &topology);
        let state = VertexState::from_mesh(&mesh, mass)?;
        let rest_state = state.clone();

        Ok(Self {
            name: name.into(),
            kind,
            mesh,
            topology,
            constraints,
            state,
            diagnostics: StepDiagnostics::default(),
            rest_state,
        })
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.kind == BodyKind::Static
    }

    /// Restores rest positions and zero velocities.
    pub fn reset(&mut self) {
        self.state.reset_from(&self.rest_state);
        self.diagnostics = StepDiagnostics::default();
    }

    /// Mass-weighted mean of the current vertex positions.
    pub fn center_of_mass(&self) -> Vec3 {
        self.state.center_of_mass()
    }

    /// Last frame's distance-constraint energy, if it was computed.
    #[inline]
    pub fn distance_energy(&self) -> Option<f32> {
        self.diagnostics.distance_energy
    }

    /// Last frame's volume-constraint energy, if it was computed.
    #[inline]
    pub fn volume_energy(&self) -> Option<f32> {
        self.diagnostics.volume_energy
    }
}
