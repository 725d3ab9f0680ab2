//! Substep integrator.
//!
//! Per body, per frame: `n` substeps of duration `h = dt/n`, each
//! predicting positions from velocities, projecting the enabled
//! constraint families in order (drag, distance, volume, collision),
//! and writing velocities back from the corrected positions. Ground
//! and barrier clamps run once per frame after the last substep.

use tracing::error;
use velum_math::Vec3;
use velum_mesh::{SurfaceMesh, Topology};
use velum_types::{VelumError, VelumResult};

use crate::collision::HalfSpaceSet;
use crate::config::SolverParams;
use crate::distance::{self, DistanceConstraint};
use crate::drag::DragConstraint;
use crate::projection::SubstepScales;
use crate::state::VertexState;
use crate::volume::VolumeConstraint;

/// Immutable constraint topology of one body, built once at creation.
#[derive(Debug, Clone)]
pub struct BodyConstraints {
    pub distance: Vec<DistanceConstraint>,

    /// Present only for closed meshes with positive rest volume.
    pub volume: Option<VolumeConstraint>,
}

impl BodyConstraints {
    /// Builds edge constraints from the topology and, if the surface
    /// is closed, the aggregate volume constraint.
    pub fn build(mesh: &SurfaceMesh, topology: &Topology) -> Self {
        let distance = topology.edges.iter().map(DistanceConstraint::from_edge).collect();
        let volume = if topology.is_closed() {
            VolumeConstraint::from_mesh(mesh).ok()
        } else {
            None
        };
        Self { distance, volume }
    }
}

/// Per-frame diagnostics reported back to the scene.
///
/// Energies are the last substep's values; `None` when the family is
/// disabled, skipped, or rigid (`alpha = 0`).
#[derive(Debug, Clone, Copy, Default)]
pub struct StepDiagnostics {
    pub distance_energy: Option<f32>,
    pub volume_energy: Option<f32>,

    /// Families skipped this frame because their vertex indices were
    /// out of range for the body's state.
    pub distance_skipped: bool,
    pub volume_skipped: bool,
}

/// Advances one body by one frame of duration `dt`.
///
/// `collision` carries one sampled half-space set per candidate body;
/// `drag` is present only when this body owns the active mouse drag.
/// A family whose constraints reference out-of-range vertices is
/// logged and skipped for the frame; the body keeps simulating with
/// the remaining families.
pub fn step_frame(
    state: &mut VertexState,
    constraints: &BodyConstraints,
    collision: &[HalfSpaceSet],
    drag: Option<&DragConstraint>,
    params: &SolverParams,
    dt: f32,
) -> VelumResult<StepDiagnostics> {
    params.validate()?;
    if !(dt.is_finite() && dt > 0.0) {
        return Err(VelumError::InvalidConfig(format!(
            "frame duration must be finite and positive, got {dt}"
        )));
    }

    let n = state.vertex_count();
    if state.velocities.len() != n
        || state.accelerations.len() != n
        || state.inv_masses.len() != n
    {
        return Err(VelumError::ConstraintMismatch(format!(
            "state arrays disagree: {} positions, {} velocities, {} accelerations, {} inverse masses",
            n,
            state.velocities.len(),
            state.accelerations.len(),
            state.inv_masses.len()
        )));
    }

    let h = dt / params.substeps as f32;

    let mut diag = StepDiagnostics {
        distance_skipped: !distance_indices_valid(&constraints.distance, n),
        volume_skipped: constraints
            .volume
            .as_ref()
            .map_or(false, |vc| !volume_indices_valid(vc, n)),
        ..StepDiagnostics::default()
    };

    let collision_valid: Vec<bool> = collision
        .iter()
        .map(|set| collision_indices_valid(set, n))
        .collect();

    let compliant = SubstepScales::new(params.alpha, params.beta, h);

    for a in &mut state.accelerations {
        *a = params.gravity;
    }

    let mut x = vec![Vec3::ZERO; n];
    let mut pos_diff = vec![Vec3::ZERO; n];
    let mut grad_scratch = vec![Vec3::ZERO; n];

    for _ in 0..params.substeps {
        // Predict from the previous substep's committed state.
        for i in 0..n {
            let v = state.velocities[i] + h * state.accelerations[i];
            x[i] = state.positions[i] + h * v;
            pos_diff[i] = x[i] - state.positions[i];
        }

        if let Some(drag) = drag {
            drag.solve(&mut x, &pos_diff, &state.inv_masses, h);
        }

        if params.enable_distance && !diag.distance_skipped {
            distance::solve(
                &constraints.distance,
                &mut x,
                &state.positions,
                &pos_diff,
                &state.inv_masses,
                &compliant,
            );
            diag.distance_energy = distance::energy(&constraints.distance, &x, params.alpha);
        }

        if params.enable_volume && !diag.volume_skipped {
            if let Some(vc) = &constraints.volume {
                vc.solve(
                    &mut x,
                    &pos_diff,
                    &state.inv_masses,
                    &compliant,
                    params.pressure,
                    &mut grad_scratch,
                );
                diag.volume_energy = vc.energy(&x, params.pressure, params.alpha);
            }
        }

        if params.enable_collision {
            for (set, valid) in collision.iter().zip(collision_valid.iter()) {
                if *valid {
                    set.solve(&mut x, &pos_diff, &state.inv_masses);
                }
            }
        }

        // Write back: velocity from total position change over the substep.
        for i in 0..n {
            state.velocities[i] = (x[i] - state.positions[i]) / h;
            state.positions[i] = x[i];
        }
    }

    state.clamp_ground(params.ground_level);
    state.clamp_barrier(params.barrier_half_extent);

    Ok(diag)
}

fn distance_indices_valid(constraints: &[DistanceConstraint], n: usize) -> bool {
    let bad = constraints
        .iter()
        .any(|c| c.v0 as usize >= n || c.v1 as usize >= n);
    if bad {
        error!(
            vertex_count = n,
            "distance constraints reference out-of-range vertices; family skipped this frame"
        );
    }
    !bad
}

fn volume_indices_valid(constraint: &VolumeConstraint, n: usize) -> bool {
    let bad = constraint.max_vertex_index().map_or(false, |max| max as usize >= n);
    if bad {
        error!(
            vertex_count = n,
            "volume constraint references out-of-range vertices; family skipped this frame"
        );
    }
    !bad
}

fn collision_indices_valid(set: &HalfSpaceSet, n: usize) -> bool {
    let bad = set.constraints.iter().any(|(v, _)| *v as usize >= n);
    if bad {
        error!(
            vertex_count = n,
            "collision samples reference out-of-range vertices; candidate skipped this frame"
        );
    }
    !bad
}
