//! Scene orchestration.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{error, info};
use velum_contact::{pick_surface, ContactSampler};
use velum_math::{Ray, Vec3};
use velum_solver::collision::HalfSpaceSet;
use velum_solver::drag::DragConstraint;
use velum_solver::integrator::{step_frame, StepDiagnostics};
use velum_solver::SolverParams;
use velum_telemetry::events::{ConstraintFamily, EventKind};
use velum_telemetry::{EventBus, SimulationEvent, TracingSink};
use velum_types::{BodyId, TriangleId, VelumError, VelumResult};

use crate::body::Body;
use crate::config::SceneConfig;

/// A resolved pick: the closest ray/triangle hit across all dynamic
/// bodies.
#[derive(Debug, Clone, Copy)]
pub struct PickResult {
    pub body: BodyId,
    pub triangle_index: TriangleId,
    pub triangle: [u32; 3],
    pub point: Vec3,
    pub t: f32,
}

/// The active mouse drag and the body it is bound to.
#[derive(Debug, Clone, Copy)]
struct DragBinding {
    body: BodyId,
    constraint: DragConstraint,
}

/// Scene-owned body arena plus per-frame dispatch.
///
/// Bodies are addressed through [`BodyId`] handles into the arena;
/// candidate lists for collision sampling stay valid exactly as long
/// as the scene lives.
pub struct Scene {
    name: String,
    bodies: Vec<Body>,

    /// Per body: (candidate body index, sampler) pairs, rebuilt when
    /// the arena changes. Static bodies have no samplers.
    samplers: Vec<Vec<(usize, ContactSampler)>>,

    params: SolverParams,
    drag: Option<DragBinding>,
    bus: EventBus,
    frame: u64,
}

impl Scene {
    pub fn new(name: impl Into<String>, params: SolverParams) -> Self {
        let mut bus = EventBus::new();
        bus.add_sink(Box::new(TracingSink::new(tracing::Level::DEBUG)));

        Self {
            name: name.into(),
            bodies: Vec::new(),
            samplers: Vec::new(),
            params,
            drag: None,
            bus,
            frame: 0,
        }
    }

    /// Builds a scene from configuration.
    ///
    /// A body whose mesh reference fails to resolve or whose data
    /// fails validation is dropped with an error log; remaining bodies
    /// still load.
    pub fn from_config(config: &SceneConfig) -> Self {
        let mut scene = Self::new(config.name.clone(), config.params.clone());

        for body_config in &config.bodies {
            let kind = if body_config.is_static {
                crate::body::BodyKind::Static
            } else {
                crate::body::BodyKind::Dynamic
            };

            let built = body_config
                .build_mesh()
                .and_then(|mesh| Body::new(&body_config.name, kind, mesh, body_config.mass));

            match built {
                Ok(body) => {
                    scene.add_body(body);
                }
                Err(e) => {
                    error!(body = %body_config.name, error = %e, "dropping body");
                    scene.bus.emit(SimulationEvent::new(
                        scene.frame,
                        EventKind::BodyDropped {
                            name: body_config.name.clone(),
                            reason: e.to_string(),
                        },
                    ));
                }
            }
        }

        info!(
            scene = %scene.name,
            bodies = scene.bodies.len(),
            "scene loaded"
        );
        scene
    }

    /// Adds a body to the arena and rebuilds collision samplers.
    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        info!(body = %body.name, id = id.0, "body created");
        self.bodies.push(body);
        self.rebuild_samplers();
        id
    }

    fn rebuild_samplers(&mut self) {
        self.samplers = self
            .bodies
            .iter()
            .enumerate()
            .map(|(i, body)| {
                if body.is_static() {
                    return Vec::new();
                }
                self.bodies
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(j, candidate)| {
                        (j, ContactSampler::new(&body.mesh, &candidate.mesh))
                    })
                    .collect()
            })
            .collect();
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.index())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[inline]
    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Mutable access to the tunables. Safe between frames only; `step`
    /// snapshots them before dispatch.
    pub fn params_mut(&mut self) -> &mut SolverParams {
        &mut self.params
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Resets every body to its rest state and releases any drag.
    pub fn reset(&mut self) {
        for body in &mut self.bodies {
            body.reset();
        }
        self.drag = None;
    }

    // ─── Picking and drag lifecycle ───────────────────────────

    /// Casts the pick ray against every dynamic body and keeps the
    /// closest hit.
    pub fn pick(&self, ray: &Ray) -> Option<PickResult> {
        let mut best: Option<PickResult> = None;

        for (i, body) in self.bodies.iter().enumerate() {
            if body.is_static() {
                continue;
            }
            if let Some(hit) = pick_surface(ray, &body.mesh, &body.state.positions) {
                if best.map_or(true, |prev| hit.t < prev.t) {
                    best = Some(PickResult {
                        body: BodyId(i as u32),
                        triangle_index: hit.triangle_index,
                        triangle: hit.triangle,
                        point: hit.point,
                        t: hit.t,
                    });
                }
            }
        }

        if let Some(hit) = best {
            self.bus.emit(SimulationEvent::new(
                self.frame,
                EventKind::PickHit {
                    body: hit.body,
                    triangle_index: hit.triangle_index,
                    point: hit.point.to_array(),
                },
            ));
        }
        best
    }

    /// Binds the mouse drag to a pick hit, replacing any existing
    /// binding.
    pub fn grab(&mut self, pick: &PickResult) {
        let Some(body) = self.bodies.get(pick.body.index()) else {
            return;
        };
        let constraint = DragConstraint::bind(pick.triangle, &body.state.positions, pick.point);
        self.drag = Some(DragBinding {
            body: pick.body,
            constraint,
        });
        self.bus.emit(SimulationEvent::new(
            self.frame,
            EventKind::DragCreated { body: pick.body },
        ));
    }

    /// Re-anchors the active drag against the current pick ray. Call
    /// once per frame, before `step`.
    pub fn track_drag(&mut self, camera_front: Vec3, ray: &Ray) {
        if let Some(binding) = &mut self.drag {
            binding.constraint.track(camera_front, ray);
        }
    }

    /// Releases the active drag. Vertex state is untouched.
    pub fn release_drag(&mut self) {
        if let Some(binding) = self.drag.take() {
            self.bus.emit(SimulationEvent::new(
                self.frame,
                EventKind::DragReleased { body: binding.body },
            ));
        }
    }

    pub fn drag_body(&self) -> Option<BodyId> {
        self.drag.map(|b| b.body)
    }

    // ─── Frame dispatch ───────────────────────────────────────

    /// Advances every dynamic body by one frame of duration `dt`.
    ///
    /// One task per body, dispatched in parallel and joined before
    /// returning. Tasks receive immutable snapshots: the tunables,
    /// half-space samples from other bodies' previous committed
    /// positions, and the drag constraint by value for its owner.
    /// Per-task failures are captured and returned; siblings always
    /// complete.
    pub fn step(&mut self, dt: f32) -> Vec<(BodyId, VelumError)> {
        let started = Instant::now();
        self.bus
            .emit(SimulationEvent::new(self.frame, EventKind::FrameBegin { dt }));

        let params = self.params.clone();
        let collision_sets = self.build_collision_sets(&params);
        let drag = self.drag.map(|b| (b.body.index(), b.constraint));

        let results: Vec<VelumResult<StepDiagnostics>> = self
            .bodies
            .par_iter_mut()
            .enumerate()
            .zip(collision_sets.par_iter())
            .map(|((i, body), sets)| {
                if body.is_static() {
                    return Ok(StepDiagnostics::default());
                }
                let owned_drag =
                    drag.and_then(|(owner, constraint)| (owner == i).then_some(constraint));
                step_frame(
                    &mut body.state,
                    &body.constraints,
                    sets,
                    owned_drag.as_ref(),
                    &params,
                    dt,
                )
            })
            .collect();

        let mut failures = Vec::new();
        for (i, result) in results.into_iter().enumerate() {
            let id = BodyId(i as u32);
            match result {
                Ok(diag) => {
                    self.bodies[i].diagnostics = diag;
                    self.emit_diagnostics(id, &diag);
                }
                Err(e) => {
                    error!(body = %self.bodies[i].name, error = %e, "body task failed");
                    self.bus.emit(SimulationEvent::new(
                        self.frame,
                        EventKind::BodyTaskFailed {
                            body: id,
                            message: e.to_string(),
                        },
                    ));
                    failures.push((id, e));
                }
            }
        }

        self.bus.emit(SimulationEvent::new(
            self.frame,
            EventKind::FrameEnd {
                wall_time: started.elapsed().as_secs_f64(),
            },
        ));
        self.bus.flush();
        self.frame += 1;

        failures
    }

    fn build_collision_sets(&self, params: &SolverParams) -> Vec<Vec<HalfSpaceSet>> {
        if !params.enable_collision {
            return vec![Vec::new(); self.bodies.len()];
        }

        self.samplers
            .iter()
            .map(|list| {
                list.iter()
                    .map(|(j, sampler)| {
                        let candidate = &self.bodies[*j];
                        sampler.sample(&candidate.mesh, &candidate.state.positions)
                    })
                    .collect()
            })
            .collect()
    }

    fn emit_diagnostics(&self, id: BodyId, diag: &StepDiagnostics) {
        if diag.distance_energy.is_some() || diag.volume_energy.is_some() {
            self.bus.emit(SimulationEvent::new(
                self.frame,
                EventKind::Energy {
                    body: id,
                    distance: diag.distance_energy,
                    volume: diag.volume_energy,
                },
            ));
        }
        if diag.distance_skipped {
            self.bus.emit(SimulationEvent::new(
                self.frame,
                EventKind::ConstraintFamilySkipped {
                    body: id,
                    family: ConstraintFamily::Distance,
                },
            ));
        }
        if diag.volume_skipped {
            self.bus.emit(SimulationEvent::new(
                self.frame,
                EventKind::ConstraintFamilySkipped {
                    body: id,
                    family: ConstraintFamily::Volume,
                },
            ));
        }
    }
}
