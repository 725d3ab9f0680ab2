//! Simulation event types.
//!
//! Lightweight value types emitted by the scene at various points in
//! each frame; they carry just enough data for monitoring and
//! debugging, never references into live simulation state.

use serde::{Deserialize, Serialize};
use velum_types::{BodyId, TriangleId};

/// A simulation event emitted by the engine.
///
/// Events are tagged with the frame index they were produced in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Frame number (0-indexed).
    pub frame: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Frame started.
    FrameBegin {
        /// Frame duration handed to the solver (seconds).
        dt: f32,
    },

    /// Frame completed; all body tasks have joined.
    FrameEnd {
        /// Wall-clock time for the whole frame (seconds).
        wall_time: f64,
    },

    /// Per-body constraint energy snapshot.
    ///
    /// `None` means the family was disabled, skipped, or rigid this
    /// frame.
    Energy {
        body: BodyId,
        distance: Option<f32>,
        volume: Option<f32>,
    },

    /// A pick ray hit a body.
    PickHit {
        body: BodyId,
        triangle_index: TriangleId,
        /// World-space intersection point.
        point: [f32; 3],
    },

    /// A mouse drag bound to a body.
    DragCreated { body: BodyId },

    /// The active mouse drag was released.
    DragReleased { body: BodyId },

    /// A constraint family was skipped for one frame.
    ConstraintFamilySkipped {
        body: BodyId,
        family: ConstraintFamily,
    },

    /// A body failed to load from configuration and was dropped.
    BodyDropped { name: String, reason: String },

    /// A body's frame task failed; siblings were unaffected.
    BodyTaskFailed { body: BodyId, message: String },
}

/// Constraint families a degradation notice can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintFamily {
    Distance,
    Volume,
    Collision,
}

impl SimulationEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u64, kind: EventKind) -> Self {
        Self { frame, kind }
    }
}
