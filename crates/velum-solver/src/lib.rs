//! XPBD constraint projection and substep integration.
//!
//! The solver advances one body per call: predict positions from
//! velocities, project each enabled constraint family (Gauss-Seidel,
//! corrections applied immediately), then derive new velocities from
//! the corrected positions. Compliance (`alpha`) and damping (`beta`)
//! soften constraints per Macklin et al.'s XPBD formulation.

pub mod collision;
pub mod config;
pub mod distance;
pub mod drag;
pub mod integrator;
pub mod projection;
pub mod state;
pub mod volume;

pub use collision::{HalfSpace, HalfSpaceSet};
pub use config::SolverParams;
pub use distance::DistanceConstraint;
pub use drag::DragConstraint;
pub use integrator::{step_frame, BodyConstraints, StepDiagnostics};
pub use projection::SubstepScales;
pub use state::VertexState;
pub use volume::VolumeConstraint;
