//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Default number of XPBD substeps per frame.
pub const DEFAULT_SUBSTEPS: u32 = 10;

/// Default compliance (inverse stiffness). 0 would be perfectly rigid.
pub const DEFAULT_ALPHA: f32 = 0.001;

/// Default damping coefficient.
pub const DEFAULT_BETA: f32 = 5.0;

/// Default target-volume multiplier (1 preserves rest volume).
pub const DEFAULT_PRESSURE: f32 = 1.0;

/// Default ground plane height (Y coordinate).
pub const DEFAULT_GROUND_LEVEL: f32 = 0.0;

/// Default half-extent of the invisible barrier box on X and Z.
pub const DEFAULT_BARRIER_HALF_EXTENT: f32 = 30.0;

/// Epsilon for ray intersection tests (parallel rejection, hit acceptance).
pub const RAY_EPSILON: f32 = 1.0e-8;

/// Epsilon for ray/plane parallelism when tracking the drag anchor.
pub const PLANE_EPSILON: f32 = 1.0e-6;

/// Epsilon for position welding when deduplicating mesh vertices.
pub const WELD_EPSILON: f32 = 1.0e-6;
