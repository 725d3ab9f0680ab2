//! Surface sampling and ray picking.
//!
//! [`ContactSampler`] turns a candidate body's surface into the
//! half-space sets the solver's environment-collision family consumes.
//! [`pick_surface`] finds the closest ray/triangle hit on one body;
//! the scene compares hits across bodies to resolve a pick.

pub mod picking;
pub mod sampling;

pub use picking::{pick_surface, SurfaceHit};
pub use sampling::ContactSampler;
