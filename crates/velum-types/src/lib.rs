//! # velum-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the Velum deformable-body simulation engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Velum crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{VelumError, VelumResult};
pub use ids::{BodyId, TriangleId};
