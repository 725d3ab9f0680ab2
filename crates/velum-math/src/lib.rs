//! # velum-math
//!
//! Linear algebra primitives for the Velum simulation engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat3`, etc.)
//! - Ray/triangle intersection (Möller–Trumbore) for picking
//! - Ray/plane intersection for drag-anchor tracking

pub mod ray;

// Re-export glam types as the canonical math types for Velum.
pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

pub use ray::{intersect_plane, intersect_triangle, Ray};
