//! # velum-mesh
//!
//! Surface meshes for the Velum simulation engine.
//!
//! A [`SurfaceMesh`] holds welded vertex positions and a triangle index
//! buffer. Welding merges duplicate positions from triangle soups so the
//! solver sees one particle per geometric vertex — render-side duplicates
//! (UV seams, per-face normals) are a collaborator concern, not ours.
//!
//! [`topology::Topology`] derives the deduplicated edge list and adjacency
//! used by constraint construction; [`generators`] produces deterministic
//! closed meshes for tests and headless scenarios.

pub mod generators;
pub mod mesh;
pub mod normals;
pub mod topology;

pub use mesh::SurfaceMesh;
pub use normals::vertex_normals;
pub use topology::{Edge, Topology};
