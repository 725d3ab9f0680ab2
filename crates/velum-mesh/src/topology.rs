//! Mesh topology queries.
//!
//! Builds the deduplicated edge list and adjacency structures from the
//! triangle index buffer. Built once per body at creation time and
//! immutable thereafter; distance constraints are one-per-edge and the
//! pickable surface is the full triangle set.

use std::collections::BTreeMap;

use velum_math::Vec3;

use crate::mesh::SurfaceMesh;

/// An undirected edge between two welded vertices.
///
/// Canonicalized so `v0 < v1`; two triangles sharing an edge yield one
/// `Edge`. The rest length is captured from the rest positions when the
/// topology is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub v0: u32,
    pub v1: u32,
    /// Distance between the endpoints in the rest configuration.
    pub rest_length: f32,
}

/// Precomputed topology information for a surface mesh.
///
/// Provides the inputs for constraint construction:
/// - Deduplicated edges (distance constraints)
/// - Per-vertex triangle fans (normal computation)
/// - Boundary queries (volume constraints need a closed surface)
#[derive(Debug, Clone)]
pub struct Topology {
    /// Unique edges with rest lengths.
    pub edges: Vec<Edge>,

    /// For each vertex, the list of triangles that contain it.
    pub vertex_triangles: Vec<Vec<u32>>,

    /// For each edge, the number of adjacent triangles.
    /// Boundary edges have exactly 1.
    pub edge_valence: Vec<u8>,
}

impl Topology {
    /// Build topology from a mesh's rest positions.
    pub fn build(mesh: &SurfaceMesh) -> Self {
        let vertex_count = mesh.vertex_count();
        let tri_count = mesh.triangle_count();

        let mut vertex_triangles: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];
        // BTreeMap keeps edge order deterministic across runs.
        let mut edge_map: BTreeMap<(u32, u32), u8> = BTreeMap::new();

        for t in 0..tri_count {
            let [a, b, c] = mesh.triangle(t);
            vertex_triangles[a as usize].push(t as u32);
            vertex_triangles[b as usize].push(t as u32);
            vertex_triangles[c as usize].push(t as u32);

            for (v0, v1) in [(a, b), (b, c), (c, a)] {
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                *edge_map.entry(key).or_insert(0) += 1;
            }
        }

        let mut edges = Vec::with_capacity(edge_map.len());
        let mut edge_valence = Vec::with_capacity(edge_map.len());
        for (&(v0, v1), &valence) in &edge_map {
            edges.push(Edge {
                v0,
                v1,
                rest_length: rest_length(mesh, v0, v1),
            });
            edge_valence.push(valence);
        }

        Self {
            edges,
            vertex_triangles,
            edge_valence,
        }
    }

    /// Returns the number of boundary edges (edges with only 1 adjacent
    /// triangle).
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_valence.iter().filter(|&&v| v == 1).count()
    }

    /// Returns true if the mesh is closed (no boundary edges).
    pub fn is_closed(&self) -> bool {
        self.boundary_edge_count() == 0
    }
}

fn rest_length(mesh: &SurfaceMesh, v0: u32, v1: u32) -> f32 {
    let p0: Vec3 = mesh.positions[v0 as usize];
    let p1: Vec3 = mesh.positions[v1 as usize];
    (p0 - p1).length()
}
