//! Ray geometry for picking and drag-anchor tracking.
//!
//! `intersect_triangle` is the Möller–Trumbore algorithm: near-parallel
//! rays are rejected on the determinant, barycentric coordinates are
//! accepted within an epsilon band of `[0, 1]`, and hits must lie a
//! positive distance along the ray.

use glam::Vec3;
use velum_types::constants::{PLANE_EPSILON, RAY_EPSILON};

/// A ray with an origin and a (not necessarily normalized) direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A ray/triangle hit: the intersection point and the ray parameter.
#[derive(Debug, Clone, Copy)]
pub struct TriangleHit {
    pub point: Vec3,
    pub t: f32,
}

/// Möller–Trumbore ray/triangle intersection.
///
/// Returns `None` for near-parallel rays (determinant below epsilon),
/// barycentric coordinates outside `[0, 1]` (within epsilon tolerance),
/// or hits at `t <= epsilon`.
pub fn intersect_triangle(ray: &Ray, p0: Vec3, p1: Vec3, p2: Vec3) -> Option<TriangleHit> {
    let edge1 = p1 - p0;
    let edge2 = p2 - p0;

    let h = ray.direction.cross(edge2);
    let det = edge1.dot(h);
    if det.abs() < RAY_EPSILON {
        return None; // Ray parallel to triangle plane
    }

    let inv_det = 1.0 / det;
    let s = ray.origin - p0;
    let u = inv_det * s.dot(h);
    if !(-RAY_EPSILON..=1.0 + RAY_EPSILON).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = inv_det * ray.direction.dot(q);
    if v < -RAY_EPSILON || u + v > 1.0 + RAY_EPSILON {
        return None;
    }

    let t = inv_det * edge2.dot(q);
    if t <= RAY_EPSILON {
        return None; // Behind the origin or degenerate
    }

    Some(TriangleHit {
        point: ray.at(t),
        t,
    })
}

/// Ray/plane intersection against the plane through `point` with `normal`.
///
/// Returns `None` when the ray is parallel to the plane
/// (`|normal · dir| <= 1e-6`) or the intersection lies behind the ray
/// origin (`t <= 0`). The drag tracker keeps its previous anchor in
/// both cases.
pub fn intersect_plane(ray: &Ray, point: Vec3, normal: Vec3) -> Option<Vec3> {
    let denom = normal.dot(ray.direction);
    if denom.abs() <= PLANE_EPSILON {
        return None;
    }

    let t = normal.dot(point - ray.origin) / denom;
    if t <= 0.0 {
        return None;
    }

    Some(ray.at(t))
}
