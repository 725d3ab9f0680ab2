//! Interactive mouse-drag constraint.
//!
//! At most one instance exists at a time, bound to one body's picked
//! triangle. The anchor glides with the mouse: each frame it becomes
//! the intersection of the current pick ray with the plane through the
//! previous anchor facing the camera, so no re-picking is needed while
//! the drag is held.

use velum_math::{intersect_plane, Ray, Vec3};

use crate::projection::{self, SubstepScales};

/// Pulls three bound vertices toward a tracked anchor point, each at
/// the distance recorded when the drag was created.
#[derive(Debug, Clone, Copy)]
pub struct DragConstraint {
    /// Vertices of the picked triangle.
    pub triangle: [u32; 3],

    /// World-space anchor the vertices are held against.
    pub anchor: Vec3,

    /// Each bound vertex's distance to the anchor at grab time.
    pub grab_distances: [f32; 3],
}

impl DragConstraint {
    /// Binds the picked triangle, recording each vertex's distance to
    /// the intersection point.
    pub fn bind(triangle: [u32; 3], positions: &[Vec3], grab_point: Vec3) -> Self {
        let grab_distances = triangle.map(|v| (positions[v as usize] - grab_point).length());
        Self {
            triangle,
            anchor: grab_point,
            grab_distances,
        }
    }

    /// Re-anchors against the plane through the previous anchor whose
    /// normal is the camera's forward vector.
    ///
    /// The anchor is left unchanged when the ray is parallel to that
    /// plane or the intersection lies behind the ray origin.
    pub fn track(&mut self, camera_front: Vec3, ray: &Ray) {
        if let Some(point) = intersect_plane(ray, self.anchor, camera_front) {
            self.anchor = point;
        }
    }

    /// Projects the three per-vertex anchor-distance constraints.
    ///
    /// Rigid with light damping: `alpha = 0`, `beta = 1`.
    pub fn solve(&self, x: &mut [Vec3], pos_diff: &[Vec3], inv_mass: &[f32], h: f32) {
        let scales = SubstepScales::new(0.0, 1.0, h);

        for (&v, &rest) in self.triangle.iter().zip(self.grab_distances.iter()) {
            let offset = x[v as usize] - self.anchor;
            let c = offset.length() - rest;
            let grads = [(v, offset.normalize_or_zero())];
            let dl = projection::delta_lambda(c, &grads, pos_diff, inv_mass, &scales);
            projection::apply_correction(dl, &grads, inv_mass, x);
        }
    }
}
