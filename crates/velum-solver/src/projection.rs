//! The XPBD projection primitive.
//!
//! For a constraint with violation `C`, per-vertex gradients `∇C_i`,
//! the position change since prediction `posDiff_i`, and inverse
//! masses `w_i`:
//!
//! ```text
//! deltaLambda = (-C - gamma · Σ_i ∇C_i · posDiff_i)
//!             / ((1 + gamma) · Σ_i w_i · |∇C_i|² + alphaTilde)
//! deltaX_i    = deltaLambda · w_i · ∇C_i
//! ```
//!
//! with `alphaTilde = alpha / h²`, `betaTilde = beta · h²`, and
//! `gamma = alphaTilde · betaTilde / h` for substep duration `h`.
//! Corrections are applied immediately, so later constraints in the
//! same pass see the updated positions.

use velum_math::Vec3;

/// Timestep-scaled compliance and damping for one substep.
#[derive(Debug, Clone, Copy)]
pub struct SubstepScales {
    pub alpha_tilde: f32,
    pub gamma: f32,
}

impl SubstepScales {
    /// Scales for a compliant, damped constraint at substep duration `h`.
    pub fn new(alpha: f32, beta: f32, h: f32) -> Self {
        let alpha_tilde = alpha / (h * h);
        let beta_tilde = beta * h * h;
        Self {
            alpha_tilde,
            gamma: alpha_tilde * beta_tilde / h,
        }
    }

    /// Scales for a rigid, undamped constraint (collision contacts).
    pub fn rigid() -> Self {
        Self {
            alpha_tilde: 0.0,
            gamma: 0.0,
        }
    }
}

/// Computes `deltaLambda` from pre-accumulated gradient sums.
///
/// `grad_dot_diff` is `Σ_i ∇C_i · posDiff_i` and `weighted_grad_sq`
/// is `Σ_i w_i · |∇C_i|²`. Callers with many vertices per constraint
/// (the volume family) accumulate these in one pass over their
/// gradient buffer.
///
/// Returns 0 when the denominator vanishes (all gradients zero with
/// zero compliance), so degenerate configurations produce no
/// correction instead of a NaN.
#[inline]
pub fn delta_lambda_from_sums(
    c: f32,
    grad_dot_diff: f32,
    weighted_grad_sq: f32,
    scales: &SubstepScales,
) -> f32 {
    let denom = (1.0 + scales.gamma) * weighted_grad_sq + scales.alpha_tilde;
    if denom <= f32::EPSILON {
        return 0.0;
    }
    (-c - scales.gamma * grad_dot_diff) / denom
}

/// Computes `deltaLambda` for a constraint over a small vertex set.
pub fn delta_lambda(
    c: f32,
    grads: &[(u32, Vec3)],
    pos_diff: &[Vec3],
    inv_mass: &[f32],
    scales: &SubstepScales,
) -> f32 {
    let mut grad_dot_diff = 0.0;
    let mut weighted_grad_sq = 0.0;
    for &(v, grad) in grads {
        let v = v as usize;
        grad_dot_diff += grad.dot(pos_diff[v]);
        weighted_grad_sq += inv_mass[v] * grad.length_squared();
    }
    delta_lambda_from_sums(c, grad_dot_diff, weighted_grad_sq, scales)
}

/// Applies `deltaX_i = deltaLambda · w_i · ∇C_i` to the positions.
pub fn apply_correction(
    delta_lambda: f32,
    grads: &[(u32, Vec3)],
    inv_mass: &[f32],
    positions: &mut [Vec3],
) {
    for &(v, grad) in grads {
        let v = v as usize;
        positions[v] += delta_lambda * inv_mass[v] * grad;
    }
}
