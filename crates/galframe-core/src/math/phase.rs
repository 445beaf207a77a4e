//! Phase-space layout helpers
//!
//! A phase-space state is a flat slice of `2 * n_dim` values:
//!
//! ```text
//! qp = [q₀, q₁, ..., q_{n-1}, p₀, p₁, ..., p_{n-1}]
//! ```
//!
//! Gradient buffers share the same length. The first `n_dim` slots hold ∂H/∂p
//! (the q̇ block) and the last `n_dim` slots hold ∂H/∂q (so ṗ = −∂H/∂q).
//!
//! Hessian buffers are the row-major matrix of second derivatives with respect
//! to `qp`, so entry `i * 2n_dim + j` is ∂²H/∂qpᵢ∂qpⱼ. The ∂²H/∂q² block sits in
//! rows and columns `0..n_dim` and the ∂²H/∂p² block in `n_dim..2n_dim`.

/// Length of a phase-space vector for `n_dim` spatial dimensions
#[inline]
pub fn phase_len(n_dim: usize) -> usize {
    2 * n_dim
}

/// Length of a flattened, row-major phase-space Hessian for `n_dim` spatial dimensions
#[inline]
pub fn hessian_len(n_dim: usize) -> usize {
    phase_len(n_dim) * phase_len(n_dim)
}

/// Position block `q` of a phase-space state
#[inline]
pub fn positions(qp: &[f64], n_dim: usize) -> &[f64] {
    &qp[..n_dim]
}

/// Momentum block `p` of a phase-space state
#[inline]
pub fn momenta(qp: &[f64], n_dim: usize) -> &[f64] {
    &qp[n_dim..2 * n_dim]
}

/// Split a phase-space state into `(q, p)`
#[inline]
pub fn split_phase(qp: &[f64], n_dim: usize) -> (&[f64], &[f64]) {
    (positions(qp, n_dim), momenta(qp, n_dim))
}

/// Kinetic energy ½ Σ pᵢ²
///
/// The sum runs over every entry of `p`.
#[inline]
pub fn kinetic_energy(p: &[f64]) -> f64 {
    0.5 * p.iter().map(|pi| pi * pi).sum::<f64>()
}
