//! Static (inertial) frame
//!
//! The frame contributes kinetic energy only:
//!
//! H = ½ Σᵢ pᵢ²
//!
//! so the gradient adds q̇ᵢ = ∂H/∂pᵢ = pᵢ and nothing to the momentum block.
//! Valid for any n_dim ≥ 1.

use super::{check_parameter_count, debug_check_state, FrameKind, ReferenceFrame};
use crate::error::FrameError;
use crate::math::{hessian_len, kinetic_energy, momenta, phase_len};

/// Non-rotating, non-accelerating frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticFrame {
    n_dim: usize,
}

impl StaticFrame {
    /// Create a static frame for `n_dim` spatial dimensions
    pub fn new(n_dim: usize) -> Result<Self, FrameError> {
        if n_dim == 0 {
            return Err(FrameError::UnsupportedDimension {
                kind: FrameKind::Static,
                n_dim,
            });
        }
        Ok(Self { n_dim })
    }

    /// Create a static frame from its (empty) flat parameter vector
    pub fn from_parameters(pars: &[f64], n_dim: usize) -> Result<Self, FrameError> {
        check_parameter_count(FrameKind::Static, pars)?;
        Self::new(n_dim)
    }
}

impl ReferenceFrame for StaticFrame {
    fn n_dim(&self) -> usize {
        self.n_dim
    }

    fn parameters(&self) -> &[f64] {
        &[]
    }

    #[inline]
    fn hamiltonian(&self, _t: f64, qp: &[f64], n_dim: usize) -> f64 {
        debug_check_state(self.n_dim, qp, n_dim);
        kinetic_energy(momenta(qp, n_dim))
    }

    #[inline]
    fn gradient(&self, _t: f64, qp: &[f64], n_dim: usize, dh: &mut [f64]) {
        debug_check_state(self.n_dim, qp, n_dim);
        debug_assert_eq!(dh.len(), phase_len(n_dim), "gradient buffer must hold 2 * n_dim values");

        // q̇ = p
        for (dhi, pi) in dh[..n_dim].iter_mut().zip(momenta(qp, n_dim)) {
            *dhi += pi;
        }
    }

    /// Contributes nothing.
    ///
    /// The full dynamics Hessian of this frame is the identity block ∂²H/∂p² plus
    /// whatever the potential supplies for ∂²H/∂q². Neither is added here.
    #[inline]
    fn hessian(&self, _t: f64, qp: &[f64], n_dim: usize, d2h: &mut [f64]) {
        debug_check_state(self.n_dim, qp, n_dim);
        debug_assert_eq!(d2h.len(), hessian_len(n_dim), "Hessian buffer must hold (2 * n_dim)^2 values");
    }
}
