//! Constantly rotating frame
//!
//! A frame rotating at fixed angular velocity Ω about the origin of the inertial
//! frame. With angular momentum L = q × p the frame Hamiltonian is
//!
//! H = ½ Σᵢ pᵢ² − Ω · L
//!
//! and its gradient is
//!
//! ```text
//! ∂H/∂p = p − Ω × q      (q̇ block, dh[0..3])
//! ∂H/∂q = Ω × p          (momentum block, dh[3..6])
//! ```
//!
//! The cross products are hard-wired to three dimensions, so the frame can only
//! be built with n_dim = 3.

use super::{check_parameter_count, debug_check_state, FrameKind, ReferenceFrame};
use crate::error::FrameError;
use crate::math::{add_assign3, angular_momentum, cross, hessian_len, kinetic_energy, phase_len, split_phase, vec3};
use crate::{Vec3, ROTATING_FRAME_DIM};

/// Frame rotating with constant angular velocity Ω
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantRotatingFrame {
    /// Angular velocity (Ωx, Ωy, Ωz)
    omega: [f64; 3],
}

impl ConstantRotatingFrame {
    /// Create a rotating frame with angular velocity `omega`
    ///
    /// Fails if any component of Ω is NaN or infinite.
    pub fn new(omega: Vec3) -> Result<Self, FrameError> {
        for (index, &value) in omega.iter().enumerate() {
            if !value.is_finite() {
                return Err(FrameError::NonFiniteParameter {
                    kind: FrameKind::ConstantRotating,
                    index,
                    value,
                });
            }
        }
        Ok(Self {
            omega: [omega.x, omega.y, omega.z],
        })
    }

    /// Create a rotating frame from the flat parameters `(Ωx, Ωy, Ωz)`
    ///
    /// # Arguments
    /// * `pars` - Exactly three angular velocity components
    /// * `n_dim` - Must be 3
    pub fn from_parameters(pars: &[f64], n_dim: usize) -> Result<Self, FrameError> {
        check_parameter_count(FrameKind::ConstantRotating, pars)?;
        if n_dim != ROTATING_FRAME_DIM {
            return Err(FrameError::UnsupportedDimension {
                kind: FrameKind::ConstantRotating,
                n_dim,
            });
        }
        Self::new(vec3(pars))
    }

    /// Angular velocity Ω
    pub fn omega(&self) -> Vec3 {
        vec3(&self.omega)
    }
}

impl ReferenceFrame for ConstantRotatingFrame {
    fn n_dim(&self) -> usize {
        ROTATING_FRAME_DIM
    }

    fn parameters(&self) -> &[f64] {
        &self.omega
    }

    #[inline]
    fn hamiltonian(&self, _t: f64, qp: &[f64], n_dim: usize) -> f64 {
        debug_check_state(ROTATING_FRAME_DIM, qp, n_dim);
        let (q, p) = split_phase(qp, n_dim);
        let l = angular_momentum(q, p);

        // Kinetic term and the rotational work term −Ω·L
        kinetic_energy(p) - self.omega().dot(&l)
    }

    #[inline]
    fn gradient(&self, _t: f64, qp: &[f64], n_dim: usize, dh: &mut [f64]) {
        debug_check_state(ROTATING_FRAME_DIM, qp, n_dim);
        debug_assert_eq!(dh.len(), phase_len(n_dim), "gradient buffer must hold 2 * n_dim values");

        let (q, p) = split_phase(qp, n_dim);
        let omega = self.omega();
        let q = vec3(q);
        let p = vec3(p);

        add_assign3(&mut dh[..ROTATING_FRAME_DIM], &(p - cross(&omega, &q)));
        add_assign3(&mut dh[ROTATING_FRAME_DIM..], &cross(&omega, &p));
    }

    /// Contributes nothing; the rotating-frame Hessian is not defined yet.
    #[inline]
    fn hessian(&self, _t: f64, qp: &[f64], n_dim: usize, d2h: &mut [f64]) {
        debug_check_state(ROTATING_FRAME_DIM, qp, n_dim);
        debug_assert_eq!(d2h.len(), hessian_len(n_dim), "Hessian buffer must hold (2 * n_dim)^2 values");
    }
}
