//! Reference frames for Hamiltonian orbit dynamics
//!
//! A frame contributes three terms to the dynamics of a particle:
//! - the Hamiltonian (energy in that frame)
//! - the gradient of the Hamiltonian, which drives the equations of motion
//! - the Hessian, used by variational integrators
//!
//! All three accept the same arguments `(t, qp, n_dim, ...)` and the gradient and
//! Hessian **accumulate** into caller-owned buffers. The buffer is typically
//! pre-filled with the potential's contribution.
//!
//! Frame variants form a closed set ([`Frame`]), chosen once from configuration
//! and then evaluated uniformly through [`ReferenceFrame`].

pub mod rotating;
pub mod static_frame;

pub use rotating::*;
pub use static_frame::*;

use std::fmt;

use crate::error::FrameError;

/// Frame contribution to the Hamiltonian dynamics
///
/// Implementations hold their parameters, which are fixed at construction.
/// The per-call `n_dim` must equal [`ReferenceFrame::n_dim`]; this is checked
/// only in debug builds.
pub trait ReferenceFrame {
    /// Number of spatial dimensions this frame was built for
    fn n_dim(&self) -> usize;

    /// Frame parameters in their flat layout
    fn parameters(&self) -> &[f64];

    /// Frame contribution to the Hamiltonian at time `t` and state `qp`
    fn hamiltonian(&self, t: f64, qp: &[f64], n_dim: usize) -> f64;

    /// Add the frame contribution to the phase-space gradient `dh`
    ///
    /// `dh[..n_dim]` receives ∂H/∂p and `dh[n_dim..]` receives ∂H/∂q.
    fn gradient(&self, t: f64, qp: &[f64], n_dim: usize, dh: &mut [f64]);

    /// Add the frame contribution to the row-major phase-space Hessian `d2h`
    fn hessian(&self, t: f64, qp: &[f64], n_dim: usize, d2h: &mut [f64]);
}

/// Identifies a frame variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Static,
    ConstantRotating,
}

impl FrameKind {
    /// Length of the flat parameter vector this variant expects
    pub fn num_parameters(&self) -> usize {
        match self {
            FrameKind::Static => 0,
            FrameKind::ConstantRotating => 3,
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameKind::Static => write!(f, "static"),
            FrameKind::ConstantRotating => write!(f, "constant rotating"),
        }
    }
}

/// Closed set of frame variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    Static(StaticFrame),
    ConstantRotating(ConstantRotatingFrame),
}

impl Frame {
    /// Build a frame from its flat parameter vector
    ///
    /// # Arguments
    /// * `kind` - Frame variant
    /// * `pars` - Flat parameters (empty for static, Ω for constant rotating)
    /// * `n_dim` - Number of spatial dimensions
    pub fn from_parameters(kind: FrameKind, pars: &[f64], n_dim: usize) -> Result<Self, FrameError> {
        match kind {
            FrameKind::Static => StaticFrame::from_parameters(pars, n_dim).map(Frame::Static),
            FrameKind::ConstantRotating => {
                ConstantRotatingFrame::from_parameters(pars, n_dim).map(Frame::ConstantRotating)
            }
        }
    }

    /// Variant of this frame
    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Static(_) => FrameKind::Static,
            Frame::ConstantRotating(_) => FrameKind::ConstantRotating,
        }
    }
}

impl From<StaticFrame> for Frame {
    fn from(frame: StaticFrame) -> Self {
        Frame::Static(frame)
    }
}

impl From<ConstantRotatingFrame> for Frame {
    fn from(frame: ConstantRotatingFrame) -> Self {
        Frame::ConstantRotating(frame)
    }
}

impl ReferenceFrame for Frame {
    #[inline]
    fn n_dim(&self) -> usize {
        match self {
            Frame::Static(f) => f.n_dim(),
            Frame::ConstantRotating(f) => f.n_dim(),
        }
    }

    #[inline]
    fn parameters(&self) -> &[f64] {
        match self {
            Frame::Static(f) => f.parameters(),
            Frame::ConstantRotating(f) => f.parameters(),
        }
    }

    #[inline]
    fn hamiltonian(&self, t: f64, qp: &[f64], n_dim: usize) -> f64 {
        match self {
            Frame::Static(f) => f.hamiltonian(t, qp, n_dim),
            Frame::ConstantRotating(f) => f.hamiltonian(t, qp, n_dim),
        }
    }

    #[inline]
    fn gradient(&self, t: f64, qp: &[f64], n_dim: usize, dh: &mut [f64]) {
        match self {
            Frame::Static(f) => f.gradient(t, qp, n_dim, dh),
            Frame::ConstantRotating(f) => f.gradient(t, qp, n_dim, dh),
        }
    }

    #[inline]
    fn hessian(&self, t: f64, qp: &[f64], n_dim: usize, d2h: &mut [f64]) {
        match self {
            Frame::Static(f) => f.hessian(t, qp, n_dim, d2h),
            Frame::ConstantRotating(f) => f.hessian(t, qp, n_dim, d2h),
        }
    }
}

/// Reject parameter vectors of the wrong length
pub(crate) fn check_parameter_count(kind: FrameKind, pars: &[f64]) -> Result<(), FrameError> {
    let expected = kind.num_parameters();
    if pars.len() != expected {
        return Err(FrameError::InvalidParameterCount {
            kind,
            expected,
            got: pars.len(),
        });
    }
    Ok(())
}

/// Debug-build checks of the per-call buffer contract
#[inline]
pub(crate) fn debug_check_state(frame_n_dim: usize, qp: &[f64], n_dim: usize) {
    debug_assert_eq!(n_dim, frame_n_dim, "n_dim does not match the frame");
    debug_assert_eq!(qp.len(), 2 * n_dim, "phase-space state must hold 2 * n_dim values");
}
