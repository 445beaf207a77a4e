//! Full Hamiltonian: potential plus reference frame
//!
//! H(t, q, p) = Φ(t, q) + H_frame(t, q, p)
//!
//! The potential fills the ∂H/∂q block of the gradient buffer and the frame is
//! layered on top. Hamilton's equations then read
//!
//! ```text
//! q̇ =  ∂H/∂p = dH[..n_dim]
//! ṗ = −∂H/∂q = −dH[n_dim..]
//! ```
//!
//! Ensembles of particles are packed as consecutive `2 * n_dim` chunks.

use log::debug;

use crate::error::FrameError;
use crate::frame::{Frame, ReferenceFrame};
use crate::math::{hessian_len, phase_len, positions};
use crate::potential::Potential;

/// A potential evaluated in a reference frame
#[derive(Debug, Clone)]
pub struct Hamiltonian<P> {
    potential: P,
    frame: Frame,
}

impl<P: Potential> Hamiltonian<P> {
    /// Pair a potential with a frame
    ///
    /// Fails if the two disagree on the number of spatial dimensions.
    pub fn new(potential: P, frame: impl Into<Frame>) -> Result<Self, FrameError> {
        let frame = frame.into();
        if potential.n_dim() != frame.n_dim() {
            return Err(FrameError::DimensionMismatch {
                potential: potential.n_dim(),
                frame: frame.n_dim(),
            });
        }
        debug!(
            "Hamiltonian built: {} frame, n_dim = {}, parameters = {:?}",
            frame.kind(),
            frame.n_dim(),
            frame.parameters()
        );
        Ok(Self { potential, frame })
    }

    /// Number of spatial dimensions
    pub fn n_dim(&self) -> usize {
        self.frame.n_dim()
    }

    pub fn potential(&self) -> &P {
        &self.potential
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Total energy Φ(t, q) + H_frame(t, q, p) of one particle
    pub fn energy(&self, t: f64, qp: &[f64]) -> f64 {
        let n = self.n_dim();
        self.potential.energy(t, positions(qp, n)) + self.frame.hamiltonian(t, qp, n)
    }

    /// Add the full phase-space gradient of one particle to `dh`
    pub fn gradient(&self, t: f64, qp: &[f64], dh: &mut [f64]) {
        let n = self.n_dim();
        debug_assert_eq!(dh.len(), phase_len(n));

        self.potential.gradient(t, positions(qp, n), &mut dh[n..2 * n]);
        self.frame.gradient(t, qp, n, dh);
    }

    /// Add the full phase-space Hessian of one particle to `d2h`
    ///
    /// The potential's `n_dim × n_dim` block lands in rows and columns
    /// `0..n_dim` (the q-q corner). Allocates that block as scratch.
    pub fn hessian(&self, t: f64, qp: &[f64], d2h: &mut [f64]) {
        let n = self.n_dim();
        let stride = phase_len(n);
        debug_assert_eq!(d2h.len(), hessian_len(n));

        let mut block = vec![0.0; n * n];
        self.potential.hessian(t, positions(qp, n), &mut block);
        for (i, row) in block.chunks_exact(n).enumerate() {
            for (j, &v) in row.iter().enumerate() {
                d2h[i * stride + j] += v;
            }
        }

        self.frame.hessian(t, qp, n, d2h);
    }

    /// Time derivative (q̇, ṗ) of one particle, written (not accumulated) into `out`
    pub fn dydt(&self, t: f64, qp: &[f64], out: &mut [f64]) {
        let n = self.n_dim();
        out.fill(0.0);
        self.gradient(t, qp, out);
        for v in &mut out[n..] {
            *v = -*v;
        }
    }

    /// Time derivatives of an ensemble packed as consecutive phase-space chunks
    pub fn dydt_many(&self, t: f64, w: &[f64], out: &mut [f64]) {
        let len = phase_len(self.n_dim());
        debug_assert_eq!(w.len(), out.len());
        debug_assert_eq!(w.len() % len, 0, "ensemble length must be a multiple of 2 * n_dim");

        for (qp, o) in w.chunks_exact(len).zip(out.chunks_exact_mut(len)) {
            self.dydt(t, qp, o);
        }
    }

    /// Total energy of every particle in an ensemble
    pub fn energy_many(&self, t: f64, w: &[f64], out: &mut [f64]) {
        let len = phase_len(self.n_dim());
        debug_assert_eq!(w.len(), out.len() * len);

        for (qp, e) in w.chunks_exact(len).zip(out.iter_mut()) {
            *e = self.energy(t, qp);
        }
    }
}
