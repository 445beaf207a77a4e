//! Gravitational potential interface
//!
//! The potential evaluator lives outside this crate. This trait is the seam a
//! [`Hamiltonian`](crate::Hamiltonian) uses to layer a potential underneath a
//! frame. Like the frames, gradients and Hessians **accumulate** into the
//! buffers they are given.

/// Time-dependent gravitational potential Φ(t, q)
pub trait Potential {
    /// Number of spatial dimensions
    fn n_dim(&self) -> usize;

    /// Potential energy Φ(t, q)
    fn energy(&self, t: f64, q: &[f64]) -> f64;

    /// Add ∂Φ/∂q to `grad` (length n_dim)
    fn gradient(&self, t: f64, q: &[f64], grad: &mut [f64]);

    /// Add ∂²Φ/∂q² to `hess` (row-major, n_dim × n_dim)
    ///
    /// The default contributes nothing.
    fn hessian(&self, _t: f64, _q: &[f64], _hess: &mut [f64]) {}
}

impl<P: Potential + ?Sized> Potential for &P {
    fn n_dim(&self) -> usize {
        (**self).n_dim()
    }

    fn energy(&self, t: f64, q: &[f64]) -> f64 {
        (**self).energy(t, q)
    }

    fn gradient(&self, t: f64, q: &[f64], grad: &mut [f64]) {
        (**self).gradient(t, q, grad)
    }

    fn hessian(&self, t: f64, q: &[f64], hess: &mut [f64]) {
        (**self).hessian(t, q, hess)
    }
}
