//! Mathematical utilities for galframe
//!
//! Implements the vector algebra shared by the frame variants: phase-space
//! splitting, kinetic energy, cross products and angular momentum.

pub mod phase;
pub mod vector;

pub use phase::*;
pub use vector::*;
