//! # galframe Core
//!
//! Reference-frame contributions to Hamiltonian orbit dynamics.
//!
//! An orbit integrator evaluates the Hamiltonian of a test particle as the sum of a
//! gravitational potential and a frame term. This library provides the frame term for an
//! inertial (static) frame and for a frame rotating at constant angular velocity Ω:
//!
//! ```text
//! H_static   = ½ |p|²
//! H_rotating = ½ |p|² − Ω · (q × p)
//! ```
//!
//! Every operation accumulates into caller-owned buffers so the potential's own gradient
//! can be layered underneath it.
//!
//! ## Modules
//!
//! - [`math`]: Shared vector algebra (cross products, angular momentum, phase-space views)
//! - [`frame`]: Frame variants and the [`ReferenceFrame`](frame::ReferenceFrame) trait
//! - [`potential`]: Interface to the external potential evaluator
//! - [`hamiltonian`]: Potential + frame composition and equations of motion
//! - [`config`]: Serializable frame configuration (YAML)
//! - [`error`]: Error type for frame construction and configuration I/O

pub mod math;
pub mod frame;
pub mod potential;
pub mod hamiltonian;
pub mod config;
pub mod error;

pub use config::FrameConfig;
pub use error::FrameError;
pub use frame::{ConstantRotatingFrame, Frame, FrameKind, ReferenceFrame, StaticFrame};
pub use hamiltonian::Hamiltonian;
pub use potential::Potential;

use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// Number of spatial dimensions supported by the rotating frame
pub const ROTATING_FRAME_DIM: usize = 3;
