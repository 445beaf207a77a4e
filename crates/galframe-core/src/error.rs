//! Frame construction and configuration errors
//!
//! The per-call frame operations never fail. Errors only arise when a frame is
//! built from flat parameters or configuration, or when configuration is read
//! from or written to disk.

use thiserror::Error;

use crate::frame::FrameKind;

/// Frame errors
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("{kind} frame expects {expected} parameters, got {got}")]
    InvalidParameterCount {
        kind: FrameKind,
        expected: usize,
        got: usize,
    },
    #[error("{kind} frame does not support n_dim = {n_dim}")]
    UnsupportedDimension { kind: FrameKind, n_dim: usize },
    #[error("{kind} frame parameter {index} is not finite ({value})")]
    NonFiniteParameter {
        kind: FrameKind,
        index: usize,
        value: f64,
    },
    #[error("Potential has n_dim = {potential}, frame has n_dim = {frame}")]
    DimensionMismatch { potential: usize, frame: usize },
    #[error("Invalid frame configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Frame configuration I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
