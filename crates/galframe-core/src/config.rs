//! Frame configuration
//!
//! Serializable description of a reference frame, read from and written to YAML:
//!
//! ```yaml
//! type: constant_rotating
//! omega: [0.0, 0.0, 40.0]
//! ```
//!
//! A configuration is turned into a [`Frame`] once with [`FrameConfig::build`];
//! validation happens there rather than on every evaluation.

use std::fs;
use std::path::Path;

use log::{debug, trace};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::FrameError;
use crate::frame::{ConstantRotatingFrame, Frame, ReferenceFrame, StaticFrame};

/// Frame configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FrameConfig {
    /// Inertial frame
    Static {
        /// Number of spatial dimensions
        #[serde(default = "default_n_dim")]
        n_dim: usize,
    },
    /// Frame rotating at constant angular velocity
    ConstantRotating {
        /// Angular velocity Ω [rad / time unit]
        omega: Vector3<f64>,
    },
}

fn default_n_dim() -> usize {
    3
}

impl Default for FrameConfig {
    fn default() -> Self {
        FrameConfig::Static {
            n_dim: default_n_dim(),
        }
    }
}

impl FrameConfig {
    /// Validate the configuration and build the frame
    pub fn build(&self) -> Result<Frame, FrameError> {
        let frame = match self {
            FrameConfig::Static { n_dim } => Frame::Static(StaticFrame::new(*n_dim)?),
            FrameConfig::ConstantRotating { omega } => {
                Frame::ConstantRotating(ConstantRotatingFrame::new(*omega)?)
            }
        };
        debug!(
            "Built {} frame (n_dim = {}, parameters = {:?})",
            frame.kind(),
            frame.n_dim(),
            frame.parameters()
        );
        Ok(frame)
    }

    /// Parse a configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self, FrameError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize the configuration to YAML
    pub fn to_yaml_string(&self) -> Result<String, FrameError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl From<&Frame> for FrameConfig {
    fn from(frame: &Frame) -> Self {
        match frame {
            Frame::Static(f) => FrameConfig::Static { n_dim: f.n_dim() },
            Frame::ConstantRotating(f) => FrameConfig::ConstantRotating { omega: f.omega() },
        }
    }
}

/// Read a frame configuration from a YAML file
pub fn read<P: AsRef<Path>>(path: P) -> Result<FrameConfig, FrameError> {
    let path = path.as_ref();
    trace!("Reading frame configuration from {}", path.display());
    let yaml = fs::read_to_string(path)?;
    FrameConfig::from_yaml_str(&yaml)
}

/// Write a frame configuration to a YAML file
pub fn write<P: AsRef<Path>>(config: &FrameConfig, path: P) -> Result<(), FrameError> {
    let path = path.as_ref();
    trace!("Writing frame configuration to {}", path.display());
    fs::write(path, config.to_yaml_string()?)?;
    Ok(())
}
