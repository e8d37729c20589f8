//! Modes of deformation
//!
//! A parcel is deformed by a single, time-constant mode. The mode is given
//! either as a typed [`ModeDescriptor`] or as a loosely typed [`ModeConfig`]
//! whose `type` tag is resolved at run time:
//!
//! | tag                     | mode         | parameters      |
//! |-------------------------|--------------|-----------------|
//! | `simpleshear`, `ss`     | simple shear | `plane`         |
//! | `pureshear`, `ps`       | pure shear   | `axis`, `r`     |
//! | `rigidrotation`, `rr`   | rejected     | not implemented |
//!
//! Every descriptor may carry a characteristic time scale `T` (default 1).
//!
//! # Example
//!
//! ```rust
//! use fabric_rs::models::{ModeConfig, ModeDescriptor, DeformationMode};
//!
//! let config: ModeConfig = serde_json::from_str(r#"{"type": "ss", "plane": 0}"#).unwrap();
//! let mode = ModeDescriptor::try_from(config).unwrap();
//!
//! assert_eq!(mode.mode, DeformationMode::SimpleShear { plane: 0 });
//! assert_eq!(mode.time_scale, 1.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FabricError, FabricResult};

/// Default characteristic time scale when a descriptor omits `T`.
pub const DEFAULT_TIME_SCALE: f64 = 1.0;

// =================================================================================================
// Typed descriptor
// =================================================================================================

/// Kinematic mode with its geometric parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DeformationMode {
    /// Simple shear in `plane` (`0 = yz`, `1 = xz`, `2 = xy`)
    SimpleShear { plane: usize },

    /// Pure shear shortening along `axis` with confinement ratio `ratio`
    PureShear { axis: usize, ratio: f64 },
}

impl DeformationMode {
    /// Canonical tag of the mode
    pub fn tag(&self) -> &'static str {
        match self {
            DeformationMode::SimpleShear { .. } => "simpleshear",
            DeformationMode::PureShear { .. } => "pureshear",
        }
    }

    /// What the strain target of this mode measures
    pub fn strain_measure(&self) -> &'static str {
        match self {
            DeformationMode::SimpleShear { .. } => "shear angle (rad)",
            DeformationMode::PureShear { .. } => "axial strain",
        }
    }
}

impl fmt::Display for DeformationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeformationMode::SimpleShear { plane } => write!(f, "simpleshear(plane={plane})"),
            DeformationMode::PureShear { axis, ratio } => {
                write!(f, "pureshear(axis={axis}, r={ratio})")
            }
        }
    }
}

/// Mode of deformation together with its characteristic time scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeDescriptor {
    pub mode: DeformationMode,

    /// Characteristic time scale `T`
    pub time_scale: f64,
}

impl ModeDescriptor {
    pub fn new(mode: DeformationMode) -> Self {
        Self {
            mode,
            time_scale: DEFAULT_TIME_SCALE,
        }
    }

    pub fn simple_shear(plane: usize) -> Self {
        Self::new(DeformationMode::SimpleShear { plane })
    }

    pub fn pure_shear(axis: usize, ratio: f64) -> Self {
        Self::new(DeformationMode::PureShear { axis, ratio })
    }

    /// Builder pattern: set the characteristic time scale
    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Resolve a loosely typed descriptor.
    pub fn parse(config: &ModeConfig) -> FabricResult<Self> {
        let tag = config.mode_type.as_deref().ok_or(FabricError::MissingModeType)?;

        let mode = match tag {
            "simpleshear" | "ss" => {
                let plane = config.plane.ok_or(FabricError::MissingParameter {
                    mode: "simpleshear",
                    parameter: "plane",
                })?;
                DeformationMode::SimpleShear { plane }
            }
            "pureshear" | "ps" => {
                let axis = config.axis.ok_or(FabricError::MissingParameter {
                    mode: "pureshear",
                    parameter: "axis",
                })?;
                let ratio = config.r.ok_or(FabricError::MissingParameter {
                    mode: "pureshear",
                    parameter: "r",
                })?;
                DeformationMode::PureShear { axis, ratio }
            }
            "rigidrotation" | "rr" => {
                return Err(FabricError::Unimplemented {
                    tag: tag.to_string(),
                });
            }
            other => {
                return Err(FabricError::UnknownMode {
                    tag: other.to_string(),
                });
            }
        };

        let descriptor = Self {
            mode,
            time_scale: config.time_scale.unwrap_or(DEFAULT_TIME_SCALE),
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Check the geometric parameters.
    pub fn validate(&self) -> FabricResult<()> {
        let (parameter, index) = match self.mode {
            DeformationMode::SimpleShear { plane } => ("plane", plane),
            DeformationMode::PureShear { axis, .. } => ("axis", axis),
        };

        if index > 2 {
            return Err(FabricError::InvalidParameter {
                parameter,
                reason: format!("expected 0, 1 or 2, got {index}"),
            });
        }

        Ok(())
    }
}

impl TryFrom<ModeConfig> for ModeDescriptor {
    type Error = FabricError;

    fn try_from(config: ModeConfig) -> Result<Self, Self::Error> {
        Self::parse(&config)
    }
}

// =================================================================================================
// Loosely typed descriptor
// =================================================================================================

/// Mode descriptor as it appears in a configuration file
///
/// ```json
/// {"type": "pureshear", "axis": 2, "r": 0.0, "T": 1.0}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeConfig {
    #[serde(rename = "type", default)]
    pub mode_type: Option<String>,

    #[serde(default)]
    pub plane: Option<usize>,

    #[serde(default)]
    pub axis: Option<usize>,

    #[serde(default)]
    pub r: Option<f64>,

    #[serde(rename = "T", default)]
    pub time_scale: Option<f64>,
}

impl ModeConfig {
    pub fn new(mode_type: &str) -> Self {
        Self {
            mode_type: Some(mode_type.to_string()),
            ..Default::default()
        }
    }

    pub fn plane(mut self, plane: usize) -> Self {
        self.plane = Some(plane);
        self
    }

    pub fn axis(mut self, axis: usize) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn ratio(mut self, r: f64) -> Self {
        self.r = Some(r);
        self
    }

    pub fn time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = Some(time_scale);
        self
    }
}

// =================================================================================================
// Tests
// =================================================================================================
