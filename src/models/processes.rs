//! Fabric process weights
//!
//! Each fabric process is enabled by giving it a weight; an absent weight
//! switches the process off entirely (zero contribution, never an error).
//!
//! | process                      | weight          | operator                     |
//! |------------------------------|-----------------|------------------------------|
//! | lattice rotation             | `iota`, `zeta`  | `M_LROT(D, W, iota, zeta)`   |
//! | CDRX (rotation recryst.)     | `Lambda`        | `Lambda · M_CDRX`            |
//! | DDRX (migration recryst.)    | `Gamma0`        | `Gamma0 · M_DDRX(nlm, S)`    |
//! | regularization               | `nu` (+`expo`)  | see [`RegularizationMode`]   |
//!
//! # Example
//!
//! ```rust
//! use fabric_rs::models::{ProcessWeights, RegularizationMode};
//!
//! let processes = ProcessWeights::default()
//!     .with_lattice_rotation(1.0, 0.0)
//!     .with_regularization(RegularizationMode::Custom { nu: 1.0, exponent: 1.5 });
//!
//! assert!(processes.lattice_rotation.is_some());
//! assert!(processes.cdrx.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Lattice rotation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeRotation {
    /// Plastic spin coefficient
    pub iota: f64,

    /// Secondary rotation-rate coefficient
    #[serde(default)]
    pub zeta: f64,
}

/// Choice of regularization operator
///
/// Regularization damps high harmonic degrees so the truncated expansion
/// stays well behaved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RegularizationMode {
    /// Operator of the fabric library, scaled by `nu`
    Default { nu: f64 },

    /// `-nu‖D‖ · |∇²/(L(L+1))|^exponent`
    Custom { nu: f64, exponent: f64 },
}

impl RegularizationMode {
    pub fn nu(&self) -> f64 {
        match self {
            RegularizationMode::Default { nu } | RegularizationMode::Custom { nu, .. } => *nu,
        }
    }
}

/// Weights of every fabric process, `None` meaning disabled
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessWeights {
    #[serde(default)]
    pub lattice_rotation: Option<LatticeRotation>,

    /// `Lambda`
    #[serde(default)]
    pub cdrx: Option<f64>,

    /// `Gamma0`
    #[serde(default)]
    pub ddrx: Option<f64>,

    #[serde(default)]
    pub regularization: Option<RegularizationMode>,
}

impl ProcessWeights {
    /// All processes disabled
    pub fn none() -> Self {
        Self::default()
    }

    /// Build weights from the optional-argument convention.
    ///
    /// `iota` gates lattice rotation, a given `regexpo` selects the custom
    /// regularization over the library one. A custom exponent with no `nu`
    /// leaves regularization disabled.
    pub fn from_optional(
        iota: Option<f64>,
        zeta: f64,
        lambda: Option<f64>,
        gamma0: Option<f64>,
        nu: Option<f64>,
        regexpo: Option<f64>,
    ) -> Self {
        let regularization = match (nu, regexpo) {
            (Some(nu), Some(exponent)) => Some(RegularizationMode::Custom { nu, exponent }),
            (Some(nu), None) => Some(RegularizationMode::Default { nu }),
            (None, _) => None,
        };

        Self {
            lattice_rotation: iota.map(|iota| LatticeRotation { iota, zeta }),
            cdrx: lambda,
            ddrx: gamma0,
            regularization,
        }
    }

    /// Builder pattern: enable lattice rotation
    pub fn with_lattice_rotation(mut self, iota: f64, zeta: f64) -> Self {
        self.lattice_rotation = Some(LatticeRotation { iota, zeta });
        self
    }

    /// Builder pattern: enable CDRX with weight `Lambda`
    pub fn with_cdrx(mut self, lambda: f64) -> Self {
        self.cdrx = Some(lambda);
        self
    }

    /// Builder pattern: enable DDRX with rate `Gamma0`
    pub fn with_ddrx(mut self, gamma0: f64) -> Self {
        self.ddrx = Some(gamma0);
        self
    }

    /// Builder pattern: enable regularization
    pub fn with_regularization(mut self, mode: RegularizationMode) -> Self {
        self.regularization = Some(mode);
        self
    }

    /// True when no process contributes to the evolution operator.
    pub fn is_inert(&self) -> bool {
        self.lattice_rotation.is_none()
            && self.cdrx.is_none()
            && self.ddrx.is_none()
            && self.regularization.is_none()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
