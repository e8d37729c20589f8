//! Run models: how the parcel is deformed and which fabric processes act on it
//!
//! - [`deformation`]: mode of deformation (simple shear, pure shear)
//! - [`processes`]: weights of lattice rotation, CDRX, DDRX and regularization

pub mod deformation;
pub mod processes;

pub use deformation::{DeformationMode, ModeConfig, ModeDescriptor, DEFAULT_TIME_SCALE};
pub use processes::{LatticeRotation, ProcessWeights, RegularizationMode};
