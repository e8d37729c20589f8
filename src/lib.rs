//! fabric-rs: Lagrangian Parcel Fabric Integrator
//!
//! Integrates the crystal orientation distribution of a single material
//! parcel, expanded in spherical-harmonic coefficients `n_l^m`, under a
//! constant-rate simple or pure shear. Built with Rust for performance and
//! safety.
//!
//! # Architecture
//!
//! fabric-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - A fabric library provides the operators (lattice rotation, CDRX,
//!      DDRX, regularization) through [`physics::FabricPhysics`]
//!    - The solver provides the method that combines and steps them
//!
//! 2. **Extensibility and Type Safety**
//!    - Trait-based design for the physics, the solver and the exporters
//!    - Modes of deformation and process weights are typed, not stringly
//!
//! # Quick Start
//!
//! ```rust
//! use fabric_rs::prelude::*;
//! use nalgebra::Matrix3;
//!
//! # struct Inert;
//! # impl FabricPhysics for Inert {
//! #     fn truncation(&self) -> usize { 4 }
//! #     fn regularization(&self, _: &Matrix3<f64>) -> Operator { self.basis().zero_operator() }
//! #     fn lattice_rotation(&self, _: &Matrix3<f64>, _: &Matrix3<f64>, _: f64, _: f64) -> Operator {
//! #         self.basis().zero_operator()
//! #     }
//! #     fn ddrx(&self, _: &StateVector, _: &Matrix3<f64>) -> Operator { self.basis().zero_operator() }
//! #     fn name(&self) -> &str { "Inert" }
//! # }
//! # fn main() -> Result<(), FabricError> {
//! // 1. Describe the parcel: simple shear in plane 1, strain target 0.5
//! let scenario = Scenario::new(Box::new(Inert), ModeDescriptor::simple_shear(1), 0.5)
//!     .with_processes(ProcessWeights::none().with_lattice_rotation(1.0, 0.0));
//!
//! // 2. Configure the integrator
//! let config = IntegratorConfiguration::new(50);
//!
//! // 3. Run
//! let result = EulerSolver::new().solve(&scenario, &config)?;
//!
//! // 4. Access results
//! assert_eq!(result.len(), 51);
//! assert_eq!(result.nlm_len(), 15);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: spectral basis, kinematics and the fabric physics trait
//! - [`models`]: modes of deformation and process weights
//! - [`solver`]: trajectory, operator assembly and time integration
//! - [`output`]: result export
//! - [`error`]: error type shared by every module

pub mod error;

// Core modules
pub mod physics;

pub mod models;
pub mod solver;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use fabric_rs::prelude::*;
    //! ```
    pub use crate::error::{FabricError, FabricResult};
    pub use crate::models::{DeformationMode,
                            ModeConfig,
                            ModeDescriptor,
                            ProcessWeights,
                            RegularizationMode};
    pub use crate::physics::{FabricPhysics,
                             Operator,
                             SpectralBasis,
                             StateVector};
    pub use crate::solver::{EulerSolver,
                            InitialState,
                            IntegratorConfiguration,
                            Scenario,
                            SimulationResult,
                            Solver,
                            StepSize};
}
