//! Fabric physics
//!
//! This module provides the spectral basis, the analytic kinematics and the
//! trait through which the integrator consumes a fabric physics library.
//!
//! # Core Concepts
//!
//! - **Spectral basis**: truncation `L`, slot layout of `n_l^m`, angular Laplacian
//! - **Kinematics**: velocity and deformation gradients of simple and pure shear
//! - **Fabric physics**: operators of lattice rotation, CDRX, DDRX and regularization
//!
//! # Architecture
//!
//! Fabric physics is **separate from the numerical integration**:
//! - The physics provides the **operators**
//! - The solver provides the **method** that combines and steps them
//!
//! # Implementing a Fabric Library
//!
//! ```rust
//! use fabric_rs::physics::{FabricPhysics, Operator, StateVector};
//! use nalgebra::Matrix3;
//!
//! struct DiffusionOnly {
//!     lcap: usize,
//! }
//!
//! impl FabricPhysics for DiffusionOnly {
//!     fn truncation(&self) -> usize { self.lcap }
//!
//!     fn regularization(&self, strain_rate: &Matrix3<f64>) -> Operator {
//!         self.laplacian() * num_complex::Complex64::new(strain_rate.norm(), 0.0)
//!     }
//!
//!     fn lattice_rotation(&self, _: &Matrix3<f64>, _: &Matrix3<f64>, _: f64, _: f64) -> Operator {
//!         self.basis().zero_operator()
//!     }
//!
//!     fn ddrx(&self, _: &StateVector, _: &Matrix3<f64>) -> Operator {
//!         self.basis().zero_operator()
//!     }
//!
//!     fn name(&self) -> &str { "Diffusion only" }
//! }
//!
//! let physics = DiffusionOnly { lcap: 4 };
//! assert_eq!(physics.nlm_len(), 15);
//! ```

pub mod basis;
pub mod kinematics;
pub mod traits;

pub use basis::{isotropic_coefficient, nlm_len, SpectralBasis};
pub use traits::{FabricPhysics, Operator, StateVector};
