//! Fabric physics trait
//!
//! This module defines the contract between the parcel integrator and the
//! fabric physics it drives:
//! - `FabricPhysics`: trait for every fabric library the integrator can use
//! - `Operator` / `StateVector`: the complex matrix and vector types in play

use nalgebra::{DMatrix, DVector, Matrix3};
use num_complex::Complex64;

use crate::physics::basis::SpectralBasis;
use crate::physics::kinematics;

/// Square complex matrix acting on coefficient vectors
pub type Operator = DMatrix<Complex64>;

/// Coefficient vector `n_l^m` of an orientation distribution
pub type StateVector = DVector<Complex64>;

// ==================================================================================================
// Fabric Physics Trait
// =================================================================================================

/// Trait for fabric physics libraries
///
/// # Responsibility
/// Builds the linear operators of each fabric process for a given
/// truncation and kinematics. Does NOT integrate them (that's the Solver's
/// job).
///
/// The physics provides the operators, the Solver provides the numerics
/// that combine and step them.
///
/// # Operators
///
/// Every operator returned has shape `nlm_len × nlm_len`. Apart from
/// [`ddrx`](FabricPhysics::ddrx), none of them depends on the evolving
/// coefficient state, so the integrator evaluates them once per run.
///
/// # Kinematics
///
/// The analytic kinematic primitives are provided methods delegating to
/// [`crate::physics::kinematics`]. A library with its own conventions can
/// override them.
pub trait FabricPhysics: Send + Sync {

    /// Spectral truncation degree `L`
    fn truncation(&self) -> usize;

    /// Basis matching the truncation
    fn basis(&self) -> SpectralBasis {
        SpectralBasis::new(self.truncation())
    }

    /// Length of the coefficient vector
    fn nlm_len(&self) -> usize {
        self.basis().nlm_len()
    }

    /// Angular Laplacian on the truncated basis
    fn laplacian(&self) -> Operator {
        self.basis().laplacian()
    }

    /// Base regularization operator, before scaling by `nu`
    fn regularization(&self, strain_rate: &Matrix3<f64>) -> Operator;

    /// Continuous dynamic recrystallization (rotation recrystallization)
    ///
    /// Modelled as orientation-space diffusion, so the default is the
    /// angular Laplacian.
    fn cdrx(&self) -> Operator {
        self.laplacian()
    }

    /// Lattice rotation driven by strain rate `D` and spin `W`
    ///
    /// `iota` and `zeta` are the rotation-rate parameters of the plastic spin.
    fn lattice_rotation(
        &self,
        strain_rate: &Matrix3<f64>,
        spin: &Matrix3<f64>,
        iota: f64,
        zeta: f64,
    ) -> Operator;

    /// Discontinuous dynamic recrystallization (migration recrystallization)
    ///
    /// The only state-dependent operator: a function of the current
    /// coefficients and the (coaxial) stress.
    fn ddrx(&self, nlm: &StateVector, stress: &Matrix3<f64>) -> Operator;

    /// Name of the library (used to display and logging)
    fn name(&self) -> &str;

    // ====================================== Kinematics ======================================

    fn simple_shear_ugrad(&self, plane: usize, t_c: f64) -> Matrix3<f64> {
        kinematics::simple_shear_ugrad(plane, t_c)
    }

    fn simple_shear_f(&self, plane: usize, t_c: f64, t: f64) -> Matrix3<f64> {
        kinematics::simple_shear_f(plane, t_c, t)
    }

    fn simple_shear_gamma_to_t(&self, gamma: f64, t_c: f64) -> f64 {
        kinematics::simple_shear_gamma_to_t(gamma, t_c)
    }

    fn pure_shear_ugrad(&self, axis: usize, ratio: f64, t_c: f64) -> Matrix3<f64> {
        kinematics::pure_shear_ugrad(axis, ratio, t_c)
    }

    fn pure_shear_f(&self, axis: usize, ratio: f64, t_c: f64, t: f64) -> Matrix3<f64> {
        kinematics::pure_shear_f(axis, ratio, t_c, t)
    }

    fn pure_shear_strain_to_t(&self, strain: f64, t_c: f64) -> f64 {
        kinematics::pure_shear_strain_to_t(strain, t_c)
    }

    fn ugrad_to_d_and_w(&self, ugrad: &Matrix3<f64>) -> (Matrix3<f64>, Matrix3<f64>) {
        kinematics::ugrad_to_d_and_w(ugrad)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    struct Bare {
        lcap: usize,
    }

    impl FabricPhysics for Bare {
        fn truncation(&self) -> usize {
            self.lcap
        }

        fn regularization(&self, _strain_rate: &Matrix3<f64>) -> Operator {
            self.basis().zero_operator()
        }

        fn lattice_rotation(&self, _: &Matrix3<f64>, _: &Matrix3<f64>, _: f64, _: f64) -> Operator {
            self.basis().zero_operator()
        }

        fn ddrx(&self, _nlm: &StateVector, _stress: &Matrix3<f64>) -> Operator {
            self.basis().zero_operator()
        }

        fn name(&self) -> &str {
            "Bare"
        }
    }

    #[test]
    fn test_provided_methods_follow_truncation() {
        let physics = Bare { lcap: 6 };
        assert_eq!(physics.nlm_len(), 28);
        assert_eq!(physics.laplacian().nrows(), 28);
        assert_eq!(physics.cdrx(), physics.laplacian());
    }

    #[test]
    fn test_kinematics_delegate() {
        let physics = Bare { lcap: 2 };
        assert_eq!(physics.simple_shear_ugrad(1, 1.0), kinematics::simple_shear_ugrad(1, 1.0));
        assert_eq!(physics.pure_shear_strain_to_t(-0.2, 1.0), kinematics::pure_shear_strain_to_t(-0.2, 1.0));
        let (d, w) = physics.ugrad_to_d_and_w(&physics.simple_shear_ugrad(0, 1.0));
        assert_eq!(d[(1, 2)], 0.5);
        assert_eq!(w[(1, 2)], 0.5);
    }
}
