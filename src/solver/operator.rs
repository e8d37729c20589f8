//! Evolution operator assembly
//!
//! The fabric evolves by the linear system `dn/dt = M(n) · n` where
//!
//! ```text
//! M(n) = M_REG + Lambda·M_CDRX + M_LROT(D, W, iota, zeta)  +  Gamma0·M_DDRX(n, S)
//!        \__________________ constant ____________________/    \_ state dependent _/
//! ```
//!
//! The constant part is assembled once per run; only the DDRX term is
//! rebuilt every step. Each term is present only when its process is enabled
//! in [`ProcessWeights`].

use nalgebra::Matrix3;
use num_complex::Complex64;

use crate::models::{ProcessWeights, RegularizationMode};
use crate::physics::{FabricPhysics, Operator, StateVector};

// =================================================================================================
// Custom regularization
// =================================================================================================

/// Regularization built from the normalised angular Laplacian
///
/// ```text
/// M_REG = -nu‖D‖ · |∇² / (L(L+1))|^exponent      (elementwise |·| and power)
/// ```
///
/// The damping grows with harmonic degree, more steeply for larger
/// `exponent`, and scales with the strain-rate magnitude (Frobenius norm of
/// `D`). A truncation of `L = 0` has nothing to damp and yields the zero
/// operator.
pub fn custom_regularization(
    physics: &dyn FabricPhysics,
    nu: f64,
    exponent: f64,
    strain_rate: &Matrix3<f64>,
) -> Operator {
    let lcap = physics.truncation();
    if lcap == 0 {
        return physics.basis().zero_operator();
    }

    let normalisation = (lcap * (lcap + 1)) as f64;
    let rate_magnitude = nu * strain_rate.norm();

    physics
        .laplacian()
        .map(|entry| Complex64::new(-rate_magnitude * (entry.norm() / normalisation).powf(exponent), 0.0))
}

// =================================================================================================
// Assembler
// =================================================================================================

/// Builds the evolution operator of a run
pub struct OperatorAssembler<'a> {
    physics: &'a dyn FabricPhysics,
    processes: &'a ProcessWeights,
}

impl<'a> OperatorAssembler<'a> {
    pub fn new(physics: &'a dyn FabricPhysics, processes: &'a ProcessWeights) -> Self {
        Self { physics, processes }
    }

    /// Regularization term, if enabled
    pub fn regularization(&self, strain_rate: &Matrix3<f64>) -> Option<Operator> {
        self.processes.regularization.map(|mode| match mode {
            RegularizationMode::Default { nu } => {
                log::debug!("regularization: library operator, nu={nu}");
                self.physics.regularization(strain_rate) * Complex64::new(nu, 0.0)
            }
            RegularizationMode::Custom { nu, exponent } => {
                log::debug!("regularization: custom, nu={nu}, exponent={exponent}");
                custom_regularization(self.physics, nu, exponent, strain_rate)
            }
        })
    }

    /// CDRX term, if enabled
    pub fn cdrx(&self) -> Option<Operator> {
        self.processes.cdrx.map(|lambda| {
            log::debug!("cdrx: Lambda={lambda}");
            self.physics.cdrx() * Complex64::new(lambda, 0.0)
        })
    }

    /// Lattice rotation term, if enabled
    pub fn lattice_rotation(&self, strain_rate: &Matrix3<f64>, spin: &Matrix3<f64>) -> Option<Operator> {
        self.processes.lattice_rotation.map(|rotation| {
            log::debug!("lattice rotation: iota={}, zeta={}", rotation.iota, rotation.zeta);
            self.physics
                .lattice_rotation(strain_rate, spin, rotation.iota, rotation.zeta)
        })
    }

    /// Sum of every enabled state-independent term.
    ///
    /// The zero operator when no such process is enabled.
    pub fn assemble_constant(&self, strain_rate: &Matrix3<f64>, spin: &Matrix3<f64>) -> Operator {
        let mut constant = self.physics.basis().zero_operator();

        if let Some(lattice_rotation) = self.lattice_rotation(strain_rate, spin) {
            constant += lattice_rotation;
        }
        if let Some(cdrx) = self.cdrx() {
            constant += cdrx;
        }
        if let Some(regularization) = self.regularization(strain_rate) {
            constant += regularization;
        }

        constant
    }

    /// DDRX term at state `nlm`, if enabled
    pub fn state_dependent(&self, nlm: &StateVector, stress: &Matrix3<f64>) -> Option<Operator> {
        self.processes
            .ddrx
            .map(|gamma0| self.physics.ddrx(nlm, stress) * Complex64::new(gamma0, 0.0))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::SpectralBasis;
    use approx::assert_relative_eq;
    use nalgebra::DMatrix;

    /// Every operator is a distinct multiple of the identity, so the
    /// contribution of each process can be read back from the diagonal.
    struct Tagged {
        lcap: usize,
    }

    impl Tagged {
        fn scaled_identity(&self, value: f64) -> Operator {
            let n = self.nlm_len();
            DMatrix::from_diagonal_element(n, n, Complex64::new(value, 0.0))
        }
    }

    impl FabricPhysics for Tagged {
        fn truncation(&self) -> usize {
            self.lcap
        }
        fn regularization(&self, _: &Matrix3<f64>) -> Operator {
            self.scaled_identity(-1.0)
        }
        fn cdrx(&self) -> Operator {
            self.scaled_identity(-10.0)
        }
        fn lattice_rotation(&self, _: &Matrix3<f64>, _: &Matrix3<f64>, iota: f64, zeta: f64) -> Operator {
            self.scaled_identity(-100.0 * iota - 1000.0 * zeta)
        }
        fn ddrx(&self, nlm: &StateVector, _: &Matrix3<f64>) -> Operator {
            self.scaled_identity(nlm[0].re)
        }
        fn name(&self) -> &str {
            "Tagged"
        }
    }

    fn strain_rate() -> Matrix3<f64> {
        let mut d = Matrix3::zeros();
        d[(0, 2)] = 0.5;
        d[(2, 0)] = 0.5;
        d
    }

    #[test]
    fn test_no_process_gives_zero_operator() {
        let physics = Tagged { lcap: 4 };
        let processes = ProcessWeights::none();
        let assembler = OperatorAssembler::new(&physics, &processes);

        let constant = assembler.assemble_constant(&strain_rate(), &Matrix3::zeros());
        assert_eq!(constant.shape(), (15, 15));
        assert!(constant.iter().all(|c| c.norm() == 0.0));
        assert!(assembler.state_dependent(&SpectralBasis::new(4).isotropic(), &strain_rate()).is_none());
    }

    #[test]
    fn test_each_process_contributes_its_weighted_operator() {
        let physics = Tagged { lcap: 2 };
        let processes = ProcessWeights::none()
            .with_regularization(RegularizationMode::Default { nu: 2.0 })
            .with_cdrx(0.5)
            .with_lattice_rotation(1.0, 0.1);
        let assembler = OperatorAssembler::new(&physics, &processes);

        let constant = assembler.assemble_constant(&strain_rate(), &Matrix3::zeros());
        // -1·2 - 10·0.5 - (100 + 100)
        assert_relative_eq!(constant[(3, 3)].re, -207.0, epsilon = 1e-12);
        assert_eq!(constant[(0, 1)].re, 0.0);
    }

    #[test]
    fn test_missing_iota_disables_lattice_rotation() {
        let physics = Tagged { lcap: 2 };
        let processes = ProcessWeights::from_optional(None, 5.0, Some(1.0), None, None, None);
        let assembler = OperatorAssembler::new(&physics, &processes);

        let constant = assembler.assemble_constant(&strain_rate(), &Matrix3::zeros());
        assert_eq!(constant[(0, 0)].re, -10.0);
    }

    #[test]
    fn test_custom_exponent_overrides_library_operator() {
        let physics = Tagged { lcap: 2 };
        let processes = ProcessWeights::from_optional(None, 0.0, None, None, Some(1.0), Some(1.0));
        let assembler = OperatorAssembler::new(&physics, &processes);

        let regularization = assembler.regularization(&strain_rate()).unwrap();
        let expected = custom_regularization(&physics, 1.0, 1.0, &strain_rate());
        assert_eq!(regularization, expected);
        // l = 0 is never damped by the custom operator
        assert_eq!(regularization[(0, 0)].re.abs(), 0.0);
    }

    #[test]
    fn test_default_regularization_uses_library_operator() {
        let physics = Tagged { lcap: 2 };
        let processes = ProcessWeights::from_optional(None, 0.0, None, None, Some(3.0), None);
        let assembler = OperatorAssembler::new(&physics, &processes);

        let regularization = assembler.regularization(&strain_rate()).unwrap();
        assert_eq!(regularization, physics.scaled_identity(-3.0));
    }

    #[test]
    fn test_custom_regularization_values() {
        let physics = Tagged { lcap: 4 };
        let d = strain_rate();
        let nu = 2.0;
        let exponent = 2.0;
        let reg = custom_regularization(&physics, nu, exponent, &d);

        let rate = nu * d.norm();
        // l = 2: |−6/20|², l = 4: |−20/20|²
        assert_relative_eq!(reg[(1, 1)].re, -rate * 0.09, epsilon = 1e-12);
        assert_relative_eq!(reg[(14, 14)].re, -rate, epsilon = 1e-12);
        assert!(reg.iter().all(|c| c.im == 0.0));
        assert_eq!(reg[(1, 2)].re.abs(), 0.0);
    }

    #[test]
    fn test_custom_regularization_steeper_with_exponent() {
        let physics = Tagged { lcap: 6 };
        let d = strain_rate();
        let soft = custom_regularization(&physics, 1.0, 1.0, &d);
        let steep = custom_regularization(&physics, 1.0, 4.0, &d);

        // Below the truncation degree the steeper operator damps less
        assert!(steep[(1, 1)].re.abs() < soft[(1, 1)].re.abs());
        // At the truncation degree both reach the full rate
        assert_relative_eq!(steep[(27, 27)].re, soft[(27, 27)].re, epsilon = 1e-12);
    }

    #[test]
    fn test_custom_regularization_zero_truncation() {
        let physics = Tagged { lcap: 0 };
        let reg = custom_regularization(&physics, 1.0, 1.0, &strain_rate());
        assert_eq!(reg.shape(), (1, 1));
        assert_eq!(reg[(0, 0)].re, 0.0);
    }

    #[test]
    fn test_assembly_independent_of_any_state() {
        // The constant operator only sees truncation and kinematics
        let physics = Tagged { lcap: 2 };
        let processes = ProcessWeights::none().with_cdrx(1.0).with_lattice_rotation(1.0, 0.0);
        let assembler = OperatorAssembler::new(&physics, &processes);

        let first = assembler.assemble_constant(&strain_rate(), &Matrix3::zeros());
        let second = assembler.assemble_constant(&strain_rate(), &Matrix3::zeros());
        assert_eq!(first, second);
    }

    #[test]
    fn test_state_dependent_term() {
        let physics = Tagged { lcap: 2 };
        let processes = ProcessWeights::none().with_ddrx(2.0);
        let assembler = OperatorAssembler::new(&physics, &processes);

        let nlm = SpectralBasis::new(2).isotropic();
        let ddrx = assembler.state_dependent(&nlm, &strain_rate()).unwrap();
        assert_relative_eq!(ddrx[(2, 2)].re, 2.0 * nlm[0].re, epsilon = 1e-14);
        // DDRX never leaks into the constant part
        let constant = assembler.assemble_constant(&strain_rate(), &Matrix3::zeros());
        assert!(constant.iter().all(|c| c.norm() == 0.0));
    }
}
