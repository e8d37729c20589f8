//! Mock fabric library with analytic behaviour
//!
//! Every operator is diagonal in the `(l, m)` slots, so the evolution of a
//! single slot can be written down by hand:
//!
//! | process          | operator                             |
//! |------------------|--------------------------------------|
//! | regularization   | `‖D‖ · ∇²` (entries `-‖D‖ l(l+1)`)    |
//! | CDRX             | `∇²` (trait default)                 |
//! | lattice rotation | `i · iota · ‖W‖ · m` on the diagonal |
//! | DDRX             | `Re(n_0) · ‖S‖ · I`                  |

use fabric_rs::physics::{FabricPhysics, Operator, StateVector};
use nalgebra::{DMatrix, DVector, Matrix3};
use num_complex::Complex64;

pub struct DiagonalFabric {
    lcap: usize,
}

impl DiagonalFabric {
    pub fn new(lcap: usize) -> Self {
        Self { lcap }
    }
}

impl FabricPhysics for DiagonalFabric {
    fn truncation(&self) -> usize {
        self.lcap
    }

    fn regularization(&self, strain_rate: &Matrix3<f64>) -> Operator {
        self.laplacian() * Complex64::new(strain_rate.norm(), 0.0)
    }

    fn lattice_rotation(&self, _strain_rate: &Matrix3<f64>, spin: &Matrix3<f64>, iota: f64, _zeta: f64) -> Operator {
        let diagonal: Vec<Complex64> = self
            .basis()
            .lm()
            .into_iter()
            .map(|(_, m)| Complex64::new(0.0, iota * spin.norm() * m as f64))
            .collect();
        DMatrix::from_diagonal(&DVector::from_vec(diagonal))
    }

    fn ddrx(&self, nlm: &StateVector, stress: &Matrix3<f64>) -> Operator {
        let n = self.nlm_len();
        DMatrix::identity(n, n) * Complex64::new(nlm[0].re * stress.norm(), 0.0)
    }

    fn name(&self) -> &str {
        "DiagonalFabric"
    }
}
