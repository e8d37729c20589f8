//! Truncated spectral basis for orientation distributions
//!
//! The orientation distribution of crystal c-axes is antipodally symmetric,
//! so only even harmonic degrees carry information. A truncation `L` keeps
//! degrees `l = 0, 2, ..., L` with all orders `m = -l..=l`:
//!
//! ```text
//! slots:   n_0^0 | n_2^-2 n_2^-1 n_2^0 n_2^1 n_2^2 | n_4^-4 ... | ... n_L^L
//! length:  Σ (2l + 1) over even l ≤ L  =  (L + 1)(L + 2) / 2
//! ```
//!
//! The coefficient `n_0^0` alone fixes the isotropic distribution,
//! `n_0^0 = 1/√(4π)` for a unit-normalised ODF.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Zeroth coefficient of the unit-normalised isotropic distribution.
pub fn isotropic_coefficient() -> f64 {
    1.0 / (4.0 * PI).sqrt()
}

/// Number of expansion coefficients for truncation `lcap`.
pub const fn nlm_len(lcap: usize) -> usize {
    (lcap + 1) * (lcap + 2) / 2
}

/// Spectral truncation shared by the state vector and every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectralBasis {
    lcap: usize,
}

impl SpectralBasis {
    pub fn new(lcap: usize) -> Self {
        Self { lcap }
    }

    /// Truncation degree `L`
    pub fn truncation(&self) -> usize {
        self.lcap
    }

    /// Only even truncations enumerate exactly `nlm_len` slots.
    pub fn is_supported(&self) -> bool {
        self.lcap % 2 == 0
    }

    pub fn nlm_len(&self) -> usize {
        nlm_len(self.lcap)
    }

    /// `(l, m)` pair of every slot, in storage order.
    pub fn lm(&self) -> Vec<(usize, i64)> {
        (0..=self.lcap)
            .step_by(2)
            .flat_map(|l| {
                let li = l as i64;
                (-li..=li).map(move |m| (l, m))
            })
            .collect()
    }

    /// Angular Laplacian: diagonal with eigenvalue `-l(l+1)` on each slot.
    pub fn laplacian(&self) -> DMatrix<Complex64> {
        let diagonal: Vec<Complex64> = self
            .lm()
            .into_iter()
            .map(|(l, _)| Complex64::new(-((l * (l + 1)) as f64), 0.0))
            .collect();
        DMatrix::from_diagonal(&DVector::from_vec(diagonal))
    }

    /// Coefficient vector of the isotropic distribution.
    pub fn isotropic(&self) -> DVector<Complex64> {
        let mut nlm = DVector::from_element(self.nlm_len(), Complex64::new(0.0, 0.0));
        nlm[0] = Complex64::new(isotropic_coefficient(), 0.0);
        nlm
    }

    /// Square zero operator of the basis size.
    pub fn zero_operator(&self) -> DMatrix<Complex64> {
        let n = self.nlm_len();
        DMatrix::from_element(n, n, Complex64::new(0.0, 0.0))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
