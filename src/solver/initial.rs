//! Initial fabric state and history allocation
//!
//! The coefficient history is allocated once at full size, `(Nt+1) × nlm_len`,
//! and row 0 receives the initial state. Rows `1..=Nt` are written by the
//! integrator, one per step.

use ndarray::Array2;
use num_complex::Complex64;

use crate::physics::{SpectralBasis, StateVector};

/// Initial orientation distribution of the parcel
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InitialState {
    /// Uniform distribution, `n_0^0 = 1/√(4π)` and every other slot zero
    #[default]
    Isotropic,

    /// Caller-supplied coefficients, copied verbatim
    ///
    /// Neither normalisation nor positivity of the distribution is checked.
    Given(StateVector),
}

impl InitialState {
    /// Coefficient vector this initial state stands for.
    pub fn resolve(&self, basis: &SpectralBasis) -> StateVector {
        match self {
            InitialState::Isotropic => basis.isotropic(),
            InitialState::Given(nlm) => nlm.clone(),
        }
    }

    /// Length of the vector, when it is fixed by the caller.
    pub fn given_len(&self) -> Option<usize> {
        match self {
            InitialState::Isotropic => None,
            InitialState::Given(nlm) => Some(nlm.len()),
        }
    }
}

impl From<StateVector> for InitialState {
    fn from(nlm: StateVector) -> Self {
        InitialState::Given(nlm)
    }
}

/// Allocate the `(time_steps + 1) × nlm_len` history with row 0 initialised.
pub fn allocate_history(
    basis: &SpectralBasis,
    time_steps: usize,
    initial: &InitialState,
) -> Array2<Complex64> {
    let mut history = Array2::from_elem((time_steps + 1, basis.nlm_len()), Complex64::new(0.0, 0.0));
    let nlm0 = initial.resolve(basis);
    for (slot, value) in history.row_mut(0).iter_mut().zip(nlm0.iter()) {
        *slot = *value;
    }
    history
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;
    use std::f64::consts::PI;

    #[test]
    fn test_isotropic_history() {
        let basis = SpectralBasis::new(4);
        let history = allocate_history(&basis, 10, &InitialState::Isotropic);

        assert_eq!(history.dim(), (11, 15));
        assert_eq!(history[[0, 0]], Complex64::new(1.0 / (4.0 * PI).sqrt(), 0.0));
        assert!(history.row(0).iter().skip(1).all(|c| *c == Complex64::new(0.0, 0.0)));
        assert!(history.rows().into_iter().skip(1).all(|row| row.iter().all(|c| c.norm() == 0.0)));
    }

    #[test]
    fn test_given_state_copied_verbatim() {
        let basis = SpectralBasis::new(2);
        let nlm0 = DVector::from_fn(6, |i, _| Complex64::new(i as f64, -(i as f64)));
        let history = allocate_history(&basis, 3, &InitialState::from(nlm0.clone()));

        for (i, value) in history.row(0).iter().enumerate() {
            assert_eq!(*value, nlm0[i]);
        }
    }

    #[test]
    fn test_given_len() {
        assert_eq!(InitialState::Isotropic.given_len(), None);
        let nlm0 = DVector::from_element(6, Complex64::new(0.0, 0.0));
        assert_eq!(InitialState::Given(nlm0).given_len(), Some(6));
    }
}
