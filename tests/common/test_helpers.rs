//! Helper functions for integration tests

use fabric_rs::physics::{SpectralBasis, StateVector};
use nalgebra::DVector;
use num_complex::Complex64;

/// Assert that two coefficient vectors are close (within tolerance)
pub fn assert_states_close(state1: &StateVector, state2: &StateVector, tolerance: f64, message: &str) {
    assert_eq!(state1.len(), state2.len(), "{}: Dimension mismatch", message);

    for (i, (v1, v2)) in state1.iter().zip(state2.iter()).enumerate() {
        let diff = (v1 - v2).norm();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Relative error between computed and expected values
pub fn relative_error(computed: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-15 {
        computed.abs()
    } else {
        ((computed - expected) / expected).abs()
    }
}

/// State with every coefficient equal to one
pub fn ones_state(lcap: usize) -> StateVector {
    DVector::from_element(SpectralBasis::new(lcap).nlm_len(), Complex64::new(1.0, 0.0))
}

/// Harmonic degree `l` of every slot, in slot order
pub fn slot_degrees(lcap: usize) -> Vec<usize> {
    SpectralBasis::new(lcap).lm().into_iter().map(|(l, _)| l).collect()
}
