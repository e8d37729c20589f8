//! Solver traits and types
//!
//! # Design Philosophy
//!
//! - `Solver` is the interface every time integrator implements
//! - `IntegratorConfiguration` says HOW to step (count, size, bounds flag)
//! - `SimulationResult` carries the coefficient history and the trajectory
//!   that drove it, plus string metadata for diagnostics

use nalgebra::{DVector, Matrix3};
use ndarray::Array2;
use num_complex::Complex64;
use std::collections::HashMap;

use crate::error::{FabricError, FabricResult};
use crate::physics::StateVector;
use crate::solver::observer::{NoProgress, StepObserver};
use crate::solver::scenario::Scenario;

/// Default number of time steps
pub const DEFAULT_TIME_STEPS: usize = 100;

// =================================================================================================
// Step size
// =================================================================================================

/// How the time-step size is chosen
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum StepSize {
    /// `dt = strain_to_time(target, T) / Nt`
    #[default]
    FromStrainTarget,

    /// Caller-supplied `dt`; the strain target is then not used for timing
    Fixed(f64),
}

// =================================================================================================
// Integrator configuration
// =================================================================================================

/// Configuration of a parcel integration
///
/// # Examples
///
/// ```rust
/// use fabric_rs::solver::{IntegratorConfiguration, StepSize};
///
/// // Nt = 100, dt derived from the strain target
/// let config = IntegratorConfiguration::default();
/// assert_eq!(config.time_steps, 100);
///
/// // Nt = 500 with an explicit step
/// let config = IntegratorConfiguration::new(500).with_dt(1e-3);
/// assert_eq!(config.step, StepSize::Fixed(1e-3));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct IntegratorConfiguration {
    /// Number of time steps `Nt`
    pub time_steps: usize,

    pub step: StepSize,

    /// Accepted for interface compatibility; stepping ignores it
    pub apply_bounds: bool,
}

impl Default for IntegratorConfiguration {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_STEPS)
    }
}

impl IntegratorConfiguration {
    pub fn new(time_steps: usize) -> Self {
        Self {
            time_steps,
            step: StepSize::FromStrainTarget,
            apply_bounds: false,
        }
    }

    /// Builder pattern: fix the time-step size
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.step = StepSize::Fixed(dt);
        self
    }

    /// Builder pattern: set the bounds flag
    pub fn with_apply_bounds(mut self, apply_bounds: bool) -> Self {
        self.apply_bounds = apply_bounds;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> FabricResult<()> {
        if self.time_steps == 0 {
            return Err(FabricError::InvalidConfiguration(
                "time steps must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Output of a parcel integration
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// `dt · n` for `n = 0..=Nt`
    pub time_points: Vec<f64>,

    /// Coefficient history, one row per time index (`Nt+1 × nlm_len`)
    pub nlm: Array2<Complex64>,

    /// Deformation gradient at every time index
    pub deformation_gradients: Vec<Matrix3<f64>>,

    /// Constant velocity gradient of the mode
    pub velocity_gradient: Matrix3<f64>,

    /// Time-step size
    pub dt: f64,

    metadata: HashMap<String, String>,
}

impl SimulationResult {
    pub fn new(
        time_points: Vec<f64>,
        nlm: Array2<Complex64>,
        deformation_gradients: Vec<Matrix3<f64>>,
        velocity_gradient: Matrix3<f64>,
        dt: f64,
    ) -> Self {
        Self {
            time_points,
            nlm,
            deformation_gradients,
            velocity_gradient,
            dt,
            metadata: HashMap::new(),
        }
    }

    /// Number of stored time indices (`Nt + 1`)
    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    /// Length of each coefficient vector
    pub fn nlm_len(&self) -> usize {
        self.nlm.ncols()
    }

    /// Coefficient vector at time index `index`
    pub fn state(&self, index: usize) -> Option<StateVector> {
        if index >= self.nlm.nrows() {
            return None;
        }
        Some(DVector::from_iterator(
            self.nlm_len(),
            self.nlm.row(index).iter().copied(),
        ))
    }

    /// Coefficient vector at the last time index
    pub fn final_state(&self) -> Option<StateVector> {
        self.nlm.nrows().checked_sub(1).and_then(|last| self.state(last))
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Trait for parcel time integrators
///
/// A solver is stateless and can be reused for any number of scenarios.
pub trait Solver {
    /// Integrate `scenario`, reporting each completed step to `observer`.
    fn solve_observed(
        &self,
        scenario: &Scenario,
        config: &IntegratorConfiguration,
        observer: &mut dyn StepObserver,
    ) -> FabricResult<SimulationResult>;

    /// Integrate `scenario` without progress reporting.
    fn solve(&self, scenario: &Scenario, config: &IntegratorConfiguration) -> FabricResult<SimulationResult> {
        self.solve_observed(scenario, config, &mut NoProgress)
    }

    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_default_configuration() {
        let config = IntegratorConfiguration::default();
        assert_eq!(config.time_steps, DEFAULT_TIME_STEPS);
        assert_eq!(config.step, StepSize::FromStrainTarget);
        assert!(!config.apply_bounds);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_steps_rejected() {
        let err = IntegratorConfiguration::new(0).validate().unwrap_err();
        assert!(err.to_string().contains("time steps"));
    }

    #[test]
    fn test_explicit_dt_taken_as_given() {
        assert!(IntegratorConfiguration::new(10).with_dt(f64::NAN).validate().is_ok());
        assert!(IntegratorConfiguration::new(10).with_dt(-0.01).validate().is_ok());
    }

    #[test]
    fn test_result_accessors() {
        let one = Complex64::new(1.0, 0.0);
        let two = Complex64::new(2.0, -1.0);
        let nlm = array![[one, two], [two, one]];
        let mut result = SimulationResult::new(
            vec![0.0, 0.5],
            nlm,
            vec![Matrix3::identity(); 2],
            Matrix3::zeros(),
            0.5,
        );

        assert_eq!(result.len(), 2);
        assert_eq!(result.nlm_len(), 2);
        assert_eq!(result.state(0).unwrap()[1], two);
        assert_eq!(result.final_state().unwrap()[0], two);
        assert!(result.state(2).is_none());

        result.add_metadata("solver", "Forward Euler");
        assert_eq!(result.get_metadata("solver"), Some("Forward Euler"));
        assert_eq!(result.get_metadata("missing"), None);
    }
}
