//! Forward Euler parcel integrator
//!
//! # Mathematical Background
//!
//! The fabric of a parcel evolves by the linear system
//!
//! ```text
//! dn/dt = M(n) · n
//! ```
//!
//! which the Forward Euler scheme advances as
//!
//! ```text
//! n_{t} = n_{t-1} + dt · M(n_{t-1}) · n_{t-1}
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (error ~ O(dt))
//! - **Stability**: Conditionally stable, never checked here
//! - **Complexity**: 1 operator assembly and 1 matrix-vector product per step
//!
//! Step size is fixed for the whole run. Divergence under a large `dt` or
//! strong operators is left in the output for the caller to inspect.
//!
//! # Example
//!
//! ```rust,ignore
//! use fabric_rs::solver::{EulerSolver, Solver, IntegratorConfiguration};
//!
//! let solver = EulerSolver::new();
//! let config = IntegratorConfiguration::new(100);
//! let result = solver.solve(&scenario, &config)?;
//! ```

use num_complex::Complex64;

use crate::error::FabricResult;
use crate::solver::initial::allocate_history;
use crate::solver::observer::StepObserver;
use crate::solver::operator::OperatorAssembler;
use crate::solver::trajectory::DeformationTrajectory;
use crate::solver::{apply_operator, IntegratorConfiguration, Scenario, SimulationResult, Solver};

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver
///
/// # Algorithm
///
/// 1. Validate configuration and scenario (the only failure point)
/// 2. Generate the deformation trajectory: `dt`, `F(t)`, `∇u`, `D`, `W`
/// 3. Allocate the coefficient history, row 0 = initial fabric
/// 4. Assemble the constant operator once
/// 5. For each step t = 1, ..., Nt:
///    - Add the DDRX operator at the previous state (if enabled)
///    - Update: n_t = n_{t-1} + dt · M · n_{t-1}
///    - Store row t and notify the observer
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use fabric_rs::solver::{EulerSolver, Solver};
    ///
    /// let solver = EulerSolver::new();
    /// assert_eq!(solver.name(), "Forward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for EulerSolver {

    fn solve_observed(
        &self,
        scenario: &Scenario,
        config: &IntegratorConfiguration,
        observer: &mut dyn StepObserver,
    ) -> FabricResult<SimulationResult> {

        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        if config.apply_bounds {
            log::warn!("apply_bounds is accepted but not enforced by the integrator");
        }

        let physics = scenario.physics.as_ref();
        let time_steps = config.time_steps;

        // ====== Step 2: Kinematics ======

        let trajectory = DeformationTrajectory::generate(
            physics,
            &scenario.mode,
            scenario.strain_target,
            time_steps,
            config.step,
        )?;
        let dt = trajectory.dt;

        // ====== Step 3: State vector ======

        let basis = physics.basis();
        let mut nlm = allocate_history(&basis, time_steps, &scenario.initial);

        log::debug!(
            "MOD={} :: Nt={} :: dt={:.2e} :: nlm_len={}",
            scenario.mode.mode.tag(),
            time_steps,
            dt,
            basis.nlm_len()
        );

        // ====== Step 4: Constant operators ======

        let assembler = OperatorAssembler::new(physics, &scenario.processes);
        let constant = assembler.assemble_constant(&trajectory.strain_rate, &trajectory.spin);

        // ====== Step 5: Time Integration ======

        let step_size = Complex64::from(dt);
        let mut state = scenario.initial.resolve(&basis);
        observer.on_start(time_steps);

        for step in 1..=time_steps {
            // Only the DDRX term depends on the state
            let next = match assembler.state_dependent(&state, &trajectory.stress) {
                Some(ddrx) => {
                    let operator = &constant + ddrx;
                    &state + apply_operator(&operator, &state) * step_size
                }
                None => &state + apply_operator(&constant, &state) * step_size,
            };

            for (slot, value) in nlm.row_mut(step).iter_mut().zip(next.iter()) {
                *slot = *value;
            }
            state = next;

            log::trace!("step {}/{} :: |n| = {:.6e}", step, time_steps, state.norm());
            observer.on_step(step, time_steps);
        }

        observer.on_finish();

        // ====== Step 6: Build Result ======

        let DeformationTrajectory {
            time_points,
            deformation_gradients,
            velocity_gradient,
            ..
        } = trajectory;

        let mut result = SimulationResult::new(time_points, nlm, deformation_gradients, velocity_gradient, dt);

        result.add_metadata("solver", self.name());
        result.add_metadata("physics", physics.name());
        result.add_metadata("mode", &scenario.mode.mode.to_string());
        result.add_metadata("time scale", &scenario.mode.time_scale.to_string());
        result.add_metadata("strain target", &scenario.strain_target.to_string());
        result.add_metadata("time steps", &time_steps.to_string());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("truncation", &basis.truncation().to_string());

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
