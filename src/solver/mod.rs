//! Parcel time integration
//!
//! This module turns a [`Scenario`] (WHAT to integrate) and an
//! [`IntegratorConfiguration`] (HOW to step) into a [`SimulationResult`].
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver` trait, configuration and result types
//! - **`trajectory`**: deformation trajectory generator (`dt`, `F(t)`, `∇u`, `D`, `W`)
//! - **`initial`**: initial fabric and coefficient-history allocation
//! - **`operator`**: evolution operator assembly and custom regularization
//! - **`observer`**: per-step progress observers
//! - **`scenario`**: physics + mode + processes + initial fabric
//! - **Solver implementations**:
//!   - `EulerSolver`: Forward Euler method
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌──────────────────┐
//! │ Mode descriptor  │
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ Trajectory       │  dt, F(t), ∇u → D, W
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ Operator         │  M_LROT + Lambda·M_CDRX + M_REG   (once)
//! │ assembler        │
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ Euler loop       │  + Gamma0·M_DDRX(n)               (every step)
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ Simulation       │  n(t), F(t), t, ∇u
//! │ result           │
//! └──────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust,ignore
//! use fabric_rs::models::{ModeDescriptor, ProcessWeights};
//! use fabric_rs::solver::{EulerSolver, IntegratorConfiguration, Scenario, Solver};
//!
//! let scenario = Scenario::new(Box::new(physics), ModeDescriptor::simple_shear(1), 0.5)
//!     .with_processes(ProcessWeights::none().with_lattice_rotation(1.0, 0.0));
//!
//! let result = EulerSolver::new().solve(&scenario, &IntegratorConfiguration::new(100))?;
//! println!("{} states of {} coefficients", result.len(), result.nlm_len());
//! ```
//!
//! # Error Handling
//!
//! Solvers only fail while validating their inputs: unknown or unsupported
//! mode, missing geometry, zero steps, mismatched initial state. Numerical
//! divergence is never reported as an error.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod scenario;
mod methods;

pub mod initial;
pub mod observer;
pub mod operator;
pub mod trajectory;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// One step costs a single dense complex product of `nlm_len²` multiply-adds.
// Below a few hundred rows that is tens of microseconds, the same order as a
// rayon fork-join, so small truncations stay on one thread.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::physics::{Operator, StateVector};

/// Operator rows from which [`apply_operator()`] splits the product over threads.
///
/// 256 keeps every `L <= 20` (231 rows) sequential and parallelises from
/// `L = 22` (276 rows) upwards. The `Parallel Product` bench group measures
/// both paths on the same operators.
const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Current row count from which the operator-vector product runs in parallel.
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Change the row count from which the operator-vector product runs in parallel.
///
/// Only has an effect with the `parallel` feature.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// ```rust
/// use fabric_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let before = parallel_threshold();
/// set_parallel_threshold(usize::MAX); // never split
/// assert_eq!(parallel_threshold(), usize::MAX);
/// set_parallel_threshold(before);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

#[cfg(test)]
static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Test-only override of the threshold, undone on drop.
///
/// Tests holding one are serialised.
#[cfg(test)]
pub(crate) struct ThresholdOverride {
    restore: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdOverride {
    pub(crate) fn set(threshold: usize) -> Self {
        let lock = THRESHOLD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let restore = parallel_threshold();
        set_parallel_threshold(threshold);
        Self { restore, _lock: lock }
    }
}

#[cfg(test)]
impl Drop for ThresholdOverride {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.restore, Ordering::Relaxed);
    }
}

// =================================================================================================
// Operator application
// =================================================================================================

/// Compute `operator · x`.
///
/// With the `parallel` feature and at least [`parallel_threshold()`] rows,
/// the rows are cut into one contiguous block per rayon thread and each
/// block is an independent nalgebra product. Results of the two paths agree
/// to rounding; a given path and thread count is deterministic.
pub fn apply_operator(operator: &Operator, x: &StateVector) -> StateVector {
    #[cfg(feature = "parallel")]
    if operator.nrows() >= parallel_threshold() {
        return apply_operator_blocked(operator, x, rayon::current_num_threads());
    }

    operator * x
}

#[cfg(feature = "parallel")]
fn apply_operator_blocked(operator: &Operator, x: &StateVector, blocks: usize) -> StateVector {
    let rows = operator.nrows();
    let block_rows = rows.div_ceil(blocks.max(1)).max(1);

    let starts: Vec<usize> = (0..rows).step_by(block_rows).collect();
    let partial: Vec<StateVector> = starts
        .into_par_iter()
        .map(|start| operator.rows(start, block_rows.min(rows - start)) * x)
        .collect();

    StateVector::from_iterator(rows, partial.iter().flat_map(|block| block.iter().copied()))
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{IntegratorConfiguration, SimulationResult, Solver, StepSize, DEFAULT_TIME_STEPS};

pub use initial::InitialState;
pub use observer::{LogProgress, NoProgress, StepObserver};
pub use operator::{custom_regularization, OperatorAssembler};
pub use scenario::Scenario;
pub use trajectory::DeformationTrajectory;

pub use methods::EulerSolver;

// =================================================================================================
// Tests
// =================================================================================================
