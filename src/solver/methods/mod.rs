//! Time integration methods
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Available Methods
//!
//! - **[`EulerSolver`]**: Forward Euler method
//!   - Order: First-order O(dt)
//!   - Cost: 1 operator assembly and 1 operator-vector product per step
//!
//! # Design Philosophy
//!
//! Each solver is:
//! - **Self-contained**: No shared mutable state
//! - **Stateless**: Can be reused for multiple scenarios
//!
//! The operator-vector product goes through
//! [`apply_operator`](crate::solver::apply_operator), which switches to
//! Rayon above [`parallel_threshold`](crate::solver::parallel_threshold)
//! when the `parallel` feature is enabled.

pub mod euler;

pub use euler::EulerSolver;
