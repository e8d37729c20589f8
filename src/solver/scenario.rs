//! Parcel scenario definition
//!
//! A scenario combines the fabric physics with everything that describes
//! the parcel's history: mode of deformation, strain target, enabled
//! processes and initial fabric.

use crate::error::{FabricError, FabricResult};
use crate::models::{ModeConfig, ModeDescriptor, ProcessWeights};
use crate::physics::FabricPhysics;
use crate::solver::initial::InitialState;

/// Parcel scenario
///
/// # Design
///
/// The same scenario can be integrated with different step configurations.
/// This is the "WHAT to solve" (not "HOW to solve").
///
/// # Examples
///
/// ```rust,ignore
/// let scenario = Scenario::new(Box::new(physics), ModeDescriptor::simple_shear(1), 0.5)
///     .with_processes(ProcessWeights::none().with_lattice_rotation(1.0, 0.0));
///
/// let coarse = EulerSolver::new().solve(&scenario, &IntegratorConfiguration::new(50))?;
/// let fine = EulerSolver::new().solve(&scenario, &IntegratorConfiguration::new(500))?;
/// ```
pub struct Scenario {
    /// Fabric physics (operators and kinematics)
    pub physics: Box<dyn FabricPhysics>,

    /// Mode of deformation
    pub mode: ModeDescriptor,

    /// Target strain, measured as the mode defines it
    pub strain_target: f64,

    pub processes: ProcessWeights,

    pub initial: InitialState,
}

impl Scenario {

    /// Create a scenario with no active process and an isotropic start
    pub fn new(physics: Box<dyn FabricPhysics>, mode: ModeDescriptor, strain_target: f64) -> Self {
        Self {
            physics,
            mode,
            strain_target,
            processes: ProcessWeights::default(),
            initial: InitialState::Isotropic,
        }
    }

    /// Create a scenario from a loosely typed mode descriptor
    pub fn from_config(
        physics: Box<dyn FabricPhysics>,
        mode: &ModeConfig,
        strain_target: f64,
    ) -> FabricResult<Self> {
        let mode = ModeDescriptor::parse(mode)?;
        Ok(Self::new(physics, mode, strain_target))
    }

    /// Builder pattern: set the fabric processes
    pub fn with_processes(mut self, processes: ProcessWeights) -> Self {
        self.processes = processes;
        self
    }

    /// Builder pattern: set the initial fabric
    pub fn with_initial_state(mut self, initial: InitialState) -> Self {
        self.initial = initial;
        self
    }

    /// Verify the scenario before anything is allocated
    pub fn validate(&self) -> FabricResult<()> {
        self.mode.validate()?;

        let basis = self.physics.basis();
        if !basis.is_supported() {
            return Err(FabricError::InvalidParameter {
                parameter: "L",
                reason: format!("truncation must be even, got {}", basis.truncation()),
            });
        }

        // A length mismatch would make every operator product ill-formed
        if let Some(len) = self.initial.given_len()
            && len != basis.nlm_len()
        {
            return Err(FabricError::InvalidConfiguration(format!(
                "initial state has {} coefficients, truncation L={} needs {}",
                len,
                basis.truncation(),
                basis.nlm_len()
            )));
        }

        Ok(())
    }

    /// Get physics name
    pub fn get_physics_name(&self) -> &str {
        self.physics.name()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("physics", &self.get_physics_name())
            .field("truncation", &self.physics.truncation())
            .field("mode", &self.mode)
            .field("strain target", &self.strain_target)
            .field("processes", &self.processes)
            .field("initial", &self.initial)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
