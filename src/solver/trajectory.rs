//! Deformation trajectory of a parcel
//!
//! Turns a mode of deformation and a strain target into the kinematic
//! history the integrator steps through: the step size, one deformation
//! gradient per time index and the constant velocity gradient with its
//! strain-rate / spin split.
//!
//! The strain target is interpreted per mode:
//! - simple shear: shear angle (radians), `t = T·tan(angle)`
//! - pure shear: axial strain along the shortening axis, `t = -T·ln(1 + strain)`

use nalgebra::Matrix3;

use crate::error::{FabricError, FabricResult};
use crate::models::{DeformationMode, ModeDescriptor};
use crate::physics::FabricPhysics;
use crate::solver::traits::StepSize;

/// Kinematic history of a parcel under a time-constant mode
#[derive(Debug, Clone, PartialEq)]
pub struct DeformationTrajectory {
    /// Time-step size
    pub dt: f64,

    /// `dt · n` for `n = 0..=Nt`
    pub time_points: Vec<f64>,

    /// `F(dt · n)` for `n = 0..=Nt`
    pub deformation_gradients: Vec<Matrix3<f64>>,

    /// Constant velocity gradient
    pub velocity_gradient: Matrix3<f64>,

    /// Symmetric part `D` of the velocity gradient
    pub strain_rate: Matrix3<f64>,

    /// Antisymmetric part `W` of the velocity gradient
    pub spin: Matrix3<f64>,

    /// Stress proxy; equals `D` under the coaxial assumption
    pub stress: Matrix3<f64>,
}

impl DeformationTrajectory {
    /// Generate the trajectory for `time_steps` steps.
    pub fn generate(
        physics: &dyn FabricPhysics,
        descriptor: &ModeDescriptor,
        strain_target: f64,
        time_steps: usize,
        step: StepSize,
    ) -> FabricResult<Self> {
        if time_steps == 0 {
            return Err(FabricError::InvalidConfiguration(
                "time steps must be greater than 0".to_string(),
            ));
        }
        descriptor.validate()?;

        let t_c = descriptor.time_scale;

        let time_to_target = match descriptor.mode {
            DeformationMode::SimpleShear { .. } => physics.simple_shear_gamma_to_t(strain_target, t_c),
            DeformationMode::PureShear { .. } => physics.pure_shear_strain_to_t(strain_target, t_c),
        };

        let dt = match step {
            StepSize::Fixed(dt) => dt,
            StepSize::FromStrainTarget => time_to_target / time_steps as f64,
        };

        // Time computed from the index, not accumulated
        let time_points: Vec<f64> = (0..=time_steps).map(|n| dt * n as f64).collect();

        let (deformation_gradients, velocity_gradient) = match descriptor.mode {
            DeformationMode::SimpleShear { plane } => (
                time_points
                    .iter()
                    .map(|&t| physics.simple_shear_f(plane, t_c, t))
                    .collect::<Vec<_>>(),
                physics.simple_shear_ugrad(plane, t_c),
            ),
            DeformationMode::PureShear { axis, ratio } => (
                time_points
                    .iter()
                    .map(|&t| physics.pure_shear_f(axis, ratio, t_c, t))
                    .collect::<Vec<_>>(),
                physics.pure_shear_ugrad(axis, ratio, t_c),
            ),
        };

        let (strain_rate, spin) = physics.ugrad_to_d_and_w(&velocity_gradient);

        log::debug!(
            "trajectory {} :: target {} = {} :: Nt={} :: dt={:.3e}",
            descriptor.mode,
            descriptor.mode.strain_measure(),
            strain_target,
            time_steps,
            dt
        );

        Ok(Self {
            dt,
            time_points,
            deformation_gradients,
            velocity_gradient,
            strain_rate,
            stress: strain_rate,
            spin,
        })
    }

    /// Number of time steps `Nt`
    pub fn time_steps(&self) -> usize {
        self.time_points.len().saturating_sub(1)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
