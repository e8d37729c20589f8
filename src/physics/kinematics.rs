//! Analytic deformation kinematics
//!
//! Velocity gradients `∇u` (with `(∇u)_ij = ∂u_i/∂x_j`) and deformation
//! gradients `F(t)` for the time-constant modes of deformation a parcel can
//! be subjected to, together with the conversions from a target strain to
//! the time needed to reach it.
//!
//! # Simple shear
//!
//! `plane` selects the shear plane: `0 = yz`, `1 = xz`, `2 = xy`. The shear
//! rate is `1/T`, so after time `t` the shear strain is `γ = t/T` and the
//! shear angle is `atan(γ)`.
//!
//! # Pure shear
//!
//! `axis` is the axis of shortening (for `T > 0`). The two remaining axes,
//! taken cyclically, lengthen at rates `(1+r)/2` and `(1-r)/2`, so the flow
//! is isochoric for every ratio `r`. `r = 0` is unconfined, `r = ±1`
//! confined (plane strain).

use nalgebra::Matrix3;

// =================================================================================================
// Simple shear
// =================================================================================================

fn simple_shear_component(plane: usize) -> (usize, usize) {
    match plane {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    }
}

/// Velocity gradient of simple shear in `plane` with characteristic time `t_c`.
pub fn simple_shear_ugrad(plane: usize, t_c: f64) -> Matrix3<f64> {
    let (i, j) = simple_shear_component(plane);
    let mut ugrad = Matrix3::zeros();
    ugrad[(i, j)] = 1.0 / t_c;
    ugrad
}

/// Deformation gradient of simple shear at time `t`.
pub fn simple_shear_f(plane: usize, t_c: f64, t: f64) -> Matrix3<f64> {
    let (i, j) = simple_shear_component(plane);
    let mut f = Matrix3::identity();
    f[(i, j)] = t / t_c;
    f
}

/// Time needed to reach shear angle `gamma` (radians).
pub fn simple_shear_gamma_to_t(gamma: f64, t_c: f64) -> f64 {
    gamma.tan() * t_c
}

// =================================================================================================
// Pure shear
// =================================================================================================

fn pure_shear_rates(axis: usize, ratio: f64) -> [f64; 3] {
    let mut rates = [0.0; 3];
    rates[axis % 3] = -1.0;
    rates[(axis + 1) % 3] = (1.0 + ratio) / 2.0;
    rates[(axis + 2) % 3] = (1.0 - ratio) / 2.0;
    rates
}

/// Velocity gradient of pure shear shortening along `axis`.
pub fn pure_shear_ugrad(axis: usize, ratio: f64, t_c: f64) -> Matrix3<f64> {
    let rates = pure_shear_rates(axis, ratio);
    Matrix3::from_diagonal(&nalgebra::Vector3::new(rates[0], rates[1], rates[2])) / t_c
}

/// Deformation gradient of pure shear at time `t`.
pub fn pure_shear_f(axis: usize, ratio: f64, t_c: f64, t: f64) -> Matrix3<f64> {
    let rates = pure_shear_rates(axis, ratio);
    let stretch = |rate: f64| (rate * t / t_c).exp();
    Matrix3::from_diagonal(&nalgebra::Vector3::new(
        stretch(rates[0]),
        stretch(rates[1]),
        stretch(rates[2]),
    ))
}

/// Time needed to reach axial strain `strain` along the shortening axis.
///
/// `strain = F_axis - 1`, negative for shortening.
pub fn pure_shear_strain_to_t(strain: f64, t_c: f64) -> f64 {
    -t_c * (strain + 1.0).ln()
}

// =================================================================================================
// Decomposition
// =================================================================================================

/// Split a velocity gradient into strain rate `D` and spin `W`.
pub fn ugrad_to_d_and_w(ugrad: &Matrix3<f64>) -> (Matrix3<f64>, Matrix3<f64>) {
    let transpose = ugrad.transpose();
    let d = (ugrad + transpose) * 0.5;
    let w = (ugrad - transpose) * 0.5;
    (d, w)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simple_shear_planes() {
        assert_eq!(simple_shear_ugrad(0, 1.0)[(1, 2)], 1.0);
        assert_eq!(simple_shear_ugrad(1, 2.0)[(0, 2)], 0.5);
        assert_eq!(simple_shear_ugrad(2, 1.0)[(0, 1)], 1.0);
        assert_eq!(simple_shear_ugrad(1, 1.0).sum(), 1.0);
    }

    #[test]
    fn test_simple_shear_f_consistent_with_ugrad() {
        // dF/dt = ugrad · F, and ugrad is nilpotent for simple shear
        let ugrad = simple_shear_ugrad(1, 3.0);
        let t = 1.7;
        let expected = Matrix3::identity() + ugrad * t;
        assert_relative_eq!(simple_shear_f(1, 3.0, t), expected, epsilon = 1e-14);
        assert_eq!(simple_shear_f(0, 1.0, 0.0), Matrix3::identity());
    }

    #[test]
    fn test_simple_shear_gamma_to_t() {
        let angle = 45f64.to_radians();
        assert_relative_eq!(simple_shear_gamma_to_t(angle, 1.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(simple_shear_gamma_to_t(angle, 2.5), 2.5, epsilon = 1e-12);
        assert_eq!(simple_shear_gamma_to_t(0.0, 1.0), 0.0);
    }

    #[test]
    fn test_pure_shear_is_isochoric() {
        for axis in 0..3 {
            for ratio in [-1.0, -0.3, 0.0, 0.5, 1.0] {
                assert_relative_eq!(pure_shear_ugrad(axis, ratio, 1.0).trace(), 0.0, epsilon = 1e-14);
                assert_relative_eq!(pure_shear_f(axis, ratio, 1.0, 0.8).determinant(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_pure_shear_axis_shortens() {
        let ugrad = pure_shear_ugrad(2, 0.0, 1.0);
        assert_eq!(ugrad[(2, 2)], -1.0);
        assert_eq!(ugrad[(0, 0)], 0.5);
        assert_eq!(ugrad[(1, 1)], 0.5);

        let confined = pure_shear_ugrad(0, 1.0, 1.0);
        assert_eq!(confined[(0, 0)], -1.0);
        assert_eq!(confined[(1, 1)], 1.0);
        assert_eq!(confined[(2, 2)], 0.0);
    }

    #[test]
    fn test_pure_shear_strain_round_trip() {
        let strain = -0.5;
        let t_c = 2.0;
        let t = pure_shear_strain_to_t(strain, t_c);
        assert!(t > 0.0);
        let f = pure_shear_f(2, 0.0, t_c, t);
        assert_relative_eq!(f[(2, 2)] - 1.0, strain, epsilon = 1e-12);
    }

    #[test]
    fn test_decomposition() {
        let ugrad = simple_shear_ugrad(1, 1.0);
        let (d, w) = ugrad_to_d_and_w(&ugrad);
        assert_eq!(d, d.transpose());
        assert_eq!(w, -w.transpose());
        assert_eq!(d + w, ugrad);
        assert_eq!(d[(0, 2)], 0.5);
        assert_eq!(w[(2, 0)], -0.5);
    }
}
