//! Navier-Stokes viscous flux tensor.
//!
//! Newtonian stress with the Stokes hypothesis (λ = −2/3) and Fourier heat
//! conduction:
//!
//! - S_dd = 2μ ∂v_d/∂x_d + λμ θ,  θ = Σ_d ∂v_d/∂x_d
//! - S_di = μ (∂v_i/∂x_d + ∂v_d/∂x_i)   (d ≠ i)
//! - G_d[ρ] = 0, G_d[ρvᵢ] = S_di, G_d[E] = Σᵢ vᵢ S_di + k ∂T/∂x_d
//!
//! Inputs are primitive fields `[u, (v), (w), T]` and their first
//! derivatives laid out `[direction][primitive][point]`.

use crate::config::FreestreamReference;
use crate::equations::viscosity;
use crate::error::{CompressibleError, Result};
use crate::operators::OverIntegration;
use crate::types::{FluxTensor, GradientTensor, PointFields, SpaceDim};

/// Second viscosity coefficient from the Stokes hypothesis.
pub const STOKES_LAMBDA: f64 = -2.0 / 3.0;

/// Evaluate the viscous flux tensor.
///
/// The viscosity is Sutherland's law on `primitives[dim]` (temperature) when
/// the model is variable, otherwise the constant reference value.
///
/// # Errors
///
/// - [`CompressibleError::VariableCount`] if `primitives` or the gradient
///   does not carry `dim + 1` primitive fields.
/// - [`CompressibleError::DirectionCount`] if the gradient does not have one
///   direction per spatial dimension.
/// - [`CompressibleError::PointCount`] if the gradient and the primitives
///   differ in point count.
pub fn viscous_flux(
    gas: &FreestreamReference,
    dim: SpaceDim,
    primitives: &PointFields,
    derivatives: &GradientTensor,
) -> Result<FluxTensor> {
    let n = dim.get();
    primitives.expect_variables(n + 1)?;
    if derivatives.n_directions() != n {
        return Err(CompressibleError::direction_count(n, derivatives.n_directions()));
    }
    if derivatives.n_variables() != n + 1 {
        return Err(CompressibleError::variable_count(n + 1, derivatives.n_variables()));
    }
    let n_points = primitives.n_points();
    if derivatives.n_points() != n_points {
        return Err(CompressibleError::point_count(n_points, derivatives.n_points()));
    }
    let mu = viscosity(gas, primitives.field(n));
    let k = gas.thermal_conductivity;

    // λμθ
    let mut div_term = vec![0.0; n_points];
    for d in 0..n {
        for (acc, g) in div_term.iter_mut().zip(derivatives.component(d, d)) {
            *acc += g;
        }
    }
    for (acc, m) in div_term.iter_mut().zip(&mu) {
        *acc *= STOKES_LAMBDA * m;
    }

    // stress[n * d + i], symmetric
    let mut stress = vec![vec![0.0; n_points]; n * n];
    for d in 0..n {
        for i in d..n {
            let s = &mut stress[n * d + i];
            if i == d {
                for (p, out) in s.iter_mut().enumerate() {
                    *out = 2.0 * mu[p] * derivatives.get(d, d, p) + div_term[p];
                }
            } else {
                for (p, out) in s.iter_mut().enumerate() {
                    *out = mu[p] * (derivatives.get(d, i, p) + derivatives.get(i, d, p));
                }
            }
        }
        for i in 0..d {
            stress[n * d + i] = stress[n * i + d].clone();
        }
    }

    let mut tensor = FluxTensor::new(n, dim.n_variables(), n_points);
    let energy_index = dim.energy_index();
    for d in 0..n {
        for i in 0..n {
            tensor
                .component_mut(d, dim.momentum_index(i))
                .copy_from_slice(&stress[n * d + i]);
        }

        let temperature_gradient = derivatives.component(d, n);
        let out = tensor.component_mut(d, energy_index);
        for (p, o) in out.iter_mut().enumerate() {
            let work: f64 = (0..n)
                .map(|i| primitives.field(i)[p] * stress[n * d + i][p])
                .sum();
            *o = work + k * temperature_gradient[p];
        }
    }

    Ok(tensor)
}

/// Viscous flux on the over-integrated point set.
///
/// Always returns [`CompressibleError::NotImplemented`]: the interpolation of
/// the gradient fields onto the scaled point set has no defined counterpart
/// here, and a guessed version would silently produce wrong fluxes.
pub fn viscous_flux_dealiased<O>(
    _gas: &FreestreamReference,
    _dim: SpaceDim,
    _primitives: &PointFields,
    _derivatives: &GradientTensor,
    _over_integration: &O,
) -> Result<FluxTensor>
where
    O: OverIntegration + ?Sized,
{
    Err(CompressibleError::NotImplemented("de-aliased viscous flux"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViscosityModel;
    use crate::operators::LineOverIntegration;
    use approx::assert_relative_eq;

    fn gradients(dim: SpaceDim, values: &[&[f64]]) -> GradientTensor {
        let n = dim.get();
        let mut g = FluxTensor::new(n, n + 1, 1);
        for d in 0..n {
            for v in 0..=n {
                g.set(d, v, 0, values[d][v]);
            }
        }
        g
    }

    #[test]
    fn test_one_dimensional_stress() {
        let gas = FreestreamReference::air();
        let dim = SpaceDim::ONE;
        let prims = PointFields::uniform(&[2.0, 300.0], 1);
        let grad = gradients(dim, &[&[0.5, 10.0]]);

        let g = viscous_flux(&gas, dim, &prims, &grad).unwrap();
        let mu = gas.mu;
        let sxx = 2.0 * mu * 0.5 + STOKES_LAMBDA * mu * 0.5;

        assert_eq!(g.get(0, 0, 0), 0.0);
        assert_relative_eq!(g.get(0, 1, 0), sxx, max_relative = 1e-14);
        assert_relative_eq!(
            g.get(0, 2, 0),
            2.0 * sxx + gas.thermal_conductivity * 10.0,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_two_dimensional_shear() {
        let gas = FreestreamReference::air();
        let dim = SpaceDim::TWO;
        let (u, v) = (1.0, 0.5);
        let prims = PointFields::uniform(&[u, v, 280.0], 1);
        // ∂u/∂x = 0.1, ∂v/∂x = 0.2, ∂T/∂x = 1; ∂u/∂y = 0.3, ∂v/∂y = -0.1, ∂T/∂y = 2
        let grad = gradients(dim, &[&[0.1, 0.2, 1.0], &[0.3, -0.1, 2.0]]);

        let g = viscous_flux(&gas, dim, &prims, &grad).unwrap();
        let mu = gas.mu;
        let theta = 0.1 - 0.1;
        let sxx = 2.0 * mu * 0.1 + STOKES_LAMBDA * mu * theta;
        let syy = 2.0 * mu * -0.1 + STOKES_LAMBDA * mu * theta;
        let sxy = mu * (0.2 + 0.3);
        let k = gas.thermal_conductivity;

        assert_eq!(g.get(0, 0, 0), 0.0);
        assert_eq!(g.get(1, 0, 0), 0.0);
        assert_relative_eq!(g.get(0, 1, 0), sxx, max_relative = 1e-14);
        assert_relative_eq!(g.get(1, 1, 0), sxy, max_relative = 1e-14);
        assert_relative_eq!(g.get(0, 2, 0), sxy, max_relative = 1e-14);
        assert_relative_eq!(g.get(1, 2, 0), syy, max_relative = 1e-14);
        assert_relative_eq!(g.get(0, 3, 0), u * sxx + v * sxy + k * 1.0, max_relative = 1e-13);
        assert_relative_eq!(g.get(1, 3, 0), v * syy + u * sxy + k * 2.0, max_relative = 1e-13);
    }

    #[test]
    fn test_three_dimensional_tensor_is_symmetric() {
        let gas = FreestreamReference::air().with_viscosity_model(ViscosityModel::Variable);
        let dim = SpaceDim::THREE;
        let prims = PointFields::uniform(&[0.2, -0.4, 0.1, 310.0], 1);
        let grad = gradients(
            dim,
            &[
                &[0.1, 0.7, -0.3, 1.0],
                &[0.2, 0.05, 0.4, -2.0],
                &[-0.6, 0.9, -0.2, 0.5],
            ],
        );

        let g = viscous_flux(&gas, dim, &prims, &grad).unwrap();
        for d in 0..3 {
            assert_eq!(g.get(d, 0, 0), 0.0);
            for i in 0..3 {
                assert_eq!(g.get(d, 1 + i, 0), g.get(i, 1 + d, 0));
            }
        }

        // Trace of the stress tensor is (2 + 3λ) μ θ = 0.
        let trace: f64 = (0..3).map(|d| g.get(d, 1 + d, 0)).sum();
        assert!(trace.abs() < 1e-18);
    }

    #[test]
    fn test_wrong_primitive_count() {
        let gas = FreestreamReference::air();
        let prims = PointFields::uniform(&[1.0, 2.0, 300.0], 1);
        let grad = FluxTensor::new(1, 2, 1);
        assert!(matches!(
            viscous_flux(&gas, SpaceDim::ONE, &prims, &grad),
            Err(CompressibleError::VariableCount { expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn test_gradient_point_count_must_match() {
        let gas = FreestreamReference::air();
        let dim = SpaceDim::ONE;

        let prims = PointFields::uniform(&[0.5, 300.0], 2);
        let fewer = FluxTensor::new(1, 2, 1);
        assert_eq!(
            viscous_flux(&gas, dim, &prims, &fewer),
            Err(CompressibleError::PointCount { expected: 2, actual: 1 })
        );

        let prims = PointFields::uniform(&[0.5, 300.0], 1);
        let more = FluxTensor::new(1, 2, 3);
        assert_eq!(
            viscous_flux(&gas, dim, &prims, &more),
            Err(CompressibleError::PointCount { expected: 1, actual: 3 })
        );
    }

    #[test]
    fn test_gradient_direction_count_must_match() {
        let gas = FreestreamReference::air();
        let prims = PointFields::uniform(&[0.5, 0.1, 300.0], 1);
        let grad = FluxTensor::new(1, 3, 1);
        assert_eq!(
            viscous_flux(&gas, SpaceDim::TWO, &prims, &grad),
            Err(CompressibleError::DirectionCount { expected: 2, actual: 1 })
        );
    }

    #[test]
    fn test_dealiased_viscous_flux_is_not_implemented() {
        let gas = FreestreamReference::air();
        let over = LineOverIntegration::new(1, 2);
        let prims = PointFields::uniform(&[1.0, 300.0], 3);
        let grad = FluxTensor::new(1, 2, 3);
        assert_eq!(
            viscous_flux_dealiased(&gas, SpaceDim::ONE, &prims, &grad, &over),
            Err(CompressibleError::NotImplemented("de-aliased viscous flux"))
        );
    }
}
