//! Thermodynamic closure for a calorically perfect ideal gas.
//!
//! All functions are point-wise over a [`PointFields`] conserved state laid
//! out as `[ρ, ρu, (ρv), (ρw), E]`:
//!
//! - p = (γ−1)(E − ½ ρ‖v‖²)
//! - T = p / (ρR)
//! - c = √(γp/ρ)
//! - M = ‖v‖ / c
//! - μ = μ* (T/T*)^{3/2} (T* + 110) / (T + 110)   (Sutherland)
//!
//! Nothing here guards against zero density or negative pressure: invalid
//! input comes back as Inf/NaN.
//!
//! # Panics
//!
//! These are raw kernels and do not check shapes. `state` must hold
//! `dim.n_variables()` fields and every slice argument must be as long as
//! the state's fields; otherwise indexing panics. The
//! `CompressibleFlowSystem` wrappers validate before calling in.

use crate::config::{FreestreamReference, ViscosityModel};
use crate::types::{PointFields, SpaceDim};

/// Sutherland's constant for air (K).
pub const SUTHERLAND_CONSTANT: f64 = 110.0;

/// Pressure from the conserved state, dividing momentum by density.
///
/// # Example
/// ```
/// use dg_compressible::config::FreestreamReference;
/// use dg_compressible::equations::pressure;
/// use dg_compressible::types::{PointFields, SpaceDim};
///
/// let gas = FreestreamReference::air();
/// let state = PointFields::uniform(&[1.0, 2.0, 5.0], 1);
/// let p = pressure(&gas, SpaceDim::ONE, &state);
/// assert!((p[0] - 1.2).abs() < 1e-12);
/// ```
pub fn pressure(gas: &FreestreamReference, dim: SpaceDim, state: &PointFields) -> Vec<f64> {
    let rho = state.field(0);
    let energy = state.field(dim.energy_index());

    // ||ρv||²
    let mut p: Vec<f64> = state.field(1).iter().map(|m| m * m).collect();
    for i in 1..dim.get() {
        for (acc, m) in p.iter_mut().zip(state.field(1 + i)) {
            *acc += m * m;
        }
    }

    for ((acc, &r), &e) in p.iter_mut().zip(rho).zip(energy) {
        let rho_v2 = *acc / r;
        *acc = (gas.gamma - 1.0) * (-0.5 * rho_v2 + e);
    }
    p
}

/// Pressure using an already computed velocity field (no division by ρ).
///
/// # Panics
///
/// Panics if `velocity` has fewer than `dim.get()` components.
pub fn pressure_with_velocity(
    gas: &FreestreamReference,
    dim: SpaceDim,
    state: &PointFields,
    velocity: &[Vec<f64>],
) -> Vec<f64> {
    let energy = state.field(dim.energy_index());

    // v·(ρv)
    let mut p: Vec<f64> = velocity[0]
        .iter()
        .zip(state.field(1))
        .map(|(v, m)| v * m)
        .collect();
    for i in 1..dim.get() {
        for ((acc, v), m) in p.iter_mut().zip(&velocity[i]).zip(state.field(1 + i)) {
            *acc += v * m;
        }
    }

    for (acc, &e) in p.iter_mut().zip(energy) {
        *acc = (gas.gamma - 1.0) * (-0.5 * *acc + e);
    }
    p
}

/// Velocity components vᵢ = (ρvᵢ)/ρ.
pub fn velocity(dim: SpaceDim, state: &PointFields) -> Vec<Vec<f64>> {
    let rho = state.field(0);
    (0..dim.get())
        .map(|i| {
            state
                .field(dim.momentum_index(i))
                .iter()
                .zip(rho)
                .map(|(m, r)| m / r)
                .collect()
        })
        .collect()
}

/// Temperature T = p/(ρR).
pub fn temperature(gas: &FreestreamReference, state: &PointFields, pressure: &[f64]) -> Vec<f64> {
    let inv_r = 1.0 / gas.gas_constant;
    pressure
        .iter()
        .zip(state.field(0))
        .map(|(p, r)| (p / r) * inv_r)
        .collect()
}

/// Speed of sound c = √(γp/ρ).
pub fn sound_speed(gas: &FreestreamReference, state: &PointFields, pressure: &[f64]) -> Vec<f64> {
    pressure
        .iter()
        .zip(state.field(0))
        .map(|(p, r)| (gas.gamma * (p / r)).sqrt())
        .collect()
}

/// Mach number ‖v‖/c.
///
/// ‖ρv‖² is divided by ρ twice to obtain ‖v‖² before the square root and
/// the division by c.
pub fn mach(dim: SpaceDim, state: &PointFields, sound_speed: &[f64]) -> Vec<f64> {
    let rho = state.field(0);

    let mut m: Vec<f64> = state.field(1).iter().map(|x| x * x).collect();
    for i in 1..dim.get() {
        for (acc, x) in m.iter_mut().zip(state.field(1 + i)) {
            *acc += x * x;
        }
    }

    for ((acc, &r), &c) in m.iter_mut().zip(rho).zip(sound_speed) {
        let v2 = *acc / r / r;
        *acc = v2.sqrt() / c;
    }
    m
}

/// Sutherland's law for the dynamic viscosity.
///
/// μ* is the configured reference viscosity and T* = p∞/(ρ∞R).
pub fn dynamic_viscosity(gas: &FreestreamReference, temperature: &[f64]) -> Vec<f64> {
    let mu_star = gas.mu;
    let t_star = gas.reference_temperature();

    temperature
        .iter()
        .map(|&t| {
            let ratio = t / t_star;
            mu_star * ratio.powf(1.5) * (t_star + SUTHERLAND_CONSTANT) / (t + SUTHERLAND_CONSTANT)
        })
        .collect()
}

/// Viscosity field according to the configured model.
pub fn viscosity(gas: &FreestreamReference, temperature: &[f64]) -> Vec<f64> {
    match gas.viscosity_model {
        ViscosityModel::Variable => dynamic_viscosity(gas, temperature),
        ViscosityModel::Constant => vec![gas.mu; temperature.len()],
    }
}

/// Pressure of a single point, `(γ−1)(E − ½ Σ mᵢ²/ρ)`.
#[inline]
pub fn point_pressure(gamma: f64, rho: f64, momentum: &[f64], energy: f64) -> f64 {
    let kinetic: f64 = momentum.iter().map(|m| m * m / rho).sum();
    (gamma - 1.0) * (energy - 0.5 * kinetic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sea_level_2d(n: usize) -> (FreestreamReference, PointFields) {
        let gas = FreestreamReference::air();
        let rho = 1.225;
        let u = 0.1;
        let e = 101_325.0 / 0.4 + 0.5 * rho * u * u;
        (gas, PointFields::uniform(&[rho, rho * u, 0.0, e], n))
    }

    #[test]
    fn test_sea_level_closure() {
        let (gas, state) = sea_level_2d(3);
        let dim = SpaceDim::TWO;

        let p = pressure(&gas, dim, &state);
        let c = sound_speed(&gas, &state, &p);
        let m = mach(dim, &state, &c);

        for i in 0..3 {
            assert_relative_eq!(p[i], 101_325.0, max_relative = 1e-12);
            assert_relative_eq!(c[i], (1.4_f64 * 101_325.0 / 1.225).sqrt(), max_relative = 1e-12);
            assert_relative_eq!(m[i], 0.1 / c[i], max_relative = 1e-12);
        }
        assert!((c[0] - 340.3).abs() < 0.05);
        assert!((m[0] - 2.94e-4).abs() < 1e-6);
    }

    #[test]
    fn test_pressure_variants_agree() {
        let gas = FreestreamReference::air();
        let dim = SpaceDim::THREE;
        let state = PointFields::from_fields(vec![
            vec![1.0, 0.5, 2.0],
            vec![0.3, -0.1, 4.0],
            vec![0.0, 0.2, -1.0],
            vec![1.5, 0.0, 0.5],
            vec![10.0, 3.0, 25.0],
        ]);

        let p1 = pressure(&gas, dim, &state);
        let vel = velocity(dim, &state);
        let p2 = pressure_with_velocity(&gas, dim, &state, &vel);

        for (a, b) in p1.iter().zip(&p2) {
            assert_relative_eq!(a, b, max_relative = 1e-13);
        }
    }

    #[test]
    fn test_temperature_ideal_gas() {
        let (gas, state) = sea_level_2d(1);
        let p = pressure(&gas, SpaceDim::TWO, &state);
        let t = temperature(&gas, &state, &p);
        assert_relative_eq!(t[0], gas.reference_temperature(), max_relative = 1e-12);
    }

    #[test]
    fn test_sutherland_at_reference_temperature() {
        let gas = FreestreamReference::air().with_viscosity_model(ViscosityModel::Variable);
        let t_star = gas.reference_temperature();
        let mu = viscosity(&gas, &[t_star, 2.0 * t_star]);

        assert_relative_eq!(mu[0], gas.mu, max_relative = 1e-14);
        // Viscosity of a gas grows with temperature.
        assert!(mu[1] > mu[0]);
    }

    #[test]
    fn test_constant_viscosity_is_broadcast() {
        let gas = FreestreamReference::air();
        let mu = viscosity(&gas, &[100.0, 200.0, 300.0]);
        assert_eq!(mu, vec![gas.mu; 3]);
    }

    #[test]
    fn test_invalid_input_propagates() {
        let gas = FreestreamReference::air();
        let state = PointFields::uniform(&[0.0, 1.0, 1.0], 1);
        let p = pressure(&gas, SpaceDim::ONE, &state);
        assert!(!p[0].is_finite());

        let negative = PointFields::uniform(&[1.0, 0.0, -1.0], 1);
        let p = pressure(&gas, SpaceDim::ONE, &negative);
        let c = sound_speed(&gas, &negative, &p);
        assert!(c[0].is_nan());
    }

    #[test]
    fn test_point_pressure_matches_field_pressure() {
        let gas = FreestreamReference::air();
        let state = PointFields::uniform(&[1.3, 0.4, -0.2, 7.0], 1);
        let p = pressure(&gas, SpaceDim::TWO, &state);
        let p_point = point_pressure(gas.gamma, 1.3, &[0.4, -0.2], 7.0);
        assert_relative_eq!(p[0], p_point, max_relative = 1e-14);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_pressure_with_short_velocity_panics() {
        let gas = FreestreamReference::air();
        let state = PointFields::uniform(&[1.0, 0.5, 0.25, 3.0], 2);
        let velocity = vec![vec![0.5; 2]];
        let _ = pressure_with_velocity(&gas, SpaceDim::TWO, &state, &velocity);
    }
}
