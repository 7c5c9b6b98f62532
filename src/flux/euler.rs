//! Inviscid (Euler) flux tensor.
//!
//! For direction d and momentum component i:
//!
//! - F_d[ρ]   = ρv_d
//! - F_d[ρvᵢ] = v_d ρvᵢ + p δ_{di}
//! - F_d[E]   = v_d (E + p)

use crate::config::FreestreamReference;
use crate::equations::{pressure_with_velocity, velocity};
use crate::error::{CompressibleError, Result};
use crate::operators::{DEALIASING_SCALE, OverIntegration};
use crate::types::{FluxTensor, PointFields, SpaceDim};

/// Evaluate the Euler flux tensor at every point of `state`.
///
/// # Example
/// ```
/// use dg_compressible::config::FreestreamReference;
/// use dg_compressible::flux::euler_flux;
/// use dg_compressible::types::{PointFields, SpaceDim};
///
/// let gas = FreestreamReference::air();
/// let state = PointFields::uniform(&[1.0, 2.0, 5.0], 1);
/// let flux = euler_flux(&gas, SpaceDim::ONE, &state)?;
/// assert_eq!(flux.get(0, 0, 0), 2.0);
/// assert!((flux.get(0, 1, 0) - 5.2).abs() < 1e-12);
/// # Ok::<(), dg_compressible::CompressibleError>(())
/// ```
pub fn euler_flux(
    gas: &FreestreamReference,
    dim: SpaceDim,
    state: &PointFields,
) -> Result<FluxTensor> {
    state.expect_variables(dim.n_variables())?;

    let mut flux = FluxTensor::new(dim.get(), dim.n_variables(), state.n_points());
    fill_euler_flux(gas, dim, state, &mut flux);
    Ok(flux)
}

/// Euler flux evaluated on the over-integrated point set.
///
/// Every conserved field is interpolated to the point set scaled by
/// [`DEALIASING_SCALE`], the flux algebra runs there, and each flux
/// component is Galerkin-projected back onto the solution points.
pub fn euler_flux_dealiased<O>(
    gas: &FreestreamReference,
    dim: SpaceDim,
    state: &PointFields,
    over_integration: &O,
) -> Result<FluxTensor>
where
    O: OverIntegration + ?Sized,
{
    let n_vars = dim.n_variables();
    state.expect_variables(n_vars)?;

    let n_points = state.n_points();
    if n_points != over_integration.n_points() {
        return Err(CompressibleError::PointCount {
            expected: over_integration.n_points(),
            actual: n_points,
        });
    }
    let n_fine = over_integration.scaled_points(DEALIASING_SCALE);

    let mut fine_state = PointFields::new(n_vars, n_fine);
    for v in 0..n_vars {
        over_integration.interpolate_scaled(
            DEALIASING_SCALE,
            state.field(v),
            fine_state.field_mut(v),
        );
    }

    let mut fine_flux = FluxTensor::new(dim.get(), n_vars, n_fine);
    fill_euler_flux(gas, dim, &fine_state, &mut fine_flux);

    let mut flux = FluxTensor::new(dim.get(), n_vars, n_points);
    for d in 0..dim.get() {
        for v in 0..n_vars {
            over_integration.galerkin_project_scaled(
                DEALIASING_SCALE,
                fine_flux.component(d, v),
                flux.component_mut(d, v),
            );
        }
    }
    Ok(flux)
}

/// Shared flux algebra; `flux` must already have the shape of `state`.
fn fill_euler_flux(
    gas: &FreestreamReference,
    dim: SpaceDim,
    state: &PointFields,
    flux: &mut FluxTensor,
) {
    let n = dim.get();
    let vel = velocity(dim, state);
    let p = pressure_with_velocity(gas, dim, state, &vel);

    let energy_index = dim.energy_index();
    let energy = state.field(energy_index);

    for d in 0..n {
        let momentum_d = state.field(dim.momentum_index(d));
        flux.component_mut(d, 0).copy_from_slice(momentum_d);

        for i in 0..n {
            let out = flux.component_mut(d, dim.momentum_index(i));
            for ((o, v), m) in out.iter_mut().zip(&vel[d]).zip(state.field(dim.momentum_index(i))) {
                *o = v * m;
            }
            if d == i {
                for (o, pp) in out.iter_mut().zip(&p) {
                    *o += pp;
                }
            }
        }

        let out = flux.component_mut(d, energy_index);
        for (((o, v), e), pp) in out.iter_mut().zip(&vel[d]).zip(energy).zip(&p) {
            *o = v * (e + pp);
        }
    }
}
