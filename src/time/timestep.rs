//! CFL-limited time-step estimate.
//!
//! For each element the physical velocity is mapped to reference
//! coordinates, vˢ = (∂ξ/∂x) v, and the bound velocity is
//! max over the element's points of ‖vˢ‖ + c. The element step is
//!
//! Δt_e = CFL · α · L_min / (bound · c_λ · (P − 1)²)
//!
//! with c_λ = 0.2, α the scheme's maximum time-step estimator and P the
//! number of modes. The global step is the minimum over elements, reduced
//! over partitions.

use log::{debug, warn};

use super::comm::Communicator;
use crate::config::{FreestreamReference, ProjectionType, SolverSettings};
use crate::equations::{pressure_with_velocity, sound_speed, velocity};
use crate::error::{CompressibleError, Result};
use crate::operators::{ElementShape, ExpansionGeometry, GeometryType};
use crate::types::{PointFields, SpaceDim};

/// Eigenvalue scaling of the DG operator in the CFL estimate.
pub const C_LAMBDA: f64 = 0.2;

/// Highest order in the 1D DG stability table.
pub const MAX_STABILITY_ORDER: usize = 20;

/// 1D DG CFL denominators for orders 0 through 20.
const CFL_DG_1D: [f64; MAX_STABILITY_ORDER + 1] = [
    2.0000, 6.0000, 11.8424, 19.1569, 27.8419, 37.8247, 49.0518, 61.4815, 75.0797, 89.8181,
    105.6700, 122.6200, 140.6400, 159.7300, 179.8500, 201.0100, 223.1800, 246.3600, 270.5300,
    295.6900, 321.8300,
];

/// Per-element maximum of ‖vˢ‖ + c.
pub fn std_velocity_bounds<G>(
    gas: &FreestreamReference,
    dim: SpaceDim,
    state: &PointFields,
    geometry: &G,
) -> Result<Vec<f64>>
where
    G: ExpansionGeometry + ?Sized,
{
    let (vel, c) = wave_speeds(gas, dim, state, geometry)?;

    let mut offset = 0;
    let bounds = (0..geometry.n_elements())
        .map(|e| {
            let bound = element_bound(dim, geometry, e, offset, &vel, &c);
            offset += geometry.n_points(e);
            bound
        })
        .collect();
    Ok(bounds)
}

/// Rayon variant of [`std_velocity_bounds`]; identical results.
#[cfg(feature = "parallel")]
pub fn max_std_velocity_parallel<G>(
    gas: &FreestreamReference,
    dim: SpaceDim,
    state: &PointFields,
    geometry: &G,
) -> Result<Vec<f64>>
where
    G: ExpansionGeometry + Sync + ?Sized,
{
    use rayon::prelude::*;

    let (vel, c) = wave_speeds(gas, dim, state, geometry)?;

    let offsets: Vec<usize> = (0..geometry.n_elements())
        .scan(0, |acc, e| {
            let start = *acc;
            *acc += geometry.n_points(e);
            Some(start)
        })
        .collect();

    Ok(offsets
        .par_iter()
        .enumerate()
        .map(|(e, &offset)| element_bound(dim, geometry, e, offset, &vel, &c))
        .collect())
}

/// Stable time step for `state`, reduced over all partitions.
///
/// Triangles use L_min = 2√A; quadrilaterals and hexahedra use √A. Any other
/// shape is a configuration error.
pub fn estimate_time_step<G, C>(
    gas: &FreestreamReference,
    dim: SpaceDim,
    state: &PointFields,
    geometry: &G,
    comm: &C,
    settings: &SolverSettings,
) -> Result<f64>
where
    G: ExpansionGeometry + ?Sized,
    C: Communicator + ?Sized,
{
    let bounds = std_velocity_bounds(gas, dim, state, geometry)?;
    let alpha = settings.max_time_step_estimator;

    let mut local = f64::INFINITY;
    for (e, &bound) in bounds.iter().enumerate() {
        let area = geometry.area(e);
        let min_length = match geometry.shape(e) {
            ElementShape::Triangle => 2.0 * area.sqrt(),
            ElementShape::Quadrilateral | ElementShape::Hexahedron => area.sqrt(),
            shape => {
                return Err(CompressibleError::UnsupportedElementShape {
                    element: e,
                    shape: shape.to_string(),
                });
            }
        };

        let order = geometry.n_modes(e) as f64 - 1.0;
        let dt = settings.cfl_safety_factor * alpha * min_length
            / (bound * C_LAMBDA * order * order);
        local = local.min(dt);
    }

    let global = comm.all_reduce_min(local);
    debug!(
        "time step estimate: local {local:.6e}, global {global:.6e} over {} elements",
        bounds.len()
    );
    if !global.is_finite() {
        warn!("non-finite time step estimate {global}");
    }
    Ok(global)
}

/// 1D CFL denominator for a DG expansion of the given order.
pub fn stability_limit(order: usize, projection: ProjectionType) -> Result<f64> {
    if order > MAX_STABILITY_ORDER {
        return Err(CompressibleError::StabilityOrder(order));
    }
    match projection {
        ProjectionType::Discontinuous => Ok(CFL_DG_1D[order]),
        ProjectionType::Continuous => Err(CompressibleError::UnsupportedProjection(
            projection.to_string(),
        )),
    }
}

/// [`stability_limit`] for every element order.
pub fn stability_limit_vector(orders: &[usize], projection: ProjectionType) -> Result<Vec<f64>> {
    orders
        .iter()
        .map(|&order| stability_limit(order, projection))
        .collect()
}

fn wave_speeds<G>(
    gas: &FreestreamReference,
    dim: SpaceDim,
    state: &PointFields,
    geometry: &G,
) -> Result<(Vec<Vec<f64>>, Vec<f64>)>
where
    G: ExpansionGeometry + ?Sized,
{
    state.expect_variables(dim.n_variables())?;
    let expected = geometry.total_points();
    if state.n_points() != expected {
        return Err(CompressibleError::PointCount {
            expected,
            actual: state.n_points(),
        });
    }

    let vel = velocity(dim, state);
    let p = pressure_with_velocity(gas, dim, state, &vel);
    let c = sound_speed(gas, state, &p);
    Ok((vel, c))
}

fn element_bound<G>(
    dim: SpaceDim,
    geometry: &G,
    element: usize,
    offset: usize,
    vel: &[Vec<f64>],
    c: &[f64],
) -> f64
where
    G: ExpansionGeometry + ?Sized,
{
    let n = dim.get();
    let nq = geometry.n_points(element);
    let gmat = geometry.derivative_factors(element);
    let deformed = geometry.geometry_type(element) == GeometryType::Deformed;

    let mut bound = 0.0_f64;
    for q in 0..nq {
        let point = offset + q;
        let g = |k: usize| if deformed { gmat[k][q] } else { gmat[k][0] };

        let mut norm2 = 0.0;
        for i in 0..n {
            let vs: f64 = (0..n).map(|j| g(n * j + i) * vel[j][point]).sum();
            norm2 += vs * vs;
        }
        bound = bound.max(norm2.sqrt() + c[point]);
    }
    bound
}
