//! Wall-type closures.
//!
//! - Inviscid wall and symmetry plane: m* = m − 2(m·n)n, so the normal
//!   momentum flips sign while the tangential part and |m| are unchanged.
//! - Viscous wall: m* = −m.
//!
//! Density and energy are copied from the trace.

use super::{BoundaryRegion, TraceSpace, extract_trace_state};
use crate::types::{PointFields, SpaceDim};

/// Inviscid impermeable wall.
pub fn wall<T>(dim: SpaceDim, trace: &T, region: &mut BoundaryRegion, state: &PointFields)
where
    T: TraceSpace + ?Sized,
{
    reflect_normal_momentum(dim, trace, region, state);
}

/// Symmetry plane; same reflection as [`wall`].
pub fn symmetry<T>(dim: SpaceDim, trace: &T, region: &mut BoundaryRegion, state: &PointFields)
where
    T: TraceSpace + ?Sized,
{
    reflect_normal_momentum(dim, trace, region, state);
}

/// Viscous wall: every momentum component negated.
pub fn wall_viscous<T>(
    dim: SpaceDim,
    trace: &T,
    region: &mut BoundaryRegion,
    state: &PointFields,
) where
    T: TraceSpace + ?Sized,
{
    let fwd = extract_trace_state(trace, state);
    let pairs: Vec<_> = region.point_pairs().collect();

    for v in 0..fwd.n_variables() {
        let sign = if (1..=dim.get()).contains(&v) { -1.0 } else { 1.0 };
        let src = fwd.field(v);
        let dst = region.storage.field_mut(v);
        for &(t, b) in &pairs {
            dst[b] = sign * src[t];
        }
    }
}

fn reflect_normal_momentum<T>(
    dim: SpaceDim,
    trace: &T,
    region: &mut BoundaryRegion,
    state: &PointFields,
) where
    T: TraceSpace + ?Sized,
{
    let mut fwd = extract_trace_state(trace, state);
    let normals = trace.trace_normals();
    let pairs: Vec<_> = region.point_pairs().collect();

    for &(t, _) in &pairs {
        let mn: f64 = (0..dim.get())
            .map(|i| fwd.field(dim.momentum_index(i))[t] * normals[i][t])
            .sum();
        for i in 0..dim.get() {
            fwd.field_mut(dim.momentum_index(i))[t] -= 2.0 * mn * normals[i][t];
        }
    }

    for v in 0..fwd.n_variables() {
        let src = fwd.field(v);
        let dst = region.storage.field_mut(v);
        for &(t, b) in &pairs {
            dst[b] = src[t];
        }
    }
}
