//! Zero-order extrapolation: the boundary state is the interior trace.

use super::{BoundaryRegion, TraceSpace, extract_trace_state};
use crate::types::PointFields;

/// Copy every conserved field of the trace into the region storage.
pub fn extrap_order0<T>(trace: &T, region: &mut BoundaryRegion, state: &PointFields)
where
    T: TraceSpace + ?Sized,
{
    let fwd = extract_trace_state(trace, state);
    let pairs: Vec<_> = region.point_pairs().collect();

    for v in 0..fwd.n_variables() {
        let src = fwd.field(v);
        let dst = region.storage.field_mut(v);
        for &(t, b) in &pairs {
            dst[b] = src[t];
        }
    }
}
