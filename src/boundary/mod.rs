//! Boundary-state closures for compressible flow.
//!
//! Each closure reads the interior trace of the conserved state and writes
//! the boundary values into its region's storage, which the interface
//! Riemann solver later uses as the exterior state.
//!
//! # Available Boundary Conditions
//!
//! | Tag | Description |
//! |-----|-------------|
//! | `Wall` | Inviscid wall, normal momentum reflected |
//! | `WallViscous` | No-slip approximation, momentum negated |
//! | `Symmetry` | Symmetry plane, same algebra as `Wall` |
//! | `RiemannInvariant` | Characteristic far-field |
//! | `ExtrapOrder0` | Interior trace copied unchanged |
//!
//! All closures share the same preamble: extract the trace of every
//! conserved field through a [`TraceSpace`], then walk the region's
//! elements, mapping local point `i` of element `e` to trace point
//! `e.trace_offset + i` and storage point `e.bc_offset + i`.

mod extrapolation;
mod riemann;
mod wall;

use std::fmt;
use std::str::FromStr;

use crate::config::FreestreamReference;
use crate::error::{CompressibleError, Result};
use crate::types::{PointFields, SpaceDim};

pub use extrapolation::extrap_order0;
pub use riemann::riemann_invariant;
pub use wall::{symmetry, wall, wall_viscous};

/// Boundary condition kind of a region, resolved once from its tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryKind {
    Wall,
    WallViscous,
    Symmetry,
    RiemannInvariant,
    ExtrapOrder0,
}

impl BoundaryKind {
    /// Resolve a session boundary tag.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "Wall" => Ok(Self::Wall),
            "WallViscous" => Ok(Self::WallViscous),
            "Symmetry" => Ok(Self::Symmetry),
            "RiemannInvariant" => Ok(Self::RiemannInvariant),
            "ExtrapOrder0" => Ok(Self::ExtrapOrder0),
            other => Err(CompressibleError::UnknownBoundaryTag(other.to_string())),
        }
    }

    /// The session tag of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Wall => "Wall",
            Self::WallViscous => "WallViscous",
            Self::Symmetry => "Symmetry",
            Self::RiemannInvariant => "RiemannInvariant",
            Self::ExtrapOrder0 => "ExtrapOrder0",
        }
    }
}

impl FromStr for BoundaryKind {
    type Err = CompressibleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s)
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One boundary element of a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryElement {
    /// Number of points on the element.
    pub n_points: usize,
    /// Offset of the element's first point in the region storage.
    pub bc_offset: usize,
    /// Offset of the element's first point in the trace arrays.
    pub trace_offset: usize,
}

/// A boundary region: its kind, its elements, and its boundary-value storage.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryRegion {
    kind: BoundaryKind,
    elements: Vec<BoundaryElement>,
    storage: PointFields,
}

impl BoundaryRegion {
    /// Region with explicit element offsets and zeroed storage for
    /// `n_variables` fields.
    pub fn new(kind: BoundaryKind, elements: Vec<BoundaryElement>, n_variables: usize) -> Self {
        let n_points = elements
            .iter()
            .map(|e| e.bc_offset + e.n_points)
            .max()
            .unwrap_or(0);
        Self {
            kind,
            elements,
            storage: PointFields::new(n_variables, n_points),
        }
    }

    /// Region whose elements are stored back to back, given each element's
    /// `(n_points, trace_offset)`.
    pub fn contiguous(kind: BoundaryKind, elements: &[(usize, usize)], n_variables: usize) -> Self {
        let mut bc_offset = 0;
        let elements = elements
            .iter()
            .map(|&(n_points, trace_offset)| {
                let element = BoundaryElement {
                    n_points,
                    bc_offset,
                    trace_offset,
                };
                bc_offset += n_points;
                element
            })
            .collect();
        Self::new(kind, elements, n_variables)
    }

    /// Resolve `tag` and build a contiguous region.
    pub fn from_tag(tag: &str, elements: &[(usize, usize)], n_variables: usize) -> Result<Self> {
        Ok(Self::contiguous(BoundaryKind::from_tag(tag)?, elements, n_variables))
    }

    #[inline]
    pub fn kind(&self) -> BoundaryKind {
        self.kind
    }

    #[inline]
    pub fn elements(&self) -> &[BoundaryElement] {
        &self.elements
    }

    /// Boundary values, one field per conserved variable.
    #[inline]
    pub fn storage(&self) -> &PointFields {
        &self.storage
    }

    #[inline]
    pub fn storage_mut(&mut self) -> &mut PointFields {
        &mut self.storage
    }

    /// Total points over all elements.
    pub fn n_points(&self) -> usize {
        self.elements.iter().map(|e| e.n_points).sum()
    }

    /// `(trace point, storage point)` pairs in element order.
    pub(crate) fn point_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.elements.iter().flat_map(|e| {
            (0..e.n_points).map(move |i| (e.trace_offset + i, e.bc_offset + i))
        })
    }
}

/// Trace restriction supplied by the field representation.
pub trait TraceSpace {
    /// Number of trace points.
    fn n_trace_points(&self) -> usize;

    /// Restrict one field to the trace points.
    fn extract_trace(&self, field: &[f64], trace: &mut [f64]);

    /// Outward unit normals, `[direction][trace point]`.
    fn trace_normals(&self) -> &[Vec<f64>];
}

/// Trace given as a list of field point indices plus per-point normals.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedTrace {
    indices: Vec<usize>,
    normals: Vec<Vec<f64>>,
}

impl IndexedTrace {
    /// Trace point `t` samples field point `indices[t]` and has normal
    /// `(normals[0][t], normals[1][t], ...)`.
    pub fn new(indices: Vec<usize>, normals: Vec<Vec<f64>>) -> Result<Self> {
        if let Some(bad) = normals.iter().find(|n| n.len() != indices.len()) {
            return Err(CompressibleError::variable_count(indices.len(), bad.len()));
        }
        Ok(Self { indices, normals })
    }

    /// Every trace point shares the same normal.
    pub fn with_uniform_normal(indices: Vec<usize>, normal: &[f64]) -> Self {
        let n = indices.len();
        Self {
            indices,
            normals: normal.iter().map(|&c| vec![c; n]).collect(),
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl TraceSpace for IndexedTrace {
    fn n_trace_points(&self) -> usize {
        self.indices.len()
    }

    fn extract_trace(&self, field: &[f64], trace: &mut [f64]) {
        for (t, &i) in trace.iter_mut().zip(&self.indices) {
            *t = field[i];
        }
    }

    fn trace_normals(&self) -> &[Vec<f64>] {
        &self.normals
    }
}

/// Trace of every conserved field.
pub fn extract_trace_state<T>(trace: &T, state: &PointFields) -> PointFields
where
    T: TraceSpace + ?Sized,
{
    let mut fwd = PointFields::new(state.n_variables(), trace.n_trace_points());
    for v in 0..state.n_variables() {
        trace.extract_trace(state.field(v), fwd.field_mut(v));
    }
    fwd
}

/// Check that `region` fits on `trace` in `dim` dimensions.
///
/// The trace needs one normal component per direction, each covering every
/// trace point, and each element's trace range must lie inside the trace.
pub fn check_region_layout<T>(dim: SpaceDim, trace: &T, region: &BoundaryRegion) -> Result<()>
where
    T: TraceSpace + ?Sized,
{
    let n_trace = trace.n_trace_points();
    let normals = trace.trace_normals();
    if normals.len() != dim.get() {
        return Err(CompressibleError::direction_count(dim.get(), normals.len()));
    }
    if let Some(bad) = normals.iter().find(|n| n.len() != n_trace) {
        return Err(CompressibleError::point_count(n_trace, bad.len()));
    }

    let storage_points = region.storage.n_points();
    for e in &region.elements {
        let trace_end = e.trace_offset + e.n_points;
        if trace_end > n_trace {
            return Err(CompressibleError::point_count(n_trace, trace_end));
        }
        let bc_end = e.bc_offset + e.n_points;
        if bc_end > storage_points {
            return Err(CompressibleError::point_count(storage_points, bc_end));
        }
    }
    Ok(())
}

/// Apply the region's closure to `state`.
pub fn apply_boundary<T>(
    gas: &FreestreamReference,
    dim: SpaceDim,
    trace: &T,
    region: &mut BoundaryRegion,
    state: &PointFields,
) -> Result<()>
where
    T: TraceSpace + ?Sized,
{
    state.expect_variables(dim.n_variables())?;
    region.storage.expect_variables(dim.n_variables())?;
    check_region_layout(dim, trace, region)?;

    match region.kind {
        BoundaryKind::Wall => wall(dim, trace, region, state),
        BoundaryKind::WallViscous => wall_viscous(dim, trace, region, state),
        BoundaryKind::Symmetry => symmetry(dim, trace, region, state),
        BoundaryKind::RiemannInvariant => riemann_invariant(gas, dim, trace, region, state),
        BoundaryKind::ExtrapOrder0 => extrap_order0(trace, region, state),
    }
    Ok(())
}
