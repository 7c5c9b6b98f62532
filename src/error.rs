//! Error types for the compressible flow core.
//!
//! Only configuration problems are reported as errors. Numerical edge cases
//! (zero density, negative pressure) are never intercepted and show up as
//! non-finite values in the returned arrays.

use thiserror::Error;

/// Errors raised while configuring or invoking the compressible flow core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompressibleError {
    /// A required session parameter was not defined.
    #[error("compressible flow sessions must define a {name} parameter")]
    MissingParameter { name: &'static str },

    /// A required solver-info entry was not defined.
    #[error("no {name} defined in session")]
    MissingSolverInfo { name: &'static str },

    /// The projection (continuous/discontinuous) is not supported.
    #[error("unsupported projection type: {0}")]
    UnsupportedProjection(String),

    /// Spatial dimension outside {1, 2, 3}.
    #[error("illegal expansion dimension: {0}")]
    UnsupportedDimension(usize),

    /// Element shape with no minimum-length rule for the CFL estimate.
    #[error("element {element} has unsupported shape {shape} for the time-step estimate")]
    UnsupportedElementShape { element: usize, shape: String },

    /// Boundary tag that does not map onto a closure.
    #[error("unknown boundary condition tag: {0}")]
    UnknownBoundaryTag(String),

    /// Viscosity model selector that is neither constant nor variable.
    #[error("unknown viscosity type: {0}")]
    UnknownViscosityModel(String),

    /// Boundary region index past the end of the configured regions.
    #[error("boundary region {index} out of range ({count} regions)")]
    BoundaryRegionOutOfRange { index: usize, count: usize },

    /// Caller handed in the wrong number of fields.
    #[error("expected {expected} variables, got {actual}")]
    VariableCount { expected: usize, actual: usize },

    /// Field length does not match the geometry's point count.
    #[error("expected {expected} points, got {actual}")]
    PointCount { expected: usize, actual: usize },

    /// Gradient or normal data with the wrong number of spatial directions.
    #[error("expected {expected} spatial directions, got {actual}")]
    DirectionCount { expected: usize, actual: usize },

    /// Polynomial order beyond the tabulated CFL limits.
    #[error("illegal modes dimension for CFL calculation (P has to be at most 20, got {0})")]
    StabilityOrder(usize),

    /// A collaborator the configuration asks for was never attached.
    #[error("no {0} attached to the flow system")]
    MissingCollaborator(&'static str),

    /// Code path that exists but is known to be incomplete.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl CompressibleError {
    /// Create a missing-parameter error.
    pub fn missing_parameter(name: &'static str) -> Self {
        Self::MissingParameter { name }
    }

    /// Create a variable-count mismatch error.
    pub fn variable_count(expected: usize, actual: usize) -> Self {
        Self::VariableCount { expected, actual }
    }

    /// Create a point-count mismatch error.
    pub fn point_count(expected: usize, actual: usize) -> Self {
        Self::PointCount { expected, actual }
    }

    /// Create a direction-count mismatch error.
    pub fn direction_count(expected: usize, actual: usize) -> Self {
        Self::DirectionCount { expected, actual }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CompressibleError>;
