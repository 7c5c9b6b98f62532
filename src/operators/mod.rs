//! Collaborator seams onto the surrounding discretisation.
//!
//! This module provides:
//! - Over-integration (interpolate to a finer point set, project back)
//!   through [`OverIntegration`], with [`LineOverIntegration`] for 1D meshes
//! - Element geometry for the time-step estimate through
//!   [`ExpansionGeometry`], with [`ElementMetrics`] for affine 2D elements

mod geometric;
mod over_integration;

pub use geometric::{ElementInfo, ElementMetrics, ElementShape, ExpansionGeometry, GeometryType};
pub use over_integration::{DEALIASING_SCALE, LineOverIntegration, OverIntegration};
