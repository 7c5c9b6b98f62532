//! Builder for [`CompressibleFlowSystem`].
//!
//! # Example
//! ```
//! use std::sync::Arc;
//!
//! use dg_compressible::boundary::{BoundaryRegion, IndexedTrace};
//! use dg_compressible::config::SessionParameters;
//! use dg_compressible::operators::ElementMetrics;
//! use dg_compressible::physics::CompressibleFlowBuilder;
//! use dg_compressible::types::SpaceDim;
//!
//! let session = SessionParameters::new()
//!     .with_parameter("Gamma", 1.4)
//!     .with_parameter("pInf", 101325.0)
//!     .with_parameter("rhoInf", 1.225)
//!     .with_parameter("uInf", 0.1)
//!     .with_parameter("vInf", 0.0)
//!     .with_solver_info("UpwindType", "Average");
//!
//! let trace = IndexedTrace::with_uniform_normal(vec![0, 1, 2], &[0.0, -1.0]);
//! let system = CompressibleFlowBuilder::from_session(&session, SpaceDim::TWO)?
//!     .with_trace(Arc::new(trace))
//!     .with_geometry(Arc::new(ElementMetrics::uniform_quads(1, 1, 1.0, 1.0, 3)))
//!     .with_boundary_region(BoundaryRegion::from_tag("Wall", &[(3, 0)], 4)?)
//!     .build()?;
//!
//! assert_eq!(system.gamma(), 1.4);
//! assert_eq!(system.vel_loc(), &[1, 2]);
//! # Ok::<(), dg_compressible::CompressibleError>(())
//! ```

use std::sync::Arc;

use log::info;

use super::system::CompressibleFlowSystem;
use crate::boundary::{BoundaryRegion, TraceSpace, check_region_layout};
use crate::config::{FreestreamReference, ProjectionType, SessionParameters, SolverSettings};
use crate::error::{CompressibleError, Result};
use crate::operators::{ExpansionGeometry, OverIntegration};
use crate::time::{Communicator, SerialCommunicator};
use crate::types::SpaceDim;

/// Collects configuration and collaborators, validated in [`build`](Self::build).
pub struct CompressibleFlowBuilder {
    dim: SpaceDim,
    gas: FreestreamReference,
    settings: SolverSettings,
    regions: Vec<BoundaryRegion>,
    trace: Option<Arc<dyn TraceSpace + Send + Sync>>,
    geometry: Option<Arc<dyn ExpansionGeometry + Send + Sync>>,
    over_integration: Option<Arc<dyn OverIntegration + Send + Sync>>,
    comm: Arc<dyn Communicator + Send + Sync>,
}

impl CompressibleFlowBuilder {
    /// Start from already-loaded configuration.
    pub fn new(dim: SpaceDim, gas: FreestreamReference, settings: SolverSettings) -> Self {
        Self {
            dim,
            gas,
            settings,
            regions: Vec::new(),
            trace: None,
            geometry: None,
            over_integration: None,
            comm: Arc::new(SerialCommunicator),
        }
    }

    /// Load the gas and solver settings from a session.
    pub fn from_session(session: &SessionParameters, dim: SpaceDim) -> Result<Self> {
        let settings = SolverSettings::from_session(session)?;
        let gas = FreestreamReference::from_session(session, dim)?;
        Ok(Self::new(dim, gas, settings))
    }

    /// Trace restriction used by the boundary closures.
    pub fn with_trace(mut self, trace: Arc<dyn TraceSpace + Send + Sync>) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Element geometry used by the time-step estimate.
    pub fn with_geometry(mut self, geometry: Arc<dyn ExpansionGeometry + Send + Sync>) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Over-integration operator used when de-aliasing is enabled.
    pub fn with_over_integration(
        mut self,
        over_integration: Arc<dyn OverIntegration + Send + Sync>,
    ) -> Self {
        self.over_integration = Some(over_integration);
        self
    }

    /// Communicator for the global time-step reduction.
    pub fn with_communicator(mut self, comm: Arc<dyn Communicator + Send + Sync>) -> Self {
        self.comm = comm;
        self
    }

    /// Append a boundary region; regions are applied in insertion order.
    pub fn with_boundary_region(mut self, region: BoundaryRegion) -> Self {
        self.regions.push(region);
        self
    }

    /// Validate and build.
    ///
    /// Fails if the projection is continuous, a boundary region does not
    /// store one field per conserved variable, or (with a trace attached) a
    /// region does not fit on the trace.
    pub fn build(self) -> Result<CompressibleFlowSystem> {
        if self.settings.projection == ProjectionType::Continuous {
            return Err(CompressibleError::UnsupportedProjection(
                self.settings.projection.to_string(),
            ));
        }
        for region in &self.regions {
            region.storage().expect_variables(self.dim.n_variables())?;
            if let Some(trace) = &self.trace {
                check_region_layout(self.dim, trace.as_ref(), region)?;
            }
        }

        info!(
            "compressible flow system: {} ({} variables), projection {}, dealiasing {}, viscosity {}, {} boundary regions",
            self.dim,
            self.dim.n_variables(),
            self.settings.projection,
            self.settings.dealiasing,
            self.gas.viscosity_model,
            self.regions.len()
        );

        Ok(CompressibleFlowSystem {
            vel_loc: self.dim.velocity_locations(),
            dim: self.dim,
            gas: self.gas,
            settings: self.settings,
            regions: self.regions,
            trace: self.trace,
            geometry: self.geometry,
            over_integration: self.over_integration,
            comm: self.comm,
        })
    }
}
