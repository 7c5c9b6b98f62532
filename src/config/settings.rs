//! Discretisation settings read from the session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::session::SessionParameters;
use crate::error::{CompressibleError, Result};

/// Default CFL safety factor when the session does not set `CFL`.
pub const DEFAULT_CFL_SAFETY_FACTOR: f64 = 0.5;

/// Field projection used by the surrounding discretisation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionType {
    /// Discontinuous Galerkin (the only supported projection).
    #[default]
    Discontinuous,
    /// Continuous Galerkin.
    Continuous,
}

impl FromStr for ProjectionType {
    type Err = CompressibleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "DisContinuous" | "Discontinuous" => Ok(Self::Discontinuous),
            "Continuous" | "Galerkin" => Ok(Self::Continuous),
            other => Err(CompressibleError::UnsupportedProjection(other.to_string())),
        }
    }
}

impl fmt::Display for ProjectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discontinuous => write!(f, "DisContinuous"),
            Self::Continuous => write!(f, "Continuous"),
        }
    }
}

/// Solver-level switches that pick callbacks and time-step constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Field projection.
    pub projection: ProjectionType,
    /// Name of the advection operator the flux callbacks are handed to.
    pub advection_type: String,
    /// Name of the diffusion operator the viscous callbacks are handed to.
    pub diffusion_type: String,
    /// Name of the interface Riemann solver.
    pub upwind_type: String,
    /// Evaluate nonlinear fluxes on the over-integrated point set.
    pub dealiasing: bool,
    /// Safety factor applied to the CFL estimate.
    pub cfl_safety_factor: f64,
    /// Scheme-dependent maximum time-step multiplier.
    pub max_time_step_estimator: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            projection: ProjectionType::Discontinuous,
            advection_type: "WeakDG".to_string(),
            diffusion_type: "LDGNS".to_string(),
            upwind_type: "Average".to_string(),
            dealiasing: false,
            cfl_safety_factor: DEFAULT_CFL_SAFETY_FACTOR,
            max_time_step_estimator: 1.0,
        }
    }
}

impl SolverSettings {
    /// Read settings from the session.
    ///
    /// `UpwindType` must be present. The projection string is parsed here;
    /// rejecting a continuous projection is left to the flow system.
    pub fn from_session(session: &SessionParameters) -> Result<Self> {
        let upwind_type = session.require_solver_info("UpwindType")?.to_string();
        let projection = session
            .load_solver_info("Projection", "DisContinuous")
            .parse()?;
        let dealiasing = session
            .load_solver_info("SpectralhpDealiasing", "False")
            .eq_ignore_ascii_case("true");

        Ok(Self {
            projection,
            advection_type: session
                .load_solver_info("AdvectionType", "WeakDG")
                .to_string(),
            diffusion_type: session
                .load_solver_info("DiffusionType", "LDGNS")
                .to_string(),
            upwind_type,
            dealiasing,
            cfl_safety_factor: session.load_parameter("CFL", DEFAULT_CFL_SAFETY_FACTOR),
            max_time_step_estimator: session.load_parameter("MaxTimeStepEstimator", 1.0),
        })
    }

    /// Builder-style toggle for de-aliasing.
    pub fn with_dealiasing(mut self, dealiasing: bool) -> Self {
        self.dealiasing = dealiasing;
        self
    }

    /// Builder-style CFL safety factor.
    pub fn with_cfl_safety_factor(mut self, cfl: f64) -> Self {
        self.cfl_safety_factor = cfl;
        self
    }
}
