//! Session configuration.
//!
//! - [`SessionParameters`]: raw named scalars and solver-info strings
//! - [`FreestreamReference`]: immutable gas constants and freestream state
//! - [`SolverSettings`]: projection, operator names, de-aliasing, CFL factor
//!
//! # Example
//!
//! ```
//! use dg_compressible::config::{FreestreamReference, SessionParameters, SolverSettings};
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
//! let gas = FreestreamReference::from_session(&session, SpaceDim::TWO)?;
//! let settings = SolverSettings::from_session(&session)?;
//! assert_eq!(gas.gamma, 1.4);
//! assert!(!settings.dealiasing);
//! # Ok::<(), dg_compressible::CompressibleError>(())
//! ```

mod freestream;
mod session;
mod settings;

pub use freestream::{
    DEFAULT_GAS_CONSTANT, DEFAULT_THERMAL_CONDUCTIVITY, DEFAULT_VISCOSITY,
    DEFAULT_WALL_TEMPERATURE, FreestreamReference, ViscosityModel,
};
pub use session::SessionParameters;
pub use settings::{DEFAULT_CFL_SAFETY_FACTOR, ProjectionType, SolverSettings};
