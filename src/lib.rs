//! # dg-compressible
//!
//! Point-wise physics for compressible Euler and Navier-Stokes solvers built
//! on discontinuous Galerkin discretisations.
//!
//! This crate provides:
//! - Ideal-gas thermodynamic closure (pressure, temperature, sound speed,
//!   Mach number, Sutherland viscosity)
//! - Inviscid (Euler) and viscous (Navier-Stokes) flux tensors, with an
//!   over-integrated variant of the inviscid flux
//! - Boundary closures: inviscid and viscous walls, symmetry planes,
//!   Riemann-invariant far field and zeroth-order extrapolation
//! - CFL time-step estimate reduced across partitions
//! - Session-driven configuration of the gas and solver switches
//!
//! Spatial operators, Riemann solvers and time integrators live in the
//! surrounding discretisation; they reach this crate through the
//! [`flux::InviscidFluxVector`] / [`flux::ViscousFluxVector`] callbacks and
//! supply geometry and trace data through the traits in [`operators`] and
//! [`boundary`].

pub mod boundary;
pub mod config;
pub mod equations;
pub mod error;
pub mod flux;
pub mod operators;
pub mod physics;
pub mod polynomial;
pub mod time;
pub mod types;

pub use error::{CompressibleError, Result};

// Configuration
pub use config::{
    FreestreamReference, ProjectionType, SessionParameters, SolverSettings, ViscosityModel,
};

// Fields and closures
pub use equations::{mach, pressure, sound_speed, temperature, velocity, viscosity};
pub use types::{FluxTensor, GradientTensor, PointFields, SpaceDim};

// Fluxes
pub use flux::{
    InviscidFluxVector, ViscousFluxVector, euler_flux, euler_flux_dealiased, viscous_flux,
};

// Boundary closures
pub use boundary::{BoundaryKind, BoundaryRegion, IndexedTrace, TraceSpace, apply_boundary};

// Collaborators
pub use operators::{
    ElementInfo, ElementMetrics, ElementShape, ExpansionGeometry, GeometryType,
    LineOverIntegration, OverIntegration,
};
pub use time::{Communicator, SerialCommunicator, estimate_time_step, stability_limit};

// Flow system
pub use physics::{CompressibleFlowBuilder, CompressibleFlowSystem, PhysicsModuleInfo};
