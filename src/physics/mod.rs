//! Physics module for compressible flow.
//!
//! - [`CompressibleFlowSystem`]: configured gas, settings and collaborators,
//!   exposing the flux, boundary and time-step callbacks
//! - [`CompressibleFlowBuilder`]: validates configuration and attaches
//!   collaborators
//! - [`PhysicsModuleInfo`]: name, variables and run summary

pub mod builder;
pub mod system;
pub mod traits;

pub use builder::CompressibleFlowBuilder;
pub use system::CompressibleFlowSystem;
pub use traits::{PhysicsModuleInfo, SummaryList};
