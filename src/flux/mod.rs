//! Flux tensors of the compressible Navier-Stokes equations.
//!
//! - [`euler_flux`] / [`euler_flux_dealiased`]: inviscid flux, optionally
//!   evaluated on an over-integrated point set
//! - [`viscous_flux`]: Newtonian stress and Fourier heat flux
//! - [`viscous_flux_dealiased`]: not available, always an error
//!
//! The [`InviscidFluxVector`] and [`ViscousFluxVector`] traits are the
//! callback seams consumed by advection and diffusion operators.

mod euler;
pub mod traits;
mod viscous;

pub use euler::{euler_flux, euler_flux_dealiased};
pub use traits::{InviscidFluxVector, ViscousFluxVector};
pub use viscous::{STOKES_LAMBDA, viscous_flux, viscous_flux_dealiased};
