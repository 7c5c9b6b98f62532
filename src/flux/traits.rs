//! Flux callback traits.
//!
//! An advection operator asks an [`InviscidFluxVector`] for the flux tensor
//! of the current state; a diffusion operator asks a [`ViscousFluxVector`]
//! for the viscous tensor given primitive fields and their gradients. The
//! flow system implements both, and plain closures do too.
//!
//! # Example
//! ```
//! use dg_compressible::config::FreestreamReference;
//! use dg_compressible::flux::{InviscidFluxVector, euler_flux};
//! use dg_compressible::types::{PointFields, SpaceDim};
//!
//! let gas = FreestreamReference::air();
//! let callback = |state: &PointFields| euler_flux(&gas, SpaceDim::ONE, state);
//!
//! let flux_fn: &dyn InviscidFluxVector = &callback;
//! let flux = flux_fn.flux_vector(&PointFields::uniform(&[1.0, 2.0, 5.0], 1))?;
//! assert_eq!(flux.get(0, 0, 0), 2.0);
//! # Ok::<(), dg_compressible::CompressibleError>(())
//! ```

use crate::error::Result;
use crate::types::{FluxTensor, GradientTensor, PointFields};

/// Inviscid flux callback.
pub trait InviscidFluxVector {
    /// Flux tensor `[direction][variable][point]` of the conserved `state`.
    fn flux_vector(&self, state: &PointFields) -> Result<FluxTensor>;
}

/// Viscous flux callback.
pub trait ViscousFluxVector {
    /// Viscous tensor from primitives `[u, (v), (w), T]` and their
    /// derivatives `[direction][primitive][point]`.
    fn viscous_flux_vector(
        &self,
        primitives: &PointFields,
        derivatives: &GradientTensor,
    ) -> Result<FluxTensor>;
}

impl<F> InviscidFluxVector for F
where
    F: Fn(&PointFields) -> Result<FluxTensor>,
{
    fn flux_vector(&self, state: &PointFields) -> Result<FluxTensor> {
        self(state)
    }
}

impl<F> ViscousFluxVector for F
where
    F: Fn(&PointFields, &GradientTensor) -> Result<FluxTensor>,
{
    fn viscous_flux_vector(
        &self,
        primitives: &PointFields,
        derivatives: &GradientTensor,
    ) -> Result<FluxTensor> {
        self(primitives, derivatives)
    }
}
