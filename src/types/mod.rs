//! Strongly-typed domain types for the compressible flow core.
//!
//! - [`SpaceDim`]: validated spatial dimension and conserved-variable layout
//! - [`PointFields`]: scalar fields sampled at a common set of points
//! - [`FluxTensor`]: `[direction][variable][point]` arrays for fluxes and
//!   gradients
//!
//! # Example
//!
//! ```
//! use dg_compressible::types::{FluxTensor, PointFields, SpaceDim};
//!
//! let dim = SpaceDim::TWO;
//! let state = PointFields::uniform(&[1.0, 0.1, 0.0, 2.5], 8);
//! assert_eq!(state.n_variables(), dim.n_variables());
//!
//! let flux = FluxTensor::new(dim.get(), dim.n_variables(), state.n_points());
//! assert_eq!(flux.component(1, 3).len(), 8);
//! ```

mod dimension;
mod fields;

pub use dimension::SpaceDim;
pub use fields::{FluxTensor, GradientTensor, PointFields};
