//! Spatial dimension newtype and variable layout.
//!
//! The conserved variables are laid out as
//! `[ρ, ρu, (ρv), (ρw), E]`, so the layout is fully determined by the
//! spatial dimension.

use std::fmt;

use crate::error::{CompressibleError, Result};

/// Number of spatial dimensions, guaranteed to be 1, 2 or 3.
///
/// # Example
///
/// ```
/// use dg_compressible::types::SpaceDim;
///
/// let dim = SpaceDim::new(2).unwrap();
/// assert_eq!(dim.n_variables(), 4);
/// assert_eq!(dim.energy_index(), 3);
/// assert!(SpaceDim::new(4).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct SpaceDim(usize);

impl SpaceDim {
    /// One-dimensional flow.
    pub const ONE: Self = Self(1);
    /// Two-dimensional flow.
    pub const TWO: Self = Self(2);
    /// Three-dimensional flow.
    pub const THREE: Self = Self(3);

    /// Validate a raw dimension count.
    pub fn new(dim: usize) -> Result<Self> {
        match dim {
            1..=3 => Ok(Self(dim)),
            _ => Err(CompressibleError::UnsupportedDimension(dim)),
        }
    }

    /// Raw dimension count.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of conserved variables: dim + 2.
    #[inline]
    pub const fn n_variables(self) -> usize {
        self.0 + 2
    }

    /// Index of the density field.
    #[inline]
    pub const fn density_index(self) -> usize {
        0
    }

    /// Index of momentum component `i` (0-based direction).
    #[inline]
    pub const fn momentum_index(self, i: usize) -> usize {
        1 + i
    }

    /// Index of the total energy field.
    #[inline]
    pub const fn energy_index(self) -> usize {
        self.0 + 1
    }

    /// Field indices of the velocity/momentum components (`1..=dim`).
    pub fn velocity_locations(self) -> Vec<usize> {
        (1..=self.0).collect()
    }

    /// Conventional names of the conserved variables.
    pub fn variable_names(self) -> &'static [&'static str] {
        match self.0 {
            1 => &["rho", "rhou", "E"],
            2 => &["rho", "rhou", "rhov", "E"],
            _ => &["rho", "rhou", "rhov", "rhow", "E"],
        }
    }
}

impl fmt::Display for SpaceDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.0)
    }
}

impl TryFrom<usize> for SpaceDim {
    type Error = CompressibleError;

    fn try_from(dim: usize) -> Result<Self> {
        Self::new(dim)
    }
}

impl From<SpaceDim> for usize {
    #[inline]
    fn from(dim: SpaceDim) -> usize {
        dim.0
    }
}
