//! Polynomial evaluation and node generation.
//!
//! This module provides:
//! - 1D Legendre polynomials, their derivatives and the orthonormal scaling
//! - 1D Gauss-Lobatto-Legendre (GLL) nodes and weights

mod gll;

pub use gll::{
    gauss_lobatto_nodes, gauss_lobatto_weights, legendre, legendre_and_derivative,
    orthonormal_legendre,
};
