//! Point-wise field containers.
//!
//! [`PointFields`] holds a set of scalar fields sampled at the same points
//! (conserved state, primitive variables, trace values, boundary storage).
//! [`FluxTensor`] holds a rank-3 `[direction][variable][point]` array in a
//! single contiguous buffer.

use std::ops::{Index, IndexMut};

use crate::error::{CompressibleError, Result};

/// Ordered collection of scalar fields of equal length.
#[derive(Clone, Debug, PartialEq)]
pub struct PointFields {
    fields: Vec<Vec<f64>>,
    n_points: usize,
}

impl PointFields {
    /// Zero-initialised fields.
    pub fn new(n_variables: usize, n_points: usize) -> Self {
        Self {
            fields: vec![vec![0.0; n_points]; n_variables],
            n_points,
        }
    }

    /// Wrap existing field arrays.
    ///
    /// # Panics
    ///
    /// Panics if the fields do not all have the same length.
    pub fn from_fields(fields: Vec<Vec<f64>>) -> Self {
        let n_points = fields.first().map_or(0, Vec::len);
        assert!(
            fields.iter().all(|f| f.len() == n_points),
            "all fields must have the same number of points"
        );
        Self { fields, n_points }
    }

    /// Repeat a single point state over `n_points` points.
    pub fn uniform(state: &[f64], n_points: usize) -> Self {
        Self {
            fields: state.iter().map(|&value| vec![value; n_points]).collect(),
            n_points,
        }
    }

    /// Number of fields.
    #[inline]
    pub fn n_variables(&self) -> usize {
        self.fields.len()
    }

    /// Number of points per field.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Borrow field `i`.
    #[inline]
    pub fn field(&self, i: usize) -> &[f64] {
        &self.fields[i]
    }

    /// Mutably borrow field `i`.
    #[inline]
    pub fn field_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.fields[i]
    }

    /// All fields.
    #[inline]
    pub fn fields(&self) -> &[Vec<f64>] {
        &self.fields
    }

    /// Values of every field at one point.
    pub fn point(&self, p: usize) -> Vec<f64> {
        self.fields.iter().map(|f| f[p]).collect()
    }

    /// Overwrite every field at one point.
    pub fn set_point(&mut self, p: usize, values: &[f64]) {
        debug_assert_eq!(values.len(), self.fields.len());
        for (field, &value) in self.fields.iter_mut().zip(values) {
            field[p] = value;
        }
    }

    /// Fail unless exactly `expected` fields are present.
    pub fn expect_variables(&self, expected: usize) -> Result<()> {
        if self.fields.len() == expected {
            Ok(())
        } else {
            Err(CompressibleError::variable_count(
                expected,
                self.fields.len(),
            ))
        }
    }

    /// Maximum absolute value over all fields.
    pub fn max_abs(&self) -> f64 {
        self.fields
            .iter()
            .flat_map(|f| f.iter())
            .fold(0.0_f64, |acc, &x| acc.max(x.abs()))
    }

    /// Consume into the raw field arrays.
    pub fn into_fields(self) -> Vec<Vec<f64>> {
        self.fields
    }
}

impl Index<usize> for PointFields {
    type Output = [f64];

    #[inline]
    fn index(&self, i: usize) -> &[f64] {
        &self.fields[i]
    }
}

impl IndexMut<usize> for PointFields {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.fields[i]
    }
}

/// Rank-3 array indexed `[direction][variable][point]`.
///
/// Used for flux tensors and for first-derivative arrays.
#[derive(Clone, Debug, PartialEq)]
pub struct FluxTensor {
    /// Flat storage, direction-major then variable then point.
    pub data: Vec<f64>,
    n_directions: usize,
    n_variables: usize,
    n_points: usize,
}

/// First derivatives share the flux layout: `[direction][variable][point]`.
pub type GradientTensor = FluxTensor;

impl FluxTensor {
    /// Zero-initialised tensor.
    pub fn new(n_directions: usize, n_variables: usize, n_points: usize) -> Self {
        Self {
            data: vec![0.0; n_directions * n_variables * n_points],
            n_directions,
            n_variables,
            n_points,
        }
    }

    /// Build from nested `[direction][variable][point]` vectors.
    ///
    /// # Panics
    ///
    /// Panics if the nested vectors are ragged.
    pub fn from_nested(nested: Vec<Vec<Vec<f64>>>) -> Self {
        let n_directions = nested.len();
        let n_variables = nested.first().map_or(0, Vec::len);
        let n_points = nested
            .first()
            .and_then(|d| d.first())
            .map_or(0, Vec::len);

        let mut tensor = Self::new(n_directions, n_variables, n_points);
        for (d, per_dir) in nested.iter().enumerate() {
            assert_eq!(per_dir.len(), n_variables, "ragged variable dimension");
            for (v, values) in per_dir.iter().enumerate() {
                assert_eq!(values.len(), n_points, "ragged point dimension");
                tensor.component_mut(d, v).copy_from_slice(values);
            }
        }
        tensor
    }

    #[inline]
    fn offset(&self, d: usize, v: usize) -> usize {
        (d * self.n_variables + v) * self.n_points
    }

    /// Number of spatial directions.
    #[inline]
    pub fn n_directions(&self) -> usize {
        self.n_directions
    }

    /// Number of variables per direction.
    #[inline]
    pub fn n_variables(&self) -> usize {
        self.n_variables
    }

    /// Number of points per component.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Component `(d, v)` over all points.
    #[inline]
    pub fn component(&self, d: usize, v: usize) -> &[f64] {
        let start = self.offset(d, v);
        &self.data[start..start + self.n_points]
    }

    /// Mutable component `(d, v)` over all points.
    #[inline]
    pub fn component_mut(&mut self, d: usize, v: usize) -> &mut [f64] {
        let start = self.offset(d, v);
        let n = self.n_points;
        &mut self.data[start..start + n]
    }

    /// Single entry.
    #[inline]
    pub fn get(&self, d: usize, v: usize, p: usize) -> f64 {
        self.data[self.offset(d, v) + p]
    }

    /// Set a single entry.
    #[inline]
    pub fn set(&mut self, d: usize, v: usize, p: usize, value: f64) {
        let i = self.offset(d, v) + p;
        self.data[i] = value;
    }

    /// Maximum absolute entry.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, &x| acc.max(x.abs()))
    }
}
