//! Over-integration (de-aliasing) operators.
//!
//! Nonlinear products of degree-p polynomials have degree > p, so evaluating
//! them at the p+1 solution points aliases the high modes back onto the low
//! ones. The de-aliased flux path instead:
//!
//! 1. interpolates each field to a finer point set (`scale` times as many
//!    points per direction),
//! 2. forms the nonlinear product there,
//! 3. L²-projects the result back onto the degree-p space.
//!
//! [`OverIntegration`] is the seam the flux kernels call through;
//! [`LineOverIntegration`] implements it for a mesh of 1D line elements on
//! GLL points.

use faer::{Mat, linalg::solvers::Solve};

use crate::polynomial::{gauss_lobatto_nodes, gauss_lobatto_weights, orthonormal_legendre};

/// Point-count scale used by the de-aliased flux kernels.
pub const DEALIASING_SCALE: f64 = 2.0;

/// Interpolation to, and Galerkin projection from, a scaled point set.
///
/// Arrays are the concatenation of all elements' point values, in element
/// order.
pub trait OverIntegration {
    /// Total number of solution points.
    fn n_points(&self) -> usize;

    /// Total number of points after scaling the 1D point count by `scale`.
    fn scaled_points(&self, scale: f64) -> usize;

    /// Interpolate `input` (solution points) onto the scaled point set.
    fn interpolate_scaled(&self, scale: f64, input: &[f64], output: &mut [f64]);

    /// L²-project `input` (scaled points) back onto the solution points.
    fn galerkin_project_scaled(&self, scale: f64, input: &[f64], output: &mut [f64]);
}

/// Element-local interpolation and projection matrices for one scale.
#[derive(Clone)]
struct ScaledOperators {
    scale: f64,
    n_fine: usize,
    /// n_fine × n_coarse
    interp: Mat<f64>,
    /// n_coarse × n_fine
    project: Mat<f64>,
}

impl ScaledOperators {
    fn new(order: usize, coarse_nodes: &[f64], v_inv: &Mat<f64>, scale: f64) -> Self {
        let n_coarse = order + 1;
        let n_fine = scaled_count(n_coarse, scale);

        let fine_order = n_fine - 1;
        let fine_nodes = gauss_lobatto_nodes(fine_order);
        let fine_weights = gauss_lobatto_weights(fine_order, &fine_nodes);

        // V_f[i, j] = φ_j(x_i) on the fine nodes
        let v_fine = Mat::from_fn(n_fine, n_coarse, |i, j| {
            orthonormal_legendre(j, fine_nodes[i])
        });
        let v_coarse = Mat::from_fn(n_coarse, n_coarse, |i, j| {
            orthonormal_legendre(j, coarse_nodes[i])
        });

        // Nodal -> modal -> fine nodal
        let interp = &v_fine * v_inv;

        // Fine nodal -> modal (a_j = Σ w_i φ_j(x_i) f_i) -> coarse nodal
        let weighted = Mat::from_fn(n_coarse, n_fine, |j, i| v_fine[(i, j)] * fine_weights[i]);
        let project = &v_coarse * &weighted;

        Self {
            scale,
            n_fine,
            interp,
            project,
        }
    }
}

fn scaled_count(n: usize, scale: f64) -> usize {
    ((n as f64) * scale).floor().max(2.0) as usize
}

fn apply_per_element(
    op: &Mat<f64>,
    n_elements: usize,
    input: &[f64],
    output: &mut [f64],
) {
    let (n_out, n_in) = (op.nrows(), op.ncols());
    for k in 0..n_elements {
        let src = &input[k * n_in..(k + 1) * n_in];
        let dst = &mut output[k * n_out..(k + 1) * n_out];
        for (i, out) in dst.iter_mut().enumerate() {
            *out = (0..n_in).map(|j| op[(i, j)] * src[j]).sum();
        }
    }
}

/// Over-integration for `n_elements` line elements of polynomial order
/// `order`, each sampled at its `order + 1` GLL points.
///
/// Operators for [`DEALIASING_SCALE`] are built once; other scales are
/// assembled on demand.
#[derive(Clone)]
pub struct LineOverIntegration {
    order: usize,
    n_elements: usize,
    nodes: Vec<f64>,
    v_inv: Mat<f64>,
    dealiasing: ScaledOperators,
}

impl LineOverIntegration {
    /// Build the operators for a uniform polynomial order.
    pub fn new(n_elements: usize, order: usize) -> Self {
        let n = order + 1;
        let nodes = gauss_lobatto_nodes(order);

        let v = Mat::from_fn(n, n, |i, j| orthonormal_legendre(j, nodes[i]));
        let lu = v.as_ref().full_piv_lu();
        let identity = Mat::<f64>::identity(n, n);
        let v_inv = lu.solve(&identity);

        let dealiasing = ScaledOperators::new(order, &nodes, &v_inv, DEALIASING_SCALE);

        Self {
            order,
            n_elements,
            nodes,
            v_inv,
            dealiasing,
        }
    }

    /// Polynomial order of every element.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of elements.
    #[inline]
    pub fn n_elements(&self) -> usize {
        self.n_elements
    }

    /// Reference GLL nodes of one element.
    #[inline]
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    fn with_operators<R>(&self, scale: f64, f: impl FnOnce(&ScaledOperators) -> R) -> R {
        if scale == self.dealiasing.scale {
            f(&self.dealiasing)
        } else {
            f(&ScaledOperators::new(self.order, &self.nodes, &self.v_inv, scale))
        }
    }
}

impl OverIntegration for LineOverIntegration {
    fn n_points(&self) -> usize {
        self.n_elements * (self.order + 1)
    }

    fn scaled_points(&self, scale: f64) -> usize {
        self.n_elements * scaled_count(self.order + 1, scale)
    }

    fn interpolate_scaled(&self, scale: f64, input: &[f64], output: &mut [f64]) {
        debug_assert_eq!(input.len(), self.n_points());
        self.with_operators(scale, |ops| {
            debug_assert_eq!(output.len(), self.n_elements * ops.n_fine);
            apply_per_element(&ops.interp, self.n_elements, input, output);
        });
    }

    fn galerkin_project_scaled(&self, scale: f64, input: &[f64], output: &mut [f64]) {
        debug_assert_eq!(output.len(), self.n_points());
        self.with_operators(scale, |ops| {
            debug_assert_eq!(input.len(), self.n_elements * ops.n_fine);
            apply_per_element(&ops.project, self.n_elements, input, output);
        });
    }
}
