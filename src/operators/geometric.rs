//! Element geometry needed by the time-step estimator.
//!
//! The estimator maps physical velocities into each element's reference
//! coordinates with the inverse Jacobian ("derivative factors"):
//!
//! vˢᵢ = Σⱼ ∂ξᵢ/∂xⱼ vⱼ
//!
//! The factors are stored flattened as `g[dim * j + i] = ∂ξᵢ/∂xⱼ`, with one
//! value per factor for affine elements and one value per point for curved
//! ones.

use std::fmt;

use crate::types::SpaceDim;

/// Reference shape of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementShape {
    Segment,
    Triangle,
    Quadrilateral,
    Tetrahedron,
    Pyramid,
    Prism,
    Hexahedron,
}

impl fmt::Display for ElementShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Segment => "Segment",
            Self::Triangle => "Triangle",
            Self::Quadrilateral => "Quadrilateral",
            Self::Tetrahedron => "Tetrahedron",
            Self::Pyramid => "Pyramid",
            Self::Prism => "Prism",
            Self::Hexahedron => "Hexahedron",
        };
        f.write_str(name)
    }
}

/// Whether an element's metric terms are constant or vary point-wise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GeometryType {
    /// Affine map: one value per derivative factor.
    #[default]
    Regular,
    /// Curved map: one value per derivative factor per point.
    Deformed,
}

/// Per-element geometry supplied by the field representation.
///
/// Element points are stored contiguously in element order, so element `e`
/// owns points `offset(e)..offset(e) + n_points(e)` of every field.
pub trait ExpansionGeometry {
    /// Spatial dimension of the mesh.
    fn dim(&self) -> SpaceDim;

    /// Number of elements.
    fn n_elements(&self) -> usize;

    /// Number of quadrature points of element `e`.
    fn n_points(&self, element: usize) -> usize;

    /// Reference shape of element `e`.
    fn shape(&self, element: usize) -> ElementShape;

    /// Regular (affine) or deformed metric.
    fn geometry_type(&self, element: usize) -> GeometryType;

    /// The `dim²` derivative factors of element `e`, laid out `[dim * j + i]`.
    fn derivative_factors(&self, element: usize) -> &[Vec<f64>];

    /// Physical area (or volume) of element `e`.
    fn area(&self, element: usize) -> f64;

    /// Number of expansion modes per direction of element `e`.
    fn n_modes(&self, element: usize) -> usize;

    /// Total points over all elements.
    fn total_points(&self) -> usize {
        (0..self.n_elements()).map(|e| self.n_points(e)).sum()
    }
}

/// Geometry of one element.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementInfo {
    pub shape: ElementShape,
    pub geometry_type: GeometryType,
    pub derivative_factors: Vec<Vec<f64>>,
    pub area: f64,
    pub n_points: usize,
    pub n_modes: usize,
}

impl ElementInfo {
    /// Affine quadrilateral with vertices counter-clockwise from the
    /// reference corner (−1, −1):
    ///
    /// x(r, s) = ¼[(1−r)(1−s) x₀ + (1+r)(1−s) x₁ + (1+r)(1+s) x₂ + (1−r)(1+s) x₃]
    ///
    /// The reference square has area 4, so the physical area is 4·det J.
    pub fn quadrilateral(verts: &[(f64, f64); 4], n_modes: usize) -> Self {
        let (x0, y0) = verts[0];
        let (x1, y1) = verts[1];
        let (x2, y2) = verts[2];
        let (x3, y3) = verts[3];

        let x_r = (x1 - x0 + x2 - x3) / 4.0;
        let x_s = (x3 - x0 + x2 - x1) / 4.0;
        let y_r = (y1 - y0 + y2 - y3) / 4.0;
        let y_s = (y3 - y0 + y2 - y1) / 4.0;

        Self::affine_2d(
            ElementShape::Quadrilateral,
            [x_r, x_s, y_r, y_s],
            4.0,
            n_modes * n_modes,
            n_modes,
        )
    }

    /// Affine triangle on the reference triangle (−1,−1), (1,−1), (−1,1):
    ///
    /// x(r, s) = −½(r+s) x₀ + ½(1+r) x₁ + ½(1+s) x₂
    ///
    /// The reference triangle has area 2, so the physical area is 2·det J.
    pub fn triangle(verts: &[(f64, f64); 3], n_modes: usize) -> Self {
        let (x0, y0) = verts[0];
        let (x1, y1) = verts[1];
        let (x2, y2) = verts[2];

        let x_r = (x1 - x0) / 2.0;
        let x_s = (x2 - x0) / 2.0;
        let y_r = (y1 - y0) / 2.0;
        let y_s = (y2 - y0) / 2.0;

        Self::affine_2d(
            ElementShape::Triangle,
            [x_r, x_s, y_r, y_s],
            2.0,
            n_modes * n_modes,
            n_modes,
        )
    }

    fn affine_2d(
        shape: ElementShape,
        [x_r, x_s, y_r, y_s]: [f64; 4],
        reference_area: f64,
        n_points: usize,
        n_modes: usize,
    ) -> Self {
        let det = x_r * y_s - x_s * y_r;

        // J⁻¹ = [[r_x, r_y], [s_x, s_y]] = (1/det) [[y_s, −x_s], [−y_r, x_r]]
        let rx = y_s / det;
        let ry = -x_s / det;
        let sx = -y_r / det;
        let sy = x_r / det;

        Self {
            shape,
            geometry_type: GeometryType::Regular,
            // [∂r/∂x, ∂s/∂x, ∂r/∂y, ∂s/∂y]
            derivative_factors: vec![vec![rx], vec![sx], vec![ry], vec![sy]],
            area: reference_area * det.abs(),
            n_points,
            n_modes,
        }
    }
}

/// Concrete [`ExpansionGeometry`] holding a list of elements.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementMetrics {
    dim: SpaceDim,
    elements: Vec<ElementInfo>,
}

impl ElementMetrics {
    /// Empty mesh of the given dimension.
    pub fn new(dim: SpaceDim) -> Self {
        Self {
            dim,
            elements: Vec::new(),
        }
    }

    /// Append an element.
    pub fn push(&mut self, element: ElementInfo) {
        self.elements.push(element);
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_element(mut self, element: ElementInfo) -> Self {
        self.push(element);
        self
    }

    /// Uniform `nx × ny` grid of axis-aligned quadrilaterals covering
    /// `[0, lx] × [0, ly]`.
    pub fn uniform_quads(nx: usize, ny: usize, lx: f64, ly: f64, n_modes: usize) -> Self {
        let dx = lx / nx as f64;
        let dy = ly / ny as f64;

        let mut metrics = Self::new(SpaceDim::TWO);
        for j in 0..ny {
            for i in 0..nx {
                let x0 = i as f64 * dx;
                let y0 = j as f64 * dy;
                let verts = [(x0, y0), (x0 + dx, y0), (x0 + dx, y0 + dy), (x0, y0 + dy)];
                metrics.push(ElementInfo::quadrilateral(&verts, n_modes));
            }
        }
        metrics
    }

    /// All elements.
    pub fn elements(&self) -> &[ElementInfo] {
        &self.elements
    }
}

impl ExpansionGeometry for ElementMetrics {
    fn dim(&self) -> SpaceDim {
        self.dim
    }

    fn n_elements(&self) -> usize {
        self.elements.len()
    }

    fn n_points(&self, element: usize) -> usize {
        self.elements[element].n_points
    }

    fn shape(&self, element: usize) -> ElementShape {
        self.elements[element].shape
    }

    fn geometry_type(&self, element: usize) -> GeometryType {
        self.elements[element].geometry_type
    }

    fn derivative_factors(&self, element: usize) -> &[Vec<f64>] {
        &self.elements[element].derivative_factors
    }

    fn area(&self, element: usize) -> f64 {
        self.elements[element].area
    }

    fn n_modes(&self, element: usize) -> usize {
        self.elements[element].n_modes
    }
}
