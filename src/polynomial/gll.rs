//! Legendre polynomials and Gauss-Lobatto-Legendre (GLL) quadrature.
//!
//! The over-integration operator samples fields on GLL point sets of two
//! different sizes, so only the 1D pieces are needed here.

use std::f64::consts::PI;

/// P_n(x) and P'_n(x) from the three-term recurrence
/// (k+1) P_{k+1} = (2k+1) x P_k − k P_{k−1}.
pub fn legendre_and_derivative(n: usize, x: f64) -> (f64, f64) {
    match n {
        0 => return (1.0, 0.0),
        1 => return (x, 1.0),
        _ => {}
    }

    let (mut p_km1, mut p_k) = (1.0, x);
    for k in 1..n {
        let kf = k as f64;
        let p_kp1 = ((2.0 * kf + 1.0) * x * p_k - kf * p_km1) / (kf + 1.0);
        p_km1 = p_k;
        p_k = p_kp1;
    }

    let nf = n as f64;
    let dp = if (1.0 - x.abs()) < 1e-14 {
        // P'_n(±1) = (±1)^{n+1} n(n+1)/2
        let sign = if x > 0.0 || n % 2 == 1 { 1.0 } else { -1.0 };
        sign * nf * (nf + 1.0) / 2.0
    } else {
        nf * (x * p_k - p_km1) / (x * x - 1.0)
    };

    (p_k, dp)
}

/// Legendre polynomial P_n(x).
#[inline]
pub fn legendre(n: usize, x: f64) -> f64 {
    legendre_and_derivative(n, x).0
}

/// Orthonormal Legendre polynomial φ_n = √((2n+1)/2) P_n, so that
/// ∫_{-1}^{1} φ_m φ_n dx = δ_{mn}.
#[inline]
pub fn orthonormal_legendre(n: usize, x: f64) -> f64 {
    ((2 * n + 1) as f64 / 2.0).sqrt() * legendre(n, x)
}

/// The `order + 1` GLL nodes on [−1, 1], endpoints included.
///
/// Interior nodes are the roots of P'_N, found by Newton iteration on
/// (1−x²)P'_N from Chebyshev-Lobatto starting points.
pub fn gauss_lobatto_nodes(order: usize) -> Vec<f64> {
    let n = order;
    if n == 0 {
        return vec![0.0];
    }

    let nn1 = (n * (n + 1)) as f64;
    (0..=n)
        .map(|j| {
            if j == 0 {
                return -1.0;
            }
            if j == n {
                return 1.0;
            }
            let mut x = -(PI * j as f64 / n as f64).cos();
            for _ in 0..100 {
                let (p, dp) = legendre_and_derivative(n, x);
                let step = (1.0 - x * x) * dp / (nn1 * p);
                x += step;
                if step.abs() < 1e-15 {
                    break;
                }
            }
            x
        })
        .collect()
}

/// GLL weights w_j = 2 / (N(N+1) P_N(x_j)²).
pub fn gauss_lobatto_weights(order: usize, nodes: &[f64]) -> Vec<f64> {
    if order == 0 {
        return vec![2.0];
    }
    let nn1 = (order * (order + 1)) as f64;
    nodes
        .iter()
        .map(|&x| {
            let p = legendre(order, x);
            2.0 / (nn1 * p * p)
        })
        .collect()
}
