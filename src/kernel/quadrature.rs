// src/kernel/quadrature.rs

use crate::common::QuadratureRule;
use crate::math;
use core::f64::consts::PI;

const NEWTON_MAX_ITERS: usize = 100;
const NEWTON_TOL: f64 = 1e-15;

/// Gauss-Legendre nodes and weights on `(-1, 1)` by Newton iteration
/// on the three-term Legendre recurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussLegendre;

/// Returns `(P_n(x), P_n'(x))`.
#[inline]
fn legendre_eval(n: usize, x: f64) -> (f64, f64) {
    let mut p0 = 1.0;
    let mut p1 = x;
    for k in 2..=n {
        let kf = k as f64;
        let p2 = ((2.0 * kf - 1.0) * x * p1 - (kf - 1.0) * p0) / kf;
        p0 = p1;
        p1 = p2;
    }
    if n == 0 {
        return (1.0, 0.0);
    }
    let dp = n as f64 * (x * p1 - p0) / (x * x - 1.0);
    (p1, dp)
}

impl QuadratureRule for GaussLegendre {
    fn compute(&self, n: usize, nodes: &mut [f64], weights: &mut [f64]) {
        let nf = n as f64;
        // roots come in +/- pairs, so only the upper half is iterated
        for i in 0..n.div_ceil(2) {
            // Tricomi's estimate; i = 0 is the root nearest 1
            let mut x = math::cos(PI * (i as f64 + 0.75) / (nf + 0.5));
            for _ in 0..NEWTON_MAX_ITERS {
                let (p, dp) = legendre_eval(n, x);
                let dx = p / dp;
                x -= dx;
                if math::fabs(dx) < NEWTON_TOL {
                    break;
                }
            }
            let (_, dp) = legendre_eval(n, x);
            let w = 2.0 / ((1.0 - x * x) * dp * dp);

            nodes[i] = x;
            weights[i] = w;
            nodes[n - 1 - i] = -x;
            weights[n - 1 - i] = w;
        }
        if n % 2 == 1 {
            nodes[n / 2] = 0.0;
        }
    }
}

#[cfg(test)]
#[path = "quadrature_tests.rs"]
mod tests;
