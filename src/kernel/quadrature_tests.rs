use super::*;
use std::vec;

fn rule(n: usize) -> (std::vec::Vec<f64>, std::vec::Vec<f64>) {
    let mut z = vec![0.0; n];
    let mut w = vec![0.0; n];
    GaussLegendre.compute(n, &mut z, &mut w);
    (z, w)
}

#[test]
fn test_two_point_rule() {
    let (z, w) = rule(2);
    let r = 1.0 / 3.0f64.sqrt();
    assert!((z[0] - r).abs() < 1e-15);
    assert!((z[1] + r).abs() < 1e-15);
    assert!((w[0] - 1.0).abs() < 1e-14);
    assert!((w[1] - 1.0).abs() < 1e-14);
}

#[test]
fn test_nodes_descending_and_symmetric() {
    for n in [3, 8, 25, 52] {
        let (z, w) = rule(n);
        for i in 1..n {
            assert!(z[i] < z[i - 1], "n={} not descending at {}", n, i);
        }
        for i in 0..n {
            assert!((z[i] + z[n - 1 - i]).abs() < 1e-15);
            assert!((w[i] - w[n - 1 - i]).abs() < 1e-15);
        }
        let total: f64 = w.iter().sum();
        assert!((total - 2.0).abs() < 1e-13, "n={} weight sum {}", n, total);
    }
}

#[test]
fn test_polynomial_exactness() {
    // an n-point rule integrates degree 2n-1 exactly
    let n = 6;
    let (z, w) = rule(n);
    for deg in [0usize, 2, 4, 8, 10] {
        let quad: f64 = z.iter().zip(&w).map(|(x, wi)| wi * x.powi(deg as i32)).sum();
        let exact = 2.0 / (deg as f64 + 1.0);
        assert!((quad - exact).abs() < 1e-14, "deg {}: {} vs {}", deg, quad, exact);
    }
}

#[test]
fn test_smooth_integrand() {
    // integral of cos over (-1, 1)
    let (z, w) = rule(12);
    let quad: f64 = z.iter().zip(&w).map(|(x, wi)| wi * x.cos()).sum();
    assert!((quad - 2.0 * 1.0f64.sin()).abs() < 1e-14);
}
