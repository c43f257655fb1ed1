use super::*;
use crate::kernel::{EsKernel, GaussLegendre};
use crate::opts::QuadratureOrder;
use core::f64::consts::PI;
use std::vec;

/// `(1 + cos(2 pi z / W)) / 2` on `|z| < W/2`, which has a closed-form transform.
struct RaisedCosine {
    w: usize,
}

impl SpreadKernel for RaisedCosine {
    fn nspread(&self) -> usize {
        self.w
    }

    fn evaluate(&self, z: f64) -> f64 {
        let w = self.w as f64;
        if z.abs() >= w / 2.0 {
            return 0.0;
        }
        0.5 * (1.0 + (2.0 * PI * z / w).cos())
    }
}

/// Integral of `e^{-ikz}` times the raised cosine over the real line.
fn raised_cosine_ft(k: f64, w: usize) -> f64 {
    let w = w as f64;
    if k.abs() < 1e-12 {
        return w / 2.0;
    }
    let a = 2.0 * PI / w;
    (k * w / 2.0).sin() * a * a / (k * (a * a - k * k))
}

/// Kernel that is one at the center and zero on every other grid point.
struct Delta;

impl SpreadKernel for Delta {
    fn nspread(&self) -> usize {
        1
    }

    fn evaluate(&self, z: f64) -> f64 {
        if z.abs() < 0.5 { 1.0 } else { 0.0 }
    }
}

fn sign(j: usize) -> f64 {
    if j % 2 == 0 { 1.0 } else { -1.0 }
}

fn assert_close(a: f64, b: f64, tol: f64, what: &str) {
    assert!((a - b).abs() < tol, "{}: {} vs {}", what, a, b);
}

#[test]
fn test_fseries_matches_closed_form() {
    let ker = RaisedCosine { w: 8 };
    let nf = 36;
    let mut out = vec![0.0; nf / 2 + 1];
    fseries_kernel(nf, &ker, &GaussLegendre, &NufftOpts::default(), &mut out).unwrap();

    for j in 0..=nf / 2 {
        let k = 2.0 * PI * j as f64 / nf as f64;
        let expected = sign(j) * raised_cosine_ft(k, 8);
        assert_close(out[j], expected, 1e-10, "fseries bin");
    }
}

#[test]
fn test_fseries_odd_width() {
    let ker = RaisedCosine { w: 7 };
    let nf = 30;
    let mut out = vec![0.0; nf / 2 + 1];
    fseries_kernel(nf, &ker, &GaussLegendre, &NufftOpts::default(), &mut out).unwrap();

    assert_close(out[0], 3.5, 1e-9, "zero frequency");
    for j in 0..=nf / 2 {
        let k = 2.0 * PI * j as f64 / nf as f64;
        let expected = sign(j) * raised_cosine_ft(k, 7);
        assert_close(out[j], expected, 1e-9, "fseries bin");
    }
}

#[test]
fn test_fseries_es_kernel_has_no_sign_changes() {
    let ker = EsKernel::from_tolerance(1e-6, 2.0).unwrap();
    let nf = 64;
    let mut out = vec![0.0; nf / 2 + 1];
    fseries_kernel(nf, &ker, &GaussLegendre, &NufftOpts::default(), &mut out).unwrap();

    for (j, &v) in out.iter().enumerate() {
        assert!(sign(j) * v > 0.0, "bin {} = {}", j, v);
    }
    // smoothing kernel: low frequencies dominate
    assert!(out[0].abs() > out[nf / 2].abs());
}

#[test]
fn test_dct_matches_direct_cosine_sum() {
    let ker = EsKernel::new(7, 2.3 * 7.0).unwrap();
    let nf = 20;
    let mut out = vec![0.0; nf / 2 + 1];
    dct_kernel(nf, &ker, &mut out).unwrap();

    for j in 0..=nf / 2 {
        let mut expected = 0.0;
        for n in 0..=4usize {
            let amp = if n == 0 { 1.0 } else { 2.0 };
            let phase = 2.0 * PI * (nf / 2 - n) as f64 * j as f64 / nf as f64;
            expected += amp * ker.evaluate(n as f64) * phase.cos();
        }
        assert_close(out[j], expected, 1e-12, "dct bin");
    }
}

#[test]
fn test_dct_delta_kernel_alternates() {
    let nf = 12;
    let mut out = vec![0.0; nf / 2 + 1];
    dct_kernel(nf, &Delta, &mut out).unwrap();
    for j in 0..=nf / 2 {
        assert_close(out[j], sign(j), 1e-12, "delta bin");
    }
}

#[test]
fn test_nuft_agrees_with_fseries_on_grid_frequencies() {
    // same node count for both estimators
    let opts = NufftOpts::default().with_quadrature(QuadratureOrder {
        fseries_factor: 3.0,
        nuft_factor: 3.0,
    });
    let ker = EsKernel::new(8, 2.3 * 8.0).unwrap();
    let nf = 40;
    let mut table = vec![0.0; nf / 2 + 1];
    fseries_kernel(nf, &ker, &GaussLegendre, &opts, &mut table).unwrap();

    let k: std::vec::Vec<f64> = (0..=nf / 2).map(|j| 2.0 * PI * j as f64 / nf as f64).collect();
    let mut phihat = vec![0.0; k.len()];
    nuft_kernel(&k, &ker, &GaussLegendre, &opts, &mut phihat).unwrap();

    for j in 0..=nf / 2 {
        assert_close(phihat[j], sign(j) * table[j], 1e-12, "nuft vs fseries");
    }
}

#[test]
fn test_nuft_matches_closed_form() {
    let ker = RaisedCosine { w: 8 };
    let k = [-PI, -3.0, -1.1, 0.0, 0.4, 1.3, 2.5, PI];
    let mut phihat = [0.0; 8];
    nuft_kernel(&k, &ker, &GaussLegendre, &NufftOpts::default(), &mut phihat).unwrap();

    for (&kj, &v) in k.iter().zip(&phihat) {
        assert_close(v, raised_cosine_ft(kj, 8), 1e-5, "nuft freq");
    }
    // even in k
    assert_close(phihat[0], phihat[7], 1e-15, "symmetry");
}

#[test]
fn test_nuft_empty_input() {
    let ker = RaisedCosine { w: 4 };
    let mut phihat: [f64; 0] = [];
    assert!(nuft_kernel(&[], &ker, &GaussLegendre, &NufftOpts::default(), &mut phihat).is_ok());
}

#[test]
fn test_errors() {
    let opts = NufftOpts::default();
    let mut short = [0.0; 4];

    let ker = RaisedCosine { w: 8 };
    assert_eq!(fseries_kernel(16, &ker, &GaussLegendre, &opts, &mut short), Err(NufftError::BufferTooSmall));
    assert_eq!(dct_kernel(16, &ker, &mut short), Err(NufftError::BufferTooSmall));
    assert_eq!(
        nuft_kernel(&[0.0; 5], &ker, &GaussLegendre, &opts, &mut short),
        Err(NufftError::BufferTooSmall)
    );

    let wide = RaisedCosine { w: 17 };
    let mut out = [0.0; 64];
    assert_eq!(dct_kernel(64, &wide, &mut out), Err(NufftError::UnsupportedKernelWidth(17)));
    assert_eq!(
        fseries_kernel(64, &wide, &GaussLegendre, &opts, &mut out),
        Err(NufftError::UnsupportedKernelWidth(17))
    );

    let greedy = opts.with_quadrature(QuadratureOrder { fseries_factor: 40.0, nuft_factor: 2.0 });
    assert_eq!(
        fseries_kernel(64, &ker, &GaussLegendre, &greedy, &mut out),
        Err(NufftError::QuadratureOrderTooLarge(162))
    );
}
