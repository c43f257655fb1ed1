// src/correction/winding.rs

use crate::common::{QuadratureRule, SpreadKernel};
use crate::math;
use crate::opts::MAX_NQUAD;
use core::f64::consts::PI;
use num_complex::Complex64;

/// Quadrature nodes on `[0, W/2]` and the kernel values weighted for them.
pub(crate) struct KernelNodes {
    pub z: [f64; MAX_NQUAD],
    pub f: [f64; MAX_NQUAD],
    pub q: usize,
}

impl KernelNodes {
    /// Uses the positive half of a `2q`-point rule, rescaled to the kernel's half-width.
    /// `q` must not exceed `MAX_NQUAD`.
    pub(crate) fn new<K, R>(kernel: &K, rule: &R, q: usize) -> Self
    where
        K: SpreadKernel + ?Sized,
        R: QuadratureRule + ?Sized,
    {
        let mut zz = [0.0f64; 2 * MAX_NQUAD];
        let mut ww = [0.0f64; 2 * MAX_NQUAD];
        rule.compute(2 * q, &mut zz, &mut ww);

        let j2 = kernel.nspread() as f64 / 2.0;
        let mut z = [0.0f64; MAX_NQUAD];
        let mut f = [0.0f64; MAX_NQUAD];
        for n in 0..q {
            z[n] = zz[n] * j2;
            f[n] = j2 * ww[n] * kernel.evaluate(z[n]);
        }
        Self { z, f, q }
    }

    pub(crate) fn nodes(&self) -> &[f64] {
        &self.z[..self.q]
    }

    pub(crate) fn amps(&self) -> &[f64] {
        &self.f[..self.q]
    }
}

/// Sums `fold * f[n] * Re(e^{2 pi i j (nf/2 - offsets[n]) / nf})` into `out[j]`
/// for `j = 0..=nf/2`, winding one phasor per offset instead of calling trig per term.
///
/// `offsets` and `amps` have equal length, at most `MAX_NQUAD`.
pub(crate) fn wind_phases(nf: usize, offsets: &[f64], amps: &[f64], fold: f64, out: &mut [f64]) {
    let m = offsets.len();
    let half = (nf / 2) as f64;
    let mut a = [Complex64::new(0.0, 0.0); MAX_NQUAD];
    let mut aj = [Complex64::new(1.0, 0.0); MAX_NQUAD];
    for n in 0..m {
        let (sin, cos) = math::sin_cos(2.0 * PI * (half - offsets[n]) / nf as f64);
        a[n] = Complex64::new(cos, sin);
    }

    for x_out in out[..=nf / 2].iter_mut() {
        let mut x = 0.0;
        for n in 0..m {
            x += amps[n] * fold * aj[n].re;
            aj[n] *= a[n];
        }
        *x_out = x;
    }
}

/// `sum_n 2 f[n] cos(k z[n])`: the kernel transform at one arbitrary frequency.
#[inline]
pub(crate) fn eval_at(nodes: &KernelNodes, k: f64) -> f64 {
    let mut x = 0.0;
    for (z, f) in nodes.nodes().iter().zip(nodes.amps()) {
        x += f * 2.0 * math::cos(k * z);
    }
    x
}
