//! Fourier correction tables for the spreading kernel.
//!
//! Spreading onto the upsampled grid convolves with the kernel, so its Fourier
//! coefficients have to be divided out afterwards. All tables here are real:
//! the kernel is real and even.

mod winding;

use crate::common::{NufftError, QuadratureRule, SpreadKernel};
use crate::opts::{NufftOpts, MAX_NSPREAD};
use self::winding::{eval_at, wind_phases, KernelNodes};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn check_width<K: SpreadKernel + ?Sized>(kernel: &K) -> Result<usize, NufftError> {
    let ns = kernel.nspread();
    if ns == 0 || ns > MAX_NSPREAD {
        return Err(NufftError::UnsupportedKernelWidth(ns));
    }
    Ok(ns)
}

/// DFT coefficients of the sampled kernel on a grid of even length `nf`.
///
/// Writes `out[0..=nf/2]`. Superseded by [`fseries_kernel`], which estimates the
/// continuous transform instead of the DFT of the samples.
pub fn dct_kernel<K>(nf: usize, kernel: &K, out: &mut [f64]) -> Result<(), NufftError>
where
    K: SpreadKernel + ?Sized,
{
    let ns = check_width(kernel)?;
    if out.len() < nf / 2 + 1 {
        return Err(NufftError::BufferTooSmall);
    }

    // kernel samples at integer offsets 0..=m from the center
    let m = ns.div_ceil(2);
    let mut offsets = [0.0f64; MAX_NSPREAD / 2 + 1];
    let mut f = [0.0f64; MAX_NSPREAD / 2 + 1];
    for n in 0..=m {
        offsets[n] = n as f64;
        f[n] = kernel.evaluate(n as f64);
    }
    // exp amplitudes to cosine amplitudes
    for v in f[1..=m].iter_mut() {
        *v *= 2.0;
    }

    wind_phases(nf, &offsets[..=m], &f[..=m], 1.0, out);
    Ok(())
}

/// Fourier series coefficients of the kernel on a grid of even length `nf`,
/// by Gauss-Legendre quadrature of its (non-periodized) Fourier integral.
///
/// Writes `out[0..=nf/2]`, already divided by the grid spacing `h = 2*pi/nf`
/// and carrying the `(-1)^j` phase of the grid's `nf/2` offset. These are the
/// values the deconvolution divides by, so their accuracy bounds the transform's.
pub fn fseries_kernel<K, R>(
    nf: usize,
    kernel: &K,
    rule: &R,
    opts: &NufftOpts,
    out: &mut [f64],
) -> Result<(), NufftError>
where
    K: SpreadKernel + ?Sized,
    R: QuadratureRule + ?Sized,
{
    let ns = check_width(kernel)?;
    let q = opts.quad.fseries_nodes(ns)?;
    if out.len() < nf / 2 + 1 {
        return Err(NufftError::BufferTooSmall);
    }
    log::debug!("fseries kernel: nf={} quadrature nodes={}", nf, q);

    let nodes = KernelNodes::new(kernel, rule, q);
    // the factor 2 adds the reflected negative-frequency node
    wind_phases(nf, nodes.nodes(), nodes.amps(), 2.0, out);
    Ok(())
}

/// Fourier transform of the kernel at arbitrary frequencies `k`, in grid units.
///
/// Frequencies should lie in `[-pi, pi]` for accuracy. Writes `phihat[..k.len()]`.
/// Each output is independent; with the `parallel` feature they are computed
/// across the rayon pool.
pub fn nuft_kernel<K, R>(
    k: &[f64],
    kernel: &K,
    rule: &R,
    opts: &NufftOpts,
    phihat: &mut [f64],
) -> Result<(), NufftError>
where
    K: SpreadKernel + ?Sized,
    R: QuadratureRule + ?Sized,
{
    let ns = check_width(kernel)?;
    let q = opts.quad.nuft_nodes(ns)?;
    if phihat.len() < k.len() {
        return Err(NufftError::BufferTooSmall);
    }
    log::debug!("nuft kernel: {} freqs, quadrature nodes={}", k.len(), q);

    let nodes = KernelNodes::new(kernel, rule, q);
    let out = &mut phihat[..k.len()];

    #[cfg(feature = "parallel")]
    out.par_iter_mut()
        .zip(k.par_iter())
        .for_each(|(x, &kj)| *x = eval_at(&nodes, kj));

    #[cfg(not(feature = "parallel"))]
    for (x, &kj) in out.iter_mut().zip(k) {
        *x = eval_at(&nodes, kj);
    }

    Ok(())
}

#[cfg(test)]
#[path = "correction_tests.rs"]
mod tests;
