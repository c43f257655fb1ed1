// src/shuffle/mod.rs
//
// Moves Fourier coefficients between the centered mode array `fk` and the
// zero-padded, FFT-ordered grid array `fw`, dividing by the kernel's correction
// table on the way. Shapes are not checked here: inconsistent lengths panic on
// slice bounds. `Deconvolver` validates them once up front.

mod deconvolver;

pub use deconvolver::Deconvolver;

use num_complex::Complex64;

/// Which array is read and which is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Read `fw`, write `fk` (after the forward FFT of a type 1 transform).
    WrappedToModes,
    /// Read `fk`, write `fw` with zero padding (before the FFT of a type 2 transform).
    ModesToWrapped,
}

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// One axis: `ms` centered modes against an `nf1`-point wrapped grid.
///
/// Mode `k` in `-(ms/2) ..= (ms-1)/2` sits at `fk[ms/2 + k]` and at `fw[k mod nf1]`;
/// both directions scale it by `prefac / ker[|k|]`.
/// `ker` needs `nf1/2 + 1` entries and `ms <= nf1`.
pub fn deconvolve_shuffle_1d(
    dir: Direction,
    prefac: f64,
    ker: &[f64],
    ms: usize,
    fk: &mut [Complex64],
    nf1: usize,
    fw: &mut [Complex64],
) {
    let k0 = ms / 2;
    // non-negative modes 0..npos; empty when ms == 0
    let npos = ms - k0;

    match dir {
        Direction::WrappedToModes => {
            for k in 0..npos {
                fk[k0 + k] = fw[k].scale(prefac).unscale(ker[k]);
            }
            for k in 1..=k0 {
                fk[k0 - k] = fw[nf1 - k].scale(prefac).unscale(ker[k]);
            }
        }
        Direction::ModesToWrapped => {
            fw[npos..nf1 - k0].fill(ZERO);
            for k in 0..npos {
                fw[k] = fk[k0 + k].scale(prefac).unscale(ker[k]);
            }
            for k in 1..=k0 {
                fw[nf1 - k] = fk[k0 - k].scale(prefac).unscale(ker[k]);
            }
        }
    }
}

/// Two axes, `ms` fastest. Each wrapped row goes through the 1-D shuffle
/// with the prefactor divided by that row's `ker2` value.
#[allow(clippy::too_many_arguments)]
pub fn deconvolve_shuffle_2d(
    dir: Direction,
    prefac: f64,
    ker1: &[f64],
    ker2: &[f64],
    ms: usize,
    mt: usize,
    fk: &mut [Complex64],
    nf1: usize,
    nf2: usize,
    fw: &mut [Complex64],
) {
    let k02 = mt / 2;
    let npos = mt - k02;

    // unused rows are contiguous in the wrapped layout
    if dir == Direction::ModesToWrapped {
        fw[nf1 * npos..nf1 * (nf2 - k02)].fill(ZERO);
    }
    for k2 in 0..npos {
        let slab = &mut fk[ms * (k02 + k2)..][..ms];
        let row = &mut fw[nf1 * k2..][..nf1];
        deconvolve_shuffle_1d(dir, prefac / ker2[k2], ker1, ms, slab, nf1, row);
    }
    for k2 in 1..=k02 {
        let slab = &mut fk[ms * (k02 - k2)..][..ms];
        let row = &mut fw[nf1 * (nf2 - k2)..][..nf1];
        deconvolve_shuffle_1d(dir, prefac / ker2[k2], ker1, ms, slab, nf1, row);
    }
}

/// Three axes, `ms` fastest and `mu` slowest. Each wrapped plane goes
/// through the 2-D shuffle with the prefactor divided by that plane's `ker3` value.
#[allow(clippy::too_many_arguments)]
pub fn deconvolve_shuffle_3d(
    dir: Direction,
    prefac: f64,
    ker1: &[f64],
    ker2: &[f64],
    ker3: &[f64],
    ms: usize,
    mt: usize,
    mu: usize,
    fk: &mut [Complex64],
    nf1: usize,
    nf2: usize,
    nf3: usize,
    fw: &mut [Complex64],
) {
    let k03 = mu / 2;
    let npos = mu - k03;
    let np = nf1 * nf2;
    let mp = ms * mt;

    if dir == Direction::ModesToWrapped {
        fw[np * npos..np * (nf3 - k03)].fill(ZERO);
    }
    for k3 in 0..npos {
        let slab = &mut fk[mp * (k03 + k3)..][..mp];
        let plane = &mut fw[np * k3..][..np];
        deconvolve_shuffle_2d(dir, prefac / ker3[k3], ker1, ker2, ms, mt, slab, nf1, nf2, plane);
    }
    for k3 in 1..=k03 {
        let slab = &mut fk[mp * (k03 - k3)..][..mp];
        let plane = &mut fw[np * (nf3 - k3)..][..np];
        deconvolve_shuffle_2d(dir, prefac / ker3[k3], ker1, ker2, ms, mt, slab, nf1, nf2, plane);
    }
}

#[cfg(test)]
#[path = "shuffle_tests.rs"]
mod tests;
