// src/grid/mod.rs
//
// Upsampled grid sizing. Neither routine fails: degenerate inputs are clamped
// so that `nf >= 2 * nspread` always holds.

mod smooth;

pub use smooth::next235even;

use crate::opts::NufftOpts;
use core::f64::consts::PI;

/// Grid chosen for a transform between two non-uniform point sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalGrid {
    /// Upsampled grid length (even).
    pub nf: usize,
    /// Grid spacing `2*pi / nf`.
    pub h: f64,
    /// Rescaling of x-coordinates into grid units, `x' = x / gamma`.
    pub gamma: f64,
}

/// Upsampled grid lengths of a 1, 2 or 3 dimensional transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    pub nf1: usize,
    pub nf2: usize,
    pub nf3: usize,
}

impl GridDims {
    /// Sizes the first `dim` axes from `modes`; the remaining axes get length 1.
    pub fn for_modes(modes: [usize; 3], dim: usize, opts: &NufftOpts, nspread: usize) -> Self {
        let mut nf = [1usize; 3];
        for (axis, n) in nf.iter_mut().enumerate().take(dim) {
            *n = size_grid_modes(modes[axis], opts, nspread);
        }
        Self { nf1: nf[0], nf2: nf[1], nf3: nf[2] }
    }

    /// Number of points in the whole grid.
    pub fn total(&self) -> usize {
        self.nf1 * self.nf2 * self.nf3
    }
}

/// Clamps to the spreader's minimum and rounds to an admissible length
/// unless the ceiling is reached, where the factor search is skipped.
fn clamp_and_round(nf: usize, opts: &NufftOpts, nspread: usize) -> usize {
    let nf = nf.max(2 * nspread);
    if (nf as u64) < opts.max_nf {
        next235even(nf)
    } else {
        log::warn!("grid length {} at or above ceiling {}, not rounded", nf, opts.max_nf);
        nf
    }
}

/// Grid length for a transform with `ms` requested modes along one axis.
pub fn size_grid_modes(ms: usize, opts: &NufftOpts, nspread: usize) -> usize {
    // float-to-int casts saturate, which covers absurd products
    let target = (opts.upsampfac * ms as f64) as usize;
    let nf = clamp_and_round(target, opts, nspread);
    log::debug!("modes {} -> grid length {}", ms, nf);
    nf
}

/// Grid length, spacing and x-rescaling for non-uniform points with
/// half-width `x` mapped to non-uniform frequencies with half-width `s`.
pub fn size_grid_interval(x: f64, s: f64, opts: &NufftOpts, nspread: usize) -> IntervalGrid {
    let mut x_safe = x;
    let mut s_safe = s;
    // keep x_safe * s_safe >= 1, with x = s = 0 treated as x = s = 1
    if x == 0.0 {
        if s == 0.0 {
            x_safe = 1.0;
            s_safe = 1.0;
        } else {
            x_safe = x_safe.max(1.0 / s);
        }
    } else {
        s_safe = s_safe.max(1.0 / x);
    }

    let r = opts.upsampfac;
    let mut nfd = 2.0 * r * s_safe * x_safe / PI + (nspread + 1) as f64;
    if !nfd.is_finite() {
        nfd = 0.0;
    }
    let nf = clamp_and_round(nfd as usize, opts, nspread);
    let grid = IntervalGrid {
        nf,
        h: 2.0 * PI / nf as f64,
        gamma: nf as f64 / (2.0 * r * s_safe),
    };
    log::debug!("interval x={} s={} -> grid length {} gamma {}", x, s, grid.nf, grid.gamma);
    grid
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
