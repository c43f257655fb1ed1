// src/opts.rs

use crate::common::NufftError;

/// Largest supported kernel width `W`, in grid points.
pub const MAX_NSPREAD: usize = 16;

/// Capacity of the fixed quadrature buffers.
pub const MAX_NQUAD: usize = 100;

/// Grid lengths at or above this are not rounded to an admissible length.
pub const MAX_NF: u64 = 100_000_000_000;

/// Node-count heuristics for the quadrature estimators.
///
/// Each estimator uses `q = floor(2 + factor * W/2)` nodes on `[0, W/2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureOrder {
    /// Factor for the regular-grid table (`fseries_kernel`).
    pub fseries_factor: f64,
    /// Factor for the arbitrary-frequency evaluator (`nuft_kernel`).
    pub nuft_factor: f64,
}

impl Default for QuadratureOrder {
    fn default() -> Self {
        Self {
            fseries_factor: 3.0,
            nuft_factor: 2.0,
        }
    }
}

impl QuadratureOrder {
    /// Node count for the regular-grid table, checked against `MAX_NQUAD`.
    pub fn fseries_nodes(&self, nspread: usize) -> Result<usize, NufftError> {
        node_count(self.fseries_factor, nspread)
    }

    /// Node count for the arbitrary-frequency evaluator, checked against `MAX_NQUAD`.
    pub fn nuft_nodes(&self, nspread: usize) -> Result<usize, NufftError> {
        node_count(self.nuft_factor, nspread)
    }
}

fn node_count(factor: f64, nspread: usize) -> Result<usize, NufftError> {
    let q = 2.0 + factor * (nspread as f64 / 2.0);
    // `as` saturates, so NaN lands on 0 and huge factors land on usize::MAX
    let q = q as usize;
    if q == 0 || q > MAX_NQUAD {
        return Err(NufftError::QuadratureOrderTooLarge(q));
    }
    Ok(q)
}

/// Options shared by grid sizing and the correction tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NufftOpts {
    /// Upsampling ratio `R` between grid length and mode count.
    pub upsampfac: f64,
    /// Ceiling above which grid lengths skip admissible rounding.
    pub max_nf: u64,
    pub quad: QuadratureOrder,
}

impl Default for NufftOpts {
    fn default() -> Self {
        Self {
            upsampfac: 2.0,
            max_nf: MAX_NF,
            quad: QuadratureOrder::default(),
        }
    }
}

impl NufftOpts {
    /// Replaces the upsampling ratio, which must be finite and greater than 1.
    pub fn with_upsampfac(mut self, upsampfac: f64) -> Result<Self, NufftError> {
        if !upsampfac.is_finite() || upsampfac <= 1.0 {
            return Err(NufftError::InvalidUpsampling);
        }
        self.upsampfac = upsampfac;
        Ok(self)
    }

    pub fn with_quadrature(mut self, quad: QuadratureOrder) -> Self {
        self.quad = quad;
        self
    }
}

#[cfg(test)]
#[path = "opts_tests.rs"]
mod tests;
