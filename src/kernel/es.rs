// src/kernel/es.rs

use crate::common::{NufftError, SpreadKernel};
use crate::math;
use crate::opts::MAX_NSPREAD;
use core::f64::consts::PI;

/// "Exponential of semicircle" spreading kernel,
/// `phi(z) = exp(beta * (sqrt(1 - (2z/W)^2) - 1))` for `|z| < W/2`, zero outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EsKernel {
    nspread: usize,
    beta: f64,
    halfwidth: f64,
    c: f64,
}

impl EsKernel {
    /// Builds a kernel of width `nspread` grid points and shape parameter `beta`.
    pub fn new(nspread: usize, beta: f64) -> Result<Self, NufftError> {
        if nspread == 0 || nspread > MAX_NSPREAD {
            return Err(NufftError::UnsupportedKernelWidth(nspread));
        }
        let w = nspread as f64;
        Ok(Self {
            nspread,
            beta,
            halfwidth: w / 2.0,
            c: 4.0 / (w * w),
        })
    }

    /// Picks width and shape for a requested relative accuracy `eps`
    /// on a grid upsampled by `upsampfac`.
    ///
    /// The width is clamped to `[2, MAX_NSPREAD]`; a tolerance that cannot be
    /// met is logged and served with the widest kernel.
    pub fn from_tolerance(eps: f64, upsampfac: f64) -> Result<Self, NufftError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(NufftError::InvalidTolerance);
        }
        if !upsampfac.is_finite() || upsampfac <= 1.0 {
            return Err(NufftError::InvalidUpsampling);
        }
        let eps = if eps < f64::EPSILON {
            log::warn!("tolerance {:.3e} below machine epsilon, using {:.3e}", eps, f64::EPSILON);
            f64::EPSILON
        } else {
            eps
        };

        let ns = if upsampfac == 2.0 {
            math::ceil(-math::log10(eps / 10.0))
        } else {
            math::ceil(-math::ln(eps) / (PI * math::sqrt(1.0 - 1.0 / upsampfac)))
        };
        let mut ns = (ns as usize).max(2);
        if ns > MAX_NSPREAD {
            log::warn!(
                "tolerance {:.3e} needs kernel width {} but {} is the maximum; clamping",
                eps, ns, MAX_NSPREAD
            );
            ns = MAX_NSPREAD;
        }

        let beta_over_ns = if upsampfac == 2.0 {
            match ns {
                2 => 2.20,
                3 => 2.26,
                4 => 2.38,
                _ => 2.30,
            }
        } else {
            0.97 * PI * (1.0 - 1.0 / (2.0 * upsampfac))
        };
        log::debug!("kernel width {} beta {:.4} for eps {:.3e}", ns, beta_over_ns * ns as f64, eps);
        Self::new(ns, beta_over_ns * ns as f64)
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl SpreadKernel for EsKernel {
    fn nspread(&self) -> usize {
        self.nspread
    }

    #[inline]
    fn evaluate(&self, z: f64) -> f64 {
        if math::fabs(z) >= self.halfwidth {
            return 0.0;
        }
        math::exp(self.beta * (math::sqrt(1.0 - self.c * z * z) - 1.0))
    }
}

#[cfg(test)]
#[path = "es_tests.rs"]
mod tests;
