// src/common.rs

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NufftError {
    UnsupportedKernelWidth(usize),
    QuadratureOrderTooLarge(usize),
    InvalidUpsampling,
    InvalidTolerance,
    BufferTooSmall,
    SizeMismatch,
}

use core::fmt;

impl fmt::Display for NufftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NufftError::UnsupportedKernelWidth(w) => {
                write!(f, "Kernel width {} is outside the supported range 1..={}", w, crate::opts::MAX_NSPREAD)
            }
            NufftError::QuadratureOrderTooLarge(q) => {
                write!(f, "Quadrature order {} exceeds the maximum of {}", q, crate::opts::MAX_NQUAD)
            }
            NufftError::InvalidUpsampling => write!(f, "Upsampling ratio must be finite and greater than 1"),
            NufftError::InvalidTolerance => write!(f, "Tolerance must be finite and positive"),
            NufftError::BufferTooSmall => write!(f, "Output buffer is too small for the table"),
            NufftError::SizeMismatch => write!(f, "Array sizes do not match the declared dimensions"),
        }
    }
}

/// Real-space spreading kernel, measured in grid points.
///
/// The kernel is real, even and supported on `|z| < nspread/2`.
pub trait SpreadKernel {
    /// Spread width `W` in grid points (may be odd).
    fn nspread(&self) -> usize;

    /// Kernel value at offset `z` from its center. Never negative.
    fn evaluate(&self, z: f64) -> f64;
}

/// Source of quadrature nodes and weights on the reference interval `(-1, 1)`.
pub trait QuadratureRule {
    /// Fills `nodes[..n]` in descending order and the matching `weights[..n]`.
    fn compute(&self, n: usize, nodes: &mut [f64], weights: &mut [f64]);
}

#[cfg(feature = "std")]
impl std::error::Error for NufftError {}
