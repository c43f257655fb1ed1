#![no_std]

// The standard library backs the `std` feature (Error impl, native math)
// and the tests, so 'cargo test' runs normally on a PC.
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod common;
pub mod opts;
pub mod kernel;
pub mod grid;
pub mod correction;
pub mod shuffle;

mod math;

pub use common::NufftError;
pub use opts::{NufftOpts, QuadratureOrder, MAX_NF, MAX_NQUAD, MAX_NSPREAD};
pub use kernel::{EsKernel, GaussLegendre, QuadratureRule, SpreadKernel};
pub use grid::{next235even, size_grid_interval, size_grid_modes, GridDims, IntervalGrid};
pub use correction::{dct_kernel, fseries_kernel, nuft_kernel};
pub use shuffle::{
    deconvolve_shuffle_1d, deconvolve_shuffle_2d, deconvolve_shuffle_3d, Deconvolver, Direction,
};
