use super::{deconvolve_shuffle_1d, deconvolve_shuffle_2d, deconvolve_shuffle_3d, Direction};
use crate::common::NufftError;
use num_complex::Complex64;

/// Correction tables and dimensions of one transform, checked once so that
/// repeated shuffles can run the unchecked primitives.
///
/// Borrows one table per axis; the tables outlive every `process` call.
#[derive(Debug, Clone, Copy)]
pub struct Deconvolver<'a> {
    ker: [&'a [f64]; 3],
    modes: [usize; 3],
    nf: [usize; 3],
    dim: usize,
}

impl<'a> Deconvolver<'a> {
    /// `D` axes (1, 2 or 3), first axis fastest. Each table needs `nf/2 + 1`
    /// entries and each mode count must fit its grid.
    pub fn new<const D: usize>(
        ker: [&'a [f64]; D],
        modes: [usize; D],
        nf: [usize; D],
    ) -> Result<Self, NufftError> {
        if D == 0 || D > 3 {
            return Err(NufftError::SizeMismatch);
        }
        for axis in 0..D {
            if ker[axis].len() < nf[axis] / 2 + 1 || modes[axis] > nf[axis] {
                return Err(NufftError::SizeMismatch);
            }
        }

        let mut all_ker: [&'a [f64]; 3] = [&[]; 3];
        let mut all_modes = [1usize; 3];
        let mut all_nf = [1usize; 3];
        all_ker[..D].copy_from_slice(&ker);
        all_modes[..D].copy_from_slice(&modes);
        all_nf[..D].copy_from_slice(&nf);

        Ok(Self {
            ker: all_ker,
            modes: all_modes,
            nf: all_nf,
            dim: D,
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Length of the centered mode array.
    pub fn mode_len(&self) -> usize {
        self.modes[..self.dim].iter().product()
    }

    /// Length of the wrapped grid array.
    pub fn grid_len(&self) -> usize {
        self.nf[..self.dim].iter().product()
    }

    /// Shuffles between `fk` and `fw` in direction `dir`, dividing by the
    /// tables and multiplying by `prefac`.
    pub fn process(
        &self,
        dir: Direction,
        prefac: f64,
        fk: &mut [Complex64],
        fw: &mut [Complex64],
    ) -> Result<(), NufftError> {
        if fk.len() != self.mode_len() || fw.len() != self.grid_len() {
            return Err(NufftError::SizeMismatch);
        }
        let [ms, mt, mu] = self.modes;
        let [nf1, nf2, nf3] = self.nf;
        let [ker1, ker2, ker3] = self.ker;

        match self.dim {
            1 => deconvolve_shuffle_1d(dir, prefac, ker1, ms, fk, nf1, fw),
            2 => deconvolve_shuffle_2d(dir, prefac, ker1, ker2, ms, mt, fk, nf1, nf2, fw),
            _ => deconvolve_shuffle_3d(dir, prefac, ker1, ker2, ker3, ms, mt, mu, fk, nf1, nf2, nf3, fw),
        }
        Ok(())
    }
}
