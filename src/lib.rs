/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! In-place radix-2 FFT over `f64` for power-of-two sizes. The core works on
//! split real/imaginary buffers; interleaved entry points pay one in-place
//! permutation each way to feed it. [`Paft::initialize`] must run before any
//! transform.
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(target_arch = "x86_64", feature = "avx"))]
mod avx;
#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
mod avx512;
mod err;
#[cfg(all(target_arch = "aarch64", feature = "neon"))]
mod neon;
mod permute;
mod r2c;
mod radix2;
#[cfg(target_arch = "x86_64")]
mod sse2;
mod tables;
mod util;

use crate::permute::apply_cycles;
use crate::r2c::{MIN_REAL_HALF_SIZE, real_fft_split_inplace};
use crate::radix2::fft_split_inplace;
use crate::tables::{MAX_TABLE_DEPTH, initialize_tables, tables};
use crate::util::ilog2_pow2;
pub use err::PaftError;
use num_complex::Complex;
use std::fmt::{Display, Formatter};
use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FftDirection {
    Forward,
    Inverse,
}

impl FftDirection {
    pub fn inverse(self) -> FftDirection {
        match self {
            FftDirection::Forward => FftDirection::Inverse,
            FftDirection::Inverse => FftDirection::Forward,
        }
    }
}

impl Display for FftDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FftDirection::Forward => f.write_str("FftDirection::Forward"),
            FftDirection::Inverse => f.write_str("FftDirection::Inverse"),
        }
    }
}

/// Behavior flags for the interleaved entry points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FftFlags(u32);

impl FftFlags {
    pub const NONE: FftFlags = FftFlags(0);
    /// Leave the output in split layout: real halves first, imaginary after.
    pub const DO_NOT_REZIP: FftFlags = FftFlags(1);
    /// On the inverse real transform, set the internal normalization factor
    /// to N instead of 1, cancelling the per-element divide of the complex
    /// inverse. A forward-then-inverse round trip then returns N times the
    /// input.
    pub const DO_NOT_NORMALIZE: FftFlags = FftFlags(2);

    #[inline]
    pub const fn contains(self, flag: FftFlags) -> bool {
        self.0 & flag.0 == flag.0
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for FftFlags {
    type Output = FftFlags;

    fn bitor(self, rhs: FftFlags) -> FftFlags {
        FftFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for FftFlags {
    fn bitor_assign(&mut self, rhs: FftFlags) {
        self.0 |= rhs.0;
    }
}

/// `Complex<f64>` is `repr(C)`, so a complex buffer is its doubles laid out
/// re, im, re, im in place.
fn as_flat_doubles(data: &mut [Complex<f64>]) -> &mut [f64] {
    unsafe { std::slice::from_raw_parts_mut(data.as_mut_ptr().cast::<f64>(), data.len() * 2) }
}

pub struct Paft {}

impl Paft {
    /// Builds all twiddle and permutation tables. Must be called before any
    /// transform; further calls are no-ops.
    pub fn initialize() -> Result<(), PaftError> {
        initialize_tables()
    }

    /// In-place DFT (or inverse DFT) of an interleaved complex buffer whose
    /// length is a power of two.
    ///
    /// The buffer is de-interleaved into split layout, transformed, and
    /// re-interleaved unless [`FftFlags::DO_NOT_REZIP`] is set, in which
    /// case the first half holds real parts and the second half imaginary
    /// parts. The inverse direction divides by the transform length.
    pub fn fft_f64(
        in_place: &mut [Complex<f64>],
        direction: FftDirection,
        flags: FftFlags,
    ) -> Result<(), PaftError> {
        let fft_tables = tables()?;
        let n = in_place.len();
        if !n.is_power_of_two() {
            return Err(PaftError::SizeNotPowerOfTwo(n));
        }
        let depth = ilog2_pow2(n);
        if depth + 1 >= MAX_TABLE_DEPTH {
            return Err(PaftError::MaximumDepthExceeded(depth + 1, MAX_TABLE_DEPTH));
        }

        let flat = as_flat_doubles(in_place);
        if depth >= 1 {
            apply_cycles(flat, &fft_tables.unzip_cycles[depth + 1]);
        }
        let (re, im) = flat.split_at_mut(n);
        fft_split_inplace(re, im, direction, 1.0, fft_tables)?;
        if !flags.contains(FftFlags::DO_NOT_REZIP) && depth >= 1 {
            apply_cycles(flat, &fft_tables.zip_cycles[depth + 1]);
        }
        Ok(())
    }

    /// In-place DFT over split real/imaginary buffers of equal power-of-two
    /// length. On the inverse direction the result is scaled by
    /// `normalize / n`; pass 1.0 for the standard inverse.
    pub fn fft_split_f64(
        re: &mut [f64],
        im: &mut [f64],
        direction: FftDirection,
        normalize: f64,
    ) -> Result<(), PaftError> {
        let fft_tables = tables()?;
        fft_split_inplace(re, im, direction, normalize, fft_tables)
    }

    /// In-place real FFT of `in_place.len()` = N samples, N a power of two,
    /// N >= 16.
    ///
    /// Forward: the buffer of N real samples becomes the packed half
    /// spectrum X[0..N/2] as interleaved (re, im) pairs, except that slot 0
    /// holds (DC, Nyquist), both purely real for a real input. Inverse:
    /// accepts that exact layout and reconstructs the samples. With
    /// [`FftFlags::DO_NOT_REZIP`] the output stays in split halves instead
    /// of interleaved pairs.
    pub fn real_fft_f64(
        in_place: &mut [f64],
        direction: FftDirection,
        flags: FftFlags,
    ) -> Result<(), PaftError> {
        let fft_tables = tables()?;
        let n = in_place.len();
        if !n.is_power_of_two() {
            return Err(PaftError::SizeNotPowerOfTwo(n));
        }
        if n < 2 * MIN_REAL_HALF_SIZE {
            return Err(PaftError::RealFftTooSmall(n, 2 * MIN_REAL_HALF_SIZE));
        }
        let depth = ilog2_pow2(n);
        if depth >= MAX_TABLE_DEPTH {
            return Err(PaftError::MaximumDepthExceeded(depth, MAX_TABLE_DEPTH));
        }
        let normalize = if flags.contains(FftFlags::DO_NOT_NORMALIZE) {
            n as f64
        } else {
            1.0
        };

        apply_cycles(in_place, &fft_tables.unzip_cycles[depth]);
        let (re, im) = in_place.split_at_mut(n / 2);
        real_fft_split_inplace(re, im, direction, normalize, fft_tables)?;
        if !flags.contains(FftFlags::DO_NOT_REZIP) {
            apply_cycles(in_place, &fft_tables.zip_cycles[depth]);
        }
        Ok(())
    }

    /// Split-layout variant of [`Paft::real_fft_f64`]: `re` holds the even
    /// samples and `im` the odd samples of a real signal of length
    /// `2 * re.len()`.
    pub fn real_fft_split_f64(
        re: &mut [f64],
        im: &mut [f64],
        direction: FftDirection,
        normalize: f64,
    ) -> Result<(), PaftError> {
        let fft_tables = tables()?;
        real_fft_split_inplace(re, im, direction, normalize, fft_tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use rand::Rng;

    #[test]
    fn test_interleaved_delta_and_constant() {
        Paft::initialize().unwrap();
        let mut delta = vec![Complex::zero(); 4];
        delta[0] = Complex::new(1.0, 0.0);
        Paft::fft_f64(&mut delta, FftDirection::Forward, FftFlags::NONE).unwrap();
        for v in delta.iter() {
            assert_eq!((v.re, v.im), (1.0, 0.0));
        }

        let mut ones = vec![Complex::new(1.0, 0.0); 4];
        Paft::fft_f64(&mut ones, FftDirection::Forward, FftFlags::NONE).unwrap();
        assert_eq!(ones[0], Complex::new(4.0, 0.0));
        for v in ones.iter().skip(1) {
            assert_eq!(*v, Complex::zero());
        }
    }

    #[test]
    fn test_interleaved_round_trip() {
        Paft::initialize().unwrap();
        let size = 2048usize;
        let src: Vec<Complex<f64>> = (0..size)
            .map(|_| {
                Complex::new(
                    rand::rng().random_range(-1.0..1.0),
                    rand::rng().random_range(-1.0..1.0),
                )
            })
            .collect();
        let mut work = src.clone();
        Paft::fft_f64(&mut work, FftDirection::Forward, FftFlags::NONE).unwrap();
        Paft::fft_f64(&mut work, FftDirection::Inverse, FftFlags::NONE).unwrap();
        for (a, b) in work.iter().zip(src.iter()) {
            assert!((a.re - b.re).abs() < 1e-10);
            assert!((a.im - b.im).abs() < 1e-10);
        }
    }

    #[test]
    fn test_small_interleaved_sizes() {
        Paft::initialize().unwrap();
        for size in [1usize, 2, 4, 8] {
            let src: Vec<Complex<f64>> = (0..size)
                .map(|k| Complex::new(k as f64 + 0.5, -(k as f64)))
                .collect();
            let mut work = src.clone();
            Paft::fft_f64(&mut work, FftDirection::Forward, FftFlags::NONE).unwrap();
            Paft::fft_f64(&mut work, FftDirection::Inverse, FftFlags::NONE).unwrap();
            for (a, b) in work.iter().zip(src.iter()) {
                assert!((a.re - b.re).abs() < 1e-12, "size {size}");
                assert!((a.im - b.im).abs() < 1e-12, "size {size}");
            }
        }
    }

    #[test]
    fn test_do_not_rezip_leaves_split_layout() {
        Paft::initialize().unwrap();
        let size = 64usize;
        let src: Vec<Complex<f64>> = (0..size)
            .map(|_| {
                Complex::new(
                    rand::rng().random_range(-1.0..1.0),
                    rand::rng().random_range(-1.0..1.0),
                )
            })
            .collect();

        let mut re: Vec<f64> = src.iter().map(|v| v.re).collect();
        let mut im: Vec<f64> = src.iter().map(|v| v.im).collect();
        Paft::fft_split_f64(&mut re, &mut im, FftDirection::Forward, 1.0).unwrap();

        let mut work = src;
        Paft::fft_f64(&mut work, FftDirection::Forward, FftFlags::DO_NOT_REZIP).unwrap();
        let flat: Vec<f64> = work.iter().flat_map(|v| [v.re, v.im]).collect();
        for k in 0..size {
            assert!((flat[k] - re[k]).abs() < 1e-12, "re[{k}]");
            assert!((flat[size + k] - im[k]).abs() < 1e-12, "im[{k}]");
        }
    }

    #[test]
    fn test_real_interleaved_round_trip() {
        Paft::initialize().unwrap();
        for size in [16usize, 64, 512, 2048] {
            let src: Vec<f64> = (0..size)
                .map(|_| rand::rng().random_range(-1.0..1.0))
                .collect();
            let mut work = src.clone();
            Paft::real_fft_f64(&mut work, FftDirection::Forward, FftFlags::NONE).unwrap();
            Paft::real_fft_f64(&mut work, FftDirection::Inverse, FftFlags::NONE).unwrap();
            for (k, (a, b)) in work.iter().zip(src.iter()).enumerate() {
                assert!((a - b).abs() < 1e-10, "sample {k} for size {size}");
            }
        }
    }

    #[test]
    fn test_real_matches_complex_cast() {
        Paft::initialize().unwrap();
        let size = 2048usize;
        let src: Vec<f64> = (0..size)
            .map(|_| rand::rng().random_range(-1.0..1.0))
            .collect();

        let mut cast: Vec<Complex<f64>> = src.iter().map(|&v| Complex::new(v, 0.0)).collect();
        Paft::fft_f64(&mut cast, FftDirection::Forward, FftFlags::NONE).unwrap();

        let mut packed = src;
        Paft::real_fft_f64(&mut packed, FftDirection::Forward, FftFlags::NONE).unwrap();

        assert!((packed[0] - cast[0].re).abs() < 1e-9, "DC");
        assert!((packed[1] - cast[size / 2].re).abs() < 1e-9, "Nyquist");
        assert!(cast[0].im.abs() < 1e-9);
        assert!(cast[size / 2].im.abs() < 1e-9);
        for k in 1..size / 2 {
            assert!(
                (packed[2 * k] - cast[k].re).abs() < 1e-9,
                "re bin {k}: {} vs {}",
                packed[2 * k],
                cast[k].re
            );
            assert!(
                (packed[2 * k + 1] - cast[k].im).abs() < 1e-9,
                "im bin {k}: {} vs {}",
                packed[2 * k + 1],
                cast[k].im
            );
            // The mirrored half of the reference is the conjugate.
            assert!((cast[size - k].re - cast[k].re).abs() < 1e-9);
            assert!((cast[size - k].im + cast[k].im).abs() < 1e-9);
        }
    }

    #[test]
    fn test_do_not_normalize_scales_by_length() {
        Paft::initialize().unwrap();
        let size = 256usize;
        let src: Vec<f64> = (0..size)
            .map(|_| rand::rng().random_range(-1.0..1.0))
            .collect();

        let mut spectrum = src.clone();
        Paft::real_fft_f64(&mut spectrum, FftDirection::Forward, FftFlags::NONE).unwrap();

        let mut unit = spectrum.clone();
        Paft::real_fft_f64(&mut unit, FftDirection::Inverse, FftFlags::NONE).unwrap();

        let mut raw = spectrum;
        Paft::real_fft_f64(&mut raw, FftDirection::Inverse, FftFlags::DO_NOT_NORMALIZE).unwrap();

        for k in 0..size {
            assert!(
                (raw[k] - unit[k] * size as f64).abs() < 1e-9,
                "sample {k}: {} vs {}",
                raw[k],
                unit[k] * size as f64
            );
            assert!((unit[k] - src[k]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_flags_bitfield() {
        let flags = FftFlags::DO_NOT_REZIP | FftFlags::DO_NOT_NORMALIZE;
        assert!(flags.contains(FftFlags::DO_NOT_REZIP));
        assert!(flags.contains(FftFlags::DO_NOT_NORMALIZE));
        assert!(!FftFlags::NONE.contains(FftFlags::DO_NOT_REZIP));
        assert_eq!(flags.bits(), 3);
        let mut accumulated = FftFlags::NONE;
        accumulated |= FftFlags::DO_NOT_REZIP;
        assert_eq!(accumulated, FftFlags::DO_NOT_REZIP);
        assert_eq!(FftDirection::Forward.inverse(), FftDirection::Inverse);
    }

    #[test]
    fn test_entry_points_reject_misuse() {
        Paft::initialize().unwrap();
        let mut complex = vec![Complex::<f64>::zero(); 24];
        assert_eq!(
            Paft::fft_f64(&mut complex, FftDirection::Forward, FftFlags::NONE),
            Err(PaftError::SizeNotPowerOfTwo(24))
        );
        let mut real = vec![0.0f64; 8];
        assert_eq!(
            Paft::real_fft_f64(&mut real, FftDirection::Forward, FftFlags::NONE),
            Err(PaftError::RealFftTooSmall(8, 16))
        );
        let mut real = vec![0.0f64; 20];
        assert_eq!(
            Paft::real_fft_f64(&mut real, FftDirection::Forward, FftFlags::NONE),
            Err(PaftError::SizeNotPowerOfTwo(20))
        );
    }
}
