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
use crate::FftDirection;
use crate::err::PaftError;
use crate::radix2::fft_split_inplace;
use crate::tables::{FftTables, MAX_TABLE_DEPTH};
use crate::util::ilog2_pow2;

/// Minimum half-length of the real adapter; the full real transform is
/// `2 * MIN_REAL_HALF_SIZE = 16` points.
pub(crate) const MIN_REAL_HALF_SIZE: usize = 8;

/// In-place real FFT over a split buffer of the even samples (`re`) and odd
/// samples (`im`) of an N-point real signal, N = 2 * re.len().
///
/// Forward: runs the half-length complex transform, then de-mixes the two
/// interleaved spectra with twiddles one level deeper than the half
/// transform and packs (DC, Nyquist) into slot 0. Inverse: re-mixes the packed half
/// spectrum and runs the inverse complex transform, leaving even samples in
/// `re` and odd samples in `im`.
pub(crate) fn real_fft_split_inplace(
    re: &mut [f64],
    im: &mut [f64],
    direction: FftDirection,
    normalize: f64,
    tables: &FftTables,
) -> Result<(), PaftError> {
    if re.len() != im.len() {
        return Err(PaftError::MismatchedLengths(re.len(), im.len()));
    }
    let half_len = re.len();
    if !half_len.is_power_of_two() {
        return Err(PaftError::SizeNotPowerOfTwo(half_len));
    }
    if half_len < MIN_REAL_HALF_SIZE {
        return Err(PaftError::RealFftTooSmall(
            half_len * 2,
            MIN_REAL_HALF_SIZE * 2,
        ));
    }
    let depth = ilog2_pow2(half_len);
    if depth + 1 >= MAX_TABLE_DEPTH {
        return Err(PaftError::MaximumDepthExceeded(depth + 1, MAX_TABLE_DEPTH));
    }

    match direction {
        FftDirection::Forward => {
            fft_split_inplace(re, im, FftDirection::Forward, 1.0, tables)?;
            split_spectrum(re, im, &tables.cos[depth + 1], &tables.sin[depth + 1]);
        }
        FftDirection::Inverse => {
            combine_spectrum(re, im, &tables.cos[depth + 1], &tables.sin_inv[depth + 1]);
            fft_split_inplace(re, im, FftDirection::Inverse, normalize, tables)?;
        }
    }
    Ok(())
}

/// De-mixes the half-length spectrum F into the first half of the true
/// N-point spectrum: pairwise over (k, n-k), then the self-conjugate
/// midpoint, then the (DC, Nyquist) packing of slot 0.
fn split_spectrum(re: &mut [f64], im: &mut [f64], w_re: &[f64], w_im: &[f64]) {
    split_pairs(re, im, w_re, w_im);

    let half = re.len() / 2;
    im[half] = -im[half];

    let r0 = re[0];
    let i0 = im[0];
    re[0] = r0 + i0;
    im[0] = r0 - i0;
}

/// Inverse of [`split_spectrum`]: unpacks slot 0, the midpoint, and the
/// mirrored pairs back into the half-length spectrum the complex inverse
/// expects. `w_im` is the sign-flipped sine table.
fn combine_spectrum(re: &mut [f64], im: &mut [f64], w_re: &[f64], w_im: &[f64]) {
    let r0 = re[0];
    let i0 = im[0];
    re[0] = 0.5 * (r0 + i0);
    im[0] = 0.5 * (r0 - i0);

    let half = re.len() / 2;
    im[half] = -im[half];

    combine_pairs(re, im, w_re, w_im);
}

/// Scalar pairwise de-mix from index `from` up to the midpoint.
pub(crate) fn split_pairs_scalar(
    re: &mut [f64],
    im: &mut [f64],
    w_re: &[f64],
    w_im: &[f64],
    from: usize,
) {
    let n = re.len();
    let half = n / 2;
    for k in from..half {
        let m = n - k;
        unsafe {
            let rk = *re.get_unchecked(k);
            let rm = *re.get_unchecked(m);
            let ik = *im.get_unchecked(k);
            let imm = *im.get_unchecked(m);
            let wr = *w_re.get_unchecked(k);
            let wi = *w_im.get_unchecked(k);

            let e = rk + rm;
            let f = ik - imm;
            let dr = rk - rm;
            let si = ik + imm;

            let mixed_re = dr * wi + si * wr;
            let mixed_im = si * wi - dr * wr;

            *re.get_unchecked_mut(k) = 0.5 * (e + mixed_re);
            *im.get_unchecked_mut(k) = 0.5 * (f + mixed_im);
            *re.get_unchecked_mut(m) = 0.5 * (e - mixed_re);
            *im.get_unchecked_mut(m) = 0.5 * (mixed_im - f);
        }
    }
}

/// Scalar pairwise re-mix from index `from` up to the midpoint. Solves the
/// forward mix back out; the rotation matrix is orthonormal, so no divide.
pub(crate) fn combine_pairs_scalar(
    re: &mut [f64],
    im: &mut [f64],
    w_re: &[f64],
    w_im: &[f64],
    from: usize,
) {
    let n = re.len();
    let half = n / 2;
    for k in from..half {
        let m = n - k;
        unsafe {
            let rk = *re.get_unchecked(k);
            let rm = *re.get_unchecked(m);
            let ik = *im.get_unchecked(k);
            let imm = *im.get_unchecked(m);
            let wr = *w_re.get_unchecked(k);
            let wi = *w_im.get_unchecked(k);

            let e = rk + rm;
            let f = ik - imm;
            let u = rk - rm;
            let v = ik + imm;

            let dr = -(u * wi + v * wr);
            let si = u * wr - v * wi;

            *re.get_unchecked_mut(k) = 0.5 * (e + dr);
            *im.get_unchecked_mut(k) = 0.5 * (f + si);
            *re.get_unchecked_mut(m) = 0.5 * (e - dr);
            *im.get_unchecked_mut(m) = 0.5 * (si - f);
        }
    }
}

fn split_pairs(re: &mut [f64], im: &mut [f64], w_re: &[f64], w_im: &[f64]) {
    #[cfg(all(target_arch = "aarch64", feature = "neon"))]
    {
        unsafe { crate::neon::split_pairs_f64(re, im, w_re, w_im) }
    }
    #[cfg(not(all(target_arch = "aarch64", feature = "neon")))]
    {
        #[cfg(all(target_arch = "x86_64", feature = "avx"))]
        if crate::util::has_valid_avx() {
            return unsafe { crate::avx::split_pairs_f64(re, im, w_re, w_im) };
        }
        #[cfg(target_arch = "x86_64")]
        {
            unsafe { crate::sse2::split_pairs_f64(re, im, w_re, w_im) }
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            split_pairs_scalar(re, im, w_re, w_im, 1);
        }
    }
}

fn combine_pairs(re: &mut [f64], im: &mut [f64], w_re: &[f64], w_im: &[f64]) {
    #[cfg(all(target_arch = "aarch64", feature = "neon"))]
    {
        unsafe { crate::neon::combine_pairs_f64(re, im, w_re, w_im) }
    }
    #[cfg(not(all(target_arch = "aarch64", feature = "neon")))]
    {
        #[cfg(all(target_arch = "x86_64", feature = "avx"))]
        if crate::util::has_valid_avx() {
            return unsafe { crate::avx::combine_pairs_f64(re, im, w_re, w_im) };
        }
        #[cfg(target_arch = "x86_64")]
        {
            unsafe { crate::sse2::combine_pairs_f64(re, im, w_re, w_im) }
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            combine_pairs_scalar(re, im, w_re, w_im, 1);
        }
    }
}
