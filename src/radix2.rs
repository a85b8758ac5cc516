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
use crate::permute::bit_reverse_split;
use crate::tables::{FftTables, MAX_TABLE_DEPTH};
use crate::util::ilog2_pow2;

/// Validates a split-layout buffer pair and returns its depth L, 2^L = len.
pub(crate) fn check_split_layout(re_len: usize, im_len: usize) -> Result<usize, PaftError> {
    if re_len != im_len {
        return Err(PaftError::MismatchedLengths(re_len, im_len));
    }
    if !re_len.is_power_of_two() {
        return Err(PaftError::SizeNotPowerOfTwo(re_len));
    }
    let depth = ilog2_pow2(re_len);
    if depth + 1 >= MAX_TABLE_DEPTH {
        return Err(PaftError::MaximumDepthExceeded(depth + 1, MAX_TABLE_DEPTH));
    }
    Ok(depth)
}

/// In-place radix-2 DIT transform over a split complex buffer.
///
/// Bit-reverses both halves, runs the staged butterfly, and on the inverse
/// direction scales every element by `normalize / n`.
pub(crate) fn fft_split_inplace(
    re: &mut [f64],
    im: &mut [f64],
    direction: FftDirection,
    normalize: f64,
    tables: &FftTables,
) -> Result<(), PaftError> {
    let depth = check_split_layout(re.len(), im.len())?;

    bit_reverse_split(re, im, &tables.swap_pairs[depth]);

    let sin_sel = match direction {
        FftDirection::Forward => tables.sin.as_slice(),
        FftDirection::Inverse => tables.sin_inv.as_slice(),
    };
    butterfly_stages(re, im, depth, &tables.cos, sin_sel);

    if direction == FftDirection::Inverse {
        let scale = normalize / re.len() as f64;
        scale_split(re, im, scale);
    }
    Ok(())
}

pub(crate) fn scale_split(re: &mut [f64], im: &mut [f64], scale: f64) {
    for v in re.iter_mut() {
        *v *= scale;
    }
    for v in im.iter_mut() {
        *v *= scale;
    }
}

/// Runs butterfly stages `from..=to` with plain scalar arithmetic. The SIMD
/// drivers reuse this for stages 1 and 2, whose blocks are too short for a
/// full vector of distinct twiddles.
pub(crate) fn scalar_stages(
    re: &mut [f64],
    im: &mut [f64],
    from: usize,
    to: usize,
    cos_t: &[Vec<f64>],
    sin_t: &[Vec<f64>],
) {
    let n = re.len();
    for s in from..=to {
        let m = 1usize << s;
        let h = m >> 1;
        let w_re = cos_t[s].as_slice();
        let w_im = sin_t[s].as_slice();
        for k in (0..n).step_by(m) {
            for j in 0..h {
                let e = k + j;
                let o = e + h;
                unsafe {
                    let wr = *w_re.get_unchecked(j);
                    let wi = *w_im.get_unchecked(j);
                    let xr = *re.get_unchecked(o);
                    let xi = *im.get_unchecked(o);
                    let t_re = wr * xr - wi * xi;
                    let t_im = wi * xr + wr * xi;
                    let ur = *re.get_unchecked(e);
                    let ui = *im.get_unchecked(e);
                    *re.get_unchecked_mut(e) = ur + t_re;
                    *im.get_unchecked_mut(e) = ui + t_im;
                    *re.get_unchecked_mut(o) = ur - t_re;
                    *im.get_unchecked_mut(o) = ui - t_im;
                }
            }
        }
    }
}

/// Stage driver entry: picks the widest kernel the target offers.
pub(crate) fn butterfly_stages(
    re: &mut [f64],
    im: &mut [f64],
    depth: usize,
    cos_t: &[Vec<f64>],
    sin_t: &[Vec<f64>],
) {
    #[cfg(all(target_arch = "aarch64", feature = "neon"))]
    {
        unsafe { crate::neon::butterfly_stages_f64(re, im, depth, cos_t, sin_t) }
    }
    #[cfg(not(all(target_arch = "aarch64", feature = "neon")))]
    {
        #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
        if crate::util::has_valid_avx512() {
            return unsafe { crate::avx512::butterfly_stages_f64(re, im, depth, cos_t, sin_t) };
        }
        #[cfg(all(target_arch = "x86_64", feature = "avx"))]
        if crate::util::has_valid_avx() {
            return unsafe { crate::avx::butterfly_stages_f64(re, im, depth, cos_t, sin_t) };
        }
        #[cfg(target_arch = "x86_64")]
        {
            unsafe { crate::sse2::butterfly_stages_f64(re, im, depth, cos_t, sin_t) }
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            scalar_stages(re, im, 1, depth, cos_t, sin_t);
        }
    }
}
