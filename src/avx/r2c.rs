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
use crate::r2c::{combine_pairs_scalar, split_pairs_scalar};
use std::arch::x86_64::*;

#[inline(always)]
unsafe fn reverse_lanes(v: __m256d) -> __m256d {
    unsafe { _mm256_permute4x64_pd::<0b00_01_10_11>(v) }
}

/// Pairwise spectral de-mix at lane width 4; the mirrored sweep is loaded
/// in reverse and lane-reversed before use and on store-back.
#[target_feature(enable = "avx2", enable = "fma")]
pub(crate) unsafe fn split_pairs_f64(re: &mut [f64], im: &mut [f64], w_re: &[f64], w_im: &[f64]) {
    let n = re.len();
    let half = n / 2;
    let mut k = 1usize;
    unsafe {
        let half_v = _mm256_set1_pd(0.5);
        while k + 4 <= half {
            let mirror = n - k - 3;
            let rk = _mm256_loadu_pd(re.get_unchecked(k..).as_ptr());
            let ik = _mm256_loadu_pd(im.get_unchecked(k..).as_ptr());
            let rm = reverse_lanes(_mm256_loadu_pd(re.get_unchecked(mirror..).as_ptr()));
            let imm = reverse_lanes(_mm256_loadu_pd(im.get_unchecked(mirror..).as_ptr()));
            let wr = _mm256_loadu_pd(w_re.get_unchecked(k..).as_ptr());
            let wi = _mm256_loadu_pd(w_im.get_unchecked(k..).as_ptr());

            let e = _mm256_add_pd(rk, rm);
            let f = _mm256_sub_pd(ik, imm);
            let dr = _mm256_sub_pd(rk, rm);
            let si = _mm256_add_pd(ik, imm);

            let mixed_re = _mm256_fmadd_pd(dr, wi, _mm256_mul_pd(si, wr));
            let mixed_im = _mm256_fmsub_pd(si, wi, _mm256_mul_pd(dr, wr));

            let left_re = _mm256_mul_pd(half_v, _mm256_add_pd(e, mixed_re));
            let left_im = _mm256_mul_pd(half_v, _mm256_add_pd(f, mixed_im));
            let right_re = _mm256_mul_pd(half_v, _mm256_sub_pd(e, mixed_re));
            let right_im = _mm256_mul_pd(half_v, _mm256_sub_pd(mixed_im, f));

            _mm256_storeu_pd(re.get_unchecked_mut(k..).as_mut_ptr(), left_re);
            _mm256_storeu_pd(im.get_unchecked_mut(k..).as_mut_ptr(), left_im);
            _mm256_storeu_pd(
                re.get_unchecked_mut(mirror..).as_mut_ptr(),
                reverse_lanes(right_re),
            );
            _mm256_storeu_pd(
                im.get_unchecked_mut(mirror..).as_mut_ptr(),
                reverse_lanes(right_im),
            );
            k += 4;
        }
    }
    split_pairs_scalar(re, im, w_re, w_im, k);
}

/// Pairwise spectral re-mix at lane width 4, inverse of [`split_pairs_f64`].
/// `w_im` is the sign-flipped sine table.
#[target_feature(enable = "avx2", enable = "fma")]
pub(crate) unsafe fn combine_pairs_f64(re: &mut [f64], im: &mut [f64], w_re: &[f64], w_im: &[f64]) {
    let n = re.len();
    let half = n / 2;
    let mut k = 1usize;
    unsafe {
        let half_v = _mm256_set1_pd(0.5);
        let zero = _mm256_setzero_pd();
        while k + 4 <= half {
            let mirror = n - k - 3;
            let rk = _mm256_loadu_pd(re.get_unchecked(k..).as_ptr());
            let ik = _mm256_loadu_pd(im.get_unchecked(k..).as_ptr());
            let rm = reverse_lanes(_mm256_loadu_pd(re.get_unchecked(mirror..).as_ptr()));
            let imm = reverse_lanes(_mm256_loadu_pd(im.get_unchecked(mirror..).as_ptr()));
            let wr = _mm256_loadu_pd(w_re.get_unchecked(k..).as_ptr());
            let wi = _mm256_loadu_pd(w_im.get_unchecked(k..).as_ptr());

            let e = _mm256_add_pd(rk, rm);
            let f = _mm256_sub_pd(ik, imm);
            let u = _mm256_sub_pd(rk, rm);
            let v = _mm256_add_pd(ik, imm);

            let dr = _mm256_sub_pd(zero, _mm256_fmadd_pd(u, wi, _mm256_mul_pd(v, wr)));
            let si = _mm256_fmsub_pd(u, wr, _mm256_mul_pd(v, wi));

            let left_re = _mm256_mul_pd(half_v, _mm256_add_pd(e, dr));
            let left_im = _mm256_mul_pd(half_v, _mm256_add_pd(f, si));
            let right_re = _mm256_mul_pd(half_v, _mm256_sub_pd(e, dr));
            let right_im = _mm256_mul_pd(half_v, _mm256_sub_pd(si, f));

            _mm256_storeu_pd(re.get_unchecked_mut(k..).as_mut_ptr(), left_re);
            _mm256_storeu_pd(im.get_unchecked_mut(k..).as_mut_ptr(), left_im);
            _mm256_storeu_pd(
                re.get_unchecked_mut(mirror..).as_mut_ptr(),
                reverse_lanes(right_re),
            );
            _mm256_storeu_pd(
                im.get_unchecked_mut(mirror..).as_mut_ptr(),
                reverse_lanes(right_im),
            );
            k += 4;
        }
    }
    combine_pairs_scalar(re, im, w_re, w_im, k);
}
