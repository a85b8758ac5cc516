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
use std::arch::aarch64::*;

#[inline(always)]
unsafe fn reverse_lanes(v: float64x2_t) -> float64x2_t {
    unsafe { vextq_f64::<1>(v, v) }
}

/// Pairwise spectral de-mix at lane width 2; the mirrored sweep is loaded
/// in reverse and lane-reversed before use and on store-back.
pub(crate) unsafe fn split_pairs_f64(re: &mut [f64], im: &mut [f64], w_re: &[f64], w_im: &[f64]) {
    let n = re.len();
    let half = n / 2;
    let mut k = 1usize;
    unsafe {
        let half_v = vdupq_n_f64(0.5);
        while k + 2 <= half {
            let mirror = n - k - 1;
            let rk = vld1q_f64(re.get_unchecked(k..).as_ptr());
            let ik = vld1q_f64(im.get_unchecked(k..).as_ptr());
            let rm = reverse_lanes(vld1q_f64(re.get_unchecked(mirror..).as_ptr()));
            let imm = reverse_lanes(vld1q_f64(im.get_unchecked(mirror..).as_ptr()));
            let wr = vld1q_f64(w_re.get_unchecked(k..).as_ptr());
            let wi = vld1q_f64(w_im.get_unchecked(k..).as_ptr());

            let e = vaddq_f64(rk, rm);
            let f = vsubq_f64(ik, imm);
            let dr = vsubq_f64(rk, rm);
            let si = vaddq_f64(ik, imm);

            let mixed_re = vfmaq_f64(vmulq_f64(si, wr), dr, wi);
            let mixed_im = vfmsq_f64(vmulq_f64(si, wi), dr, wr);

            let left_re = vmulq_f64(half_v, vaddq_f64(e, mixed_re));
            let left_im = vmulq_f64(half_v, vaddq_f64(f, mixed_im));
            let right_re = vmulq_f64(half_v, vsubq_f64(e, mixed_re));
            let right_im = vmulq_f64(half_v, vsubq_f64(mixed_im, f));

            vst1q_f64(re.get_unchecked_mut(k..).as_mut_ptr(), left_re);
            vst1q_f64(im.get_unchecked_mut(k..).as_mut_ptr(), left_im);
            vst1q_f64(
                re.get_unchecked_mut(mirror..).as_mut_ptr(),
                reverse_lanes(right_re),
            );
            vst1q_f64(
                im.get_unchecked_mut(mirror..).as_mut_ptr(),
                reverse_lanes(right_im),
            );
            k += 2;
        }
    }
    split_pairs_scalar(re, im, w_re, w_im, k);
}

/// Pairwise spectral re-mix at lane width 2, inverse of [`split_pairs_f64`].
/// `w_im` is the sign-flipped sine table.
pub(crate) unsafe fn combine_pairs_f64(re: &mut [f64], im: &mut [f64], w_re: &[f64], w_im: &[f64]) {
    let n = re.len();
    let half = n / 2;
    let mut k = 1usize;
    unsafe {
        let half_v = vdupq_n_f64(0.5);
        while k + 2 <= half {
            let mirror = n - k - 1;
            let rk = vld1q_f64(re.get_unchecked(k..).as_ptr());
            let ik = vld1q_f64(im.get_unchecked(k..).as_ptr());
            let rm = reverse_lanes(vld1q_f64(re.get_unchecked(mirror..).as_ptr()));
            let imm = reverse_lanes(vld1q_f64(im.get_unchecked(mirror..).as_ptr()));
            let wr = vld1q_f64(w_re.get_unchecked(k..).as_ptr());
            let wi = vld1q_f64(w_im.get_unchecked(k..).as_ptr());

            let e = vaddq_f64(rk, rm);
            let f = vsubq_f64(ik, imm);
            let u = vsubq_f64(rk, rm);
            let v = vaddq_f64(ik, imm);

            let dr = vnegq_f64(vfmaq_f64(vmulq_f64(v, wr), u, wi));
            let si = vfmsq_f64(vmulq_f64(u, wr), v, wi);

            let left_re = vmulq_f64(half_v, vaddq_f64(e, dr));
            let left_im = vmulq_f64(half_v, vaddq_f64(f, si));
            let right_re = vmulq_f64(half_v, vsubq_f64(e, dr));
            let right_im = vmulq_f64(half_v, vsubq_f64(si, f));

            vst1q_f64(re.get_unchecked_mut(k..).as_mut_ptr(), left_re);
            vst1q_f64(im.get_unchecked_mut(k..).as_mut_ptr(), left_im);
            vst1q_f64(
                re.get_unchecked_mut(mirror..).as_mut_ptr(),
                reverse_lanes(right_re),
            );
            vst1q_f64(
                im.get_unchecked_mut(mirror..).as_mut_ptr(),
                reverse_lanes(right_im),
            );
            k += 2;
        }
    }
    combine_pairs_scalar(re, im, w_re, w_im, k);
}
