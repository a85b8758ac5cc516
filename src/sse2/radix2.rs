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
use crate::radix2::scalar_stages;
use std::arch::x86_64::*;

/// Stage driver at lane width 2. SSE2 is part of the x86_64 baseline, so
/// this path needs no runtime detection.
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn butterfly_stages_f64(
    re: &mut [f64],
    im: &mut [f64],
    depth: usize,
    cos_t: &[Vec<f64>],
    sin_t: &[Vec<f64>],
) {
    let n = re.len();
    scalar_stages(re, im, 1, depth.min(2), cos_t, sin_t);
    for s in 3..=depth {
        let m = 1usize << s;
        let h = m >> 1;
        let w_re = cos_t[s].as_slice();
        let w_im = sin_t[s].as_slice();
        for k in (0..n).step_by(m) {
            let mut j = 0usize;
            while j + 2 <= h {
                unsafe {
                    let wr = _mm_loadu_pd(w_re.get_unchecked(j..).as_ptr());
                    let wi = _mm_loadu_pd(w_im.get_unchecked(j..).as_ptr());
                    let xr = _mm_loadu_pd(re.get_unchecked(k + j + h..).as_ptr());
                    let xi = _mm_loadu_pd(im.get_unchecked(k + j + h..).as_ptr());

                    let t_re = _mm_sub_pd(_mm_mul_pd(wr, xr), _mm_mul_pd(wi, xi));
                    let t_im = _mm_add_pd(_mm_mul_pd(wi, xr), _mm_mul_pd(wr, xi));

                    let ur = _mm_loadu_pd(re.get_unchecked(k + j..).as_ptr());
                    let ui = _mm_loadu_pd(im.get_unchecked(k + j..).as_ptr());

                    _mm_storeu_pd(
                        re.get_unchecked_mut(k + j..).as_mut_ptr(),
                        _mm_add_pd(ur, t_re),
                    );
                    _mm_storeu_pd(
                        im.get_unchecked_mut(k + j..).as_mut_ptr(),
                        _mm_add_pd(ui, t_im),
                    );
                    _mm_storeu_pd(
                        re.get_unchecked_mut(k + j + h..).as_mut_ptr(),
                        _mm_sub_pd(ur, t_re),
                    );
                    _mm_storeu_pd(
                        im.get_unchecked_mut(k + j + h..).as_mut_ptr(),
                        _mm_sub_pd(ui, t_im),
                    );
                }
                j += 2;
            }
        }
    }
}
