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

/// Stage driver at lane width 4. From stage 3 upward the half-block length
/// is a multiple of 4, so the inner loop never needs a tail.
#[target_feature(enable = "avx2", enable = "fma")]
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
            while j + 4 <= h {
                unsafe {
                    let wr = _mm256_loadu_pd(w_re.get_unchecked(j..).as_ptr());
                    let wi = _mm256_loadu_pd(w_im.get_unchecked(j..).as_ptr());
                    let xr = _mm256_loadu_pd(re.get_unchecked(k + j + h..).as_ptr());
                    let xi = _mm256_loadu_pd(im.get_unchecked(k + j + h..).as_ptr());

                    let t_re = _mm256_fmsub_pd(wr, xr, _mm256_mul_pd(wi, xi));
                    let t_im = _mm256_fmadd_pd(wi, xr, _mm256_mul_pd(wr, xi));

                    let ur = _mm256_loadu_pd(re.get_unchecked(k + j..).as_ptr());
                    let ui = _mm256_loadu_pd(im.get_unchecked(k + j..).as_ptr());

                    _mm256_storeu_pd(
                        re.get_unchecked_mut(k + j..).as_mut_ptr(),
                        _mm256_add_pd(ur, t_re),
                    );
                    _mm256_storeu_pd(
                        im.get_unchecked_mut(k + j..).as_mut_ptr(),
                        _mm256_add_pd(ui, t_im),
                    );
                    _mm256_storeu_pd(
                        re.get_unchecked_mut(k + j + h..).as_mut_ptr(),
                        _mm256_sub_pd(ur, t_re),
                    );
                    _mm256_storeu_pd(
                        im.get_unchecked_mut(k + j + h..).as_mut_ptr(),
                        _mm256_sub_pd(ui, t_im),
                    );
                }
                j += 4;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radix2::scalar_stages;
    use crate::util::has_valid_avx;
    use rand::Rng;

    #[test]
    fn test_avx_stages_match_scalar() {
        if !has_valid_avx() {
            return;
        }
        crate::tables::initialize_tables().unwrap();
        let t = crate::tables::tables().unwrap();
        for l in 1..13usize {
            let size = 1usize << l;
            let re: Vec<f64> = (0..size)
                .map(|_| rand::rng().random_range(-1.0..1.0))
                .collect();
            let im: Vec<f64> = (0..size)
                .map(|_| rand::rng().random_range(-1.0..1.0))
                .collect();
            let (mut v_re, mut v_im) = (re.clone(), im.clone());
            let (mut s_re, mut s_im) = (re, im);
            unsafe { butterfly_stages_f64(&mut v_re, &mut v_im, l, &t.cos, &t.sin_inv) };
            scalar_stages(&mut s_re, &mut s_im, 1, l, &t.cos, &t.sin_inv);
            for k in 0..size {
                assert!(
                    (v_re[k] - s_re[k]).abs() < 1e-11,
                    "re[{k}] = {} vs {} for size {size}",
                    v_re[k],
                    s_re[k]
                );
                assert!(
                    (v_im[k] - s_im[k]).abs() < 1e-11,
                    "im[{k}] = {} vs {} for size {size}",
                    v_im[k],
                    s_im[k]
                );
            }
        }
    }
}
