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
use std::arch::aarch64::*;

/// Stage driver at lane width 2 over `float64x2_t`.
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
                    let wr = vld1q_f64(w_re.get_unchecked(j..).as_ptr());
                    let wi = vld1q_f64(w_im.get_unchecked(j..).as_ptr());
                    let xr = vld1q_f64(re.get_unchecked(k + j + h..).as_ptr());
                    let xi = vld1q_f64(im.get_unchecked(k + j + h..).as_ptr());

                    let t_re = vfmsq_f64(vmulq_f64(wr, xr), wi, xi);
                    let t_im = vfmaq_f64(vmulq_f64(wr, xi), wi, xr);

                    let ur = vld1q_f64(re.get_unchecked(k + j..).as_ptr());
                    let ui = vld1q_f64(im.get_unchecked(k + j..).as_ptr());

                    vst1q_f64(
                        re.get_unchecked_mut(k + j..).as_mut_ptr(),
                        vaddq_f64(ur, t_re),
                    );
                    vst1q_f64(
                        im.get_unchecked_mut(k + j..).as_mut_ptr(),
                        vaddq_f64(ui, t_im),
                    );
                    vst1q_f64(
                        re.get_unchecked_mut(k + j + h..).as_mut_ptr(),
                        vsubq_f64(ur, t_re),
                    );
                    vst1q_f64(
                        im.get_unchecked_mut(k + j + h..).as_mut_ptr(),
                        vsubq_f64(ui, t_im),
                    );
                }
                j += 2;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radix2::scalar_stages;
    use rand::Rng;

    #[test]
    fn test_neon_stages_match_scalar() {
        crate::tables::initialize_tables().unwrap();
        let t = crate::tables::tables().unwrap();
        for l in 1..12usize {
            let size = 1usize << l;
            let re: Vec<f64> = (0..size)
                .map(|_| rand::rng().random_range(-1.0..1.0))
                .collect();
            let im: Vec<f64> = (0..size)
                .map(|_| rand::rng().random_range(-1.0..1.0))
                .collect();
            let (mut v_re, mut v_im) = (re.clone(), im.clone());
            let (mut s_re, mut s_im) = (re, im);
            unsafe { butterfly_stages_f64(&mut v_re, &mut v_im, l, &t.cos, &t.sin) };
            scalar_stages(&mut s_re, &mut s_im, 1, l, &t.cos, &t.sin);
            for k in 0..size {
                assert!((v_re[k] - s_re[k]).abs() < 1e-11, "re[{k}] for size {size}");
                assert!((v_im[k] - s_im[k]).abs() < 1e-11, "im[{k}] for size {size}");
            }
        }
    }
}
