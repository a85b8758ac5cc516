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

/// Base-2 logarithm of a power of two.
#[inline(always)]
pub(crate) const fn ilog2_pow2(n: usize) -> usize {
    debug_assert!(n.is_power_of_two());
    n.trailing_zeros() as usize
}

/// Rotates `x` right by one bit within a `width`-bit value, `width >= 1`.
#[inline(always)]
pub(crate) const fn rotate_right(x: usize, width: u32) -> usize {
    (x >> 1) | ((x & 1) << (width - 1))
}

/// Rotates `x` left by one bit within a `width`-bit value, `width >= 1`.
#[inline(always)]
pub(crate) const fn rotate_left(x: usize, width: u32) -> usize {
    ((x << 1) & ((1usize << width) - 1)) | ((x >> (width - 1)) & 1)
}

/// Reverses the low `width` bits of `x`.
#[inline(always)]
pub(crate) const fn reverse_bits(x: usize, width: u32) -> usize {
    if width == 0 {
        return 0;
    }
    x.reverse_bits() >> (usize::BITS - width)
}

/// Computes `(sin(πx), cos(πx))`, exact at quadrant boundaries so that
/// twiddle tables hold clean ±1/±0 values there.
pub(crate) fn sincos_pi(x: f64) -> (f64, f64) {
    let quadrants = 2.0 * x;
    if quadrants == quadrants.trunc() {
        return match (quadrants as i64).rem_euclid(4) {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        };
    }
    (std::f64::consts::PI * x).sin_cos()
}

#[cfg(all(target_arch = "x86_64", feature = "avx"))]
pub(crate) fn has_valid_avx() -> bool {
    std::arch::is_x86_feature_detected!("avx2") && std::arch::is_x86_feature_detected!("fma")
}

#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
pub(crate) fn has_valid_avx512() -> bool {
    std::arch::is_x86_feature_detected!("avx512f")
}
