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
use crate::tables::CycleList;

/// Applies the bit-reversal permutation to both halves of a split buffer in
/// one pass over the precomputed swap pairs.
pub(crate) fn bit_reverse_split(re: &mut [f64], im: &mut [f64], pairs: &[(usize, usize)]) {
    for &(i, j) in pairs {
        re.swap(i, j);
        im.swap(i, j);
    }
}

/// Applies a cycle-decomposed permutation in place: one saved element per
/// cycle, every value moves one step along its orbit.
pub(crate) fn apply_cycles(data: &mut [f64], cycles: &CycleList) {
    for cycle in cycles {
        let Some(&last) = cycle.last() else {
            continue;
        };
        unsafe {
            let mut saved = *data.get_unchecked(last);
            for &idx in cycle.iter() {
                let displaced = *data.get_unchecked(idx);
                *data.get_unchecked_mut(idx) = saved;
                saved = displaced;
            }
        }
    }
}
