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
use crate::err::{PaftError, try_vec};
use crate::util::{reverse_bits, rotate_left, rotate_right, sincos_pi};
use std::sync::OnceLock;

/// Tables are built through depth `MAX_TABLE_DEPTH - 1` for twiddles and
/// swap pairs, and through `MAX_TABLE_DEPTH` for the interleave cycles.
/// A complex transform of length 2^L needs `L + 1 < MAX_TABLE_DEPTH`; the
/// real adapter shares the same bound for its half-length transform.
pub(crate) const MAX_TABLE_DEPTH: usize = 18;

pub(crate) type CycleList = Vec<Vec<usize>>;

pub(crate) struct FftTables {
    /// `cos[d][k] = cos(-2πk / 2^d)`, for d in `[0, MAX_TABLE_DEPTH)`.
    pub(crate) cos: Vec<Vec<f64>>,
    /// `sin[d][k] = sin(-2πk / 2^d)`.
    pub(crate) sin: Vec<Vec<f64>>,
    /// Elementwise negation of `sin`, selected for inverse transforms so the
    /// butterfly never flips a sign in the inner loop.
    pub(crate) sin_inv: Vec<Vec<f64>>,
    /// Per depth, the (i, j) swaps whose application is the bit-reversal
    /// permutation. One pair per non-trivial orbit, i < j, ascending in i.
    pub(crate) swap_pairs: Vec<Vec<(usize, usize)>>,
    /// Per depth d in `[2, MAX_TABLE_DEPTH]`, the cycle decomposition of
    /// p -> rotate_right(p, d): evens to the first half, odds to the second.
    pub(crate) unzip_cycles: Vec<CycleList>,
    /// Cycle decomposition of the inverse permutation p -> rotate_left(p, d).
    pub(crate) zip_cycles: Vec<CycleList>,
}

fn build_twiddle_tables() -> Result<(Vec<Vec<f64>>, Vec<Vec<f64>>, Vec<Vec<f64>>), PaftError> {
    let mut cos = Vec::with_capacity(MAX_TABLE_DEPTH);
    let mut sin = Vec::with_capacity(MAX_TABLE_DEPTH);
    let mut sin_inv = Vec::with_capacity(MAX_TABLE_DEPTH);
    for depth in 0..MAX_TABLE_DEPTH {
        let size = 1usize << depth;
        let mut c = try_vec![0f64; size];
        let mut s = try_vec![0f64; size];
        let mut si = try_vec![0f64; size];
        for k in 0..size {
            let (t_sin, t_cos) = sincos_pi(-2.0 * k as f64 / size as f64);
            c[k] = t_cos;
            s[k] = t_sin;
            si[k] = -t_sin;
        }
        cos.push(c);
        sin.push(s);
        sin_inv.push(si);
    }
    Ok((cos, sin, sin_inv))
}

fn build_swap_pair_tables() -> Result<Vec<Vec<(usize, usize)>>, PaftError> {
    let mut tables = Vec::with_capacity(MAX_TABLE_DEPTH);
    for depth in 0..MAX_TABLE_DEPTH {
        let size = 1usize << depth;
        let mut pairs = Vec::new();
        pairs
            .try_reserve(size / 2)
            .map_err(|_| PaftError::OutOfMemory(size / 2))?;
        for j in 0..size {
            let r = reverse_bits(j, depth as u32);
            if r > j {
                pairs.push((j, r));
            }
        }
        tables.push(pairs);
    }
    Ok(tables)
}

fn build_cycle_tables(rotate: fn(usize, u32) -> usize) -> Result<Vec<CycleList>, PaftError> {
    let mut tables = Vec::with_capacity(MAX_TABLE_DEPTH + 1);
    // Depths 0 and 1: the permutation is the identity, no cycles stored.
    tables.push(Vec::new());
    tables.push(Vec::new());
    for depth in 2..=MAX_TABLE_DEPTH {
        let size = 1usize << depth;
        let mut touched = try_vec![false; size];
        let mut cycles: CycleList = Vec::new();
        // 0 and size - 1 are fixed points of both rotations.
        for leader in 1..size - 1 {
            if touched[leader] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut p = leader;
            loop {
                cycle.push(p);
                touched[p] = true;
                p = rotate(p, depth as u32);
                if p == leader {
                    break;
                }
            }
            cycles.push(cycle);
        }
        tables.push(cycles);
    }
    Ok(tables)
}

impl FftTables {
    fn build() -> Result<FftTables, PaftError> {
        let (cos, sin, sin_inv) = build_twiddle_tables()?;
        Ok(FftTables {
            cos,
            sin,
            sin_inv,
            swap_pairs: build_swap_pair_tables()?,
            unzip_cycles: build_cycle_tables(rotate_right)?,
            zip_cycles: build_cycle_tables(rotate_left)?,
        })
    }
}

static TABLES: OnceLock<FftTables> = OnceLock::new();

/// Builds all tables once. Subsequent calls are no-ops.
pub(crate) fn initialize_tables() -> Result<(), PaftError> {
    if TABLES.get().is_some() {
        return Ok(());
    }
    let built = FftTables::build()?;
    // A racing initializer may have won; its tables are identical.
    let _ = TABLES.set(built);
    Ok(())
}

#[inline]
pub(crate) fn tables() -> Result<&'static FftTables, PaftError> {
    TABLES.get().ok_or(PaftError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::ilog2_pow2;

    fn built() -> &'static FftTables {
        initialize_tables().unwrap();
        tables().unwrap()
    }

    #[test]
    fn test_twiddles_on_unit_circle() {
        let t = built();
        for depth in 0..MAX_TABLE_DEPTH {
            assert_eq!(t.cos[depth][0], 1.0);
            assert_eq!(t.sin[depth][0], 0.0);
            for k in 0..1usize << depth {
                let magnitude = t.cos[depth][k] * t.cos[depth][k] + t.sin[depth][k] * t.sin[depth][k];
                assert!(
                    (magnitude - 1.0).abs() < 1e-14,
                    "|w|^2 = {magnitude} at depth {depth}, k {k}"
                );
                assert_eq!(t.sin_inv[depth][k], -t.sin[depth][k]);
            }
        }
    }

    #[test]
    fn test_twiddle_angles() {
        let t = built();
        for depth in 0..12 {
            let size = 1usize << depth;
            for k in 0..size {
                let theta = -2.0 * std::f64::consts::PI * k as f64 / size as f64;
                assert!((t.cos[depth][k] - theta.cos()).abs() < 1e-14);
                assert!((t.sin[depth][k] - theta.sin()).abs() < 1e-14);
            }
        }
    }

    #[test]
    fn test_swap_pairs_match_bit_reversal() {
        let t = built();
        for depth in 0..12u32 {
            let size = 1usize << depth;
            let mut data: Vec<usize> = (0..size).collect();
            for &(i, j) in t.swap_pairs[depth as usize].iter() {
                assert!(i < j, "pair ({i}, {j}) out of order at depth {depth}");
                data.swap(i, j);
            }
            for (j, &v) in data.iter().enumerate() {
                assert_eq!(v, reverse_bits(j, depth), "depth {depth}, index {j}");
            }
        }
    }

    #[test]
    fn test_swap_pairs_touch_each_slot_once() {
        let t = built();
        for depth in 0..MAX_TABLE_DEPTH {
            let mut seen = vec![false; 1usize << depth];
            for &(i, j) in t.swap_pairs[depth].iter() {
                assert!(!seen[i] && !seen[j]);
                seen[i] = true;
                seen[j] = true;
            }
        }
    }

    #[test]
    fn test_cycles_cover_rotation_orbits() {
        let t = built();
        for depth in 2..=12usize {
            let size = 1usize << depth;
            let mut seen = vec![false; size];
            for cycle in t.unzip_cycles[depth].iter() {
                assert!(cycle.len() > 1);
                for window in cycle.windows(2) {
                    assert_eq!(window[1], rotate_right(window[0], depth as u32));
                }
                let last = *cycle.last().unwrap();
                assert_eq!(rotate_right(last, depth as u32), cycle[0]);
                for &p in cycle {
                    assert!(!seen[p], "slot {p} visited twice at depth {depth}");
                    seen[p] = true;
                }
            }
            assert!(!seen[0] && !seen[size - 1]);
            assert!(seen[1..size - 1].iter().all(|&v| v));
        }
    }

    #[test]
    fn test_table_extents() {
        let t = built();
        assert_eq!(t.cos.len(), MAX_TABLE_DEPTH);
        assert_eq!(t.swap_pairs.len(), MAX_TABLE_DEPTH);
        assert_eq!(t.unzip_cycles.len(), MAX_TABLE_DEPTH + 1);
        assert_eq!(t.zip_cycles.len(), MAX_TABLE_DEPTH + 1);
        for depth in 0..MAX_TABLE_DEPTH {
            assert_eq!(t.cos[depth].len(), 1usize << depth);
            assert_eq!(ilog2_pow2(t.cos[depth].len()), depth);
        }
    }
}
