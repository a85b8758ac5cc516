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
use std::error::Error;
use std::fmt::Formatter;

/// API misuse and initialization failures. Every variant is reported at the
/// call boundary, before the input buffer is touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaftError {
    OutOfMemory(usize),
    NotInitialized,
    SizeNotPowerOfTwo(usize),
    MismatchedLengths(usize, usize),
    MaximumDepthExceeded(usize, usize),
    RealFftTooSmall(usize, usize),
}

impl Error for PaftError {}

impl std::fmt::Display for PaftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PaftError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} bytes to vector"))
            }
            PaftError::NotInitialized => {
                f.write_str("Paft::initialize() must be called before any transform")
            }
            PaftError::SizeNotPowerOfTwo(size) => f.write_fmt(format_args!(
                "Transform length must be a power of two, but it was {size}"
            )),
            PaftError::MismatchedLengths(s0, s1) => f.write_fmt(format_args!(
                "Real and imaginary buffers must have equal lengths, but they were {s0} and {s1}"
            )),
            PaftError::MaximumDepthExceeded(depth, max_depth) => f.write_fmt(format_args!(
                "Transform requires tables at depth {depth}, but tables are built only below depth {max_depth}"
            )),
            PaftError::RealFftTooSmall(size, min_size) => f.write_fmt(format_args!(
                "Real transform length must be at least {min_size}, but it was {size}"
            )),
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::PaftError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
