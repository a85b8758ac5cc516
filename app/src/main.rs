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

use num_complex::Complex;
use paft::{FftDirection, FftFlags, Paft};
use rustfft::FftPlanner;

fn main() {
    Paft::initialize().unwrap();

    let mut data = vec![
        Complex::new(1.0f64, 4.0),
        Complex::new(5.0, -1.0),
        Complex::new(7.0, 3.0),
        Complex::new(9.0, 5.0),
        Complex::new(1.0, 4.0),
        Complex::new(-2.0, 0.5),
        Complex::new(3.0, -3.0),
        Complex::new(0.0, 2.0),
    ];

    let o_data = data.clone();
    let mut cvt = data.clone();

    Paft::fft_f64(&mut data, FftDirection::Forward, FftFlags::NONE).unwrap();

    for (i, val) in data.iter().enumerate() {
        println!("X[{}] = {}", i, val);
    }

    let mut planner = FftPlanner::<f64>::new();
    let planned_fft = planner.plan_fft_forward(cvt.len());
    planned_fft.process(&mut cvt);

    for (i, (a, b)) in data.iter().zip(cvt.iter()).enumerate() {
        println!(
            "bin {}: paft {} rustfft {} |diff| = {:.3e}",
            i,
            a,
            b,
            (a - b).norm()
        );
    }

    Paft::fft_f64(&mut data, FftDirection::Inverse, FftFlags::NONE).unwrap();

    for (i, (a, b)) in data.iter().zip(o_data.iter()).enumerate() {
        println!("round trip bin {}: {} vs {}", i, a, b);
    }
}
