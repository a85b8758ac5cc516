/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use num_complex::Complex;
use paft::{FftDirection, FftFlags, Paft};
use rand::Rng;
use rustfft::FftPlanner;

const SIZES: [usize; 5] = [256, 1024, 4096, 16384, 65536];

fn make_input(n: usize) -> Vec<Complex<f64>> {
    (0..n)
        .map(|_| {
            Complex::new(
                rand::rng().random_range(-1.0..1.0),
                rand::rng().random_range(-1.0..1.0),
            )
        })
        .collect()
}

pub fn bench_paft_forward(c: &mut Criterion) {
    Paft::initialize().unwrap();
    for n in SIZES {
        c.bench_function(&format!("paft forward {}", n), |b| {
            b.iter_batched(
                || make_input(n),
                |mut data| {
                    Paft::fft_f64(&mut data, FftDirection::Forward, FftFlags::NONE).unwrap();
                },
                BatchSize::LargeInput,
            );
        });
    }
}

pub fn bench_paft_forward_split(c: &mut Criterion) {
    Paft::initialize().unwrap();
    for n in SIZES {
        c.bench_function(&format!("paft forward split {}", n), |b| {
            b.iter_batched(
                || {
                    let data = make_input(n);
                    (
                        data.iter().map(|v| v.re).collect::<Vec<_>>(),
                        data.iter().map(|v| v.im).collect::<Vec<_>>(),
                    )
                },
                |(mut re, mut im)| {
                    Paft::fft_split_f64(&mut re, &mut im, FftDirection::Forward, 1.0).unwrap();
                },
                BatchSize::LargeInput,
            );
        });
    }
}

pub fn bench_rustfft_forward(c: &mut Criterion) {
    for n in SIZES {
        let fft = FftPlanner::<f64>::new().plan_fft_forward(n);
        c.bench_function(&format!("rustfft forward {}", n), |b| {
            b.iter_batched(
                || make_input(n),
                |mut data| {
                    fft.process(&mut data);
                },
                BatchSize::LargeInput,
            );
        });
    }
}

criterion_group!(
    benches,
    bench_paft_forward,
    bench_paft_forward_split,
    bench_rustfft_forward
);
criterion_main!(benches);
