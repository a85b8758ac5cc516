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

fn make_samples(n: usize) -> Vec<f64> {
    (0..n).map(|_| rand::rng().random_range(-1.0..1.0)).collect()
}

pub fn bench_paft_real_forward(c: &mut Criterion) {
    Paft::initialize().unwrap();
    for n in SIZES {
        c.bench_function(&format!("paft real forward {}", n), |b| {
            b.iter_batched(
                || make_samples(n),
                |mut data| {
                    Paft::real_fft_f64(&mut data, FftDirection::Forward, FftFlags::NONE).unwrap();
                },
                BatchSize::LargeInput,
            );
        });
    }
}

pub fn bench_paft_real_round_trip(c: &mut Criterion) {
    Paft::initialize().unwrap();
    for n in SIZES {
        c.bench_function(&format!("paft real round trip {}", n), |b| {
            b.iter_batched(
                || make_samples(n),
                |mut data| {
                    Paft::real_fft_f64(&mut data, FftDirection::Forward, FftFlags::NONE).unwrap();
                    Paft::real_fft_f64(&mut data, FftDirection::Inverse, FftFlags::NONE).unwrap();
                },
                BatchSize::LargeInput,
            );
        });
    }
}

pub fn bench_rustfft_real_via_complex(c: &mut Criterion) {
    for n in SIZES {
        let fft = FftPlanner::<f64>::new().plan_fft_forward(n);
        c.bench_function(&format!("rustfft complex cast {}", n), |b| {
            b.iter_batched(
                || {
                    make_samples(n)
                        .into_iter()
                        .map(|v| Complex::new(v, 0.0))
                        .collect::<Vec<_>>()
                },
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
    bench_paft_real_forward,
    bench_paft_real_round_trip,
    bench_rustfft_real_via_complex
);
criterion_main!(benches);
