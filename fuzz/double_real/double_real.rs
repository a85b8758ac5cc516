#![no_main]

use libfuzzer_sys::fuzz_target;
use paft::{FftDirection, FftFlags, Paft};

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    forward: bool,
    normalize: bool,
    log_size: u8,
    seed: f64,
}

fuzz_target!(|data: Target| {
    if data.log_size < 4 || data.log_size > 14 {
        return;
    }
    if !data.seed.is_finite() {
        return;
    }
    Paft::initialize().unwrap();
    let size = 1usize << data.log_size;
    let direction = if data.forward {
        FftDirection::Forward
    } else {
        FftDirection::Inverse
    };
    let flags = if data.normalize {
        FftFlags::NONE
    } else {
        FftFlags::DO_NOT_NORMALIZE
    };
    let mut chunk: Vec<f64> = (0..size).map(|k| data.seed * (k as f64).cos()).collect();
    Paft::real_fft_f64(&mut chunk, direction, flags).unwrap();

    let half = size / 2;
    let mut re = chunk[..half].to_vec();
    let mut im = chunk[half..].to_vec();
    Paft::real_fft_split_f64(&mut re, &mut im, direction, 1.0).unwrap();
});
