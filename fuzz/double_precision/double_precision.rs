#![no_main]

use libfuzzer_sys::fuzz_target;
use num_complex::Complex;
use paft::{FftDirection, FftFlags, Paft};

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    forward: bool,
    rezip: bool,
    log_size: u8,
    re: f64,
    im: f64,
}

fuzz_target!(|data: Target| {
    if data.log_size > 14 {
        return;
    }
    if !data.re.is_finite() || !data.im.is_finite() {
        return;
    }
    Paft::initialize().unwrap();
    let size = 1usize << data.log_size;
    let direction = if data.forward {
        FftDirection::Forward
    } else {
        FftDirection::Inverse
    };
    let flags = if data.rezip {
        FftFlags::NONE
    } else {
        FftFlags::DO_NOT_REZIP
    };
    let mut chunk = vec![Complex::new(data.re, data.im); size];
    Paft::fft_f64(&mut chunk, direction, flags).unwrap();

    let mut re = vec![data.re; size];
    let mut im = vec![data.im; size];
    Paft::fft_split_f64(&mut re, &mut im, direction, 1.0).unwrap();
});
