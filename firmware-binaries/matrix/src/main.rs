#![no_std]
#![cfg_attr(not(test), no_main)]

// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rvdemo_sys::character_device::CharacterDevice;
use rvdemo_sys::matrix::MatrixAnimator;
use rvdemo_sys::println;

#[cfg(not(test))]
use riscv_rt::entry;

/// Seed for the animation, taken from the `MATRIX_SEED` environment variable
/// at compile time. Hex digits fill the seed from the first byte on, low
/// nibble first. Other characters are skipped and missing bytes stay zero.
const MATRIX_SEED: [u8; 16] = {
    let seed = match option_env!("MATRIX_SEED") {
        Some(s) => s.as_bytes(),
        None => "".as_bytes(),
    };
    let mut out = [0; 16];

    let mut i = 0;
    let mut nibble = 0;
    while i < seed.len() && nibble / 2 < 16 {
        let val = match seed[i] {
            c @ b'0'..=b'9' => c - b'0',
            c @ b'a'..=b'f' => c - b'a' + 10,
            c @ b'A'..=b'F' => c - b'A' + 10,
            _ => {
                i += 1;
                continue;
            }
        };
        i += 1;
        out[nibble / 2] |= val << (4 * (nibble % 2));
        nibble += 1;
    }
    out
};

#[cfg(feature = "direct-print")]
type Stdout = CharacterDevice;

#[cfg(not(feature = "direct-print"))]
type Stdout = rvdemo_sys::sink::LineBuffered<CharacterDevice>;

fn stdout() -> Stdout {
    let device = unsafe { CharacterDevice::stdout() };
    #[cfg(not(feature = "direct-print"))]
    let device = rvdemo_sys::sink::LineBuffered::new(device);
    device
}

#[cfg_attr(not(test), entry)]
fn main() -> ! {
    unsafe {
        rvdemo_sys::logger::init(CharacterDevice::stdout(), LevelFilter::Info);
    }

    println!("The Matrix has you!");

    let mut sink = stdout();
    let mut matrix: MatrixAnimator<SmallRng> =
        MatrixAnimator::new(SmallRng::from_seed(MATRIX_SEED));

    loop {
        if let Err(e) = matrix.tick_into(&mut sink) {
            log::error!("dropped matrix row: {e:?}");
        }
    }
}
