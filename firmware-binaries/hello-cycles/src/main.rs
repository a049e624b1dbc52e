#![no_std]
#![cfg_attr(not(test), no_main)]

// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use log::LevelFilter;
use rvdemo_sys::character_device::CharacterDevice;
use rvdemo_sys::cycle_counter::{CycleCounter, Mcycle};
use rvdemo_sys::sink::LineBuffered;
use ufmt::uwriteln;

#[cfg(not(test))]
use riscv_rt::entry;

#[cfg_attr(not(test), entry)]
fn main() -> ! {
    let device = unsafe { CharacterDevice::stdout() };
    unsafe {
        rvdemo_sys::logger::init(device.clone(), LevelFilter::Info);
    }

    let mut stdout: LineBuffered<CharacterDevice> = LineBuffered::new(device);
    let counter = CycleCounter::new(Mcycle);

    uwriteln!(stdout, "Hello world!").unwrap();

    loop {
        let cycles = counter.read_cycles();
        if let Err(e) = uwriteln!(stdout, "Clock cycles since boot: {}", cycles) {
            log::error!("dropped cycle report: {e:?}");
        }
    }
}
