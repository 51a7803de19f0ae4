// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Benchmark for instruction decoding.
//!
//! Make sure the result of the benchmarked function is used,
//! whether by sending it to black_box, or to return it from the closure.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use m68000_decoder::{Instruction, MemoryAccess, Sweep};

pub fn criterion_benchmark(c: &mut Criterion) {
    {
        let mut code = [0xE301_u16]; // ASL.B #1, D1
        c.bench_function("register shift decoding", |b| b.iter(|| {
            let mut memory_iter = code.iter_u16(0);
            black_box(Instruction::from_memory(black_box(&mut memory_iter)).unwrap());
        }));
    }

    {
        let mut code = [0xE5F9_u16, 0x0012, 0x3456]; // ROXL.W (0x123456).L
        c.bench_function("memory shift decoding", |b| b.iter(|| {
            let mut memory_iter = code.iter_u16(0);
            black_box(Instruction::from_memory(black_box(&mut memory_iter)).unwrap());
        }));
    }

    {
        let mut code = [0x4E71_u16]; // NOP, line 4 has no decoder.
        c.bench_function("unsupported line", |b| b.iter(|| {
            let mut memory_iter = code.iter_u16(0);
            black_box(Instruction::from_memory(black_box(&mut memory_iter)).unwrap_err());
        }));
    }

    {
        let mut code: Vec<u8> = (0..0x1000u32).flat_map(|i| (0xE000 | i as u16).to_be_bytes()).collect();
        let len = code.len() as u32;
        c.bench_function("sweep line 1110", |b| b.iter(|| {
            black_box(Sweep::new(black_box(&mut code[..]), 0, len).filter(|(_, res)| res.is_ok()).count());
        }));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
