// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{criterion_group, criterion_main, Criterion};
use mipsim::core::cpu::CPU;
use mipsim::core::memory::Memory;
use std::hint::black_box;

fn cpu_step_benchmark(c: &mut Criterion) {
    c.bench_function("cpu_step_nop", |b| {
        let mut cpu = CPU::new();
        let mut mem = Memory::new();
        mem.write32(cpu.pc(), 0x0000_0000).unwrap(); // NOP

        b.iter(|| {
            cpu.reset();
            black_box(cpu.step(&mut mem).unwrap());
        });
    });

    c.bench_function("cpu_step_add", |b| {
        let mut cpu = CPU::new();
        let mut mem = Memory::new();
        mem.write32(cpu.pc(), 0x0022_1820).unwrap(); // add $3, $1, $2

        b.iter(|| {
            cpu.reset();
            cpu.set_reg(1, 10);
            cpu.set_reg(2, 20);
            black_box(cpu.step(&mut mem).unwrap());
        });
    });
}

fn cpu_register_access_benchmark(c: &mut Criterion) {
    c.bench_function("cpu_register_read", |b| {
        let cpu = CPU::new();
        b.iter(|| {
            for i in 0u8..32 {
                black_box(cpu.reg(i));
            }
        });
    });

    c.bench_function("cpu_register_write", |b| {
        let mut cpu = CPU::new();
        b.iter(|| {
            for i in 0u8..32 {
                cpu.set_reg(i, black_box(i as u32 * 100));
            }
        });
    });
}

fn memory_access_benchmark(c: &mut Criterion) {
    c.bench_function("memory_read32", |b| {
        let mut mem = Memory::new();
        mem.write32(0x1000, 0xDEADBEEF).unwrap();
        b.iter(|| black_box(mem.read32(black_box(0x1000)).unwrap()));
    });

    c.bench_function("memory_write32", |b| {
        let mut mem = Memory::new();
        b.iter(|| mem.write32(black_box(0x1000), black_box(0xCAFEBABE)).unwrap());
    });
}

criterion_group!(
    benches,
    cpu_step_benchmark,
    cpu_register_access_benchmark,
    memory_access_benchmark
);
criterion_main!(benches);
