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

//! System integration module
//!
//! Ties `CPU` and `Memory` together and provides the run loop. Unlike
//! the teacher's `System` this owns no GPU/SPU/cycle-accurate timing
//! state: `cycles` here is a plain per-instruction counter kept for
//! diagnostics and the CLI's progress reporting.

use super::config::BootConfig;
use super::cpu::CPU;
use super::error::Result;
use super::loader::Image;
use super::memory::Memory;

/// Ties a [`CPU`] and [`Memory`] together and drives the run loop
pub struct System {
    cpu: CPU,
    memory: Memory,
    cycles: u64,
}

impl System {
    /// Create a new system with a fresh CPU and empty memory
    pub fn new() -> Self {
        Self {
            cpu: CPU::new(),
            memory: Memory::new(),
            cycles: 0,
        }
    }

    /// Install a program image and set the initial program counter
    /// per a [`BootConfig`]
    pub fn boot(&mut self, config: &BootConfig, image: &Image) -> Result<()> {
        image.install(&mut self.memory, config.load_addr)?;
        self.cpu.set_pc(config.entry_point());
        Ok(())
    }

    /// Reset CPU and cycle counter; memory contents are left intact
    /// (mirroring the teacher's "reset preserves loaded BIOS" behavior)
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.cycles = 0;
    }

    /// Execute exactly one instruction
    pub fn step(&mut self) -> Result<()> {
        self.cpu.step(&mut self.memory)?;
        self.cycles += 1;
        Ok(())
    }

    /// Execute up to `n` instructions, stopping early if the CPU halts
    pub fn step_n(&mut self, n: u64) -> Result<u64> {
        let mut executed = 0;
        for _ in 0..n {
            if !self.cpu.running() {
                break;
            }
            self.step()?;
            executed += 1;
        }
        Ok(executed)
    }

    /// Run until the CPU halts or `limit` instructions have executed,
    /// whichever comes first
    pub fn run(&mut self, limit: u64) -> Result<u64> {
        self.step_n(limit)
    }

    /// Current program counter
    pub fn pc(&self) -> u32 {
        self.cpu.pc()
    }

    /// Total instructions executed since the last reset
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Whether the CPU is still running
    pub fn running(&self) -> bool {
        self.cpu.running()
    }

    /// Shared access to the CPU, for register/disassembly inspection
    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    /// Shared access to memory, for memory-dump inspection
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Mutable access to memory, used by the interactive shell to
    /// patch memory between steps
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::Image;

    #[test]
    fn boot_installs_image_and_sets_pc() {
        let mut system = System::new();
        let config = BootConfig::parse("image = \"p.bin\"\nload_addr = 0x1000\nentry = 0x1000").unwrap();
        // LUI $1, 0xBEEF
        let image = Image::from_bytes(vec![0x3C, 0x01, 0xBE, 0xEF]);
        system.boot(&config, &image).unwrap();
        assert_eq!(system.pc(), 0x1000);
    }

    #[test]
    fn step_n_stops_early_on_halt() {
        let mut system = System::new();
        let config = BootConfig::parse("image = \"p.bin\"\nload_addr = 0x1000\nentry = 0x1000").unwrap();
        // ORI $2, $0, 10 ; SYSCALL ; ADDI $1, $0, 1 (should never run)
        let image = Image::from_bytes(vec![
            0x34, 0x02, 0x00, 0x0A, // ori $2, $0, 10
            0x00, 0x00, 0x00, 0x0C, // syscall
            0x20, 0x01, 0x00, 0x01, // addi $1, $0, 1
        ]);
        system.boot(&config, &image).unwrap();

        let executed = system.step_n(10).unwrap();

        assert_eq!(executed, 2);
        assert!(!system.running());
        assert_eq!(system.cpu().reg(1), 0);
    }

    #[test]
    fn cycles_counts_executed_instructions() {
        let mut system = System::new();
        let config = BootConfig::parse("image = \"p.bin\"\nload_addr = 0x1000\nentry = 0x1000").unwrap();
        let image = Image::from_bytes(vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        system.boot(&config, &image).unwrap();

        system.step().unwrap();
        system.step().unwrap();

        assert_eq!(system.cycles(), 2);
    }
}
