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

//! SYSCALL: the only trap this simulator recognizes
//!
//! `SYSCALL` with `$v0` (`$2`) holding 10 halts the simulator (`run`
//! becomes false); every other syscall code is a no-op, matching the
//! no-exception-machinery, single-halt-convention scope. `$v0 == 10`
//! is the conventional MARS/SPIM "exit" service number.

use super::CPU;
use crate::core::error::Result;
use log::{info, warn};

/// `$v0` value that halts the simulator
const SYSCALL_EXIT: u32 = 10;

impl CPU {
    pub(in crate::core::cpu) fn op_syscall(&mut self) -> Result<()> {
        let code = self.reg(2);
        if code == SYSCALL_EXIT {
            info!("SYSCALL exit at pc=0x{:08X}", self.pc);
            self.run = false;
        } else {
            warn!("unhandled syscall code {} at pc=0x{:08X}, treating as no-op", code, self.pc);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::cpu::CPU;
    use crate::core::memory::Memory;

    fn step_with(cpu: &mut CPU, instr: u32) {
        let mut mem = Memory::new();
        mem.write32(cpu.pc(), instr).unwrap();
        cpu.step(&mut mem).unwrap();
    }

    const SYSCALL: u32 = 0x0000_000C;

    #[test]
    fn syscall_exit_halts() {
        let mut cpu = CPU::new();
        cpu.set_reg(2, 10);
        step_with(&mut cpu, SYSCALL);
        assert!(!cpu.running());
    }

    #[test]
    fn syscall_other_code_is_a_noop() {
        let mut cpu = CPU::new();
        cpu.set_reg(2, 4);
        step_with(&mut cpu, SYSCALL);
        assert!(cpu.running());
    }
}
