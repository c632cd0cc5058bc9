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

//! Unconditional jump instructions: J, JAL, JR, JALR
//!
//! J/JAL compose the jump target from the top 4 bits of `pc + 4` and
//! the instruction's 26-bit target field; JR/JALR jump to whatever
//! address is held in a register. JAL/JALR additionally write the
//! return address (`pc + 8`, the instruction after this one since
//! there is no delay slot) into the link register (`$31` for JAL, the
//! encoded `rd` for JALR).

use super::decode::{jump_addr, rd, rs, target26};
use super::CPU;
use crate::core::error::Result;

impl CPU {
    pub(in crate::core::cpu) fn op_j(&mut self, instruction: u32) -> Result<()> {
        let target = target26(instruction);
        self.next_pc = jump_addr(self.pc.wrapping_add(4), target);
        Ok(())
    }

    pub(in crate::core::cpu) fn op_jal(&mut self, instruction: u32) -> Result<()> {
        let target = target26(instruction);
        self.set_reg(31, self.pc.wrapping_add(8));
        self.next_pc = jump_addr(self.pc.wrapping_add(4), target);
        Ok(())
    }

    pub(in crate::core::cpu) fn op_jr(&mut self, instruction: u32) -> Result<()> {
        self.next_pc = self.reg(rs(instruction));
        Ok(())
    }

    pub(in crate::core::cpu) fn op_jalr(&mut self, instruction: u32) -> Result<()> {
        let target = self.reg(rs(instruction));
        self.set_reg(rd(instruction), self.pc.wrapping_add(8));
        self.next_pc = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::cpu::{CPU, DEFAULT_PC};
    use crate::core::memory::Memory;

    fn step_with(cpu: &mut CPU, instr: u32) {
        let mut mem = Memory::new();
        mem.write32(cpu.pc(), instr).unwrap();
        cpu.step(&mut mem).unwrap();
    }

    fn encode_j(opcode: u32, target: u32) -> u32 {
        (opcode << 26) | (target & 0x03FF_FFFF)
    }

    fn encode_r(rs: u8, rd: u8, funct: u32) -> u32 {
        ((rs as u32) << 21) | ((rd as u32) << 11) | funct
    }

    #[test]
    fn j_sets_pc_from_region_and_target() {
        let mut cpu = CPU::new();
        step_with(&mut cpu, encode_j(0x02, 0x0004_0000));
        assert_eq!(cpu.pc(), (DEFAULT_PC & 0xF000_0000) | 0x0010_0000);
    }

    #[test]
    fn jal_links_return_address() {
        let mut cpu = CPU::new();
        step_with(&mut cpu, encode_j(0x03, 0x0004_0000));
        assert_eq!(cpu.reg(31), DEFAULT_PC.wrapping_add(8));
    }

    #[test]
    fn jr_jumps_to_register_value() {
        let mut cpu = CPU::new();
        cpu.set_reg(1, 0x1234_5678);
        step_with(&mut cpu, encode_r(1, 0, 0x08));
        assert_eq!(cpu.pc(), 0x1234_5678);
    }

    #[test]
    fn jalr_links_and_jumps() {
        let mut cpu = CPU::new();
        cpu.set_reg(1, 0x8000_0000);
        step_with(&mut cpu, encode_r(1, 31, 0x09));
        assert_eq!(cpu.pc(), 0x8000_0000);
        assert_eq!(cpu.reg(31), DEFAULT_PC.wrapping_add(8));
    }
}
