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

//! Conditional branch instructions: BEQ, BNE, BLEZ, BGTZ and the
//! REGIMM family BLTZ(AL), BGEZ(AL)
//!
//! There are no branch delay slots: a taken branch's target becomes
//! `pc` on the *next* tick, computed here as `pc_of_branch + 4 +
//! sign_extend(imm16) << 2` and written straight into `next_pc`
//! (`next_pc` already holds `pc_of_branch + 4` on entry, courtesy of
//! `CPU::step`, so taking the branch is simply overwriting it).

use super::decode::{branch_offset, imm16, rs, rt};
use super::CPU;
use crate::core::error::Result;

impl CPU {
    fn branch_target(&self, offset: i32) -> u32 {
        self.pc.wrapping_add(4).wrapping_add(offset as u32)
    }

    pub(in crate::core::cpu) fn op_beq(&mut self, instruction: u32) -> Result<()> {
        if self.reg(rs(instruction)) == self.reg(rt(instruction)) {
            let offset = branch_offset(imm16(instruction));
            self.next_pc = self.branch_target(offset);
        }
        Ok(())
    }

    pub(in crate::core::cpu) fn op_bne(&mut self, instruction: u32) -> Result<()> {
        if self.reg(rs(instruction)) != self.reg(rt(instruction)) {
            let offset = branch_offset(imm16(instruction));
            self.next_pc = self.branch_target(offset);
        }
        Ok(())
    }

    pub(in crate::core::cpu) fn op_blez(&mut self, instruction: u32) -> Result<()> {
        if (self.reg(rs(instruction)) as i32) <= 0 {
            let offset = branch_offset(imm16(instruction));
            self.next_pc = self.branch_target(offset);
        }
        Ok(())
    }

    pub(in crate::core::cpu) fn op_bgtz(&mut self, instruction: u32) -> Result<()> {
        if (self.reg(rs(instruction)) as i32) > 0 {
            let offset = branch_offset(imm16(instruction));
            self.next_pc = self.branch_target(offset);
        }
        Ok(())
    }

    pub(in crate::core::cpu) fn op_bltz(&mut self, instruction: u32) -> Result<()> {
        if (self.reg(rs(instruction)) as i32) < 0 {
            let offset = branch_offset(imm16(instruction));
            self.next_pc = self.branch_target(offset);
        }
        Ok(())
    }

    pub(in crate::core::cpu) fn op_bgez(&mut self, instruction: u32) -> Result<()> {
        if (self.reg(rs(instruction)) as i32) >= 0 {
            let offset = branch_offset(imm16(instruction));
            self.next_pc = self.branch_target(offset);
        }
        Ok(())
    }

    /// BLTZAL: link register is written unconditionally, the branch
    /// itself is still conditional on `rs < 0`
    pub(in crate::core::cpu) fn op_bltzal(&mut self, instruction: u32) -> Result<()> {
        self.set_reg(31, self.pc.wrapping_add(8));
        if (self.reg(rs(instruction)) as i32) < 0 {
            let offset = branch_offset(imm16(instruction));
            self.next_pc = self.branch_target(offset);
        }
        Ok(())
    }

    pub(in crate::core::cpu) fn op_bgezal(&mut self, instruction: u32) -> Result<()> {
        self.set_reg(31, self.pc.wrapping_add(8));
        if (self.reg(rs(instruction)) as i32) >= 0 {
            let offset = branch_offset(imm16(instruction));
            self.next_pc = self.branch_target(offset);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::cpu::{CPU, DEFAULT_PC};
    use crate::core::memory::Memory;

    fn run(cpu: &mut CPU, instr: u32) {
        let mut mem = Memory::new();
        cpu.step_with(instr, &mut mem);
    }

    impl CPU {
        fn step_with(&mut self, instr: u32, mem: &mut Memory) {
            mem.write32(self.pc(), instr).unwrap();
            self.step(mem).unwrap();
        }
    }

    fn encode_i(opcode: u32, rs: u8, rt: u8, imm: u16) -> u32 {
        (opcode << 26) | ((rs as u32) << 21) | ((rt as u32) << 16) | (imm as u32)
    }

    #[test]
    fn beq_taken_jumps_to_target() {
        let mut cpu = CPU::new();
        cpu.set_reg(1, 5);
        cpu.set_reg(2, 5);
        // BEQ $1, $2, 4 -> target = pc + 4 + (4 << 2) = pc + 20
        run(&mut cpu, encode_i(0x04, 1, 2, 4));
        assert_eq!(cpu.pc(), DEFAULT_PC.wrapping_add(20));
    }

    #[test]
    fn beq_not_taken_falls_through() {
        let mut cpu = CPU::new();
        cpu.set_reg(1, 5);
        cpu.set_reg(2, 6);
        run(&mut cpu, encode_i(0x04, 1, 2, 4));
        assert_eq!(cpu.pc(), DEFAULT_PC.wrapping_add(4));
    }

    #[test]
    fn bne_taken_on_inequality() {
        let mut cpu = CPU::new();
        cpu.set_reg(1, 1);
        cpu.set_reg(2, 2);
        run(&mut cpu, encode_i(0x05, 1, 2, 0xFFFF)); // offset -1 word -> -4
        assert_eq!(cpu.pc(), DEFAULT_PC);
    }

    #[test]
    fn bgezal_links_even_when_not_taken() {
        let mut cpu = CPU::new();
        cpu.set_reg(1, 0xFFFF_FFFF); // -1, BGEZAL condition false
        run(&mut cpu, encode_i(0x01, 1, 0x11, 4));
        assert_eq!(cpu.reg(31), DEFAULT_PC.wrapping_add(8));
        assert_eq!(cpu.pc(), DEFAULT_PC.wrapping_add(4));
    }
}
