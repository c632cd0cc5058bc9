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

//! MIPS instruction disassembler for the interactive shell
//!
//! Converts binary instruction encodings to human-readable assembly
//! mnemonics, covering exactly the instruction subset this simulator
//! executes. Debug-only: nothing in `core::cpu` depends on it.

use super::decode::{
    funct, imm16, jump_addr, opcode, rd, rs, rt, shamt, target26,
};

/// Instruction disassembler
///
/// # Example
/// ```
/// use mipsim::core::cpu::Disassembler;
///
/// assert_eq!(Disassembler::disassemble(0x0000_0000, 0x0040_0000), "nop");
/// ```
pub struct Disassembler;

impl Disassembler {
    /// Disassemble a single instruction to a human-readable mnemonic
    ///
    /// `pc` is the address of `instruction`, used to resolve absolute
    /// jump targets.
    pub fn disassemble(instruction: u32, pc: u32) -> String {
        if instruction == 0 {
            return "nop".to_string();
        }

        match opcode(instruction) {
            0x00 => Self::disasm_special(instruction),
            0x01 => Self::disasm_regimm(instruction),
            0x02 => format!("j 0x{:08X}", jump_addr(pc.wrapping_add(4), target26(instruction))),
            0x03 => format!("jal 0x{:08X}", jump_addr(pc.wrapping_add(4), target26(instruction))),
            0x04 => format!("beq r{}, r{}, {}", rs(instruction), rt(instruction), imm16(instruction) as i16),
            0x05 => format!("bne r{}, r{}, {}", rs(instruction), rt(instruction), imm16(instruction) as i16),
            0x06 => format!("blez r{}, {}", rs(instruction), imm16(instruction) as i16),
            0x07 => format!("bgtz r{}, {}", rs(instruction), imm16(instruction) as i16),
            0x08 => format!("addi r{}, r{}, {}", rt(instruction), rs(instruction), imm16(instruction) as i16),
            0x09 => format!("addiu r{}, r{}, {}", rt(instruction), rs(instruction), imm16(instruction) as i16),
            0x0A => format!("slti r{}, r{}, {}", rt(instruction), rs(instruction), imm16(instruction) as i16),
            0x0B => format!("sltiu r{}, r{}, {}", rt(instruction), rs(instruction), imm16(instruction) as i16),
            0x0C => format!("andi r{}, r{}, 0x{:04X}", rt(instruction), rs(instruction), imm16(instruction)),
            0x0D => format!("ori r{}, r{}, 0x{:04X}", rt(instruction), rs(instruction), imm16(instruction)),
            0x0E => format!("xori r{}, r{}, 0x{:04X}", rt(instruction), rs(instruction), imm16(instruction)),
            0x0F => format!("lui r{}, 0x{:04X}", rt(instruction), imm16(instruction)),
            0x20 => format!("lb r{}, {}(r{})", rt(instruction), imm16(instruction) as i16, rs(instruction)),
            0x21 => format!("lh r{}, {}(r{})", rt(instruction), imm16(instruction) as i16, rs(instruction)),
            0x23 => format!("lw r{}, {}(r{})", rt(instruction), imm16(instruction) as i16, rs(instruction)),
            0x24 => format!("lbu r{}, {}(r{})", rt(instruction), imm16(instruction) as i16, rs(instruction)),
            0x25 => format!("lhu r{}, {}(r{})", rt(instruction), imm16(instruction) as i16, rs(instruction)),
            0x28 => format!("sb r{}, {}(r{})", rt(instruction), imm16(instruction) as i16, rs(instruction)),
            0x29 => format!("sh r{}, {}(r{})", rt(instruction), imm16(instruction) as i16, rs(instruction)),
            0x2B => format!("sw r{}, {}(r{})", rt(instruction), imm16(instruction) as i16, rs(instruction)),
            other => format!("unknown 0x{:08X} (opcode 0x{:02X})", instruction, other),
        }
    }

    fn disasm_special(instruction: u32) -> String {
        let (d, s, t, sh) = (rd(instruction), rs(instruction), rt(instruction), shamt(instruction));
        match funct(instruction) {
            0x00 => format!("sll r{}, r{}, {}", d, t, sh),
            0x02 => format!("srl r{}, r{}, {}", d, t, sh),
            0x03 => format!("sra r{}, r{}, {}", d, t, sh),
            0x04 => format!("sllv r{}, r{}, r{}", d, t, s),
            0x06 => format!("srlv r{}, r{}, r{}", d, t, s),
            0x07 => format!("srav r{}, r{}, r{}", d, t, s),
            0x08 => format!("jr r{}", s),
            0x09 => format!("jalr r{}, r{}", d, s),
            0x0C => "syscall".to_string(),
            0x10 => format!("mfhi r{}", d),
            0x11 => format!("mthi r{}", s),
            0x12 => format!("mflo r{}", d),
            0x13 => format!("mtlo r{}", s),
            0x18 => format!("mult r{}, r{}", s, t),
            0x19 => format!("multu r{}, r{}", s, t),
            0x1A => format!("div r{}, r{}", s, t),
            0x1B => format!("divu r{}, r{}", s, t),
            0x20 => format!("add r{}, r{}, r{}", d, s, t),
            0x21 => format!("addu r{}, r{}, r{}", d, s, t),
            0x22 => format!("sub r{}, r{}, r{}", d, s, t),
            0x23 => format!("subu r{}, r{}, r{}", d, s, t),
            0x24 => format!("and r{}, r{}, r{}", d, s, t),
            0x25 => format!("or r{}, r{}, r{}", d, s, t),
            0x26 => format!("xor r{}, r{}, r{}", d, s, t),
            0x27 => format!("nor r{}, r{}, r{}", d, s, t),
            0x2A => format!("slt r{}, r{}, r{}", d, s, t),
            0x2B => format!("sltu r{}, r{}, r{}", d, s, t),
            other => format!("unknown special 0x{:02X}", other),
        }
    }

    fn disasm_regimm(instruction: u32) -> String {
        let s = rs(instruction);
        let imm = imm16(instruction) as i16;
        match rt(instruction) {
            0x00 => format!("bltz r{}, {}", s, imm),
            0x01 => format!("bgez r{}, {}", s, imm),
            0x10 => format!("bltzal r{}, {}", s, imm),
            0x11 => format!("bgezal r{}, {}", s, imm),
            other => format!("unknown regimm 0x{:02X}", other),
        }
    }
}
