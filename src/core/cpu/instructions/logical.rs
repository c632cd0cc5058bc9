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

//! Bitwise instructions: AND(I), OR(I), XOR(I), NOR, LUI
//!
//! NOR is the bitwise complement of OR (`!(a | b)`), not a logical
//! negation; every lane of the result is produced by the bitwise `!`
//! operator, not by coercing the OR result to a boolean.

use super::decode::{imm16, rd, rs, rt, zero_extend16};
use super::CPU;
use crate::core::error::Result;

impl CPU {
    pub(in crate::core::cpu) fn op_and(&mut self, instruction: u32) -> Result<()> {
        let a = self.reg(rs(instruction));
        let b = self.reg(rt(instruction));
        self.set_reg(rd(instruction), a & b);
        Ok(())
    }

    pub(in crate::core::cpu) fn op_or(&mut self, instruction: u32) -> Result<()> {
        let a = self.reg(rs(instruction));
        let b = self.reg(rt(instruction));
        self.set_reg(rd(instruction), a | b);
        Ok(())
    }

    pub(in crate::core::cpu) fn op_xor(&mut self, instruction: u32) -> Result<()> {
        let a = self.reg(rs(instruction));
        let b = self.reg(rt(instruction));
        self.set_reg(rd(instruction), a ^ b);
        Ok(())
    }

    pub(in crate::core::cpu) fn op_nor(&mut self, instruction: u32) -> Result<()> {
        let a = self.reg(rs(instruction));
        let b = self.reg(rt(instruction));
        self.set_reg(rd(instruction), !(a | b));
        Ok(())
    }

    pub(in crate::core::cpu) fn op_andi(&mut self, instruction: u32) -> Result<()> {
        let a = self.reg(rs(instruction));
        let imm = zero_extend16(imm16(instruction));
        self.set_reg(rt(instruction), a & imm);
        Ok(())
    }

    pub(in crate::core::cpu) fn op_ori(&mut self, instruction: u32) -> Result<()> {
        let a = self.reg(rs(instruction));
        let imm = zero_extend16(imm16(instruction));
        self.set_reg(rt(instruction), a | imm);
        Ok(())
    }

    pub(in crate::core::cpu) fn op_xori(&mut self, instruction: u32) -> Result<()> {
        let a = self.reg(rs(instruction));
        let imm = zero_extend16(imm16(instruction));
        self.set_reg(rt(instruction), a ^ imm);
        Ok(())
    }

    /// LUI: load the immediate into the upper 16 bits, zeroing the lower
    /// 16 bits (no dependency on `rs`)
    pub(in crate::core::cpu) fn op_lui(&mut self, instruction: u32) -> Result<()> {
        let imm = zero_extend16(imm16(instruction));
        self.set_reg(rt(instruction), imm << 16);
        Ok(())
    }
}
