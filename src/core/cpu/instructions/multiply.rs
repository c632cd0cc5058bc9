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

//! Multiply/divide instructions: MULT(U), DIV(U), MF/MT HI/LO
//!
//! MULT and MULTU widen both operands to 64 bits *before* multiplying,
//! so the high half of a full 32x32 -> 64 product lands correctly in
//! HI. Narrowing either operand to 32 bits first (truncating the
//! product instead of widening the inputs) loses the carry into the
//! upper word and is not done here.
//!
//! DIV/DIVU by a zero divisor do not trap; HI/LO are left in the
//! conventional MIPS-I result for that case (quotient saturated,
//! remainder equal to the dividend) rather than panicking.

use super::decode::{rd, rs, rt};
use super::CPU;
use crate::core::error::Result;

impl CPU {
    pub(in crate::core::cpu) fn op_mult(&mut self, instruction: u32) -> Result<()> {
        let a = self.reg(rs(instruction)) as i32 as i64;
        let b = self.reg(rt(instruction)) as i32 as i64;
        let product = (a * b) as u64;
        self.hi = (product >> 32) as u32;
        self.lo = product as u32;
        Ok(())
    }

    pub(in crate::core::cpu) fn op_multu(&mut self, instruction: u32) -> Result<()> {
        let a = self.reg(rs(instruction)) as u64;
        let b = self.reg(rt(instruction)) as u64;
        let product = a * b;
        self.hi = (product >> 32) as u32;
        self.lo = product as u32;
        Ok(())
    }

    pub(in crate::core::cpu) fn op_div(&mut self, instruction: u32) -> Result<()> {
        let numerator = self.reg(rs(instruction)) as i32;
        let denominator = self.reg(rt(instruction)) as i32;
        if denominator == 0 {
            self.lo = if numerator >= 0 { 0xFFFF_FFFF } else { 1 };
            self.hi = numerator as u32;
        } else if numerator == i32::MIN && denominator == -1 {
            self.lo = 0x8000_0000;
            self.hi = 0;
        } else {
            self.lo = numerator.wrapping_div(denominator) as u32;
            self.hi = numerator.wrapping_rem(denominator) as u32;
        }
        Ok(())
    }

    pub(in crate::core::cpu) fn op_divu(&mut self, instruction: u32) -> Result<()> {
        let numerator = self.reg(rs(instruction));
        let denominator = self.reg(rt(instruction));
        if denominator == 0 {
            self.lo = 0xFFFF_FFFF;
            self.hi = numerator;
        } else {
            self.lo = numerator / denominator;
            self.hi = numerator % denominator;
        }
        Ok(())
    }

    pub(in crate::core::cpu) fn op_mfhi(&mut self, instruction: u32) -> Result<()> {
        self.set_reg(rd(instruction), self.hi);
        Ok(())
    }

    pub(in crate::core::cpu) fn op_mthi(&mut self, instruction: u32) -> Result<()> {
        self.hi = self.reg(rs(instruction));
        Ok(())
    }

    pub(in crate::core::cpu) fn op_mflo(&mut self, instruction: u32) -> Result<()> {
        self.set_reg(rd(instruction), self.lo);
        Ok(())
    }

    pub(in crate::core::cpu) fn op_mtlo(&mut self, instruction: u32) -> Result<()> {
        self.lo = self.reg(rs(instruction));
        Ok(())
    }
}
