//! Per-instruction semantics, dispatched through [`OpcodeTable`](super::OpcodeTable).
//!
//! Operands arrive already resolved in [`Instruction::value`]: loads and ALU ops use it as the
//! operand byte, stores and `BIT` use it as a memory index, jumps use it as the target.
//! Handlers never advance PC for the instruction's own length; `step` does that unless PC was set.

use crate::{
    bits,
    cpu::{
        cpu::CPU,
        flags::{
            FLAG_BREAK, FLAG_CARRY, FLAG_DECIMAL, FLAG_INTERRUPT_DISABLE, FLAG_NEGATIVE,
            FLAG_OVERFLOW, FLAG_UNUSED, FLAG_ZERO, NEGATIVE_BIT, OVERFLOW_BIT,
        },
        instruction::Instruction,
    },
};

impl CPU {
    // Loads and transfers

    pub(crate) fn lda(&mut self, ins: &Instruction) {
        self.a = ins.value() as u8;
        self.set_zero_and_negative(self.a);
    }

    pub(crate) fn ldx(&mut self, ins: &Instruction) {
        self.x = ins.value() as u8;
        self.set_zero_and_negative(self.x);
    }

    pub(crate) fn ldy(&mut self, ins: &Instruction) {
        self.y = ins.value() as u8;
        self.set_zero_and_negative(self.y);
    }

    pub(crate) fn tax(&mut self, _ins: &Instruction) {
        self.x = self.a;
        self.set_zero_and_negative(self.x);
    }

    pub(crate) fn tay(&mut self, _ins: &Instruction) {
        self.y = self.a;
        self.set_zero_and_negative(self.y);
    }

    pub(crate) fn txa(&mut self, _ins: &Instruction) {
        self.a = self.x;
        self.set_zero_and_negative(self.a);
    }

    pub(crate) fn tya(&mut self, _ins: &Instruction) {
        self.a = self.y;
        self.set_zero_and_negative(self.a);
    }

    // Stores

    pub(crate) fn sta(&mut self, ins: &Instruction) {
        self.memory[ins.value() as usize] = self.a;
    }

    pub(crate) fn stx(&mut self, ins: &Instruction) {
        self.memory[ins.value() as usize] = self.x;
    }

    pub(crate) fn sty(&mut self, ins: &Instruction) {
        self.memory[ins.value() as usize] = self.y;
    }

    // Logic and arithmetic

    pub(crate) fn and(&mut self, ins: &Instruction) {
        self.a &= ins.value() as u8;
        self.set_zero_and_negative(self.a);
    }

    pub(crate) fn ora(&mut self, ins: &Instruction) {
        self.a |= ins.value() as u8;
        self.set_zero_and_negative(self.a);
    }

    pub(crate) fn eor(&mut self, ins: &Instruction) {
        self.a ^= ins.value() as u8;
        self.set_zero_and_negative(self.a);
    }

    /// Binary add only; the decimal flag has no effect.
    pub(crate) fn adc(&mut self, ins: &Instruction) {
        let value = ins.value() as u8;
        let sum = self.a as u16 + value as u16 + self.carry() as u16;

        // V: both inputs share a sign and the unwrapped sum's bit 7 disagrees with it
        if (self.a ^ value) & 0x80 == 0 && (self.a as u16 ^ sum) & 0x80 != 0 {
            self.status |= FLAG_OVERFLOW;
        } else {
            self.status &= !FLAG_OVERFLOW;
        }

        if sum > 0xFF {
            self.status |= FLAG_CARRY;
        } else {
            self.status &= !FLAG_CARRY;
        }

        self.a = sum as u8;
        self.set_zero_and_negative(self.a);
    }

    pub(crate) fn cmp(&mut self, ins: &Instruction) {
        self.compare(self.a, ins.value() as u8);
    }

    pub(crate) fn cpx(&mut self, ins: &Instruction) {
        self.compare(self.x, ins.value() as u8);
    }

    pub(crate) fn cpy(&mut self, ins: &Instruction) {
        self.compare(self.y, ins.value() as u8);
    }

    pub(crate) fn bit(&mut self, ins: &Instruction) {
        let value = self.memory[ins.value() as usize];

        self.status = bits::copy(value, self.status, OVERFLOW_BIT);
        self.status = bits::copy(value, self.status, NEGATIVE_BIT);
        self.set_zero(self.a & value);
    }

    // Shifts (accumulator)

    pub(crate) fn asl(&mut self, _ins: &Instruction) {
        self.status &= !FLAG_CARRY;
        if self.a & 0x80 != 0 {
            self.status |= FLAG_CARRY;
        }

        self.a <<= 1;
        self.set_zero_and_negative(self.a);
    }

    pub(crate) fn lsr(&mut self, _ins: &Instruction) {
        self.status &= !FLAG_CARRY;
        if self.a & 0x01 != 0 {
            self.status |= FLAG_CARRY;
        }

        self.a >>= 1;
        self.set_zero_and_negative(self.a);
    }

    // Branches

    fn branch(&mut self, ins: &Instruction, condition: bool) {
        if condition {
            let offset = ins.value() as u8 as i8;
            self.pc = self.pc.wrapping_add(offset as u16);
        }
    }

    pub(crate) fn bcc(&mut self, ins: &Instruction) {
        self.branch(ins, self.status & FLAG_CARRY == 0);
    }

    pub(crate) fn bcs(&mut self, ins: &Instruction) {
        self.branch(ins, self.status & FLAG_CARRY != 0);
    }

    pub(crate) fn beq(&mut self, ins: &Instruction) {
        self.branch(ins, self.status & FLAG_ZERO != 0);
    }

    pub(crate) fn bne(&mut self, ins: &Instruction) {
        self.branch(ins, self.status & FLAG_ZERO == 0);
    }

    pub(crate) fn bmi(&mut self, ins: &Instruction) {
        self.branch(ins, self.status & FLAG_NEGATIVE != 0);
    }

    pub(crate) fn bpl(&mut self, ins: &Instruction) {
        self.branch(ins, self.status & FLAG_NEGATIVE == 0);
    }

    pub(crate) fn bvc(&mut self, ins: &Instruction) {
        self.branch(ins, self.status & FLAG_OVERFLOW == 0);
    }

    pub(crate) fn bvs(&mut self, ins: &Instruction) {
        self.branch(ins, self.status & FLAG_OVERFLOW != 0);
    }

    // Jumps and subroutines

    pub(crate) fn jmp(&mut self, ins: &Instruction) {
        self.set_pc(ins.value());
    }

    /// Stores PC+3 as a word at memory[SP] (high) / memory[SP-1] (low), SP -= 2.
    pub(crate) fn jsr(&mut self, ins: &Instruction) {
        let return_addr = self.pc.wrapping_add(3);

        self.memory[self.sp as usize] = (return_addr >> 8) as u8;
        self.memory[self.sp.wrapping_sub(1) as usize] = return_addr as u8;
        self.sp = self.sp.wrapping_sub(2);

        self.set_pc(ins.value());
    }

    pub(crate) fn rts(&mut self, _ins: &Instruction) {
        self.sp = self.sp.wrapping_add(2);

        let hi = self.memory[self.sp as usize] as u16;
        let lo = self.memory[self.sp.wrapping_sub(1) as usize] as u16;

        self.set_pc((hi << 8) | lo);
    }

    // Stack

    pub(crate) fn pha(&mut self, _ins: &Instruction) {
        self.push(self.a);
    }

    pub(crate) fn php(&mut self, _ins: &Instruction) {
        self.push(self.status | FLAG_BREAK);
    }

    pub(crate) fn pla(&mut self, _ins: &Instruction) {
        self.a = self.pull();
        self.set_zero_and_negative(self.a);
    }

    pub(crate) fn plp(&mut self, _ins: &Instruction) {
        let value = self.pull();
        self.status = (value | FLAG_UNUSED) & !FLAG_BREAK;
    }

    // Flags

    pub(crate) fn sec(&mut self, _ins: &Instruction) {
        self.status |= FLAG_CARRY;
    }

    pub(crate) fn clc(&mut self, _ins: &Instruction) {
        self.status &= !FLAG_CARRY;
    }

    pub(crate) fn sei(&mut self, _ins: &Instruction) {
        self.status |= FLAG_INTERRUPT_DISABLE;
    }

    pub(crate) fn sed(&mut self, _ins: &Instruction) {
        self.status |= FLAG_DECIMAL;
    }

    pub(crate) fn cld(&mut self, _ins: &Instruction) {
        self.status &= !FLAG_DECIMAL;
    }

    pub(crate) fn clv(&mut self, _ins: &Instruction) {
        self.status &= !FLAG_OVERFLOW;
    }

    pub(crate) fn nop(&mut self, _ins: &Instruction) {}
}
