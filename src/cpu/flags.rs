//! 6502 processor status register (P) flag bits.

pub const CARRY_BIT: u8 = 0;
pub const ZERO_BIT: u8 = 1;
pub const INTERRUPT_DISABLE_BIT: u8 = 2;
pub const DECIMAL_BIT: u8 = 3;
pub const BREAK_BIT: u8 = 4;
pub const UNUSED_BIT: u8 = 5;
pub const OVERFLOW_BIT: u8 = 6;
pub const NEGATIVE_BIT: u8 = 7;

pub const FLAG_CARRY: u8 = 1 << CARRY_BIT;
pub const FLAG_ZERO: u8 = 1 << ZERO_BIT;
pub const FLAG_INTERRUPT_DISABLE: u8 = 1 << INTERRUPT_DISABLE_BIT;
pub const FLAG_DECIMAL: u8 = 1 << DECIMAL_BIT; // Stored only; no BCD arithmetic
pub const FLAG_BREAK: u8 = 1 << BREAK_BIT;     // Only exists in pushed copies of P
pub const FLAG_UNUSED: u8 = 1 << UNUSED_BIT;   // Always 1 when read on 6502
pub const FLAG_OVERFLOW: u8 = 1 << OVERFLOW_BIT;
pub const FLAG_NEGATIVE: u8 = 1 << NEGATIVE_BIT;
