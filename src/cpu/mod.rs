//! 6502 CPU emulation for the NES.
//!
//! Table-driven: each decoded [`Instruction`] is dispatched through an [`OpcodeTable`] owned by
//! the [`CPU`]. Official loads, stores, ALU ops, branches, jumps, stack and flag instructions are
//! implemented; everything else reports itself as unimplemented. Memory is a flat 64 KiB array.

pub mod cpu;
pub mod flags;
pub mod instruction;
pub mod opcodes;
mod ops;


pub use cpu::CPU;
pub use instruction::{ByteOrder, Instruction};
pub use opcodes::{Handler, Opcode, OpcodeTable};
