//! nes6502: the instruction-execution core of the NES 6502, written in Rust.
//!
//! Implements the Ricoh 2A03 CPU core as documented on the
//! [NESdev Wiki](https://www.nesdev.org/wiki/CPU): registers, status flags, a 256-entry opcode
//! dispatch table, and the iNES loader that supplies program bytes.
//!
//! ## Modules (NESdev references)
//!
//! - **bits** – single-bit test/set/clear/copy helpers
//! - **cartridge** – [iNES](https://www.nesdev.org/wiki/INES) loading; fixed $C000 PRG address translation
//! - **cpu** – [6502](https://www.nesdev.org/wiki/CPU) registers, [status flags](https://www.nesdev.org/wiki/Status_flags),
//!   opcode table and instruction semantics
//! - **trace** – nestest-format trace lines and reference log checking

pub mod bits;
pub mod cartridge;
pub mod cpu;
pub mod error;
pub mod trace;

pub use cartridge::{GamePak, translate_address};
pub use cpu::{ByteOrder, CPU, Instruction, OpcodeTable};
pub use error::{Error, Result};
