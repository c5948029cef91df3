//! Errors raised while loading cartridges, decoding operands and stepping the CPU.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The image is not iNES, or is shorter than its header declares.
    #[error("invalid iNES image: {0}")]
    Format(String),

    /// The dispatch table has no semantics for this opcode yet.
    #[error("unimplemented opcode ${opcode:02X} ({mnemonic})")]
    UnimplementedOpcode { opcode: u8, mnemonic: &'static str },

    /// An address or index fell outside memory or the loaded PRG region.
    #[error("address out of range: {0}")]
    OutOfRange(String),

    /// Operand text that could not be turned into instruction bytes.
    #[error("bad operand: {0}")]
    Operand(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
