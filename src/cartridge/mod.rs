//! NES cartridge loading and PRG address translation.
//!
//! - **cartridge**: Loads iNES (.nes) files into header fields plus PRG/CHR byte regions.
//! - **address**: Linear CPU address → PRG offset mapping (no mapper, no bank switching).

pub mod address;
pub mod cartridge;

pub use address::translate_address;
pub use cartridge::GamePak;
