//! NES cartridge loading from iNES format (.nes files).
//!
//! Implements the [iNES](https://www.nesdev.org/wiki/INES) layout: 16-byte header (magic "NES\x1A",
//! PRG size in 16 KiB units, CHR size in 8 KiB units, flags 6–10), an optional 512-byte trainer,
//! then PRG ROM, then CHR ROM. Flags are kept raw; no mapper is selected from them.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

pub const HEADER_SIZE: usize = 16;
pub const TRAINER_SIZE: usize = 512;
pub const PRG_BANK_SIZE: usize = 16 * 1024;
pub const CHR_BANK_SIZE: usize = 8 * 1024;

const MAGIC: &[u8; 4] = b"NES\x1A";
const FLAG6_TRAINER: u8 = 1 << 2;

/// A loaded cartridge image. Immutable once parsed.
#[derive(Debug, Clone)]
pub struct GamePak {
    pub header: [u8; HEADER_SIZE],
    /// PRG ROM size in 16 KiB units (header byte 4).
    pub prg_rom_size: u8,
    /// CHR ROM size in 8 KiB units (header byte 5).
    pub chr_rom_size: u8,
    pub flag6: u8,
    pub flag7: u8,
    pub prg_ram_size: u8,
    pub flag9: u8,
    pub flag10: u8,
    pub trainer: Option<Box<[u8; TRAINER_SIZE]>>,
    pub prg_rom: Vec<u8>,
    pub chr_rom: Vec<u8>,
}

impl GamePak {
    /// Read and parse an iNES file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path.as_ref())?;
        debug!("read {} bytes from {}", data.len(), path.as_ref().display());
        Self::from_bytes(&data)
    }

    /// Parse an in-memory iNES image. Nothing is returned unless every declared region is present.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::Format(format!(
                "header needs {HEADER_SIZE} bytes, got {}",
                data.len()
            )));
        }

        let mut header = [0u8; HEADER_SIZE];
        header.copy_from_slice(&data[..HEADER_SIZE]);

        if &header[0..4] != MAGIC {
            return Err(Error::Format(format!(
                "bad magic {:02X} {:02X} {:02X} {:02X}",
                header[0], header[1], header[2], header[3]
            )));
        }

        let prg_rom_size = header[4];
        let chr_rom_size = header[5];
        let flag6 = header[6];

        let has_trainer = flag6 & FLAG6_TRAINER != 0;
        let prg_len = prg_rom_size as usize * PRG_BANK_SIZE;
        let chr_len = chr_rom_size as usize * CHR_BANK_SIZE;

        let trainer_start = HEADER_SIZE;
        let prg_start = if has_trainer {
            trainer_start + TRAINER_SIZE
        } else {
            trainer_start
        };
        let chr_start = prg_start + prg_len;
        let chr_end = chr_start + chr_len;

        if data.len() < chr_end {
            return Err(Error::Format(format!(
                "image is {} bytes, header declares {chr_end}",
                data.len()
            )));
        }

        let trainer = if has_trainer {
            let mut bytes = Box::new([0u8; TRAINER_SIZE]);
            bytes.copy_from_slice(&data[trainer_start..prg_start]);
            Some(bytes)
        } else {
            None
        };

        debug!(
            "iNES: PRG {} x 16KiB, CHR {} x 8KiB, trainer: {}",
            prg_rom_size, chr_rom_size, has_trainer
        );

        Ok(Self {
            header,
            prg_rom_size,
            chr_rom_size,
            flag6,
            flag7: header[7],
            prg_ram_size: header[8],
            flag9: header[9],
            flag10: header[10],
            trainer,
            prg_rom: data[prg_start..chr_start].to_vec(),
            chr_rom: data[chr_start..chr_end].to_vec(),
        })
    }

    pub fn has_trainer(&self) -> bool {
        self.trainer.is_some()
    }

    /// Byte at a PRG ROM offset, as produced by [`translate_address`](super::translate_address).
    pub fn prg_byte(&self, offset: usize) -> Result<u8> {
        self.prg_rom.get(offset).copied().ok_or_else(|| {
            Error::OutOfRange(format!(
                "PRG offset {offset:#06X} past end ({:#06X})",
                self.prg_rom.len()
            ))
        })
    }

    /// `len` PRG ROM bytes starting at `offset`.
    pub fn prg_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        offset
            .checked_add(len)
            .and_then(|end| self.prg_rom.get(offset..end))
            .ok_or_else(|| {
                Error::OutOfRange(format!(
                    "PRG range {offset:#06X}+{len} past end ({:#06X})",
                    self.prg_rom.len()
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(prg: u8, chr: u8, flag6: u8, body: usize) -> Vec<u8> {
        let mut data = vec![0x4E, 0x45, 0x53, 0x1A, prg, chr, flag6, 0, 1, 0, 0, 0, 0, 0, 0, 0];
        data.extend((0..body).map(|i| i as u8));
        data
    }

    #[test]
    fn rejects_bad_magic() {
        let mut data = image(1, 1, 0, PRG_BANK_SIZE + CHR_BANK_SIZE);
        data[3] = 0x00;
        assert!(matches!(GamePak::from_bytes(&data), Err(Error::Format(_))));
    }

    #[test]
    fn rejects_short_header() {
        assert!(matches!(
            GamePak::from_bytes(b"NES\x1A\x01"),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn rejects_truncated_regions() {
        let data = image(1, 1, 0, PRG_BANK_SIZE + CHR_BANK_SIZE - 1);
        assert!(matches!(GamePak::from_bytes(&data), Err(Error::Format(_))));
    }

    #[test]
    fn loads_minimal_image() {
        let data = image(1, 1, 0, PRG_BANK_SIZE + CHR_BANK_SIZE);
        let pak = GamePak::from_bytes(&data).unwrap();

        assert_eq!(pak.prg_rom.len(), PRG_BANK_SIZE);
        assert_eq!(pak.chr_rom.len(), CHR_BANK_SIZE);
        assert_eq!(pak.prg_ram_size, 1);
        assert!(!pak.has_trainer());
        assert_eq!(pak.prg_rom[0], 0);
        assert_eq!(pak.chr_rom[0], (PRG_BANK_SIZE % 256) as u8);
    }

    #[test]
    fn trainer_precedes_prg() {
        let data = image(1, 0, FLAG6_TRAINER, TRAINER_SIZE + PRG_BANK_SIZE);
        let pak = GamePak::from_bytes(&data).unwrap();

        let trainer = pak.trainer.as_ref().unwrap();
        assert_eq!(trainer[1], 1);
        assert_eq!(pak.prg_rom.len(), PRG_BANK_SIZE);
        assert_eq!(pak.prg_rom[0], (TRAINER_SIZE % 256) as u8);
        assert!(pak.chr_rom.is_empty());
    }

    #[test]
    fn prg_reads_are_bounds_checked() {
        let data = image(1, 0, 0, PRG_BANK_SIZE);
        let pak = GamePak::from_bytes(&data).unwrap();

        assert_eq!(pak.prg_byte(3).unwrap(), 3);
        assert_eq!(pak.prg_slice(1, 2).unwrap(), &[1, 2]);
        assert!(matches!(pak.prg_byte(PRG_BANK_SIZE), Err(Error::OutOfRange(_))));
        assert!(matches!(
            pak.prg_slice(PRG_BANK_SIZE - 1, 2),
            Err(Error::OutOfRange(_))
        ));
    }
}
