//! Decoded instruction handed to [`CPU::step`](super::CPU::step).
//!
//! The operand value is resolved by whoever builds the instruction: ROM fetches read it
//! little-endian like the hardware does, typed-in operands are read big-endian as written.

use crate::{
    cartridge::{GamePak, translate_address},
    cpu::opcodes::OpcodeTable,
    error::{Error, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    opcode: u8,
    size: u8,
    bytes: Vec<u8>,
    value: u16,
}

impl Instruction {
    /// Build from raw operand bytes, interpreting them in `order`.
    ///
    /// `size` is 1 to 3 and counts the opcode, so exactly `size - 1` operand bytes are required.
    pub fn new(opcode: u8, size: u8, bytes: &[u8], order: ByteOrder) -> Result<Self> {
        if !(1..=3).contains(&size) {
            return Err(Error::Operand(format!(
                "instruction size {size} for ${opcode:02X}, expected 1 to 3"
            )));
        }
        if bytes.len() != size as usize - 1 {
            return Err(Error::Operand(format!(
                "${opcode:02X} of size {size} takes {} operand byte(s), got {}",
                size - 1,
                bytes.len()
            )));
        }

        let fold = |acc: u16, b: &u8| (acc << 8) | *b as u16;
        let value = match order {
            ByteOrder::Big => bytes.iter().fold(0, fold),
            ByteOrder::Little => bytes.iter().rev().fold(0, fold),
        };

        Ok(Self {
            opcode,
            size,
            bytes: bytes.to_vec(),
            value,
        })
    }

    /// Decode the instruction at `pc` from PRG ROM. Operands are little-endian.
    pub fn fetch(table: &OpcodeTable, pak: &GamePak, pc: u16) -> Result<Self> {
        let offset = translate_address(pc)?;
        let opcode = pak.prg_byte(offset)?;
        let size = table.size(opcode);
        let bytes = pak.prg_slice(offset + 1, size as usize - 1)?;
        Self::new(opcode, size, bytes, ByteOrder::Little)
    }

    /// Decode a typed instruction such as `lda` + `"ff"` or `jmp` + `"c5f5"`.
    ///
    /// The mnemonic resolves to its first opcode in table order; the hex operand is
    /// big-endian and must supply exactly `size - 1` bytes.
    pub fn from_text(table: &OpcodeTable, mnemonic: &str, operand: Option<&str>) -> Result<Self> {
        let opcode = table
            .find(mnemonic)
            .ok_or_else(|| Error::Operand(format!("unknown mnemonic {mnemonic:?}")))?;
        let size = table.size(opcode);

        let bytes = match operand {
            Some(text) => parse_hex(text)?,
            None => Vec::new(),
        };
        if bytes.len() != size as usize - 1 {
            return Err(Error::Operand(format!(
                "{} takes {} operand byte(s), got {}",
                table.mnemonic(opcode),
                size - 1,
                bytes.len()
            )));
        }

        Self::new(opcode, size, &bytes, ByteOrder::Big)
    }

    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn value(&self) -> u16 {
        self.value
    }
}

/// `"c5f5"`, `"$C5F5"`, `"#$0f"` and `"f"` are all accepted; odd lengths get a leading zero.
fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let digits = text.trim().trim_start_matches('#').trim_start_matches('$');
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::Operand(format!("{text:?} is not hex")));
    }

    let padded = if digits.len() % 2 == 1 {
        format!("0{digits}")
    } else {
        digits.to_string()
    };

    padded
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).map_err(|e| Error::Operand(e.to_string()))?;
            u8::from_str_radix(pair, 16).map_err(|e| Error::Operand(e.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order_is_chosen_by_caller() {
        let little = Instruction::new(0x4C, 3, &[0xF5, 0xC5], ByteOrder::Little).unwrap();
        let big = Instruction::new(0x4C, 3, &[0xC5, 0xF5], ByteOrder::Big).unwrap();

        assert_eq!(little.value(), 0xC5F5);
        assert_eq!(big.value(), 0xC5F5);
        assert_eq!(little.bytes(), &[0xF5, 0xC5]);
    }

    #[test]
    fn no_operand_is_zero() {
        let nop = Instruction::new(0xEA, 1, &[], ByteOrder::Little).unwrap();
        assert_eq!(nop.value(), 0);
        assert!(nop.bytes().is_empty());
    }

    #[test]
    fn rejects_three_operand_bytes() {
        assert!(matches!(
            Instruction::new(0x4C, 3, &[1, 2, 3], ByteOrder::Big),
            Err(Error::Operand(_))
        ));
    }

    #[test]
    fn size_must_match_operand_bytes() {
        for (size, bytes) in [(0, &[0x42][..]), (4, &[1, 2, 3][..]), (2, &[][..]), (1, &[0x42][..])] {
            assert!(
                matches!(
                    Instruction::new(0xA9, size, bytes, ByteOrder::Little),
                    Err(Error::Operand(_))
                ),
                "size {size} with {} byte(s)",
                bytes.len()
            );
        }
        assert_eq!(
            Instruction::new(0xA9, 2, &[0x42], ByteOrder::Little).unwrap().value(),
            0x42
        );
    }

    #[test]
    fn text_operands_parse_big_endian() {
        let table = OpcodeTable::new();

        let jmp = Instruction::from_text(&table, "jmp", Some("c5f5")).unwrap();
        assert_eq!(jmp.opcode(), 0x4C);
        assert_eq!(jmp.size(), 3);
        assert_eq!(jmp.value(), 0xC5F5);

        let lda = Instruction::from_text(&table, "LDA", Some("#$f")).unwrap();
        assert_eq!(lda.opcode(), 0xA1);
        assert_eq!(lda.value(), 0x0F);

        let sec = Instruction::from_text(&table, "sec", None).unwrap();
        assert_eq!(sec.opcode(), 0x38);
        assert_eq!(sec.size(), 1);
    }

    #[test]
    fn text_operands_are_validated() {
        let table = OpcodeTable::new();

        assert!(matches!(
            Instruction::from_text(&table, "xyz", Some("00")),
            Err(Error::Operand(_))
        ));
        assert!(matches!(
            Instruction::from_text(&table, "jmp", Some("zz")),
            Err(Error::Operand(_))
        ));
        assert!(matches!(
            Instruction::from_text(&table, "jmp", Some("ff")),
            Err(Error::Operand(_))
        ));
        assert!(matches!(
            Instruction::from_text(&table, "sec", Some("01")),
            Err(Error::Operand(_))
        ));
    }
}
