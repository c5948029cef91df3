//! nestest-style trace lines: rendering the CPU state and checking it against a reference log.
//!
//! Reference lines follow the fixed-column layout of `nestest.log`:
//!
//! ```text
//! C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD PPU:  0, 21 CYC:7
//! ```

use thiserror::Error;

use crate::{
    cpu::{CPU, Instruction},
    error::{Error, Result},
};

/// Scanline reported in traces. Not emulated; the value is where nestest starts.
pub const SCANLINE: u16 = 241;

/// `PC  bytes  MNEMONIC    A:.. X:.. Y:.. P:.. SP:.. CYC:... SL:...` for the state before `ins` runs.
pub fn format_state(cpu: &CPU, ins: &Instruction) -> String {
    let mut bytes = format!("{:02X}", ins.opcode());
    for b in ins.bytes() {
        bytes.push_str(&format!(" {b:02X}"));
    }

    format!(
        "{:04X}  {:<8}  {}    A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{:3} SL:{}",
        cpu.pc,
        bytes,
        cpu.table().mnemonic(ins.opcode()),
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.status,
        cpu.sp,
        (cpu.cycles * 3) % 341,
        SCANLINE
    )
}

/// The fields of one reference log line that the core can reproduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLine {
    pub pc: u16,
    pub opcode: u8,
    /// Operand bytes as a little-endian value; `None` for one-byte instructions.
    pub operand: Option<u16>,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: u8,
    pub sp: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: expected {expected:#04X}, got {actual:#04X}")]
pub struct Mismatch {
    pub field: &'static str,
    pub expected: u16,
    pub actual: u16,
}

impl LogLine {
    pub fn parse(line: &str) -> Result<Self> {
        let column = |range: std::ops::Range<usize>| {
            line.get(range.clone()).ok_or_else(|| {
                Error::Format(format!("trace line too short for columns {range:?}: {line:?}"))
            })
        };
        let hex = |range: std::ops::Range<usize>| -> Result<u16> {
            let text = column(range)?;
            u16::from_str_radix(text.trim(), 16)
                .map_err(|e| Error::Format(format!("{text:?} in trace line: {e}")))
        };

        // Operand high byte sits in columns 12-14, low byte in 9-11.
        let operand_text = format!("{}{}", column(12..14)?, column(9..11)?);
        let operand = match operand_text.trim() {
            "" => None,
            digits => Some(
                u16::from_str_radix(digits, 16)
                    .map_err(|e| Error::Format(format!("operand {digits:?}: {e}")))?,
            ),
        };

        Ok(Self {
            pc: hex(0..4)?,
            opcode: hex(6..8)? as u8,
            operand,
            a: hex(50..52)? as u8,
            x: hex(55..57)? as u8,
            y: hex(60..62)? as u8,
            p: hex(65..67)? as u8,
            sp: hex(71..73)? as u8,
        })
    }

    /// First field where `cpu`/`ins` (before stepping) disagree with this line.
    pub fn check(&self, cpu: &CPU, ins: &Instruction) -> std::result::Result<(), Mismatch> {
        let mut fields = vec![
            ("PC", self.pc, cpu.pc),
            ("opcode", self.opcode as u16, ins.opcode() as u16),
        ];
        if let Some(operand) = self.operand {
            fields.push(("operand", operand, ins.value()));
        }
        fields.extend([
            ("A", self.a as u16, cpu.a as u16),
            ("X", self.x as u16, cpu.x as u16),
            ("Y", self.y as u16, cpu.y as u16),
            ("P", self.p as u16, cpu.status as u16),
            ("SP", self.sp as u16, cpu.sp as u16),
        ]);

        match fields.into_iter().find(|(_, expected, actual)| expected != actual) {
            Some((field, expected, actual)) => Err(Mismatch {
                field,
                expected,
                actual,
            }),
            None => Ok(()),
        }
    }
}
