//! Opcode dispatch table: one entry per opcode byte with mnemonic, size, cycles and handler.
//!
//! Laid out as the canonical 16×16 [opcode matrix](https://www.nesdev.org/wiki/CPU_unofficial_opcodes)
//! (row = high nibble, column = low nibble). Undocumented opcodes keep their common names so
//! traces stay readable, but only NOP encodings execute; the rest are [`Handler::Unimplemented`].

use crate::cpu::{cpu::CPU, instruction::Instruction};

pub type HandlerFn = fn(&mut CPU, &Instruction);

#[derive(Debug, Clone, Copy)]
pub enum Handler {
    Implemented(HandlerFn),
    Unimplemented,
}

#[derive(Debug, Clone, Copy)]
pub struct Opcode {
    pub mnemonic: &'static str,
    /// Total length in bytes, opcode included.
    pub size: u8,
    /// Base cycle cost; no page-crossing or branch-taken penalties.
    pub cycles: u8,
    pub handler: Handler,
}

#[rustfmt::skip]
const MNEMONICS: [&str; 256] = [
    // 0      1      2      3      4      5      6      7      8      9      A      B      C      D      E      F
    "BRK", "ORA", "KIL", "SLO", "NOP", "ORA", "ASL", "SLO", "PHP", "ORA", "ASL", "ANC", "NOP", "ORA", "ASL", "SLO", // 0
    "BPL", "ORA", "KIL", "SLO", "NOP", "ORA", "ASL", "SLO", "CLC", "ORA", "NOP", "SLO", "NOP", "ORA", "ASL", "SLO", // 1
    "JSR", "AND", "KIL", "RLA", "BIT", "AND", "ROL", "RLA", "PLP", "AND", "ROL", "ANC", "BIT", "AND", "ROL", "RLA", // 2
    "BMI", "AND", "KIL", "RLA", "NOP", "AND", "ROL", "RLA", "SEC", "AND", "NOP", "RLA", "NOP", "AND", "ROL", "RLA", // 3
    "RTI", "EOR", "KIL", "SRE", "NOP", "EOR", "LSR", "SRE", "PHA", "EOR", "LSR", "ALR", "JMP", "EOR", "LSR", "SRE", // 4
    "BVC", "EOR", "KIL", "SRE", "NOP", "EOR", "LSR", "SRE", "CLI", "EOR", "NOP", "SRE", "NOP", "EOR", "LSR", "SRE", // 5
    "RTS", "ADC", "KIL", "RRA", "NOP", "ADC", "ROR", "RRA", "PLA", "ADC", "ROR", "ARR", "JMP", "ADC", "ROR", "RRA", // 6
    "BVS", "ADC", "KIL", "RRA", "NOP", "ADC", "ROR", "RRA", "SEI", "ADC", "NOP", "RRA", "NOP", "ADC", "ROR", "RRA", // 7
    "NOP", "STA", "NOP", "SAX", "STY", "STA", "STX", "SAX", "DEY", "NOP", "TXA", "XAA", "STY", "STA", "STX", "SAX", // 8
    "BCC", "STA", "KIL", "AHX", "STY", "STA", "STX", "SAX", "TYA", "STA", "TXS", "TAS", "SHY", "STA", "SHX", "AHX", // 9
    "LDY", "LDA", "LDX", "LAX", "LDY", "LDA", "LDX", "LAX", "TAY", "LDA", "TAX", "LAX", "LDY", "LDA", "LDX", "LAX", // A
    "BCS", "LDA", "KIL", "LAX", "LDY", "LDA", "LDX", "LAX", "CLV", "LDA", "TSX", "LAS", "LDY", "LDA", "LDX", "LAX", // B
    "CPY", "CMP", "NOP", "DCP", "CPY", "CMP", "DEC", "DCP", "INY", "CMP", "DEX", "AXS", "CPY", "CMP", "DEC", "DCP", // C
    "BNE", "CMP", "KIL", "DCP", "NOP", "CMP", "DEC", "DCP", "CLD", "CMP", "NOP", "DCP", "NOP", "CMP", "DEC", "DCP", // D
    "CPX", "SBC", "NOP", "ISC", "CPX", "SBC", "INC", "ISC", "INX", "SBC", "NOP", "SBC", "CPX", "SBC", "INC", "ISC", // E
    "BEQ", "SBC", "KIL", "ISC", "NOP", "SBC", "INC", "ISC", "SED", "SBC", "NOP", "ISC", "NOP", "SBC", "INC", "ISC", // F
];

#[rustfmt::skip]
const SIZES: [u8; 256] = [
    // 0 1  2  3  4  5  6  7  8  9  A  B  C  D  E  F
    1, 2, 1, 2, 2, 2, 2, 2, 1, 2, 1, 2, 3, 3, 3, 3, // 0
    2, 2, 1, 2, 2, 2, 2, 2, 1, 3, 1, 3, 3, 3, 3, 3, // 1
    3, 2, 1, 2, 2, 2, 2, 2, 1, 2, 1, 2, 3, 3, 3, 3, // 2
    2, 2, 1, 2, 2, 2, 2, 2, 1, 3, 1, 3, 3, 3, 3, 3, // 3
    1, 2, 1, 2, 2, 2, 2, 2, 1, 2, 1, 2, 3, 3, 3, 3, // 4
    2, 2, 1, 2, 2, 2, 2, 2, 1, 3, 1, 3, 3, 3, 3, 3, // 5
    1, 2, 1, 2, 2, 2, 2, 2, 1, 2, 1, 2, 3, 3, 3, 3, // 6
    2, 2, 1, 2, 2, 2, 2, 2, 1, 3, 1, 3, 3, 3, 3, 3, // 7
    2, 2, 2, 2, 2, 2, 2, 2, 1, 2, 1, 2, 3, 3, 3, 3, // 8
    2, 2, 1, 2, 2, 2, 2, 2, 1, 3, 1, 3, 3, 3, 3, 3, // 9
    2, 2, 2, 2, 2, 2, 2, 2, 1, 2, 1, 2, 3, 3, 3, 3, // A
    2, 2, 1, 2, 2, 2, 2, 2, 1, 3, 1, 3, 3, 3, 3, 3, // B
    2, 2, 2, 2, 2, 2, 2, 2, 1, 2, 1, 2, 3, 3, 3, 3, // C
    2, 2, 1, 2, 2, 2, 2, 2, 1, 3, 1, 3, 3, 3, 3, 3, // D
    2, 2, 2, 2, 2, 2, 2, 2, 1, 2, 1, 2, 3, 3, 3, 3, // E
    2, 2, 1, 2, 2, 2, 2, 2, 1, 3, 1, 3, 3, 3, 3, 3, // F
];

#[rustfmt::skip]
const CYCLES: [u8; 256] = [
    // 0 1  2  3  4  5  6  7  8  9  A  B  C  D  E  F
    7, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 4, 4, 6, 6, // 0
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 1
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 4, 4, 6, 6, // 2
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 3
    6, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 3, 4, 6, 6, // 4
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 5
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 5, 4, 6, 6, // 6
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 7
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4, // 8
    2, 6, 2, 6, 4, 4, 4, 4, 2, 5, 2, 5, 5, 5, 5, 5, // 9
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4, // A
    2, 5, 2, 5, 4, 4, 4, 4, 2, 4, 2, 4, 4, 4, 4, 4, // B
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, // C
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // D
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, // E
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // F
];

/// Semantics for each opcode. Anything not listed is unimplemented.
fn handler(opcode: u8) -> Handler {
    use Handler::Implemented as Op;

    match opcode {
        0xA1 | 0xA5 | 0xA9 | 0xAD | 0xB1 | 0xB5 | 0xB9 | 0xBD => Op(CPU::lda),
        0xA2 | 0xA6 | 0xAE | 0xB6 | 0xBE => Op(CPU::ldx),
        0xA0 | 0xA4 | 0xAC | 0xB4 | 0xBC => Op(CPU::ldy),
        0x81 | 0x85 | 0x8D | 0x91 | 0x95 | 0x99 | 0x9D => Op(CPU::sta),
        0x86 | 0x8E | 0x96 => Op(CPU::stx),
        0x84 | 0x8C | 0x94 => Op(CPU::sty),
        0xAA => Op(CPU::tax),
        0xA8 => Op(CPU::tay),
        0x8A => Op(CPU::txa),
        0x98 => Op(CPU::tya),

        0x01 | 0x05 | 0x09 | 0x0D | 0x11 | 0x15 | 0x19 | 0x1D => Op(CPU::ora),
        0x21 | 0x25 | 0x29 | 0x2D | 0x31 | 0x35 | 0x39 | 0x3D => Op(CPU::and),
        0x41 | 0x45 | 0x49 | 0x4D | 0x51 | 0x55 | 0x59 | 0x5D => Op(CPU::eor),
        0x61 | 0x65 | 0x69 | 0x6D | 0x71 | 0x75 | 0x79 | 0x7D => Op(CPU::adc),
        0xC1 | 0xC5 | 0xC9 | 0xCD | 0xD1 | 0xD5 | 0xD9 | 0xDD => Op(CPU::cmp),
        0xE0 | 0xE4 | 0xEC => Op(CPU::cpx),
        0xC0 | 0xC4 | 0xCC => Op(CPU::cpy),
        0x24 | 0x2C => Op(CPU::bit),

        // Accumulator forms only
        0x0A => Op(CPU::asl),
        0x4A => Op(CPU::lsr),

        0x10 => Op(CPU::bpl),
        0x30 => Op(CPU::bmi),
        0x50 => Op(CPU::bvc),
        0x70 => Op(CPU::bvs),
        0x90 => Op(CPU::bcc),
        0xB0 => Op(CPU::bcs),
        0xD0 => Op(CPU::bne),
        0xF0 => Op(CPU::beq),

        0x4C | 0x6C => Op(CPU::jmp),
        0x20 => Op(CPU::jsr),
        0x60 => Op(CPU::rts),

        0x48 => Op(CPU::pha),
        0x08 => Op(CPU::php),
        0x68 => Op(CPU::pla),
        0x28 => Op(CPU::plp),

        0x38 => Op(CPU::sec),
        0x18 => Op(CPU::clc),
        0x78 => Op(CPU::sei),
        0xF8 => Op(CPU::sed),
        0xD8 => Op(CPU::cld),
        0xB8 => Op(CPU::clv),

        0xEA => Op(CPU::nop),
        0x1A | 0x3A | 0x5A | 0x7A | 0xDA | 0xFA => Op(CPU::nop),
        0x04 | 0x44 | 0x64 | 0x14 | 0x34 | 0x54 | 0x74 | 0xD4 | 0xF4 => Op(CPU::nop),
        0x0C | 0x1C | 0x3C | 0x5C | 0x7C | 0xDC | 0xFC => Op(CPU::nop),
        0x80 | 0x82 | 0x89 | 0xC2 | 0xE2 => Op(CPU::nop),

        _ => Handler::Unimplemented,
    }
}

/// Immutable after construction. Owned by the [`CPU`] that dispatches through it.
#[derive(Debug, Clone)]
pub struct OpcodeTable {
    entries: [Opcode; 256],
}

impl OpcodeTable {
    pub fn new() -> Self {
        let entries = std::array::from_fn(|i| Opcode {
            mnemonic: MNEMONICS[i],
            size: SIZES[i],
            cycles: CYCLES[i],
            handler: handler(i as u8),
        });
        Self { entries }
    }

    pub fn get(&self, opcode: u8) -> &Opcode {
        &self.entries[opcode as usize]
    }

    pub fn size(&self, opcode: u8) -> u8 {
        self.get(opcode).size
    }

    pub fn cycles(&self, opcode: u8) -> u8 {
        self.get(opcode).cycles
    }

    pub fn mnemonic(&self, opcode: u8) -> &'static str {
        self.get(opcode).mnemonic
    }

    pub fn is_implemented(&self, opcode: u8) -> bool {
        matches!(self.get(opcode).handler, Handler::Implemented(_))
    }

    /// First opcode in table order carrying `mnemonic` (case-insensitive).
    pub fn find(&self, mnemonic: &str) -> Option<u8> {
        self.entries
            .iter()
            .position(|op| op.mnemonic.eq_ignore_ascii_case(mnemonic))
            .map(|i| i as u8)
    }
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::new()
    }
}
