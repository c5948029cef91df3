use log::{Level, log_enabled, trace, warn};

use crate::{
    bits,
    cartridge::{GamePak, translate_address},
    cpu::{
        flags::{FLAG_CARRY, FLAG_INTERRUPT_DISABLE, FLAG_UNUSED, NEGATIVE_BIT, ZERO_BIT},
        instruction::Instruction,
        opcodes::{Handler, OpcodeTable},
    },
    error::{Error, Result},
    trace::format_state,
};

pub const MEMORY_SIZE: usize = 0x10000;
/// Fixed entry point; the reset vector is never read.
pub const START_PC: u16 = 0xC000;
pub const START_SP: u8 = 0xFD;
pub const START_STATUS: u8 = FLAG_INTERRUPT_DISABLE | FLAG_UNUSED;

pub struct CPU {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
    pub cycles: u64,
    pub memory: Box<[u8]>,
    pc_set: bool,
    table: OpcodeTable,
}

impl CPU {
    pub fn new() -> Self {
        Self::with_table(OpcodeTable::new())
    }

    pub fn with_table(table: OpcodeTable) -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: START_SP,
            pc: START_PC,
            status: START_STATUS,
            cycles: 0,
            memory: vec![0; MEMORY_SIZE].into_boxed_slice(),
            pc_set: false,
            table,
        }
    }

    pub fn table(&self) -> &OpcodeTable {
        &self.table
    }

    /// Execute one decoded instruction.
    ///
    /// An unimplemented opcode returns an error before any register, memory or cycle change.
    pub fn step(&mut self, instruction: &Instruction) -> Result<()> {
        self.pc_set = false;

        let op = *self.table.get(instruction.opcode());
        let execute = match op.handler {
            Handler::Implemented(execute) => execute,
            Handler::Unimplemented => {
                warn!(
                    "unimplemented opcode ${:02X} ({}) at ${:04X}",
                    instruction.opcode(),
                    op.mnemonic,
                    self.pc
                );
                return Err(Error::UnimplementedOpcode {
                    opcode: instruction.opcode(),
                    mnemonic: op.mnemonic,
                });
            }
        };

        if log_enabled!(Level::Trace) {
            trace!("{}", format_state(self, instruction));
        }

        execute(self, instruction);
        self.cycles += op.cycles as u64;

        if !self.pc_set {
            self.pc = self.pc.wrapping_add(instruction.size() as u16);
        }
        Ok(())
    }

    /// Decode the instruction at the current PC from PRG ROM.
    pub fn decode(&self, pak: &GamePak) -> Result<Instruction> {
        Instruction::fetch(&self.table, pak, self.pc)
    }

    pub fn translate_address(&self, addr: u16) -> Result<usize> {
        translate_address(addr)
    }

    pub fn read_memory(&self, index: usize) -> Result<u8> {
        self.memory
            .get(index)
            .copied()
            .ok_or_else(|| Error::OutOfRange(format!("memory index {index:#X} past $FFFF")))
    }

    /// True when the last executed instruction assigned PC itself.
    pub fn pc_set(&self) -> bool {
        self.pc_set
    }

    pub fn set_pc(&mut self, addr: u16) {
        self.pc = addr;
        self.pc_set = true;
    }

    pub fn set_zero(&mut self, value: u8) {
        self.status = if value == 0 {
            bits::set(self.status, ZERO_BIT)
        } else {
            bits::clear(self.status, ZERO_BIT)
        };
    }

    pub fn set_negative(&mut self, value: u8) {
        self.status = bits::copy(value, self.status, NEGATIVE_BIT);
    }

    pub fn set_zero_and_negative(&mut self, value: u8) {
        self.set_zero(value);
        self.set_negative(value);
    }

    /// Z/N from `reg - mem` (wrapped), carry iff `reg >= mem`.
    pub fn compare(&mut self, reg: u8, mem: u8) {
        self.set_zero_and_negative(reg.wrapping_sub(mem));

        if reg >= mem {
            self.status |= FLAG_CARRY;
        } else {
            self.status &= !FLAG_CARRY;
        }
    }

    pub(crate) fn carry(&self) -> u8 {
        self.status & FLAG_CARRY
    }

    // The stack lives at memory[SP] directly; there is no $0100 page offset.

    pub(crate) fn push(&mut self, value: u8) {
        self.sp = self.sp.wrapping_sub(1);
        self.memory[self.sp as usize] = value;
    }

    pub(crate) fn pull(&mut self) -> u8 {
        let value = self.memory[self.sp as usize];
        self.sp = self.sp.wrapping_add(1);
        value
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}
