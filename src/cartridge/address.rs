//! CPU address → PRG ROM offset for the fixed single-bank layout.
//!
//! No bank switching: the address is split into a 4 KiB page number (`addr >> 12`) and a
//! page-relative part (`addr & 0xFFF`), combined as `(page - 0xC) * 256 + relative`.
//! This lines up with PRG offsets for $C000–$CFFF, which is where the trace ROM runs.

use crate::error::{Error, Result};

const PAGE_BASE: i32 = 0xC;

pub fn translate_address(addr: u16) -> Result<usize> {
    let page = (addr >> 12) as i32;
    let relative = (addr & 0x0FFF) as i32;
    let offset = (page - PAGE_BASE) * 256 + relative;

    usize::try_from(offset)
        .map_err(|_| Error::OutOfRange(format!("${addr:04X} is below the PRG window")))
}
