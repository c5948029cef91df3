//! Single-bit helpers over register values.

/// Mask for bit `idx`; indices past bit 7 select nothing.
fn mask(idx: u8) -> u8 {
    1u8.checked_shl(idx as u32).unwrap_or(0)
}

/// Non-zero iff bit `idx` of `value` is set. The masked bit is returned as is.
pub fn check(value: u8, idx: u8) -> u8 {
    value & mask(idx)
}

pub fn set(value: u8, idx: u8) -> u8 {
    value | mask(idx)
}

pub fn clear(value: u8, idx: u8) -> u8 {
    value & !mask(idx)
}

/// Copies bit `idx` of `src` into `dst`.
pub fn copy(src: u8, dst: u8, idx: u8) -> u8 {
    if check(src, idx) != 0 {
        set(dst, idx)
    } else {
        clear(dst, idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_clear_matches_clear() {
        for value in 0..=u8::MAX {
            for idx in 0..8 {
                assert_eq!(clear(set(value, idx), idx), clear(value, idx));
                assert_ne!(check(set(value, idx), idx), 0);
                assert_eq!(check(clear(value, idx), idx), 0);
            }
        }
    }

    #[test]
    fn set_and_clear_are_idempotent() {
        for value in 0..=u8::MAX {
            for idx in 0..8 {
                assert_eq!(set(set(value, idx), idx), set(value, idx));
                assert_eq!(clear(clear(value, idx), idx), clear(value, idx));
            }
        }
    }

    #[test]
    fn check_returns_masked_bit() {
        assert_eq!(check(0b1000_0000, 7), 0x80);
        assert_eq!(check(0b0100_0000, 6), 0x40);
        assert_eq!(check(0b0100_0000, 7), 0);
    }

    #[test]
    fn wide_index_reads_clear_and_changes_nothing() {
        for idx in [8, 9, 31, u8::MAX] {
            assert_eq!(check(0xFF, idx), 0);
            assert_eq!(set(0x5A, idx), 0x5A);
            assert_eq!(clear(0xA5, idx), 0xA5);
            assert_eq!(copy(0xFF, 0x12, idx), 0x12);
        }
    }

    #[test]
    fn copy_follows_source_bit() {
        assert_eq!(copy(0xFF, 0x00, 6), 0x40);
        assert_eq!(copy(0x00, 0xFF, 7), 0x7F);
        assert_eq!(copy(0x80, 0x80, 7), 0x80);
    }
}
