//! Fixed architectural parameters: region layout, instruction field layout,
//! and status-register flag bits.
//!
//! These are the single source of truth for region sizes/bases and
//! instruction-field masks/shifts; nothing else in this crate redefines
//! them.

/// Word width of the machine, in bits.
pub const WORD_WIDTH_BITS: u32 = 32;

/// Base address of ROM in guest address space.
pub const ROM_BASE: u32 = 0x0100_0000;
/// Size of ROM, in bytes (256 KiB).
pub const ROM_SIZE: usize = 256 * 1024;

/// Base address of RAM in guest address space.
pub const RAM_BASE: u32 = 0x0200_0000;
/// Size of RAM, in bytes (32 KiB).
pub const RAM_SIZE: usize = 32 * 1024;

/// Size of the flat backing buffer (ROM followed by RAM).
pub const BACKING_SIZE: usize = ROM_SIZE + RAM_SIZE;

/// Instruction field masks and bit offsets (see the encoding table in the
/// module docs of [`crate::decode`]).
pub const INSTR_OPC_MASK: u32 = 0xFF00_0000;
pub const INSTR_RA_MASK: u32 = 0x00F0_0000;
pub const INSTR_RB_MASK: u32 = 0x000F_0000;
pub const INSTR_RC_MASK: u32 = 0x0000_F000;
pub const INSTR_IMM_MASK: u32 = 0x0000_FFFF;

pub const INSTR_OPC_OFFSET: u32 = 24;
pub const INSTR_RA_OFFSET: u32 = 20;
pub const INSTR_RB_OFFSET: u32 = 16;
pub const INSTR_RC_OFFSET: u32 = 12;
pub const INSTR_IMM_OFFSET: u32 = 0;

/// Status-register flag bits (see [`crate::cpu::Sr`]).
pub const SR_ALU_Z_FLAG: u32 = 0x0000_0001;
pub const SR_ALU_O_FLAG: u32 = 0x0000_0002;
pub const SR_ALU_N_FLAG: u32 = 0x0000_0004;
pub const SR_ALU_FLAG_MASK: u32 = 0x0000_0007;
pub const SR_FAULT_DECODE_FLAG: u32 = 0x4000_0000;
pub const SR_FAULT_FLAG: u32 = 0x8000_0000;

/// Returns true if `addr` falls in the ROM region `[ROM_BASE, ROM_BASE + ROM_SIZE)`.
pub const fn in_rom(addr: u32) -> bool {
    addr >= ROM_BASE && (addr as u64) < ROM_BASE as u64 + ROM_SIZE as u64
}

/// Returns true if `addr` falls in the RAM region `[RAM_BASE, RAM_BASE + RAM_SIZE)`.
pub const fn in_ram(addr: u32) -> bool {
    addr >= RAM_BASE && (addr as u64) < RAM_BASE as u64 + RAM_SIZE as u64
}

/// Returns true if `addr` is backed by the flat buffer (ROM or RAM).
///
/// This is an OR, not an AND: an address backed by real memory is one that
/// is in ROM, or in RAM. ROM and RAM are disjoint, so ANDing the two checks
/// would always be false.
pub const fn in_real_mem(addr: u32) -> bool {
    in_ram(addr) || in_rom(addr)
}

/// Maps a guest address known to satisfy [`in_real_mem`] to an offset into
/// the flat backing buffer (ROM first, then RAM). Returns `None` for a
/// device address.
pub const fn backing_offset(addr: u32) -> Option<usize> {
    if in_rom(addr) {
        Some((addr - ROM_BASE) as usize)
    } else if in_ram(addr) {
        Some((addr - RAM_BASE) as usize + ROM_SIZE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rom_and_ram_are_disjoint() {
        for addr in [ROM_BASE, ROM_BASE + ROM_SIZE as u32 - 1, RAM_BASE, RAM_BASE + RAM_SIZE as u32 - 1] {
            assert!(!(in_rom(addr) && in_ram(addr)));
        }
    }

    #[test]
    fn classification_is_half_open() {
        assert!(in_rom(ROM_BASE));
        assert!(!in_rom(ROM_BASE + ROM_SIZE as u32));
        assert!(in_ram(RAM_BASE));
        assert!(!in_ram(RAM_BASE + RAM_SIZE as u32));
    }

    #[test]
    fn device_address_has_no_backing_offset() {
        assert!(!in_real_mem(0x5000_0000));
        assert_eq!(backing_offset(0x5000_0000), None);
    }

    #[test]
    fn backing_offset_spans_rom_then_ram() {
        assert_eq!(backing_offset(ROM_BASE), Some(0));
        assert_eq!(backing_offset(ROM_BASE + ROM_SIZE as u32 - 1), Some(ROM_SIZE - 1));
        assert_eq!(backing_offset(RAM_BASE), Some(ROM_SIZE));
        assert_eq!(backing_offset(RAM_BASE + RAM_SIZE as u32 - 1), Some(BACKING_SIZE - 1));
    }
}
