//! Opcode byte assignments.
//!
//! A handful of slots (`MUL`, `MULI`, `PUSHI`, `CALL`, `RET`) are reserved
//! but not assigned to any implemented operation; bitwise, shift, narrow
//! load/store, and call-like ops that need a byte are assigned stable
//! numbers past those reserved slots rather than reusing them.

pub const ADD: u8 = 0x00;
pub const ADDI: u8 = 0x01;
pub const ADDUI: u8 = 0x02;
pub const LUH: u8 = 0x03;
// 0x04 MUL, 0x05 MULI: reserved, unspecified.
pub const PUSH: u8 = 0x06;
// 0x07 PUSHI: reserved, unspecified.
pub const POP: u8 = 0x08;
pub const JUMP: u8 = 0x09;
pub const JUMPI: u8 = 0x0A;
pub const BR: u8 = 0x0B;
pub const BI: u8 = 0x0C;
// 0x0D CALL: reserved, unspecified.
pub const MOV: u8 = 0x0E;
pub const HALT: u8 = 0x0F;
pub const DUMP: u8 = 0x10;
pub const LOAD: u8 = 0x11;
pub const STOR: u8 = 0x12;
// 0x13 RET: reserved, unspecified.
pub const JZ: u8 = 0x14;
pub const JZI: u8 = 0x15;
pub const BZ: u8 = 0x16;
pub const BZI: u8 = 0x17;
pub const JLT: u8 = 0x18;
pub const JLTI: u8 = 0x19;
pub const BLT: u8 = 0x1A;
pub const BLTI: u8 = 0x1B;
pub const MOVZ: u8 = 0x1C;
pub const MOVLT: u8 = 0x1D;

pub const AND: u8 = 0x1E;
pub const ANDI: u8 = 0x1F;
pub const OR: u8 = 0x20;
pub const ORI: u8 = 0x21;
pub const INV: u8 = 0x22;
pub const XOR: u8 = 0x23;
pub const XORI: u8 = 0x24;
pub const LOADH: u8 = 0x25;
pub const STORH: u8 = 0x26;
pub const LOADB: u8 = 0x27;
pub const STORB: u8 = 0x28;
pub const SAR: u8 = 0x29;
pub const SLL: u8 = 0x2A;
pub const SLR: u8 = 0x2B;
pub const SARI: u8 = 0x2C;
pub const BALI: u8 = 0x2D;
