//! Core of a small 32-bit instruction-set-architecture emulator: the
//! register file, memory bus, instruction decoder, and execution engine.
//!
//! This crate has no external dependencies and no notion of a concrete
//! program loader, CLI, or device beyond the [`device::Device`] trait.
//! Those live in `mcu32-machines` and the `mcu32` frontend binary.

pub mod arch;
pub mod bus;
pub mod cpu;
pub mod decode;
pub mod device;
pub mod registers;

pub mod prelude {
    pub use crate::arch;
    pub use crate::bus::{Bus, Region};
    pub use crate::cpu::{Cpu, RunOutcome};
    pub use crate::decode::{decode, sign_extend_imm, Instruction};
    pub use crate::device::{Device, DeviceRegistry};
    pub use crate::registers::RegisterFile;
}
