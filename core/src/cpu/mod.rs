//! The execution engine: per-instruction dispatch, the register-file/bus
//! wiring that exposes it, and the run loop.

pub mod alu;
pub mod branch;
pub mod opcodes;

use crate::arch::{SR_ALU_FLAG_MASK, SR_FAULT_DECODE_FLAG};
use crate::bus::Bus;
use crate::decode::{decode, sign_extend_imm};
use crate::registers::{RegisterFile, LR, PC, SP, SR};

/// A CPU: the owned register file and bus for one machine's lifetime.
pub struct Cpu {
    pub regs: RegisterFile,
    pub bus: Bus,
    /// When set, [`Cpu::step`] prints a one-line fetch/decode trace before
    /// executing.
    pub verbose: bool,
}

/// The run loop's outcome. HALT is the sole clean termination path in the
/// core, so this carries no error information. It only documents that the
/// loop actually stopped via HALT rather than, say, a caller-imposed
/// instruction budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Halted,
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            regs: RegisterFile::reset(),
            bus: Bus::new(),
            verbose: false,
        }
    }

    /// Resets the register file to its power-on state. Backing memory and
    /// registered devices are untouched.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::reset();
    }

    /// Fetches and executes one instruction at the current PC. Returns
    /// `false` iff that instruction was `HALT`.
    pub fn step(&mut self) -> bool {
        let pc = self.regs.read(PC);
        let instr = self.bus.read_word(pc);
        if self.verbose {
            let d = decode(instr);
            println!(
                "@0x{pc:08x}: decoded 0x{instr:08x} --> (ra: {}, rb: {}, rc: {}, imm: {}, opc: 0x{:02x})",
                d.ra, d.rb, d.rc, d.imm, d.opcode
            );
        }
        self.execute(instr)
    }

    /// Runs until `HALT`. Each executed instruction is followed by exactly
    /// one round of device updates, unless that instruction was HALT.
    pub fn run(&mut self) -> RunOutcome {
        while self.step() {
            self.bus.devices.tick();
        }
        RunOutcome::Halted
    }

    /// Writes `value` to register `index`. If `index` names the program
    /// counter, suppresses the post-dispatch PC auto-increment so the
    /// write acts as a jump.
    fn write_indexed(&mut self, index: u8, value: u32, increment_pc: &mut bool) {
        self.regs.write(index as usize, value);
        if index as usize == PC {
            *increment_pc = false;
        }
    }

    /// Decodes and executes one instruction word. Returns `false` iff the
    /// opcode was `HALT`; every other opcode, including an unrecognized
    /// one, returns `true` and leaves the engine running.
    pub fn execute(&mut self, instr: u32) -> bool {
        use opcodes as op;

        let d = decode(instr);
        let (ra, rb, rc) = (d.ra, d.rb, d.rc);
        let imm = d.imm;

        let mut new_sr = 0u32;
        let mut increment_pc = true;
        let mut is_halt = false;

        let reg = |regs: &RegisterFile, idx: u8| regs.read(idx as usize);

        match d.opcode {
            op::ADD => {
                let (a, b) = (reg(&self.regs, ra), reg(&self.regs, rb));
                let c = a.wrapping_add(b);
                new_sr |= alu::add_flags(a, b, c);
                self.write_indexed(rc, c, &mut increment_pc);
            }
            op::ADDI => {
                let (a, b) = (reg(&self.regs, ra), sign_extend_imm(imm));
                let c = a.wrapping_add(b);
                new_sr |= alu::add_flags(a, b, c);
                self.write_indexed(rb, c, &mut increment_pc);
            }
            op::ADDUI => {
                let (a, b) = (reg(&self.regs, ra), imm as u32);
                let c = a.wrapping_add(b);
                new_sr |= alu::add_flags(a, b, c);
                self.write_indexed(rb, c, &mut increment_pc);
            }
            op::LUH => {
                self.write_indexed(ra, (imm as u32) << 16, &mut increment_pc);
            }
            op::PUSH => {
                let sp = self.regs.read(SP);
                self.bus.write_word(sp, reg(&self.regs, ra));
                self.regs.write(SP, sp.wrapping_sub(4));
            }
            op::POP => {
                let sp = self.regs.read(SP).wrapping_add(4);
                self.regs.write(SP, sp);
                let value = self.bus.read_word(sp);
                self.write_indexed(ra, value, &mut increment_pc);
            }
            op::JUMP => {
                self.regs.write(PC, reg(&self.regs, ra));
                increment_pc = false;
            }
            op::JUMPI => {
                self.regs
                    .write(PC, reg(&self.regs, ra).wrapping_add(sign_extend_imm(imm)));
                increment_pc = false;
            }
            op::BR => {
                let pc = self.regs.read(PC);
                self.regs.write(PC, pc.wrapping_add(reg(&self.regs, ra)));
                increment_pc = false;
            }
            op::BI => {
                let pc = self.regs.read(PC);
                self.regs.write(PC, pc.wrapping_add(sign_extend_imm(imm)));
                increment_pc = false;
            }
            op::MOV => {
                self.write_indexed(rb, reg(&self.regs, ra), &mut increment_pc);
            }
            op::HALT => {
                is_halt = true;
            }
            op::DUMP => {
                self.dump_registers();
            }
            op::LOAD => {
                let value = self.bus.read_word(reg(&self.regs, rb));
                self.write_indexed(ra, value, &mut increment_pc);
            }
            op::STOR => {
                self.bus.write_word(reg(&self.regs, rb), reg(&self.regs, ra));
            }
            op::JZ => {
                if branch::is_zero(reg(&self.regs, ra)) {
                    self.regs.write(PC, reg(&self.regs, rb));
                    increment_pc = false;
                }
            }
            op::JZI => {
                if branch::is_zero(reg(&self.regs, ra)) {
                    self.regs
                        .write(PC, reg(&self.regs, rb).wrapping_add(sign_extend_imm(imm)));
                    increment_pc = false;
                }
            }
            op::BZ => {
                if branch::is_zero(reg(&self.regs, ra)) {
                    let pc = self.regs.read(PC);
                    self.regs.write(PC, pc.wrapping_add(reg(&self.regs, rb)));
                    increment_pc = false;
                }
            }
            op::BZI => {
                if branch::is_zero(reg(&self.regs, ra)) {
                    let pc = self.regs.read(PC);
                    self.regs.write(PC, pc.wrapping_add(sign_extend_imm(imm)));
                    increment_pc = false;
                }
            }
            op::JLT => {
                if branch::is_negative(reg(&self.regs, ra)) {
                    self.regs.write(PC, reg(&self.regs, rb));
                    increment_pc = false;
                }
            }
            op::JLTI => {
                if branch::is_negative(reg(&self.regs, ra)) {
                    self.regs
                        .write(PC, reg(&self.regs, rb).wrapping_add(sign_extend_imm(imm)));
                    increment_pc = false;
                }
            }
            op::BLT => {
                if branch::is_negative(reg(&self.regs, ra)) {
                    let pc = self.regs.read(PC);
                    self.regs.write(PC, pc.wrapping_add(reg(&self.regs, rb)));
                    increment_pc = false;
                }
            }
            op::BLTI => {
                if branch::is_negative(reg(&self.regs, ra)) {
                    let pc = self.regs.read(PC);
                    self.regs.write(PC, pc.wrapping_add(sign_extend_imm(imm)));
                    increment_pc = false;
                }
            }
            op::MOVZ => {
                if branch::is_zero(reg(&self.regs, ra)) {
                    self.write_indexed(rc, reg(&self.regs, rb), &mut increment_pc);
                }
            }
            op::MOVLT => {
                if branch::is_negative(reg(&self.regs, ra)) {
                    self.write_indexed(rc, reg(&self.regs, rb), &mut increment_pc);
                }
            }
            op::AND => {
                self.write_indexed(rc, reg(&self.regs, ra) & reg(&self.regs, rb), &mut increment_pc);
            }
            op::ANDI => {
                self.write_indexed(rc, reg(&self.regs, ra) & imm as u32, &mut increment_pc);
            }
            op::OR => {
                self.write_indexed(rc, reg(&self.regs, ra) | reg(&self.regs, rb), &mut increment_pc);
            }
            op::ORI => {
                self.write_indexed(rc, reg(&self.regs, ra) | imm as u32, &mut increment_pc);
            }
            op::INV => {
                self.write_indexed(rb, !reg(&self.regs, ra), &mut increment_pc);
            }
            op::XOR => {
                self.write_indexed(rc, reg(&self.regs, ra) ^ reg(&self.regs, rb), &mut increment_pc);
            }
            op::XORI => {
                self.write_indexed(rb, reg(&self.regs, ra) ^ imm as u32, &mut increment_pc);
            }
            op::LOADH => {
                let value = self.bus.read_hword(reg(&self.regs, rb)) as u32;
                self.write_indexed(ra, value, &mut increment_pc);
            }
            op::STORH => {
                self.bus
                    .write_hword(reg(&self.regs, rb), reg(&self.regs, ra) as u16);
            }
            op::LOADB => {
                let value = self.bus.read_byte(reg(&self.regs, rb)) as u32;
                self.write_indexed(ra, value, &mut increment_pc);
            }
            op::STORB => {
                self.bus
                    .write_byte(reg(&self.regs, ra), reg(&self.regs, rb) as u8);
            }
            op::SAR => {
                let shift = reg(&self.regs, rb) & 0x1F;
                let value = ((reg(&self.regs, ra) as i32) >> shift) as u32;
                self.write_indexed(rc, value, &mut increment_pc);
            }
            op::SLL => {
                let shift = reg(&self.regs, rb) & 0x1F;
                self.write_indexed(rc, reg(&self.regs, ra) << shift, &mut increment_pc);
            }
            op::SLR => {
                let shift = reg(&self.regs, rb) & 0x1F;
                self.write_indexed(rc, reg(&self.regs, ra) >> shift, &mut increment_pc);
            }
            op::SARI => {
                let shift = sign_extend_imm(imm) & 0x1F;
                let value = ((reg(&self.regs, ra) as i32) >> shift) as u32;
                self.write_indexed(rc, value, &mut increment_pc);
            }
            op::BALI => {
                let pc = self.regs.read(PC);
                self.regs.write(LR, pc.wrapping_add(4));
                self.regs.write(PC, pc.wrapping_add(sign_extend_imm(imm)));
                increment_pc = false;
            }
            _ => {
                new_sr |= SR_FAULT_DECODE_FLAG;
            }
        }

        if increment_pc {
            let pc = self.regs.read(PC);
            self.regs.write(PC, pc.wrapping_add(4));
        }

        let sr = self.regs.read(SR);
        self.regs.write(SR, (sr & !SR_ALU_FLAG_MASK) | new_sr);

        !is_halt
    }

    fn dump_registers(&self) {
        let pc = self.regs.read(PC);
        println!("Contents of registers at PC=0x{pc:08x}:");
        for i in 0..12 {
            println!("R{i}:\t0x{:08x}", self.regs.read(i));
        }
        println!(
            "PC:\t0x{:08x}\nLR:\t0x{:08x}\nSP:\t0x{:08x}\nSR:\t0x{:08x}\n",
            self.regs.read(PC),
            self.regs.read(LR),
            self.regs.read(SP),
            self.regs.read(SR)
        );
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
