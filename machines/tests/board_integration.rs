use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use mcu32_core::cpu::opcodes;
use mcu32_machines::Board;

/// A `Write` sink that hands out cloneable handles onto one shared buffer,
/// so a test can keep a handle to inspect what a `Board` wrote after a run.
#[derive(Clone, Default)]
struct SharedSink(Rc<RefCell<Vec<u8>>>);

impl SharedSink {
    fn contents(&self) -> Vec<u8> {
        self.0.borrow().clone()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn encode(opcode: u8, ra: u8, rb: u8, rc: u8, imm: u16) -> u32 {
    ((opcode as u32) << 24)
        | ((ra as u32) << 20)
        | ((rb as u32) << 16)
        | ((rc as u32) << 12)
        | imm as u32
}

fn write_program(instructions: &[u32]) -> std::path::PathBuf {
    let bytes: Vec<u8> = instructions.iter().flat_map(|i| i.to_le_bytes()).collect();
    let path = std::env::temp_dir().join(format!(
        "mcu32_integration_{}.bin",
        std::process::id()
    ));
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn program_prints_a_character_through_the_uart() {
    let uart_base = mcu32_machines::Uart::<Vec<u8>>::BASE;
    let high = (uart_base >> 16) as u16;
    let low = uart_base as u16 & 0xFFFF;

    let program = write_program(&[
        encode(opcodes::LUH, 0, 0, 0, high),             // R0 = uart_base & 0xFFFF0000
        encode(opcodes::ORI, 0, 0, 0, low),               // R0 |= uart_base & 0xFFFF
        encode(opcodes::ADDUI, 2, 1, 0, b'H' as u16),     // R1 = R2(=0) + 'H'
        encode(opcodes::STORB, 0, 1, 0, 0),               // MEM8[R0] (TXBUF) = low8(R1)
        encode(opcodes::ADDUI, 2, 3, 0, 1),               // R3 = 1 (control: transmit pending)
        encode(opcodes::ADDI, 0, 0, 0, 8),                // R0 += 8 -> CONTROL offset
        encode(opcodes::STOR, 3, 0, 0, 0),                // MEM32[R0] (CONTROL) = R3
        encode(opcodes::HALT, 0, 0, 0, 0),
    ]);

    let sink = SharedSink::default();
    let mut board = Board::with_sink(sink.clone());
    board.load_program(&program).unwrap();
    std::fs::remove_file(&program).unwrap();

    board.run();

    assert_eq!(sink.contents(), b"H");
}

#[test]
fn load_error_does_not_panic_on_missing_file() {
    let mut board = Board::with_sink(Vec::new());
    let result = board.load_program(std::path::Path::new("/no/such/file/here"));
    assert!(result.is_err());
}
