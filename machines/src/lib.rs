//! Concrete collaborators that sit around `mcu32-core`: a flat binary
//! loader, a sample character device, and a `Board` that wires a CPU, a
//! bus, and a set of devices together into something runnable.

pub mod board;
pub mod loader;
pub mod uart;

pub use board::Board;
pub use loader::{read_program, LoadError};
pub use uart::Uart;
