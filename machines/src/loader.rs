//! Flat binary program loading.
//!
//! The program binary format has no header, no relocations, no symbol
//! table: the file's bytes are copied verbatim into ROM starting at offset
//! 0. A file larger than ROM is a fatal load error, never a panic; the
//! frontend decides how to report it.

use std::fmt;
use std::path::Path;

use mcu32_core::arch::ROM_SIZE;

/// Errors that can occur while loading a program binary.
#[derive(Debug)]
pub enum LoadError {
    /// Underlying I/O error (file not found, permission denied, etc.)
    Io(std::io::Error),
    /// The file is larger than ROM can hold.
    TooLarge { size: usize, max: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::TooLarge { size, max } => {
                write!(f, "program is {size} bytes, exceeds ROM size of {max} bytes")
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Reads a flat binary file, rejecting one that wouldn't fit in ROM.
pub fn read_program(path: &Path) -> Result<Vec<u8>, LoadError> {
    let data = std::fs::read(path)?;
    if data.len() > ROM_SIZE {
        return Err(LoadError::TooLarge {
            size: data.len(),
            max: ROM_SIZE,
        });
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_io_error() {
        let result = read_program(Path::new("/nonexistent/path/to/a/binary"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let dir = std::env::temp_dir().join("mcu32_loader_test_oversized");
        std::fs::write(&dir, vec![0u8; ROM_SIZE + 1]).unwrap();
        let result = read_program(&dir);
        assert!(matches!(result, Err(LoadError::TooLarge { .. })));
        std::fs::remove_file(&dir).unwrap();
    }

    #[test]
    fn exact_rom_size_file_is_accepted() {
        let dir = std::env::temp_dir().join("mcu32_loader_test_exact");
        std::fs::write(&dir, vec![0xAB; ROM_SIZE]).unwrap();
        let result = read_program(&dir).unwrap();
        assert_eq!(result.len(), ROM_SIZE);
        std::fs::remove_file(&dir).unwrap();
    }

    #[test]
    fn small_file_loads_verbatim() {
        let dir = std::env::temp_dir().join("mcu32_loader_test_small");
        std::fs::write(&dir, [0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
        let result = read_program(&dir).unwrap();
        assert_eq!(result, vec![0xDE, 0xAD, 0xBE, 0xEF]);
        std::fs::remove_file(&dir).unwrap();
    }
}
