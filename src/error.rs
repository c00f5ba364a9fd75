//! Error types for fieldcount

use thiserror::Error;

/// Errors raised while configuring a dialect or reading input to sniff
///
/// Scanning itself never fails; malformed CSV is absorbed by the parser.
#[derive(Debug, Error)]
pub enum SniffError {
    #[error("Field separator {0:#04x} is not an ASCII byte")]
    NonAsciiSeparator(u8),

    #[error("Comment marker {0:#04x} is not an ASCII byte")]
    NonAsciiComment(u8),

    #[error("Byte {0:#04x} is reserved by the CSV format")]
    ReservedByte(u8),

    #[error("Field separator and comment marker are both {0:#04x}")]
    Collision(u8),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SniffError>;
