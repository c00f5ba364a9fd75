//! Type definitions for delimiter configuration and sniffing results

use crate::error::{Result, SniffError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Single-byte delimiter configuration of a separated-values format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dialect {
    /// Byte separating fields within a record
    pub field_separator: u8,
    /// Byte marking a comment line when it starts a record
    pub comment_marker: u8,
}

impl Dialect {
    /// Comma separated values with `#` comments
    pub const CSV: Dialect = Dialect {
        field_separator: b',',
        comment_marker: b'#',
    };

    /// Tab separated values with `#` comments
    pub const TSV: Dialect = Dialect {
        field_separator: b'\t',
        comment_marker: b'#',
    };

    /// Create a validated dialect
    ///
    /// Both bytes must be ASCII, must not be a quote or line terminator byte,
    /// and must differ from each other.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcount::Dialect;
    ///
    /// let dialect = Dialect::new(b';', b'%').unwrap();
    /// assert_eq!(dialect.field_separator, b';');
    ///
    /// assert!(Dialect::new(b'"', b'#').is_err());
    /// ```
    pub fn new(field_separator: u8, comment_marker: u8) -> Result<Self> {
        if !field_separator.is_ascii() {
            return Err(SniffError::NonAsciiSeparator(field_separator));
        }
        if !comment_marker.is_ascii() {
            return Err(SniffError::NonAsciiComment(comment_marker));
        }
        for byte in [field_separator, comment_marker] {
            if is_reserved(byte) {
                return Err(SniffError::ReservedByte(byte));
            }
        }
        if field_separator == comment_marker {
            return Err(SniffError::Collision(field_separator));
        }

        Ok(Dialect {
            field_separator,
            comment_marker,
        })
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::CSV
    }
}

fn is_reserved(byte: u8) -> bool {
    matches!(byte, b'"' | b'\n' | b'\r')
}

/// Column layout observed by a successful sniff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableShape {
    /// Field count shared by every examined record
    pub fields: usize,
    /// Number of records examined, header included
    pub records: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for preset in [Dialect::CSV, Dialect::TSV] {
            let checked = Dialect::new(preset.field_separator, preset.comment_marker).unwrap();
            assert_eq!(checked, preset);
        }
        assert_eq!(Dialect::default(), Dialect::CSV);
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert!(matches!(
            Dialect::new(0x80, b'#'),
            Err(SniffError::NonAsciiSeparator(0x80))
        ));
        assert!(matches!(
            Dialect::new(b',', 0xfe),
            Err(SniffError::NonAsciiComment(0xfe))
        ));
    }

    #[test]
    fn test_rejects_reserved() {
        assert!(matches!(
            Dialect::new(b'\n', b'#'),
            Err(SniffError::ReservedByte(b'\n'))
        ));
        assert!(matches!(
            Dialect::new(b',', b'\r'),
            Err(SniffError::ReservedByte(b'\r'))
        ));
        assert!(matches!(
            Dialect::new(b',', b'"'),
            Err(SniffError::ReservedByte(b'"'))
        ));
    }

    #[test]
    fn test_rejects_collision() {
        assert!(matches!(
            Dialect::new(b'#', b'#'),
            Err(SniffError::Collision(b'#'))
        ));
    }
}
