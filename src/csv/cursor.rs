//! Byte cursor abstraction feeding the field-count parser

/// Sequential single-pass supplier of bytes with one byte of lookahead
pub trait ByteCursor {
    /// Return the next byte without consuming it, or `None` at end of input
    fn peek(&mut self) -> Option<u8>;

    /// Consume and return the next byte, or `None` at end of input
    fn next_byte(&mut self) -> Option<u8>;

    /// Check if the input is exhausted
    fn is_eof(&mut self) -> bool {
        self.peek().is_none()
    }
}

impl<C: ByteCursor + ?Sized> ByteCursor for &mut C {
    #[inline]
    fn peek(&mut self) -> Option<u8> {
        (**self).peek()
    }

    #[inline]
    fn next_byte(&mut self) -> Option<u8> {
        (**self).next_byte()
    }
}

/// Cursor over an in-memory byte buffer
///
/// Consuming a byte shrinks the borrowed slice; nothing is copied.
///
/// # Examples
///
/// ```
/// use fieldcount::{ByteCursor, Bytes};
///
/// let mut cursor = Bytes::new(b"ab");
/// assert_eq!(cursor.peek(), Some(b'a'));
/// assert_eq!(cursor.next_byte(), Some(b'a'));
/// assert_eq!(cursor.remaining(), b"b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bytes<'a> {
    data: &'a [u8],
}

impl<'a> Bytes<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Bytes { data }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> &'a [u8] {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop a possibly incomplete last line
    ///
    /// Callers usually read at most `read_limit` bytes of a file before
    /// sniffing it. When the buffer is at least that long it was likely cut
    /// mid-line, so everything from the last `\n` onwards is discarded.
    /// A zero limit disables the check.
    pub fn drop_last_line(&mut self, read_limit: usize) {
        if read_limit == 0 || self.data.len() < read_limit {
            return;
        }
        // Index 0 is excluded: a buffer holding one line plus a cut-off tail
        // still keeps its first line.
        if let Some(i) = self.data.iter().skip(1).rposition(|&b| b == b'\n') {
            self.data = &self.data[..i + 1];
        }
    }
}

impl<'a> From<&'a [u8]> for Bytes<'a> {
    fn from(data: &'a [u8]) -> Self {
        Bytes::new(data)
    }
}

impl<'a> From<&'a str> for Bytes<'a> {
    fn from(data: &'a str) -> Self {
        Bytes::new(data.as_bytes())
    }
}

impl ByteCursor for Bytes<'_> {
    #[inline]
    fn peek(&mut self) -> Option<u8> {
        self.data.first().copied()
    }

    #[inline]
    fn next_byte(&mut self) -> Option<u8> {
        let (&first, rest) = self.data.split_first()?;
        self.data = rest;
        Some(first)
    }

    #[inline]
    fn is_eof(&mut self) -> bool {
        self.data.is_empty()
    }
}
