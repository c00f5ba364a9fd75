//! Field counting with lenient, RFC 4180-like quoting

use super::cursor::ByteCursor;
use crate::types::Dialect;
use tracing::trace;

const QUOTE: u8 = b'"';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before the first byte of a record; the only place comments are recognized
    RecordStart,
    FieldStart,
    Unquoted,
    Quoted,
    /// Just consumed a quote inside a quoted field
    QuoteInQuoted,
}

/// Parser reporting how many fields each record holds
///
/// Field contents are never materialized and nothing is allocated. Malformed
/// quoting is absorbed instead of rejected: a quote in the middle of an
/// unquoted field is plain content, bytes after a closing quote belong to the
/// same field, and an unterminated quoted field runs to the end of input.
///
/// # Examples
///
/// ```
/// use fieldcount::{Bytes, Parser};
///
/// let mut parser = Parser::new(b',', b'#', Bytes::from("# header\nfoo,bar,baz\n1,2"));
/// assert_eq!(parser.produce_next_record(), (3, true));
/// assert_eq!(parser.produce_next_record(), (2, true));
/// assert_eq!(parser.produce_next_record(), (0, false));
/// ```
#[derive(Debug, Clone)]
pub struct Parser<C> {
    field_separator: u8,
    comment_marker: u8,
    source: C,
}

impl<C: ByteCursor> Parser<C> {
    /// Create a parser without checking the delimiter configuration
    ///
    /// Both bytes are expected to be ASCII, distinct, and neither a quote nor
    /// a line terminator. Use [`Parser::with_dialect`] with a validated
    /// [`Dialect`] when the bytes come from an untrusted place.
    pub fn new(field_separator: u8, comment_marker: u8, source: C) -> Self {
        Self {
            field_separator,
            comment_marker,
            source,
        }
    }

    /// Create a parser from a validated [`Dialect`]
    pub fn with_dialect(dialect: Dialect, source: C) -> Self {
        Self::new(dialect.field_separator, dialect.comment_marker, source)
    }

    /// Scan the next record
    ///
    /// Returns the record's field count and `true`, or `(0, false)` once the
    /// input is exhausted. Comment lines are skipped without being reported.
    /// Calling again after exhaustion keeps returning `(0, false)`.
    pub fn produce_next_record(&mut self) -> (usize, bool) {
        let mut fields = 0;
        let mut state = State::RecordStart;

        loop {
            state = match state {
                State::RecordStart => match self.source.peek() {
                    None => return (0, false),
                    Some(b) if b == self.comment_marker => {
                        self.skip_line();
                        trace!("skipped comment line");
                        State::RecordStart
                    }
                    Some(_) => State::FieldStart,
                },
                State::FieldStart => {
                    fields += 1;
                    if self.source.peek() == Some(QUOTE) {
                        self.source.next_byte();
                        State::Quoted
                    } else {
                        State::Unquoted
                    }
                }
                State::Unquoted => match self.source.next_byte() {
                    // A `\r` before the newline is consumed as field content,
                    // which leaves the count unchanged.
                    None | Some(b'\n') => break,
                    Some(b) if b == self.field_separator => State::FieldStart,
                    Some(_) => State::Unquoted,
                },
                State::Quoted => match self.source.next_byte() {
                    None => break,
                    Some(QUOTE) => State::QuoteInQuoted,
                    Some(_) => State::Quoted,
                },
                State::QuoteInQuoted => {
                    if self.source.peek() == Some(QUOTE) {
                        // "" is an escaped quote
                        self.source.next_byte();
                        State::Quoted
                    } else {
                        State::Unquoted
                    }
                }
            };
        }

        trace!(fields, "counted record");
        (fields, true)
    }

    /// Consume bytes through the next newline, inclusive
    fn skip_line(&mut self) {
        while let Some(b) = self.source.next_byte() {
            if b == b'\n' {
                break;
            }
        }
    }

    /// Get the underlying cursor back
    pub fn into_inner(self) -> C {
        self.source
    }
}

impl<C: ByteCursor> Iterator for Parser<C> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self.produce_next_record() {
            (fields, true) => Some(fields),
            (_, false) => None,
        }
    }
}
