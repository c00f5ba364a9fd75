//! # fieldcount
//!
//! Allocation-free scanner that counts the fields of each CSV/TSV record,
//! plus a sniffer that uses those counts to decide whether a byte stream
//! looks like tabular text.
//!
//! ## Features
//!
//! - **No allocation**: records are scanned over a borrowed buffer, field
//!   contents are never materialized
//! - **Lenient quoting**: stray or unterminated quotes never cause an error
//! - **Comment lines**: records starting with the comment marker are skipped
//! - **Single-byte dialects**: any ASCII field separator and comment marker
//!
//! ## Quick Start
//!
//! ### Counting fields
//!
//! ```
//! use fieldcount::{Bytes, Parser};
//!
//! let mut parser = Parser::new(b',', b'#', Bytes::from("a,b,c\n1,\"x\ny\",3\n"));
//! while let (fields, true) = parser.produce_next_record() {
//!     assert_eq!(fields, 3);
//! }
//! ```
//!
//! ### Sniffing
//!
//! ```
//! use fieldcount::{is_csv, Sniffer};
//!
//! assert!(is_csv(b"id,name\n1,alice\n2,bob\n"));
//!
//! let shape = Sniffer::tsv().shape(b"id\tname\n1\talice\n").unwrap();
//! assert_eq!(shape.fields, 2);
//! ```

pub mod csv;
pub mod error;
pub mod sniffer;
pub mod types;

pub use self::csv::{ByteCursor, Bytes, Parser};
pub use error::{Result, SniffError};
pub use sniffer::{is_csv, is_tsv, Sniffer, DEFAULT_READ_LIMIT};
pub use types::{Dialect, TableShape};
