//! Tabular text detection based on consistent field counts

use crate::csv::{Bytes, Parser};
use crate::error::Result;
use crate::types::{Dialect, TableShape};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Number of leading bytes inspected by default
pub const DEFAULT_READ_LIMIT: usize = 3072;

/// Decides whether a byte prefix looks like separated-values text
///
/// The first record is taken as the header. The input is accepted when the
/// header has at least `min_fields` fields and every following record, up to
/// `max_records` in total, has the same field count.
///
/// # Examples
///
/// ```
/// use fieldcount::Sniffer;
///
/// let sniffer = Sniffer::csv();
/// assert!(sniffer.sniff(b"name,age\nalice,30\nbob,25\n"));
/// assert!(!sniffer.sniff(b"name,age\nalice\n"));
///
/// let tsv = Sniffer::tsv().max_records(2);
/// assert!(tsv.sniff(b"a\tb\n1\t2\n"));
/// ```
#[derive(Debug, Clone)]
pub struct Sniffer {
    dialect: Dialect,
    read_limit: usize,
    max_records: usize,
    min_fields: usize,
}

impl Sniffer {
    pub fn new(dialect: Dialect) -> Self {
        Sniffer {
            dialect,
            read_limit: DEFAULT_READ_LIMIT,
            max_records: 10,
            min_fields: 2,
        }
    }

    /// Sniffer for comma separated values
    pub fn csv() -> Self {
        Self::new(Dialect::CSV)
    }

    /// Sniffer for tab separated values
    pub fn tsv() -> Self {
        Self::new(Dialect::TSV)
    }

    /// Set how many bytes are inspected (builder pattern)
    ///
    /// Input at least this long is assumed to be truncated and loses its last
    /// line before scanning. `0` means the whole input is used as is.
    pub fn read_limit(mut self, limit: usize) -> Self {
        self.read_limit = limit;
        self
    }

    /// Set how many consistent records, header included, are enough to accept (builder pattern)
    ///
    /// Acceptance always needs a header and one data record, so values below
    /// 2 are raised to 2.
    pub fn max_records(mut self, records: usize) -> Self {
        self.max_records = records.max(2);
        self
    }

    /// Set the minimum field count of the header (builder pattern)
    pub fn min_fields(mut self, fields: usize) -> Self {
        self.min_fields = fields;
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Measure the table layout of `data`, or `None` if it does not look tabular
    pub fn shape(&self, data: &[u8]) -> Option<TableShape> {
        let mut cursor = Bytes::new(data);
        cursor.drop_last_line(self.read_limit);
        let mut parser = Parser::with_dialect(self.dialect, cursor);

        let (header_fields, has_more) = parser.produce_next_record();
        if !has_more {
            debug!("no header record");
            return None;
        }
        if header_fields < self.min_fields {
            debug!(header_fields, min_fields = self.min_fields, "header too narrow");
            return None;
        }

        let mut records = 1;
        while records < self.max_records {
            let (fields, has_more) = parser.produce_next_record();
            if !has_more {
                break;
            }
            records += 1;
            if fields != header_fields {
                debug!(record = records, fields, header_fields, "ragged record");
                return None;
            }
        }

        if records < 2 {
            debug!("header without data records");
            return None;
        }

        debug!(fields = header_fields, records, "input looks tabular");
        Some(TableShape {
            fields: header_fields,
            records,
        })
    }

    pub fn sniff(&self, data: &[u8]) -> bool {
        self.shape(data).is_some()
    }

    /// Sniff the beginning of a file
    ///
    /// Reads at most `read_limit` bytes, or the whole file when the limit is 0.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fieldcount::Sniffer;
    ///
    /// let is_csv = Sniffer::csv().sniff_path("data.csv").unwrap();
    /// println!("csv: {}", is_csv);
    /// ```
    pub fn sniff_path<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        let mut file = File::open(path.as_ref())?;
        let mut data = Vec::with_capacity(self.read_limit);
        if self.read_limit == 0 {
            file.read_to_end(&mut data)?;
        } else {
            file.take(self.read_limit as u64).read_to_end(&mut data)?;
        }

        debug!(path = %path.as_ref().display(), bytes = data.len(), "sniffing file");
        Ok(self.sniff(&data))
    }
}

impl Default for Sniffer {
    fn default() -> Self {
        Self::csv()
    }
}

/// Check if `data` looks like comma separated values
pub fn is_csv(data: &[u8]) -> bool {
    Sniffer::csv().sniff(data)
}

/// Check if `data` looks like tab separated values
pub fn is_tsv(data: &[u8]) -> bool {
    Sniffer::tsv().sniff(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistent_csv() {
        let shape = Sniffer::csv().shape(b"a,b,c\n1,2,3\n4,5,6\n");
        assert_eq!(
            shape,
            Some(TableShape {
                fields: 3,
                records: 3
            })
        );
    }

    #[test]
    fn test_rejects_empty_and_single_record() {
        assert!(!is_csv(b""));
        assert!(!is_csv(b"a,b,c\n"));
        assert!(!is_csv(b"# only a comment\n"));
    }

    #[test]
    fn test_rejects_single_column() {
        assert!(!is_csv(b"a\nb\nc\n"));
        assert!(Sniffer::csv().min_fields(1).sniff(b"a\nb\nc\n"));
    }

    #[test]
    fn test_rejects_ragged() {
        assert!(!is_csv(b"a,b,c\n1,2\n"));
        assert!(!is_csv(b"foo,bar,baz\n1,2"));
    }

    #[test]
    fn test_stops_after_max_records() {
        let mut data = String::from("a,b\n");
        for i in 0..9 {
            data.push_str(&format!("{},{}\n", i, i));
        }
        data.push_str("ragged\n");

        let shape = Sniffer::csv().read_limit(0).shape(data.as_bytes()).unwrap();
        assert_eq!(shape.records, 10);
        assert!(!Sniffer::csv().read_limit(0).max_records(11).sniff(data.as_bytes()));
    }

    #[test]
    fn test_max_records_below_two() {
        let data = b"a,b\n1,2\n3\n";
        for max in [0, 1, 2] {
            assert_eq!(
                Sniffer::csv().max_records(max).shape(data),
                Some(TableShape {
                    fields: 2,
                    records: 2
                })
            );
        }
        assert!(!Sniffer::csv().max_records(3).sniff(data));
    }

    #[test]
    fn test_comments_and_quotes() {
        let data = b"# exported\nid,\"note\"\n1,\"multi\nline\"\n2,\"a,b\"\n";
        assert_eq!(
            Sniffer::csv().shape(data),
            Some(TableShape {
                fields: 2,
                records: 3
            })
        );
    }

    #[test]
    fn test_truncated_last_line_is_dropped() {
        let data = b"a,b,c\n1,2,3\n4,5";
        assert!(!Sniffer::csv().read_limit(0).sniff(data));
        assert!(Sniffer::csv().read_limit(data.len()).sniff(data));
    }

    #[test]
    fn test_tsv() {
        assert!(is_tsv(b"a\tb\n1\t2\n"));
        assert!(!is_tsv(b"a,b\n1,2\n"));
        assert!(!is_csv(b"a\tb\n1\t2\n"));
        assert_eq!(Sniffer::tsv().dialect(), Dialect::TSV);
    }
}
