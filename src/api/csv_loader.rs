use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use tracing::debug;

use crate::core::{CellValue, Row};
use crate::error::{ChartError, ChartResult};

use super::Chart;

impl Chart {
    /// Appends every record of a comma-separated file as a row, inferring
    /// each cell's type with [`CellValue::coerce`].
    ///
    /// When `include_first_record_as_data` is false the first record is
    /// treated as a header line and dropped without coercion or quoting
    /// checks. On a parse error ingestion stops at the offending record;
    /// rows appended before it are kept.
    ///
    /// Returns the number of rows appended.
    pub fn load_csv(
        &mut self,
        path: impl AsRef<Path>,
        include_first_record_as_data: bool,
    ) -> ChartResult<usize> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let appended = self.load_csv_reader(file, include_first_record_as_data)?;
        debug!(path = %path.display(), rows = appended, "loaded csv file");
        Ok(appended)
    }

    /// Same as [`Chart::load_csv`] for an already opened source.
    ///
    /// The source is consumed and dropped on every exit path. Fields that
    /// are not valid UTF-8 are decoded lossily and end up as text cells.
    pub fn load_csv_reader<R: Read>(
        &mut self,
        source: R,
        include_first_record_as_data: bool,
    ) -> ChartResult<usize> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .from_reader(RawTap::new(source));
        let mut record = ByteRecord::new();
        let mut skip_header = !include_first_record_as_data;
        let mut appended = 0;

        while reader.read_byte_record(&mut record).map_err(csv_error)? {
            let start = record.position().map_or(0, csv::Position::byte);
            let end = reader.position().byte();
            let quoting = check_record_quoting(reader.get_mut().take(start, end));

            if skip_header {
                skip_header = false;
                continue;
            }
            if let Err(message) = quoting {
                return Err(ChartError::Parse {
                    line: record.position().map_or(0, csv::Position::line),
                    message: message.to_owned(),
                });
            }

            self.add_row(
                record
                    .iter()
                    .map(|field| CellValue::coerce(&String::from_utf8_lossy(field)))
                    .collect::<Row>(),
            );
            appended += 1;
        }

        debug!(rows = appended, "ingested csv records");
        Ok(appended)
    }
}

/// Pass-through reader keeping the raw bytes the parser has not yet
/// reported as a complete record, so each record's quoting can be checked
/// against its source text.
struct RawTap<R> {
    inner: R,
    pending: Vec<u8>,
    /// Absolute stream offset of `pending[0]`.
    base: u64,
}

impl<R> RawTap<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            pending: Vec::new(),
            base: 0,
        }
    }

    /// Returns the raw bytes in `start..end`, dropping everything before `start`.
    ///
    /// Offsets must not go backwards between calls.
    fn take(&mut self, start: u64, end: u64) -> &[u8] {
        let skip = self.relative(start);
        self.pending.drain(..skip);
        self.base += skip as u64;
        let len = self.relative(end);
        &self.pending[..len]
    }

    fn relative(&self, pos: u64) -> usize {
        usize::try_from(pos.saturating_sub(self.base))
            .map_or(self.pending.len(), |offset| offset.min(self.pending.len()))
    }
}

impl<R: Read> Read for RawTap<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.pending.extend_from_slice(&buf[..n]);
        Ok(n)
    }
}

/// Checks quoting of one raw record the way strict RFC 4180 readers do.
///
/// Leading blank lines are ignored and the first unquoted line terminator
/// ends the record.
fn check_record_quoting(raw: &[u8]) -> Result<(), &'static str> {
    let mut i = raw
        .iter()
        .position(|byte| !matches!(byte, b'\r' | b'\n'))
        .unwrap_or(raw.len());
    if i == raw.len() {
        return Ok(());
    }

    loop {
        if raw.get(i) == Some(&b'"') {
            i += 1;
            loop {
                match raw.get(i) {
                    None => return Err("unterminated quoted field"),
                    Some(b'"') if raw.get(i + 1) == Some(&b'"') => i += 2,
                    Some(b'"') => {
                        i += 1;
                        break;
                    }
                    Some(_) => i += 1,
                }
            }
            match raw.get(i) {
                None | Some(b'\r' | b'\n') => return Ok(()),
                Some(b',') => {
                    i += 1;
                    continue;
                }
                Some(_) => return Err("extraneous quote after quoted field"),
            }
        }

        loop {
            match raw.get(i) {
                None | Some(b'\r' | b'\n') => return Ok(()),
                Some(b',') => {
                    i += 1;
                    break;
                }
                Some(b'"') => return Err("bare quote in unquoted field"),
                Some(_) => i += 1,
            }
        }
    }
}

fn csv_error(err: csv::Error) -> ChartError {
    let line = err.position().map_or(0, csv::Position::line);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => ChartError::Io(io_err),
        _ => ChartError::Parse { line, message },
    }
}
