use super::types::ConnectionFields;
use std::{
    error::Error,
    io::{Cursor, Read},
    path::{Path, PathBuf},
};

/// Tokens needed to reach the `st` column; anything shorter is skipped.
const LEADING_FIELDS: usize = 4;

/// Iterates the rows of a `/proc/net/tcp` style table.
///
/// Records end at `\n` only. The csv crate only splits on a single delimiter byte, so each
/// record is re-tokenised on runs of ASCII whitespace, which also drops a trailing `\r`. Rows
/// that are too short to carry a state column, or whose state column isn't text, are skipped
/// without error; only I/O failures are reported.
pub struct TcpTableReader<R> {
    record_iter: csv::ByteRecordsIntoIter<R>,
    skipped: usize,
}

impl TcpTableReader<Cursor<Vec<u8>>> {
    /// Reads the whole table into memory before any parsing happens.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = std::fs::read(path).map_err(|source| LoadError {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_reader(Cursor::new(contents)))
    }
}

impl<R: Read> TcpTableReader<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            record_iter: csv::ReaderBuilder::new()
                .delimiter(b' ')
                .has_headers(false)
                .flexible(true)
                .quoting(false)
                .terminator(csv::Terminator::Any(b'\n'))
                .from_reader(reader)
                .into_byte_records(),
            skipped: 0,
        }
    }

    /// Number of rows dropped so far for being malformed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

fn tokenize(record: &csv::ByteRecord) -> csv::ByteRecord {
    record
        .iter()
        .flat_map(|field| field.split(u8::is_ascii_whitespace))
        .filter(|token| !token.is_empty())
        .collect()
}

impl<R: Read> Iterator for TcpTableReader<R> {
    type Item = Result<ConnectionFields, csv::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.record_iter.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(e)),
            };

            let mut tokens = tokenize(&record);
            if tokens.len() < LEADING_FIELDS {
                self.skipped += 1;
                continue;
            }
            tokens.truncate(LEADING_FIELDS);

            match tokens.deserialize::<ConnectionFields>(None) {
                Ok(fields) => return Some(Ok(fields)),
                Err(_) => self.skipped += 1,
            }
        }
    }
}

/// The connection table couldn't be read at all.
#[derive(Debug)]
pub struct LoadError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to read {}: {}", self.path.display(), self.source)
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
