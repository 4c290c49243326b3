use crate::core::LineSource;
use crate::utils::error::{CalibrationError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Newline-delimited raw lines from any buffered reader. `\n` and `\r\n`
/// terminators are stripped; the bytes are not required to be UTF-8.
pub struct ReaderLineSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderLineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderLineSource<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CalibrationError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Opened input file: {}", path.display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource for ReaderLineSource<R> {
    fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
