use crate::core::LineObserver;
use crate::utils::error::Result;
use std::io::{Stdout, Write};

/// Writes each input line, as read, followed by a newline.
#[derive(Debug)]
pub struct WriterEcho<W> {
    writer: W,
}

pub type StdoutEcho = WriterEcho<Stdout>;

impl<W: Write> WriterEcho<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterEcho<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> LineObserver for WriterEcho<W> {
    fn observe(&mut self, _line_number: usize, line: &[u8]) -> Result<()> {
        self.writer.write_all(line)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoEcho;

impl LineObserver for NoEcho {
    fn observe(&mut self, _line_number: usize, _line: &[u8]) -> Result<()> {
        Ok(())
    }
}
