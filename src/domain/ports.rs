use crate::utils::error::Result;

/// Yields raw lines in input order, without line terminators.
/// Consumed once, front to back.
pub trait LineSource {
    fn read_line(&mut self) -> Result<Option<Vec<u8>>>;
}

/// Sees every line before it is calibrated.
pub trait LineObserver {
    fn observe(&mut self, line_number: usize, line: &[u8]) -> Result<()>;
}

impl<O: LineObserver + ?Sized> LineObserver for &mut O {
    fn observe(&mut self, line_number: usize, line: &[u8]) -> Result<()> {
        (**self).observe(line_number, line)
    }
}
