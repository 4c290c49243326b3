use crate::core::{DigitOccurrence, LineResult};
use crate::utils::error::{CalibrationError, Result};

/// Finds the first and last ASCII digits of `line`.
///
/// The line is scanned as raw bytes, so text that is not valid UTF-8 still
/// yields its ASCII digits. A line with exactly one digit yields
/// [`LineResult::Single`]; a line with none is a
/// [`CalibrationError::MissingDigit`].
pub fn extract_first_last(line: &[u8]) -> Result<LineResult> {
    let first = digit_at(line, line.iter().position(u8::is_ascii_digit));
    let last = digit_at(line, line.iter().rposition(u8::is_ascii_digit));

    match (first, last) {
        (Some(first), Some(last)) if first.index() == last.index() => Ok(LineResult::Single(first)),
        (Some(first), Some(last)) => Ok(LineResult::Pair { first, last }),
        _ => Err(CalibrationError::MissingDigit {
            line: String::from_utf8_lossy(line).into_owned(),
        }),
    }
}

fn digit_at(line: &[u8], index: Option<usize>) -> Option<DigitOccurrence> {
    let index = index?;
    DigitOccurrence::new(char::from(*line.get(index)?), index)
}
