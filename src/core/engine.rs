use crate::core::calibrator::extract_first_last;
use crate::core::{CalibrationReport, CalibrationSet, LineObserver, LineResult, LineSource};
use crate::utils::error::{CalibrationError, Result};

/// Drives one pass over a line source and accumulates the calibration set.
///
/// Lines without any digit are skipped with a warning: they are recorded as
/// [`LineResult::Empty`] (value 0) and listed in
/// [`CalibrationReport::skipped_lines`].
///
/// A failing observer (for example a closed stdout pipe) only stops the echo;
/// the run itself carries on.
pub struct CalibrationEngine<S: LineSource, O: LineObserver> {
    source: S,
    observer: O,
}

impl<S: LineSource, O: LineObserver> CalibrationEngine<S, O> {
    pub fn new(source: S, observer: O) -> Self {
        Self { source, observer }
    }

    pub fn run(mut self) -> Result<CalibrationReport> {
        tracing::info!("Starting calibration");

        let mut set = CalibrationSet::new();
        let mut skipped_lines = Vec::new();
        let mut lines_read = 0;
        let mut echo = true;

        while let Some(line) = self.source.read_line()? {
            lines_read += 1;
            if echo {
                if let Err(e) = self.observer.observe(lines_read, &line) {
                    tracing::warn!("Echo stopped at line {}: {}", lines_read, e);
                    echo = false;
                }
            }

            let result = match extract_first_last(&line) {
                Ok(result) => result,
                Err(CalibrationError::MissingDigit { line }) => {
                    tracing::warn!("Line {} has no digit, counting it as 0: {:?}", lines_read, line);
                    skipped_lines.push(lines_read);
                    LineResult::Empty
                }
                Err(e) => return Err(e),
            };

            tracing::debug!("Line {} value: {}", lines_read, result.value());
            set.append(result);
        }

        tracing::info!(
            "Processed {} lines ({} without digits)",
            lines_read,
            skipped_lines.len()
        );

        Ok(CalibrationReport {
            set,
            lines_read,
            skipped_lines,
        })
    }
}
