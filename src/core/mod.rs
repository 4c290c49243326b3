pub mod calibrator;
pub mod engine;

pub use crate::domain::model::{CalibrationReport, CalibrationSet, DigitOccurrence, LineResult};
pub use crate::domain::ports::{LineObserver, LineSource};
pub use crate::utils::error::Result;
