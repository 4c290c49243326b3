pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    echo::{NoEcho, StdoutEcho, WriterEcho},
    source::ReaderLineSource,
};
pub use core::{calibrator::extract_first_last, engine::CalibrationEngine};
pub use domain::model::{CalibrationReport, CalibrationSet, DigitOccurrence, LineResult};
pub use utils::error::{CalibrationError, Result};
