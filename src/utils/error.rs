use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("failed to open file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Line contains no digit: {line:?}")]
    MissingDigit { line: String },

    #[error("Invalid value for '{field}': {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalibrationError {
    /// Process exit code for a run that ends with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CalibrationError::FileOpen { .. } | CalibrationError::IoError(_) => 1,
            CalibrationError::InvalidConfigValueError { .. } => 2,
            // the engine downgrades this to a warning
            CalibrationError::MissingDigit { .. } => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalibrationError::FileOpen { .. } => {
                "Check that the input path exists and is readable, or pass --file"
            }
            CalibrationError::IoError(_) => "Make sure the input is valid UTF-8 text",
            CalibrationError::MissingDigit { .. } => {
                "Every calibration line should contain at least one digit"
            }
            CalibrationError::InvalidConfigValueError { .. } => "Fix the command line arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalibrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let open = CalibrationError::FileOpen {
            path: PathBuf::from("missing"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(open.exit_code(), 1);
        assert!(open.to_string().contains("missing"));

        let config = CalibrationError::InvalidConfigValueError {
            field: "file".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(config.exit_code(), 2);
    }
}
