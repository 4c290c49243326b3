use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "calibration-sum")]
#[command(about = "Sums the first-and-last-digit calibration values of a text file")]
pub struct CliConfig {
    #[arg(long, default_value = "input", help = "filepath to input file")]
    pub file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["calibration-sum"]);
        assert_eq!(config.file, "input");
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_flag() {
        let config =
            CliConfig::parse_from(["calibration-sum", "--file", "data/day1.txt", "--verbose"]);
        assert_eq!(config.file, "data/day1.txt");
        assert!(config.verbose);
    }

    #[test]
    fn test_empty_file_is_invalid() {
        let config = CliConfig::parse_from(["calibration-sum", "--file", ""]);
        assert!(config.validate().is_err());
    }
}
