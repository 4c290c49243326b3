use calibration_sum::utils::logger::{self, SUMMARY_TARGET};
use calibration_sum::utils::validation::Validate;
use calibration_sum::{CalibrationEngine, CliConfig, ReaderLineSource, StdoutEcho};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let result = ReaderLineSource::open(&config.file)
        .and_then(|source| CalibrationEngine::new(source, StdoutEcho::stdout()).run());

    match result {
        Ok(report) => {
            tracing::info!(target: SUMMARY_TARGET, "Sum: {}", report.total());
        }
        Err(e) => {
            tracing::error!("{}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
