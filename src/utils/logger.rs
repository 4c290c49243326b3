use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Target of the final `Sum:` event. It stays at `info` whatever `RUST_LOG` says.
pub const SUMMARY_TARGET: &str = "calibration_sum::summary";

/// Builds the filter: `RUST_LOG` if set and valid, otherwise the crate at
/// `info` (`debug` when verbose), with the summary target always enabled.
pub fn cli_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "calibration_sum=debug,info"
    } else {
        "calibration_sum=info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    match format!("{}=info", SUMMARY_TARGET).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Logs go to stderr; stdout is reserved for the echoed input lines.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(cli_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
