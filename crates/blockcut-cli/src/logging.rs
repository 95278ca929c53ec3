use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
///
/// Logs go to stderr so that stdout carries only status lines. `--verbose`
/// forces DEBUG; otherwise `RUST_LOG` applies, defaulting to `warn`.
pub fn init(verbose: bool) {
    let filter_layer = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .compact();

    // A subscriber may already be set when running under the test harness.
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();

    if verbose {
        tracing::debug!("verbose mode enabled");
    }
}
