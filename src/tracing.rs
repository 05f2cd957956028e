//! Log output for the `textmark` binary
//!
//! The library only emits `tracing` events; this module is where the binary
//! decides where they go. Highlight results are printed to stdout, so the
//! console layer writes to stderr and stays quiet (`warn`) unless `RUST_LOG`
//! asks for more, e.g. `RUST_LOG=textmark::highlight=trace` to see each
//! detector match or `RUST_LOG=textmark::session=debug` for skipped rescans.
//!
//! A second layer records everything at debug level in the logs directory
//! from [`crate::config_paths::logs_dir`], rotated daily.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths;

/// Install the console and file layers as the global subscriber
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // Without a writable logs directory the binary still runs, console only
    let file_layer = match config_paths::ensure_logs_dir() {
        Ok(dir) => Some(
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(
                    dir,
                    config_paths::LOG_FILE_PREFIX,
                ))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug")),
        ),
        Err(e) => {
            eprintln!("textmark: file logging disabled: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
