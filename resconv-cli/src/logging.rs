//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so they never mix with prompts or `inspect` JSON on
//! stdout. `RUST_LOG` takes precedence over the `-v`/`-q` flags.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps the CLI verbosity flags to a level.
///
/// Default is `warn`; each `-v` raises it one step up to `trace`, `-q`
/// lowers it to `error`.
pub fn level_from_verbosity(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = level_from_verbosity(verbose, quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
