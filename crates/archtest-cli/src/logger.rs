//! Logging setup for the archtest CLI.
//!
//! Log lines go to stderr so stdout only carries traces and listings.
//!
//! ```rust,no_run
//! use archtest_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("checking rules");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str =
    "archtest=debug,archtest_graph=debug,archtest_go=debug,archtest_config=debug,archtest_cli=debug";

/// Filter used with `--quiet`.
pub const QUIET_FILTER: &str = "error";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str =
    "archtest=info,archtest_graph=warn,archtest_go=warn,archtest_config=info,archtest_cli=info";

/// Initialize the tracing subscriber.
///
/// The level is chosen in this order:
/// 1. `--verbose`: debug for archtest crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. [`DEFAULT_FILTER`]
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize the tracing subscriber with an explicit filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
