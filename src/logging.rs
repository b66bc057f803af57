//! Diagnostic logging.
//!
//! Internal diagnostics go through the [`log`] facade with `env_logger` as the
//! backend. They are separate from the pipeline's status and debug channels, which
//! are user-facing output handled by [`crate::report::Reporter`].
//!
//! ```no_run
//! datascrub::logging::init();
//! log::warn!("stage skipped");
//! ```
//!
//! Set `RUST_LOG=debug` to see per-stage row counts.

use env_logger::Env;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the logger. Later calls are no-ops.
pub fn init() {
    if let Err(e) = try_init() {
        log::debug!("Logger already initialized: {e}");
    }
}

/// # Errors
///
/// Returns an error if a global logger has already been set.
pub fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_secs()
        .try_init()
}
