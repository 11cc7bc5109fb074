//! Logging setup.
//!
//! The CLI driver calls [`init_logging`] once, at the top of `main`, before
//! any other work. The subscriber's level is controlled by the `GNCUT_LOG`
//! environment variable (`RUST_LOG`-style filter syntax), defaulting to
//! `info` when unset.

use tracing_subscriber::EnvFilter;

/// Installs a global `tracing` subscriber. Safe to call at most once per
/// process; subsequent calls are no-ops (the underlying `set_global_default`
/// failure is swallowed since it only happens under `#[test]` when multiple
/// tests initialize logging in the same process).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("GNCUT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
