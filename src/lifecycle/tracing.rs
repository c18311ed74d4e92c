//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `fmt` subscriber. The filter comes from `RUST_LOG`
//! when it is set, otherwise from the configured default (`PETCARE_LOG`, `info` if unset).
//!
//! ## What Gets Traced
//!
//! - **Slice Lifecycle**: `Slice started` and `Shutdown` with the number of reduced events
//! - **Dispatch**: every event at `debug`, failed side effects at `warn`
//! - **Actions**: rejected actions at `warn` with the user-facing text
//! - **Session**: restore, login and logout at `info`
//!
//! ```bash
//! # Default
//! cargo run
//!
//! # Every dispatched event with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the framework
//! RUST_LOG=slice_framework=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, before the actors start.
pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
