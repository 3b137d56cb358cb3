//! Tracing subscriber setup for binaries and tools embedding the client.

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "vlxgate=info";

/// Set to `true` to emit one JSON object per event.
pub const LOG_JSON_ENV: &str = "VLXGATE_LOG_JSON";

/// Install the global tracing subscriber
///
/// Filtering follows `RUST_LOG` and falls back to [`DEFAULT_FILTER`].
///
/// # Errors
/// Returns `TryInitError` when a global subscriber is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    if json_output() {
        registry.with(fmt::layer().json().with_current_span(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    }
}

fn json_output() -> bool {
    std::env::var(LOG_JSON_ENV).map(|value| is_enabled(&value)).unwrap_or(false)
}

/// Accepts `1`, `true`, `yes` and `on` (case-insensitive).
fn is_enabled(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
