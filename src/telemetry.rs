//! Telemetry helpers for applications embedding `gchart-rs`.
//!
//! The library only emits `tracing` events (ingestion summaries, validation
//! failures, generation sizes). Hosts either call one of the helpers below or
//! install their own subscriber.

/// Initializes a compact subscriber filtered by `RUST_LOG`, falling back to `info`.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter("info")
}

/// Initializes a compact subscriber filtered by `RUST_LOG`, falling back to
/// `fallback_filter` when the variable is unset or unparsable.
///
/// Returns `false` when the `telemetry` feature is disabled or if a global
/// subscriber was already set by the host application.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
