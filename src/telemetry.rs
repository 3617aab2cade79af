//! Opt-in tracing setup for applications embedding `stockchart`.
//!
//! The crate only emits `tracing` events. Hosts that already install a
//! subscriber need nothing from here.

/// Default filter directive applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "stockchart=info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
