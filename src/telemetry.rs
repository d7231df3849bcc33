//! Tracing subscriber setup for binaries and test harnesses embedding
//! this crate.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// Filtering honors `RUST_LOG` and falls back to `values_md=info`.
/// Returns an error if a subscriber is already installed, so embedders
/// that manage their own can just skip this call.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "values_md=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
