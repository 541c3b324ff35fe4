use crate::domain::error::DomainError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// RUST_LOG wins over `default_level`; stdout is left to the JSON output
pub fn init_logging(default_level: &str) -> Result<(), DomainError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|e| DomainError::Config(format!("invalid LOG_LEVEL '{}': {}", default_level, e)))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| DomainError::Config(format!("logging already initialized: {}", e)))
}
