use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
    util::TryInitError,
};

use crate::config::{LoggingConfig, LoggingFormat};

fn new_fmt_layer<S>(format: LoggingFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    match format {
        LoggingFormat::Full => fmt::layer().boxed(),
        LoggingFormat::Compact => fmt::layer().compact().boxed(),
        LoggingFormat::Pretty => fmt::layer().pretty().boxed(),
        LoggingFormat::Json => fmt::layer().json().boxed(),
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the configured filter.
pub fn init_tracing(logging_config: &LoggingConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(logging_config.filter.as_str())),
        )
        .with(new_fmt_layer(logging_config.format))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn second_init_is_rejected() {
        let config = LoggingConfig {
            filter: "debug".into(),
            format: LoggingFormat::Compact,
        };
        let _ = init_tracing(&config);
        tracing::info!("logging initialised");

        assert!(init_tracing(&config).is_err());
    }
}
