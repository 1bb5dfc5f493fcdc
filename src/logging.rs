use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{LuhnixError, Result};

/// Installs a global subscriber writing to stderr. `RUST_LOG` takes
/// precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| LuhnixError::Config(format!("Invalid log level '{}': {e}", config.level)))?,
    };

    let subscriber = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Json => subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    installed.map_err(|e| LuhnixError::Config(format!("Logging already initialized: {e}")))
}
