//! Logging setup for the ops-sysd binary.

use tracing_subscriber::{reload, EnvFilter, Registry};

use ops_sysd_common::{SysdError, SysdResult};

/// Level used until the configuration file has been read
pub const BOOTSTRAP_LOG_LEVEL: &str = "info";

/// Handle to the installed subscriber's level filter
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogHandle {
    /// Switches to `log_level`. A filter taken from `RUST_LOG` is kept.
    pub fn set_level(&self, log_level: &str) -> SysdResult<()> {
        if self.from_env {
            return Ok(());
        }
        self.filter
            .reload(EnvFilter::new(log_level))
            .map_err(|e| SysdError::internal(format!("Failed to reload log filter: {}", e)))
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `log_level`. Log lines go to stderr; stdout carries
/// command output. The returned handle changes the level later, once the
/// configuration is known.
///
/// # Example
///
/// ```ignore
/// let logging = init_logging(BOOTSTRAP_LOG_LEVEL)?;
/// logging.set_level(&config.general.log_level)?;
/// ```
pub fn init_logging(log_level: &str) -> SysdResult<LogHandle> {
    use tracing_subscriber::{fmt, prelude::*};

    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(log_level), false),
    };
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| SysdError::internal(format!("Failed to set logger: {}", e)))?;

    Ok(LogHandle {
        filter: handle,
        from_env,
    })
}
