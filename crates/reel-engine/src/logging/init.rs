use std::sync::Once;

/// Where log output is filtered and how it is styled.
///
/// `env_filter` uses `env_logger` directives, e.g. `"warn"` or
/// `"reel_engine::anim=trace"`. Left unset, `RUST_LOG` decides.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Configuration with an explicit filter, overriding `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Directives to install, or `None` for the plain `info` level.
    fn directives(&self, from_env: Option<String>) -> Option<String> {
        self.env_filter.clone().or(from_env)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend.
///
/// Only the first call in a process has any effect. If the host already set a
/// logger, that one stays.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.directives(std::env::var("RUST_LOG").ok()) {
            Some(directives) => builder.parse_filters(&directives),
            None => builder.filter_level(log::LevelFilter::Info),
        };
        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("env_logger installed");
        }
    });
}
