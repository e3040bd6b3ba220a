use std::sync::Once;

use env_logger::{Env, WriteStyle};

/// Filter used when `RUST_LOG` is unset: desktop crates at info, GPU stack quiet.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration. Filters use `env_logger` syntax, for example
/// `"deskfolio_core=debug,wgpu_core=warn"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Takes precedence over `RUST_LOG`.
    pub filter: Option<String>,
    pub fallback: String,
    pub style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: None, fallback: DEFAULT_FILTER.to_owned(), style: WriteStyle::Auto }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has an effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let env = Env::default().default_filter_or(config.fallback.as_str());
        let mut builder = env_logger::Builder::from_env(env);
        if let Some(filter) = &config.filter {
            builder.parse_filters(filter);
        }
        builder.write_style(config.style).format_timestamp_millis().init();
        log::debug!("logger installed");
    });
}
