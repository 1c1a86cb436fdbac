//! Tracing/logging initialization.

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable, single line per event.
    Compact,
}

/// Logging configuration.
///
/// `RUST_LOG` always wins over `default_filter` when set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub default_filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl LogConfig {
    /// Compact, `info`-level output for the browser console.
    pub fn browser() -> Self {
        Self {
            default_filter: "info".to_string(),
            format: LogFormat::Compact,
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
/// On wasm32 events go to the browser console, without timestamps.
pub fn init(config: &LogConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(false);

    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.with_timer(tracing_subscriber::fmt::time::SystemTime);

    #[cfg(target_arch = "wasm32")]
    let builder = builder
        .without_time()
        .with_ansi(false)
        .with_writer(crate::console::ConsoleWriter);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config: LogConfig = serde_json::from_str(r#"{ "format": "compact" }"#).unwrap();
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.default_filter, "info");
    }

    #[test]
    fn browser_config_is_compact_at_info() {
        let config = LogConfig::browser();
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.default_filter, "info");
        assert_ne!(config, LogConfig::default());
    }

    #[test]
    fn repeated_init_is_a_no_op() {
        init(&LogConfig::default());
        init(&LogConfig {
            default_filter: "debug".to_string(),
            format: LogFormat::Compact,
        });
        init(&LogConfig::browser());
    }
}
