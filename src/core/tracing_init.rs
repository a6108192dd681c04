use crate::core::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Console,
    Json,
}

fn log_format(config: &LoggingConfig) -> LogFormat {
    if config.console || config.format == "console" {
        LogFormat::Console
    } else {
        LogFormat::Json
    }
}

/// Install the global subscriber; `RUST_LOG` overrides the configured level
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format(config) {
        LogFormat::Console => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_line_number(true),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(format: &str, console: bool) -> LoggingConfig {
        LoggingConfig {
            level: "info".to_string(),
            format: format.to_string(),
            console,
        }
    }

    #[test]
    fn test_console_flag_overrides_format() {
        assert_eq!(log_format(&logging("json", true)), LogFormat::Console);
        assert_eq!(log_format(&logging("console", false)), LogFormat::Console);
        assert_eq!(log_format(&logging("json", false)), LogFormat::Json);
    }
}
