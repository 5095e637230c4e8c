use serde::{Deserialize, Serialize};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_FORMAT: &str = "compact";

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Runtime configuration resolved from CLI flags / environment variables,
/// falling back to the defaults above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server port.
    pub port: u16,
    /// Bind address (127.0.0.1 unless LAN access is wanted).
    pub bind_address: String,
    /// Log level filter (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log output format: "compact" or "json".
    pub log_format: String,
}

impl ServiceConfig {
    pub fn new(
        port: Option<u16>,
        bind_address: Option<String>,
        log_level: Option<String>,
        log_format: Option<String>,
    ) -> Self {
        Self {
            port: port.unwrap_or(DEFAULT_PORT),
            bind_address: bind_address.unwrap_or_else(default_bind_address),
            log_level: log_level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format: log_format.unwrap_or_else(|| DEFAULT_LOG_FORMAT.to_string()),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(None, None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "compact");
    }

    #[test]
    fn overrides_win_over_defaults() {
        let config = ServiceConfig::new(
            Some(8080),
            Some("0.0.0.0".to_string()),
            Some("debug".to_string()),
            Some("json".to_string()),
        );
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, "json");
    }
}
