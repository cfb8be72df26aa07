use serde::Deserialize;
use std::{env, fs};

fn default_locale() -> String {
    "en".to_string()
}

#[derive(Deserialize, Debug, Clone)]
pub struct MonitorConfig {
    /// Base URL of the monitoring server, e.g. "https://panel.example.com".
    pub server_address: String,
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl MonitorConfig {
    /// Loads configuration from a TOML file, falling back to the environment
    /// when the file is absent. `SSL_MONITOR_SERVER` and `SSL_MONITOR_LOCALE`
    /// always take precedence over file values.
    pub fn load(config_path_str: &str) -> Result<Self, String> {
        let mut config = match fs::read_to_string(config_path_str) {
            Ok(raw) => toml::from_str::<MonitorConfig>(&raw)
                .map_err(|e| format!("Failed to parse config file '{config_path_str}': {e}"))?,
            Err(_) => Self::from_env()?,
        };

        if let Ok(server_address) = env::var("SSL_MONITOR_SERVER") {
            config.server_address = server_address;
        }
        if let Ok(locale) = env::var("SSL_MONITOR_LOCALE") {
            config.locale = locale;
        }

        Ok(config)
    }

    pub fn from_env() -> Result<Self, String> {
        let server_address = env::var("SSL_MONITOR_SERVER").map_err(|_| {
            "SSL_MONITOR_SERVER must be set when no config file is present".to_string()
        })?;

        let locale = env::var("SSL_MONITOR_LOCALE").unwrap_or_else(|_| default_locale());

        Ok(MonitorConfig {
            server_address,
            locale,
        })
    }
}
