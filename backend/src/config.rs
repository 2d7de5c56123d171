//! Server configuration, resolved once at startup from the environment.
//!
//! | Variable                    | Default     |
//! |-----------------------------|-------------|
//! | `REGISTRATION_HOST`         | `127.0.0.1` |
//! | `REGISTRATION_PORT`         | `8080`      |
//! | `REGISTRATION_OPEN_BROWSER` | `true`      |

use log::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
/// Upper bound for JSON bodies; registrations carry the photo as base64.
pub const JSON_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub json_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
            json_limit: JSON_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Unparseable
    /// values fall back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup("REGISTRATION_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup("REGISTRATION_PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(e) => warn!("ignoring REGISTRATION_PORT={:?}: {}", port, e),
            }
        }

        if let Some(flag) = lookup("REGISTRATION_OPEN_BROWSER") {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.open_browser = true,
                "0" | "false" | "no" => config.open_browser = false,
                other => warn!("ignoring REGISTRATION_OPEN_BROWSER={:?}", other),
            }
        }

        config
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
