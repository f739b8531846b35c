//! Server settings read from the environment.
//!
//! | Variable            | Default     |
//! |---------------------|-------------|
//! | `GRID_HOST`         | `127.0.0.1` |
//! | `GRID_PORT`         | `8080`      |
//! | `GRID_OPEN_BROWSER` | `true`      |
//!
//! Unparsable values are logged and replaced by the default.

use log::warn;
use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Open the grid in the default browser once the server is up.
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("GRID_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("GRID_PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("GRID_PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let open_browser = match lookup("GRID_OPEN_BROWSER") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!("GRID_OPEN_BROWSER '{}' is not a boolean, using true", raw);
                true
            }),
            None => defaults.open_browser,
        };

        Self {
            host,
            port,
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), Config::default());
        assert_eq!(Config::default().url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[
            ("GRID_HOST", "0.0.0.0"),
            ("GRID_PORT", "9000"),
            ("GRID_OPEN_BROWSER", "off"),
        ]);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 9000);
        assert!(!cfg.open_browser);
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = config(&[
            ("GRID_HOST", "  "),
            ("GRID_PORT", "eighty"),
            ("GRID_OPEN_BROWSER", "maybe"),
        ]);
        assert_eq!(cfg, Config::default());
    }
}
