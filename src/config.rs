// src/config.rs

use std::env;
use dotenvy::dotenv;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Directory receiving the daily rolling log file.
    pub log_dir: String,
    /// Optional JSON document used to populate the store at startup.
    pub seed_file: Option<String>,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let host = env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = parse_port(env::var("PORT").ok().as_deref());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        let seed_file = env::var("SEED_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty());

        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );

        Self {
            host,
            port,
            rust_log,
            log_dir,
            seed_file,
            cors_origins,
        }
    }

    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Port from the raw `PORT` value, 3000 when unset.
/// A value that is set but not a valid port aborts startup.
fn parse_port(raw: Option<&str>) -> u16 {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .expect("PORT must be a valid port number (0-65535)"),
        None => 3000,
    }
}

/// Splits a comma separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_trims_and_skips_blanks() {
        let origins = parse_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn default_origins_parse_to_two_entries() {
        assert_eq!(parse_origins(DEFAULT_CORS_ORIGINS).len(), 2);
    }

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None), 3000);
        assert_eq!(parse_port(Some(" 8080 ")), 8080);
    }

    #[test]
    #[should_panic(expected = "PORT must be a valid port number")]
    fn invalid_port_is_rejected() {
        parse_port(Some("eighty"));
    }

    #[test]
    #[should_panic(expected = "PORT must be a valid port number")]
    fn out_of_range_port_is_rejected() {
        parse_port(Some("70000"));
    }
}
