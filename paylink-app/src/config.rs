//! Environment-backed settings for the paylink server.

use std::env;

/// Port the HTTP server binds when `PORT` is unset.
const DEFAULT_PORT: u16 = 8080;

/// Runtime settings, read once at startup.
pub struct Config {
    pub port: u16,
    pub database_url: String,
}

impl Config {
    /// Reads settings from the process environment.
    ///
    /// `DATABASE_URL` selects the backing store (`sqlite://...` or
    /// `postgres://...`, matching the enabled repo feature) and has no
    /// default. `PORT` is optional.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = parse_port(env::var("PORT").ok())?;

        let database_url = env::var("DATABASE_URL").map_err(|_| {
            anyhow::anyhow!("DATABASE_URL is not set; paylink-server cannot pick a store")
        })?;

        Ok(Self { port, database_url })
    }
}

fn parse_port(raw: Option<String>) -> anyhow::Result<u16> {
    match raw {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a number in 1-65535, got {raw:?}")),
        None => Ok(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn test_port_parses_explicit_value() {
        assert_eq!(parse_port(Some("3000".to_string())).unwrap(), 3000);
    }

    #[test]
    fn test_port_rejects_garbage() {
        assert!(parse_port(Some("not-a-port".to_string())).is_err());
        assert!(parse_port(Some("70000".to_string())).is_err());
    }
}
