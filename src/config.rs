//! Application configuration management.
//!
//! Both services read their settings from environment variables. Each service
//! uses its own prefix (`EXHIBITIONS_` or `COMPONENTS_`) so the two can share a
//! single `.env` file without stepping on each other.

use serde::Deserialize;

use crate::app::Service;

/// Raw settings as they appear in the environment (prefix stripped).
///
/// Everything is optional here; defaults depend on which service is starting
/// and are filled in by [`Config::resolve`].
#[derive(Debug, Deserialize)]
struct RawConfig {
    database_url: Option<String>,
    server_host: Option<String>,
    server_port: Option<u16>,

    #[serde(default = "default_max_connections")]
    max_connections: u32,
}

/// Default connection cap for the SQLite pool.
fn default_max_connections() -> u32 {
    5
}

/// Resolved configuration for one service.
///
/// # Environment Variables
///
/// With `<P>` being `EXHIBITIONS` or `COMPONENTS`:
///
/// - `<P>_DATABASE_URL` (optional): SQLite URL, defaults to `sqlite://<table>.db`
/// - `<P>_SERVER_HOST` (optional): bind address, defaults to `0.0.0.0`
/// - `<P>_SERVER_PORT` (optional): defaults to 5000 for exhibitions, 5001 for components
/// - `<P>_MAX_CONNECTIONS` (optional): pool size, defaults to 5
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
}

impl Config {
    /// Load configuration for `service` from the process environment.
    ///
    /// A `.env` file is loaded first if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed into
    /// its expected type (e.g. a non-numeric port).
    pub fn from_env(service: Service) -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        let raw = envy::prefixed(service.env_prefix()).from_env::<RawConfig>()?;
        Ok(Self::resolve(service, raw))
    }

    /// Load configuration for `service` from an explicit list of variables.
    pub fn from_vars<I>(service: Service, vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let raw: RawConfig = envy::prefixed(service.env_prefix()).from_iter(vars)?;
        Ok(Self::resolve(service, raw))
    }

    fn resolve(service: Service, raw: RawConfig) -> Self {
        Self {
            database_url: raw
                .database_url
                .unwrap_or_else(|| format!("sqlite://{}.db", service.table())),
            server_host: raw.server_host.unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: raw.server_port.unwrap_or(service.default_port()),
            max_connections: raw.max_connections,
        }
    }

    /// Socket address string the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
