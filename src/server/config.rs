use crate::server::error::config::ConfigError;

static DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    /// Valkey/Redis URL for the access cache. When unset the server falls
    /// back to an in-process cache.
    pub valkey_url: Option<String>,
    pub listen_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            valkey_url: std::env::var("VALKEY_URL").ok(),
            listen_address: std::env::var("LISTEN_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDRESS.to_string()),
        })
    }
}

fn require_env(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
