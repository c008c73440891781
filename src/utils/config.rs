use std::env;
use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("WORKERS must be a positive integer, got {0:?}")]
    InvalidWorkers(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_address: String,
    pub workers: usize,
}

impl AppConfig {
    /// Reads `BIND_ADDRESS` and `WORKERS` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let workers = match lookup("WORKERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidWorkers(raw)),
            },
            None => num_cpus::get(),
        };

        Ok(AppConfig { bind_address, workers })
    }
}
