use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: String,
    pub data_path: String,
    pub categories: Vec<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
    EmptyCategoryList,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort(port) => {
                write!(f, "Invalid port number: {}", port)
            }
            ConfigError::EmptyCategoryList => {
                write!(f, "EXPENSE_CATEGORIES must contain at least one label")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("SERVER_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        let data_path = env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());

        // Validate port is a valid number
        if port.parse::<u16>().is_err() {
            return Err(ConfigError::InvalidPort(port));
        }

        // The category labels are presentation configuration; an explicit
        // but empty list is a configuration mistake, not "no categories".
        let categories = match env::var("EXPENSE_CATEGORIES") {
            Ok(raw) => {
                let labels: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|label| !label.is_empty())
                    .map(str::to_string)
                    .collect();
                if labels.is_empty() {
                    return Err(ConfigError::EmptyCategoryList);
                }
                labels
            }
            Err(_) => DEFAULT_CATEGORIES
                .iter()
                .map(|label| label.to_string())
                .collect(),
        };

        Ok(Config {
            host,
            port,
            data_path,
            categories,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
