// src/config.rs

use std::env;
use std::time::Duration;

use dotenvy::dotenv;

use crate::errors::AppError;

/// Runtime configuration, loaded once at startup from the environment
/// (with an optional .env file for local runs).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub catalog_base_url: String,
    pub catalog_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::Config("Missing environment variable 'DATABASE_URL'".to_string()))?;

        let catalog_base_url =
            env::var("CATALOG_BASE_URL").unwrap_or_else(|_| "https://dummyjson.com".to_string());
        let catalog_timeout_secs = env::var("CATALOG_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|e| AppError::Config(format!("Invalid CATALOG_TIMEOUT_SECS: {}", e)))?;

        Ok(Self {
            server_host,
            server_port,
            database_url,
            catalog_base_url,
            catalog_timeout: Duration::from_secs(catalog_timeout_secs),
        })
    }
}
