//! Service configuration.
//!
//! Values come from command-line flags, falling back to environment
//! variables and then to defaults:
//!
//! - `PROJECT_REGISTRY_BIND`: HTTP bind address (default `0.0.0.0:8080`)
//! - `DATABASE_URL`: `PostgreSQL` URL; without it projects are kept in memory
//! - `PROJECT_REGISTRY_POOL_SIZE`: connection pool size (default `8`)
//! - `PROJECT_REGISTRY_LOG_LEVEL`: log filter when `RUST_LOG` is unset
//!   (default `info`)
//! - `PROJECT_REGISTRY_LOG_FORMAT`: `text` or `json` (default `text`)

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use thiserror::Error;

/// Output format for log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

/// Project registry service configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "project-registry")]
#[command(about = "Course project lifecycle and membership registry")]
pub struct RegistryConfig {
    /// HTTP bind address
    #[arg(long, env = "PROJECT_REGISTRY_BIND", default_value = "0.0.0.0:8080")]
    pub bind_address: SocketAddr,

    /// `PostgreSQL` connection URL; projects are kept in memory when unset
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections
    #[arg(long, env = "PROJECT_REGISTRY_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, env = "PROJECT_REGISTRY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "PROJECT_REGISTRY_LOG_FORMAT", value_enum, default_value_t)]
    pub log_format: LogFormat,
}

/// Errors raised by configuration checks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The pool would hold no connections.
    #[error("pool_size must be greater than 0")]
    EmptyPool,

    /// The database URL was set but blank.
    #[error("database_url must not be blank")]
    BlankDatabaseUrl,
}

impl RegistryConfig {
    /// Checks values that flag parsing alone cannot enforce.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if self
            .database_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            return Err(ConfigError::BlankDatabaseUrl);
        }
        Ok(())
    }
}
