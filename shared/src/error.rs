//! Error types for configuration and database initialisation.

use sea_orm::DbErr;
use thiserror::Error;

/// Raised while binding environment variables onto [`crate::config::Settings`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for setting {key}: {reason}")]
    InvalidSetting {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("DATABASE_URL not set in environment or config")]
    MissingDatabaseUrl,

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

pub type Result<T> = std::result::Result<T, Error>;
