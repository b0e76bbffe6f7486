pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod logging;
pub mod repositories;

pub use config::{Config, ConfigLoader, Settings};
pub use database::{create_all, Database};
pub use error::{ConfigError, Error, Result};
pub use logging::init_tracing;
