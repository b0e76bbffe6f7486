//! Create every declared table in the configured `DATABASE_URL`.
//!
//! Development helper only; use the `migration` crate for real deployments.
//!
//! ```text
//! cargo run -p algo-scripts --bin create_tables
//! ```

use std::process::ExitCode;

use anyhow::Result;
use shared::{create_all, init_tracing, ConfigLoader, Database};
use tracing::{error, info};

async fn run() -> Result<()> {
    let loader = ConfigLoader::from_env();
    let config = loader.load(None)?;
    init_tracing(&config.settings().log_level);

    info!(
        "create_tables {} ({}@{}), app_env={}",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_BRANCH"),
        env!("GIT_HASH"),
        config.settings().app_env
    );

    let database = Database::from_config(&config)?;
    let result = create_all(database.connection().await?).await;
    database.close().await?;
    result?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => {
            info!("All tables created successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // logging may not be initialised yet if config loading failed
            init_tracing("info");
            error!("Table creation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
