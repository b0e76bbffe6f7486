use std::future::Future;
use std::pin::Pin;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, Schema, TransactionError, TransactionTrait,
};
use tokio::sync::OnceCell;
use tracing::info;

use crate::config::{mask_url_password, Config};
use crate::entity::{
    all_instruments_list, indicator_data, instrument_master, ledger_report, live_trades,
    trade_history, trade_log, trade_log_detail, trade_plan, users,
};
use crate::error::{Error, Result};

/// Owned handle to the application database.
///
/// The connection pool is opened on the first call to [`Database::connection`]
/// and reused for the lifetime of the handle.
pub struct Database {
    url: String,
    echo: bool,
    conn: OnceCell<DatabaseConnection>,
}

impl Database {
    pub fn new(url: &str, echo: bool) -> Result<Self> {
        if url.trim().is_empty() {
            return Err(Error::MissingDatabaseUrl);
        }
        Ok(Self {
            url: normalize_database_url(url.trim()),
            echo,
            conn: OnceCell::new(),
        })
    }

    /// Read `DATABASE_URL` / `DATABASE_ECHO` from the resolved configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings = config.settings();
        let url = settings
            .database_url
            .as_deref()
            .ok_or(Error::MissingDatabaseUrl)?;
        Self::new(url, settings.database_echo)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_connected(&self) -> bool {
        self.conn.initialized()
    }

    /// Shared connection pool, opened on first use.
    pub async fn connection(&self) -> std::result::Result<&DatabaseConnection, DbErr> {
        self.conn
            .get_or_try_init(|| get_db_connection(&self.url, self.echo))
            .await
    }

    pub async fn ping(&self) -> std::result::Result<(), DbErr> {
        self.connection().await?.ping().await
    }

    /// Start a transaction. Dropping it without `commit` rolls it back.
    pub async fn begin_session(&self) -> std::result::Result<DatabaseTransaction, DbErr> {
        self.connection().await?.begin().await
    }

    /// Run `f` inside a transaction: committed when `f` returns `Ok`, rolled
    /// back when it returns `Err`.
    pub async fn with_session<F, T, E>(&self, f: F) -> std::result::Result<T, TransactionError<E>>
    where
        F: for<'c> FnOnce(
                &'c DatabaseTransaction,
            ) -> Pin<Box<dyn Future<Output = std::result::Result<T, E>> + Send + 'c>>
            + Send,
        T: Send,
        E: std::fmt::Display + std::fmt::Debug + Send,
    {
        let conn = self
            .connection()
            .await
            .map_err(TransactionError::Connection)?;
        conn.transaction(f).await
    }

    /// Close the pool if it was ever opened.
    pub async fn close(self) -> std::result::Result<(), DbErr> {
        match self.conn.into_inner() {
            Some(conn) => conn.close().await,
            None => Ok(()),
        }
    }
}

async fn get_db_connection(
    database_url: &str,
    echo: bool,
) -> std::result::Result<DatabaseConnection, DbErr> {
    info!(
        "Connecting to database via Sea-ORM at: {}",
        mask_url_password(database_url)
    );
    let mut options = ConnectOptions::new(database_url.to_string());
    options.sqlx_logging(echo);
    // every connection to an in-memory SQLite database sees its own empty database
    if database_url.starts_with("sqlite") && database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }
    let db = SeaDatabase::connect(options).await?;
    info!("Connected to database ({:?})", db.get_database_backend());
    Ok(db)
}

/// Turn a SQLAlchemy-style URL into one sqlx accepts.
///
/// Driver suffixes are stripped (`postgresql+asyncpg://` becomes
/// `postgresql://`). For `sqlite+<driver>:///rel.db` the SQLAlchemy path rules
/// apply: three slashes mean a relative path, four an absolute one. File-backed
/// SQLite URLs without a `mode` get `mode=rwc` so a new database file is created.
pub fn normalize_database_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return with_sqlite_create_mode(url);
    };
    let normalized = match scheme.split_once('+') {
        Some(("sqlite", _driver)) => {
            // sqlx reads `sqlite://<path>` with the path taken verbatim
            let path = rest.strip_prefix('/').unwrap_or(rest);
            format!("sqlite://{path}")
        }
        Some((base, _driver)) => format!("{base}://{rest}"),
        None => url.to_string(),
    };
    with_sqlite_create_mode(&normalized)
}

fn with_sqlite_create_mode(url: &str) -> String {
    if !url.starts_with("sqlite:") || url.contains(":memory:") {
        return url.to_string();
    }
    match url.split_once('?') {
        Some((_, query)) if query.split('&').any(|p| p.starts_with("mode=")) => url.to_string(),
        Some(_) => format!("{url}&mode=rwc"),
        None => format!("{url}?mode=rwc"),
    }
}

/// Create every declared table and its indexes if they do not exist yet.
///
/// Development helper only. Production schemas go through the `migration` crate.
pub async fn create_all<C>(db: &C) -> std::result::Result<(), DbErr>
where
    C: ConnectionTrait,
{
    create_table(db, users::Entity).await?;
    create_table(db, all_instruments_list::Entity).await?;
    create_table(db, instrument_master::Entity).await?;
    create_table(db, trade_plan::Entity).await?;
    create_table(db, live_trades::Entity).await?;
    create_table(db, trade_log::Entity).await?;
    create_table(db, trade_log_detail::Entity).await?;
    create_table(db, trade_history::Entity).await?;
    create_table(db, ledger_report::Entity).await?;
    create_table(db, indicator_data::Entity).await?;
    Ok(())
}

async fn create_table<C, E>(db: &C, entity: E) -> std::result::Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;

    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    info!("Table {} ready", entity.table_name());
    Ok(())
}
