//! SQLite database connection and migration management.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::info;

use super::attachment::SqliteAttachmentRepository;
use super::comment::SqliteCommentRepository;
use super::task::SqliteTaskRepository;
use super::user::SqliteUserRepository;
use crate::db::{Database, DbError, DbResult};

// Embed migrations from data/sql/sqlite/ at compile time
static MIGRATOR: Migrator = sqlx::migrate!("./data/sql/sqlite");

/// Connection pool settings.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Database file path. Created if missing.
    pub path: PathBuf,
    /// Upper bound on open connections.
    pub max_connections: u32,
    /// Connections kept open while idle.
    pub min_connections: u32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("taskboard.db"),
            max_connections: 10,
            min_connections: 1,
        }
    }
}

/// SQLite database implementation.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open a pooled database described by `config`.
    pub async fn connect(config: &PoolConfig) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        info!(
            path = %config.path.display(),
            max_connections = config.max_connections,
            "database pool opened"
        );
        Ok(Self { pool })
    }

    /// Open a database at the given path with default pool settings.
    pub async fn open(path: impl Into<PathBuf>) -> DbResult<Self> {
        Self::connect(&PoolConfig {
            path: path.into(),
            ..PoolConfig::default()
        })
        .await
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Every SQLite in-memory connection is a separate database, so the pool
    /// holds exactly one connection and never recycles it.
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Access the underlying pool.
    ///
    /// This is useful for testing and advanced operations that need
    /// direct database access.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl Database for SqliteDatabase {
    type Tasks<'a> = SqliteTaskRepository<'a>;
    type Users<'a> = SqliteUserRepository<'a>;
    type Comments<'a> = SqliteCommentRepository<'a>;
    type Attachments<'a> = SqliteAttachmentRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })?;

        info!("database migrations complete");
        Ok(())
    }

    fn tasks(&self) -> Self::Tasks<'_> {
        SqliteTaskRepository::new(&self.pool)
    }

    fn users(&self) -> Self::Users<'_> {
        SqliteUserRepository::new(&self.pool)
    }

    fn comments(&self) -> Self::Comments<'_> {
        SqliteCommentRepository::new(&self.pool)
    }

    fn attachments(&self) -> Self::Attachments<'_> {
        SqliteAttachmentRepository::new(&self.pool)
    }
}
