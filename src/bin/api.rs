//! Taskboard API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use taskboard::api::{self, ApiError, Config, LogFormat};
use taskboard::db::{Database, DbError, PoolConfig, SqliteDatabase};
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(taskboard::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(taskboard::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(taskboard::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser, Debug)]
#[command(name = "taskboard-api")]
#[command(author, version, about = "Taskboard API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, env = "TASKBOARD_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "TASKBOARD_PORT", default_value = "8080")]
    port: u16,

    /// SQLite database file, created if missing
    #[arg(long, env = "TASKBOARD_DB", default_value = "taskboard.db")]
    db: PathBuf,

    /// Maximum pooled database connections
    #[arg(long, env = "TASKBOARD_MAX_CONNECTIONS", default_value = "10")]
    max_connections: u32,

    /// Database connections kept open while idle
    #[arg(long, env = "TASKBOARD_MIN_CONNECTIONS", default_value = "1")]
    min_connections: u32,

    /// Log output format
    #[arg(long, env = "TASKBOARD_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

impl Cli {
    fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            path: self.db.clone(),
            max_connections: self.max_connections,
            min_connections: self.min_connections.min(self.max_connections),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    api::init_tracing(cli.log_format);

    let pool = cli.pool_config();

    // Ensure parent directory exists
    if let Some(parent) = pool.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::connect(&pool).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    info!(path = %pool.path.display(), "database ready");

    // Pass the abstract Database to the API layer
    api::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        db,
    )
    .await?;

    Ok(())
}
