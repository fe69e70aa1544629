//! Database abstraction layer for pgscript.
//!
//! Provides a trait-based interface for statement execution, allowing the
//! script engine to run against a real PostgreSQL connection or a test
//! double interchangeably.

mod mock;
mod postgres;
mod types;

pub use mock::{FailingDatabaseClient, MockDatabaseClient};
pub use postgres::PostgresClient;
pub use types::{ColumnInfo, QueryResult, Row, Value};

use crate::config::ConnectionConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Opens the process-wide database connection for the given configuration.
///
/// The returned handle is opened once at startup and reused for every
/// statement and every script until shutdown.
pub async fn connect(config: &ConnectionConfig) -> Result<Box<dyn DatabaseClient>> {
    let client = PostgresClient::connect(config).await?;
    Ok(Box::new(client))
}

/// Trait defining the interface for database clients.
///
/// All operations are async and return Results with ScriptError. Exactly one
/// statement is in flight at a time; callers await each execution before
/// issuing the next.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Executes a single SQL statement and returns the service's reply.
    ///
    /// A reply with result columns is a tabular success (even with zero
    /// rows); a reply without columns is a command success. Errors carry the
    /// service's message text.
    async fn execute_statement(&self, sql: &str) -> Result<QueryResult>;

    /// Closes the database connection.
    async fn close(&self) -> Result<()>;
}
