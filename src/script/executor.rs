//! Statement execution and outcome classification.
//!
//! Sends one statement at a time to the database service and classifies the
//! reply as tabular, command, or failed. Failure is a normal outcome for the
//! caller to act on, never a propagated error.

use crate::db::{DatabaseClient, QueryResult};
use crate::error::ScriptError;
use tracing::debug;

/// The classified result of running one statement.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    /// Non-tabular success (INSERT, CREATE TABLE, ...).
    CommandOk,

    /// Tabular success: ordered column names and rows of stringified values.
    /// A zero-row SELECT is tabular.
    TabularOk {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },

    /// The service rejected the statement; carries its error text.
    Failed { message: String },
}

impl ExecutionOutcome {
    /// Returns true for the `Failed` variant.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Executes single statements against a database client.
///
/// Stateless between calls; the client handle is the only collaborator.
pub struct StatementExecutor<'a> {
    db: &'a dyn DatabaseClient,
}

impl<'a> StatementExecutor<'a> {
    /// Creates a new statement executor over the given client.
    pub fn new(db: &'a dyn DatabaseClient) -> Self {
        Self { db }
    }

    /// Executes one statement and classifies the reply.
    ///
    /// The statement is re-terminated with a trailing `;` before it is sent.
    pub async fn execute(&self, statement: &str) -> ExecutionOutcome {
        let sql = terminate(statement);
        debug!("Executing statement: {sql}");

        match self.db.execute_statement(&sql).await {
            Ok(result) if result.is_tabular() => classify_tabular(result),
            Ok(_) => ExecutionOutcome::CommandOk,
            Err(e) => ExecutionOutcome::Failed {
                message: error_text(e),
            },
        }
    }
}

/// Appends the statement delimiter unless one is already present.
fn terminate(statement: &str) -> String {
    let trimmed_end = statement.trim_end();
    if trimmed_end.ends_with(';') {
        statement.to_string()
    } else {
        format!("{statement};")
    }
}

/// Turns a tabular reply into ordered column names and stringified rows.
fn classify_tabular(result: QueryResult) -> ExecutionOutcome {
    let columns = result.columns.iter().map(|c| c.name.clone()).collect();
    let rows = result
        .rows
        .iter()
        .map(|row| row.iter().map(|value| value.to_raw_text()).collect())
        .collect();
    ExecutionOutcome::TabularOk { columns, rows }
}

/// Extracts the service's message text from a query error.
fn error_text(error: ScriptError) -> String {
    match error {
        ScriptError::Query(message) => message,
        other => other.to_string(),
    }
}
