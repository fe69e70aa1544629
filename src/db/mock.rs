//! Mock database clients for testing.
//!
//! Provides in-memory implementations of `DatabaseClient` so the script
//! engine can be exercised without a real connection.

use super::{ColumnInfo, DatabaseClient, QueryResult, Value};
use crate::error::{Result, ScriptError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A mock database client that records executed statements and serves
/// scripted replies.
///
/// Replies queued with [`push_result`](Self::push_result) and
/// [`push_error`](Self::push_error) are consumed in order. When the queue is
/// empty, SELECT statements get a one-row tabular reply and everything else
/// gets a command reply.
pub struct MockDatabaseClient {
    replies: Mutex<VecDeque<Result<QueryResult>>>,
    executed: Mutex<Vec<String>>,
}

impl MockDatabaseClient {
    /// Creates a new mock database client with no scripted replies.
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            executed: Mutex::new(Vec::new()),
        }
    }

    /// Queues a successful reply for the next statement.
    pub fn push_result(&self, result: QueryResult) {
        self.replies.lock().unwrap().push_back(Ok(result));
    }

    /// Queues an error reply for the next statement.
    pub fn push_error(&self, message: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(ScriptError::query(message)));
    }

    /// Returns the statements executed so far, in order.
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }

    fn default_reply(sql: &str) -> QueryResult {
        if sql.trim_start().to_uppercase().starts_with("SELECT") {
            let columns = vec![ColumnInfo::new("result", "text")];
            let rows = vec![vec![Value::String(format!("Mock result for: {sql}"))]];
            QueryResult::with_data(columns, rows)
        } else {
            QueryResult::new()
        }
    }
}

impl Default for MockDatabaseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabaseClient for MockDatabaseClient {
    async fn execute_statement(&self, sql: &str) -> Result<QueryResult> {
        self.executed.lock().unwrap().push(sql.to_string());

        if let Some(reply) = self.replies.lock().unwrap().pop_front() {
            return reply;
        }

        Ok(Self::default_reply(sql))
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// A database client whose every statement fails with the same message.
pub struct FailingDatabaseClient {
    message: String,
}

impl FailingDatabaseClient {
    /// Creates a client that fails every statement with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl DatabaseClient for FailingDatabaseClient {
    async fn execute_statement(&self, _sql: &str) -> Result<QueryResult> {
        Err(ScriptError::query(self.message.clone()))
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_select() {
        let client = MockDatabaseClient::new();
        let result = client.execute_statement("SELECT 1;").await.unwrap();
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.columns.len(), 1);
        assert!(result.is_tabular());
    }

    #[tokio::test]
    async fn test_mock_insert() {
        let client = MockDatabaseClient::new();
        let result = client
            .execute_statement("INSERT INTO test VALUES (1);")
            .await
            .unwrap();
        assert!(result.rows.is_empty());
        assert!(!result.is_tabular());
    }

    #[tokio::test]
    async fn test_mock_records_statements_in_order() {
        let client = MockDatabaseClient::new();
        client.execute_statement("CREATE TABLE a (x int);").await.unwrap();
        client.execute_statement("SELECT * FROM a;").await.unwrap();
        assert_eq!(
            client.executed(),
            vec!["CREATE TABLE a (x int);", "SELECT * FROM a;"]
        );
    }

    #[tokio::test]
    async fn test_mock_scripted_replies() {
        let client = MockDatabaseClient::new();
        client.push_error("relation \"missing\" does not exist");
        client.push_result(QueryResult::new());

        assert!(client.execute_statement("SELECT 1;").await.is_err());
        assert!(client.execute_statement("SELECT 1;").await.is_ok());
    }

    #[tokio::test]
    async fn test_failing_client() {
        let client = FailingDatabaseClient::new("boom");
        let err = client.execute_statement("SELECT 1;").await.unwrap_err();
        assert_eq!(err.to_string(), "Query error: boom");
    }
}
