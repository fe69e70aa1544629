//! Script orchestration.
//!
//! The runner loads a script from disk, feeds its statements through the
//! executor one at a time, and routes tabular outcomes through the CSV
//! renderer. Per-statement failures are reported and the run continues; the
//! summary line is emitted unconditionally once every statement has been
//! attempted.

use crate::csv::CsvArtifact;
use crate::db::DatabaseClient;
use crate::error::{Result, ScriptError};
use crate::script::executor::{ExecutionOutcome, StatementExecutor};
use crate::script::splitter::split_statements;
use std::fs;
use tracing::error;

/// Counts for one script run. Failed statements count as processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Source name the script was loaded from.
    pub source: String,

    /// Total statements attempted, including failed ones.
    pub executed: usize,

    /// Statements the service rejected.
    pub failed: usize,
}

impl RunSummary {
    fn empty(source: &str) -> Self {
        Self {
            source: source.to_string(),
            executed: 0,
            failed: 0,
        }
    }
}

/// Runs SQL scripts against a database client.
pub struct ScriptRunner<'a> {
    db: &'a dyn DatabaseClient,
}

impl<'a> ScriptRunner<'a> {
    /// Creates a new script runner over the given client.
    pub fn new(db: &'a dyn DatabaseClient) -> Self {
        Self { db }
    }

    /// Executes every statement in the named script file, in order.
    ///
    /// An unreadable or empty file is reported and yields a zero-statement
    /// summary. A failed statement is reported and the run continues with
    /// the next one; there is no abort and no retry.
    pub async fn run_script(&self, path: &str) -> RunSummary {
        let script = match load_script(path) {
            Ok(contents) => contents,
            Err(e) => {
                error!("{e}");
                return RunSummary::empty(path);
            }
        };

        let executor = StatementExecutor::new(self.db);
        let mut executed = 0;
        let mut failed = 0;

        for statement in split_statements(&script) {
            match executor.execute(&statement).await {
                ExecutionOutcome::CommandOk => {
                    println!("Statement executed successfully");
                }
                ExecutionOutcome::TabularOk { columns, rows } => {
                    self.persist_artifact(path, &columns, &rows);
                }
                ExecutionOutcome::Failed { message } => {
                    error!("SQL execution failed for statement:\n{statement}\nError: {message}");
                    failed += 1;
                }
            }
            executed += 1;
        }

        println!("Executed {executed} statements from {path}");
        RunSummary {
            source: path.to_string(),
            executed,
            failed,
        }
    }

    /// Executes the named file as one statement, without splitting.
    ///
    /// Used by "run a lone query file and capture its one result" flows.
    /// Tabular handling matches the batch path; command and failure outcomes
    /// produce a single status message. Returns `None` when the file is
    /// unreadable or empty.
    pub async fn run_file(&self, path: &str) -> Option<ExecutionOutcome> {
        let sql = match load_script(path) {
            Ok(contents) => contents,
            Err(e) => {
                error!("{e}");
                return None;
            }
        };

        let executor = StatementExecutor::new(self.db);
        let outcome = executor.execute(&sql).await;

        match &outcome {
            ExecutionOutcome::CommandOk => {
                println!("SQL script executed successfully!");
            }
            ExecutionOutcome::TabularOk { columns, rows } => {
                self.persist_artifact(path, columns, rows);
            }
            ExecutionOutcome::Failed { message } => {
                error!("SQL execution failed: {message}");
            }
        }

        Some(outcome)
    }

    /// Renders and writes a CSV artifact for a tabular outcome.
    ///
    /// A write failure loses that one artifact; it never aborts the run.
    fn persist_artifact(&self, script_path: &str, columns: &[String], rows: &[Vec<String>]) {
        let artifact = CsvArtifact::from_tabular(script_path, columns, rows);
        match artifact.write() {
            Ok(()) => println!("Query results saved to: {}", artifact.path.display()),
            Err(e) => error!("{e}"),
        }
    }
}

/// Loads a script file, treating unreadable and empty files alike as source
/// failures for the caller to report.
fn load_script(path: &str) -> Result<String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ScriptError::source(format!("Could not open SQL file: {path}: {e}")))?;
    if contents.is_empty() {
        return Err(ScriptError::source(format!(
            "No SQL script loaded from {path}"
        )));
    }
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ColumnInfo, MockDatabaseClient, QueryResult, Value};
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::path::Path;

    fn write_script(dir: &Path, name: &str, contents: &str) -> String {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_missing_file_yields_zero_statements() {
        let db = MockDatabaseClient::new();
        let runner = ScriptRunner::new(&db);

        let summary = runner.run_script("no_such_file.sql").await;

        assert_eq!(summary.executed, 0);
        assert_eq!(summary.failed, 0);
        assert!(db.executed().is_empty());
    }

    #[tokio::test]
    async fn test_empty_file_yields_zero_statements() {
        let dir = tempfile::tempdir().unwrap();
        let db = MockDatabaseClient::new();
        let runner = ScriptRunner::new(&db);
        let path = write_script(dir.path(), "empty.sql", "");

        let summary = runner.run_script(&path).await;

        assert_eq!(summary.executed, 0);
        assert!(db.executed().is_empty());
    }

    #[tokio::test]
    async fn test_statements_run_in_order_with_terminator() {
        let dir = tempfile::tempdir().unwrap();
        let db = MockDatabaseClient::new();
        let runner = ScriptRunner::new(&db);
        let path = write_script(
            dir.path(),
            "metadata.sql",
            "CREATE TABLE a (x int);\nCREATE TABLE b (y int);\nINSERT INTO a VALUES (1);\n",
        );

        let summary = runner.run_script(&path).await;

        assert_eq!(summary.executed, 3);
        assert_eq!(summary.failed, 0);
        assert_eq!(
            db.executed(),
            vec![
                "CREATE TABLE a (x int);",
                "CREATE TABLE b (y int);",
                "INSERT INTO a VALUES (1);"
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_run() {
        let dir = tempfile::tempdir().unwrap();
        let db = MockDatabaseClient::new();
        db.push_result(QueryResult::new());
        db.push_error("syntax error at or near \"BOOM\"");
        db.push_result(QueryResult::new());
        let runner = ScriptRunner::new(&db);
        let path = write_script(dir.path(), "batch.sql", "A;BOOM;C;");

        let summary = runner.run_script(&path).await;

        assert_eq!(summary.executed, 3);
        assert_eq!(summary.failed, 1);
        assert_eq!(db.executed(), vec!["A;", "BOOM;", "C;"]);
    }

    #[tokio::test]
    async fn test_tabular_statement_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let db = MockDatabaseClient::new();
        db.push_result(QueryResult::with_data(
            vec![ColumnInfo::new("id", "int4"), ColumnInfo::new("name", "text")],
            vec![vec![Value::Int(1), Value::String("Ana".to_string())]],
        ));
        let runner = ScriptRunner::new(&db);
        let path = write_script(dir.path(), "report.sql", "SELECT id, name FROM players;");

        let summary = runner.run_script(&path).await;

        assert_eq!(summary.executed, 1);
        let csv = fs::read_to_string(dir.path().join("report_result.csv")).unwrap();
        assert_eq!(csv, "id,name\n1,Ana\n");
    }

    #[tokio::test]
    async fn test_run_file_treats_whole_file_as_one_statement() {
        let dir = tempfile::tempdir().unwrap();
        let db = MockDatabaseClient::new();
        let runner = ScriptRunner::new(&db);
        let path = write_script(
            dir.path(),
            "join.sql",
            "SELECT *\nFROM a\nJOIN b ON a.x = b.y;\n",
        );

        let outcome = runner.run_file(&path).await;

        assert!(outcome.is_some());
        assert_eq!(db.executed().len(), 1);
        assert_eq!(db.executed()[0], "SELECT *\nFROM a\nJOIN b ON a.x = b.y;\n");
    }

    #[tokio::test]
    async fn test_run_file_missing_is_reported_not_executed() {
        let db = MockDatabaseClient::new();
        let runner = ScriptRunner::new(&db);

        let outcome = runner.run_file("no_such_file.sql").await;

        assert!(outcome.is_none());
        assert!(db.executed().is_empty());
    }
}
