//! The SQL script execution engine.
//!
//! Splits raw script text into statements, dispatches each to the database
//! service, classifies the reply, and routes tabular results to the CSV
//! renderer.

mod executor;
mod runner;
mod splitter;

pub use executor::{ExecutionOutcome, StatementExecutor};
pub use runner::{RunSummary, ScriptRunner};
pub use splitter::split_statements;
