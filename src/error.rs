//! Error types for pgscript.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for pgscript operations.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Database connection errors (host unreachable, auth failed, etc.)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Statement execution errors (syntax errors, constraint violations, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Script source errors (file missing, unreadable, etc.)
    #[error("Source error: {0}")]
    Source(String),

    /// Output sink errors (CSV file cannot be created or written).
    #[error("Sink error: {0}")]
    Sink(String),

    /// Configuration errors (invalid config file, missing required fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScriptError {
    /// Creates a connection error with the given message.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a source error with the given message.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Creates a sink error with the given message.
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Connection(_) => "Connection Error",
            Self::Query(_) => "Query Error",
            Self::Source(_) => "Source Error",
            Self::Sink(_) => "Sink Error",
            Self::Config(_) => "Configuration Error",
        }
    }
}

/// Result type alias using ScriptError.
pub type Result<T> = std::result::Result<T, ScriptError>;
