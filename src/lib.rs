//! pgscript - An interactive PostgreSQL script runner with CSV export.
//!
//! This library exposes the core modules for use in integration tests.

pub mod config;
pub mod csv;
pub mod db;
pub mod error;
pub mod script;
