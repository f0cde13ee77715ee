//! Unified application error type.
//! Infrastructure code (db, config, cli) returns AppError so failures reach
//! `main` through `?`. Form submissions never surface AppError directly:
//! the form controller folds every failure into a `Status`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database not found: {0} (run `hrcore init` first)")]
    DatabaseNotFound(String),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid role: {0} (expected admin, hr-manager or employee)")]
    InvalidRole(String),

    #[error("Invalid output format: {0} (expected table, json or csv)")]
    InvalidFormat(String),

    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid {field}: {value}")]
    InvalidNumber { field: String, value: String },

    #[error("{0} is not supported.")]
    Unsupported(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Rendering errors
    // ---------------------------
    #[error("Render error: {0}")]
    Render(String),

    // ---------------------------
    // Form submissions
    // ---------------------------
    #[error("{0}")]
    Rejected(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
