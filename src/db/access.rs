//! Contract between the console core and whatever executes SQL.

use crate::errors::AppResult;
use crate::models::rowset::{RowSet, Value};

/// Result of one mutating statement.
///
/// `error` carries the driver's own message when there is one. A failure
/// without an error string means the statement ran but touched no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl ExecOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn no_rows() -> Self {
        Self {
            success: false,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

pub trait DataAccess {
    /// Run a read-only query. Returns either the rows or an error, never both.
    fn fetch(&mut self, sql: &str, params: &[Value]) -> AppResult<RowSet>;

    /// Run a mutating statement with positionally bound parameters.
    fn execute(&mut self, sql: &str, params: &[Value]) -> ExecOutcome;
}
