//! Turns row sets and panels into terminal output.

mod csv;
mod json;
mod table;

use crate::core::view::Panel;
use crate::errors::{AppError, AppResult};
use crate::models::rowset::RowSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(AppError::InvalidFormat(other.to_string())),
        }
    }
}

pub fn render_rowset(rows: &RowSet, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Table => Ok(table::render(rows)),
        OutputFormat::Json => json::render(rows),
        OutputFormat::Csv => csv::render(rows),
    }
}

/// Several panels at once. JSON becomes a single object keyed by panel
/// title; table and CSV print one titled section per panel.
pub fn render_panels(panels: &[Panel], format: OutputFormat) -> AppResult<String> {
    if format == OutputFormat::Json {
        return json::render_panels(panels);
    }

    let mut out = String::new();
    for panel in panels {
        out.push_str(&format!("== {} ==\n", panel.entity.title()));
        match &panel.content {
            Ok(rows) => out.push_str(&render_rowset(rows, format)?),
            Err(e) => out.push_str(&format!("error: {e}\n")),
        }
        out.push('\n');
    }
    Ok(out)
}
