use crate::errors::{AppError, AppResult};
use crate::models::rowset::RowSet;

/// Header row plus one record per row; NULL becomes an empty field.
pub(super) fn render(rows: &RowSet) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(&rows.columns)
        .map_err(|e| AppError::Render(format!("CSV write error: {e}")))?;

    for row in &rows.rows {
        wtr.write_record(row.iter().map(|v| v.to_string()))
            .map_err(|e| AppError::Render(format!("CSV write error: {e}")))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Render(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Render(format!("CSV encoding error: {e}")))
}
