use crate::core::view::Panel;
use crate::errors::{AppError, AppResult};
use crate::models::rowset::RowSet;
use serde_json::{Map, Value as Json, json};

pub(super) fn render(rows: &RowSet) -> AppResult<String> {
    let mut out = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Render(format!("JSON serialization error: {e}")))?;
    out.push('\n');
    Ok(out)
}

pub(super) fn render_panels(panels: &[Panel]) -> AppResult<String> {
    let mut map = Map::new();
    for panel in panels {
        let value = match &panel.content {
            Ok(rows) => serde_json::to_value(rows)
                .map_err(|e| AppError::Render(format!("JSON serialization error: {e}")))?,
            Err(e) => json!({ "error": e }),
        };
        map.insert(panel.entity.title().to_string(), value);
    }

    let mut out = serde_json::to_string_pretty(&Json::Object(map))
        .map_err(|e| AppError::Render(format!("JSON serialization error: {e}")))?;
    out.push('\n');
    Ok(out)
}
