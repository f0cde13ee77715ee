use crate::models::rowset::RowSet;
use crate::utils::colors::{GREY, RESET};
use crate::utils::table::Table;

pub(super) fn render(rows: &RowSet) -> String {
    if rows.is_empty() {
        return format!("{GREY}(no rows){RESET}\n");
    }

    let mut table = Table::with_headers(&rows.columns);
    for row in &rows.rows {
        table.add_row(row.iter().map(|v| v.to_string()).collect());
    }
    table.render()
}
