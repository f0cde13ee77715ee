//! SQLite-backed implementation of the data access contract.

use crate::db::access::{DataAccess, ExecOutcome};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::rowset::{RowSet, Value};
use rusqlite::params_from_iter;
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(SqlValue::Null),
            Value::Integer(i) => ToSqlOutput::Owned(SqlValue::Integer(*i)),
            Value::Real(r) => ToSqlOutput::Owned(SqlValue::Real(*r)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

fn cell(v: ValueRef<'_>) -> Value {
    match v {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Text(format!("<{} bytes>", b.len())),
    }
}

impl DataAccess for DbPool {
    fn fetch(&mut self, sql: &str, params: &[Value]) -> AppResult<RowSet> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let mut out = RowSet::new(columns);
        let mut rows = stmt.query(params_from_iter(params.iter()))?;

        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(width);
            for i in 0..width {
                values.push(cell(row.get_ref(i)?));
            }
            out.rows.push(values);
        }

        Ok(out)
    }

    /// Zero affected rows is reported as a failure without a driver message.
    fn execute(&mut self, sql: &str, params: &[Value]) -> ExecOutcome {
        match self.conn.execute(sql, params_from_iter(params.iter())) {
            Ok(0) => ExecOutcome::no_rows(),
            Ok(_) => ExecOutcome::ok(),
            Err(e) => ExecOutcome::failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        pool.conn
            .execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT, score REAL);")
            .unwrap();
        pool
    }

    #[test]
    fn fetch_preserves_column_names_and_types() {
        let mut pool = pool();
        pool.conn
            .execute("INSERT INTO t (name, score) VALUES ('a', 1.5), (NULL, NULL)", [])
            .unwrap();

        let rs = pool
            .fetch("SELECT id, name AS label, score FROM t ORDER BY id", &[])
            .unwrap();

        assert_eq!(rs.columns, vec!["id", "label", "score"]);
        assert_eq!(rs.rows[0], vec![Value::Integer(1), Value::from("a"), Value::Real(1.5)]);
        assert_eq!(rs.rows[1], vec![Value::Integer(2), Value::Null, Value::Null]);
    }

    #[test]
    fn fetch_reports_errors() {
        let mut pool = pool();
        assert!(pool.fetch("SELECT * FROM missing", &[]).is_err());
    }

    #[test]
    fn execute_binds_parameters_positionally() {
        let mut pool = pool();
        let out = pool.execute(
            "INSERT INTO t (name, score) VALUES (?1, ?2)",
            &[Value::from("x'); DROP TABLE t; --"), Value::Real(2.0)],
        );
        assert_eq!(out, ExecOutcome::ok());

        let rs = pool.fetch("SELECT name FROM t", &[]).unwrap();
        assert_eq!(rs.get(0, "name").and_then(Value::as_str), Some("x'); DROP TABLE t; --"));
    }

    #[test]
    fn execute_touching_no_rows_is_a_silent_failure() {
        let mut pool = pool();
        let out = pool.execute("DELETE FROM t WHERE id = ?1", &[Value::Integer(42)]);
        assert_eq!(out, ExecOutcome::no_rows());
    }

    #[test]
    fn execute_surfaces_driver_message() {
        let mut pool = pool();
        let out = pool.execute("INSERT INTO nope VALUES (1)", &[]);
        assert!(!out.success);
        assert!(out.error.unwrap().contains("no such table"));
    }
}
