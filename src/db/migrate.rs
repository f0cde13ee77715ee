use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists. Applied migrations are recorded there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

// Departments and employees reference each other (manager / membership).
// SQLite accepts the forward reference at creation time.
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20261018_0001_create_hr_tables",
        description: "Created departments, positions and employees tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS departments (
            department_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            location      TEXT NOT NULL DEFAULT '',
            manager_id    INTEGER REFERENCES employees(employee_id) ON DELETE SET NULL
        );

        CREATE TABLE IF NOT EXISTS positions (
            position_id      INTEGER PRIMARY KEY AUTOINCREMENT,
            title            TEXT NOT NULL,
            salary_range_min REAL NOT NULL DEFAULT 0 CHECK(salary_range_min >= 0),
            salary_range_max REAL NOT NULL DEFAULT 0 CHECK(salary_range_max >= 0),
            department_id    INTEGER REFERENCES departments(department_id),
            CHECK(salary_range_min <= salary_range_max)
        );

        CREATE TABLE IF NOT EXISTS employees (
            employee_id   INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name    TEXT NOT NULL,
            last_name     TEXT NOT NULL,
            email         TEXT NOT NULL,
            hire_date     TEXT NOT NULL,
            department_id INTEGER REFERENCES departments(department_id),
            position_id   INTEGER REFERENCES positions(position_id)
        );
        "#,
    },
    Migration {
        version: "20261018_0002_add_lookup_indexes",
        description: "Added name/title lookup and foreign key indexes",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_departments_name ON departments(name);
        CREATE INDEX IF NOT EXISTS idx_positions_title ON positions(title);
        CREATE INDEX IF NOT EXISTS idx_positions_department ON positions(department_id);
        CREATE INDEX IF NOT EXISTS idx_employees_department ON employees(department_id);
        CREATE INDEX IF NOT EXISTS idx_employees_position ON employees(position_id);
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &mut Connection, m: &Migration) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![m.version, m.description],
    )?;
    tx.commit()
}

fn has_log_table(conn: &Connection) -> Result<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'log'",
            [],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Versions already recorded as applied, in application order.
/// Read-only: a database without a `log` table has none.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    if !has_log_table(conn)? {
        return Ok(Vec::new());
    }
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Public entry point: run all pending migrations. Returns how many ran.
///
/// Invoked by db::initialize::init_db() and `db --migrate`.
pub fn run_pending_migrations(conn: &mut Connection) -> AppResult<usize> {
    run_migrations(conn, MIGRATIONS)
}

fn run_migrations(conn: &mut Connection, migrations: &[Migration]) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut ran = 0;
    for m in migrations {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m).map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;
        success(format!("Migration applied: {} → {}", m.version, m.description));
        ran += 1;
    }

    Ok(ran)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_once() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert_eq!(run_pending_migrations(&mut conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&mut conn).unwrap(), 0);

        let versions = applied_versions(&conn).unwrap();
        assert_eq!(versions.len(), MIGRATIONS.len());
        assert_eq!(versions[0], "20261018_0001_create_hr_tables");
    }

    #[test]
    fn failed_migration_is_rolled_back_and_reported() {
        let mut conn = Connection::open_in_memory().unwrap();
        let broken = [Migration {
            version: "20261018_9999_broken",
            description: "never applies",
            sql: "CREATE TABLE half (id INTEGER); CREATE TABLE oops (",
        }];

        let err = run_migrations(&mut conn, &broken).unwrap_err();
        assert!(matches!(err, AppError::Migration(ref m) if m.starts_with("20261018_9999_broken")));

        assert!(applied_versions(&conn).unwrap().is_empty());
        let half: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE name = 'half'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(half, 0);
    }

    #[test]
    fn reading_versions_does_not_create_the_log_table() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(applied_versions(&conn).unwrap().is_empty());
        assert!(!has_log_table(&conn).unwrap());
    }

    #[test]
    fn salary_bounds_are_checked_by_the_schema() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&mut conn).unwrap();

        let err = conn
            .execute(
                "INSERT INTO positions (title, salary_range_min, salary_range_max) VALUES ('x', 10, 5)",
                [],
            )
            .unwrap_err();
        assert!(err.to_string().contains("CHECK constraint failed"));
    }
}
