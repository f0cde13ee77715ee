use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::models::entity::Entity;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Row count per HR table, in panel order.
pub fn table_counts(pool: &DbPool) -> rusqlite::Result<Vec<(Entity, i64)>> {
    let mut out = Vec::with_capacity(Entity::ALL.len());
    for entity in Entity::ALL {
        // table names come from a fixed enum, never from user input
        let sql = format!("SELECT COUNT(*) FROM {}", entity.table());
        let count: i64 = pool.conn.query_row(&sql, [], |row| row.get(0))?;
        out.push((entity, count));
    }
    Ok(out)
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    let schema = applied_versions(&pool.conn)?
        .pop()
        .unwrap_or_else(|| format!("{GREY}none{RESET}"));
    println!("{}• Schema:{} {}", CYAN, RESET, schema);

    //
    // 2) ROWS PER TABLE
    //
    println!("{}• Rows:{}", CYAN, RESET);
    for (entity, count) in table_counts(pool)? {
        println!("    {:<12} {}{}{}", entity.title(), GREEN, count, RESET);
    }

    //
    // 3) HIRE DATE RANGE
    //
    let first_hire: Option<String> = pool
        .conn
        .query_row(
            "SELECT hire_date FROM employees ORDER BY hire_date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_hire: Option<String> = pool
        .conn
        .query_row(
            "SELECT hire_date FROM employees ORDER BY hire_date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!("{}• Hire dates:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first_hire.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last_hire.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 4) UNRESOLVED REFERENCES
    //
    let orphans: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM employees WHERE department_id IS NULL OR position_id IS NULL",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Employees without department or position:{} {}",
        CYAN, RESET, orphans
    );

    println!();
    Ok(())
}
