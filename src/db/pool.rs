//! SQLite connection wrapper (one connection per CLI invocation).

use rusqlite::{Connection, OpenFlags, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database file, creating it when missing. Only `init` does this.
    pub fn new(path: &str) -> Result<Self> {
        Self::with_foreign_keys(Connection::open(Path::new(path))?)
    }

    /// Open a database that must already exist.
    pub fn open_existing(path: &str) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        Self::with_foreign_keys(Connection::open_with_flags(Path::new(path), flags)?)
    }

    /// In-memory database, used by tests.
    pub fn in_memory() -> Result<Self> {
        Self::with_foreign_keys(Connection::open_in_memory()?)
    }

    // SQLite leaves foreign key enforcement off per connection
    fn with_foreign_keys(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self { conn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn open_existing_does_not_create_the_file() {
        let path = env::temp_dir().join("hrcore_pool_missing.sqlite");
        std::fs::remove_file(&path).ok();
        let path = path.to_string_lossy().to_string();

        assert!(DbPool::open_existing(&path).is_err());
        assert!(!Path::new(&path).exists());
    }
}
