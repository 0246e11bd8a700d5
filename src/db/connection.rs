use rusqlite::Connection;
use std::cell::RefCell;
use std::fs;

use crate::errors::{DeskError, DeskResult};

// Thread-local connection slot, keyed by path so two handles on the
// same thread never share a connection to the wrong file.
thread_local! {
    static DB_CONN: RefCell<Option<(String, Connection)>> = RefCell::new(None);
}

#[derive(Clone)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Provides a mutable connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> DeskResult<T>
    where
        F: FnOnce(&mut Connection) -> DeskResult<T>,
    {
        let inner_result = DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let stale = match slot.as_ref() {
                    Some((path, _)) => path != &self.path,
                    None => true,
                };
                if stale {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| DeskError::DbError(format!("Open DB failed: {e}")))?;
                    *slot = Some((self.path.clone(), conn));
                }
                let (_, conn) = slot.as_mut().unwrap();
                f(conn)
            })
            .map_err(|_| DeskError::InternalError)?;
        inner_result
    }
}

/// Initialize database from a SQL schema file
pub fn init_db(db: &Database, schema_path: &str) -> DeskResult<()> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| DeskError::DbError(format!("Failed to read schema file: {e}")))?;

    db.with_conn(|conn| {
        conn.execute_batch(&schema_sql)
            .map_err(|e| DeskError::DbError(format!("Failed to apply schema: {e}")))?;
        Ok(())
    })?;

    println!("Database initialized from {}", schema_path);
    Ok(())
}
