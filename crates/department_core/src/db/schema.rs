//! DDL for the `departments` table.
//!
//! # Invariants
//! - Both statements are safe to run any number of times.
//! - Column order matches `DEPARTMENT_SELECT_SQL` in the repository.

use crate::db::DbResult;
use rusqlite::Connection;

/// Table name backing department records.
pub const DEPARTMENTS_TABLE: &str = "departments";

/// Creates the `departments` table when it does not exist yet.
pub fn create_departments_table(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {DEPARTMENTS_TABLE} (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            location TEXT NOT NULL
        );"
    ))?;
    Ok(())
}

/// Drops the `departments` table when it exists.
pub fn drop_departments_table(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(&format!("DROP TABLE IF EXISTS {DEPARTMENTS_TABLE};"))?;
    Ok(())
}

/// Returns whether `table_name` exists in the main schema.
pub fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
