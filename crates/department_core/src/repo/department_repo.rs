//! Department repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `departments` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Department::validate()` before SQL mutations.
//! - Update/delete require a saved department; insert requires an unsaved one.
//! - Update/delete of a row that no longer exists succeed without effect.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::db::schema::{create_departments_table, drop_departments_table};
use crate::db::DbError;
use crate::model::department::{Department, DepartmentId, DepartmentValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEPARTMENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    location
FROM departments";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for department persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(DepartmentValidationError),
    Db(DbError),
    /// Update or delete attempted before the department was saved.
    Unsaved,
    /// Insert attempted on a department that already owns a row.
    AlreadyPersisted(DepartmentId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Unsaved => write!(f, "department has not been saved yet"),
            Self::AlreadyPersisted(id) => write!(f, "department already saved with id {id}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted department data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Unsaved | Self::AlreadyPersisted(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DepartmentValidationError> for RepoError {
    fn from(value: DepartmentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for department CRUD operations.
pub trait DepartmentRepository {
    /// Creates the backing table if absent.
    fn ensure_schema(&self) -> RepoResult<()>;
    /// Drops the backing table if present.
    fn drop_schema(&self) -> RepoResult<()>;
    /// Inserts an unsaved department and returns the generated id.
    fn insert_department(&self, department: &Department) -> RepoResult<DepartmentId>;
    /// Overwrites name/location of the row keyed by `department.id()`.
    ///
    /// Matching no row is not an error.
    fn update_department(&self, department: &Department) -> RepoResult<()>;
    /// Removes the row keyed by `department.id()`; a missing row is a no-op.
    fn delete_department(&self, department: &Department) -> RepoResult<()>;
    /// Returns every stored department ordered by id.
    fn list_departments(&self) -> RepoResult<Vec<Department>>;
    /// Returns the department stored under `id`, if any.
    fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
}

/// SQLite-backed department repository borrowing a caller-owned connection.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn ensure_schema(&self) -> RepoResult<()> {
        create_departments_table(self.conn)?;
        Ok(())
    }

    fn drop_schema(&self) -> RepoResult<()> {
        drop_departments_table(self.conn)?;
        Ok(())
    }

    fn insert_department(&self, department: &Department) -> RepoResult<DepartmentId> {
        if let Some(id) = department.id() {
            return Err(RepoError::AlreadyPersisted(id));
        }
        department.validate()?;

        self.conn.execute(
            "INSERT INTO departments (name, location) VALUES (?1, ?2);",
            params![department.name.as_str(), department.location.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_department(&self, department: &Department) -> RepoResult<()> {
        let id = department.id().ok_or(RepoError::Unsaved)?;
        department.validate()?;

        self.conn.execute(
            "UPDATE departments
             SET
                name = ?1,
                location = ?2
             WHERE id = ?3;",
            params![department.name.as_str(), department.location.as_str(), id],
        )?;

        Ok(())
    }

    fn delete_department(&self, department: &Department) -> RepoResult<()> {
        let id = department.id().ok_or(RepoError::Unsaved)?;

        self.conn
            .execute("DELETE FROM departments WHERE id = ?1;", [id])?;

        Ok(())
    }

    fn list_departments(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();

        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }

        Ok(departments)
    }

    fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_department_row(row)?));
        }

        Ok(None)
    }
}

fn parse_department_row(row: &Row<'_>) -> RepoResult<Department> {
    let id: DepartmentId = row.get("id")?;
    let name: String = row.get("name")?;
    let location: String = row.get("location")?;

    Department::with_id(id, name, location)
        .map_err(|err| RepoError::InvalidData(format!("row {id} in departments: {err}")))
}
