//! Department domain model.
//!
//! # Responsibility
//! - Define the in-memory shape of one department record.
//! - Enforce non-empty `name`/`location` at every construction path.
//!
//! # Invariants
//! - `name` and `location` are non-empty after construction.
//! - `id` is `None` until storage assigns a primary key, then never changes.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Storage-assigned primary key of a department row.
pub type DepartmentId = i64;

/// Validation failures for department construction and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentValidationError {
    EmptyName,
    EmptyLocation,
}

impl Display for DepartmentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "department name must not be empty"),
            Self::EmptyLocation => write!(f, "department location must not be empty"),
        }
    }
}

impl Error for DepartmentValidationError {}

/// One department, persisted or not.
///
/// `name` and `location` are public so callers can edit them before an
/// update; repository write paths re-run [`Department::validate`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DepartmentWire")]
pub struct Department {
    id: Option<DepartmentId>,
    pub name: String,
    pub location: String,
}

impl Department {
    /// Creates an unsaved department.
    ///
    /// # Errors
    /// - `EmptyName` / `EmptyLocation` when either field is empty.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, DepartmentValidationError> {
        Self::build(None, name.into(), location.into())
    }

    /// Creates a department that already corresponds to row `id`.
    ///
    /// Used when materializing rows read back from storage.
    pub fn with_id(
        id: DepartmentId,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, DepartmentValidationError> {
        Self::build(Some(id), name.into(), location.into())
    }

    fn build(
        id: Option<DepartmentId>,
        name: String,
        location: String,
    ) -> Result<Self, DepartmentValidationError> {
        let department = Self { id, name, location };
        department.validate()?;
        Ok(department)
    }

    /// Primary key, or `None` while unsaved.
    pub fn id(&self) -> Option<DepartmentId> {
        self.id
    }

    /// Returns whether this department has been assigned a row id.
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    /// Checks field invariants.
    pub fn validate(&self) -> Result<(), DepartmentValidationError> {
        if self.name.is_empty() {
            return Err(DepartmentValidationError::EmptyName);
        }
        if self.location.is_empty() {
            return Err(DepartmentValidationError::EmptyLocation);
        }
        Ok(())
    }

    /// Records the key generated by an insert.
    ///
    /// Only the persistence layer calls this, and only on unsaved values.
    pub(crate) fn assign_id(&mut self, id: DepartmentId) {
        debug_assert!(self.id.is_none(), "department id is immutable once set");
        self.id = Some(id);
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Department in {}", self.name, self.location)
    }
}

/// Renders `<Department {id}: {name}, {location}>`, with `None` for unsaved.
impl Debug for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Department {id}: {}, {}>", self.name, self.location),
            None => write!(f, "<Department None: {}, {}>", self.name, self.location),
        }
    }
}

#[derive(Deserialize)]
struct DepartmentWire {
    #[serde(default)]
    id: Option<DepartmentId>,
    name: String,
    location: String,
}

impl TryFrom<DepartmentWire> for Department {
    type Error = DepartmentValidationError;

    fn try_from(value: DepartmentWire) -> Result<Self, Self::Error> {
        Self::build(value.id, value.name, value.location)
    }
}
