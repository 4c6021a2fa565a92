//! Department use-case service.
//!
//! # Responsibility
//! - Provide the record-level operations callers use: save, create,
//!   update, delete, get-all, find-by-id and schema setup/teardown.
//! - Write generated ids back into the caller's `Department`.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Log events carry ids and counts only, never names or locations.

use crate::model::department::{Department, DepartmentId};
use crate::repo::department_repo::{DepartmentRepository, RepoResult};
use log::{debug, info};

/// Use-case service wrapper for department CRUD operations.
pub struct DepartmentService<R: DepartmentRepository> {
    repo: R,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates the `departments` table if it is missing.
    pub fn ensure_schema(&self) -> RepoResult<()> {
        self.repo.ensure_schema()?;
        info!("event=schema_ensure module=service status=ok table=departments");
        Ok(())
    }

    /// Drops the `departments` table if it exists.
    pub fn drop_schema(&self) -> RepoResult<()> {
        self.repo.drop_schema()?;
        info!("event=schema_drop module=service status=ok table=departments");
        Ok(())
    }

    /// Inserts `department` and stores the generated key in its `id`.
    ///
    /// # Errors
    /// - `RepoError::AlreadyPersisted` when `department` already has an id.
    /// - `RepoError::Validation` when fields were blanked after construction.
    pub fn save(&self, department: &mut Department) -> RepoResult<DepartmentId> {
        let id = self.repo.insert_department(department)?;
        department.assign_id(id);
        debug!("event=department_save module=service status=ok id={id}");
        Ok(id)
    }

    /// Constructs and saves a department in one step.
    pub fn create(
        &self,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> RepoResult<Department> {
        let mut department = Department::new(name, location)?;
        self.save(&mut department)?;
        Ok(department)
    }

    /// Pushes the current name/location of a saved department to storage.
    ///
    /// Returns `RepoError::Unsaved` when `department.id()` is `None`.
    pub fn update(&self, department: &Department) -> RepoResult<()> {
        self.repo.update_department(department)?;
        debug!(
            "event=department_update module=service status=ok id={}",
            department.id().unwrap_or_default()
        );
        Ok(())
    }

    /// Removes the row backing a saved department.
    ///
    /// The in-memory value keeps its id; it simply no longer has a row.
    pub fn delete(&self, department: &Department) -> RepoResult<()> {
        self.repo.delete_department(department)?;
        debug!(
            "event=department_delete module=service status=ok id={}",
            department.id().unwrap_or_default()
        );
        Ok(())
    }

    /// Returns every stored department ordered by id.
    pub fn get_all(&self) -> RepoResult<Vec<Department>> {
        let departments = self.repo.list_departments()?;
        debug!(
            "event=department_list module=service status=ok count={}",
            departments.len()
        );
        Ok(departments)
    }

    /// Looks up one department by primary key.
    pub fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        self.repo.get_department(id)
    }
}
