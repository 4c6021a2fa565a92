//! Domain model for department records.
//!
//! # Responsibility
//! - Define the data structures used by repository and service layers.
//!
//! # Invariants
//! - A department is identified by its storage-assigned `DepartmentId`.
//! - Deletion is a hard delete; the in-memory value is left untouched.

pub mod department;
