//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for department records.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes enforce `Department::validate()` before persistence.
//! - Repository APIs return `Validation` and `Unsaved` in addition to DB
//!   transport errors.

pub mod department_repo;
