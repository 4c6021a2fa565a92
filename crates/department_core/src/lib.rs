//! Core persistence logic for department records.
//! This crate is the single source of truth for department invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::department::{Department, DepartmentId, DepartmentValidationError};
pub use repo::department_repo::{
    DepartmentRepository, RepoError, RepoResult, SqliteDepartmentRepository,
};
pub use service::department_service::DepartmentService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
