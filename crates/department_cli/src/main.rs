//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `department_core` linkage from a standalone executable.
//! - Run the department record operations against a real connection.
//!
//! Usage: `department_cli [db_path] [log_dir]`. Without `db_path` an
//! in-memory database is used; without `log_dir` file logging stays off.

use department_core::db::{open_db, open_db_in_memory};
use department_core::{
    default_log_level, init_logging, DepartmentService, SqliteDepartmentRepository,
};
use std::error::Error;

const SEED_NAME: &str = "Engineering";
const SEED_LOCATION: &str = "Building A";

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let db_path = args.next();
    let log_dir = args.next();

    if let Some(log_dir) = log_dir.as_deref() {
        init_logging(default_log_level(), log_dir)?;
    }

    println!("department_core ping={}", department_core::ping());
    println!("department_core version={}", department_core::core_version());

    let conn = match db_path.as_deref() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));
    service.ensure_schema()?;

    let mut departments = service.get_all()?;
    if departments.is_empty() {
        departments.push(service.create(SEED_NAME, SEED_LOCATION)?);
    }

    println!("departments count={}", departments.len());
    for department in &departments {
        println!("{} {}", department.id().unwrap_or_default(), department);
    }

    Ok(())
}
