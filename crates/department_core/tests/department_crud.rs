use department_core::db::open_db_in_memory;
use department_core::{
    Department, DepartmentRepository, DepartmentService, DepartmentValidationError, RepoError,
    SqliteDepartmentRepository,
};
use rusqlite::Connection;

fn ready_conn() -> Connection {
    let conn = open_db_in_memory().unwrap();
    SqliteDepartmentRepository::new(&conn)
        .ensure_schema()
        .unwrap();
    conn
}

#[test]
fn create_persists_row_and_assigns_id() {
    let conn = ready_conn();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    let department = service.create("Engineering", "Building A").unwrap();
    assert!(department.id().is_some());

    let stored: i64 = conn
        .query_row("SELECT COUNT(*) FROM departments;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(stored, 1);
}

#[test]
fn save_assigns_generated_id_in_place() {
    let conn = ready_conn();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    let mut department = Department::new("Payroll", "Building B").unwrap();
    assert_eq!(department.id(), None);

    let id = service.save(&mut department).unwrap();
    assert_eq!(department.id(), Some(id));
}

#[test]
fn save_twice_is_rejected_and_keeps_id() {
    let conn = ready_conn();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    let mut department = service.create("Payroll", "Building B").unwrap();
    let id = department.id().unwrap();

    let err = service.save(&mut department).unwrap_err();
    assert!(matches!(err, RepoError::AlreadyPersisted(existing) if existing == id));
    assert_eq!(department.id(), Some(id));
    assert_eq!(service.get_all().unwrap().len(), 1);
}

#[test]
fn find_by_id_returns_equal_department() {
    let conn = ready_conn();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    let created = service.create("Engineering", "Building A").unwrap();
    let found = service.find_by_id(created.id().unwrap()).unwrap().unwrap();

    assert_eq!(found, created);
}

#[test]
fn find_by_id_returns_none_for_unknown_id() {
    let conn = ready_conn();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    assert!(service.find_by_id(42).unwrap().is_none());
}

#[test]
fn update_overwrites_name_and_location() {
    let conn = ready_conn();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    let mut department = service.create("Engineering", "Building A").unwrap();
    department.name = "Research".to_string();
    department.location = "Building C".to_string();
    service.update(&department).unwrap();

    let found = service.find_by_id(department.id().unwrap()).unwrap().unwrap();
    assert_eq!(found.name, "Research");
    assert_eq!(found.location, "Building C");
}

#[test]
fn update_and_delete_require_saved_department() {
    let conn = ready_conn();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    let unsaved = Department::new("Engineering", "Building A").unwrap();

    assert!(matches!(service.update(&unsaved), Err(RepoError::Unsaved)));
    assert!(matches!(service.delete(&unsaved), Err(RepoError::Unsaved)));
}

#[test]
fn update_rejects_blanked_fields() {
    let conn = ready_conn();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    let mut department = service.create("Engineering", "Building A").unwrap();
    department.location.clear();

    let err = service.update(&department).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(DepartmentValidationError::EmptyLocation)
    ));

    let stored = service.find_by_id(department.id().unwrap()).unwrap().unwrap();
    assert_eq!(stored.location, "Building A");
}

#[test]
fn delete_removes_row() {
    let conn = ready_conn();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    let department = service.create("Engineering", "Building A").unwrap();
    let id = department.id().unwrap();
    service.delete(&department).unwrap();

    assert!(service.find_by_id(id).unwrap().is_none());
    assert_eq!(department.id(), Some(id));
}

#[test]
fn update_and_delete_of_removed_row_are_no_ops() {
    let conn = ready_conn();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    let mut department = service.create("Engineering", "Building A").unwrap();
    let kept = service.create("Payroll", "Building B").unwrap();
    service.delete(&department).unwrap();

    service.delete(&department).unwrap();
    department.name = "Research".to_string();
    service.update(&department).unwrap();

    assert_eq!(service.get_all().unwrap(), vec![kept]);
}

#[test]
fn get_all_returns_whitespace_fields_unchanged() {
    let conn = ready_conn();
    conn.execute(
        "INSERT INTO departments (name, location) VALUES (' ', 'Building B'), ('Engineering', 'Building A');",
        [],
    )
    .unwrap();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    let all = service.get_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, " ");
    assert_eq!(all[1].name, "Engineering");
}

#[test]
fn get_all_returns_every_department_in_id_order() {
    let conn = ready_conn();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    let inputs = [
        ("Engineering", "Building A"),
        ("Payroll", "Building B"),
        ("Research", "Building C"),
    ];
    for (name, location) in inputs {
        service.create(name, location).unwrap();
    }

    let all = service.get_all().unwrap();
    assert_eq!(all.len(), inputs.len());
    for (department, (name, location)) in all.iter().zip(inputs) {
        assert_eq!(department.name, name);
        assert_eq!(department.location, location);
    }
    assert!(all.windows(2).all(|pair| pair[0].id() < pair[1].id()));
}

#[test]
fn get_all_on_empty_table_is_empty() {
    let conn = ready_conn();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    assert!(service.get_all().unwrap().is_empty());
}

#[test]
fn read_rejects_persisted_blank_name() {
    let conn = ready_conn();
    conn.execute(
        "INSERT INTO departments (name, location) VALUES ('', 'Building A');",
        [],
    )
    .unwrap();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    let err = service.get_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn operations_without_schema_surface_storage_errors() {
    let conn = open_db_in_memory().unwrap();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    let err = service.create("Engineering", "Building A").unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn drop_schema_removes_rows_and_ensure_schema_recreates_empty_table() {
    let conn = ready_conn();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    service.create("Engineering", "Building A").unwrap();
    service.drop_schema().unwrap();
    service.drop_schema().unwrap();
    service.ensure_schema().unwrap();
    service.ensure_schema().unwrap();

    assert!(service.get_all().unwrap().is_empty());
}

#[test]
fn create_rejects_blank_input_without_touching_storage() {
    let conn = ready_conn();
    let service = DepartmentService::new(SqliteDepartmentRepository::new(&conn));

    let err = service.create("", "Building A").unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(DepartmentValidationError::EmptyName)
    ));
    assert!(service.get_all().unwrap().is_empty());
}
